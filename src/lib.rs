//! This crate is the engine behind a Binary Search Tree (BST) visualizer: the tree itself, plus
//! the small command layer a visualizer drives it with.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key
//! and will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). The [`tree::Tree`] here never rebalances, so
//! inserting sorted keys builds a chain whose height is the number of keys. That's exactly what a
//! visualizer wants to show. BSTs also naturally support sorted iteration by visiting the
//! left subtree, then the subtree root, then the right subtree.
//!
//! ## Layers
//!
//! - [`tree`], [`traversal`] and [`search`] are the engine. Outcomes are `bool`s.
//! - [`command`] and [`session`] turn user input into engine calls and report typed
//!   [`error::Error`]s.
//! - [`config`] holds the animation pacing, which never affects the tree.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod command;
pub mod config;
pub mod error;
pub mod search;
pub mod session;
pub mod traversal;
pub mod tree;

pub use error::{Error, Result};
pub use tree::Tree;
