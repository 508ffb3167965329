//! The three depth-first orders a tree can be walked in. None of them recurse, so they're safe on
//! degenerate trees.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::tree::Node;

/// Where the "visit node" step falls relative to the two subtrees.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Node, left, right.
    PreOrder,
    /// Left, node, right.
    InOrder,
    /// Left, right, node.
    PostOrder,
}

impl Order {
    /// Every order, in the order they're usually listed.
    pub const ALL: [Order; 3] = [Order::PreOrder, Order::InOrder, Order::PostOrder];
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Order::PreOrder => "pre-order",
            Order::InOrder => "in-order",
            Order::PostOrder => "post-order",
        })
    }
}

impl FromStr for Order {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pre" | "preorder" | "pre-order" => Ok(Order::PreOrder),
            "in" | "inorder" | "in-order" => Ok(Order::InOrder),
            "post" | "postorder" | "post-order" => Ok(Order::PostOrder),
            _ => Err(Error::InvalidInput(format!("unknown traversal order: {}", s))),
        }
    }
}

pub(crate) fn pre_order<K>(root: Option<&Node<K>>, len: usize) -> Vec<&K> {
    let mut keys = Vec::with_capacity(len);
    let mut stack: Vec<&Node<K>> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        keys.push(node.key());
        // Right goes on first so left comes off first.
        stack.extend(node.right());
        stack.extend(node.left());
    }
    keys
}

/// Walks node, right, left and reverses the result.
pub(crate) fn post_order<K>(root: Option<&Node<K>>, len: usize) -> Vec<&K> {
    let mut keys = Vec::with_capacity(len);
    let mut stack: Vec<&Node<K>> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        keys.push(node.key());
        stack.extend(node.left());
        stack.extend(node.right());
    }
    keys.reverse();
    keys
}

/// An in-order iterator over the keys of a [`Tree`][crate::tree::Tree].
pub struct Iter<'a, K> {
    /// The left spine still to be visited. The top is the next key out.
    stack: Vec<&'a Node<K>>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(node.key())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}
