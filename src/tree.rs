//! The mutable BST engine. Each `Node` exclusively owns its children through
//! `Box`ed links and nothing points back up the tree, so every operation is a
//! walk down from the root.
//!
//! # Examples
//!
//! ```
//! use bst::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.find(&1));
//!
//! assert!(tree.insert(1));
//! assert!(tree.find(&1));
//!
//! // Duplicates are rejected rather than overwritten.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! // Deleting reports whether the key was there.
//! assert!(tree.delete(&1));
//! assert!(!tree.delete(&1));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::search::{Descent, Search};
use crate::traversal::{self, Iter, Order};

pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// An unbalanced Binary Search Tree of unique keys.
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        release(self.root.take());
    }
}

impl<K> Clone for Tree<K>
where
    K: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: self.root.as_deref().map(Node::clone_boxed),
            len: self.len,
        }
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("pre_order", &self.pre_order())
            .finish()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Inserts the key into the tree. Returns `false` without touching the tree if the key is
    /// already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(5));
    /// assert!(tree.insert(3));
    /// assert!(!tree.insert(5));
    ///
    /// assert_eq!(tree.in_order(), [&3, &5]);
    /// ```
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => return false,
                Ordering::Greater => &mut node.right,
            };
        }

        *link = Some(Node::new_boxed(key));
        self.len += 1;
        true
    }

    /// Deletes the node holding the given key. Returns whether the key was present before the
    /// call. A node with two children keeps its place in the tree and takes over the key of its
    /// in-order successor, which is removed instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::tree::Tree;
    ///
    /// let mut tree: Tree<_> = vec![5, 3, 8, 1, 4].into_iter().collect();
    ///
    /// assert!(tree.delete(&3));
    /// assert!(!tree.delete(&3));
    ///
    /// let four = tree.root().and_then(|root| root.left()).unwrap();
    /// assert_eq!(four.key(), &4);
    /// assert_eq!(four.left().map(|n| n.key()), Some(&1));
    /// assert!(four.right().is_none());
    /// ```
    pub fn delete(&mut self, key: &K) -> bool
    where
        K: Ord,
    {
        let mut link = &mut self.root;
        loop {
            let ordering = match link.as_deref() {
                Some(node) => key.cmp(&node.key),
                None => return false,
            };
            if ordering == Ordering::Equal {
                break;
            }
            link = match (ordering, link) {
                (Ordering::Less, Some(node)) => &mut node.left,
                (_, Some(node)) => &mut node.right,
                (_, None) => return false,
            };
        }

        unlink(link);
        self.len -= 1;
        true
    }

    /// Reports whether the key is in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.find(&1));
    /// assert!(!tree.find(&42));
    /// ```
    pub fn find(&self, key: &K) -> bool
    where
        K: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right(),
            };
        }
        false
    }

    /// Lazily walks the same descent as [`find`][Tree::find], yielding the key of every node
    /// visited along the way.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::tree::Tree;
    ///
    /// let tree: Tree<_> = vec![5, 3, 8, 1, 4].into_iter().collect();
    ///
    /// assert_eq!(tree.descend(&4).collect::<Vec<_>>(), [&5, &3, &4]);
    /// assert_eq!(tree.descend(&7).collect::<Vec<_>>(), [&5, &8]);
    /// ```
    pub fn descend<'a>(&'a self, key: &'a K) -> Descent<'a, K>
    where
        K: Ord,
    {
        Descent::new(self.root(), key)
    }

    /// Looks up the key and keeps the path that got there.
    pub fn search<'a>(&'a self, key: &'a K) -> Search<'a, K>
    where
        K: Ord,
    {
        Search::collect(self.descend(key), key)
    }

    /// Collects every key in the given order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::traversal::Order;
    /// use bst::tree::Tree;
    ///
    /// let tree: Tree<_> = vec![5, 3, 8, 1, 4].into_iter().collect();
    ///
    /// assert_eq!(tree.traverse(Order::PreOrder), [&5, &3, &1, &4, &8]);
    /// assert_eq!(tree.traverse(Order::InOrder), [&1, &3, &4, &5, &8]);
    /// assert_eq!(tree.traverse(Order::PostOrder), [&1, &4, &3, &8, &5]);
    /// ```
    pub fn traverse(&self, order: Order) -> Vec<&K> {
        match order {
            Order::PreOrder => traversal::pre_order(self.root(), self.len),
            Order::InOrder => self.iter().collect(),
            Order::PostOrder => traversal::post_order(self.root(), self.len),
        }
    }

    /// Node, then left subtree, then right subtree.
    pub fn pre_order(&self) -> Vec<&K> {
        self.traverse(Order::PreOrder)
    }

    /// Left subtree, then node, then right subtree. Always ascending.
    pub fn in_order(&self) -> Vec<&K> {
        self.traverse(Order::InOrder)
    }

    /// Left subtree, then right subtree, then node.
    pub fn post_order(&self) -> Vec<&K> {
        self.traverse(Order::PostOrder)
    }

    /// Iterates over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.root(), self.len)
    }

    /// Empties the tree.
    pub fn clear(&mut self) {
        release(self.root.take());
        self.len = 0;
    }

    /// How many keys are stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no root.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// How many levels the tree has. An empty tree has a height of 0 and a lone root a height
    /// of 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<&Node<K>> = self.root().into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .into_iter()
                .flat_map(|node| node.left().into_iter().chain(node.right()))
                .collect();
        }
        height
    }

    /// The smallest key.
    pub fn min(&self) -> Option<&K> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(&node.key)
    }

    /// The largest key.
    pub fn max(&self) -> Option<&K> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(&node.key)
    }

    /// The root node, for callers that need the shape of the tree (e.g. to lay it out).
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    /// Inserts every key in order. Keys already in the tree are skipped.
    fn extend<I: IntoIterator<Item = K>>(&mut self, keys: I) {
        for key in keys {
            self.insert(key);
        }
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(keys: I) -> Self {
        let mut tree = Self::new();
        tree.extend(keys);
        tree
    }
}

/// A `Node` holds a key and owns up to two children.
pub struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

/// Shows only the keys of the children. Walking whole subtrees here would recurse once per level.
impl<K> fmt::Debug for Node<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("left", &self.left().map(Node::key))
            .field("right", &self.right().map(Node::key))
            .finish()
    }
}

impl<K> Node<K> {
    fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Copies the subtree rooted here without recursing once per level. Each copied node is
    /// paired with the original it came from so its children can be filled in later.
    fn clone_boxed(&self) -> Box<Self>
    where
        K: Clone,
    {
        let mut root = Self::new_boxed(self.key.clone());
        let mut stack: Vec<(&Self, &mut Self)> = vec![(self, &mut *root)];
        while let Some((original, copy)) = stack.pop() {
            let Node { left, right, .. } = copy;
            if let Some(child) = original.left() {
                let new_left = left.insert(Self::new_boxed(child.key.clone()));
                stack.push((child, &mut **new_left));
            }
            if let Some(child) = original.right() {
                let new_right = right.insert(Self::new_boxed(child.key.clone()));
                stack.push((child, &mut **new_right));
            }
        }
        root
    }
}

/// Removes the node at the front of `link`, splicing in whatever should replace it.
fn unlink<K>(link: &mut Link<K>) {
    let Some(node) = link else {
        return;
    };

    if node.left.is_some() {
        if let Some(successor) = take_min(&mut node.right) {
            node.key = successor;
            return;
        }
    }

    let child = node.left.take().or_else(|| node.right.take());
    *link = child;
}

/// Detaches the leftmost node of the subtree at `link` and returns its key. Its right child (it
/// can't have a left one) moves up into its place.
fn take_min<K>(mut link: &mut Link<K>) -> Option<K> {
    while link.as_ref().is_some_and(|node| node.left.is_some()) {
        link = &mut link.as_mut()?.left;
    }

    let node = link.take()?;
    let Node { key, right, .. } = *node;
    *link = right;
    Some(key)
}

/// Drops a subtree iteratively. Children are detached before their parent is dropped so no
/// `Box` drop ever recurses.
fn release<K>(link: Link<K>) {
    let mut stack: Vec<Box<Node<K>>> = link.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}
