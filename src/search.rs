//! Lookups that remember where they went. A visualizer highlights these keys one at a time before
//! it commits the actual insert, delete, or find.

use std::cmp::Ordering;

use crate::tree::Node;

/// The keys visited while searching for a key, root first. Created by
/// [`Tree::descend`][crate::tree::Tree::descend].
pub struct Descent<'a, K> {
    next: Option<&'a Node<K>>,
    key: &'a K,
}

impl<'a, K> Descent<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>, key: &'a K) -> Self {
        Self { next: root, key }
    }
}

impl<'a, K> Iterator for Descent<'a, K>
where
    K: Ord,
{
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next.take()?;
        self.next = match self.key.cmp(node.key()) {
            Ordering::Less => node.left(),
            Ordering::Equal => None,
            Ordering::Greater => node.right(),
        };
        Some(node.key())
    }
}

/// The materialized result of a [`Descent`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Search<'a, K> {
    /// Every key visited, in visitation order. Ends with the searched key when it was found.
    pub path: Vec<&'a K>,
    /// Whether the key is in the tree.
    pub found: bool,
}

impl<'a, K> Search<'a, K>
where
    K: Ord,
{
    pub(crate) fn collect(descent: Descent<'a, K>, key: &K) -> Self {
        let path: Vec<&K> = descent.collect();
        let found = path.last().is_some_and(|last| *last == key);
        Self { path, found }
    }

    /// How many nodes were visited.
    pub fn depth(&self) -> usize {
        self.path.len()
    }
}

#[cfg(test)]
mod tests {
    use crate::tree::Tree;

    fn tree() -> Tree<i32> {
        vec![5, 3, 8, 1, 4].into_iter().collect()
    }

    #[test]
    fn found_path_ends_at_key() {
        let tree = tree();
        let search = tree.search(&4);

        assert!(search.found);
        assert_eq!(search.path, [&5, &3, &4]);
        assert_eq!(search.depth(), 3);
    }

    #[test]
    fn missing_path_ends_at_last_node() {
        let tree = tree();

        let search = tree.search(&2);
        assert!(!search.found);
        assert_eq!(search.path, [&5, &3, &1]);

        let search = tree.search(&100);
        assert!(!search.found);
        assert_eq!(search.path, [&5, &8]);
    }

    #[test]
    fn root_is_a_one_step_path() {
        let tree = tree();

        assert_eq!(tree.descend(&5).collect::<Vec<_>>(), [&5]);
    }

    #[test]
    fn empty_tree_has_empty_path() {
        let tree = Tree::<i32>::new();
        let search = tree.search(&1);

        assert!(!search.found);
        assert!(search.path.is_empty());
    }

    #[test]
    fn descent_agrees_with_find() {
        let tree = tree();

        for key in 0..10 {
            assert_eq!(tree.search(&key).found, tree.find(&key));
        }
    }
}
