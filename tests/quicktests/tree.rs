use bst::Tree;

use std::collections::HashSet;

use crate::Op;

/// Applies a set of operations to a tree and a hashset.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in both.
fn do_ops(ops: &[Op<i8>], bst: &mut Tree<i8>, set: &mut HashSet<i8>) {
    for op in ops {
        match op {
            Op::Insert(k) => {
                bst.insert(*k);
                set.insert(*k);
            }
            Op::Delete(k) => {
                bst.delete(k);
                set.remove(k);
            }
        }
    }
}

quickcheck::quickcheck! {
    fn in_order_is_strictly_ascending(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        do_ops(&ops, &mut tree, &mut HashSet::new());

        tree.in_order().windows(2).all(|pair| pair[0] < pair[1])
    }
}

quickcheck::quickcheck! {
    fn membership_matches_model(ops: Vec<Op<i8>>, probes: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        let mut set = HashSet::new();
        do_ops(&ops, &mut tree, &mut set);

        probes.iter().chain(set.iter()).all(|k| tree.find(k) == set.contains(k))
    }
}

quickcheck::quickcheck! {
    fn cardinality_matches_successful_calls(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut count = 0isize;
        for op in &ops {
            match op {
                Op::Insert(k) => count += tree.insert(*k) as isize,
                Op::Delete(k) => count -= tree.delete(k) as isize,
            }
        }

        let count = count as usize;
        tree.len() == count
            && tree.pre_order().len() == count
            && tree.in_order().len() == count
            && tree.post_order().len() == count
    }
}

quickcheck::quickcheck! {
    fn duplicate_insert_changes_nothing(xs: Vec<i8>, dup: usize) -> bool {
        if xs.is_empty() {
            return true;
        }
        let mut tree: Tree<_> = xs.iter().copied().collect();
        let before = (tree.pre_order().into_iter().copied().collect::<Vec<_>>(), tree.len());

        let rejected = !tree.insert(xs[dup % xs.len()]);
        let after = (tree.pre_order().into_iter().copied().collect::<Vec<_>>(), tree.len());

        rejected && before == after
    }
}

quickcheck::quickcheck! {
    fn delete_then_find_is_false(xs: Vec<i8>, k: i8) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        let was_present = tree.find(&k);

        tree.delete(&k) == was_present && !tree.find(&k)
    }
}

quickcheck::quickcheck! {
    fn search_path_only_visits_ancestors(xs: Vec<i8>, k: i8) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let search = tree.search(&k);

        // Each step heads toward `k`: every later key lies on the same side of an earlier key
        // as `k` does.
        let heads_toward_k = search.path.iter().enumerate().all(|(i, a)| {
            search.path[i + 1..]
                .iter()
                .all(|b| (*b < *a) == (k < **a) || *b == &k)
        });
        search.found == tree.find(&k)
            && search.path.first() == tree.root().map(|root| root.key()).as_ref()
            && heads_toward_k
    }
}
