use bst::session::{Outcome, Session};
use bst::traversal::Order;
use bst::{Error, Tree};

fn tree_of(keys: &[i32]) -> Tree<i32> {
    keys.iter().copied().collect()
}

#[test]
fn insert_five_keys() {
    let tree = tree_of(&[5, 3, 8, 1, 4]);

    assert_eq!(tree.in_order(), [&1, &3, &4, &5, &8]);
    assert_eq!(tree.pre_order(), [&5, &3, &1, &4, &8]);
}

#[test]
fn delete_node_with_two_children() {
    let mut tree = tree_of(&[5, 3, 8, 1, 4]);

    assert!(tree.delete(&3));
    assert_eq!(tree.in_order(), [&1, &4, &5, &8]);

    let root = tree.root().unwrap();
    assert_eq!(root.key(), &5);
    let former_three = root.left().unwrap();
    assert_eq!(former_three.key(), &4);
    assert_eq!(former_three.left().map(|n| n.key()), Some(&1));
    assert!(former_three.right().is_none());
}

#[test]
fn insert_same_key_twice() {
    let mut tree = Tree::new();

    assert!(tree.insert(5));
    assert!(!tree.insert(5));
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.in_order(), [&5]);
}

#[test]
fn delete_missing_key() {
    let mut tree = tree_of(&[5, 3, 8]);

    assert!(!tree.delete(&99));
    assert_eq!(tree.in_order(), [&3, &5, &8]);
}

#[test]
fn clear_forgets_everything() {
    let mut tree = tree_of(&[5, 3, 8, 1, 4]);

    tree.clear();

    assert!((0..10).all(|k| !tree.find(&k)));
    for order in Order::ALL {
        assert!(tree.traverse(order).is_empty());
    }
}

#[test]
fn every_delete_case_leaves_key_unfindable() {
    // 1 is a leaf, 8 has one child, 3 has two.
    for key in [1, 8, 3] {
        let mut tree = tree_of(&[5, 3, 8, 1, 4, 9]);

        assert!(tree.delete(&key));
        assert!(!tree.find(&key));
        assert_eq!(tree.len(), 5);
    }
}

#[test]
fn emptying_tree_one_key_at_a_time() {
    let mut tree = tree_of(&[5, 3, 8]);

    for key in [5, 3, 8] {
        assert!(tree.delete(&key));
    }
    assert!(tree.is_empty());
    assert!(tree.root().is_none());

    assert!(tree.insert(1));
    assert_eq!(tree.root().map(|n| n.key()), Some(&1));
}

#[test]
fn session_drives_the_same_scenario() {
    let mut session = Session::new();

    assert_eq!(
        session.execute("insert 5,3,8,1,4").unwrap(),
        Outcome::Batch {
            inserted: vec![5, 3, 8, 1, 4],
            rejected: vec![]
        }
    );
    assert!(matches!(
        session.execute("insert 4"),
        Err(Error::DuplicateKey { key: 4, .. })
    ));
    assert!(matches!(
        session.execute("delete 3"),
        Ok(Outcome::Deleted { key: 3, .. })
    ));
    assert_eq!(
        session.execute("traverse in").unwrap(),
        Outcome::Traversal {
            order: Order::InOrder,
            keys: vec![1, 4, 5, 8]
        }
    );
}
