#![warn(rust_2018_idioms)]

use std::any::Any;
use std::cell::Cell;
use std::rc::Rc;

use static_assertions::{assert_impl_all, assert_not_impl_any};

use avl_tree::{AVLTree, IterInorder, Node};

#[allow(dead_code)]
struct NotSend {
    a: Box<dyn Any + Sync>,
}

assert_impl_all!(AVLTree<i32>: Send, Sync);
assert_not_impl_any!(AVLTree<Rc<i32>>: Send, Sync);
assert_impl_all!(AVLTree<Cell<i32>>: Send);
assert_not_impl_any!(AVLTree<Cell<i32>>: Sync);
assert_impl_all!(AVLTree<NotSend>: Sync);
assert_not_impl_any!(AVLTree<NotSend>: Send);

assert_impl_all!(Node<i32>: Send, Sync);
assert_not_impl_any!(Node<Rc<i32>>: Send, Sync);
assert_impl_all!(Node<Cell<i32>>: Send);
assert_not_impl_any!(Node<Cell<i32>>: Sync);

// The iterator only holds shared references, so it is `Send` whenever the keys are `Sync`
assert_impl_all!(IterInorder<'static, i32>: Send, Sync);
assert_not_impl_any!(IterInorder<'static, Rc<i32>>: Send, Sync);
assert_not_impl_any!(IterInorder<'static, Cell<i32>>: Send, Sync);
assert_impl_all!(IterInorder<'static, NotSend>: Send, Sync);

#[test]
fn tree_moves_across_threads() {
    let mut tree = AVLTree::new();
    for key in 0..100 {
        tree.insert(key);
    }

    let handle = std::thread::spawn(move || {
        tree.insert(100);
        tree
    });
    let tree = handle.join().unwrap();

    assert_eq!(tree.len(), 101);
    assert_eq!(tree.iter_inorder().last(), Some(&100));
}
