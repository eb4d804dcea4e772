use std::iter::FusedIterator;

use super::Node;

/// Iterator over the keys of an [`AVLTree`](crate::AVLTree) in ascending order
///
/// The stack never holds more than `height` nodes, so no recursion or allocation proportional to
/// the number of keys is needed.
#[derive(Debug, Clone)]
pub struct IterInorder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

// See: https://www.geeksforgeeks.org/inorder-tree-traversal-without-recursion/
impl<'a, T> IterInorder<'a, T> {
    pub(super) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self {
            stack: Vec::with_capacity(Node::height_of(root)),
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<&'a Node<T>>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left();
        }
    }
}

impl<'a, T> Iterator for IterInorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.key())
    }
}

impl<'a, T> FusedIterator for IterInorder<'a, T> {}
