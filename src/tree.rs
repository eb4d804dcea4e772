mod node;
mod inorder;

pub use node::*;
pub use inorder::*;

use std::fmt;

/// A self-balancing binary search tree (AVL tree)
///
/// BST properties: For each node with key `k`:
/// - The key of each node in the left subtree is less than `k`
/// - The key of each node in the right subtree is greater than `k`
///
/// AVL property: For each node, the heights of its left and right subtrees differ by at most one.
/// Insertion restores this property on the way back up from the new node using at most one single
/// or double rotation per ancestor, so the height of the tree stays `O(log n)`.
///
/// Duplicate keys are not allowed. Inserting a key that already exists in the tree does not modify
/// the tree.
#[derive(Clone)]
pub struct AVLTree<T> {
    root: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> Default for AVLTree<T> {
    fn default() -> Self {
        Self {
            root: None,
            len: 0,
        }
    }
}

impl<T> fmt::Debug for AVLTree<T>
    where T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AVLTree")
            .field("len", &self.len)
            .field("root", &self.root.as_deref())
            .finish()
    }
}

impl<T: Ord> PartialEq for AVLTree<T> {
    fn eq(&self, other: &Self) -> bool {
        // Two trees holding the same keys may be shaped differently if the keys were inserted in a
        // different order. In-order traversal always produces the keys in sorted order, so that is
        // what gets compared.

        if self.len() != other.len() {
            return false;
        }

        self.iter_inorder().eq(other.iter_inorder())
    }
}

impl<T: Ord> Eq for AVLTree<T> {}

impl<T: Ord> AVLTree<T> {
    /// Creates an empty `AVLTree`
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::AVLTree;
    /// let mut tree: AVLTree<&str> = AVLTree::new();
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of keys in the tree (i.e. the number of nodes in the tree)
    ///
    /// Time complexity: `O(1)`
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::AVLTree;
    ///
    /// let mut tree = AVLTree::new();
    /// assert_eq!(tree.len(), 0);
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree is empty
    ///
    /// Time complexity: `O(1)`
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::AVLTree;
    ///
    /// let mut tree = AVLTree::new();
    /// assert!(tree.is_empty());
    /// tree.insert(1);
    /// assert!(!tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        debug_assert!(self.len != 0 || self.root.is_none());
        self.len == 0
    }

    /// Returns the height of the tree: 0 for an empty tree, 1 for a single node
    ///
    /// Time complexity: `O(1)`
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::AVLTree;
    ///
    /// let mut tree = AVLTree::new();
    /// assert_eq!(tree.height(), 0);
    /// for key in 1..=7 {
    ///     tree.insert(key);
    /// }
    /// assert_eq!(tree.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        Node::height_of(self.root())
    }

    /// Inserts a new key into the tree, rebalancing it as needed
    ///
    /// If the tree did not have this key present, `true` is returned.
    ///
    /// If the tree did have this key present, `false` is returned, and the tree is not modified.
    ///
    /// Time complexity: `O(log n)`
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::AVLTree;
    ///
    /// let mut tree = AVLTree::new();
    /// # assert!(tree.is_empty());
    /// assert!(tree.insert(37));
    /// assert!(!tree.is_empty());
    ///
    /// assert!(!tree.insert(37));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: T) -> bool {
        match Node::insert(&mut self.root, key) {
            Some(_) => {
                self.len += 1;
                true
            },

            None => {
                log::debug!("ignoring duplicate key, tree has {} keys", self.len);
                false
            },
        }
    }

    /// Performs an in-order traversal of the tree, yielding the keys in ascending order
    ///
    /// The traversal only borrows the tree, so it can be repeated as many times as needed.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::AVLTree;
    ///
    /// let mut tree = AVLTree::new();
    /// for key in [30, 10, 20] {
    ///     tree.insert(key);
    /// }
    ///
    /// let keys: Vec<_> = tree.iter_inorder().copied().collect();
    /// assert_eq!(&keys, &[10, 20, 30]);
    /// ```
    pub fn iter_inorder(&self) -> IterInorder<'_, T> {
        IterInorder::new(self.root())
    }

    /// Returns the root node of the tree, or `None` if the tree is empty
    ///
    /// Note that the root can be **any** key inserted into the tree. It changes as the tree
    /// rebalances itself. For a guaranteed ordering, use [`iter_inorder`](Self::iter_inorder).
    ///
    /// This is a low-level API meant to be used for implementing traversals.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::{AVLTree, Node};
    ///
    /// // Custom traversal that counts the leaves of the tree
    /// fn count_leaves<T>(node: Option<&Node<T>>) -> usize {
    ///     match node {
    ///         None => 0,
    ///         Some(node) if !node.has_left() && !node.has_right() => 1,
    ///         // Recurse through left and right subtrees, just like you would in a GC'd language!
    ///         Some(node) => count_leaves(node.left()) + count_leaves(node.right()),
    ///     }
    /// }
    ///
    /// let mut tree = AVLTree::new();
    /// for key in 1..=7 {
    ///     tree.insert(key);
    /// }
    /// assert_eq!(count_leaves(tree.root()), 4);
    /// ```
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }
}

#[cfg(test)]
impl<T> AVLTree<T> {
    /// Assembles a tree from nodes built by hand, without checking any invariant
    pub(crate) fn from_raw_parts(root: Option<Box<Node<T>>>, len: usize) -> Self {
        Self {root, len}
    }
}

impl<'a, T: Ord> IntoIterator for &'a AVLTree<T> {
    type Item = &'a T;
    type IntoIter = IterInorder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_inorder()
    }
}
