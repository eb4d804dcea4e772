//! An AVL tree: a binary search tree that keeps itself balanced as keys are inserted
//!
//! ```
//! use avl_tree::AVLTree;
//!
//! let mut tree = AVLTree::new();
//! for key in [30, 10, 20] {
//!     tree.insert(key);
//! }
//!
//! // Inserting 20 below 10 below 30 triggers a left-right rotation
//! assert_eq!(tree.root().map(|root| *root.key()), Some(20));
//!
//! let keys: Vec<_> = tree.iter_inorder().copied().collect();
//! assert_eq!(&keys, &[10, 20, 30]);
//!
//! print!("{}", tree.render());
//! ```

pub mod tree;
mod render;
mod validate;

pub use tree::{AVLTree, IterInorder, Node};
pub use render::EMPTY_TREE;
pub use validate::InvariantError;
