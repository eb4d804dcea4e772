//! Diagnostic rendering of the shape of an [`AVLTree`]
//!
//! ```text
//! 20 (BF: 0)
//! ├── 10 (BF: 0)
//! └── 30 (BF: 0)
//! ```

use std::fmt;

use crate::tree::{AVLTree, Node};

/// What an empty tree renders as
pub const EMPTY_TREE: &str = "Empty tree";

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const INDENT: &str = "│   ";
const LAST_INDENT: &str = "    ";

impl<T: Ord + fmt::Display> AVLTree<T> {
    /// Renders the structure of the tree, one node per line, with the balance factor of each node
    ///
    /// Nodes are written depth first, left subtree before right subtree. Branch markers show
    /// whether a node is the last child of its parent. An empty tree renders as
    /// [`EMPTY_TREE`].
    ///
    /// This is the same output as the `Display` implementation.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::AVLTree;
    ///
    /// let mut tree = AVLTree::new();
    /// assert_eq!(tree.render(), "Empty tree");
    ///
    /// for key in [30, 10, 20, 5] {
    ///     tree.insert(key);
    /// }
    /// assert_eq!(tree.render(), "\
    /// 20 (BF: 1)
    /// ├── 10 (BF: 1)
    /// │   └── 5 (BF: 0)
    /// └── 30 (BF: 0)
    /// ");
    /// ```
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl<T: Ord + fmt::Display> fmt::Display for AVLTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let root = match self.root() {
            Some(root) => root,
            None => return f.write_str(EMPTY_TREE),
        };

        writeln!(f, "{} (BF: {})", root.key(), root.balance_factor())?;
        write_children(f, "", root)
    }
}

fn write_children<T: fmt::Display>(f: &mut fmt::Formatter<'_>, prefix: &str, node: &Node<T>) -> fmt::Result {
    if let Some(left) = node.left() {
        write_node(f, prefix, left, !node.has_right())?;
    }
    if let Some(right) = node.right() {
        write_node(f, prefix, right, true)?;
    }

    Ok(())
}

fn write_node<T: fmt::Display>(f: &mut fmt::Formatter<'_>, prefix: &str, node: &Node<T>, is_last: bool) -> fmt::Result {
    let (branch, indent) = if is_last {
        (LAST_BRANCH, LAST_INDENT)
    } else {
        (BRANCH, INDENT)
    };

    writeln!(f, "{}{}{} (BF: {})", prefix, branch, node.key(), node.balance_factor())?;

    let child_prefix = format!("{}{}", prefix, indent);
    write_children(f, &child_prefix, node)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn empty_tree() {
        let tree: AVLTree<i32> = AVLTree::new();
        assert_eq!(tree.render(), EMPTY_TREE);
        assert_eq!(tree.to_string(), "Empty tree");
    }

    #[test]
    fn single_node() {
        let mut tree = AVLTree::new();
        tree.insert(42);
        assert_eq!(tree.render(), "42 (BF: 0)\n");
    }

    #[test]
    fn only_right_child_is_last() {
        let mut tree = AVLTree::new();
        tree.insert(1);
        tree.insert(2);
        assert_eq!(tree.render(), "1 (BF: -1)\n└── 2 (BF: 0)\n");
    }

    #[test]
    fn gallery_sequence() {
        let mut tree = AVLTree::new();
        for key in [30, 10, 20, 50, 40, 5, 4, 60, 70, 24, 34, 33] {
            tree.insert(key);
        }

        let expected = "\
30 (BF: 0)
├── 20 (BF: 1)
│   ├── 5 (BF: 0)
│   │   ├── 4 (BF: 0)
│   │   └── 10 (BF: 0)
│   └── 24 (BF: 0)
└── 40 (BF: 0)
    ├── 34 (BF: 1)
    │   └── 33 (BF: 0)
    └── 60 (BF: 0)
        ├── 50 (BF: 0)
        └── 70 (BF: 0)
";
        assert_eq!(tree.render(), expected);
    }

    #[test]
    fn string_keys() {
        let mut tree = AVLTree::new();
        for key in ["b", "a", "c"] {
            tree.insert(key);
        }
        assert_eq!(tree.render(), "b (BF: 0)\n├── a (BF: 0)\n└── c (BF: 0)\n");
    }
}
