use std::cmp;

use crate::tree::{AVLTree, Node};

/// Errors reported by [`AVLTree::validate`] when the structure of a tree is broken
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum InvariantError {
    /// A key is not strictly between the keys of its ancestors
    #[error("keys are not in binary search tree order")]
    Unordered,
    /// The cached height of a node is stale
    #[error("node has cached height {actual} but its subtrees give height {expected}")]
    HeightMismatch {
        expected: usize,
        actual: usize,
    },
    /// The heights of the subtrees of a node differ by more than one
    #[error("node has balance factor {balance_factor}")]
    Unbalanced {
        balance_factor: isize,
    },
    /// The number of keys tracked by the tree disagrees with its nodes
    #[error("tree has length {actual} but contains {expected} nodes")]
    LengthMismatch {
        expected: usize,
        actual: usize,
    },
}

impl<T: Ord> AVLTree<T> {
    /// Checks the ordering, height, balance and length invariants of every node in the tree
    ///
    /// A tree only built through its own API always passes. This is meant for tests and for
    /// callers that want to assert the structure explicitly.
    ///
    /// Time complexity: `O(n)`
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::AVLTree;
    ///
    /// let mut tree = AVLTree::new();
    /// for key in (0..100).rev() {
    ///     tree.insert(key);
    ///     assert_eq!(tree.validate(), Ok(()));
    /// }
    /// ```
    pub fn validate(&self) -> Result<(), InvariantError> {
        let mut nodes = 0;
        check_subtree(self.root(), None, None, &mut nodes)?;

        if nodes != self.len() {
            return Err(InvariantError::LengthMismatch {
                expected: nodes,
                actual: self.len(),
            });
        }

        Ok(())
    }
}

/// Checks the subtree rooted at `node`, whose keys must all be strictly between `lower` and
/// `upper`, and returns its height
fn check_subtree<T: Ord>(
    node: Option<&Node<T>>,
    lower: Option<&T>,
    upper: Option<&T>,
    nodes: &mut usize,
) -> Result<usize, InvariantError> {
    let node = match node {
        Some(node) => node,
        None => return Ok(0),
    };

    let key = node.key();
    let above_lower = lower.map_or(true, |lower| lower < key);
    let below_upper = upper.map_or(true, |upper| key < upper);
    if !above_lower || !below_upper {
        return Err(InvariantError::Unordered);
    }

    *nodes += 1;
    let left_height = check_subtree(node.left(), lower, Some(key), nodes)?;
    let right_height = check_subtree(node.right(), Some(key), upper, nodes)?;

    let expected = 1 + cmp::max(left_height, right_height);
    if node.height() != expected {
        return Err(InvariantError::HeightMismatch {
            expected,
            actual: node.height(),
        });
    }

    let balance_factor = node.balance_factor();
    if !(-1..=1).contains(&balance_factor) {
        return Err(InvariantError::Unbalanced {balance_factor});
    }

    Ok(expected)
}
