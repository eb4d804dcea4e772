use std::cmp::{self, Ordering};

/// A single node of the AVL tree
///
/// Each node exclusively owns its left and right subtrees and caches the height of the subtree
/// rooted at itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    key: T,
    /// Height of the subtree rooted at this node. A leaf has height 1.
    height: usize,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    pub(crate) fn new(key: T) -> Self {
        Self {
            key,
            height: 1,
            left: None,
            right: None,
        }
    }

    /// Returns the height of the given subtree, where an empty subtree has height 0
    pub(crate) fn height_of(node: Option<&Self>) -> usize {
        node.map_or(0, |node| node.height)
    }

    /// Returns the key of this node
    pub fn key(&self) -> &T {
        &self.key
    }

    /// Returns the height of the subtree rooted at this node
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the height of the left subtree minus the height of the right subtree
    ///
    /// This is always in the range `-1..=1` for nodes of a tree that is not being modified.
    pub fn balance_factor(&self) -> isize {
        Self::height_of(self.left()) as isize - Self::height_of(self.right()) as isize
    }

    /// Returns true if this node has a left subtree
    pub fn has_left(&self) -> bool {
        self.left.is_some()
    }

    /// Returns true if this node has a right subtree
    pub fn has_right(&self) -> bool {
        self.right.is_some()
    }

    /// Returns the left child node (subtree) of this node, if any
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// Returns the right child node (subtree) of this node, if any
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    fn update_height(&mut self) {
        self.height = 1 + cmp::max(Self::height_of(self.left()), Self::height_of(self.right()));
    }

    /// Rotates this subtree to the right, returning the new subtree root
    ///
    /// ```text
    ///       y            x
    ///      / \          / \
    ///     x   C  -->   A   y
    ///    / \              / \
    ///   A   B            B   C
    /// ```
    fn rotate_right(mut self: Box<Self>) -> Box<Self> {
        let mut x = match self.left.take() {
            Some(x) => x,
            None => {
                debug_assert!(false, "bug: right rotation requires a left child");
                return self;
            },
        };

        self.left = x.right.take();
        // `self` is now below `x`, so it must be updated first
        self.update_height();
        x.right = Some(self);
        x.update_height();

        x
    }

    /// Rotates this subtree to the left, returning the new subtree root
    ///
    /// ```text
    ///     x                y
    ///    / \              / \
    ///   A   y     -->    x   C
    ///      / \          / \
    ///     B   C        A   B
    /// ```
    fn rotate_left(mut self: Box<Self>) -> Box<Self> {
        let mut y = match self.right.take() {
            Some(y) => y,
            None => {
                debug_assert!(false, "bug: left rotation requires a right child");
                return self;
            },
        };

        self.right = y.left.take();
        self.update_height();
        y.left = Some(self);
        y.update_height();

        y
    }
}

#[cfg(test)]
impl<T> Node<T> {
    /// Builds a node with exactly the given height and children, even if they break invariants
    pub(crate) fn from_raw_parts(
        key: T,
        height: usize,
        left: Option<Box<Self>>,
        right: Option<Box<Self>>,
    ) -> Box<Self> {
        Box::new(Self {key, height, left, right})
    }
}

impl<T: Ord> Node<T> {
    /// Inserts `key` into the subtree stored in `slot`, rebalancing every node on the way back up
    ///
    /// Returns `None` if the key was already present, in which case nothing was modified.
    /// Otherwise, returns how `key` compared to the key at the root of the subtree before it was
    /// rebalanced. `Ordering::Equal` means that `slot` was empty and now holds the new node.
    pub(crate) fn insert(slot: &mut Option<Box<Self>>, key: T) -> Option<Ordering> {
        let node = match slot {
            Some(node) => node,
            None => {
                *slot = Some(Box::new(Self::new(key)));
                return Some(Ordering::Equal);
            },
        };

        let side = key.cmp(&node.key);
        // The ancestors of a duplicate are left untouched
        let child_side = match side {
            Ordering::Less => Self::insert(&mut node.left, key)?,
            Ordering::Greater => Self::insert(&mut node.right, key)?,
            Ordering::Equal => return None,
        };

        node.update_height();

        if let Some(node) = slot.take() {
            *slot = Some(node.rebalance(child_side));
        }

        Some(side)
    }

    /// Restores the AVL property of this subtree after an insertion below it
    ///
    /// `child_side` is how the inserted key compared to the child the insertion went through. If a
    /// rotation happened further down, this subtree did not grow and no case below applies, so the
    /// child is always the node that `child_side` was computed against.
    fn rebalance(mut self: Box<Self>, child_side: Ordering) -> Box<Self> {
        let balance = self.balance_factor();

        match child_side {
            // Left-left
            Ordering::Less if balance > 1 => {
                log::trace!("right rotation of subtree with height {}", self.height);
                self.rotate_right()
            },

            // Right-right
            Ordering::Greater if balance < -1 => {
                log::trace!("left rotation of subtree with height {}", self.height);
                self.rotate_left()
            },

            // Left-right
            Ordering::Greater if balance > 1 => {
                log::trace!("left-right rotation of subtree with height {}", self.height);
                self.left = self.left.take().map(Self::rotate_left);
                self.rotate_right()
            },

            // Right-left
            Ordering::Less if balance < -1 => {
                log::trace!("right-left rotation of subtree with height {}", self.height);
                self.right = self.right.take().map(Self::rotate_right);
                self.rotate_left()
            },

            _ => {
                // A brand new child can never unbalance its parent
                debug_assert!((-1..=1).contains(&balance) || child_side != Ordering::Equal);
                self
            },
        }
    }
}
