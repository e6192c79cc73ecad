use std::collections::VecDeque;
use std::fmt::{self, Debug, Display, Formatter};

use super::{Branch, Node};

/// An unbalanced binary search tree. Values equal to a node are stored in its left subtree, so
/// duplicates are kept and an in-order traversal yields every value in ascending order.
///
/// There is no removal and no rebalancing: the shape of the tree, and therefore its height, depends
/// only on the order of insertion. Every operation is iterative, so even a fully skewed tree
/// doesn't risk overflowing the stack.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the BinarySearchTree.
/// - `h`: The height of the BinarySearchTree, between `log2 n` and `n`.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(h)` |
/// | `contains` | `O(h)` |
/// | `in/pre/post_order` | `O(n)` |
/// | `breadth/depth_first_search` | `O(n)` |
/// | `height` | `O(n)` |
pub struct BinarySearchTree<T> {
    pub(crate) root: Branch<T>,
    pub(crate) len: usize,
}

impl<T> BinarySearchTree<T> {
    pub const fn new() -> BinarySearchTree<T> {
        BinarySearchTree {
            root: Branch(None),
            len: 0,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of nodes on the longest path from the root to a leaf, or 0 for an empty
    /// tree.
    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// Returns every value, ordered left subtree, node, right subtree. This is ascending order.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::binary_tree::BinarySearchTree;
    /// let tree: BinarySearchTree<_> = [5, 3, 7, 2, 4, 6, 8].into_iter().collect();
    /// assert_eq!(tree.in_order(), [&2, &3, &4, &5, &6, &7, &8]);
    /// ```
    pub fn in_order(&self) -> Vec<&T> {
        self.root.in_order()
    }

    /// Returns every value, ordered node, left subtree, right subtree.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::binary_tree::BinarySearchTree;
    /// let tree: BinarySearchTree<_> = [5, 3, 7, 2, 4, 6, 8].into_iter().collect();
    /// assert_eq!(tree.pre_order(), [&5, &3, &2, &4, &7, &6, &8]);
    /// ```
    pub fn pre_order(&self) -> Vec<&T> {
        self.root.pre_order()
    }

    /// Returns every value, ordered left subtree, right subtree, node.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::binary_tree::BinarySearchTree;
    /// let tree: BinarySearchTree<_> = [5, 3, 7, 2, 4, 6, 8].into_iter().collect();
    /// assert_eq!(tree.post_order(), [&2, &4, &3, &6, &8, &7, &5]);
    /// ```
    pub fn post_order(&self) -> Vec<&T> {
        self.root.post_order()
    }

    /// Visits the tree level by level with a queue seeded with the root, expanding each node's
    /// children left then right. Values are returned in the order the nodes were visited.
    ///
    /// Each visit step is emitted as a `TRACE` event.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::binary_tree::BinarySearchTree;
    /// let tree: BinarySearchTree<_> = [5, 3, 7, 2, 4, 6, 8].into_iter().collect();
    /// assert_eq!(tree.breadth_first_search(), [&5, &3, &7, &2, &4, &6, &8]);
    /// ```
    pub fn breadth_first_search(&self) -> Vec<&T> {
        self.root.search(VecDeque::<&Node<T>>::new(), "breadth-first")
    }

    /// Visits the tree with a stack seeded with the root, pushing each node's children left then
    /// right. Because the right child is pushed last, it is visited first. Values are returned in
    /// the order the nodes were visited.
    ///
    /// Each visit step is emitted as a `TRACE` event.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::binary_tree::BinarySearchTree;
    /// let tree: BinarySearchTree<_> = [5, 3, 7, 2, 4, 6, 8].into_iter().collect();
    /// assert_eq!(tree.depth_first_search(), [&5, &7, &8, &6, &3, &4, &2]);
    /// ```
    pub fn depth_first_search(&self) -> Vec<&T> {
        self.root.search(Vec::<&Node<T>>::new(), "depth-first")
    }
}

impl<T: Ord> BinarySearchTree<T> {
    /// Inserts `value` as a new leaf. Values equal to an existing node go to its left.
    pub fn insert(&mut self, value: T) {
        self.root.insert(value);
        self.len += 1;
    }

    pub fn contains(&self, value: &T) -> bool {
        self.root.contains(value)
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BinarySearchTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        // Detach every node before it drops, so that dropping is never recursive.
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T: Debug> Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinarySearchTree")
            .field("nodes", &format_args!("\n{:?}\n", &self.root))
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Debug> Display for BinarySearchTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.in_order()).finish()
    }
}
