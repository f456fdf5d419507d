//! A Binary Search Tree (BST) that is built balanced and rebalanced on demand.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! keys in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). With clever construction the
//! height of a BST can be limited to `O(lg N)` where `N` is the number of nodes
//! in the tree. BSTs also naturally support sorted iteration by visiting the
//! left subtree, then the subtree root, then the right subtree.
//!
//! ## Balancing policy
//!
//! Unlike an AVL or red-black tree, this tree does **not** restore balance on
//! every mutation. [`Tree::from_keys`] produces a height-balanced tree by
//! splitting the sorted input at its midpoint, and [`Tree::rebalance`]
//! rebuilds an unbalanced tree with the same policy, but plain
//! [`Tree::insert`]s are free to skew the tree arbitrarily in between.
//! [`Tree::is_balanced`] reports whether a rebuild is worthwhile.
//!
//! ```
//! use balanced_bst::Tree;
//!
//! let mut tree: Tree<i32> = (1..=7).collect();
//! assert!(tree.is_balanced());
//!
//! // A run of ascending inserts skews the tree to the right.
//! for key in 8..=16 {
//!     tree.insert(key).unwrap();
//! }
//! assert!(!tree.is_balanced());
//!
//! assert!(tree.rebalance());
//! assert!(tree.is_balanced());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod pretty;
pub mod traverse;
pub mod tree;

pub use error::{TreeError, TreeResult};
pub use traverse::Iter;
pub use tree::{Node, Tree};

#[cfg(test)]
mod test;
