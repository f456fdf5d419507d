//! Traversals: one breadth-first order and three depth-first orders, plus a
//! lazy in-order [`Iterator`].
//!
//! All four orders are iterative, using explicit queue/stack bookkeeping
//! instead of the call stack, and invoke the visitor exactly once per node.
//! Taking the visitor as a plain closure parameter means "traversal with no
//! observer" is not even expressible, so there is no runtime contract check
//! to fail.

use std::collections::VecDeque;

use crate::tree::{Node, Tree};

impl<K> Tree<K> {
    /// Visits every node breadth-first, level by level from the root, left
    /// sibling before right.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::from_keys(vec![2, 1, 3]);
    ///
    /// let mut keys = Vec::new();
    /// tree.level_order(|node| keys.push(*node.key()));
    /// assert_eq!(keys, [2, 1, 3]);
    /// ```
    pub fn level_order<F>(&self, mut visit: F)
    where
        F: FnMut(&Node<K>),
    {
        let mut queue = VecDeque::new();
        if let Some(root) = self.root.as_deref() {
            queue.push_back(root);
        }
        while let Some(node) = queue.pop_front() {
            visit(node);
            if let Some(left) = node.left() {
                queue.push_back(left);
            }
            if let Some(right) = node.right() {
                queue.push_back(right);
            }
        }
    }

    /// Visits left subtree, node, then right subtree — i.e. keys in
    /// ascending order. The stack mimics the recursive left descent.
    ///
    /// Ascending in-order output is what [`Tree::rebalance`] relies on to
    /// recover a sorted key sequence without re-sorting.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::from_keys(vec![2, 3, 1]);
    ///
    /// let mut keys = Vec::new();
    /// tree.in_order(|node| keys.push(*node.key()));
    /// assert_eq!(keys, [1, 2, 3]);
    /// ```
    pub fn in_order<F>(&self, mut visit: F)
    where
        F: FnMut(&Node<K>),
    {
        let mut stack = Vec::new();
        let mut cur = self.root.as_deref();
        while cur.is_some() || !stack.is_empty() {
            while let Some(node) = cur {
                stack.push(node);
                cur = node.left.as_deref();
            }
            if let Some(node) = stack.pop() {
                visit(node);
                cur = node.right.as_deref();
            }
        }
    }

    /// Visits node, left subtree, then right subtree. The right child is
    /// pushed before the left so the left comes off the stack first.
    pub fn pre_order<F>(&self, mut visit: F)
    where
        F: FnMut(&Node<K>),
    {
        let mut stack = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push(root);
        }
        while let Some(node) = stack.pop() {
            visit(node);
            if let Some(right) = node.right() {
                stack.push(right);
            }
            if let Some(left) = node.left() {
                stack.push(left);
            }
        }
    }

    /// Visits left subtree, right subtree, then node. A first stack pops
    /// nodes in reverse post-order (left pushed before right) and a second
    /// accumulates them, to be emitted back-to-front.
    pub fn post_order<F>(&self, mut visit: F)
    where
        F: FnMut(&Node<K>),
    {
        let mut build = Vec::new();
        let mut ordered = Vec::new();
        if let Some(root) = self.root.as_deref() {
            build.push(root);
        }
        while let Some(node) = build.pop() {
            ordered.push(node);
            if let Some(left) = node.left() {
                build.push(left);
            }
            if let Some(right) = node.right() {
                build.push(right);
            }
        }
        for node in ordered.into_iter().rev() {
            visit(node);
        }
    }

    /// A lazy in-order iterator over the keys, ascending.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::from_keys(vec![20, 10, 30]);
    /// let keys: Vec<i32> = tree.iter().copied().collect();
    ///
    /// assert_eq!(keys, [10, 20, 30]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            stack: Vec::new(),
            cur: self.root.as_deref(),
        }
    }
}

/// An in-order iterator over a tree's keys. Created by [`Tree::iter`].
pub struct Iter<'a, K> {
    stack: Vec<&'a Node<K>>,
    cur: Option<&'a Node<K>>,
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.cur {
            self.stack.push(node);
            self.cur = node.left.as_deref();
        }
        let node = self.stack.pop()?;
        self.cur = node.right.as_deref();
        Some(node.key())
    }
}
