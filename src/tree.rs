//! The tree itself: balanced construction, point mutation, lookup, and the
//! height, depth, and balance queries.
//!
//! Nodes are owned exclusively by their parent (the root by the [`Tree`]),
//! so the structure is a strict binary tree with no back pointers. Descent
//! for lookups and inserts is iterative; deletion and the balance check
//! rewrite owned links recursively, which reads most naturally with this
//! ownership model and visits exactly the same nodes.

use std::cmp::Ordering;
use std::iter::FromIterator;
use std::mem;

use crate::error::{TreeError, TreeResult};

/// An owned (possibly absent) child slot.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// A single node of the tree: a key and two owned child slots.
#[derive(Clone, Debug)]
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> Node<K> {
    fn leaf(key: K) -> Box<Self> {
        Box::new(Node {
            key,
            left: None,
            right: None,
        })
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// This node's left child, if any. Every key below it is less than
    /// `self.key()`.
    pub fn left(&self) -> Option<&Node<K>> {
        self.left.as_deref()
    }

    /// This node's right child, if any. Every key below it is greater than
    /// `self.key()`.
    pub fn right(&self) -> Option<&Node<K>> {
        self.right.as_deref()
    }

    /// The number of edges on the longest downward path from this node to a
    /// leaf. A leaf has height 0; an empty child slot contributes -1.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::from_keys(vec![2, 1, 3]);
    /// let root = tree.root().unwrap();
    ///
    /// assert_eq!(root.height(), 1);
    /// assert_eq!(root.left().unwrap().height(), 0);
    /// ```
    pub fn height(&self) -> i32 {
        1 + subtree_height(&self.left).max(subtree_height(&self.right))
    }
}

/// A Binary Search Tree over unique, totally-ordered keys.
///
/// Built height-balanced from any unsorted (and possibly duplicated) input,
/// mutated freely afterwards, and rebalanced only when asked. See the
/// [crate docs](crate) for the balancing policy.
#[derive(Clone, Debug)]
pub struct Tree<K> {
    pub(crate) root: Link<K>,
    build_keys: Vec<K>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Clone> FromIterator<K> for Tree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::from_keys(iter.into_iter().collect())
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: None,
            build_keys: Vec::new(),
        }
    }

    /// Builds a height-balanced tree from arbitrary input. Duplicates are
    /// dropped and the keys sorted ascending first, so input order never
    /// affects the resulting shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::from_keys(vec![5, 15, 7, 20, 17, 25]);
    ///
    /// assert_eq!(tree.root().map(|n| *n.key()), Some(17));
    /// assert!(tree.is_balanced());
    /// assert_eq!(tree.build_keys(), [5, 7, 15, 17, 20, 25]);
    /// ```
    pub fn from_keys(mut keys: Vec<K>) -> Self
    where
        K: Ord + Clone,
    {
        keys.sort_unstable();
        keys.dedup();
        Self {
            root: build_balanced(keys.clone()),
            build_keys: keys,
        }
    }

    /// The root node, if the tree is non-empty.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Whether the tree holds no keys at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The deduplicated, sorted sequence the tree was built from. This is a
    /// construction byproduct: later inserts and deletes do not update it.
    pub fn build_keys(&self) -> &[K] {
        &self.build_keys
    }

    /// Inserts a new key as a leaf at the first absent slot on its search
    /// path. The tree is **not** rebalanced; a long run of ordered inserts
    /// will skew it until [`Tree::rebalance`] is called.
    ///
    /// Inserting a key that is already present is rejected with
    /// [`TreeError::DuplicateKey`] and leaves the tree untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::{Tree, TreeError};
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert_eq!(tree.insert(1), Ok(()));
    /// assert_eq!(tree.insert(1), Err(TreeError::DuplicateKey));
    /// ```
    pub fn insert(&mut self, key: K) -> TreeResult<()>
    where
        K: Ord,
    {
        let mut cur = &mut self.root;
        loop {
            match cur {
                Some(node) => match key.cmp(&node.key) {
                    Ordering::Less => cur = &mut node.left,
                    Ordering::Greater => cur = &mut node.right,
                    Ordering::Equal => return Err(TreeError::DuplicateKey),
                },
                None => {
                    *cur = Some(Node::leaf(key));
                    return Ok(());
                }
            }
        }
    }

    /// Deletes the node holding the given key and returns the evicted key.
    ///
    /// A leaf is detached from its parent; a node with one child is spliced
    /// out by promoting that child; a node with two children takes over its
    /// in-order successor's key (the leftmost key of its right subtree) and
    /// the successor is detached from its old slot instead.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyTree`] when the tree has no nodes and
    /// [`TreeError::NotFound`] when the key is absent; the tree is unchanged
    /// in both cases.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::{Tree, TreeError};
    ///
    /// let mut tree = Tree::from_keys(vec![2, 1, 3]);
    ///
    /// assert_eq!(tree.delete(&2), Ok(2));
    /// assert_eq!(tree.delete(&2), Err(TreeError::NotFound));
    /// assert!(tree.find(&1).is_some());
    /// assert!(tree.find(&3).is_some());
    /// ```
    pub fn delete(&mut self, key: &K) -> TreeResult<K>
    where
        K: Ord,
    {
        if self.root.is_none() {
            return Err(TreeError::EmptyTree);
        }
        remove_from(&mut self.root, key)
    }

    /// Potentially finds the node holding the given key. If no node has the
    /// key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::from_keys(vec![23, 9, 19, 20, 15, 10, 8]);
    /// let nine = tree.find(&9).unwrap();
    ///
    /// assert_eq!(nine.left().map(|n| *n.key()), Some(8));
    /// assert_eq!(nine.right().map(|n| *n.key()), Some(10));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, key: &K) -> Option<&Node<K>>
    where
        K: Ord,
    {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            match key.cmp(&node.key) {
                Ordering::Less => cur = node.left.as_deref(),
                Ordering::Greater => cur = node.right.as_deref(),
                Ordering::Equal => return Some(node),
            }
        }
        None
    }

    /// The height of the node holding the given key, or -1 when the key is
    /// absent. For a node in hand, use [`Node::height`] directly.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::from_keys(vec![23, 9, 19, 20, 15, 10, 8]);
    ///
    /// assert_eq!(tree.height(&15), 2);
    /// assert_eq!(tree.height(&8), 0);
    /// assert_eq!(tree.height(&3), -1);
    /// ```
    pub fn height(&self, key: &K) -> i32
    where
        K: Ord,
    {
        self.find(key).map_or(-1, Node::height)
    }

    /// The level of the node holding the given key, counting from 1 at the
    /// root, or -1 when the key is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::from_keys(vec![23, 9, 19, 20, 15, 10, 8]);
    ///
    /// assert_eq!(tree.depth(&15), 1);
    /// assert_eq!(tree.depth(&8), 3);
    /// assert_eq!(tree.depth(&42), -1);
    /// ```
    pub fn depth(&self, key: &K) -> i32
    where
        K: Ord,
    {
        let mut level = 1;
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            match key.cmp(&node.key) {
                Ordering::Less => cur = node.left.as_deref(),
                Ordering::Greater => cur = node.right.as_deref(),
                Ordering::Equal => return level,
            }
            level += 1;
        }
        -1
    }

    /// Like [`Tree::depth`] but for a node reference, typically one returned
    /// by [`Tree::find`] or a traversal. The walk re-descends from the root
    /// steered by the target's key (nodes store no parent pointers) and
    /// matches on identity, so a node that is not actually part of this tree
    /// walks off the bottom and yields -1.
    pub fn depth_of(&self, target: &Node<K>) -> i32
    where
        K: Ord,
    {
        let mut level = 1;
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            if std::ptr::eq(node, target) {
                return level;
            }
            cur = if target.key < node.key {
                node.left.as_deref()
            } else {
                node.right.as_deref()
            };
            level += 1;
        }
        -1
    }

    /// Whether every node's child subtrees are within one level of each
    /// other in height. An empty tree is balanced.
    ///
    /// Trees produced by [`Tree::from_keys`] or [`Tree::rebalance`] always
    /// report `true`; chains of skewed inserts eventually flip this to
    /// `false`.
    pub fn is_balanced(&self) -> bool {
        balanced_height(&self.root) != -1
    }

    /// Rebuilds the tree with the balanced-construction policy if it is not
    /// currently balanced. Returns whether a rebuild happened, so calling
    /// this twice in a row always returns `false` the second time.
    ///
    /// The keys are recovered by an in-order teardown of the existing nodes,
    /// which yields them ascending and already unique.
    pub fn rebalance(&mut self) -> bool {
        if self.is_balanced() {
            return false;
        }

        let mut keys = Vec::new();
        let mut stack: Vec<Box<Node<K>>> = Vec::new();
        let mut cur = self.root.take();
        while cur.is_some() || !stack.is_empty() {
            while let Some(mut node) = cur {
                cur = node.left.take();
                stack.push(node);
            }
            if let Some(node) = stack.pop() {
                let Node { key, right, .. } = *node;
                keys.push(key);
                cur = right;
            }
        }

        self.root = build_balanced(keys);
        debug_assert!(self.is_balanced());
        true
    }
}

/// Recursively builds a height-balanced subtree over a deduplicated,
/// ascending key sequence. The midpoint (`len / 2`) becomes the subtree
/// root; the halves on either side become its children. This policy is the
/// single definition of "balanced build", shared by construction and
/// [`Tree::rebalance`].
fn build_balanced<K>(mut keys: Vec<K>) -> Link<K> {
    if keys.is_empty() {
        return None;
    }
    let mid = keys.len() / 2;
    let upper = keys.split_off(mid + 1);
    let key = keys.pop().expect("the split leaves the midpoint behind");
    Some(Box::new(Node {
        key,
        left: build_balanced(keys),
        right: build_balanced(upper),
    }))
}

fn subtree_height<K>(link: &Link<K>) -> i32 {
    match link.as_deref() {
        Some(node) => node.height(),
        None => -1,
    }
}

/// Computes a subtree's height while propagating -1 as an "unbalanced"
/// sentinel: a subtree is unbalanced if either child is, or if the child
/// heights differ by more than 1. Empty subtrees count as height 0 here so
/// the sentinel never collides with a real height.
fn balanced_height<K>(link: &Link<K>) -> i32 {
    let node = match link.as_deref() {
        Some(node) => node,
        None => return 0,
    };
    let left = balanced_height(&node.left);
    let right = balanced_height(&node.right);
    if left == -1 || right == -1 || (left - right).abs() > 1 {
        return -1;
    }
    left.max(right) + 1
}

/// Finds the link holding `key` below `link` and splices its node out.
fn remove_from<K: Ord>(link: &mut Link<K>, key: &K) -> TreeResult<K> {
    let ordering = match link.as_deref() {
        Some(node) => key.cmp(&node.key),
        None => return Err(TreeError::NotFound),
    };
    match ordering {
        Ordering::Less => remove_from(&mut link.as_mut().expect("peeked a node above").left, key),
        Ordering::Greater => {
            remove_from(&mut link.as_mut().expect("peeked a node above").right, key)
        }
        Ordering::Equal => {
            let mut node = link.take().expect("peeked a node above");
            if node.left.is_some() && node.right.is_some() {
                // Two children: the in-order successor (leftmost of the
                // right subtree) takes over this slot's key and is detached
                // from its old position, which by definition has no left
                // child and so reduces to the simple cases.
                let successor =
                    detach_min(&mut node.right).expect("a node with two children has a right one");
                let evicted = mem::replace(&mut node.key, successor.key);
                *link = Some(node);
                Ok(evicted)
            } else {
                // Leaf or single child: promote the child (if any) into this
                // slot.
                let child = node.left.take().or_else(|| node.right.take());
                *link = child;
                Ok(node.key)
            }
        }
    }
}

/// Detaches and returns the leftmost node below `link`, promoting its right
/// child (it cannot have a left one) into the vacated slot.
fn detach_min<K>(link: &mut Link<K>) -> Link<K> {
    let has_left = match link.as_deref() {
        Some(node) => node.left.is_some(),
        None => return None,
    };
    if has_left {
        detach_min(&mut link.as_mut().expect("peeked a node above").left)
    } else {
        let mut node = link.take().expect("peeked a node above");
        *link = node.right.take();
        Some(node)
    }
}


#[cfg(test)]
mod quicktests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::test::quick::Op;

    /// Applies a set of operations to a tree and a `BTreeSet`. This way we
    /// can ensure that after a random smattering of inserts, deletes, and
    /// rebalances we hold the same set of keys as the reference container.
    fn do_ops(ops: &[Op<i8>], tree: &mut Tree<i8>, set: &mut BTreeSet<i8>) {
        for op in ops {
            match op {
                Op::Insert(k) => {
                    assert_eq!(tree.insert(*k).is_ok(), set.insert(*k));
                }
                Op::Remove(k) => {
                    assert_eq!(tree.delete(k).ok(), set.take(k));
                }
                Op::Rebalance => {
                    tree.rebalance();
                }
            }
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_matches_btreeset(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::new();
            let mut set = BTreeSet::new();

            do_ops(&ops, &mut tree, &mut set);
            let keys: Vec<i8> = tree.iter().copied().collect();

            keys.windows(2).all(|pair| pair[0] < pair[1])
                && keys == set.iter().copied().collect::<Vec<_>>()
        }
    }

    quickcheck::quickcheck! {
        fn build_round_trips_sorted_deduped_input(xs: Vec<i8>) -> bool {
            let tree = Tree::from_keys(xs.clone());

            let mut expected = xs;
            expected.sort_unstable();
            expected.dedup();

            tree.is_balanced()
                && tree.iter().copied().collect::<Vec<_>>() == expected
        }
    }

    quickcheck::quickcheck! {
        fn rebalance_always_restores_balance(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::new();
            let mut set = BTreeSet::new();

            do_ops(&ops, &mut tree, &mut set);
            tree.rebalance();

            // Rebalancing must not lose or invent keys either.
            tree.is_balanced()
                && !tree.rebalance()
                && set.iter().all(|k| tree.find(k).is_some())
        }
    }
}
