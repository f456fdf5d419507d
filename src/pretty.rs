//! Debug visualization: renders a tree as indented ASCII art, right subtree
//! above the node and left subtree below, with box-drawing connectors.
//!
//! Purely a read-only helper for humans; nothing here is part of the data
//! structure's contract.

use std::fmt::{self, Display, Write};

use crate::tree::{Node, Tree};

/// Writes the tree to the given sink, one node per line. An empty tree
/// writes nothing.
///
/// # Examples
///
/// ```
/// use balanced_bst::{pretty, Tree};
///
/// let tree = Tree::from_keys(vec![2, 1, 3]);
/// let mut out = String::new();
/// pretty::write_tree(&mut out, &tree).unwrap();
///
/// assert_eq!(out, "│   ┌── 3\n└── 2\n    └── 1\n");
/// ```
pub fn write_tree<K, W>(w: &mut W, tree: &Tree<K>) -> fmt::Result
where
    K: Display,
    W: Write,
{
    match tree.root() {
        Some(root) => write_node(w, root, "", true),
        None => Ok(()),
    }
}

/// Renders the tree into a fresh `String`. See [`write_tree`].
pub fn render<K: Display>(tree: &Tree<K>) -> String {
    let mut out = String::new();
    write_tree(&mut out, tree).expect("writing to a String cannot fail");
    out
}

fn write_node<K, W>(w: &mut W, node: &Node<K>, prefix: &str, is_left: bool) -> fmt::Result
where
    K: Display,
    W: Write,
{
    if let Some(right) = node.right() {
        let pad = if is_left { "│   " } else { "    " };
        write_node(w, right, &format!("{}{}", prefix, pad), false)?;
    }
    let connector = if is_left { "└── " } else { "┌── " };
    writeln!(w, "{}{}{}", prefix, connector, node.key())?;
    if let Some(left) = node.left() {
        let pad = if is_left { "    " } else { "│   " };
        write_node(w, left, &format!("{}{}", prefix, pad), true)?;
    }
    Ok(())
}

impl<K: Display> Display for Tree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tree(f, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_right_subtree_above_and_left_below() {
        let tree = Tree::from_keys(vec![23, 9, 19, 20, 15, 10, 8]);

        let expected = "\
│       ┌── 23
│   ┌── 20
│   │   └── 19
└── 15
    │   ┌── 10
    └── 9
        └── 8
";
        assert_eq!(render(&tree), expected);
    }

    #[test]
    fn renders_single_node_as_sole_left_line() {
        let tree = Tree::from_keys(vec![42]);
        assert_eq!(render(&tree), "└── 42\n");
    }

    #[test]
    fn renders_empty_tree_as_nothing() {
        let tree = Tree::<i32>::new();
        assert_eq!(render(&tree), "");
        assert_eq!(tree.to_string(), "");
    }
}
