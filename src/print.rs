use std::{
    fmt::{self, Display},
    io,
};

use crate::{AvlTree, Node};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE_INDENT: &str = "│   ";
const BLANK_INDENT: &str = "    ";

impl<K: Display> AvlTree<K> {
    /// Writes the in-order keys, space separated, without a trailing newline.
    pub fn write_in_order<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        write_keys(self.in_order(), out)
    }

    /// Writes the pre-order keys, space separated, without a trailing newline.
    pub fn write_pre_order<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        write_keys(self.pre_order(), out)
    }

    /// Writes the indented structural dump; the same text `Display` produces.
    pub fn print_tree<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }
}

fn write_keys<'a, K, W>(keys: impl Iterator<Item = &'a K>, out: &mut W) -> io::Result<()>
where
    K: Display + 'a,
    W: io::Write,
{
    for (i, key) in keys.enumerate() {
        if i > 0 {
            out.write_all(b" ")?;
        }
        write!(out, "{key}")?;
    }
    Ok(())
}

/// One line per node, left child before right. The left child always gets
/// `├── ` even when it has no right sibling.
fn dump<K: Display>(
    node: Option<&Node<K>>,
    indent: &str,
    last: bool,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    let Some(node) = node else {
        return Ok(());
    };
    let branch = if last { LAST_BRANCH } else { BRANCH };
    writeln!(f, "{indent}{branch}{}", node.key())?;
    let child_indent = format!("{indent}{}", if last { BLANK_INDENT } else { PIPE_INDENT });
    dump(node.left(), &child_indent, false, f)?;
    dump(node.right(), &child_indent, true, f)
}

impl<K: Display> Display for AvlTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dump(self.root(), "", true, f)
    }
}

#[cfg(test)]
mod test {
    use std::io;

    use crate::AvlTree;
    use pretty_assertions::assert_eq;

    fn tree_of(keys: &[i32]) -> AvlTree {
        let mut tree = AvlTree::new();
        for key in keys {
            tree.insert(*key);
        }
        tree
    }

    #[test]
    fn empty_tree_prints_nothing() {
        let tree = AvlTree::<i32>::new();
        assert_eq!("", tree.to_string());
        let mut out = Vec::new();
        tree.write_in_order(&mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn write_in_order_separates_with_spaces() {
        let tree = tree_of(&[10, 5, 15, 3, 8, 12, 20]);
        let mut out = Vec::new();
        tree.write_in_order(&mut out).unwrap();
        assert_eq!("3 5 8 10 12 15 20", String::from_utf8(out).unwrap());
    }

    #[test]
    fn write_pre_order_separates_with_spaces() {
        let tree = tree_of(&[10, 5, 15, 3, 8, 12, 20]);
        let mut out = Vec::new();
        tree.write_pre_order(&mut out).unwrap();
        assert_eq!("10 5 3 8 15 12 20", String::from_utf8(out).unwrap());
    }

    #[test]
    fn print_seeded_tree() {
        let tree = tree_of(&[10, 5, 15, 3, 8, 12, 20, 2, 4, 17, 25]);
        let expected = "\
└── 10
    ├── 5
    │   ├── 3
    │   │   ├── 2
    │   │   └── 4
    │   └── 8
    └── 15
        ├── 12
        └── 20
            ├── 17
            └── 25
";
        let mut out = Vec::new();
        tree.print_tree(&mut out).unwrap();
        assert_eq!(expected, String::from_utf8(out).unwrap());
        assert_eq!(expected, tree.to_string());
    }

    #[test]
    fn lone_left_child_is_not_last() {
        let tree = tree_of(&[2, 1]);
        assert_eq!("└── 2\n    ├── 1\n", tree.to_string());
    }

    #[test]
    fn writer_errors_propagate() {
        struct Broken;

        impl io::Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let tree = tree_of(&[1, 2]);
        assert!(tree.write_in_order(&mut Broken).is_err());
        assert!(tree.print_tree(&mut Broken).is_err());
    }
}
