//! Indented text listing of a tree.

use std::fmt;

use crate::types::Tree;

/// `Display` adapter returned by [`Tree::render`].
pub struct Rendered<'a, T, P> {
    tree: &'a Tree<T, P>,
    indent: &'a str,
}

impl<T, P> Tree<T, P> {
    /// One value per line in pre-order, indented one space per level.
    ///
    /// # Examples
    ///
    /// ```
    /// use gentree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new("/root");
    /// let root = tree.root().unwrap();
    /// let b = tree.insert(root, "/b").unwrap();
    /// tree.insert(b, "/b/x").unwrap();
    /// tree.insert(root, "/c").unwrap();
    ///
    /// assert_eq!(tree.render().to_string(), "/root\n /b\n  /b/x\n /c\n");
    /// ```
    pub fn render(&self) -> Rendered<'_, T, P> {
        self.render_with(" ")
    }

    /// Like [`render`](Self::render) with a custom per-level indent.
    pub fn render_with<'a>(&'a self, indent: &'a str) -> Rendered<'a, T, P> {
        Rendered { tree: self, indent }
    }
}

impl<T: fmt::Display, P> fmt::Display for Rendered<'_, T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.tree.pre_order();
        while let Some((_, value)) = iter.next() {
            for _ in 0..iter.depth() {
                f.write_str(self.indent)?;
            }
            writeln!(f, "{}", value)?;
        }
        Ok(())
    }
}
