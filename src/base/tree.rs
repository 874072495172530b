pub mod forcats;
pub mod fortotals;
pub mod forweeks;

use crate::base;

/// A forest of text nodes. Top-level nodes are written flush left and their
/// descendants are indented with the charset's tree symbols.
pub struct Tree<'a> {
    pub(crate) charset: &'a base::Charset,
    pub(crate) root: Node,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Node {
    pub(crate) data: std::borrow::Cow<'static, str>,
    pub(crate) children: Vec<Self>,
}

impl Node {
    pub(crate) fn new(data: std::borrow::Cow<'static, str>) -> Self {
        Self {
            data,
            children: Vec::new(),
        }
    }

    /// Appends a child and returns it.
    pub(crate) fn push(&mut self, data: impl Into<std::borrow::Cow<'static, str>>) -> &mut Self {
        let i = self.children.len();
        self.children.push(Self::new(data.into()));
        &mut self.children[i]
    }
}

impl std::fmt::Display for Tree<'_> {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn write_node(
            node: &Node,
            f: &mut std::fmt::Formatter,
            preprefix: &mut String,
            is_last_child_of_parent: bool,
            charset: &base::Charset,
        ) -> std::fmt::Result {
            let (prefix_tail, child_prefix_tail) = if is_last_child_of_parent {
                (charset.tree_corner, charset.tree_space)
            } else {
                (charset.tree_sideways_t, charset.tree_pipe_gap)
            };
            writeln!(f, "{}{}{}", preprefix, prefix_tail, node.data)?;
            preprefix.push_str(child_prefix_tail);
            for (i, child) in node.children.iter().enumerate() {
                write_node(child, f, preprefix, i + 1 == node.children.len(), charset)?;
            }
            preprefix.truncate(preprefix.len() - child_prefix_tail.len());
            Ok(())
        }

        let mut preprefix = String::new();
        for top in self.root.children.iter() {
            writeln!(f, "{}", top.data)?;
            for (i, child) in top.children.iter().enumerate() {
                write_node(
                    child,
                    f,
                    &mut preprefix,
                    i + 1 == top.children.len(),
                    self.charset,
                )?;
            }
        }
        Ok(())
    }
}
