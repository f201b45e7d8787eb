use std::fmt::{self, Write as _};

use parsnip_span::Region;
use text_size::TextRange;

use crate::{Cleanup, ParseResult};

/// A successfully matched parsing expression.
#[derive(Clone, PartialEq, Eq)]
pub struct Node<'i, T> {
    region: Region<'i>,
    data: Option<T>,
    children: Vec<ParseResult<'i, T>>,
}

impl<'i, T> Node<'i, T> {
    /// A node with no children.
    pub fn leaf(region: Region<'i>, data: Option<T>) -> Self {
        Self { region, data, children: Vec::new() }
    }

    /// Takes ownership of `children`. None of them may be a failure.
    #[track_caller]
    pub fn new(region: Region<'i>, data: Option<T>, children: Vec<ParseResult<'i, T>>) -> Self {
        assert!(
            !children.iter().any(ParseResult::is_failed),
            "a failed match can't be a child of a node"
        );
        Self { region, data, children }
    }

    #[inline]
    pub fn region(&self) -> Region<'i> {
        self.region
    }

    #[inline]
    pub fn range(&self) -> TextRange {
        self.region.range()
    }

    /// The matched text.
    #[inline]
    pub fn text(&self) -> &'i str {
        self.region.text()
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn data_mut(&mut self) -> Option<&mut T> {
        self.data.as_mut()
    }

    pub fn take_data(&mut self) -> Option<T> {
        self.data.take()
    }

    pub fn children(&self) -> &[ParseResult<'i, T>] {
        &self.children
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Releases the node and its descendants.
    ///
    /// `cleanup` sees this node's payload while the children are still
    /// alive. Then each child is released the same way, in order, then the
    /// child storage and finally the node itself.
    pub fn release(self, mut cleanup: impl FnMut(Option<T>, &[ParseResult<'i, T>])) {
        self.release_with(&mut cleanup);
    }

    pub fn release_with(self, cleanup: &mut Cleanup<'_, 'i, T>) {
        let Self { region: _, data, children } = self;
        cleanup(data, children.as_slice());

        for child in children {
            child.release_with(cleanup);
        }
    }

    /// An indented dump of the tree, one node per line.
    pub fn debug_dump(&self) -> String
    where
        T: fmt::Debug,
    {
        let mut out = String::new();
        self.dump(&mut out, 0);
        out
    }

    fn dump(&self, out: &mut String, depth: usize)
    where
        T: fmt::Debug,
    {
        let indent = depth * 2;
        let range = self.range();
        let _ = write!(out, "{:indent$}{range:?} {:?}", "", self.text());
        if let Some(data) = &self.data {
            let _ = write!(out, " => {data:?}");
        }
        out.push('\n');

        for child in &self.children {
            match child {
                ParseResult::Success(node) => node.dump(out, depth + 1),
                ParseResult::Nil => {
                    let _ = writeln!(out, "{:indent$}nil", "", indent = indent + 2);
                }
                ParseResult::Failed => unreachable!("failed child"),
            }
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("range", &self.range())
            .field("data", &self.data)
            .field("children", &self.children)
            .finish()
    }
}
