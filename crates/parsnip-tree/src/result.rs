use crate::Node;

/// Callback run on each node's payload while the tree is released.
///
/// It receives the payload (`None` if the node had none) together with the
/// node's children, which are still intact at that point.
pub type Cleanup<'c, 'i, T> = dyn FnMut(Option<T>, &[ParseResult<'i, T>]) + 'c;

/// Outcome of matching one parsing expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseResult<'i, T> {
    /// The expression matched and produced a node.
    Success(Node<'i, T>),
    /// The expression matched without producing anything, like an absent
    /// optional or a predicate.
    Nil,
    /// The expression did not match.
    Failed,
}

impl<'i, T> ParseResult<'i, T> {
    pub const FAILED: Self = Self::Failed;
    pub const NIL: Self = Self::Nil;

    #[inline]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }

    #[inline]
    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn node(&self) -> Option<&Node<'i, T>> {
        match self {
            Self::Success(node) => Some(node),
            Self::Nil | Self::Failed => None,
        }
    }

    pub fn into_node(self) -> Option<Node<'i, T>> {
        match self {
            Self::Success(node) => Some(node),
            Self::Nil | Self::Failed => None,
        }
    }

    /// Releases the tree, passing every payload to `cleanup` before the
    /// children of its node are released. `Nil` and `Failed` own nothing and
    /// are left alone.
    pub fn release(self, mut cleanup: impl FnMut(Option<T>, &[ParseResult<'i, T>])) {
        self.release_with(&mut cleanup);
    }

    /// [`release`](Self::release) for callers holding a boxed callback.
    pub fn release_with(self, cleanup: &mut Cleanup<'_, 'i, T>) {
        match self {
            Self::Success(node) => node.release_with(cleanup),
            Self::Nil | Self::Failed => {}
        }
    }
}

impl<'i, T> From<Node<'i, T>> for ParseResult<'i, T> {
    fn from(node: Node<'i, T>) -> Self {
        Self::Success(node)
    }
}
