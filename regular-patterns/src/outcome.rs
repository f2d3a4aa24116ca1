/// The result of evaluating a [`Pattern`](crate::Pattern) at one start offset.
///
/// ```
/// use regular_patterns::Outcome;
///
/// assert!(Outcome::Success(3).is_success());
/// assert_eq!(Outcome::Success(3).end(), Some(3));
/// assert_eq!(Outcome::Backtrack.end(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Hard failure: this start offset can never succeed on this branch.
    ///
    /// Stops a wildcard's inner scan, but not the outer scan of a find query.
    Abort,
    /// Soft failure: the caller may retry at another offset.
    Backtrack,
    /// Matched, with the cursor just past the consumed text.
    Success(usize),
}

impl Outcome {
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    #[inline]
    pub fn is_abort(self) -> bool {
        matches!(self, Outcome::Abort)
    }

    /// The end cursor of a [`Outcome::Success`].
    #[inline]
    pub fn end(self) -> Option<usize> {
        match self {
            Outcome::Success(end) => Some(end),
            _ => None,
        }
    }
}
