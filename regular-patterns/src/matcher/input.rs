use std::ops::Range;

use bon::Builder;
use rp_unicode::str::StrBoundaryExt;

use super::Interval;

/// A haystack and the range of it to search.
///
/// Usually created implicitly from a `&str` (the whole haystack) or an [`Interval`] (only the interval). For other ranges:
/// ```
/// use regular_patterns::{Input, Matcher, Pattern};
///
/// let matcher = Matcher::new([Pattern::text("abc").call()])?;
/// let input = Input::builder("abcabc").start(1).build();
/// assert_eq!(matcher.find(input).unwrap().range(), 3..6);
/// assert!(matcher.find(Input::builder("abcabc").start(1).end(5).build()).is_none());
/// # Ok::<(), regular_patterns::CompileError>(())
/// ```
#[derive(Builder, Clone, Copy, Debug)]
pub struct Input<'h> {
    #[builder(start_fn)]
    pub(crate) haystack: &'h str,
    /// Start offset of the search. Rounded up to a char boundary.
    #[builder(default)]
    pub(crate) start: usize,
    /// End offset (the limit) of the search, defaults to the end of the haystack. Rounded down to a char boundary and clamped to the haystack length.
    pub(crate) end: Option<usize>,
}

impl<'h> Input<'h> {
    #[inline]
    pub fn haystack(&self) -> &'h str {
        self.haystack
    }

    /// The effective `start..limit`, on char boundaries and with `start <= limit`.
    pub fn span(&self) -> Range<usize> {
        let limit = self
            .haystack
            .floor_boundary(self.end.unwrap_or(self.haystack.len()));
        let start = self.haystack.ceil_boundary(self.start).min(limit);
        start..limit
    }
}

impl<'h> From<&'h str> for Input<'h> {
    #[inline]
    fn from(haystack: &'h str) -> Self {
        Input {
            haystack,
            start: 0,
            end: None,
        }
    }
}

impl<'h> From<&'h String> for Input<'h> {
    #[inline]
    fn from(haystack: &'h String) -> Self {
        Input::from(haystack.as_str())
    }
}

/// Searches only within the interval.
impl<'h> From<Interval<'h>> for Input<'h> {
    #[inline]
    fn from(interval: Interval<'h>) -> Self {
        Input {
            haystack: interval.haystack(),
            start: interval.start(),
            end: Some(interval.end()),
        }
    }
}

impl<'h> From<&Interval<'h>> for Input<'h> {
    #[inline]
    fn from(interval: &Interval<'h>) -> Self {
        Input::from(*interval)
    }
}

impl<'h> From<(&'h str, Range<usize>)> for Input<'h> {
    #[inline]
    fn from((haystack, range): (&'h str, Range<usize>)) -> Self {
        Input {
            haystack,
            start: range.start,
            end: Some(range.end),
        }
    }
}
