use std::{fmt, ops::Range};

use crate::{
    matcher::{Input, Matcher, Matches},
    Sealed,
};

/// A half-open `[start, end)` range of a haystack.
///
/// Intervals are both the output of queries and the input of follow-up ones: a query on an interval searches only within it, and [`Interval::find_after`]/[`Interval::between`] continue right after another interval.
///
/// The text is only sliced when asked for, with [`Interval::as_str`] or [`Display`](fmt::Display).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval<'h> {
    haystack: &'h str,
    start: usize,
    end: usize,
}

impl<'h> Interval<'h> {
    /// Returns `None` unless `range` is a valid, non-reversed range of char boundaries of `haystack`.
    pub fn new(haystack: &'h str, range: Range<usize>) -> Option<Self> {
        (range.start <= range.end
            && haystack.is_char_boundary(range.start)
            && haystack.is_char_boundary(range.end))
        .then(|| Self::new_unchecked(haystack, range.start, range.end))
    }

    /// The whole haystack.
    pub fn full(haystack: &'h str) -> Self {
        Self::new_unchecked(haystack, 0, haystack.len())
    }

    /// Like [`Interval::new`], but panics on an invalid range.
    ///
    /// Mainly for tests.
    pub fn must(haystack: &'h str, range: Range<usize>) -> Self {
        match Self::new(haystack, range.clone()) {
            Some(interval) => interval,
            None => panic!("invalid interval {range:?} of a haystack of length {}", haystack.len()),
        }
    }

    #[inline]
    pub(crate) fn new_unchecked(haystack: &'h str, start: usize, end: usize) -> Self {
        debug_assert!(start <= end && end <= haystack.len());
        Self {
            haystack,
            start,
            end,
        }
    }

    #[inline]
    pub fn haystack(&self) -> &'h str {
        self.haystack
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// The text of this interval.
    ///
    /// Empty if a [custom pattern](crate::Pattern::custom) produced a cursor that is not a char boundary.
    #[inline]
    pub fn as_str(&self) -> &'h str {
        self.haystack.get(self.range()).unwrap_or_default()
    }

    /// Whether `matcher` matches this interval exactly.
    pub fn is_match(&self, matcher: &Matcher) -> bool {
        matcher.is_match(self)
    }

    /// The first match of `matcher` within this interval.
    pub fn find(&self, matcher: &Matcher) -> Option<Interval<'h>> {
        matcher.find(self)
    }

    /// All non-overlapping matches of `matcher` within this interval.
    pub fn find_iter<'m>(&self, matcher: &'m Matcher) -> Matches<'m, 'h> {
        matcher.find_iter(self)
    }

    /// The first match of `matcher` after `prev` and within this interval.
    ///
    /// Used to extract consecutive fields without scanning the interval again:
    /// ```
    /// use regular_patterns::{Interval, Matcher, Pattern};
    ///
    /// let hay = "<a>1</a><b>2</b>";
    /// let a = Matcher::new([Pattern::text("<a>").call()])?;
    /// let b = Matcher::new([Pattern::text("<b>").call()])?;
    /// let item = Interval::full(hay);
    /// let prev = item.find(&a).unwrap();
    /// assert_eq!(item.find_after(&prev, &b).unwrap().range(), 8..11);
    /// assert!(item.find_after(&prev, &a).is_none());
    /// # Ok::<(), regular_patterns::CompileError>(())
    /// ```
    pub fn find_after(&self, prev: &Interval<'h>, matcher: &Matcher) -> Option<Interval<'h>> {
        matcher.find(
            Input::builder(self.haystack)
                .start(prev.end.max(self.start))
                .end(self.end)
                .build(),
        )
    }

    /// The text between the end of this interval and the start of the next match of `matcher`, searched to the end of the haystack.
    ///
    /// See [`Matcher::between`].
    pub fn between(&self, matcher: &Matcher) -> Option<Interval<'h>> {
        matcher.between(self)
    }
}

impl fmt::Debug for Interval<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interval")
            .field("range", &self.range())
            .field("text", &self.as_str())
            .finish()
    }
}

impl fmt::Display for Interval<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Interval<'_>> for Range<usize> {
    fn from(interval: Interval<'_>) -> Self {
        interval.range()
    }
}

impl<'h> From<Interval<'h>> for &'h str {
    fn from(interval: Interval<'h>) -> Self {
        interval.as_str()
    }
}

/// Chaining helpers for `Option<Interval>`, which is what most queries return.
///
/// ```
/// use regular_patterns::{Interval, Matcher, OptionIntervalExt, Pattern};
///
/// let open = Matcher::new([Pattern::text("<title>").call()])?;
/// let close = Matcher::new([Pattern::text("</title>").call()])?;
/// let hay = "<title>RSS Tutorial</title>";
/// assert_eq!(open.find(hay).between(&close).as_str(), "RSS Tutorial");
/// assert_eq!(close.find(hay).between(&close).as_str(), "");
/// # Ok::<(), regular_patterns::CompileError>(())
/// ```
pub trait OptionIntervalExt<'h>: Sealed + Into<Option<Interval<'h>>> + Sized {
    /// See [`Interval::between`].
    fn between(self, matcher: &Matcher) -> Option<Interval<'h>> {
        self.into().and_then(|interval| interval.between(matcher))
    }

    /// The text of the interval, or `""` if there is none.
    fn as_str(self) -> &'h str {
        self.into().map_or("", |interval| interval.as_str())
    }
}

impl Sealed for Option<Interval<'_>> {}
impl<'h> OptionIntervalExt<'h> for Option<Interval<'h>> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval() {
        let hay = "say 葬送";
        let interval = Interval::must(hay, 4..10);
        assert_eq!(interval.as_str(), "葬送");
        assert_eq!(interval.to_string(), "葬送");
        assert_eq!(interval.len(), 6);
        assert!(!interval.is_empty());
        assert_eq!(Range::from(interval), 4..10);
        assert_eq!(
            format!("{interval:?}"),
            r#"Interval { range: 4..10, text: "葬送" }"#
        );

        assert!(Interval::new(hay, 5..10).is_none());
        assert!(Interval::new(hay, 4..3).is_none());
        assert!(Interval::new(hay, 4..11).is_none());
        assert!(Interval::new(hay, 10..10).unwrap().is_empty());
    }

    #[test]
    #[should_panic]
    fn must() {
        Interval::must("abc", 2..1);
    }
}
