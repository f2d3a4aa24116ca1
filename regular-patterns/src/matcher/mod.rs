/*!
Compiled queries.

A [`Matcher`] compiles a pattern sequence once and then answers the four queries against any number of haystacks:

| Query | Method | Terminal | Start offsets |
| --- | --- | --- | --- |
| Match | [`Matcher::is_match`] | [`Terminal::Anchored`] | only the start |
| RangeOf | [`Matcher::find`] | [`Terminal::Open`] | every char until the first match |
| RangesOf | [`Matcher::find_iter`] | [`Terminal::Open`] | every char, resuming after each match |
| Between | [`Matcher::between`] | [`Terminal::Open`] | from the end of an interval |

## Example
```
use regular_patterns::{Matcher, Pattern};

let matcher = Matcher::new([Pattern::text("abc").call()])?;
assert!(matcher.is_match("abcabc") == false);
assert_eq!(matcher.find("abcabc").unwrap().range(), 0..3);
assert_eq!(matcher.find_iter("abcabc").count(), 2);
# Ok::<(), regular_patterns::CompileError>(())
```
*/
use std::iter::FusedIterator;

use rp_unicode::str::StrBoundaryExt;

use crate::{
    chain::{Chain, Terminal},
    CompileError, Outcome, Pattern,
};

mod input;
mod interval;
#[cfg(feature = "perf-literal")]
mod prefilter;

pub use input::Input;
pub use interval::{Interval, OptionIntervalExt};

/// A compiled pattern sequence with the query operations on it.
///
/// `Matcher` holds no reference to any haystack, and is `Send + Sync`.
#[derive(Debug)]
pub struct Matcher {
    chain: Chain,
    #[cfg(feature = "perf-literal")]
    prefilter: Option<prefilter::Prefilter>,
}

impl Matcher {
    /// Compiles `patterns`. See [`Chain::compile`] for the errors.
    pub fn new(patterns: impl IntoIterator<Item = Pattern>) -> Result<Self, CompileError> {
        let chain = Chain::compile(patterns)?;
        #[cfg(feature = "perf-literal")]
        let prefilter = chain.patterns().next().and_then(prefilter::Prefilter::new);
        Ok(Self {
            chain,
            #[cfg(feature = "perf-literal")]
            prefilter,
        })
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    /// Whether the patterns match the whole input range, starting at its start and consuming exactly up to its end.
    ///
    /// ```
    /// use regular_patterns::{Input, Matcher, Pattern};
    ///
    /// let matcher = Matcher::new([Pattern::text("abc").call(), Pattern::ANY])?;
    /// assert!(matcher.is_match("abcdef"));
    /// assert!(matcher.is_match("xabc") == false);
    /// assert!(matcher.is_match(Input::builder("xabc").start(1).build()));
    /// # Ok::<(), regular_patterns::CompileError>(())
    /// ```
    pub fn is_match<'h>(&self, input: impl Into<Input<'h>>) -> bool {
        let input = input.into();
        let span = input.span();
        self.chain
            .eval(input.haystack(), span.start, span.end, Terminal::Anchored)
            .is_success()
    }

    /// The first match within the input range.
    ///
    /// Every char offset of the range is tried in turn. An `Abort` at one offset only ends that attempt.
    pub fn find<'h>(&self, input: impl Into<Input<'h>>) -> Option<Interval<'h>> {
        let input = input.into();
        let span = input.span();
        self.find_at(input.haystack(), span.start, span.end)
    }

    /// All non-overlapping matches within the input range, in ascending order.
    ///
    /// After a match, the search resumes at its end. After an empty match, it resumes at the next char.
    pub fn find_iter<'m, 'h>(&'m self, input: impl Into<Input<'h>>) -> Matches<'m, 'h> {
        let input = input.into();
        let span = input.span();
        Matches {
            matcher: self,
            haystack: input.haystack(),
            at: span.start,
            limit: span.end,
        }
    }

    /// The text between `interval` and the next match after it, excluding both.
    ///
    /// Searched to the end of the haystack, see [`Matcher::between_within`] to bound it.
    ///
    /// ```
    /// use regular_patterns::{Matcher, Pattern};
    ///
    /// let open = Matcher::new([Pattern::text("<title>").call()])?;
    /// let close = Matcher::new([Pattern::text("</title>").call()])?;
    /// let hay = "<title>RSS Tutorial</title>";
    /// let title = open.find(hay).and_then(|open| close.between(&open)).unwrap();
    /// assert_eq!(title.as_str(), "RSS Tutorial");
    /// # Ok::<(), regular_patterns::CompileError>(())
    /// ```
    pub fn between<'h>(&self, interval: &Interval<'h>) -> Option<Interval<'h>> {
        self.between_within(interval, interval.haystack().len())
    }

    /// Like [`Matcher::between`], but only searches up to `limit`.
    pub fn between_within<'h>(&self, interval: &Interval<'h>, limit: usize) -> Option<Interval<'h>> {
        let haystack = interval.haystack();
        let next = self.find(
            Input::builder(haystack)
                .start(interval.end())
                .end(limit)
                .build(),
        )?;
        Some(Interval::new_unchecked(
            haystack,
            interval.end(),
            next.start().max(interval.end()),
        ))
    }

    fn find_at<'h>(&self, haystack: &'h str, mut at: usize, limit: usize) -> Option<Interval<'h>> {
        while at < limit {
            #[cfg(feature = "perf-literal")]
            if let Some(prefilter) = &self.prefilter {
                at = prefilter.find(haystack, at, limit)?;
            }
            match self.chain.eval(haystack, at, limit, Terminal::Open) {
                // A custom pattern may report a cursor outside `at..=limit`
                Outcome::Success(end) if (at..=limit).contains(&end) => {
                    return Some(Interval::new_unchecked(haystack, at, end));
                }
                _ => (),
            }
            at = haystack.next_boundary(at);
        }
        None
    }
}

/// An iterator over all non-overlapping matches, created by [`Matcher::find_iter`].
#[derive(Clone, Debug)]
pub struct Matches<'m, 'h> {
    matcher: &'m Matcher,
    haystack: &'h str,
    at: usize,
    limit: usize,
}

impl<'m, 'h> Iterator for Matches<'m, 'h> {
    type Item = Interval<'h>;

    fn next(&mut self) -> Option<Self::Item> {
        let m = self.matcher.find_at(self.haystack, self.at, self.limit)?;
        self.at = if m.end() > m.start() {
            m.end()
        } else {
            self.haystack.next_boundary(m.start())
        };
        Some(m)
    }
}

impl FusedIterator for Matches<'_, '_> {}
