/*!
One-shot queries.

These compile the patterns for a single query. To run the same patterns against many haystacks, compile them once with [`Matcher::new`] instead.

Every query validates the pattern sequence before scanning, so a misplaced [`Pattern::END`] or an [`Pattern::ANY`] after [`Pattern::except`] is reported even if the haystack is empty. An empty pattern sequence matches nothing.

## Example
```
use regular_patterns::{query::{between, is_match, range_of, ranges_of}, Pattern};

let text = |s: &str| Pattern::text(s).call();
let hay = "abcabc";
assert_eq!(is_match(hay).call(&[text("abc")])?, false);
assert_eq!(is_match(hay).range(3..6).call(&[text("abc")])?, true);

let first = range_of(hay).call(&[text("abc")])?.unwrap();
assert_eq!(first.range(), 0..3);
let second = range_of(hay).after(first).call(&[text("abc")])?.unwrap();
assert_eq!(second.range(), 3..6);
assert_eq!(ranges_of(hay).call(&[text("b")])?.len(), 2);

let gap = between(first).call(&[text("c")])?.unwrap();
assert_eq!(gap.range(), 3..5);
# Ok::<(), regular_patterns::CompileError>(())
```
*/
use std::ops::Range;

use bon::builder;

use crate::{CompileError, Input, Interval, Matcher, Pattern};

fn input<'h>(haystack: &'h str, range: Option<Range<usize>>) -> Input<'h> {
    match range {
        Some(range) => Input::from((haystack, range)),
        None => Input::from(haystack),
    }
}

/// Whether `patterns` match the whole `range` of `haystack` (default: all of it).
///
/// See [`Matcher::is_match`].
#[builder]
pub fn is_match<'h, 'p>(
    #[builder(start_fn)] haystack: &'h str,
    #[builder(finish_fn)] patterns: &'p [Pattern],
    range: Option<Range<usize>>,
) -> Result<bool, CompileError> {
    if patterns.is_empty() {
        return Ok(false);
    }
    let matcher = Matcher::new(patterns.iter().cloned())?;
    Ok(matcher.is_match(input(haystack, range)))
}

/// The first match of `patterns` within `range` of `haystack` (default: all of it).
///
/// If `after` is given, the search starts at its end instead, which allows extracting consecutive fields without scanning again.
///
/// See [`Matcher::find`].
#[builder]
pub fn range_of<'h, 'p>(
    #[builder(start_fn)] haystack: &'h str,
    #[builder(finish_fn)] patterns: &'p [Pattern],
    range: Option<Range<usize>>,
    after: Option<Interval<'h>>,
) -> Result<Option<Interval<'h>>, CompileError> {
    if patterns.is_empty() {
        return Ok(None);
    }
    let matcher = Matcher::new(patterns.iter().cloned())?;
    let mut input = input(haystack, range);
    if let Some(after) = after {
        input.start = input.start.max(after.end());
    }
    Ok(matcher.find(input))
}

/// All non-overlapping matches of `patterns` within `range` of `haystack` (default: all of it), in ascending order.
///
/// See [`Matcher::find_iter`].
#[builder]
pub fn ranges_of<'h, 'p>(
    #[builder(start_fn)] haystack: &'h str,
    #[builder(finish_fn)] patterns: &'p [Pattern],
    range: Option<Range<usize>>,
) -> Result<Vec<Interval<'h>>, CompileError> {
    if patterns.is_empty() {
        return Ok(Vec::new());
    }
    let matcher = Matcher::new(patterns.iter().cloned())?;
    Ok(matcher.find_iter(input(haystack, range)).collect())
}

/// The text from the end of `interval` to the start of the next match of `patterns`, searched up to `limit` (default: the end of the haystack).
///
/// See [`Matcher::between`].
#[builder]
pub fn between<'h, 'p>(
    #[builder(start_fn)] interval: Interval<'h>,
    #[builder(finish_fn)] patterns: &'p [Pattern],
    limit: Option<usize>,
) -> Result<Option<Interval<'h>>, CompileError> {
    if patterns.is_empty() {
        return Ok(None);
    }
    let matcher = Matcher::new(patterns.iter().cloned())?;
    Ok(matcher.between_within(&interval, limit.unwrap_or(interval.haystack().len())))
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    fn text(s: &str) -> Pattern {
        Pattern::text(s).call()
    }

    #[test]
    fn empty_patterns() {
        assert_eq!(is_match("abc").call(&[]), Ok(false));
        assert_eq!(range_of("abc").call(&[]), Ok(None));
        assert_eq!(ranges_of("abc").call(&[]), Ok(Vec::new()));
        assert_eq!(between(Interval::full("abc")).call(&[]), Ok(None));
    }

    #[test]
    fn errors_before_scanning() {
        let misplaced = [Pattern::END, text("a")];
        let adjacent = [Pattern::except("a").call(), Pattern::ANY];
        for hay in ["", "abc"] {
            assert_eq!(
                range_of(hay).call(&misplaced),
                Err(CompileError::MisplacedEnd { index: 0 })
            );
            assert_eq!(
                is_match(hay).call(&adjacent),
                Err(CompileError::AnyAfterExcept { index: 1 })
            );
            assert_eq!(
                ranges_of(hay).call(&adjacent),
                Err(CompileError::AnyAfterExcept { index: 1 })
            );
        }
        assert_eq!(
            between(Interval::full("abc")).call(&misplaced),
            Err(CompileError::MisplacedEnd { index: 0 })
        );
    }

    #[test]
    fn match_vs_range_of() {
        let patterns = [text("abc")];
        assert_eq!(is_match("abcabc").range(0..6).call(&patterns), Ok(false));
        assert_eq!(
            range_of("abcabc").range(0..6).call(&patterns).unwrap().unwrap().range(),
            0..3
        );
    }

    #[test]
    fn not_found_is_distinct_from_empty_match() {
        assert_eq!(range_of("abc").call(&[text("x")]), Ok(None));
        let m = range_of("abc").call(&[Pattern::END]).unwrap().unwrap();
        assert_eq!(m.range(), 0..0);
        // An empty range has no start offsets to try
        assert_eq!(range_of("abc").range(1..1).call(&[Pattern::END]), Ok(None));
    }

    #[test]
    fn range_of_after() {
        let hay = "k=1;k=2;k=3";
        let patterns = [text("k=")];
        let first = range_of(hay).call(&patterns).unwrap().unwrap();
        let second = range_of(hay).after(first).call(&patterns).unwrap().unwrap();
        assert_eq!(second.range(), 4..6);
        let third = range_of(hay)
            .after(second)
            .range(0..10)
            .call(&patterns)
            .unwrap();
        assert_eq!(third.map(|m| m.range()), Some(8..10));
        // The last "k=" does not fit within the range
        assert_eq!(range_of(hay).after(second).range(0..9).call(&patterns), Ok(None));
    }

    #[test]
    fn ranges_of_items() {
        let hay = "<item>X</item>Y<item>Z</item>";
        let items = ranges_of(hay)
            .call(&[text("<item>"), Pattern::ANY, text("</item>")])
            .unwrap();
        assert_eq!(
            items.iter().map(Interval::as_str).collect_vec(),
            ["<item>X</item>", "<item>Z</item>"]
        );
        assert!(items
            .iter()
            .tuple_windows()
            .all(|(a, b)| a.end() <= b.start()));
    }

    #[test]
    fn ranges_of_sub_range() {
        let ms = ranges_of("a1a2a3a4").range(2..7).call(&[text("a")]).unwrap();
        assert_eq!(ms.iter().map(|m| m.start()).collect_vec(), [2, 4, 6]);
    }

    #[test]
    fn between_fields() {
        let hay = "name: Frieren; age: 1000;";
        let name = range_of(hay).call(&[text("name: ")]).unwrap().unwrap();
        let value = between(name).call(&[text(";")]).unwrap().unwrap();
        assert_eq!(value.as_str(), "Frieren");
        assert_eq!(value.start(), name.end());

        let age = range_of(hay).after(value).call(&[text("age: ")]).unwrap().unwrap();
        assert_eq!(between(age).call(&[text(";")]).unwrap().unwrap().as_str(), "1000");
        assert_eq!(between(age).limit(23).call(&[text(";")]), Ok(None));
    }

    #[test]
    fn repeat_abort_keeps_scanning() {
        let m = range_of("ababab")
            .call(&[Pattern::repeat("ab").at_least(1).at_most(2).call()])
            .unwrap()
            .unwrap();
        assert_eq!(m.range(), 2..6);
    }
}
