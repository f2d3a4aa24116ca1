use std::{fmt, sync::Arc};

use rp_unicode::case::StrCaseExt;

/// An ordered list of literal alternatives for [`Pattern::text`](super::Pattern::text) and [`Pattern::except`](super::Pattern::except).
///
/// ```
/// use regular_patterns::Literals;
///
/// let literals = Literals::from(["<br>", "<br/>"]);
/// assert_eq!(literals.iter().collect::<Vec<_>>(), ["<br>", "<br/>"]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Literals(Arc<[Box<str>]>);

impl Literals {
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.0.iter().map(|literal| &**literal)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Literals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<S: Into<Box<str>>> FromIterator<S> for Literals {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl From<&str> for Literals {
    fn from(literal: &str) -> Self {
        Self::from_iter([literal])
    }
}

impl From<String> for Literals {
    fn from(literal: String) -> Self {
        Self::from_iter([literal])
    }
}

impl<S: Into<Box<str>>, const N: usize> From<[S; N]> for Literals {
    fn from(literals: [S; N]) -> Self {
        Self::from_iter(literals)
    }
}

impl<S: Into<Box<str>>> From<Vec<S>> for Literals {
    fn from(literals: Vec<S>) -> Self {
        Self::from_iter(literals)
    }
}

impl From<&[&str]> for Literals {
    fn from(literals: &[&str]) -> Self {
        Self::from_iter(literals.iter().copied())
    }
}

/// If `literal` fully matches at `at` without crossing `limit`, returns the cursor just past it.
#[inline]
pub(crate) fn match_at(
    haystack: &str,
    at: usize,
    limit: usize,
    literal: &str,
    ignore_case: bool,
) -> Option<usize> {
    let window = haystack.get(at..limit)?;
    if ignore_case {
        window
            .strip_prefix_len_ignore_case(literal)
            .map(|len| at + len)
    } else {
        window.starts_with(literal).then(|| at + literal.len())
    }
}

/// Greedily counts consecutive full repetitions of `literal` from `at`.
///
/// Returns `(count, end)`. An empty `literal` never repeats.
pub(crate) fn repeat_at(
    haystack: &str,
    at: usize,
    limit: usize,
    literal: &str,
    ignore_case: bool,
) -> (usize, usize) {
    if literal.is_empty() {
        return (0, at);
    }
    let mut count = 0;
    let mut end = at;
    while let Some(next) = match_at(haystack, end, limit, literal, ignore_case) {
        count += 1;
        end = next;
    }
    (count, end)
}
