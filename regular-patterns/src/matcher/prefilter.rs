use aho_corasick::{AhoCorasick, MatchKind};
use itertools::Itertools;
use rp_unicode::{ascii::find_ascii_ignore_case, case::CharCaseExt};

use crate::Pattern;

/// Skips start offsets where a leading [`Pattern::text`] can only `Backtrack`.
#[derive(Clone, Debug)]
pub(crate) enum Prefilter {
    /// Leftmost start of any case-sensitive literal.
    Literals(AhoCorasick),
    /// A shared case-insensitive ASCII first char.
    AsciiIgnoreCase(u8),
}

impl Prefilter {
    pub fn new(leading: &Pattern) -> Option<Self> {
        let (literals, ignore_case) = leading.text_literals()?;
        // An empty literal matches everywhere
        if literals.is_empty() || literals.iter().any(str::is_empty) {
            return None;
        }
        if !ignore_case {
            return AhoCorasick::builder()
                .match_kind(MatchKind::LeftmostFirst)
                .build(literals.iter())
                .ok()
                .map(Prefilter::Literals);
        }
        let first = literals
            .iter()
            .map(|literal| literal.chars().next().map(CharCaseExt::to_mono_lowercase))
            .all_equal_value()
            .ok()??;
        first
            .is_ascii()
            .then(|| Prefilter::AsciiIgnoreCase(first as u8))
    }

    /// The first candidate in `at..limit`. Candidates are always char boundaries.
    pub fn find(&self, haystack: &str, at: usize, limit: usize) -> Option<usize> {
        match self {
            Prefilter::Literals(ac) => ac
                .find(aho_corasick::Input::new(haystack).span(at..limit))
                .map(|m| m.start()),
            Prefilter::AsciiIgnoreCase(b) => {
                find_ascii_ignore_case(haystack.as_bytes().get(at..limit)?, *b).map(|i| at + i)
            }
        }
    }
}
