/*!
Primitive patterns.

A [`Pattern`] is a function of `(haystack, start, limit, next)` to an [`Outcome`], where `next` is the already compiled continuation for everything declared after it. Patterns are immutable and never capture a haystack, so the same pattern can be reused against any number of haystacks and across threads.

| Pattern | Consumes | Fails with |
| --- | --- | --- |
| [`Pattern::NONE`] | nothing, only at `limit` | `Abort` |
| [`Pattern::END`] | nothing | never |
| [`Pattern::ANY`] | 0+ chars, as few as possible | `Backtrack`, or the continuation's `Abort` |
| [`Pattern::text`] | the first literal whose continuation succeeds | `Backtrack` |
| [`Pattern::except`] | nothing | `Abort` if any literal matches |
| [`Pattern::repeat`] | as many repetitions as possible | `Backtrack` if none, `Abort` if out of bounds |
| [`Pattern::custom`] | anything | anything |
*/
use std::{borrow::Cow, fmt, sync::Arc};

use bon::bon;
use rp_unicode::str::StrBoundaryExt;

use crate::{chain::Next, Outcome};

mod literal;

pub use literal::Literals;

/// The tag of a [`Pattern`], used for structural validation.
///
/// Differently parameterized patterns of the same primitive share a tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PatternKind {
    None,
    End,
    Any,
    Text,
    Except,
    Repeat,
    Custom,
}

impl PatternKind {
    pub fn name(self) -> &'static str {
        match self {
            PatternKind::None => "None",
            PatternKind::End => "End",
            PatternKind::Any => "Any",
            PatternKind::Text => "Text",
            PatternKind::Except => "Except",
            PatternKind::Repeat => "Repeat",
            PatternKind::Custom => "Custom",
        }
    }
}

/// The signature of [`Pattern::custom`] functions: `(haystack, start, limit, next)`.
pub type CustomFn = dyn Fn(&str, usize, usize, Next<'_>) -> Outcome + Send + Sync;

/// A composable matching unit.
///
/// ## Example
/// ```
/// use regular_patterns::{Matcher, Pattern};
///
/// let matcher = Matcher::new([
///     Pattern::text("<item>").call(),
///     Pattern::ANY,
///     Pattern::text("</item>").call(),
/// ])?;
/// let hay = "<item>X</item>Y<item>Z</item>";
/// assert_eq!(
///     matcher.find_iter(hay).map(|m| m.as_str()).collect::<Vec<_>>(),
///     ["<item>X</item>", "<item>Z</item>"]
/// );
/// # Ok::<(), regular_patterns::CompileError>(())
/// ```
#[derive(Clone)]
pub struct Pattern(Repr);

#[derive(Clone)]
enum Repr {
    None,
    End,
    Any,
    Text {
        literals: Literals,
        ignore_case: bool,
    },
    Except {
        literals: Literals,
        ignore_case: bool,
    },
    Repeat {
        literal: Arc<str>,
        ignore_case: bool,
        at_least: usize,
        at_most: usize,
    },
    Custom {
        name: Cow<'static, str>,
        logic: Arc<CustomFn>,
    },
}

#[bon]
impl Pattern {
    /// Ordered literal alternatives.
    ///
    /// Each literal that fully matches at `start` runs the continuation just past it, and the first successful continuation wins. If none succeeds, the result is `Backtrack`.
    ///
    /// ```
    /// use regular_patterns::{query::range_of, Pattern};
    ///
    /// let m = range_of("Hello WORLD")
    ///     .call(&[Pattern::text(["planet", "world"]).ignore_case(true).call()])?
    ///     .unwrap();
    /// assert_eq!(m.range(), 6..11);
    /// # Ok::<(), regular_patterns::CompileError>(())
    /// ```
    #[builder]
    pub fn text(
        #[builder(start_fn, into)] literals: Literals,
        #[builder(default)] ignore_case: bool,
    ) -> Self {
        Pattern(Repr::Text {
            literals,
            ignore_case,
        })
    }

    /// Zero-width negative lookahead.
    ///
    /// `Abort`s if any literal matches at `start`, otherwise runs the continuation at the same `start`. Since it never advances, it should be followed by a pattern that does.
    ///
    /// ```
    /// use regular_patterns::{query::range_of, Pattern};
    ///
    /// let m = range_of("<br/><b>")
    ///     .call(&[
    ///         Pattern::except("<br").call(),
    ///         Pattern::text("<b").call(),
    ///     ])?
    ///     .unwrap();
    /// assert_eq!(m.range(), 5..7);
    /// # Ok::<(), regular_patterns::CompileError>(())
    /// ```
    #[builder]
    pub fn except(
        #[builder(start_fn, into)] literals: Literals,
        #[builder(default)] ignore_case: bool,
    ) -> Self {
        Pattern(Repr::Except {
            literals,
            ignore_case,
        })
    }

    /// Greedy repetition of `literal`.
    ///
    /// Consumes the maximum count of consecutive full repetitions. If `at_least <= count <= at_most`, runs the continuation after them. Otherwise the result is `Backtrack` if nothing was repeated, and `Abort` if some were.
    ///
    /// ```
    /// use regular_patterns::{query::ranges_of, Pattern};
    ///
    /// let ms = ranges_of("= == ===")
    ///     .call(&[Pattern::repeat("=").at_least(2).call()])?;
    /// assert_eq!(ms.iter().map(|m| m.range()).collect::<Vec<_>>(), [2..4, 5..8]);
    /// # Ok::<(), regular_patterns::CompileError>(())
    /// ```
    #[builder]
    pub fn repeat(
        #[builder(start_fn, into)] literal: String,
        #[builder(default)] ignore_case: bool,
        #[builder(default)] at_least: usize,
        #[builder(default = usize::MAX)] at_most: usize,
    ) -> Self {
        Pattern(Repr::Repeat {
            literal: literal.into(),
            ignore_case,
            at_least,
            at_most,
        })
    }
}

impl Pattern {
    /// Matches only if `start == limit`, consuming nothing.
    ///
    /// This is the terminal of [`Matcher::is_match`](crate::Matcher::is_match), which forces the whole range to be consumed. Declared last in a find query, it works like `$`.
    pub const NONE: Pattern = Pattern(Repr::None);

    /// Always matches, consuming nothing.
    ///
    /// This is the terminal of find queries. It can only be declared at the end of a sequence. Declared last in [`Matcher::is_match`](crate::Matcher::is_match), it turns the match into a prefix match.
    pub const END: Pattern = Pattern(Repr::End);

    /// Matches 0+ arbitrary chars, as few as possible.
    ///
    /// If it is the last declared pattern, it consumes everything up to the limit. Otherwise it tries its continuation at every position from `start` to `limit` (inclusive): the first success wins, and an `Abort` stops the scan immediately.
    ///
    /// `Any` cannot be declared directly after [`Pattern::except`].
    pub const ANY: Pattern = Pattern(Repr::Any);

    /// A caller-supplied pattern.
    ///
    /// `logic` receives `(haystack, start, limit, next)` and must follow the same contract as the primitives: return a cursor within `start..=limit` on a char boundary, usually by calling [`Next::eval`]. Find queries treat a success outside the range of the attempt as a failure.
    ///
    /// ```
    /// use regular_patterns::{query::range_of, Outcome, Pattern};
    ///
    /// let digits = Pattern::custom("digits", |hay, start, limit, next| {
    ///     let len = hay[start..limit].bytes().take_while(u8::is_ascii_digit).count();
    ///     if len == 0 {
    ///         return Outcome::Backtrack;
    ///     }
    ///     next.eval(hay, start + len, limit)
    /// });
    /// let m = range_of("order #42 shipped")
    ///     .call(&[Pattern::text("#").call(), digits])?
    ///     .unwrap();
    /// assert_eq!(m.as_str(), "#42");
    /// # Ok::<(), regular_patterns::CompileError>(())
    /// ```
    pub fn custom(
        name: impl Into<Cow<'static, str>>,
        logic: impl Fn(&str, usize, usize, Next<'_>) -> Outcome + Send + Sync + 'static,
    ) -> Self {
        Pattern(Repr::Custom {
            name: name.into(),
            logic: Arc::new(logic),
        })
    }

    pub fn kind(&self) -> PatternKind {
        match &self.0 {
            Repr::None => PatternKind::None,
            Repr::End => PatternKind::End,
            Repr::Any => PatternKind::Any,
            Repr::Text { .. } => PatternKind::Text,
            Repr::Except { .. } => PatternKind::Except,
            Repr::Repeat { .. } => PatternKind::Repeat,
            Repr::Custom { .. } => PatternKind::Custom,
        }
    }

    /// The kind name, or the given name of a custom pattern.
    pub fn name(&self) -> &str {
        match &self.0 {
            Repr::Custom { name, .. } => &**name,
            _ => self.kind().name(),
        }
    }

    /// The literal alternatives and case sensitivity of a [`Pattern::text`].
    pub(crate) fn text_literals(&self) -> Option<(&Literals, bool)> {
        match &self.0 {
            Repr::Text {
                literals,
                ignore_case,
            } => Some((literals, *ignore_case)),
            _ => None,
        }
    }

    /// The literal and bounds of a [`Pattern::repeat`]: `(literal, at_least, at_most)`.
    pub(crate) fn repeat_bounds(&self) -> Option<(&str, usize, usize)> {
        match &self.0 {
            Repr::Repeat {
                literal,
                at_least,
                at_most,
                ..
            } => Some((&**literal, *at_least, *at_most)),
            _ => None,
        }
    }

    /// Evaluates this pattern at `start`, followed by `next`.
    ///
    /// `start` and `limit` must be char boundaries with `start <= limit <= haystack.len()`.
    ///
    /// ```
    /// use regular_patterns::{Next, Outcome, Pattern, Terminal};
    ///
    /// let open = Next::terminal(Terminal::Open);
    /// let repeat = Pattern::repeat("ab").at_least(1).at_most(2).call();
    /// assert_eq!(repeat.eval("ababab", 0, 6, open), Outcome::Abort);
    /// assert_eq!(repeat.eval("ababab", 1, 6, open), Outcome::Backtrack);
    /// assert_eq!(repeat.eval("ababab", 2, 6, open), Outcome::Success(6));
    /// ```
    pub fn eval(&self, haystack: &str, start: usize, limit: usize, next: Next<'_>) -> Outcome {
        match &self.0 {
            Repr::None => eval_none(start, limit),
            Repr::End => Outcome::Success(start),
            Repr::Any => eval_any(haystack, start, limit, next),
            Repr::Text {
                literals,
                ignore_case,
            } => {
                for literal in literals.iter() {
                    if let Some(end) = literal::match_at(haystack, start, limit, literal, *ignore_case)
                    {
                        if let Outcome::Success(end) = next.eval(haystack, end, limit) {
                            return Outcome::Success(end);
                        }
                    }
                }
                Outcome::Backtrack
            }
            Repr::Except {
                literals,
                ignore_case,
            } => {
                if literals.iter().any(|literal| {
                    literal::match_at(haystack, start, limit, literal, *ignore_case).is_some()
                }) {
                    Outcome::Abort
                } else {
                    next.eval(haystack, start, limit)
                }
            }
            Repr::Repeat {
                literal,
                ignore_case,
                at_least,
                at_most,
            } => {
                let (count, end) = literal::repeat_at(haystack, start, limit, literal, *ignore_case);
                if (*at_least..=*at_most).contains(&count) {
                    next.eval(haystack, end, limit)
                } else if count == 0 {
                    Outcome::Backtrack
                } else {
                    Outcome::Abort
                }
            }
            Repr::Custom { logic, .. } => logic(haystack, start, limit, next),
        }
    }
}

#[inline]
pub(crate) fn eval_none(start: usize, limit: usize) -> Outcome {
    if start == limit {
        Outcome::Success(start)
    } else {
        Outcome::Abort
    }
}

fn eval_any(haystack: &str, mut at: usize, limit: usize, next: Next<'_>) -> Outcome {
    // Nothing left to constrain: consume the rest of the range
    if next.is_terminal() {
        return Outcome::Success(limit);
    }
    loop {
        match next.eval(haystack, at, limit) {
            Outcome::Backtrack => (),
            outcome => return outcome,
        }
        if at >= limit {
            return Outcome::Backtrack;
        }
        at = haystack.next_boundary(at);
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Repr::None | Repr::End | Repr::Any => f.write_str(self.name()),
            Repr::Text {
                literals,
                ignore_case,
            }
            | Repr::Except {
                literals,
                ignore_case,
            } => f
                .debug_struct(self.name())
                .field("literals", literals)
                .field("ignore_case", ignore_case)
                .finish(),
            Repr::Repeat {
                literal,
                ignore_case,
                at_least,
                at_most,
            } => f
                .debug_struct("Repeat")
                .field("literal", literal)
                .field("ignore_case", ignore_case)
                .field("at_least", at_least)
                .field("at_most", at_most)
                .finish(),
            Repr::Custom { name, .. } => f.debug_tuple("Custom").field(name).finish(),
        }
    }
}
