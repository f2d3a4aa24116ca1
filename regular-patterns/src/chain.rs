/*!
The chain compiler.

A declared pattern sequence is validated and right-folded into a tree of owned nodes, where every node owns its continuation:

```text
[Text("<item>"), Any, Text("</item>")]
=> Step(Text("<item>"), Step(Any, Step(Text("</item>"), Terminal)))
```

The terminal is chosen per evaluation, so the same [`Chain`] serves both anchored ([`Terminal::Anchored`]) and find ([`Terminal::Open`]) queries.
*/
use std::fmt;

use itertools::Itertools;

use crate::{
    pattern::{self, Pattern, PatternKind},
    CompileError, Outcome,
};

/// The sentinel continuation after the last declared pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Terminal {
    /// Behaves like [`Pattern::NONE`]: the chain must consume exactly up to the limit.
    Anchored,
    /// Behaves like [`Pattern::END`]: the chain may stop anywhere.
    Open,
}

impl Terminal {
    #[inline]
    fn eval(self, start: usize, limit: usize) -> Outcome {
        match self {
            Terminal::Anchored => pattern::eval_none(start, limit),
            Terminal::Open => Outcome::Success(start),
        }
    }
}

enum Node {
    Terminal,
    Step { pattern: Pattern, next: Box<Node> },
}

static TERMINAL: Node = Node::Terminal;

impl Node {
    #[inline]
    fn eval(&self, haystack: &str, start: usize, limit: usize, terminal: Terminal) -> Outcome {
        match self {
            Node::Terminal => terminal.eval(start, limit),
            Node::Step { pattern, next } => pattern.eval(
                haystack,
                start,
                limit,
                Next {
                    node: next,
                    terminal,
                },
            ),
        }
    }
}

/// A handle to the continuation of a pattern, i.e. everything declared after it.
#[derive(Clone, Copy)]
pub struct Next<'c> {
    node: &'c Node,
    terminal: Terminal,
}

impl Next<'static> {
    /// A continuation that is only the terminal, as seen by the last declared pattern.
    pub fn terminal(terminal: Terminal) -> Self {
        Next {
            node: &TERMINAL,
            terminal,
        }
    }
}

impl<'c> Next<'c> {
    /// Runs the continuation at `start`.
    #[inline]
    pub fn eval(self, haystack: &str, start: usize, limit: usize) -> Outcome {
        self.node.eval(haystack, start, limit, self.terminal)
    }

    /// Whether nothing but the terminal is left.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self.node, Node::Terminal)
    }
}

impl fmt::Debug for Next<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Next")
            .field("is_terminal", &self.is_terminal())
            .field("terminal", &self.terminal)
            .finish()
    }
}

/// A compiled pattern sequence.
///
/// ```
/// use regular_patterns::{Chain, Outcome, Pattern, Terminal};
///
/// let chain = Chain::compile([Pattern::text("abc").call()])?;
/// assert_eq!(chain.eval("abcabc", 0, 6, Terminal::Open), Outcome::Success(3));
/// assert_eq!(chain.eval("abcabc", 0, 6, Terminal::Anchored), Outcome::Backtrack);
/// # Ok::<(), regular_patterns::CompileError>(())
/// ```
pub struct Chain {
    head: Node,
    len: usize,
}

impl Chain {
    /// Validates and compiles `patterns`.
    ///
    /// ## Errors
    /// - [`CompileError::Empty`] if there are no patterns.
    /// - [`CompileError::MisplacedEnd`] if [`Pattern::END`] is not the last one.
    /// - [`CompileError::AnyAfterExcept`] if [`Pattern::ANY`] directly follows a [`Pattern::except`].
    /// - [`CompileError::EmptyRepeat`] and [`CompileError::InvalidRepeatBounds`] for a [`Pattern::repeat`] that can never match.
    ///
    /// ```
    /// use regular_patterns::{Chain, CompileError, Pattern};
    ///
    /// let err = Chain::compile([Pattern::except("x").call(), Pattern::ANY]).unwrap_err();
    /// assert_eq!(err, CompileError::AnyAfterExcept { index: 1 });
    /// ```
    pub fn compile(patterns: impl IntoIterator<Item = Pattern>) -> Result<Self, CompileError> {
        let patterns = patterns.into_iter().collect_vec();
        validate(&patterns)?;
        let len = patterns.len();
        let head = patterns
            .into_iter()
            .rev()
            .fold(Node::Terminal, |next, pattern| Node::Step {
                pattern,
                next: Box::new(next),
            });
        Ok(Self { head, len })
    }

    /// Evaluates the chain once at `start`.
    ///
    /// `start` and `limit` must be char boundaries with `start <= limit <= haystack.len()`.
    #[inline]
    pub fn eval(&self, haystack: &str, start: usize, limit: usize, terminal: Terminal) -> Outcome {
        self.head.eval(haystack, start, limit, terminal)
    }

    /// The declared patterns, in order.
    pub fn patterns(&self) -> impl Iterator<Item = &Pattern> + '_ {
        let mut node = &self.head;
        std::iter::from_fn(move || match node {
            Node::Terminal => None,
            Node::Step { pattern, next } => {
                node = &**next;
                Some(pattern)
            }
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`, an empty chain cannot be compiled.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> <terminal>", self.patterns().map(Pattern::name).join(" -> "))
    }
}

fn validate(patterns: &[Pattern]) -> Result<(), CompileError> {
    let Some(last) = patterns.len().checked_sub(1) else {
        return Err(CompileError::Empty);
    };
    let mut prev = None;
    for (index, pattern) in patterns.iter().enumerate() {
        let kind = pattern.kind();
        match kind {
            PatternKind::End if index != last => return Err(CompileError::MisplacedEnd { index }),
            PatternKind::Any if prev == Some(PatternKind::Except) => {
                return Err(CompileError::AnyAfterExcept { index })
            }
            PatternKind::Repeat => {
                if let Some((literal, at_least, at_most)) = pattern.repeat_bounds() {
                    if literal.is_empty() {
                        return Err(CompileError::EmptyRepeat { index });
                    }
                    if at_least > at_most {
                        return Err(CompileError::InvalidRepeatBounds {
                            index,
                            at_least,
                            at_most,
                        });
                    }
                }
            }
            _ => (),
        }
        prev = Some(kind);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Pattern {
        Pattern::text(s).call()
    }

    #[test]
    fn fold() {
        let chain = Chain::compile([text("<item>"), Pattern::ANY, text("</item>")]).unwrap();
        assert_eq!(chain.len(), 3);
        assert_eq!(format!("{chain:?}"), "Text -> Any -> Text -> <terminal>");
        assert_eq!(
            chain.eval("<item>X</item>", 0, 14, Terminal::Anchored),
            Outcome::Success(14)
        );
        assert_eq!(
            chain.eval("<item>X</item>!", 0, 15, Terminal::Anchored),
            Outcome::Backtrack
        );
        assert_eq!(
            chain.eval("<item>X</item>!", 0, 15, Terminal::Open),
            Outcome::Success(14)
        );
    }

    #[test]
    fn single() {
        let chain = Chain::compile([Pattern::ANY]).unwrap();
        assert_eq!(chain.eval("abc", 1, 3, Terminal::Anchored), Outcome::Success(3));
        let chain = Chain::compile([Pattern::END]).unwrap();
        assert_eq!(chain.eval("abc", 1, 3, Terminal::Anchored), Outcome::Success(1));
    }

    #[test]
    fn empty() {
        assert_eq!(
            Chain::compile(Vec::new()).unwrap_err(),
            CompileError::Empty
        );
    }

    #[test]
    fn misplaced_end() {
        assert_eq!(
            Chain::compile([text("a"), Pattern::END, text("b")]).unwrap_err(),
            CompileError::MisplacedEnd { index: 1 }
        );
        assert_eq!(
            Chain::compile([Pattern::END, Pattern::END]).unwrap_err(),
            CompileError::MisplacedEnd { index: 0 }
        );
        assert!(Chain::compile([text("a"), Pattern::END]).is_ok());
    }

    #[test]
    fn any_after_except() {
        assert_eq!(
            Chain::compile([text("a"), Pattern::except("b").call(), Pattern::ANY, text("c")])
                .unwrap_err(),
            CompileError::AnyAfterExcept { index: 2 }
        );
        // The other way around is fine
        assert!(Chain::compile([Pattern::ANY, Pattern::except("b").call()]).is_ok());
        assert!(Chain::compile([
            Pattern::except("b").call(),
            text("a"),
            Pattern::ANY
        ])
        .is_ok());
    }

    #[test]
    fn repeat() {
        assert_eq!(
            Chain::compile([text("a"), Pattern::repeat("").call()]).unwrap_err(),
            CompileError::EmptyRepeat { index: 1 }
        );
        assert_eq!(
            Chain::compile([Pattern::repeat("a").at_least(3).at_most(2).call()]).unwrap_err(),
            CompileError::InvalidRepeatBounds {
                index: 0,
                at_least: 3,
                at_most: 2
            }
        );
    }

    #[test]
    fn custom_continuation() {
        let peek = Pattern::custom("peek", |hay, start, limit, next| {
            assert!(!next.is_terminal());
            next.eval(hay, start, limit)
        });
        let chain = Chain::compile([peek, text("a")]).unwrap();
        assert_eq!(chain.eval("ab", 0, 2, Terminal::Open), Outcome::Success(1));
    }

    #[test]
    fn send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Chain>();
        assert_send_sync::<Pattern>();
        assert_send_sync::<crate::Matcher>();
    }
}
