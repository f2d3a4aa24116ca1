/*!
Composable text patterns as an alternative to regular expressions.

Instead of writing a regex, you declare a sequence of [`Pattern`]s and ask whether it matches, where it first matches, or everywhere it matches. Results are [`Interval`]s, i.e. half-open byte ranges into the haystack that are only sliced when needed.

## Features
- Primitives: [`Pattern::text`] (literal alternatives), [`Pattern::ANY`] (lazy wildcard), [`Pattern::except`] (negative lookahead), [`Pattern::repeat`] (bounded greedy repetition), [`Pattern::NONE`]/[`Pattern::END`] (terminals) and [`Pattern::custom`].
- Unicode case insensitivity.
- Structural errors are reported when compiling, before any text is scanned.
- Compiled [`Matcher`]s are immutable, reusable and `Send + Sync`.
- Leading literals are searched with [`aho-corasick`](https://docs.rs/aho-corasick/) (`perf-literal` feature).
*/
//! ## Usage
//! ```
//! use regular_patterns::{Matcher, OptionIntervalExt, Pattern};
//!
//! let rss = "<item><title>RSS Tutorial</title></item><item><title>XML Tutorial</title></item>";
//!
//! let item = Matcher::new([
//!     Pattern::text("<item>").call(),
//!     Pattern::ANY,
//!     Pattern::text("</item>").call(),
//! ])?;
//! let title_open = Matcher::new([Pattern::text("<title>").call()])?;
//! let title_close = Matcher::new([Pattern::text("</title>").call()])?;
//!
//! let titles: Vec<&str> = item
//!     .find_iter(rss)
//!     .map(|item| item.find(&title_open).between(&title_close).as_str())
//!     .collect();
//! assert_eq!(titles, ["RSS Tutorial", "XML Tutorial"]);
//! # Ok::<(), regular_patterns::CompileError>(())
//! ```
/*!
## Semantics
Matching is driven by continuations: every pattern receives the already compiled rest of the sequence and decides how to call it. An evaluation ends with one of three [`Outcome`]s:
- `Success(end)`: matched up to `end`.
- `Backtrack`: failed here, other start offsets may still match.
- `Abort`: failed, and a surrounding [`Pattern::ANY`] should stop trying further positions. A find query still tries the next start offset.

Each primitive commits to at most one outcome per start offset. There is no full backtracking: for example, `[Text("a"), Repeat("b", 1, 1)]` does not match `"abb"` at offset 0, because the repetition consumes both `b`s and is then out of bounds.

See [`query`] for one-shot queries and [`matcher`] for the compiled ones.
*/
//! ## Crate features
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(feature = "doc", doc = document_features::document_features!())]

pub mod chain;
mod error;
pub mod matcher;
mod outcome;
pub mod pattern;
pub mod query;

pub use chain::{Chain, Next, Terminal};
pub use error::CompileError;
pub use matcher::{Input, Interval, Matcher, Matches, OptionIntervalExt};
pub use outcome::Outcome;
pub use pattern::{CustomFn, Literals, Pattern, PatternKind};

pub use rp_unicode as unicode;

mod private {
    pub trait Sealed {}
}
use private::Sealed;
