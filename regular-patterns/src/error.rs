use thiserror::Error;

/// A structural error in a declared pattern sequence.
///
/// All of these are detected by [`Chain::compile`](crate::Chain::compile) before
/// any text is scanned.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum CompileError {
    #[error("cannot compile an empty pattern sequence")]
    Empty,
    #[error("'End' can only be placed at the end of a pattern sequence (found at index {index})")]
    MisplacedEnd { index: usize },
    #[error("'Any' cannot come immediately after 'Except' (found at index {index})")]
    AnyAfterExcept { index: usize },
    #[error("'Repeat' at index {index} has an empty literal")]
    EmptyRepeat { index: usize },
    #[error("'Repeat' at index {index} requires at least {at_least} but at most {at_most} repetitions")]
    InvalidRepeatBounds {
        index: usize,
        at_least: usize,
        at_most: usize,
    },
}
