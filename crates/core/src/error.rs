//! Error types shared by the matcher and the renderer

/// Errors raised by matching and rendering
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerbatimError {
    /// The minimum run length must be at least one word
    #[error("minimum match length must be at least 1 word, got {0}")]
    InvalidMinWords(usize),

    /// A span whose start lies after its end
    #[error("invalid span: start {start} is after end {end}")]
    InvalidSpan { start: usize, end: usize },

    /// A span reaching past the end of its text
    #[error("span {start}..={end} is out of range for text of {len} characters")]
    SpanOutOfRange { start: usize, end: usize, len: usize },

    /// A span starting inside a region that was already highlighted
    #[error("span starting at {start} overlaps a previous span ending at {previous_end}")]
    OverlappingSpans { start: usize, previous_end: usize },
}

pub type Result<T> = std::result::Result<T, VerbatimError>;
