use serde::{Deserialize, Serialize};

/// Position in text (line and character) - LSP standard
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

/// Span of a single word on one line: [start, end) character columns
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordSpan {
    pub line: u32,
    pub start: u32,
    pub end: u32,
}

impl WordSpan {
    pub fn new(line: u32, start: u32, end: u32) -> Self {
        debug_assert!(start <= end);
        Self { line, start, end }
    }
}
