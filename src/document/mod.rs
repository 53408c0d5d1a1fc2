use std::path::{Path, PathBuf};

use crate::core::{ImplgenError, Position, Result, WordSpan};

/// In-memory text document that manages string content and applies edits
///
/// Columns are byte offsets within a line and clamp to the line length, the
/// way an editor host clamps out-of-range cursor positions.
#[derive(Debug)]
pub struct Document {
    /// Current source code
    source: String,
    /// File path, when the document is backed by a file
    path: Option<PathBuf>,
}

impl Document {
    /// Create a document from in-memory source
    pub fn from_source(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            path: None,
        }
    }

    /// Open a document from a file
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source =
            std::fs::read_to_string(path).map_err(|source| ImplgenError::ReadFile {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self {
            source,
            path: Some(path.to_path_buf()),
        })
    }

    /// Get current source
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Directory containing the document, if file-backed
    pub fn dir(&self) -> Option<&Path> {
        self.path.as_deref().and_then(Path::parent)
    }

    /// Get the text of a single line, without its line terminator
    pub fn line(&self, index: u32) -> Option<&str> {
        self.source.lines().nth(index as usize)
    }

    /// Convert a position to a byte offset, clamping to document bounds
    pub fn position_to_byte(&self, position: Position) -> usize {
        let mut offset = 0;
        for (idx, line) in self.source.split('\n').enumerate() {
            if idx as u32 == position.line {
                return offset + (position.character as usize).min(line.len());
            }
            offset += line.len() + 1;
        }
        self.source.len()
    }

    /// Convert a byte offset to a position
    pub fn byte_to_position(&self, byte_pos: usize) -> Position {
        let mut line = 0;
        let mut col = 0;
        let mut current_byte = 0;

        for ch in self.source.chars() {
            if current_byte >= byte_pos {
                break;
            }

            if ch == '\n' {
                line += 1;
                col = 0;
            } else {
                col += ch.len_utf8() as u32;
            }

            current_byte += ch.len_utf8();
        }

        Position::new(line, col)
    }

    /// Find the span of the identifier under the cursor
    ///
    /// A zero-width cursor touching either edge of a word counts as being on
    /// it. Word characters are ASCII Go identifier characters; this is a
    /// lexical heuristic, not a Go tokenizer.
    pub fn word_span_at(&self, position: Position) -> Option<WordSpan> {
        let line = self.line(position.line)?;
        let bytes = line.as_bytes();
        let cursor = (position.character as usize).min(bytes.len());

        let is_word = |b: u8| b.is_ascii_alphanumeric() || b == b'_';

        // Anchor on the character under the cursor, or just before it when
        // the cursor sits at the end of a word
        let anchor = if cursor < bytes.len() && is_word(bytes[cursor]) {
            cursor
        } else if cursor > 0 && is_word(bytes[cursor - 1]) {
            cursor - 1
        } else {
            return None;
        };

        let mut start = anchor;
        while start > 0 && is_word(bytes[start - 1]) {
            start -= 1;
        }
        let mut end = anchor + 1;
        while end < bytes.len() && is_word(bytes[end]) {
            end += 1;
        }

        Some(WordSpan::new(position.line, start as u32, end as u32))
    }

    /// Get the text covered by a word span
    pub fn word_at(&self, span: WordSpan) -> Option<&str> {
        let line = self.line(span.line)?;
        line.get(span.start as usize..span.end as usize)
    }

    /// Find where generated code should be spliced after an interface
    /// declaration starting at `start_line`
    ///
    /// Scans lines strictly after the start line for the first one containing
    /// a literal `}` and returns the position one line past it, at the column
    /// of the brace. This is not brace-depth aware: an interface body with
    /// nested braces terminates the scan early. With no closing brace before
    /// the end of the document, the fallback is the start of the document.
    pub fn insertion_point_after(&self, start_line: u32) -> Position {
        for (idx, line) in self
            .source
            .lines()
            .enumerate()
            .skip(start_line as usize + 1)
        {
            if let Some(brace) = line.find('}') {
                return Position::new(idx as u32 + 1, brace as u32);
            }
        }
        Position::new(0, 0)
    }

    /// Insert text at a position
    pub fn insert(&mut self, position: Position, text: &str) {
        let offset = self.position_to_byte(position);
        let before = &self.source[..offset];
        let after = &self.source[offset..];
        self.source = format!("{}{}{}", before, text, after);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(lines: &[&str]) -> Document {
        Document::from_source(lines.join("\n"))
    }

    #[test]
    fn test_open_missing_file_names_path() {
        let err = Document::open("/nonexistent-implgen/missing.go").unwrap_err();
        assert!(matches!(err, ImplgenError::ReadFile { .. }));
        assert!(err.to_string().contains("missing.go"));
    }

    #[test]
    fn test_position_conversion() {
        let document = Document::from_source("line1\nline2\nline3");

        assert_eq!(document.position_to_byte(Position::new(0, 0)), 0);
        assert_eq!(document.position_to_byte(Position::new(1, 0)), 6);
        assert_eq!(document.position_to_byte(Position::new(2, 0)), 12);

        // Column clamps to line length, line clamps to document end
        assert_eq!(document.position_to_byte(Position::new(0, 99)), 5);
        assert_eq!(document.position_to_byte(Position::new(9, 0)), 17);

        assert_eq!(document.byte_to_position(0), Position::new(0, 0));
        assert_eq!(document.byte_to_position(6), Position::new(1, 0));
        assert_eq!(document.byte_to_position(12), Position::new(2, 0));
    }

    #[test]
    fn test_word_span_at() {
        let document = doc(&["type Animal interface {"]);

        // Inside the word
        let span = document.word_span_at(Position::new(0, 7)).unwrap();
        assert_eq!(span, WordSpan::new(0, 5, 11));
        assert_eq!(document.word_at(span), Some("Animal"));

        // Cursor touching either edge still counts
        assert_eq!(
            document.word_span_at(Position::new(0, 5)),
            Some(WordSpan::new(0, 5, 11))
        );
        assert_eq!(
            document.word_span_at(Position::new(0, 11)),
            Some(WordSpan::new(0, 5, 11))
        );

        // Cursor on whitespace between words
        assert_eq!(document.word_span_at(Position::new(0, 4)), None);

        // Cursor past the end of the line clamps to the trailing brace,
        // which is not a word character
        assert_eq!(document.word_span_at(Position::new(0, 99)), None);

        // Line out of range
        assert_eq!(document.word_span_at(Position::new(5, 0)), None);
    }

    #[test]
    fn test_insertion_point_after_brace() {
        let document = doc(&["type Foo interface {", "  Bar() error", "}", "end"]);

        assert_eq!(document.insertion_point_after(0), Position::new(3, 0));
    }

    #[test]
    fn test_insertion_point_brace_column() {
        let document = doc(&["type Foo interface {", "  Bar() error", "  }", "end"]);

        // Column is the index of the brace on its line
        assert_eq!(document.insertion_point_after(0), Position::new(3, 2));
    }

    #[test]
    fn test_insertion_point_skips_start_line() {
        // Brace on the declaration line itself does not count
        let document = doc(&["type Foo interface { }", "}", "end"]);

        assert_eq!(document.insertion_point_after(0), Position::new(2, 0));
    }

    #[test]
    fn test_insertion_point_fallback() {
        let document = doc(&["type Foo interface {", "  Bar() error"]);

        // Deterministic degenerate fallback: start of document
        assert_eq!(document.insertion_point_after(0), Position::new(0, 0));
        assert_eq!(document.insertion_point_after(0), Position::new(0, 0));
    }

    #[test]
    fn test_insert() {
        let mut document = Document::from_source("Hello, world!");

        document.insert(Position::new(0, 7), "beautiful ");
        assert_eq!(document.source(), "Hello, beautiful world!");
    }

    #[test]
    fn test_insert_past_last_line_appends() {
        let mut document = Document::from_source("}\n");

        document.insert(Position::new(1, 0), "type T struct {\n}\n");
        assert_eq!(document.source(), "}\ntype T struct {\n}\n");
    }
}
