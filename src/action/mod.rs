use serde::Serialize;
use tracing::debug;

use crate::core::Position;
use crate::document::Document;
use crate::generation::{self, GenerateError, GeneratorTool};
use crate::language;

/// Transient user-facing notification
///
/// Surfaced once per invocation and never persisted; the host surface (CLI
/// or editor glue) decides how to display these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Error(String),
    Info(String),
}

/// Kinds of code action this crate offers
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CodeActionKind {
    Refactor,
}

/// An offered quick-fix/refactor suggestion tied to a cursor position
#[derive(Debug, Clone, Serialize)]
pub struct CodeAction {
    pub title: String,
    pub kind: CodeActionKind,
}

/// Offer the generate-implementation action for a selection
///
/// Offered only when the selection is a zero-width cursor inside a word and
/// that word is the name in a `type <Name> interface` declaration. Every
/// other case is a silent non-offer.
pub fn provide_code_action(
    document: &Document,
    selection_start: Position,
    selection_end: Position,
) -> Option<CodeAction> {
    if selection_start != selection_end {
        return None;
    }

    let span = document.word_span_at(selection_start)?;
    let line = document.line(span.line)?;

    if !language::is_interface_declaration(line, span.start as usize, span.end as usize) {
        return None;
    }

    Some(CodeAction {
        title: "Generate implementation".to_string(),
        kind: CodeActionKind::Refactor,
    })
}

/// Outcome of a generate-implementation command invocation
#[derive(Debug)]
pub enum Outcome {
    /// Text was spliced into the document
    Inserted { at: Position, notices: Vec<Notice> },
    /// Name prompt rejected (empty input); nothing inserted
    Rejected(Notice),
    /// Name prompt dismissed; silent abort
    Cancelled,
    /// No word under the cursor; silent no-op
    NotApplicable,
}

/// Run the generate-implementation command against a document
///
/// `name_input` carries the name-prompt result: `None` means the prompt was
/// dismissed. The command path, like its editor counterpart, does not re-run
/// the declaration check; it trusts the word under the cursor.
///
/// Generator failures degrade to inserting the empty struct with no methods,
/// carrying a notice, rather than failing the whole operation.
pub async fn generate_implementation(
    document: &mut Document,
    cursor: Position,
    name_input: Option<String>,
    tool: &GeneratorTool,
) -> Outcome {
    let span = match document.word_span_at(cursor) {
        Some(span) => span,
        None => return Outcome::NotApplicable,
    };
    let interface_name = match document.word_at(span) {
        Some(name) => name.to_string(),
        None => return Outcome::NotApplicable,
    };

    let insert_at = document.insertion_point_after(span.line);

    let name = match name_input {
        None => return Outcome::Cancelled,
        Some(name) if name.is_empty() => {
            return Outcome::Rejected(Notice::Error("Input is empty".to_string()));
        }
        Some(name) => name,
    };

    debug!(
        "Generating implementation {} for interface {}",
        name, interface_name
    );

    let mut notices = Vec::new();
    let cwd = document
        .dir()
        .map(|dir| dir.to_path_buf())
        .unwrap_or_else(|| std::path::PathBuf::from("."));

    let receiver = language::receiver_spec(&name);
    let methods = match tool.run(&receiver, &interface_name, &cwd).await {
        Ok(output) => output,
        Err(GenerateError::BinaryNotFound(path)) => {
            notices.push(Notice::Error(format!(
                "Can not find \"impl\" package at {}. Please run go install",
                path.display()
            )));
            String::new()
        }
        Err(err) => {
            notices.push(Notice::Info(format!(
                "Cannot stub interface {}: {}",
                interface_name, err
            )));
            String::new()
        }
    };

    let text = generation::compose_insert_text(&name, &methods);
    document.insert(insert_at, &text);

    Outcome::Inserted {
        at: insert_at,
        notices,
    }
}
