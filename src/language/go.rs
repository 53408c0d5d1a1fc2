//! Lexical heuristics for Go declaration sites
//!
//! Best-effort lexical matching, not semantic analysis: a commented-out
//! `// type Foo interface` line matches too. That trade-off is deliberate,
//! the same one the editor-side quick-fix made.

/// Decide whether the `[start, end)` span on `line` is the name of an
/// interface type declaration
///
/// True iff the token immediately before the span is the keyword `type` and
/// the token immediately after is `interface`.
pub fn is_interface_declaration(line: &str, start: usize, end: usize) -> bool {
    if start > end || end > line.len() {
        return false;
    }
    // Spans are byte offsets; reject mid-character offsets instead of
    // letting the slice panic
    if !line.is_char_boundary(start) || !line.is_char_boundary(end) {
        return false;
    }

    let before = line[..start].trim().split(' ').next_back().unwrap_or("");
    let after = line[end..].trim().split(' ').next().unwrap_or("");

    before == "type" && after == "interface"
}

/// Build the receiver fragment passed to the generator, e.g. `a *Animal`
pub fn receiver_spec(name: &str) -> String {
    let initial: String = name
        .chars()
        .next()
        .map(|c| c.to_lowercase().collect())
        .unwrap_or_default();
    format!("{} *{}", initial, name)
}
