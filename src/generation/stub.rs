/// Build the empty struct declaration for a new implementation
pub fn struct_definition(name: &str) -> String {
    ["type ", name, " struct {\n", "}\n"].join("")
}

/// Compose the full text to splice into the document: a blank line, the
/// struct declaration, a blank line, the generated methods, a blank line
///
/// `methods` may be empty when generation degraded; the empty struct is
/// still inserted.
pub fn compose_insert_text(name: &str, methods: &str) -> String {
    ["\n", &struct_definition(name), "\n", methods, "\n"].join("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_struct_definition() {
        assert_eq!(struct_definition("Animal"), "type Animal struct {\n}\n");
    }

    #[test]
    fn test_compose_insert_text() {
        let composed = compose_insert_text("Animal", "func (a *Animal) Foo() {}\n");
        assert_eq!(
            composed,
            "\ntype Animal struct {\n}\n\nfunc (a *Animal) Foo() {}\n\n"
        );
    }

    #[test]
    fn test_compose_with_empty_methods() {
        let composed = compose_insert_text("Animal", "");
        assert_eq!(composed, "\ntype Animal struct {\n}\n\n\n");
    }
}
