//! JSON declaration trees.
//!
//! Accepts either a document object:
//!
//! ```json
//! { "fileName": "jquery.d.ts", "statements": [ { "kind": "ClassDeclaration", ... } ] }
//! ```
//!
//! or a bare statement array. Unknown node kinds are kept as `Unknown` /
//! `Other` variants instead of failing the document.

use crate::DeclarationParser;
use tracing::debug;
use tsfacade_ast::{SourceFile, Statement};
use tsfacade_diagnostics::FacadeError;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDeclarationParser;

impl JsonDeclarationParser {
    pub fn new() -> Self {
        Self
    }
}

impl DeclarationParser for JsonDeclarationParser {
    fn parse(&self, file_name: &str, text: &str) -> Result<SourceFile, FacadeError> {
        let is_array = text.trim_start().starts_with('[');
        let mut source_file = if is_array {
            let statements: Vec<Statement> =
                serde_json::from_str(text).map_err(|e| FacadeError::parse(file_name, text, e))?;
            SourceFile::new(file_name, statements)
        } else {
            serde_json::from_str::<SourceFile>(text)
                .map_err(|e| FacadeError::parse(file_name, text, e))?
        };
        if source_file.file_name.is_empty() {
            source_file.file_name = file_name.to_string();
        }
        debug!(
            file = file_name,
            statements = source_file.statements.len(),
            "parsed declaration tree"
        );
        Ok(source_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_defaults_to_input_name() {
        let parser = JsonDeclarationParser::new();
        let sf = parser.parse("input.json", r#"{ "statements": [] }"#).unwrap();
        assert_eq!(sf.file_name, "input.json");

        let sf = parser
            .parse("input.json", r#"{ "fileName": "lib.d.ts", "statements": [] }"#)
            .unwrap();
        assert_eq!(sf.file_name, "lib.d.ts");
    }

    #[test]
    fn test_bare_statement_array() {
        let sf = JsonDeclarationParser
            .parse("a.json", r#"  [ { "kind": "ImportDeclaration" } ]"#)
            .unwrap();
        assert_eq!(sf.statements.len(), 1);
        assert!(matches!(sf.statements[0], Statement::ImportDeclaration));
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let err = JsonDeclarationParser.parse("bad.json", "{ \"statements\": [ }").unwrap_err();
        assert!(matches!(err, FacadeError::Parse { .. }));
    }
}
