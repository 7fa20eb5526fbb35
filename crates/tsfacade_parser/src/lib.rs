//! tsfacade_parser: Front end for declaration trees.
//!
//! Tokenizing TypeScript is left to an external tool; this crate reads the
//! declaration tree that tool serialises. [`DeclarationParser`] is the seam
//! a different front end plugs into.

mod json;

pub use json::JsonDeclarationParser;

use tsfacade_ast::SourceFile;
use tsfacade_diagnostics::FacadeError;

/// Turns the text of one input document into a declaration tree.
pub trait DeclarationParser: Send + Sync {
    fn parse(&self, file_name: &str, text: &str) -> Result<SourceFile, FacadeError>;
}
