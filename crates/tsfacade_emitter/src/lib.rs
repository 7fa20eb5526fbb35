//! tsfacade_emitter: Scala.js facade output.
//!
//! Walks a declaration tree once, top to bottom:
//! 1. Emit each declaration as a native-annotated block
//! 2. Collect the scope's aliases, functions and loose values
//! 3. Emit one synthetic object per scope after its statements
//!
//! Conversion is infallible: unsupported shapes degrade to `js.Any` or are
//! skipped, and are reported through `tracing` at debug level.

mod declarations;
pub mod exports;
pub mod members;
pub mod scope;
pub mod types;

pub use members::MemberOwner;
pub use scope::{NamespacePath, Scope, ScopeKind};
pub use types::translate;

use tracing::debug_span;
use tsfacade_ast::SourceFile;
use tsfacade_core::package_clause_name;
use tsfacade_options::{default_imports, FacadeOptions};
use tsfacade_printer::{CodeWriter, WriterOptions};

/// The emitter turns one declaration document into one Scala source file.
#[derive(Debug, Clone)]
pub struct Emitter {
    /// Package the declarations are placed in.
    pub package_name: String,
    /// Spaces per indentation level.
    pub indent_width: usize,
    /// Import lines written above the package clause.
    pub imports: Vec<String>,
}

impl Emitter {
    pub fn new(package_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            indent_width: 2,
            imports: default_imports(),
        }
    }

    /// An emitter for `file_name` configured by `options`.
    pub fn from_options(options: &FacadeOptions, file_name: &str) -> Self {
        Self {
            package_name: options.package_for(file_name),
            indent_width: options.indent_width.max(1),
            imports: options.imports.clone(),
        }
    }

    /// Emit the facade for a source file.
    pub fn emit(&self, source_file: &SourceFile) -> String {
        let _span = debug_span!("emit", file = %source_file.file_name, package = %self.package_name)
            .entered();

        let mut writer = CodeWriter::with_options(WriterOptions {
            indent_width: self.indent_width,
            ..Default::default()
        });
        for import in &self.imports {
            writer.write_line(import);
        }
        writer.blank_line();

        let root = Scope::top_level(&self.package_name);
        let header = format!("package {}", package_clause_name(&self.package_name));
        writer.block(&header, |w| {
            declarations::emit_scope(w, &source_file.statements, &root);
            w.blank_line();
        });
        writer.into_string()
    }
}

/// Convert a source file with the default options.
pub fn convert(source_file: &SourceFile, package_name: &str) -> String {
    Emitter::new(package_name).emit(source_file)
}
