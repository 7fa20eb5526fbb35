//! tsfacade_compiler: Conversion orchestration.
//!
//! Creates the program, loads the input documents, and converts them in
//! parallel. Documents share nothing, so each one is parsed and emitted on
//! its own rayon task; results come back in input order.

use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug_span, info};
use tsfacade_diagnostics::FacadeError;
use tsfacade_emitter::Emitter;
use tsfacade_options::{document_stem, FacadeOptions, ProjectConfig};
use tsfacade_parser::{DeclarationParser, JsonDeclarationParser};

/// The converted form of one input document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertResult {
    /// The input the text was converted from.
    pub input: PathBuf,
    /// Where the output is written.
    pub output_path: PathBuf,
    /// The generated Scala source.
    pub text: String,
}

/// The program represents one conversion run.
pub struct Program<P: DeclarationParser = JsonDeclarationParser> {
    /// Converter options.
    pub options: FacadeOptions,
    /// The root file names.
    pub root_files: Vec<PathBuf>,
    /// Output directory override.
    pub out_dir: Option<PathBuf>,
    parser: P,
    /// Loaded documents (file name + raw text).
    sources: Vec<(PathBuf, String)>,
}

impl Program<JsonDeclarationParser> {
    /// Create a new program from root files and options.
    pub fn new(root_files: Vec<PathBuf>, options: FacadeOptions) -> Self {
        Self::with_parser(JsonDeclarationParser::new(), root_files, options)
    }

    /// Create a program for a project file located in `project_dir`.
    pub fn from_project(config: &ProjectConfig, project_dir: &Path) -> Self {
        let mut program = Self::new(config.resolved_files(project_dir), config.options.clone());
        program.out_dir = config.resolved_out_dir(project_dir);
        program
    }
}

impl<P: DeclarationParser> Program<P> {
    pub fn with_parser(parser: P, root_files: Vec<PathBuf>, options: FacadeOptions) -> Self {
        Self {
            options,
            root_files,
            out_dir: None,
            parser,
            sources: Vec::new(),
        }
    }

    /// Add an in-memory document to the program.
    pub fn add_source(&mut self, file_name: impl Into<PathBuf>, text: impl Into<String>) {
        self.sources.push((file_name.into(), text.into()));
    }

    /// Load all root files from disk.
    pub fn load_root_files(&mut self) -> Result<(), FacadeError> {
        for file in &self.root_files {
            let text = std::fs::read_to_string(file).map_err(|e| FacadeError::io(file, e))?;
            self.sources.push((file.clone(), text));
        }
        Ok(())
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Convert every loaded document. Fails on the first document that
    /// cannot be parsed.
    pub fn convert(&self) -> Result<Vec<ConvertResult>, FacadeError> {
        self.sources
            .par_iter()
            .map(|(path, text)| self.convert_document(path, text))
            .collect()
    }

    fn convert_document(&self, path: &Path, text: &str) -> Result<ConvertResult, FacadeError> {
        let file_name = path.to_string_lossy();
        let _span = debug_span!("convert", file = %file_name).entered();

        let source_file = self.parser.parse(&file_name, text)?;
        let emitter = Emitter::from_options(&self.options, &file_name);
        Ok(ConvertResult {
            input: path.to_path_buf(),
            output_path: self.output_path(path),
            text: emitter.emit(&source_file),
        })
    }

    /// `<stem>.scala`, next to the input or in the output directory.
    pub fn output_path(&self, input: &Path) -> PathBuf {
        let stem = document_stem(&input.to_string_lossy());
        let base_dir = match &self.out_dir {
            Some(out_dir) => out_dir.clone(),
            None => input
                .parent()
                .unwrap_or_else(|| Path::new("."))
                .to_path_buf(),
        };
        base_dir.join(format!("{}.scala", stem))
    }

    /// Write converted documents to disk.
    pub fn write_outputs(&self, results: &[ConvertResult]) -> Result<(), FacadeError> {
        for result in results {
            if let Some(parent) = result.output_path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).map_err(|e| FacadeError::io(parent, e))?;
                }
            }
            std::fs::write(&result.output_path, &result.text)
                .map_err(|e| FacadeError::io(&result.output_path, e))?;
            info!(
                input = %result.input.display(),
                output = %result.output_path.display(),
                "wrote facade"
            );
        }
        Ok(())
    }
}
