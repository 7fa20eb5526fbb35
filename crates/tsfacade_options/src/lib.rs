//! tsfacade_options: Converter options and project files.
//!
//! A project file (conventionally `facade.json`) lists the declaration
//! trees to convert together with the options applied to each of them.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tsfacade_diagnostics::FacadeError;

/// Options applied to every converted document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FacadeOptions {
    /// Scala package of the generated file. Derived from the input file
    /// name when unset.
    pub package_name: Option<String>,
    /// Spaces per indentation level.
    pub indent_width: usize,
    /// Import lines written above the package clause.
    pub imports: Vec<String>,
}

impl Default for FacadeOptions {
    fn default() -> Self {
        Self {
            package_name: None,
            indent_width: 2,
            imports: default_imports(),
        }
    }
}

impl FacadeOptions {
    /// The package for a document, falling back to its file name.
    pub fn package_for(&self, file_name: &str) -> String {
        self.package_name
            .clone()
            .unwrap_or_else(|| document_stem(file_name))
    }
}

/// The imports every Scala.js facade needs.
pub fn default_imports() -> Vec<String> {
    vec![
        "import scala.scalajs.js".to_string(),
        "import js.annotation._".to_string(),
        "import js.|".to_string(),
    ]
}

/// The bare document name: directories and the `.json`, `.d.ts` and `.ts`
/// suffixes are stripped (`lib/jquery.d.ts.json` → `jquery`).
pub fn document_stem(file_name: &str) -> String {
    let base = Path::new(file_name)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut stem = base.as_str();
    for suffix in [".json", ".d.ts", ".ts"] {
        if let Some(stripped) = stem.strip_suffix(suffix) {
            stem = stripped;
        }
    }
    stem.to_string()
}

/// The project file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    #[serde(default)]
    pub options: FacadeOptions,
    #[serde(default)]
    pub files: Vec<String>,
    pub out_dir: Option<String>,
}

impl ProjectConfig {
    /// `files` resolved against the directory holding the project file.
    pub fn resolved_files(&self, project_dir: &Path) -> Vec<PathBuf> {
        self.files.iter().map(|f| project_dir.join(f)).collect()
    }

    /// `outDir` resolved against the directory holding the project file.
    pub fn resolved_out_dir(&self, project_dir: &Path) -> Option<PathBuf> {
        self.out_dir.as_ref().map(|d| project_dir.join(d))
    }
}

/// Parse a project file from a string.
pub fn parse_project(content: &str) -> Result<ProjectConfig, serde_json::Error> {
    serde_json::from_str(content)
}

/// Parse a project file from a path.
pub fn parse_project_file(path: &Path) -> Result<ProjectConfig, FacadeError> {
    let content = std::fs::read_to_string(path).map_err(|e| FacadeError::io(path, e))?;
    let config = parse_project(&content).map_err(|e| FacadeError::config(path, e.to_string()))?;
    if config.options.indent_width == 0 {
        return Err(FacadeError::config(path, "`indentWidth` must be at least 1"));
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_stem() {
        assert_eq!(document_stem("lib/jquery.d.ts.json"), "jquery");
        assert_eq!(document_stem("my-lib.d.ts"), "my-lib");
        assert_eq!(document_stem("tree.json"), "tree");
        assert_eq!(document_stem("plain"), "plain");
    }

    #[test]
    fn test_package_falls_back_to_file_name() {
        let mut options = FacadeOptions::default();
        assert_eq!(options.package_for("abstract.d.ts.json"), "abstract");
        options.package_name = Some("facades".to_string());
        assert_eq!(options.package_for("abstract.d.ts.json"), "facades");
    }

    #[test]
    fn test_parse_project_defaults() {
        let config = parse_project(r#"{ "files": ["a.json"] }"#).unwrap();
        assert_eq!(config.files, vec!["a.json"]);
        assert_eq!(config.options.indent_width, 2);
        assert_eq!(config.options.imports.len(), 3);
        assert!(config.out_dir.is_none());
    }

    #[test]
    fn test_parse_project_options() {
        let config = parse_project(
            r#"{
                "options": { "packageName": "facades", "indentWidth": 4, "imports": [] },
                "files": ["a.json", "nested/b.json"],
                "outDir": "generated"
            }"#,
        )
        .unwrap();
        assert_eq!(config.options.package_name.as_deref(), Some("facades"));
        assert_eq!(config.options.indent_width, 4);
        assert!(config.options.imports.is_empty());
        assert_eq!(
            config.resolved_files(Path::new("proj")),
            vec![PathBuf::from("proj/a.json"), PathBuf::from("proj/nested/b.json")]
        );
        assert_eq!(
            config.resolved_out_dir(Path::new("proj")),
            Some(PathBuf::from("proj/generated"))
        );
    }
}
