//! tsfacade: Scala.js facade generator CLI.
//!
//! Usage:
//!   tsfacade [options] [file...]
//!
//! Each input is a JSON declaration tree; each output is a `.scala` file
//! holding the matching facade.

mod logging;

use clap::Parser as ClapParser;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::debug;
use tsfacade_compiler::Program;
use tsfacade_diagnostics::FacadeError;
use tsfacade_options::{parse_project_file, FacadeOptions, ProjectConfig};

const DEFAULT_PROJECT: &str = "facade.json";

#[derive(ClapParser, Debug)]
#[command(
    name = "tsfacade",
    version,
    about = "tsfacade - Generate Scala.js facades from TypeScript declarations"
)]
struct Cli {
    /// Declaration trees to convert.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Path to a project file (facade.json).
    #[arg(short = 'p', long = "project")]
    project: Option<PathBuf>,

    /// Output file (single input only).
    #[arg(short = 'o', long = "out", conflicts_with = "stdout")]
    out: Option<PathBuf>,

    /// Redirect outputs to the directory.
    #[arg(long = "out-dir")]
    out_dir: Option<PathBuf>,

    /// Package of the generated declarations.
    #[arg(long)]
    package: Option<String>,

    /// Spaces per indentation level.
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    indent: Option<u16>,

    /// Print the generated code instead of writing files.
    #[arg(long)]
    stdout: bool,

    /// List the input files.
    #[arg(long = "list-files")]
    list_files: bool,
}

// ANSI color codes
const GRAY: &str = "\x1b[90m";
const RESET: &str = "\x1b[0m";

fn main() -> miette::Result<()> {
    logging::init_tracing();
    let cli = Cli::parse();
    run(&cli)?;
    Ok(())
}

fn run(cli: &Cli) -> Result<(), FacadeError> {
    let start = Instant::now();
    let mut program = build_program(cli)?;

    if program.root_files.is_empty() {
        return Err(FacadeError::NoInput);
    }
    if cli.out.is_some() && program.root_files.len() > 1 {
        return Err(FacadeError::Usage(
            "`--out` can only be used with a single input file".to_string(),
        ));
    }
    if cli.list_files {
        for file in &program.root_files {
            println!("{}", file.display());
        }
    }

    program.load_root_files()?;
    let mut results = program.convert()?;

    if cli.stdout {
        for result in &results {
            print!("{}", result.text);
        }
        return Ok(());
    }

    if let (Some(out), Some(result)) = (&cli.out, results.first_mut()) {
        result.output_path = out.clone();
    }
    program.write_outputs(&results)?;

    if std::io::stderr().is_terminal() {
        eprintln!(
            "{}Converted {} file{} in {:.2}s.{}",
            GRAY,
            results.len(),
            if results.len() == 1 { "" } else { "s" },
            start.elapsed().as_secs_f64(),
            RESET
        );
    }
    Ok(())
}

/// Assemble the program from the project file (if any) and the flags.
/// Flags override project values.
fn build_program(cli: &Cli) -> Result<Program, FacadeError> {
    let (config, project_dir) = resolve_project(cli)?;

    let mut program = match &config {
        Some(config) if cli.files.is_empty() => Program::from_project(config, &project_dir),
        Some(config) => {
            let mut program = Program::new(cli.files.clone(), config.options.clone());
            program.out_dir = config.resolved_out_dir(&project_dir);
            program
        }
        None => Program::new(cli.files.clone(), FacadeOptions::default()),
    };

    apply_overrides(cli, &mut program.options);
    if let Some(out_dir) = &cli.out_dir {
        program.out_dir = Some(out_dir.clone());
    }
    Ok(program)
}

fn resolve_project(cli: &Cli) -> Result<(Option<ProjectConfig>, PathBuf), FacadeError> {
    let path = match &cli.project {
        Some(project) => Some(project.clone()),
        None if cli.files.is_empty() && Path::new(DEFAULT_PROJECT).exists() => {
            Some(PathBuf::from(DEFAULT_PROJECT))
        }
        None => None,
    };
    let Some(path) = path else {
        return Ok((None, PathBuf::from(".")));
    };

    debug!(project = %path.display(), "loading project file");
    let config = parse_project_file(&path)?;
    let project_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
        .to_path_buf();
    Ok((Some(config), project_dir))
}

fn apply_overrides(cli: &Cli, options: &mut FacadeOptions) {
    if let Some(package) = &cli.package {
        options.package_name = Some(package.clone());
    }
    if let Some(indent) = cli.indent {
        options.indent_width = usize::from(indent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "tsfacade",
            "a.json",
            "b.json",
            "--out-dir",
            "gen",
            "--package",
            "facades",
            "--indent",
            "4",
        ])
        .unwrap();
        assert_eq!(cli.files, vec![PathBuf::from("a.json"), PathBuf::from("b.json")]);
        assert_eq!(cli.out_dir, Some(PathBuf::from("gen")));
        assert_eq!(cli.indent, Some(4));
    }

    #[test]
    fn test_zero_indent_is_rejected() {
        assert!(Cli::try_parse_from(["tsfacade", "a.json", "--indent", "0"]).is_err());
    }

    #[test]
    fn test_out_conflicts_with_stdout() {
        assert!(Cli::try_parse_from(["tsfacade", "a.json", "-o", "a.scala", "--stdout"]).is_err());
    }

    #[test]
    fn test_flags_override_options() {
        let cli = Cli::try_parse_from(["tsfacade", "a.json", "--package", "p", "--indent", "3"])
            .unwrap();
        let program = build_program(&cli).unwrap();
        assert_eq!(program.options.package_name.as_deref(), Some("p"));
        assert_eq!(program.options.indent_width, 3);
        assert_eq!(program.root_files, vec![PathBuf::from("a.json")]);
    }

    #[test]
    fn test_out_requires_single_input() {
        let cli = Cli::try_parse_from(["tsfacade", "a.json", "b.json", "-o", "x.scala"]).unwrap();
        assert!(matches!(run(&cli), Err(FacadeError::Usage(_))));
    }
}
