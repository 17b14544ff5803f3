//! Godel CLI - Command line interface
//!
//! Project-based operation - all configuration from godel.json

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

mod service;

use godel_api::{init_config, EditorConfig, EditorSession, SessionConfig};
use godel_core::lexer::Tokenizer;
use godel_log::{Level, LogConfig, Logger};
use service::CommandService;

/// godel.json structure
#[derive(Debug, serde::Deserialize)]
struct ProjectFile {
    /// Entry source file path
    entry: String,
    /// Editor settings
    editor: Option<EditorSettings>,
}

/// Editor settings from godel.json
#[derive(Debug, serde::Deserialize)]
struct EditorSettings {
    /// External compiler/runtime command line
    compiler_cmd: Option<String>,
    /// Whether whitespace tokens appear in `tokens` output
    forward_whitespace: Option<bool>,
    /// Log level: "silent", "error", "warn", "info", "debug", "trace"
    log_level: Option<String>,
}

#[derive(Parser)]
#[command(
    name = "godel",
    about = "Godel editor core - project-based tooling",
    version = "0.1.0"
)]
struct Cli {
    /// Configuration file path (default: ./godel.json)
    #[arg(long, value_name = "CONFIG", default_value = "godel.json")]
    config: PathBuf,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand)]
enum CliCommand {
    /// Tokenize the entry file and print the token array as JSON
    Tokens,
    /// Compile the entry file and print the resulting markers as JSON
    Check,
    /// Run the entry file and print its output
    Run,
}

fn main() {
    let cli = Cli::parse();

    let project = match read_project_file(&cli.config) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let entry_path = resolve_entry_path(&cli.config, &project.entry);
    let source = match std::fs::read_to_string(&entry_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!(
                "Error: Cannot read entry file '{}': {}",
                entry_path.display(),
                e
            );
            process::exit(1);
        }
    };

    let logger = build_logger(&project);
    let editor = build_editor_config(&project);

    // Initialize API config (global singleton for convenience)
    init_config(SessionConfig {
        editor: editor.clone(),
        logger: logger.clone(),
    });

    match cli.command {
        CliCommand::Tokens => handle_tokens(&source, &editor, logger),
        CliCommand::Check => handle_check(&source, &project, editor, logger),
        CliCommand::Run => handle_run(&source, &project, editor, logger),
    }
}

/// Read and parse godel.json
fn read_project_file(path: &Path) -> Result<ProjectFile, String> {
    if !path.exists() {
        return Err(format!(
            "'{}' not found\n\nThe current directory is not a Godel project.\nHint: create '{}' with an 'entry' field",
            path.display(),
            path.display()
        ));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Cannot read '{}': {}", path.display(), e))?;

    let project: ProjectFile = serde_json::from_str(&content)
        .map_err(|e| format!("Failed to parse '{}': {}", path.display(), e))?;

    if project.entry.is_empty() {
        return Err(format!("'entry' in '{}' must not be empty", path.display()));
    }

    Ok(project)
}

/// Resolve entry file path relative to the project file directory
fn resolve_entry_path(project_path: &Path, entry: &str) -> PathBuf {
    let base_dir = project_path.parent().unwrap_or(Path::new("."));
    base_dir.join(entry)
}

fn build_editor_config(project: &ProjectFile) -> EditorConfig {
    let editor = project.editor.as_ref();
    EditorConfig {
        compile_on_change: true,
        forward_whitespace: editor
            .and_then(|e| e.forward_whitespace)
            .unwrap_or(true),
    }
}

fn build_logger(project: &ProjectFile) -> Arc<Logger> {
    let level = project
        .editor
        .as_ref()
        .and_then(|e| e.log_level.as_deref())
        .and_then(parse_log_level);

    match level {
        Some(level) => {
            let (logger, _) = LogConfig::new(level).with_stderr().init();
            logger
        }
        None => Logger::noop(),
    }
}

/// Parse log level string
fn parse_log_level(s: &str) -> Option<Level> {
    use godel_config::LogLevel;
    let level = match s.to_lowercase().as_str() {
        "silent" => LogLevel::Error, // silent = only errors
        "error" => LogLevel::Error,
        "warn" => LogLevel::Warn,
        "info" => LogLevel::Info,
        "debug" => LogLevel::Debug,
        "trace" => LogLevel::Trace,
        _ => return None,
    };
    Some(match level {
        LogLevel::Trace => Level::Trace,
        LogLevel::Debug => Level::Debug,
        LogLevel::Info => Level::Info,
        LogLevel::Warn => Level::Warn,
        LogLevel::Error => Level::Error,
    })
}

fn build_service(project: &ProjectFile, logger: Arc<Logger>) -> CommandService {
    let command = project
        .editor
        .as_ref()
        .and_then(|e| e.compiler_cmd.as_deref());
    let service = command.and_then(|c| CommandService::from_command_line(c, logger));
    match service {
        Some(s) => s,
        None => {
            eprintln!("Error: 'editor.compiler_cmd' is not configured in the project file");
            process::exit(1);
        }
    }
}

fn handle_tokens(source: &str, editor: &EditorConfig, logger: Arc<Logger>) {
    let mut tokens = Tokenizer::with_logger(logger).tokenize(source);
    if !editor.forward_whitespace {
        tokens.retain(|t| t.category != godel_core::lexer::TokenCategory::Whitespace);
    }
    match serde_json::to_string_pretty(&tokens) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn handle_check(source: &str, project: &ProjectFile, editor: EditorConfig, logger: Arc<Logger>) {
    let service = build_service(project, logger.clone());
    let mut session = EditorSession::with_logger(service, editor, logger);

    match session.update_source(source) {
        Ok(_) => {
            match serde_json::to_string_pretty(session.markers()) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    process::exit(1);
                }
            }
            if !session.markers().is_empty() {
                process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn handle_run(source: &str, project: &ProjectFile, editor: EditorConfig, logger: Arc<Logger>) {
    let service = build_service(project, logger.clone());
    // running does not need a compile round-trip first
    let editor = EditorConfig {
        compile_on_change: false,
        ..editor
    };
    let mut session = EditorSession::with_logger(service, editor, logger);
    if let Err(e) = session.update_source(source) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    match session.run_program() {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
