//! External command compile service
//!
//! Implements the service boundary by spawning the project-configured
//! compiler command: `<cmd> compile` or `<cmd> run`, source on stdin,
//! JSON answer on stdout.

use std::io::Write;
use std::process::{Command, Stdio};
use std::sync::Arc;

use godel_api::{CompileService, Diagnostic, RunResult, ServiceError};
use godel_core::diagnostics::{parse_diagnostics, parse_run_result};
use godel_log::{debug, Logger};

pub struct CommandService {
    program: String,
    args: Vec<String>,
    logger: Arc<Logger>,
}

impl CommandService {
    /// Build from the project file's `compiler_cmd` string
    ///
    /// The first whitespace-separated word is the program, the rest are
    /// leading arguments; the operation name is appended per call.
    pub fn from_command_line(command: &str, logger: Arc<Logger>) -> Option<Self> {
        let mut words = command.split_whitespace().map(str::to_string);
        let program = words.next()?;
        Some(Self {
            program,
            args: words.collect(),
            logger,
        })
    }

    fn invoke(&self, operation: &str, source: &str) -> Result<String, ServiceError> {
        debug!(
            self.logger,
            "Invoking {} {} ({} bytes on stdin)",
            self.program,
            operation,
            source.len()
        );

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(operation)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| ServiceError::Unreachable(format!("{}: {}", self.program, e)))?;

        if let Some(stdin) = child.stdin.as_mut() {
            stdin.write_all(source.as_bytes())?;
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(ServiceError::Failed(format!(
                "{} {} exited with {}",
                self.program, operation, output.status
            )));
        }

        String::from_utf8(output.stdout)
            .map_err(|e| ServiceError::Failed(format!("non-utf8 output: {}", e)))
    }
}

impl CompileService for CommandService {
    fn compile(&self, source: &str) -> Result<Vec<Diagnostic>, ServiceError> {
        let payload = self.invoke("compile", source)?;
        Ok(parse_diagnostics(&payload)?)
    }

    fn run(&self, source: &str) -> Result<RunResult, ServiceError> {
        let payload = self.invoke("run", source)?;
        Ok(parse_run_result(&payload)?)
    }
}
