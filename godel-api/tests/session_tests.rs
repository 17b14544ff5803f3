//! Integration tests - edit/compile/run cycles against a scripted service

use std::cell::RefCell;

use godel_api::{
    CompileService, Diagnostic, EditorSession, RunResult, ServiceError, TokenCategory,
};

/// Service that answers like a tiny real compiler: any source containing
/// the word `bad` gets one diagnostic per occurrence, everything else is
/// clean. Records every request for assertion.
struct ScriptedService {
    compile_requests: RefCell<Vec<String>>,
    run_requests: RefCell<Vec<String>>,
}

impl ScriptedService {
    fn new() -> Self {
        Self {
            compile_requests: RefCell::new(Vec::new()),
            run_requests: RefCell::new(Vec::new()),
        }
    }
}

impl CompileService for ScriptedService {
    fn compile(&self, source: &str) -> Result<Vec<Diagnostic>, ServiceError> {
        self.compile_requests.borrow_mut().push(source.to_string());
        let diagnostics = source
            .match_indices("bad")
            .map(|(offset, _)| Diagnostic {
                message: "unexpected identifier 'bad'".to_string(),
                line: 1,
                column: offset + 1,
                end_line: 1,
                end_column: offset + 4,
            })
            .collect();
        Ok(diagnostics)
    }

    fn run(&self, source: &str) -> Result<RunResult, ServiceError> {
        self.run_requests.borrow_mut().push(source.to_string());
        if source.contains("bad") {
            Ok(RunResult::Errors {
                errors: vec!["runtime error: 'bad' is not defined".to_string()],
            })
        } else {
            Ok(RunResult::Output("42\n".to_string()))
        }
    }
}

#[test]
fn test_edit_error_fix_cycle() {
    let mut session = EditorSession::new(ScriptedService::new());

    // first edit: broken source
    session.update_source("int bad = 1;").unwrap();
    assert_eq!(session.markers().len(), 1);
    assert_eq!(session.markers()[0].message, "unexpected identifier 'bad'");

    // second edit: fixed source, markers clear
    session.update_source("int good = 1;").unwrap();
    assert!(session.markers().is_empty());
}

#[test]
fn test_every_edit_compiles_the_full_text() {
    let mut session = EditorSession::new(ScriptedService::new());
    session.update_source("a").unwrap();
    session.update_source("ab").unwrap();
    session.update_source("abc").unwrap();

    // whole-text submission, no deltas
    assert_eq!(session.tokens().len(), 1);
    assert_eq!(session.tokens()[0].text, "abc");
    assert_eq!(session.source(), "abc");
}

#[test]
fn test_marker_positions_come_from_the_service() {
    let mut session = EditorSession::new(ScriptedService::new());
    session.update_source("x bad y bad").unwrap();
    let markers = session.markers();
    assert_eq!(markers.len(), 2);
    assert_eq!(markers[0].start_column, 3);
    assert_eq!(markers[1].start_column, 9);
    assert!(markers.iter().all(|m| m.end_column == m.start_column + 3));
}

#[test]
fn test_tokens_and_markers_coexist() {
    let mut session = EditorSession::new(ScriptedService::new());
    session.update_source("int bad;").unwrap();
    // highlighting keeps working on sources the compiler rejects
    assert_eq!(session.tokens()[0].category, TokenCategory::Keyword);
    assert_eq!(session.markers().len(), 1);
}

#[test]
fn test_run_output_then_error_replaces_sink() {
    let mut session = EditorSession::new(ScriptedService::new());

    session.update_source("int x;").unwrap();
    session.run_program().unwrap();
    assert_eq!(session.output(), "42\n");

    session.update_source("bad").unwrap();
    session.run_program().unwrap();
    assert_eq!(session.output(), "runtime error: 'bad' is not defined");
}
