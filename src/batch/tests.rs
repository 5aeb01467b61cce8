//! Unit tests for the batch runner.

use std::{
    collections::HashMap,
    io,
    path::{Path, PathBuf},
    sync::Mutex,
};

use super::{
    job::Job,
    runner::BatchRunner,
    store::FileStore,
};
use crate::{
    config::{ExecutionMode, RunConfig},
    errors::errors::ErrorImpl,
    grammar::grammar::GrammarRegistry,
    lexer::tokens::Token,
    render::Renderer,
};

/// In-memory store recording every write.
#[derive(Default)]
struct MemoryStore {
    files: HashMap<PathBuf, String>,
    writes: Mutex<Vec<(PathBuf, String)>>,
}

impl MemoryStore {
    fn with_file(mut self, path: &str, contents: &str) -> Self {
        self.files.insert(PathBuf::from(path), contents.to_string());
        self
    }
}

impl FileStore for &MemoryStore {
    fn read(&self, path: &Path) -> io::Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "not in store"))
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        if path.starts_with("readonly") {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"));
        }
        self.writes
            .lock()
            .unwrap()
            .push((path.to_path_buf(), contents.to_string()));
        Ok(())
    }
}

/// Renders `language:count` so assertions don't depend on HTML.
struct CountRenderer;

impl Renderer for CountRenderer {
    fn render(&self, tokens: &[Token], language: &str) -> String {
        format!("{}:{}", language, tokens.len())
    }
}

fn registry() -> &'static GrammarRegistry {
    GrammarRegistry::builtin().unwrap()
}

#[test]
fn test_output_path_naming() {
    let job = Job::new("src/queries/Report.SQL");

    assert_eq!(
        job.output_path(Path::new("out"), "SQL"),
        PathBuf::from("out/Report_sql_highlighted.html")
    );
}

#[test]
fn test_process_success() {
    let store = MemoryStore::default().with_file("q.sql", "SELECT * FROM t;");
    let runner = BatchRunner::new(registry(), RunConfig::default().with_output_dir("out"))
        .with_store(&store)
        .with_renderer(CountRenderer);

    let result = runner.process(&Job::new("q.sql"));

    assert!(result.is_ok());
    assert_eq!(result.language.as_deref(), Some("sql"));
    assert_eq!(result.token_count, 8);
    assert_eq!(result.output_path, Some(PathBuf::from("out/q_sql_highlighted.html")));

    let writes = store.writes.lock().unwrap();
    assert_eq!(
        *writes,
        vec![(PathBuf::from("out/q_sql_highlighted.html"), "sql:8".to_string())]
    );
}

#[test]
fn test_process_missing_file() {
    let store = MemoryStore::default();
    let runner = BatchRunner::new(registry(), RunConfig::default()).with_store(&store);

    let result = runner.process(&Job::new("missing.vbs"));
    let error = result.error.expect("missing file should fail");

    assert_eq!(error.get_error_name(), "IOError");
    assert_eq!(error.get_file(), Some("missing.vbs"));
    assert!(result.output_path.is_none());
}

#[test]
fn test_process_unknown_extension() {
    let store = MemoryStore::default().with_file("notes.txt", "hello");
    let runner = BatchRunner::new(registry(), RunConfig::default()).with_store(&store);

    let result = runner.process(&Job::new("notes.txt"));

    assert_eq!(
        result.error.map(|error| error.get_impl().clone()),
        Some(ErrorImpl::UnknownLanguage {
            language: "txt".to_string()
        })
    );
    assert!(store.writes.lock().unwrap().is_empty());
}

#[test]
fn test_process_registry_miss() {
    // Extension maps to a language this registry doesn't carry
    let empty = GrammarRegistry::new();
    let store = MemoryStore::default().with_file("a.py", "x = 1");
    let runner = BatchRunner::new(&empty, RunConfig::default()).with_store(&store);

    let error = runner.process(&Job::new("a.py")).error.unwrap();

    assert_eq!(error.get_error_name(), "UnknownLanguage");
    assert_eq!(error.get_file(), Some("a.py"));
}

#[test]
fn test_process_write_failure() {
    let store = MemoryStore::default().with_file("a.bas", "PRINT 1");
    let runner = BatchRunner::new(registry(), RunConfig::default().with_output_dir("readonly"))
        .with_store(&store)
        .with_renderer(CountRenderer);

    let result = runner.process(&Job::new("a.bas"));
    let error = result.error.unwrap();

    assert_eq!(error.get_error_name(), "IOError");
    assert_eq!(error.get_file(), Some("readonly/a_basic_highlighted.html"));
}

#[test]
fn test_run_both_passes_process_every_job() {
    let store = MemoryStore::default()
        .with_file("a.sql", "SELECT 1;")
        .with_file("b.vbs", "LET X = 5")
        .with_file("c.py", "pass");
    let jobs = vec![
        Job::new("a.sql"),
        Job::new("missing.sql"),
        Job::new("b.vbs"),
        Job::new("c.py"),
    ];
    let runner = BatchRunner::new(registry(), RunConfig::default().with_workers(2))
        .with_store(&store)
        .with_renderer(CountRenderer);

    let report = runner.run(&jobs).unwrap();

    let sequential = report.sequential.as_ref().unwrap();
    let parallel = report.parallel.as_ref().unwrap();
    assert_eq!(sequential.mode, ExecutionMode::Sequential);
    assert_eq!(parallel.mode, ExecutionMode::Parallel);
    assert_eq!(parallel.workers, 2);

    for pass in report.passes() {
        assert_eq!(pass.results.len(), 4);
        assert_eq!(pass.succeeded(), 3);
        assert_eq!(pass.failed(), 1);
        assert!(pass.results[1].error.is_some());
    }
    assert!(report.has_failures());

    // Each pass writes every successful job once
    assert_eq!(store.writes.lock().unwrap().len(), 6);
}

#[test]
fn test_run_single_mode() {
    let store = MemoryStore::default().with_file("a.sql", "SELECT 1;");
    let jobs = vec![Job::new("a.sql")];

    let sequential_only = BatchRunner::new(
        registry(),
        RunConfig::default().with_mode(ExecutionMode::Sequential),
    )
    .with_store(&store)
    .run(&jobs)
    .unwrap();
    assert!(sequential_only.sequential.is_some());
    assert!(sequential_only.parallel_duration().is_none());

    let parallel_only = BatchRunner::new(
        registry(),
        RunConfig::default().with_mode(ExecutionMode::Parallel),
    )
    .with_store(&store)
    .run(&jobs)
    .unwrap();
    assert!(parallel_only.sequential_duration().is_none());
    assert!(parallel_only.parallel.is_some());
    assert!(!parallel_only.has_failures());
}

#[test]
fn test_run_empty_job_list() {
    let runner = BatchRunner::new(registry(), RunConfig::default());
    let report = runner.run(&[]).unwrap();

    assert_eq!(report.passes().count(), 2);
    assert!(report.passes().all(|pass| pass.results.is_empty()));
}
