use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use crate::{config::ExecutionMode, errors::errors::Error};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub file_path: PathBuf,
}

impl Job {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Job {
            file_path: file_path.into(),
        }
    }

    /// Where the HTML for this job goes: `<stem>_<language>_highlighted.html`.
    pub fn output_path(&self, output_dir: &Path, language: &str) -> PathBuf {
        let stem = self
            .file_path
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_default();

        output_dir.join(format!("{}_{}_highlighted.html", stem, language.to_lowercase()))
    }
}

#[derive(Debug, Clone)]
pub struct JobResult {
    pub file_path: PathBuf,
    pub language: Option<String>,
    pub output_path: Option<PathBuf>,
    pub token_count: usize,
    pub error: Option<Error>,
}

impl JobResult {
    pub fn new(job: &Job) -> Self {
        JobResult {
            file_path: job.file_path.clone(),
            language: None,
            output_path: None,
            token_count: 0,
            error: None,
        }
    }

    pub fn failed(mut self, error: Error) -> Self {
        self.error = Some(error);
        self
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Outcome of running the whole job list in one mode.
#[derive(Debug, Clone)]
pub struct PassReport {
    pub mode: ExecutionMode,
    pub workers: usize,
    pub duration: Duration,
    pub results: Vec<JobResult>,
}

impl PassReport {
    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|result| result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.succeeded()
    }
}

#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub sequential: Option<PassReport>,
    pub parallel: Option<PassReport>,
}

impl BatchReport {
    pub fn passes(&self) -> impl Iterator<Item = &PassReport> {
        self.sequential.iter().chain(self.parallel.iter())
    }

    pub fn sequential_duration(&self) -> Option<Duration> {
        self.sequential.as_ref().map(|pass| pass.duration)
    }

    pub fn parallel_duration(&self) -> Option<Duration> {
        self.parallel.as_ref().map(|pass| pass.duration)
    }

    /// True when at least one job failed in any pass.
    pub fn has_failures(&self) -> bool {
        self.passes().any(|pass| pass.failed() > 0)
    }
}
