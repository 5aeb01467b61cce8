//! Run configuration for the batch runner.

use std::{fmt::Display, path::PathBuf};

use clap::ValueEnum;

use crate::render::palette::Palette;

/// Which passes a batch run executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExecutionMode {
    Sequential,
    Parallel,
    /// Sequential then parallel over the same jobs, for comparing timings
    #[default]
    Both,
}

impl ExecutionMode {
    pub fn runs_sequential(&self) -> bool {
        matches!(self, ExecutionMode::Sequential | ExecutionMode::Both)
    }

    pub fn runs_parallel(&self) -> bool {
        matches!(self, ExecutionMode::Parallel | ExecutionMode::Both)
    }
}

impl Display for ExecutionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExecutionMode::Sequential => write!(f, "sequential"),
            ExecutionMode::Parallel => write!(f, "parallel"),
            ExecutionMode::Both => write!(f, "both"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Directory receiving the generated HTML files.
    pub output_dir: PathBuf,
    /// Worker pool size; `None` uses the available parallelism.
    pub workers: Option<usize>,
    pub mode: ExecutionMode,
    pub palette: Palette,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            output_dir: PathBuf::from("."),
            workers: None,
            mode: ExecutionMode::default(),
            palette: Palette::default(),
        }
    }
}

impl RunConfig {
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// The number of workers the parallel pass will use, at least one.
    pub fn worker_count(&self) -> usize {
        self.workers
            .unwrap_or_else(|| {
                std::thread::available_parallelism()
                    .map(|n| n.get())
                    .unwrap_or(1)
            })
            .max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RunConfig::default();

        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.mode, ExecutionMode::Both);
        assert!(config.worker_count() >= 1);
    }

    #[test]
    fn test_worker_count_is_at_least_one() {
        assert_eq!(RunConfig::default().with_workers(0).worker_count(), 1);
        assert_eq!(RunConfig::default().with_workers(3).worker_count(), 3);
    }

    #[test]
    fn test_mode_passes() {
        assert!(ExecutionMode::Both.runs_sequential());
        assert!(ExecutionMode::Both.runs_parallel());
        assert!(!ExecutionMode::Sequential.runs_parallel());
        assert!(!ExecutionMode::Parallel.runs_sequential());
        assert_eq!(ExecutionMode::Parallel.to_string(), "parallel");
    }
}
