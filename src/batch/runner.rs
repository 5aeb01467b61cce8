use std::time::Instant;

use rayon::{prelude::*, ThreadPoolBuilder};
use tracing::{debug, info, warn};

use crate::{
    config::{ExecutionMode, RunConfig},
    errors::errors::{Error, ErrorImpl},
    grammar::{grammar::GrammarRegistry, languages::detect_language},
    lexer::lexer::tokenize,
    render::{html::HtmlRenderer, Renderer},
};

use super::{
    job::{BatchReport, Job, JobResult, PassReport},
    store::{DiskStore, FileStore},
};

/// Reads, highlights and writes a list of files, sequentially and/or on a
/// bounded worker pool.
///
/// Job failures are recorded in their `JobResult` and never stop a pass.
pub struct BatchRunner<'a> {
    registry: &'a GrammarRegistry,
    store: Box<dyn FileStore + 'a>,
    renderer: Box<dyn Renderer + 'a>,
    config: RunConfig,
}

impl<'a> BatchRunner<'a> {
    pub fn new(registry: &'a GrammarRegistry, config: RunConfig) -> Self {
        let renderer = HtmlRenderer::new(config.palette.clone());

        BatchRunner {
            registry,
            store: Box::new(DiskStore),
            renderer: Box::new(renderer),
            config,
        }
    }

    pub fn with_store(mut self, store: impl FileStore + 'a) -> Self {
        self.store = Box::new(store);
        self
    }

    pub fn with_renderer(mut self, renderer: impl Renderer + 'a) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    /// Runs the passes selected by the configured mode over the same jobs.
    pub fn run(&self, jobs: &[Job]) -> Result<BatchReport, Error> {
        let mut report = BatchReport::default();

        if self.config.mode.runs_sequential() {
            report.sequential = Some(self.run_sequential(jobs));
        }

        if self.config.mode.runs_parallel() {
            report.parallel = Some(self.run_parallel(jobs)?);
        }

        Ok(report)
    }

    pub fn run_sequential(&self, jobs: &[Job]) -> PassReport {
        info!(jobs = jobs.len(), "starting sequential pass");

        let start = Instant::now();
        let results = jobs.iter().map(|job| self.process(job)).collect::<Vec<_>>();
        let duration = start.elapsed();

        let pass = PassReport {
            mode: ExecutionMode::Sequential,
            workers: 1,
            duration,
            results,
        };
        info!(?duration, succeeded = pass.succeeded(), failed = pass.failed(), "sequential pass finished");

        pass
    }

    /// Runs every job on a pool of `worker_count()` threads and waits for all
    /// of them. Fails only if the pool itself cannot be created.
    pub fn run_parallel(&self, jobs: &[Job]) -> Result<PassReport, Error> {
        let workers = self.config.worker_count();
        info!(jobs = jobs.len(), workers, "starting parallel pass");

        let start = Instant::now();
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|index| format!("highlight-worker-{}", index))
            .build()
            .map_err(|err| {
                Error::new(
                    ErrorImpl::WorkerPool {
                        reason: err.to_string(),
                    },
                    None,
                )
            })?;

        let results = pool.install(|| {
            jobs.par_iter()
                .map(|job| self.process(job))
                .collect::<Vec<_>>()
        });
        let duration = start.elapsed();

        let pass = PassReport {
            mode: ExecutionMode::Parallel,
            workers,
            duration,
            results,
        };
        info!(?duration, succeeded = pass.succeeded(), failed = pass.failed(), "parallel pass finished");

        Ok(pass)
    }

    /// Processes one job end to end, capturing any failure in the result.
    pub fn process(&self, job: &Job) -> JobResult {
        let mut result = JobResult::new(job);

        match self.highlight(job, &mut result) {
            Ok(()) => {
                debug!(
                    file = %job.file_path.display(),
                    tokens = result.token_count,
                    "highlighted"
                );
                result
            }
            Err(error) => {
                warn!(file = %job.file_path.display(), %error, "job failed");
                result.failed(error)
            }
        }
    }

    fn highlight(&self, job: &Job, result: &mut JobResult) -> Result<(), Error> {
        let path = &job.file_path;

        let source = self
            .store
            .read(path)
            .map_err(|err| Error::io(path, &err))?;

        let language = detect_language(path)?;
        result.language = Some(language.to_string());

        let grammar = self
            .registry
            .lookup(language)
            .map_err(|err| err.with_file(path))?;

        let tokens = tokenize(&source, grammar);
        result.token_count = tokens.len();

        let html = self.renderer.render(&tokens, grammar.language());

        let output_path = job.output_path(&self.config.output_dir, language);
        result.output_path = Some(output_path.clone());

        self.store
            .write(&output_path, &html)
            .map_err(|err| Error::io(&output_path, &err))
    }
}
