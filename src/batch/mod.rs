//! Batch processing of source files.
//!
//! This module turns a list of file paths into highlighted HTML files:
//!
//! - `Job` / `JobResult` / `PassReport` describe the work and its outcome
//! - `FileStore` abstracts reading sources and writing documents
//! - `BatchRunner` runs the job list sequentially and on a worker pool,
//!   timing each pass so the two can be compared

pub mod job;
pub mod runner;
pub mod store;

#[cfg(test)]
mod tests;
