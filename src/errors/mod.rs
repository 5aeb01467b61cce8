//! Error types and error handling for the highlighter.
//!
//! This module defines the error taxonomy shared by every stage:
//!
//! - Unknown languages (unmapped extensions, registry misses)
//! - I/O failures while reading sources or writing HTML
//! - Grammar construction failures
//! - Worker pool failures in the parallel pass

pub mod errors;

#[cfg(test)]
mod tests;
