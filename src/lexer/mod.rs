//! Lexical analysis module for the highlighter.
//!
//! This module contains the pattern-driven lexer that converts source text
//! into classified tokens. It handles:
//!
//! - Rule-priority matching: the first grammar rule matching at the cursor wins
//! - Fallback to single-character `Other` tokens for unmatched input
//! - Byte spans for every token, covering the source without gaps
//!
//! The engine knows nothing about particular languages; see `grammar`.

pub mod lexer;
pub mod tokens;
