//! Grammar registry for the highlighter.
//!
//! A grammar is an ordered list of `(TokenClass, pattern)` rules; the first
//! rule matching at the cursor wins. This module holds:
//!
//! - Rule declaration and one-time pattern compilation
//! - The registry mapping language ids to grammars
//! - The built-in BASIC, SQL and Python grammars
//! - File extension to language id detection

pub mod grammar;
pub mod languages;
