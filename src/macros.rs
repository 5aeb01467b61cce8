//! Utility macros for the highlighter.
//!
//! This module defines helper macros used throughout the crate:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_RULE!` - Declares a grammar rule
//!
//! These macros reduce boilerplate in the lexer and the built-in grammars.

/// Creates a Token instance spanning `$lexeme` from byte offset `$start`.
///
/// # Arguments
///
/// * `$class` - The TokenClass
/// * `$lexeme` - The matched text, as a `String`
/// * `$start` - Byte offset of the first character
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenClass::Literal, "42".to_string(), 0);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($class:expr, $lexeme:expr, $start:expr) => {{
        let lexeme: String = $lexeme;
        let start: usize = $start;
        $crate::lexer::tokens::Token {
            class: $class,
            span: $crate::Span {
                start,
                end: start + lexeme.len(),
            },
            lexeme,
        }
    }};
}

/// Declares a grammar rule.
///
/// The optional trailing `ignore_case` marks the rule as case-insensitive.
///
/// # Example
///
/// ```ignore
/// let rules = vec![
///     MK_RULE!(TokenClass::Comment, r"--.*"),
///     MK_RULE!(TokenClass::Keyword, r"\b(SELECT|FROM)\b", ignore_case),
/// ];
/// ```
#[macro_export]
macro_rules! MK_RULE {
    ($class:expr, $pattern:expr) => {
        $crate::grammar::grammar::RuleDecl::new($class, $pattern)
    };
    ($class:expr, $pattern:expr, ignore_case) => {
        $crate::grammar::grammar::RuleDecl::new($class, $pattern).ignore_case()
    };
}
