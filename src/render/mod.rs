//! Rendering of token streams.
//!
//! The batch runner only sees the `Renderer` trait; `HtmlRenderer` is the
//! default implementation, coloured by a `Palette`.

pub mod html;
pub mod palette;

use crate::lexer::tokens::Token;

pub trait Renderer: Send + Sync {
    /// Produces a complete document for `tokens` of the given language.
    fn render(&self, tokens: &[Token], language: &str) -> String;
}
