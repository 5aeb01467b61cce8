#![allow(clippy::module_inception)]

pub mod batch;
pub mod config;
pub mod errors;
pub mod grammar;
pub mod lexer;
pub mod macros;
pub mod render;

/// Byte range of a token inside its source, end exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Maps a byte offset to its 1-based line and 0-based column (in chars).
///
/// Offsets past the end of `source` resolve to the position right after the
/// last character.
pub fn line_and_column(source: &str, position: usize) -> (usize, usize) {
    let pos = position.min(source.len());

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = line[..pos - start].chars().count();
            return (line_number, line_pos);
        }

        start = end;
        line_number += 1;
    }

    // `pos` is the end of the source
    let last_line = source.rsplit('\n').next().unwrap_or("");
    (source.matches('\n').count() + 1, last_line.chars().count())
}
