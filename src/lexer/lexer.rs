use crate::{
    errors::errors::Error,
    grammar::grammar::{Grammar, GrammarRegistry},
    MK_TOKEN,
};

use super::tokens::{Token, TokenClass};

#[derive(Clone)]
pub struct Lexer<'a> {
    grammar: &'a Grammar,
    tokens: Vec<Token>,
    source: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, grammar: &'a Grammar) -> Lexer<'a> {
        Lexer {
            grammar,
            tokens: vec![],
            source,
            pos: 0,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Emits a token of `len` bytes starting at the cursor and moves past it.
    fn emit(&mut self, class: TokenClass, len: usize) {
        let lexeme = self.remainder()[..len].to_string();

        self.push(MK_TOKEN!(class, lexeme, self.pos));
        self.advance_n(len);
    }

    /// Consumes one token at the cursor.
    ///
    /// The first rule of the grammar matching here wins; when none does, the
    /// single character under the cursor becomes an `Other` token.
    pub fn step(&mut self) {
        let grammar = self.grammar;

        for rule in grammar.rules() {
            if let Some(len) = rule.match_len(self.source, self.pos) {
                self.emit(rule.class(), len);
                return;
            }
        }

        let width = self.at().map(char::len_utf8).unwrap_or(1);
        self.emit(TokenClass::Other, width);
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

/// Splits `source` into classified tokens using `grammar`.
///
/// The tokens are contiguous and cover the whole source; characters no rule
/// accepts come out as one-character `Other` tokens, so this never fails.
pub fn tokenize(source: &str, grammar: &Grammar) -> Vec<Token> {
    let mut lex = Lexer::new(source, grammar);

    while !lex.at_eof() {
        lex.step();
    }

    lex.into_tokens()
}

/// Looks `language` up in the built-in registry and tokenizes `source` with it.
pub fn tokenize_language(source: &str, language: &str) -> Result<Vec<Token>, Error> {
    let grammar = GrammarRegistry::builtin()?.lookup(language)?;

    Ok(tokenize(source, grammar))
}
