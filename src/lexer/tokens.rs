use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display, str::FromStr};

use crate::Span;

lazy_static! {
    pub static ref CLASS_LOOKUP: HashMap<&'static str, TokenClass> = {
        let mut map = HashMap::new();
        map.insert("comment", TokenClass::Comment);
        map.insert("keyword", TokenClass::Keyword);
        map.insert("literal", TokenClass::Literal);
        map.insert("operator", TokenClass::Operator);
        map.insert("separator", TokenClass::Separator);
        map.insert("identifier", TokenClass::Identifier);
        map.insert("other", TokenClass::Other);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenClass {
    Comment,
    Keyword,
    Literal,
    Operator,
    Separator,
    Identifier,

    // Catch-all for characters no rule accepts
    Other,
}

impl TokenClass {
    /// Every class, in the order the colour guide lists them.
    pub const ALL: [TokenClass; 7] = [
        TokenClass::Keyword,
        TokenClass::Identifier,
        TokenClass::Operator,
        TokenClass::Literal,
        TokenClass::Separator,
        TokenClass::Comment,
        TokenClass::Other,
    ];

    /// Lowercase name, used as the CSS class of rendered tokens.
    pub fn name(&self) -> &'static str {
        match self {
            TokenClass::Comment => "comment",
            TokenClass::Keyword => "keyword",
            TokenClass::Literal => "literal",
            TokenClass::Operator => "operator",
            TokenClass::Separator => "separator",
            TokenClass::Identifier => "identifier",
            TokenClass::Other => "other",
        }
    }
}

impl Display for TokenClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl FromStr for TokenClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CLASS_LOOKUP
            .get(s.trim().to_lowercase().as_str())
            .copied()
            .ok_or_else(|| format!("unknown token class `{}`", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub class: TokenClass,
    pub lexeme: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({:?})", self.class, self.lexeme)
    }
}

impl Token {
    pub fn start_offset(&self) -> usize {
        self.span.start
    }

    pub fn len(&self) -> usize {
        self.lexeme.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexeme.is_empty()
    }

    pub fn is_one_of_many(&self, classes: &[TokenClass]) -> bool {
        classes.contains(&self.class)
    }

    pub fn debug(&self) {
        if self.is_one_of_many(&[TokenClass::Other]) && self.lexeme.trim().is_empty() {
            println!("{} ()", self.class);
        } else {
            println!("{} ({})", self.class, self.lexeme);
        }
    }
}
