use std::collections::HashMap;

use lazy_static::lazy_static;
use regex_automata::{
    meta::Regex,
    util::syntax,
    Anchored, Input,
};

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenClass,
};

use super::languages::builtin_registry;

lazy_static! {
    static ref BUILTIN: Result<GrammarRegistry, Error> = builtin_registry();
}

/// A rule as declared by a language, before its pattern is compiled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleDecl {
    pub class: TokenClass,
    pub pattern: String,
    pub ignore_case: bool,
}

impl RuleDecl {
    pub fn new(class: TokenClass, pattern: &str) -> Self {
        RuleDecl {
            class,
            pattern: pattern.to_string(),
            ignore_case: false,
        }
    }

    pub fn ignore_case(mut self) -> Self {
        self.ignore_case = true;
        self
    }
}

#[derive(Debug, Clone)]
pub struct GrammarRule {
    class: TokenClass,
    regex: Regex,
}

impl GrammarRule {
    fn compile(language: &str, decl: RuleDecl) -> Result<GrammarRule, Error> {
        let regex = Regex::builder()
            .syntax(syntax::Config::new().case_insensitive(decl.ignore_case))
            .build(&decl.pattern)
            .map_err(|err| {
                Error::new(
                    ErrorImpl::InvalidPattern {
                        language: language.to_string(),
                        pattern: decl.pattern.clone(),
                        reason: err.to_string(),
                    },
                    None,
                )
            })?;

        Ok(GrammarRule {
            class: decl.class,
            regex,
        })
    }

    pub fn class(&self) -> TokenClass {
        self.class
    }

    /// Length in bytes of this rule's match starting exactly at `pos`.
    ///
    /// The search runs over the whole of `source`, so look-around assertions
    /// such as `\b` see the text before `pos`. Zero-length matches count as
    /// no match, so an accepted match always moves the cursor forward.
    pub fn match_len(&self, source: &str, pos: usize) -> Option<usize> {
        let input = Input::new(source).range(pos..).anchored(Anchored::Yes);

        self.regex
            .find(input)
            .map(|found| found.end() - pos)
            .filter(|len| *len > 0)
    }
}

/// The ordered rule list of one language. Earlier rules take priority.
#[derive(Debug, Clone)]
pub struct Grammar {
    language: String,
    rules: Vec<GrammarRule>,
}

impl Grammar {
    pub fn new(language: &str, rules: Vec<RuleDecl>) -> Result<Grammar, Error> {
        let language = language.to_lowercase();

        if rules.is_empty() {
            return Err(Error::new(ErrorImpl::EmptyGrammar { language }, None));
        }

        let rules = rules
            .into_iter()
            .map(|decl| GrammarRule::compile(&language, decl))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Grammar { language, rules })
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn rules(&self) -> &[GrammarRule] {
        &self.rules
    }
}

#[derive(Debug, Clone, Default)]
pub struct GrammarRegistry {
    grammars: HashMap<String, Grammar>,
}

impl GrammarRegistry {
    pub fn new() -> Self {
        GrammarRegistry::default()
    }

    /// The registry holding the built-in languages, built on first use.
    pub fn builtin() -> Result<&'static GrammarRegistry, Error> {
        BUILTIN.as_ref().map_err(Clone::clone)
    }

    /// Adds `grammar`, replacing any grammar with the same language id.
    pub fn register(&mut self, grammar: Grammar) {
        self.grammars.insert(grammar.language().to_string(), grammar);
    }

    pub fn lookup(&self, language_id: &str) -> Result<&Grammar, Error> {
        self.grammars
            .get(language_id.to_lowercase().as_str())
            .ok_or_else(|| {
                Error::new(
                    ErrorImpl::UnknownLanguage {
                        language: language_id.to_string(),
                    },
                    None,
                )
            })
    }

    pub fn languages(&self) -> Vec<&str> {
        let mut languages = self.grammars.keys().map(String::as_str).collect::<Vec<_>>();
        languages.sort_unstable();
        languages
    }
}
