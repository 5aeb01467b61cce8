use lazy_static::lazy_static;
use std::{collections::HashMap, path::Path};

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenClass,
    MK_RULE,
};

use super::grammar::{Grammar, GrammarRegistry};

lazy_static! {
    pub static ref EXTENSION_LOOKUP: HashMap<&'static str, &'static str> = {
        let mut map = HashMap::new();
        map.insert("py", "python");
        map.insert("sql", "sql");
        map.insert("vbs", "basic");
        map.insert("bas", "basic");
        map
    };
}

pub fn basic() -> Result<Grammar, Error> {
    Grammar::new(
        "basic",
        vec![
            MK_RULE!(TokenClass::Comment, r"'.*|\bREM\b.*", ignore_case),
            MK_RULE!(
                TokenClass::Keyword,
                r"\b(AND|OR|NOT|REM|LET|IF|THEN|ELSE|ELSEIF|ENDIF|GOTO|GOSUB|RETURN|FOR|TO|STEP|NEXT|WHILE|WEND|DO|LOOP|EXIT|SELECT|CASE|ENDSELECT|ENDCASE|DIM|AS|FUNCTION|ENDFUNCTION|SUB|ENDSUB|PRINT|INPUT|READ|DATA|RESTORE|ON|ERROR|RESUME|RESUME_NEXT|STOP|END|CONST|INCLUDE)\b",
                ignore_case
            ),
            MK_RULE!(TokenClass::Literal, r#""[^"]*"|\b\d+(\.\d+)?\b"#),
            MK_RULE!(TokenClass::Operator, r"\+|-|\*|/|\^|=|<|>|<=|>=|<>|\bMOD\b", ignore_case),
            MK_RULE!(TokenClass::Separator, r"[()\[\]{},:;.]"),
            MK_RULE!(TokenClass::Identifier, r"[a-zA-Z_]\w*"),
        ],
    )
}

pub fn sql() -> Result<Grammar, Error> {
    Grammar::new(
        "sql",
        vec![
            MK_RULE!(TokenClass::Comment, r"--.*"),
            MK_RULE!(
                TokenClass::Keyword,
                r"\b(SELECT|FROM|WHERE|AND|OR|NOT|INSERT|INTO|VALUES|UPDATE|SET|DELETE|CREATE|TABLE|DROP|ALTER|ADD|PRIMARY|KEY|FOREIGN|REFERENCES|INDEX|ASC|DESC)\b",
                ignore_case
            ),
            MK_RULE!(TokenClass::Literal, r#"".*?"|'.*?'|\b\d+(\.\d+)?\b"#),
            MK_RULE!(TokenClass::Operator, r"\+|-|\*|/|%|=|!=|<|>|<=|>="),
            MK_RULE!(TokenClass::Separator, r"[()\[\]{},:;.]"),
            MK_RULE!(TokenClass::Identifier, r"\b[a-zA-Z_]\w*\b"),
        ],
    )
}

pub fn python() -> Result<Grammar, Error> {
    Grammar::new(
        "python",
        vec![
            MK_RULE!(
                TokenClass::Keyword,
                r"\b(and|as|assert|break|class|continue|def|del|elif|else|except|False|finally|for|from|global|if|import|in|is|lambda|None|nonlocal|not|or|pass|raise|return|True|try|while|with|yield)\b"
            ),
            MK_RULE!(
                TokenClass::Literal,
                r#"""".*?"""|'''.*?'''|".*?"|'.*?'|r".*?"|r'.*?'|\b0[xX][0-9a-fA-F]+\b|\b0[oO][0-7]+\b|\b0[bB][01]+\b|\b\d+(\.\d+)?([eE][+-]?\d+)?\b"#
            ),
            MK_RULE!(
                TokenClass::Operator,
                r"\*\*=|//=|>>=|<<=|\+=|-=|\*=|/=|%=|&=|\|=|\^=|\*\*|//|<<|>>|<=|>=|==|!=|\+|-|\*|/|%|&|\||\^|~|<|>|="
            ),
            MK_RULE!(TokenClass::Separator, r"[()\[\]{},:;.]"),
            MK_RULE!(TokenClass::Comment, r"#.*"),
            MK_RULE!(TokenClass::Identifier, r"\b[a-zA-Z_]\w*\b"),
        ],
    )
}

pub fn builtin_registry() -> Result<GrammarRegistry, Error> {
    let mut registry = GrammarRegistry::new();

    registry.register(basic()?);
    registry.register(sql()?);
    registry.register(python()?);

    Ok(registry)
}

/// Language id for `path`, taken from its extension (case-insensitive).
pub fn detect_language(path: &Path) -> Result<&'static str, Error> {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    EXTENSION_LOOKUP
        .get(extension.as_str())
        .copied()
        .ok_or_else(|| {
            Error::new(
                ErrorImpl::UnknownLanguage { language: extension },
                Some(path.to_string_lossy().to_string()),
            )
        })
}
