use std::{fmt::Display, path::Path};

use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    file: Option<String>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, file: Option<String>) -> Self {
        Error {
            internal_error: error_impl,
            file,
        }
    }

    /// Builds an `IoError` for `path` out of a `std::io::Error`.
    pub fn io(path: &Path, error: &std::io::Error) -> Self {
        let path = path.to_string_lossy().to_string();

        Error::new(
            ErrorImpl::IoError {
                path: path.clone(),
                reason: error.to_string(),
            },
            Some(path),
        )
    }

    pub fn with_file(mut self, file: &Path) -> Self {
        self.file = Some(file.to_string_lossy().to_string());
        self
    }

    pub fn get_file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnknownLanguage { .. } => "UnknownLanguage",
            ErrorImpl::IoError { .. } => "IOError",
            ErrorImpl::LexError { .. } => "LexError",
            ErrorImpl::InvalidPattern { .. } => "InvalidPattern",
            ErrorImpl::EmptyGrammar { .. } => "EmptyGrammar",
            ErrorImpl::WorkerPool { .. } => "WorkerPool",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnknownLanguage { language } if language.is_empty() => {
                ErrorTip::Suggestion(String::from(
                    "The file has no extension, rename it to .py, .sql, .vbs or .bas",
                ))
            }
            ErrorImpl::UnknownLanguage { language } => ErrorTip::Suggestion(format!(
                "No grammar is registered for `{}`, supported languages are basic, sql and python",
                language
            )),
            ErrorImpl::IoError { path, reason } => {
                ErrorTip::Suggestion(format!("Could not access `{}`: {}", path, reason))
            }
            ErrorImpl::LexError { .. } => ErrorTip::None,
            ErrorImpl::InvalidPattern { language, pattern, .. } => ErrorTip::Suggestion(format!(
                "Pattern `{}` of the `{}` grammar is not a valid regular expression",
                pattern, language
            )),
            ErrorImpl::EmptyGrammar { language } => ErrorTip::Suggestion(format!(
                "Grammar `{}` needs at least one rule",
                language
            )),
            ErrorImpl::WorkerPool { .. } => ErrorTip::Suggestion(String::from(
                "Try a smaller --workers value or run with --mode sequential",
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{} ({}): {}", self.get_error_name(), file, self.internal_error),
            None => write!(f, "{}: {}", self.get_error_name(), self.internal_error),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unknown language: {language:?}")]
    UnknownLanguage { language: String },
    #[error("i/o error on {path:?}: {reason}")]
    IoError { path: String, reason: String },
    #[error("lex error: {reason}")]
    LexError { reason: String },
    #[error("invalid pattern {pattern:?} in grammar {language:?}: {reason}")]
    InvalidPattern {
        language: String,
        pattern: String,
        reason: String,
    },
    #[error("grammar {language:?} has no rules")]
    EmptyGrammar { language: String },
    #[error("could not build worker pool: {reason}")]
    WorkerPool { reason: String },
}
