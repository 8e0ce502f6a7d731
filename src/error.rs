//! Error and diagnostic types
//!
//! Hard failures surface as [`TextError`]. Everything else that can go wrong
//! while formatting is soft: it becomes a [`Diagnostic`] and the output
//! degrades to an empty (or bracketed) substitution.

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in template text
pub type Span = std::ops::Range<usize>;

/// Errors returned to the caller
#[derive(Error, Debug)]
pub enum TextError {
    /// `get_from_dictionary` was given a dictionary key that is not installed
    #[error("dictionary with key '{key}' doesn't exist")]
    UnknownDictionary { key: String },

    #[error("failed to read dictionary file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse dictionary TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// What went wrong while resolving a template
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    #[error("no argument at index {index}")]
    MissingArgument { index: usize },

    #[error("invalid function '{name}'")]
    UnknownFunction { name: String },

    #[error("key '{key}' not found in dictionary '{dictionary}'")]
    MissingKey { key: String, dictionary: String },

    #[error("no dictionary set")]
    NoDictionary,

    #[error("dictionary with key '{key}' doesn't exist")]
    UnknownDictionary { key: String },

    #[error("dictionary reference '{key}' nested deeper than {limit} levels")]
    RecursionLimit { key: String, limit: usize },

    #[error("circular dictionary reference: {chain}")]
    CircularReference { chain: String },
}

/// Where a diagnostic points: the template being formatted and the
/// placeholder span inside it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub template: String,
    pub span: Span,
}

/// A soft failure recorded during `get` or `format`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub location: Option<Location>,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind) -> Self {
        Self {
            kind,
            location: None,
        }
    }

    pub fn at(kind: DiagnosticKind, template: &str, span: Span) -> Self {
        Self {
            kind,
            location: Some(Location {
                template: template.to_string(),
                span,
            }),
        }
    }

    /// Format the diagnostic with template context using ariadne
    ///
    /// Diagnostics without a location render as a single line.
    pub fn format(&self, filename: &str) -> String {
        let message = self.kind.to_string();
        let Some(location) = &self.location else {
            return format!("Warning: {}\n", message);
        };

        // ariadne counts characters, spans count bytes
        let span = char_span(&location.template, &location.span);
        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Warning, filename, span.start)
            .with_message(&message)
            .with_label(
                Label::new((filename, span))
                    .with_message(&message)
                    .with_color(Color::Yellow),
            )
            .finish()
            .write((filename, Source::from(location.template.as_str())), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => format!("Warning: {}\n", message),
        }
    }
}

/// Convert a byte span into a char span, keeping it as is if it does not
/// fall on char boundaries
fn char_span(source: &str, span: &Span) -> Span {
    match (source.get(..span.start), source.get(span.clone())) {
        (Some(before), Some(inside)) => {
            let start = before.chars().count();
            start..start + inside.chars().count()
        }
        _ => span.clone(),
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.location {
            Some(location) => write!(f, "{} at {:?}", self.kind, location.span),
            None => write!(f, "{}", self.kind),
        }
    }
}
