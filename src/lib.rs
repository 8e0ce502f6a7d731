//! Texting - template formatting with dictionaries and helper functions
//!
//! Templates contain `{...}` placeholders that are replaced by positional
//! arguments (`{0}`), dictionary texts (`{key}`) or the results of
//! registered functions (`{count(0, file, files, files)}`).
//!
//! # Example
//!
//! ```rust
//! use texting::format;
//!
//! let out = format("{gender(0,He,She,He/She)} has read {count(1,book,books,books)}", &[&"male", &2]);
//! assert_eq!(out, "He has read 2 books");
//! ```

pub mod config;
pub mod dictionary;
pub mod error;
pub mod functions;
pub mod parser;
pub mod text;

pub use config::{Mode, TextConfig};
pub use dictionary::{Dictionary, DictionaryFile, DictionaryManager, DEFAULT};
pub use error::{Diagnostic, DiagnosticKind, Location, Span, TextError};
pub use functions::{FunctionRegistry, TextFunction};
pub use text::{Args, Text};

/// Format a template with the built-in functions and no dictionaries
///
/// This is a shortcut for `Text::new().format(template, args)`.
///
/// # Example
///
/// ```rust
/// use texting::format;
///
/// assert_eq!(format("Test {1} {0}", &[&"first", &"second"]), "Test second first");
/// ```
pub fn format(template: &str, args: &Args<'_>) -> String {
    Text::new().format(template, args)
}
