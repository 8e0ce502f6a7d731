//! Template parsing: lexing and placeholder recognition

pub mod lexer;
mod placeholder;

pub use placeholder::{classify, scan, strip, Param, Placeholder};
