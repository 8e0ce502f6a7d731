//! Lexer for template text using logos

use logos::Logos;

pub use crate::error::Span;

/// Template tokens
///
/// Everything that is not a brace or a line break is text, so every byte of
/// the input lands in exactly one token.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    #[token("{")]
    BraceOpen,
    #[token("}")]
    BraceClose,
    /// Placeholders never span lines
    #[regex(r"[\r\n]")]
    LineBreak,
    #[regex(r"[^{}\r\n]+")]
    Text,
}

/// Tokenize a template into (token, span) pairs
pub fn lex(input: &str) -> impl Iterator<Item = (Token, Span)> + '_ {
    Token::lexer(input)
        .spanned()
        .map(|(tok, span)| (tok.unwrap_or(Token::Text), span))
}
