//! Placeholder scanning and classification
//!
//! A placeholder is a `{` followed by one or more characters up to the first
//! `}` after them, all on one line. Placeholders do not nest and braces
//! cannot be escaped.

use super::lexer::{lex, Span, Token};

/// A classified placeholder body (the text between the braces)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placeholder<'a> {
    /// `{0}`: positional argument lookup
    Index(usize),
    /// `{name(a, b)}`: registered function call
    Call { name: &'a str, params: Vec<Param<'a>> },
    /// `{name}`: dictionary key lookup
    Key(&'a str),
    /// Anything else, left for the cleanup pass
    Unrecognized,
}

/// A raw function parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param<'a> {
    /// Only the first parameter may reference a positional argument
    Index(usize),
    Literal(&'a str),
}

/// Find every placeholder span in `template`, left to right, non-overlapping
///
/// Spans include the surrounding braces.
pub fn scan(template: &str) -> Vec<Span> {
    let tokens: Vec<(Token, Span)> = lex(template).collect();
    let mut spans = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        if tokens[i].0 != Token::BraceOpen {
            i += 1;
            continue;
        }

        let start = tokens[i].1.start;
        let mut body_len = 0;
        let mut end = None;
        let mut j = i + 1;
        while j < tokens.len() {
            let (tok, span) = &tokens[j];
            match tok {
                Token::LineBreak => break,
                // A `}` right after the `{` is part of the body
                Token::BraceClose if body_len > 0 => {
                    end = Some(span.end);
                    break;
                }
                _ => body_len += span.len(),
            }
            j += 1;
        }

        match end {
            Some(end) => {
                spans.push(start..end);
                i = j + 1;
            }
            // Retry from the next token, the body may hold another `{`
            None => i += 1,
        }
    }

    spans
}

/// Remove every placeholder span from `text`
pub fn strip(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for span in scan(text) {
        out.push_str(&text[cursor..span.start]);
        cursor = span.end;
    }
    out.push_str(&text[cursor..]);
    out
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_word(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_word_char)
}

fn is_index(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Indices too large for `usize` can never name a supplied argument
fn parse_index(s: &str) -> usize {
    s.parse().unwrap_or(usize::MAX)
}

/// Classify a placeholder body (without braces)
pub fn classify(body: &str) -> Placeholder<'_> {
    if is_index(body) {
        return Placeholder::Index(parse_index(body));
    }

    if let Some(call) = classify_call(body.trim()) {
        return call;
    }

    if is_word(body) {
        return Placeholder::Key(body);
    }

    Placeholder::Unrecognized
}

fn classify_call(body: &str) -> Option<Placeholder<'_>> {
    let open = body.find('(')?;
    let name = &body[..open];
    if !is_word(name) || !body.ends_with(')') {
        return None;
    }

    // Between the first `(` and the last `)`
    let inner = &body[open + 1..body.len() - 1];
    let params = inner
        .split(',')
        .map(str::trim)
        .enumerate()
        .map(|(i, raw)| {
            if i == 0 && is_index(raw) {
                Param::Index(parse_index(raw))
            } else {
                Param::Literal(raw)
            }
        })
        .collect();

    Some(Placeholder::Call { name, params })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bodies(template: &str) -> Vec<&str> {
        scan(template)
            .into_iter()
            .map(|s| &template[s.start + 1..s.end - 1])
            .collect()
    }

    #[test]
    fn test_scan_no_placeholders() {
        assert!(scan("Test test test").is_empty());
    }

    #[test]
    fn test_scan_multiple() {
        assert_eq!(bodies("Test {1} {0}"), vec!["1", "0"]);
    }

    #[test]
    fn test_scan_function_call() {
        assert_eq!(
            bodies("{gender(0,He,She,He/She)} is here"),
            vec!["gender(0,He,She,He/She)"]
        );
    }

    #[test]
    fn test_scan_empty_braces_take_next_close() {
        // `{}` has no body, so the match runs on to the next `}`
        assert_eq!(bodies("{}x} y"), vec!["}x"]);
        assert!(scan("{}").is_empty());
    }

    #[test]
    fn test_scan_stops_at_first_close() {
        assert_eq!(bodies("{a{b}c}"), vec!["a{b"]);
    }

    #[test]
    fn test_scan_unclosed_then_closed() {
        assert_eq!(bodies("{ oops\n{0}"), vec!["0"]);
    }

    #[test]
    fn test_scan_never_crosses_lines() {
        assert!(scan("{a\nb}").is_empty());
    }

    #[test]
    fn test_strip_keeps_text_between() {
        assert_eq!(
            strip("First parameter: {0}; Second parameter: {1};"),
            "First parameter: ; Second parameter: ;"
        );
    }

    #[test]
    fn test_strip_without_placeholders() {
        assert_eq!(strip("no braces } here {"), "no braces } here {");
    }

    #[test]
    fn test_classify_index() {
        assert_eq!(classify("0"), Placeholder::Index(0));
        assert_eq!(classify("12"), Placeholder::Index(12));
        assert_eq!(
            classify("99999999999999999999999999"),
            Placeholder::Index(usize::MAX)
        );
    }

    #[test]
    fn test_classify_key() {
        assert_eq!(classify("relation_variable"), Placeholder::Key("relation_variable"));
        assert_eq!(classify("key1"), Placeholder::Key("key1"));
    }

    #[test]
    fn test_classify_call() {
        assert_eq!(
            classify("count(0, script, scripts, scripts)"),
            Placeholder::Call {
                name: "count",
                params: vec![
                    Param::Index(0),
                    Param::Literal("script"),
                    Param::Literal("scripts"),
                    Param::Literal("scripts"),
                ],
            }
        );
    }

    #[test]
    fn test_classify_call_only_first_param_is_index() {
        assert_eq!(
            classify("pick(a, 1)"),
            Placeholder::Call {
                name: "pick",
                params: vec![Param::Literal("a"), Param::Literal("1")],
            }
        );
    }

    #[test]
    fn test_classify_call_without_params() {
        assert_eq!(
            classify("date()"),
            Placeholder::Call {
                name: "date",
                params: vec![Param::Literal("")],
            }
        );
    }

    #[test]
    fn test_classify_call_keeps_inner_parens() {
        assert_eq!(
            classify("wrap((a), b)"),
            Placeholder::Call {
                name: "wrap",
                params: vec![Param::Literal("(a)"), Param::Literal("b")],
            }
        );
    }

    #[test]
    fn test_classify_unrecognized() {
        assert_eq!(classify("two words"), Placeholder::Unrecognized);
        assert_eq!(classify("-1"), Placeholder::Unrecognized);
        assert_eq!(classify("(x)"), Placeholder::Unrecognized);
    }
}
