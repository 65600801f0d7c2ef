//! Lexical analysis for binding-literal text.
//!
//! This module exposes a `tokenize` function which converts the text of a
//! relaxed object literal (`key: expr, key2: expr2`) into a sequence of
//! `(SyntaxKind, Span)` pairs. It uses the `logos` crate to recognise
//! tokens so that the syntax tree can mirror the input exactly.
//!
//! The token patterns are tried in the scanner's priority order: quoted
//! strings and regular-expression literals first (so their contents stay
//! opaque), then single-character delimiters, then maximal text runs, and
//! finally any single non-whitespace character. The last fallback makes
//! the lexer total: an unterminated string or regex degrades to a stray
//! quote or slash followed by ordinary tokens, never an error.

use logos::Logos;

use crate::SyntaxKind;

/// Byte range for a token within the source.
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    #[regex(r"[ \t\r\n]+")]
    Whitespace,
    #[regex(r#""(?:[^"\\]|\\.)*""#)]
    #[regex(r"'(?:[^'\\]|\\.)*'")]
    String,
    #[regex(r"/(?:[^/\\]|\\.)*/")]
    Regex,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[regex(r#"[^ \t\r\n:,"'\{\}\(\)/\[\]]+"#)]
    Text,
    // One character nothing else claimed, e.g. the quote of an
    // unterminated string. Lowest priority so it never shadows a
    // delimiter.
    #[regex(r"[^ \t\r\n]", priority = 0)]
    Stray,
}

/// Tokenise binding-literal text into `(SyntaxKind, Span)` pairs.
///
/// Whitespace is kept: the splitter relies on it to reproduce key and
/// value fragments with their exact surrounding whitespace.
///
/// # Examples
///
/// ```rust
/// use rebind::{SyntaxKind, tokenize};
///
/// let tokens = tokenize("a: 'x,y'");
/// let kinds: Vec<SyntaxKind> = tokens.iter().map(|(k, _)| *k).collect();
/// assert_eq!(
///     kinds,
///     vec![
///         SyntaxKind::T_TEXT,
///         SyntaxKind::T_COLON,
///         SyntaxKind::T_WHITESPACE,
///         SyntaxKind::T_STRING,
///     ],
/// );
/// ```
#[must_use]
pub fn tokenize(src: &str) -> Vec<(SyntaxKind, Span)> {
    let mut lexer = Token::lexer(src);
    #[expect(
        clippy::integer_division,
        clippy::integer_division_remainder_used,
        reason = "rough capacity estimate"
    )]
    let estimated_tokens = src.len() / 4; // roughly four chars per token
    let mut out = Vec::with_capacity(estimated_tokens);
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        // The fallback pattern accepts any non-whitespace character, so the
        // lexer never actually fails; treat a failure as a stray character
        // all the same.
        let kind = result.map_or(SyntaxKind::T_STRAY, |token| match token {
            Token::Whitespace => SyntaxKind::T_WHITESPACE,
            Token::String => SyntaxKind::T_STRING,
            Token::Regex => SyntaxKind::T_REGEX,
            Token::LParen => SyntaxKind::T_LPAREN,
            Token::RParen => SyntaxKind::T_RPAREN,
            Token::LBrace => SyntaxKind::T_LBRACE,
            Token::RBrace => SyntaxKind::T_RBRACE,
            Token::LBracket => SyntaxKind::T_LBRACKET,
            Token::RBracket => SyntaxKind::T_RBRACKET,
            Token::Comma => SyntaxKind::T_COMMA,
            Token::Colon => SyntaxKind::T_COLON,
            Token::Text => SyntaxKind::T_TEXT,
            Token::Stray => SyntaxKind::T_STRAY,
        });
        out.push((kind, span));
    }
    out
}
