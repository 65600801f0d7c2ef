//! `rowan` integration and binding-literal syntax kinds.
//!
//! This module defines the `SyntaxKind` enum covering all tokens and
//! non-terminal nodes in the binding-literal syntax.  The enumeration is
//! used by `rowan` to tag syntax tree elements.  The `BindingLanguage`
//! newtype implements `rowan::Language` using conversions provided by
//! `num_derive`.

use num_derive::{FromPrimitive as FromPrimitiveDerive, ToPrimitive as ToPrimitiveDerive};
use num_traits::{FromPrimitive, ToPrimitive};
use rowan::Language as RowanLanguage;
use rowan::SyntaxKind as RowanSyntaxKind;

/// Every possible token or node in the binding-literal syntax tree.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, FromPrimitiveDerive, ToPrimitiveDerive,
)]
#[repr(u16)]
#[expect(non_camel_case_types, reason = "token naming follows lexer convention")]
pub enum SyntaxKind {
    // Tokens
    T_WHITESPACE,
    /// Single- or double-quoted string literal, backslash escapes included.
    T_STRING,
    /// Slash-delimited regular-expression literal.
    T_REGEX,
    T_LPAREN,
    T_RPAREN,
    T_LBRACE,
    T_RBRACE,
    T_LBRACKET,
    T_RBRACKET,
    T_COMMA,
    T_COLON,
    /// Maximal run of characters that are neither whitespace nor special.
    T_TEXT,
    /// Fallback: a single character no other pattern claimed, such as the
    /// opening quote of an unterminated string.
    T_STRAY,
    // Nodes
    N_BINDING_LIST,
    N_BINDING,
    // Special
    N_ERROR,
}

/// Newtype wrapper allowing `rowan` to store `SyntaxKind` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BindingLanguage;

impl RowanLanguage for BindingLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: RowanSyntaxKind) -> Self::Kind {
        SyntaxKind::from_u16(raw.0).unwrap_or(SyntaxKind::N_ERROR)
    }

    fn kind_to_raw(kind: Self::Kind) -> RowanSyntaxKind {
        RowanSyntaxKind(
            kind.to_u16()
                .unwrap_or_else(|| unreachable!("all SyntaxKind variants map to u16")),
        )
    }
}
