//! Literal splitter producing a rowan CST and key/value records.
//!
//! This module contains the entry point for parsing binding-literal text.
//! The input is trimmed, one surrounding brace pair is stripped, and the
//! token stream is wrapped into a `rowan::GreenNode` whose `N_BINDING`
//! children are split at top-level commas. Typed wrappers in [`ast`]
//! extract the ordered key/value records from that tree.
//!
//! There is no failure path: malformed input degrades to whatever records
//! the token walk yields, with fragments that never separate into a key
//! and value carried verbatim as [`ast::BindingEntry::Unknown`].

use rowan::GreenNode;

use crate::tokenize;

pub mod ast;
mod cst_builder;

#[cfg(test)]
mod tests;

/// Result of a parse operation.
#[derive(Debug)]
pub struct Parsed {
    green: GreenNode,
    root: ast::BindingList,
}

impl Parsed {
    /// Access the `rowan` green tree.
    #[must_use]
    pub fn green(&self) -> &GreenNode {
        &self.green
    }

    /// Access the typed root wrapper.
    #[must_use]
    pub fn root(&self) -> &ast::BindingList {
        &self.root
    }

    /// Extract the ordered key/value records.
    #[must_use]
    pub fn entries(&self) -> Vec<ast::BindingEntry> {
        self.root.entries()
    }
}

/// Parse binding-literal text.
///
/// The whole input is trimmed once and, when the first character is an
/// opening brace, exactly one leading and one trailing character are
/// stripped without checking that they match. This is a lenient fast
/// path, not a balance check.
///
/// # Examples
///
/// ```rust
/// use rebind::{BindingEntry, parse};
///
/// let parsed = parse("{a: 1}");
/// assert_eq!(
///     parsed.entries(),
///     vec![BindingEntry::Pair { key: "a".into(), value: Some(" 1".into()) }],
/// );
/// ```
#[must_use]
pub fn parse(src: &str) -> Parsed {
    let inner = strip_outer_braces(src.trim());
    let tokens = tokenize(inner);
    let green = cst_builder::build_green_tree(&tokens, inner);
    let root = ast::BindingList::from_green(green.clone());
    Parsed { green, root }
}

/// Parse binding-literal text straight to its key/value records.
///
/// # Examples
///
/// ```rust
/// use rebind::{BindingEntry, parse_object_literal};
///
/// let entries = parse_object_literal("a: 1, b: 2");
/// assert_eq!(
///     entries,
///     vec![
///         BindingEntry::Pair { key: "a".into(), value: Some(" 1".into()) },
///         BindingEntry::Pair { key: " b".into(), value: Some(" 2".into()) },
///     ],
/// );
/// ```
#[must_use]
pub fn parse_object_literal(src: &str) -> Vec<ast::BindingEntry> {
    parse(src).entries()
}

/// Strip one surrounding character pair when the text opens with a brace.
fn strip_outer_braces(text: &str) -> &str {
    let mut chars = text.chars();
    if chars.next() == Some('{') {
        chars.next_back();
        chars.as_str()
    } else {
        text
    }
}
