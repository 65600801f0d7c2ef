//!
//! AST wrapper for a single `N_BINDING` record and its key/value entry.
//!
//! A binding's tokens are re-walked with the accumulator rule of the
//! original scanner: the first significant non-delimiter token becomes the
//! key, a colon separates key from value only while no value fragment has
//! accumulated, and brackets always land on the value side. Whitespace is
//! buffered until the next significant token decides which side it belongs
//! to, so keys and values keep their exact surrounding whitespace.

use super::AstNode;
use crate::{BindingLanguage, SyntaxKind};

/// One record of a binding list.
#[derive(Debug, Clone)]
pub struct Binding {
    pub(crate) syntax: rowan::SyntaxNode<BindingLanguage>,
}

/// The extracted form of one binding record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingEntry {
    /// A `key: value` pair. `value` is `None` when nothing significant
    /// followed the separator colon. Both sides keep their original
    /// surrounding whitespace, untrimmed.
    Pair {
        key: String,
        value: Option<String>,
    },
    /// A fragment that never separated into a key and a value, carried
    /// verbatim. Callers decide whether to surface, ignore, or log it.
    Unknown(String),
}

impl Binding {
    /// Obtain the underlying syntax node.
    #[must_use]
    pub fn syntax(&self) -> &rowan::SyntaxNode<BindingLanguage> {
        &self.syntax
    }

    /// Exact source text of this record, commas excluded.
    #[must_use]
    pub fn text(&self) -> String {
        self.syntax.text().to_string()
    }

    /// Extract this record's key/value entry.
    ///
    /// Returns `None` for blank records, `Unknown` for records that never
    /// saw a separator colon, and `Pair` otherwise.
    #[must_use]
    pub fn entry(&self) -> Option<BindingEntry> {
        let mut key: Option<String> = None;
        let mut value = String::new();
        // Whether any significant value fragment has accumulated; decides
        // if a colon still separates or is already value text.
        let mut has_fragment = false;
        // Whether a colon was consumed as the key/value separator.
        let mut separated = false;
        // Whitespace waiting for the next significant token.
        let mut pending = String::new();

        for element in self.syntax.children_with_tokens() {
            let rowan::NodeOrToken::Token(token) = element else {
                continue;
            };
            let kind = token.kind();
            let text = token.text();
            match kind {
                SyntaxKind::T_WHITESPACE => pending.push_str(text),
                SyntaxKind::T_COLON => {
                    if has_fragment {
                        // The value has started; this colon is value text
                        // (ternaries keep their colons).
                        value.push_str(&pending);
                        pending.clear();
                        value.push_str(text);
                    } else {
                        // Separator: whitespace before the colon stays on
                        // the key side, whitespace after it goes to the
                        // value.
                        if let Some(k) = key.as_mut() {
                            k.push_str(&pending);
                            pending.clear();
                        }
                        separated = true;
                    }
                }
                SyntaxKind::T_LPAREN
                | SyntaxKind::T_RPAREN
                | SyntaxKind::T_LBRACE
                | SyntaxKind::T_RBRACE
                | SyntaxKind::T_LBRACKET
                | SyntaxKind::T_RBRACKET => {
                    value.push_str(&pending);
                    pending.clear();
                    value.push_str(text);
                    has_fragment = true;
                }
                _ if key.is_none() => {
                    // The first significant non-delimiter token is the key.
                    // A quoted key with no leading whitespace sheds its
                    // quotes, as the original scanner's key tokens did.
                    let mut k = std::mem::take(&mut pending);
                    if k.is_empty() && kind == SyntaxKind::T_STRING {
                        k.push_str(strip_quotes(text));
                    } else {
                        k.push_str(text);
                    }
                    key = Some(k);
                }
                _ => {
                    value.push_str(&pending);
                    pending.clear();
                    value.push_str(text);
                    has_fragment = true;
                }
            }
        }

        match key {
            Some(key) if separated => {
                let value = has_fragment.then(|| {
                    value.push_str(&pending);
                    value
                });
                Some(BindingEntry::Pair { key, value })
            }
            _ => {
                let text = self.text();
                if text.trim().is_empty() {
                    None
                } else {
                    Some(BindingEntry::Unknown(text))
                }
            }
        }
    }
}

impl_ast_node!(Binding);

/// Remove the surrounding quote characters of a string token.
fn strip_quotes(text: &str) -> &str {
    let mut chars = text.chars();
    if matches!(chars.next(), Some('"' | '\'')) {
        chars.next_back();
        chars.as_str()
    } else {
        text
    }
}
