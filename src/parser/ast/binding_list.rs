//!
//! Wrapper for the root `N_BINDING_LIST` node.
//!
//! Provides typed access to the bindings of a parsed literal while keeping
//! the lossless tree available for exact-text consumers.

use rowan::GreenNode;

use super::{AstNode, Binding, BindingEntry};
use crate::{BindingLanguage, SyntaxKind};

/// The root of a parsed binding list.
#[derive(Debug, Clone)]
pub struct BindingList {
    pub(crate) syntax: rowan::SyntaxNode<BindingLanguage>,
}

impl BindingList {
    /// Create a new `BindingList` from a green node.
    #[must_use]
    pub fn from_green(green: GreenNode) -> Self {
        Self {
            syntax: rowan::SyntaxNode::<BindingLanguage>::new_root(green),
        }
    }

    /// Obtain the underlying syntax node.
    #[must_use]
    pub fn syntax(&self) -> &rowan::SyntaxNode<BindingLanguage> {
        &self.syntax
    }

    /// Text content of the whole list. Equals the trimmed,
    /// brace-stripped input exactly.
    #[must_use]
    pub fn text(&self) -> String {
        self.syntax.text().to_string()
    }

    /// Collect all bindings, in source order.
    #[must_use]
    pub fn bindings(&self) -> Vec<Binding> {
        self.syntax
            .children()
            .filter(|n| n.kind() == SyntaxKind::N_BINDING)
            .map(|syntax| Binding { syntax })
            .collect()
    }

    /// Extract the key/value record of every binding, in source order.
    ///
    /// Blank records (for instance between consecutive commas) yield
    /// nothing; everything else yields exactly one entry.
    #[must_use]
    pub fn entries(&self) -> Vec<BindingEntry> {
        self.bindings()
            .iter()
            .filter_map(Binding::entry)
            .collect()
    }
}

impl_ast_node!(BindingList);
