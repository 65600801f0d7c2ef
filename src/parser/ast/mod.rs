//!
//! Light-weight AST wrappers built around `rowan` syntax nodes.
//!
//! These wrappers expose typed navigation over the CST produced by the
//! splitter. They stay intentionally small: a binding list, the bindings
//! inside it, and the key/value record each binding yields.

use crate::BindingLanguage;

#[cfg_attr(
    not(test),
    expect(dead_code, reason = "primarily exercised through test modules")
)]
/// Common interface for AST wrappers.
pub(crate) trait AstNode {
    /// Access the underlying syntax node.
    fn syntax(&self) -> &rowan::SyntaxNode<BindingLanguage>;
}

macro_rules! impl_ast_node {
    ($ty:ty) => {
        impl AstNode for $ty {
            fn syntax(&self) -> &rowan::SyntaxNode<BindingLanguage> {
                &self.syntax
            }
        }
    };
}

mod binding;
mod binding_list;

pub use binding::{Binding, BindingEntry};
pub use binding_list::BindingList;
