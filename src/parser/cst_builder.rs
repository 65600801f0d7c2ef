//! CST construction utilities.
//!
//! This module builds a `rowan::GreenNode` from the token stream produced
//! by the lexer. The tree has a single `N_BINDING_LIST` root whose
//! `N_BINDING` children are split at top-level commas; the commas
//! themselves stay direct children of the root so that the tree reproduces
//! the source text exactly.
//!
//! Splitting uses one signed depth counter: every opening bracket, brace,
//! or parenthesis increments it and every closer decrements it, no matter
//! which side of a key/value boundary the token ends up on. A comma only
//! terminates a record while the depth is at or below zero, which keeps
//! nested object, array, and argument-list commas inside their record.
//! The counter resets at each record boundary so an unbalanced closer
//! cannot poison the records after it.

use log::warn;
use rowan::{GreenNode, GreenNodeBuilder, Language};

use crate::{BindingLanguage, Span, SyntaxKind};

/// Construct the CST for a (trimmed, brace-stripped) binding list.
pub(super) fn build_green_tree(tokens: &[(SyntaxKind, Span)], src: &str) -> GreenNode {
    let mut builder = GreenNodeBuilder::new();
    builder.start_node(BindingLanguage::kind_to_raw(SyntaxKind::N_BINDING_LIST));
    builder.start_node(BindingLanguage::kind_to_raw(SyntaxKind::N_BINDING));

    let mut depth = 0i64;
    for &(kind, ref span) in tokens {
        if kind == SyntaxKind::T_COMMA && depth <= 0 {
            builder.finish_node();
            push_token(&mut builder, kind, span, src);
            builder.start_node(BindingLanguage::kind_to_raw(SyntaxKind::N_BINDING));
            depth = 0;
            continue;
        }
        match kind {
            SyntaxKind::T_LPAREN | SyntaxKind::T_LBRACE | SyntaxKind::T_LBRACKET => depth += 1,
            SyntaxKind::T_RPAREN | SyntaxKind::T_RBRACE | SyntaxKind::T_RBRACKET => depth -= 1,
            _ => {}
        }
        push_token(&mut builder, kind, span, src);
    }

    // Closing the final record here plays the role of the scanner's
    // appended trailing comma: the last record flushes like every other.
    builder.finish_node();
    builder.finish_node();
    builder.finish()
}

fn push_token(builder: &mut GreenNodeBuilder, kind: SyntaxKind, span: &Span, src: &str) {
    let text = src.get(span.clone()).map_or_else(
        || {
            warn!(
                "token span {:?} out of bounds for source of length {}",
                span,
                src.len()
            );
            ""
        },
        |t| t,
    );
    builder.token(BindingLanguage::kind_to_raw(kind), text);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize;

    fn bindings_of(src: &str) -> Vec<String> {
        let tokens = tokenize(src);
        let green = build_green_tree(&tokens, src);
        let root = rowan::SyntaxNode::<BindingLanguage>::new_root(green);
        root.children()
            .filter(|n| n.kind() == SyntaxKind::N_BINDING)
            .map(|n| n.text().to_string())
            .collect()
    }

    #[test]
    fn splits_on_top_level_commas_only() {
        assert_eq!(
            bindings_of("a: f(1, 2), b: [3, 4]"),
            vec!["a: f(1, 2)", " b: [3, 4]"],
        );
    }

    #[test]
    fn depth_resets_after_each_record() {
        // The stray closer in the first record must not glue the rest
        // of the list into one record.
        assert_eq!(bindings_of("a: x), b: 2"), vec!["a: x)", " b: 2"]);
    }

    #[test]
    fn tree_text_round_trips() {
        let src = "a: {b: 1}, c: 'x,y'";
        let tokens = tokenize(src);
        let green = build_green_tree(&tokens, src);
        let root = rowan::SyntaxNode::<BindingLanguage>::new_root(green);
        assert_eq!(root.text().to_string(), src);
    }
}
