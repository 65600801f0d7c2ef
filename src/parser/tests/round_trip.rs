//! Lossless-tree and whitespace-fidelity tests.
//!
//! Parsing never reformats: the tree's text equals the trimmed,
//! brace-stripped input, and every key/value fragment keeps its exact
//! surrounding whitespace.

use rstest::rstest;

use super::pair;
use crate::parser::ast::AstNode;
use crate::parser::parse;

#[rstest]
#[case("a: 1, b: 'x,y', c: [1, 2]")]
#[case("a : {b: 1},\n c: f(1)")]
#[case("malformed1, good:3")]
fn tree_text_matches_input(#[case] src: &str) {
    let parsed = parse(src);
    assert_eq!(parsed.root().text(), src);
}

#[rstest]
fn outer_braces_are_stripped_once() {
    let parsed = parse("  {a: 1}  ");
    assert_eq!(parsed.root().text(), "a: 1");
}

#[rstest]
fn bindings_expose_their_syntax_nodes() {
    let parsed = parse("a: 1, b: 2");
    let bindings = parsed.root().bindings();
    assert_eq!(bindings.len(), 2);
    let texts: Vec<String> = bindings
        .iter()
        .map(|b| AstNode::syntax(b).text().to_string())
        .collect();
    assert_eq!(texts, vec!["a: 1", " b: 2"]);
}

#[rstest]
fn key_and_value_whitespace_is_reproduced_exactly() {
    // Only the single global trim applies; fragments are never trimmed.
    let entries = parse("\tfirst :  1 ,second:2\n").entries();
    assert_eq!(entries, vec![pair("first ", "  1 "), pair("second", "2")]);
}

#[rstest]
fn deeply_nested_brackets_stay_in_one_record() {
    let depth = 64;
    let mut value = String::from(" ");
    for _ in 0..depth {
        value.push_str("[1,");
    }
    for _ in 0..depth {
        value.push(']');
    }
    let src = format!("deep:{value}, b: 2");
    let entries = parse(&src).entries();
    assert_eq!(entries, vec![pair("deep", &value), pair(" b", " 2")]);
}
