use rebind::{SyntaxKind, tokenize};
use rstest::{fixture, rstest};

#[fixture]
fn simple_input() -> &'static str {
    "enabled: isEnabled, text: name()"
}

#[rstest]
#[case("name", vec![SyntaxKind::T_TEXT])]
#[case(":", vec![SyntaxKind::T_COLON])]
#[case(",", vec![SyntaxKind::T_COMMA])]
#[case("'quoted, text'", vec![SyntaxKind::T_STRING])]
#[case("\"quoted: text\"", vec![SyntaxKind::T_STRING])]
#[case("/regex[,:]/", vec![SyntaxKind::T_REGEX])]
fn single_tokens(#[case] source: &str, #[case] expected: Vec<SyntaxKind>) {
    let kinds: Vec<SyntaxKind> = tokenize(source).iter().map(|(k, _)| *k).collect();
    assert_eq!(kinds, expected);
}

#[rstest]
fn token_spans_index_the_source(simple_input: &str) {
    for (kind, span) in tokenize(simple_input) {
        let text = simple_input.get(span).unwrap_or("");
        match kind {
            SyntaxKind::T_COLON => assert_eq!(text, ":"),
            SyntaxKind::T_COMMA => assert_eq!(text, ","),
            SyntaxKind::T_WHITESPACE => assert!(text.chars().all(char::is_whitespace)),
            _ => assert!(!text.is_empty()),
        }
    }
}

#[rstest]
fn whitespace_is_preserved_as_tokens(simple_input: &str) {
    let reassembled: String = tokenize(simple_input)
        .into_iter()
        .filter_map(|(_, span)| simple_input.get(span))
        .collect();
    assert_eq!(reassembled, simple_input);
}

#[rstest]
#[case("\"no closing quote")]
#[case("'no closing apostrophe")]
#[case("/no closing slash")]
fn unterminated_literals_never_hang_or_fail(#[case] source: &str) {
    let tokens = tokenize(source);
    assert_eq!(tokens.first().map(|t| t.0), Some(SyntaxKind::T_STRAY));
    let consumed: usize = tokens.iter().map(|(_, span)| span.len()).sum();
    assert_eq!(consumed, source.len());
}
