use rebind::{BindingEntry, BindingSets, Compiler, parse_object_literal};
use rstest::rstest;

fn compile(source: &str) -> String {
    Compiler::new().compile(source).unwrap_or_default()
}

#[rstest]
fn reserved_looking_keys_are_quoted() {
    assert_eq!(compile("if: true"), "'if':true");
}

#[rstest]
fn a_fresh_compiler_carries_the_standard_configuration() {
    let compiler = Compiler::new();
    assert!(compiler.sets().is_two_way("value"));
    assert!(compiler.sets().is_excluded("click"));
    assert!(
        compile("text: name()").contains(rebind::DEFAULT_WRAP_FUNCTION),
    );
}

#[rstest]
fn two_way_keys_gain_a_write_back_closure() {
    let mut compiler = Compiler::with_sets(BindingSets::empty());
    compiler.sets_mut().add_two_way("b");
    assert_eq!(
        compiler.compile("b: firstName").unwrap_or_default(),
        "'b':bindingValueWrap(function(){return firstName},function(_z){firstName=_z;})",
    );
}

#[rstest]
fn standard_two_way_set_applies_out_of_the_box() {
    assert_eq!(
        compile("value: user.name"),
        "'value':bindingValueWrap(function(){return user.name},function(_z){user.name=_z;})",
    );
}

#[rstest]
fn calls_are_wrapped_read_only() {
    assert_eq!(
        compile("text: fullName()"),
        "'text':bindingValueWrap(function(){return fullName()})",
    );
}

#[rstest]
#[case("click: doIt()", "'click':doIt()")]
#[case("event: {mouseover: enter}", "'event':{mouseover: enter}")]
fn excluded_bindings_pass_through(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(compile(source), expected);
}

#[rstest]
fn reserved_words_are_never_write_targets() {
    // `value` is two-way by default, but a reserved literal cannot gain a
    // write-back closure.
    assert_eq!(compile("value: null"), "'value':null");
}

#[rstest]
fn compiling_parsed_entries_matches_compiling_text() {
    let source = "a: 1, text: name(), value: user.name";
    let compiler = Compiler::new();
    let from_text = compiler.compile(source).unwrap_or_default();
    let entries = parse_object_literal(source);
    let from_entries = compiler.compile_entries(&entries).unwrap_or_default();
    assert_eq!(from_text, from_entries);
}

#[rstest]
fn structured_input_may_skip_the_splitter_entirely() {
    let entries = vec![
        BindingEntry::Pair {
            key: "enable".to_string(),
            value: Some("canSave".to_string()),
        },
        BindingEntry::Pair {
            key: "text".to_string(),
            value: None,
        },
    ];
    assert_eq!(
        Compiler::new().compile_entries(&entries).unwrap_or_default(),
        "'enable':canSave,'text':undefined",
    );
}

#[rstest]
fn output_order_follows_input_order() {
    assert_eq!(
        compile("z: 1, a: 2, z: 3"),
        "'z':1,'a':2,'z':3",
    );
}

#[rstest]
fn function_literal_values_survive_untouched() {
    let source = "callback: function(item, index) { return index % 2 ? odd(item) : even(item); }";
    assert_eq!(
        compile(source),
        "'callback':function(item, index) { return index % 2 ? odd(item) : even(item); }",
    );
}
