//! Value-expression classification.
//!
//! The compiler never evaluates an expression, so whether a value is a
//! live reactive cell cannot be known here. Classification is purely
//! lexical: the key name against the configured sets, and the value text
//! against three syntactic shapes. The wrap templates defer the actual
//! cell test to evaluation time.

use std::sync::LazyLock;

use phf::phf_set;
use regex_lite::Regex;

use super::BindingSets;

/// Literal words that can never be assignment targets.
static RESERVED_WORDS: phf::Set<&'static str> = phf_set! {
    "true",
    "false",
    "null",
    "undefined",
};

/// A dotted/indexed identifier chain with no operators, matched
/// end-to-end: `a`, `a.b`, `a[i].b[j]`, ...
static ASSIGNMENT_TARGET: LazyLock<Regex> = LazyLock::new(|| {
    #[expect(clippy::expect_used, reason = "the pattern is a constant")]
    let pattern =
        Regex::new(r"(?i)^[_$a-z][_$a-z0-9]*(?:\[.*?\])*(?:\.[_$a-z][_$a-z0-9]*(?:\[.*?\])*)*$")
            .expect("assignment-target pattern must compile");
    pattern
});

/// A function literal: optionally parenthesised, `function` introducer,
/// ending (after trailing parens/whitespace) with a closing brace.
static FUNCTION_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    #[expect(clippy::expect_used, reason = "the pattern is a constant")]
    let pattern = Regex::new(r"(?s)^[(\s]*function\s*\(.*\}[)\s]*$")
        .expect("function-literal pattern must compile");
    pattern
});

/// How one binding's value will be emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// The key is in the exclusion set; the value passes through.
    Excluded,
    /// The value is a function literal; wrapping would break the caller's
    /// execution semantics, so it passes through.
    FunctionLiteral,
    /// The key is two-way and the value is a writable reference; emitted
    /// with the read/write wrap.
    TwoWayWritable,
    /// The value calls or indexes something, so it may hold a lazily
    /// unwrapped cell; emitted with the read-only wrap.
    PossiblyUnwrapped,
    /// Anything else; the value passes through.
    Plain,
}

/// Classify one trimmed value expression. First match wins.
#[must_use]
pub fn classify(key: &str, value: &str, sets: &BindingSets) -> Classification {
    if sets.is_excluded(key) {
        return Classification::Excluded;
    }
    if is_function_literal(value) {
        return Classification::FunctionLiteral;
    }
    if sets.is_two_way(key) && is_writable_value(value) {
        return Classification::TwoWayWritable;
    }
    if is_possibly_unwrapped(value) {
        return Classification::PossiblyUnwrapped;
    }
    Classification::Plain
}

/// Whether generated code may assign to this expression.
pub(super) fn is_writable_value(expression: &str) -> bool {
    if RESERVED_WORDS.contains(expression) {
        return false;
    }
    ASSIGNMENT_TARGET.is_match(expression)
}

fn is_function_literal(expression: &str) -> bool {
    FUNCTION_LITERAL.is_match(expression)
}

/// Whether the expression contains a parenthesis that is not part of the
/// leading paren run, i.e. it calls something or indexes with a computed
/// value.
fn is_possibly_unwrapped(expression: &str) -> bool {
    let mut seen_other = false;
    for c in expression.chars() {
        if c == '(' {
            if seen_other {
                return true;
            }
        } else {
            seen_other = true;
        }
    }
    false
}
