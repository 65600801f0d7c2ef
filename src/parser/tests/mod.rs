//! Tests for the literal splitter and record extraction.

mod round_trip;

use crate::parser::ast::BindingEntry;

/// Shorthand for the expected form of a `key: value` record.
fn pair(key: &str, value: &str) -> BindingEntry {
    BindingEntry::Pair {
        key: key.to_string(),
        value: Some(value.to_string()),
    }
}

fn unknown(text: &str) -> BindingEntry {
    BindingEntry::Unknown(text.to_string())
}
