//! Library crate for rebind.
//!
//! Compiles relaxed `key: expr, ...` binding literals into ordered
//! key/value records and a rewritten textual form whose values can be
//! intercepted at evaluation time by a host reactive runtime.

#![forbid(unsafe_code)]

pub mod compiler;
pub mod language;
pub mod parser;
pub mod runtime;
pub mod tokenizer;

// Only expose test utilities to tests and opt-in consumers.
#[cfg(any(test, feature = "test-support"))]
#[doc(hidden)]
pub mod test_util;

pub use compiler::{
    BindingSets, Classification, CompileError, Compiler, DEFAULT_WRAP_FUNCTION, HookError,
    PreprocessHook, Reprocess, classify,
};
pub use language::{BindingLanguage, SyntaxKind};
pub use parser::ast::{Binding, BindingEntry, BindingList};
pub use parser::{Parsed, parse, parse_object_literal};
pub use runtime::lifecycle::{Handler, HandlerRegistry};
pub use runtime::{DerivedCell, HostRuntime, ValueWrap, possibly_wrap, unwrap_value};
pub use tokenizer::{Span, tokenize};
