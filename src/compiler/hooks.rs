//! Preprocess hook chain.
//!
//! Hosts extend the compiler by composing an ordered list of hooks rather
//! than replacing its entry point. Each hook sees every entry before
//! classification and may rewrite the value text, drop the entry, or
//! decompose it into further entries through the supplied re-entry
//! callback.

use std::error::Error;

/// Error type hooks report. Boxed so hosts can surface their own error
/// types through the compiler unchanged.
pub type HookError = Box<dyn Error + Send + Sync + 'static>;

/// Re-entry callback handed to hooks.
///
/// Calling it feeds another `(key, value)` pair through the full
/// per-entry pipeline, hooks included, and emits the result before the
/// current entry's own output.
pub type Reprocess<'a> = &'a mut dyn FnMut(&str, Option<&str>) -> Result<(), HookError>;

/// One preprocessing step in the compiler's hook chain.
pub trait PreprocessHook {
    /// Inspect one entry before classification.
    ///
    /// Returning `Ok(Some(text))` replaces the value text; returning
    /// `Ok(None)` drops the entry entirely (its only trace is whatever
    /// side effects the hook itself performed). An `Err` aborts the whole
    /// compile call.
    ///
    /// # Errors
    ///
    /// Implementations may fail for any host-defined reason; the compiler
    /// propagates the error unmodified inside
    /// [`CompileError::Hook`](super::CompileError::Hook).
    fn preprocess(
        &self,
        value: Option<String>,
        key: &str,
        reprocess: Reprocess<'_>,
    ) -> Result<Option<String>, HookError>;
}

impl<F> PreprocessHook for F
where
    F: for<'a> Fn(Option<String>, &str, Reprocess<'a>) -> Result<Option<String>, HookError>,
{
    fn preprocess(
        &self,
        value: Option<String>,
        key: &str,
        reprocess: Reprocess<'_>,
    ) -> Result<Option<String>, HookError> {
        self(value, key, reprocess)
    }
}
