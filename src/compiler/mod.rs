//! Binding compiler: classification and rewriting.
//!
//! The compiler consumes the splitter's records (or an already-structured
//! list), runs each entry through the preprocess-hook chain, classifies
//! its value, and emits the rewritten list: every key single-quoted,
//! every interceptable value wrapped in an accessor call the host runtime
//! resolves at evaluation time.
//!
//! Wrapping never evaluates the user's expression here, since evaluation
//! could have side effects or fail. A wrapped accessor, when read, asks the host to
//! unwrap whatever the expression currently evaluates to; when written
//! (two-way case), it writes through to the live cell or falls back to
//! the generated write-back closure.

mod classify;
mod config;
mod hooks;


pub use classify::{Classification, classify};
pub use config::BindingSets;
pub use hooks::{HookError, PreprocessHook, Reprocess};

use log::debug;
use thiserror::Error;

use crate::parser::ast::BindingEntry;

/// Name of the wrap-adapter function referenced by generated code unless
/// the host configures another one.
pub const DEFAULT_WRAP_FUNCTION: &str = "bindingValueWrap";

/// Failure of a compile call.
///
/// Malformed input never fails (the splitter degrades instead), so the
/// only error source is a host-supplied hook.
#[derive(Debug, Error)]
pub enum CompileError {
    /// A preprocess hook reported an error for the named binding key.
    /// There is no partial-output guarantee once a hook has run with side
    /// effects.
    #[error("preprocess hook failed for binding {key:?}")]
    Hook {
        key: String,
        #[source]
        source: HookError,
    },
}

/// The binding compiler.
///
/// Owns the classification sets, the ordered hook chain, and the name of
/// the wrap function generated code refers to.
///
/// # Examples
///
/// ```rust
/// use rebind::Compiler;
///
/// let compiler = Compiler::new();
/// let rewritten = compiler.compile("if: true")?;
/// assert_eq!(rewritten, "'if':true");
/// # Ok::<(), rebind::CompileError>(())
/// ```
pub struct Compiler {
    sets: BindingSets,
    hooks: Vec<Box<dyn PreprocessHook>>,
    wrap_function: String,
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}

impl Compiler {
    /// A compiler with the standard binding sets, no hooks, and the
    /// default wrap function.
    #[must_use]
    pub fn new() -> Self {
        Self::with_sets(BindingSets::standard())
    }

    /// A compiler with the given binding sets.
    #[must_use]
    pub fn with_sets(sets: BindingSets) -> Self {
        Self {
            sets,
            hooks: Vec::new(),
            wrap_function: DEFAULT_WRAP_FUNCTION.to_string(),
        }
    }

    /// The classification sets.
    #[must_use]
    pub fn sets(&self) -> &BindingSets {
        &self.sets
    }

    /// Mutable access for host reconfiguration between compile calls.
    pub fn sets_mut(&mut self) -> &mut BindingSets {
        &mut self.sets
    }

    /// Append a hook to the chain. Hooks run in insertion order.
    pub fn push_hook(&mut self, hook: impl PreprocessHook + 'static) {
        self.hooks.push(Box::new(hook));
    }

    /// Override the wrap-adapter function name used in generated code.
    pub fn set_wrap_function(&mut self, name: impl Into<String>) {
        self.wrap_function = name.into();
    }

    /// Compile binding-literal text into its rewritten form.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::Hook`] when a preprocess hook fails.
    pub fn compile(&self, source: &str) -> Result<String, CompileError> {
        self.compile_entries(&crate::parser::parse(source).entries())
    }

    /// Compile an already-structured entry list, bypassing the splitter.
    ///
    /// `Unknown` entries are never emitted. Duplicate keys stay duplicated,
    /// in order; dedup policy belongs to the consumer of the output.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::Hook`] when a preprocess hook fails.
    pub fn compile_entries(&self, entries: &[BindingEntry]) -> Result<String, CompileError> {
        let mut out = Vec::with_capacity(entries.len());
        for entry in entries {
            if let BindingEntry::Pair { key, value } = entry {
                self.process_key_value(normalize_key(key), value.as_deref(), &mut out)?;
            }
        }
        Ok(out.join(","))
    }

    /// Run one entry through hooks, classification, and emission.
    fn process_key_value(
        &self,
        key: &str,
        value: Option<&str>,
        out: &mut Vec<String>,
    ) -> Result<(), CompileError> {
        let mut value: Option<String> = value.map(str::to_string);
        for hook in &self.hooks {
            let current = value.take();
            let mut reprocess = |k: &str, v: Option<&str>| {
                self.process_key_value(normalize_key(k), v, out)
                    .map_err(|e| Box::new(e) as HookError)
            };
            match hook.preprocess(current, key, &mut reprocess) {
                Ok(Some(next)) => value = Some(next),
                Ok(None) => return Ok(()),
                Err(source) => {
                    return Err(CompileError::Hook {
                        key: key.to_string(),
                        source,
                    });
                }
            }
        }

        // An absent value compiles to the literal word, so a bare
        // `key:` still evaluates.
        let text = value.as_deref().map_or("undefined", str::trim);
        let class = classify(key, text, &self.sets);
        debug!("classified {key:?} as {class:?}");
        let rewritten = match class {
            Classification::TwoWayWritable => self.read_write_wrap(text),
            Classification::PossiblyUnwrapped => self.read_only_wrap(text),
            Classification::Excluded | Classification::FunctionLiteral | Classification::Plain => {
                text.to_string()
            }
        };
        out.push(format!("'{key}':{rewritten}"));
        Ok(())
    }

    /// Accessor that unwraps on read; writes reach a live cell only.
    fn read_only_wrap(&self, value: &str) -> String {
        format!("{}(function(){{return {value}}})", self.wrap_function)
    }

    /// Accessor that unwraps on read and, when the live value is not a
    /// cell, assigns through the generated write-back closure.
    fn read_write_wrap(&self, value: &str) -> String {
        format!(
            "{}(function(){{return {value}}},function(_z){{{value}=_z;}})",
            self.wrap_function,
        )
    }
}

/// Trim a key and shed one layer of surrounding quotes, yielding the name
/// used for set lookups and output quoting.
fn normalize_key(key: &str) -> &str {
    let trimmed = key.trim();
    let mut chars = trimmed.chars();
    if matches!(chars.next(), Some('"' | '\'')) {
        chars.next_back();
        chars.as_str()
    } else {
        trimmed
    }
}
