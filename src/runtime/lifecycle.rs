//! Binding-handler lifecycle wiring.
//!
//! A handler owns optional `init` and `update` callbacks. A *freed*
//! handler has its `update` re-run inside a derived cell created while the
//! element is initialised, so only its own dependencies re-trigger it;
//! sibling bindings on the same element cannot. `init` always runs with
//! dependency tracking suspended so it cannot leak reads into the caller's
//! scope.
//!
//! Freeing composes explicitly through the registry instead of patching
//! the handler callbacks in place; the original behaviour stays available
//! for handlers that were not freed.

use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use super::{HostRuntime, possibly_wrap};
use crate::compiler::BindingSets;

type LifecycleFn<R> = Rc<dyn Fn(&<R as HostRuntime>::Value)>;

/// Named binding handler with optional lifecycle callbacks.
pub struct Handler<R: HostRuntime> {
    init: Option<LifecycleFn<R>>,
    update: Option<LifecycleFn<R>>,
}

impl<R: HostRuntime> Default for Handler<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: HostRuntime> Handler<R> {
    /// A handler with no callbacks.
    #[must_use]
    pub fn new() -> Self {
        Self {
            init: None,
            update: None,
        }
    }

    /// Attach an `init` callback, run once per element.
    #[must_use]
    pub fn with_init(mut self, init: impl Fn(&R::Value) + 'static) -> Self {
        self.init = Some(Rc::new(init));
        self
    }

    /// Attach an `update` callback, re-run when its dependencies change.
    #[must_use]
    pub fn with_update(mut self, update: impl Fn(&R::Value) + 'static) -> Self {
        self.update = Some(Rc::new(update));
        self
    }
}

/// Registry of named binding handlers.
pub struct HandlerRegistry<R: HostRuntime> {
    runtime: Rc<R>,
    handlers: HashMap<String, Handler<R>>,
    freed: HashSet<String>,
}

impl<R: HostRuntime> HandlerRegistry<R> {
    #[must_use]
    pub fn new(runtime: Rc<R>) -> Self {
        Self {
            runtime,
            handlers: HashMap::new(),
            freed: HashSet::new(),
        }
    }

    /// Register a handler under a binding key.
    pub fn register(&mut self, key: impl Into<String>, handler: Handler<R>) {
        self.handlers.insert(key.into(), handler);
    }

    /// Whether a handler runs in freed mode.
    #[must_use]
    pub fn is_freed(&self, key: &str) -> bool {
        self.freed.contains(key)
    }

    /// Free the named handlers and drop the keys from the exclusion set.
    ///
    /// With `honor_exclude`, currently excluded keys are left untouched.
    pub fn include(&mut self, keys: &[&str], sets: &mut BindingSets, honor_exclude: bool) {
        for &key in keys {
            if honor_exclude && sets.is_excluded(key) {
                continue;
            }
            if self.handlers.contains_key(key) {
                self.freed.insert(key.to_string());
            }
            sets.include(key);
        }
    }

    /// Free every registered handler, honouring the exclusion set.
    pub fn include_all(&mut self, sets: &mut BindingSets) {
        let keys: Vec<String> = self.handlers.keys().cloned().collect();
        let refs: Vec<&str> = keys.iter().map(String::as_str).collect();
        self.include(&refs, sets, true);
    }

    /// Run a handler's lifecycle for one element.
    ///
    /// A freed handler runs `init` with dependency tracking suspended and
    /// then evaluates `update` inside a derived cell; the returned cell
    /// keeps the update loop alive and must be retained for as long as
    /// the element exists. Handlers that were not freed run their
    /// callbacks directly and return nothing.
    pub fn invoke(&self, key: &str, element: &R::Value) -> Option<R::Derived> {
        let handler = self.handlers.get(key)?;
        if !self.freed.contains(key) {
            if let Some(init) = &handler.init {
                init(element);
            }
            if let Some(update) = &handler.update {
                update(element);
            }
            return None;
        }

        if let Some(init) = &handler.init {
            self.runtime.ignore_dependencies(|| init(element));
        }
        handler.update.as_ref().and_then(|update| {
            let update = Rc::clone(update);
            let element = element.clone();
            possibly_wrap(self.runtime.as_ref(), Box::new(move || update(&element)))
        })
    }
}
