//! Binding-set configuration.
//!
//! Two name sets steer classification: the exclusion set (bindings whose
//! values must never be rewritten, typically because their handler never
//! unwraps the value) and the two-way set (bindings whose handler may
//! write the value back). Both start from the standard handler names and
//! can be reshaped by the host at any time between compile calls. They
//! are plain owned state: not safe for concurrent mutation without
//! external synchronisation.

use std::collections::HashSet;

use phf::phf_set;

/// Bindings whose values pass through unrewritten. Their handlers take
/// the raw value and never unwrap it.
static DEFAULT_EXCLUDED: phf::Set<&'static str> = phf_set! {
    "event",
    "click",
    "submit",
    "valueUpdate",
    "optionsIncludeDestroyed",
    "optionsValue",
    "optionsText",
    "uniqueName",
};

/// Bindings whose handlers write the value back even when it is not a
/// reactive cell.
static DEFAULT_TWO_WAY: phf::Set<&'static str> = phf_set! {
    "value",
    "selectedOptions",
    "checked",
    "hasfocus",
};

/// The exclusion and two-way name sets consulted during classification.
#[derive(Debug, Clone)]
pub struct BindingSets {
    excluded: HashSet<String>,
    two_way: HashSet<String>,
}

impl Default for BindingSets {
    fn default() -> Self {
        Self::standard()
    }
}

impl BindingSets {
    /// Sets prepopulated with the standard handler names.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            excluded: DEFAULT_EXCLUDED.iter().map(|s| (*s).to_string()).collect(),
            two_way: DEFAULT_TWO_WAY.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Empty sets: nothing excluded, nothing two-way.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            excluded: HashSet::new(),
            two_way: HashSet::new(),
        }
    }

    /// Exclude a binding key from rewriting.
    pub fn exclude(&mut self, key: &str) {
        self.excluded.insert(key.to_string());
    }

    /// Remove a binding key from the exclusion set.
    pub fn include(&mut self, key: &str) {
        self.excluded.remove(key);
    }

    #[must_use]
    pub fn is_excluded(&self, key: &str) -> bool {
        self.excluded.contains(key)
    }

    /// Mark a binding key as two-way.
    pub fn add_two_way(&mut self, key: &str) {
        self.two_way.insert(key.to_string());
    }

    /// Remove a binding key from the two-way set.
    pub fn remove_two_way(&mut self, key: &str) {
        self.two_way.remove(key);
    }

    #[must_use]
    pub fn is_two_way(&self, key: &str) -> bool {
        self.two_way.contains(key)
    }
}
