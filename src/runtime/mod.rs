//! Host-runtime boundary: the wrap adapter and its collaborators.
//!
//! The compiler only rewrites text; the accessor calls it emits are
//! resolved by whatever evaluator the host embeds. This module defines
//! the capability contract that evaluator must satisfy and the adapter
//! values built on top of it. The contract is a trait resolved at
//! construction time; capabilities are never rediscovered by inspecting
//! an opaque host object at run time.

pub mod lifecycle;

/// A derived (computed) cell constructed by the host.
pub trait DerivedCell {
    /// How many dependencies the first evaluation registered.
    fn dependency_count(&self) -> usize;
    /// Release the cell and its subscriptions.
    fn dispose(&self);
}

/// The capabilities the host's reactive runtime must provide.
pub trait HostRuntime {
    /// The opaque value type the host evaluator passes around.
    type Value: Clone + 'static;
    /// The host's derived-cell handle.
    type Derived: DerivedCell;

    /// Whether a value is a reactive cell.
    fn is_cell(&self, value: &Self::Value) -> bool;

    /// Read a cell's current value, registering a dependency with the
    /// host's tracking mechanism.
    fn read_cell(&self, cell: &Self::Value) -> Self::Value;

    /// Write a new value into a cell.
    fn write_cell(&self, cell: &Self::Value, update: Self::Value);

    /// Run `body` with dependency tracking suspended.
    ///
    /// Implementations must restore the tracking state even if `body`
    /// panics.
    fn ignore_dependencies<T>(&self, body: impl FnOnce() -> T) -> T;

    /// Construct a derived cell that evaluates `read` immediately and
    /// re-evaluates it when a tracked dependency changes.
    fn derived(&self, read: Box<dyn Fn() + 'static>) -> Self::Derived;
}

/// Unwrap one level: a cell yields its current value, anything else
/// passes through unchanged.
pub fn unwrap_value<R: HostRuntime>(runtime: &R, value: R::Value) -> R::Value {
    if runtime.is_cell(&value) {
        runtime.read_cell(&value)
    } else {
        value
    }
}

/// The wrap adapter generated code refers to.
///
/// Presents a uniform read (and optionally write) interface over an
/// arbitrary expression, deferring the cell test to evaluation time:
/// reading unwraps whatever the accessor currently evaluates to; writing
/// forwards to the live value when it is a cell, and otherwise invokes
/// the caller-supplied write-back closure, if any.
pub struct ValueWrap<'rt, R: HostRuntime> {
    runtime: &'rt R,
    read: Box<dyn Fn() -> R::Value + 'rt>,
    write: Option<Box<dyn Fn(R::Value) + 'rt>>,
}

impl<'rt, R: HostRuntime> ValueWrap<'rt, R> {
    /// Read-only wrap over a value accessor.
    pub fn new(runtime: &'rt R, read: impl Fn() -> R::Value + 'rt) -> Self {
        Self {
            runtime,
            read: Box::new(read),
            write: None,
        }
    }

    /// Read/write wrap: `write` is the fall-back used when the accessor's
    /// current value is not a cell.
    pub fn writable(
        runtime: &'rt R,
        read: impl Fn() -> R::Value + 'rt,
        write: impl Fn(R::Value) + 'rt,
    ) -> Self {
        Self {
            runtime,
            read: Box::new(read),
            write: Some(Box::new(write)),
        }
    }

    /// Current value, unwrapped. Reads register with the host's
    /// dependency tracking.
    pub fn get(&self) -> R::Value {
        unwrap_value(self.runtime, (self.read)())
    }

    /// Write through to the live cell, or fall back to the write-back
    /// closure when the current value is not a cell. A read-only wrap
    /// over a plain value ignores the write; whether the target was
    /// actually assignable is the caller's evaluation-time concern.
    pub fn set(&self, update: R::Value) {
        let target = (self.read)();
        if self.runtime.is_cell(&target) {
            self.runtime.write_cell(&target, update);
        } else if let Some(write) = &self.write {
            write(update);
        }
    }

    /// Read without registering a dependency.
    pub fn peek(&self) -> R::Value {
        self.runtime.ignore_dependencies(|| self.get())
    }
}

/// Evaluate `read` inside a derived cell and keep the cell only if that
/// first evaluation registered a dependency; otherwise dispose it
/// immediately so nothing stays subscribed.
pub fn possibly_wrap<R: HostRuntime>(
    runtime: &R,
    read: Box<dyn Fn() + 'static>,
) -> Option<R::Derived> {
    let derived = runtime.derived(read);
    if derived.dependency_count() == 0 {
        derived.dispose();
        return None;
    }
    Some(derived)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use rstest::rstest;

    use super::{HostRuntime, ValueWrap, possibly_wrap, unwrap_value};
    use crate::test_util::{MockRuntime, MockValue};

    #[rstest]
    fn unwrap_returns_plain_values_unchanged() {
        let runtime = MockRuntime::new();
        assert_eq!(
            unwrap_value(&runtime, MockValue::Plain(7)),
            MockValue::Plain(7),
        );
    }

    #[rstest]
    fn unwrap_reads_cells() {
        let runtime = MockRuntime::new();
        let cell = runtime.new_cell(42);
        assert_eq!(unwrap_value(&runtime, cell), MockValue::Plain(42));
    }

    #[rstest]
    fn get_unwraps_whatever_the_accessor_yields() {
        let runtime = MockRuntime::new();
        let cell = runtime.new_cell(5);
        let accessor_cell = cell.clone();
        let wrap = ValueWrap::new(&runtime, move || accessor_cell.clone());
        assert_eq!(wrap.get(), MockValue::Plain(5));
    }

    #[rstest]
    fn set_forwards_to_a_live_cell() {
        let runtime = MockRuntime::new();
        let cell = runtime.new_cell(5);
        let accessor_cell = cell.clone();
        let wrap = ValueWrap::new(&runtime, move || accessor_cell.clone());
        wrap.set(MockValue::Plain(9));
        assert_eq!(runtime.slot(&cell), Some(9));
    }

    #[rstest]
    fn set_falls_back_to_the_write_closure_for_plain_values() {
        let runtime = MockRuntime::new();
        let written = Rc::new(std::cell::Cell::new(0));
        let sink = Rc::clone(&written);
        let wrap = ValueWrap::writable(
            &runtime,
            || MockValue::Plain(1),
            move |update| {
                if let MockValue::Plain(v) = update {
                    sink.set(v);
                }
            },
        );
        wrap.set(MockValue::Plain(8));
        assert_eq!(written.get(), 8);
    }

    #[rstest]
    fn read_only_wrap_ignores_writes_to_plain_values() {
        let runtime = MockRuntime::new();
        let wrap = ValueWrap::new(&runtime, || MockValue::Plain(1));
        wrap.set(MockValue::Plain(9));
        assert_eq!(wrap.get(), MockValue::Plain(1));
    }

    #[rstest]
    fn peek_registers_no_dependency() {
        let runtime = MockRuntime::new();
        let cell = runtime.new_cell(3);
        let accessor_cell = cell.clone();
        let wrap = ValueWrap::new(&runtime, move || accessor_cell.clone());
        assert_eq!(wrap.peek(), MockValue::Plain(3));
        assert!(runtime.reads().is_empty());
        assert_eq!(wrap.get(), MockValue::Plain(3));
        assert_eq!(runtime.reads().len(), 1);
    }

    #[rstest]
    fn tracking_state_survives_a_panicking_body() {
        let runtime = MockRuntime::new();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            runtime.ignore_dependencies(|| {
                panic!("boom");
            });
        }));
        assert!(result.is_err());
        assert!(runtime.is_tracking());
    }

    #[rstest]
    fn possibly_wrap_keeps_a_tracking_read() {
        let runtime = Rc::new(MockRuntime::new());
        let cell = runtime.new_cell(1);
        let reader = Rc::clone(&runtime);
        let derived = possibly_wrap(
            runtime.as_ref(),
            Box::new(move || {
                let _ = unwrap_value(reader.as_ref(), cell.clone());
            }),
        );
        assert!(derived.is_some());
        assert_eq!(runtime.disposals(), 0);
    }

    #[rstest]
    fn possibly_wrap_disposes_a_dependency_free_read() {
        let runtime = Rc::new(MockRuntime::new());
        let derived = possibly_wrap(runtime.as_ref(), Box::new(|| {}));
        assert!(derived.is_none());
        assert_eq!(runtime.disposals(), 1);
    }
}
