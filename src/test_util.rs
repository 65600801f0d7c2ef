//! Test helpers: an in-memory host runtime.
//!
//! `MockRuntime` implements the [`HostRuntime`](crate::runtime::HostRuntime)
//! contract over a vector of integer slots, with an observable dependency
//! log and disposal counter, so the wrap adapter and the handler lifecycle
//! can be exercised without a real reactive engine.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::runtime::{DerivedCell, HostRuntime};

/// A value in the mock evaluator: a plain integer or a handle to a cell
/// slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockValue {
    Plain(i64),
    Cell(usize),
}

/// Slot-backed reactive runtime with observable tracking state.
#[derive(Debug)]
pub struct MockRuntime {
    slots: RefCell<Vec<i64>>,
    tracking: Cell<bool>,
    reads: RefCell<Vec<usize>>,
    disposals: Rc<Cell<usize>>,
}

impl Default for MockRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl MockRuntime {
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: RefCell::new(Vec::new()),
            tracking: Cell::new(true),
            reads: RefCell::new(Vec::new()),
            disposals: Rc::new(Cell::new(0)),
        }
    }

    /// Allocate a cell slot and return its handle.
    pub fn new_cell(&self, initial: i64) -> MockValue {
        let mut slots = self.slots.borrow_mut();
        slots.push(initial);
        MockValue::Cell(slots.len() - 1)
    }

    /// Current slot content behind a cell handle.
    #[must_use]
    pub fn slot(&self, value: &MockValue) -> Option<i64> {
        let MockValue::Cell(index) = value else {
            return None;
        };
        self.slots.borrow().get(*index).copied()
    }

    /// Dependency log: slot indices read while tracking was active.
    #[must_use]
    pub fn reads(&self) -> Vec<usize> {
        self.reads.borrow().clone()
    }

    /// How many derived cells have been disposed.
    #[must_use]
    pub fn disposals(&self) -> usize {
        self.disposals.get()
    }

    /// Whether dependency tracking is currently active.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.tracking.get()
    }
}

/// Restores the tracking flag on drop, so suspension survives panics.
struct TrackingGuard<'a> {
    flag: &'a Cell<bool>,
    prev: bool,
}

impl<'a> TrackingGuard<'a> {
    fn set(flag: &'a Cell<bool>, enabled: bool) -> Self {
        let prev = flag.replace(enabled);
        Self { flag, prev }
    }
}

impl Drop for TrackingGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(self.prev);
    }
}

/// Derived-cell handle produced by [`MockRuntime::derived`].
#[derive(Debug)]
pub struct MockDerived {
    dependencies: usize,
    disposals: Rc<Cell<usize>>,
}

impl DerivedCell for MockDerived {
    fn dependency_count(&self) -> usize {
        self.dependencies
    }

    fn dispose(&self) {
        self.disposals.set(self.disposals.get() + 1);
    }
}

impl HostRuntime for MockRuntime {
    type Value = MockValue;
    type Derived = MockDerived;

    fn is_cell(&self, value: &MockValue) -> bool {
        matches!(value, MockValue::Cell(_))
    }

    fn read_cell(&self, cell: &MockValue) -> MockValue {
        let MockValue::Cell(index) = cell else {
            return cell.clone();
        };
        if self.tracking.get() {
            self.reads.borrow_mut().push(*index);
        }
        MockValue::Plain(self.slots.borrow().get(*index).copied().unwrap_or(0))
    }

    fn write_cell(&self, cell: &MockValue, update: MockValue) {
        let MockValue::Cell(index) = cell else {
            return;
        };
        let new = match update {
            MockValue::Plain(v) => v,
            MockValue::Cell(source) => self.slots.borrow().get(source).copied().unwrap_or(0),
        };
        if let Some(slot) = self.slots.borrow_mut().get_mut(*index) {
            *slot = new;
        }
    }

    fn ignore_dependencies<T>(&self, body: impl FnOnce() -> T) -> T {
        let _guard = TrackingGuard::set(&self.tracking, false);
        body()
    }

    fn derived(&self, read: Box<dyn Fn() + 'static>) -> MockDerived {
        let before = self.reads.borrow().len();
        let guard = TrackingGuard::set(&self.tracking, true);
        read();
        drop(guard);
        let dependencies = self.reads.borrow().len().saturating_sub(before);
        MockDerived {
            dependencies,
            disposals: Rc::clone(&self.disposals),
        }
    }
}
