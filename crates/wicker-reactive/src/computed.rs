#![forbid(unsafe_code)]

//! Derived reactive values.
//!
//! A [`Computed<T>`] applies a pure mapping to a source [`Signal`] and keeps
//! the result current: whenever the source publishes a change, the mapping
//! runs again and the derived cell updates (which in turn notifies the
//! derived cell's own subscribers, unless the mapped value is unchanged).
//!
//! The `Computed` owns the subscription that ties it to its source. Drop it
//! and the derived value simply stops tracking.

use crate::signal::{Signal, Subscription};

/// A value derived from a [`Signal`], recomputed on every source change.
pub struct Computed<T> {
    cell: Signal<T>,
    _source: Subscription,
}

impl<T: Clone + PartialEq + 'static> Computed<T> {
    /// Derive a value from `source` through `map`.
    ///
    /// `map` runs once immediately for the initial value, then once per
    /// source change.
    #[must_use]
    pub fn new<S, F>(source: &Signal<S>, map: F) -> Self
    where
        S: Clone + PartialEq + 'static,
        F: Fn(&S) -> T + 'static,
    {
        let cell = Signal::new(source.with(&map));
        let derived = cell.clone();
        let guard = source.subscribe(move |value| derived.set(map(value)));
        Self {
            cell,
            _source: guard,
        }
    }

    /// Clone out the current derived value.
    #[must_use]
    pub fn get(&self) -> T {
        self.cell.get()
    }

    /// Read the current derived value by reference.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.cell.with(f)
    }

    /// Version of the derived cell. Bumps when recomputation produces a
    /// different value.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.cell.version()
    }

    /// Subscribe to changes of the derived value.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        self.cell.subscribe(callback)
    }

    /// A [`Signal`] handle sharing the derived state.
    ///
    /// The handle stays readable on its own, but recomputation stops once
    /// this `Computed` is dropped.
    #[must_use]
    pub fn handle(&self) -> Signal<T> {
        self.cell.clone()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Computed<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Computed").field("cell", &self.cell).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn initial_value_is_mapped() {
        let source = Signal::new(4);
        let doubled = Computed::new(&source, |n| n * 2);
        assert_eq!(doubled.get(), 8);
    }

    #[test]
    fn tracks_source_changes() {
        let source = Signal::new("en".to_string());
        let upper = Computed::new(&source, |s: &String| s.to_uppercase());

        source.set("fr".to_string());
        assert_eq!(upper.get(), "FR");
        assert_eq!(upper.version(), 1);
    }

    #[test]
    fn unchanged_mapping_does_not_bump_version() {
        let source = Signal::new(1);
        let parity = Computed::new(&source, |n| n % 2);

        source.set(3); // parity still 1
        assert_eq!(parity.version(), 0);
        source.set(4);
        assert_eq!(parity.version(), 1);
    }

    #[test]
    fn derived_subscribers_fire() {
        let source = Signal::new(0);
        let plus_one = Computed::new(&source, |n| n + 1);
        let seen = Rc::new(Cell::new(0));
        let seen_by_cb = Rc::clone(&seen);
        let _sub = plus_one.subscribe(move |v| seen_by_cb.set(*v));

        source.set(41);
        assert_eq!(seen.get(), 42);
    }

    #[test]
    fn handle_shares_state_while_computed_lives() {
        let source = Signal::new(1);
        let squared = Computed::new(&source, |n| n * n);
        let handle = squared.handle();

        source.set(5);
        assert_eq!(handle.get(), 25);
    }

    #[test]
    fn dropping_computed_stops_tracking() {
        let source = Signal::new(1);
        let squared = Computed::new(&source, |n| n * n);
        let handle = squared.handle();
        drop(squared);

        source.set(9);
        assert_eq!(handle.get(), 1, "stale by design after drop");
    }

    #[test]
    fn chained_derivation() {
        let source = Signal::new(2);
        let doubled = Computed::new(&source, |n| n * 2);
        let description = Computed::new(&doubled.handle(), |n: &i32| format!("value {n}"));

        source.set(10);
        assert_eq!(description.get(), "value 20");
    }
}
