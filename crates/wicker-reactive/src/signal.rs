#![forbid(unsafe_code)]

//! Shared value cell with change notification.
//!
//! [`Signal<T>`] keeps one value behind `Rc<RefCell<..>>`. Handles are cheap
//! to clone and all see the same state. Writes compare against the current
//! value with `PartialEq`: writing an equal value does nothing, writing a
//! different one bumps the version and notifies subscribers in registration
//! order.
//!
//! Subscribers are stored as weak references. Dropping the [`Subscription`]
//! guard returned by [`Signal::subscribe`] unsubscribes; dead entries are
//! pruned the next time the signal notifies.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::debug;

use crate::batch;

type CallbackRc<T> = Rc<dyn Fn(&T)>;
type CallbackWeak<T> = Weak<dyn Fn(&T)>;

struct SignalInner<T> {
    value: T,
    version: u64,
    subscribers: Vec<CallbackWeak<T>>,
}

/// A shared, version-tracked value cell.
///
/// Cloning a `Signal` creates another handle to the **same** cell; both
/// handles read and write the same value and share subscribers.
///
/// # Invariants
///
/// 1. `version` increments by exactly 1 per value-changing write.
/// 2. Writing a value equal to the current one is a no-op.
/// 3. Subscribers fire in registration order.
/// 4. Inside a [`batch::BatchScope`], the value updates immediately but each
///    subscriber fires at most once, on scope exit, with the final value.
pub struct Signal<T> {
    inner: Rc<RefCell<SignalInner<T>>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Signal")
            .field("value", &inner.value)
            .field("version", &inner.version)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

impl<T: Clone + PartialEq + 'static> Signal<T> {
    /// Create a cell holding `value`, at version 0, with no subscribers.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(SignalInner {
                value,
                version: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Clone out the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Read the current value by reference, without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Replace the value. Notifies subscribers only if the new value
    /// differs from the current one.
    pub fn set(&self, value: T) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.value == value {
                return;
            }
            inner.value = value;
            inner.version += 1;
        }
        self.notify();
    }

    /// Mutate the value in place. Subscribers are notified only if the
    /// closure actually changed it.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let changed = {
            let mut inner = self.inner.borrow_mut();
            let before = inner.value.clone();
            f(&mut inner.value);
            if inner.value == before {
                false
            } else {
                inner.version += 1;
                true
            }
        };
        if changed {
            self.notify();
        }
    }

    /// Register a change callback. The callback receives each new value.
    ///
    /// Returns a [`Subscription`] guard; dropping it unsubscribes.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let strong: CallbackRc<T> = Rc::new(callback);
        let weak = Rc::downgrade(&strong);
        self.inner.borrow_mut().subscribers.push(weak);
        Subscription {
            _callback: Box::new(strong),
        }
    }

    /// Version counter: bumps by 1 on each value-changing write. Handy for
    /// cheap dirty-checking.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Number of registered subscribers, counting dead ones not yet pruned.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    fn notify(&self) {
        // Collect live callbacks before calling anything, so subscriber code
        // never runs under the borrow.
        let callbacks: Vec<CallbackRc<T>> = {
            let mut inner = self.inner.borrow_mut();
            inner.subscribers.retain(|weak| weak.strong_count() > 0);
            inner.subscribers.iter().filter_map(Weak::upgrade).collect()
        };
        if callbacks.is_empty() {
            return;
        }

        debug!(
            subscribers = callbacks.len(),
            version = self.version(),
            "signal change published"
        );

        if batch::is_batching() {
            // One deferred slot per callback identity: repeated writes within
            // the batch collapse onto the latest value.
            for callback in callbacks {
                let key = Rc::as_ptr(&callback) as *const () as usize;
                let source = self.clone();
                batch::defer_keyed(key, move || {
                    let latest = source.get();
                    callback(&latest);
                });
            }
            return;
        }

        let value = self.inner.borrow().value.clone();
        for callback in &callbacks {
            callback(&value);
        }
    }
}

/// RAII guard for a subscriber callback.
///
/// The guard owns the only strong reference to the callback; once dropped,
/// the weak entry in the signal's subscriber list can no longer upgrade and
/// the callback never fires again.
pub struct Subscription {
    _callback: Box<dyn std::any::Any>,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn get_set_roundtrip() {
        let cell = Signal::new(7);
        assert_eq!(cell.get(), 7);
        assert_eq!(cell.version(), 0);

        cell.set(8);
        assert_eq!(cell.get(), 8);
        assert_eq!(cell.version(), 1);
    }

    #[test]
    fn equal_set_is_noop() {
        let cell = Signal::new("a".to_string());
        cell.set("a".to_string());
        assert_eq!(cell.version(), 0);
    }

    #[test]
    fn with_borrows_without_clone() {
        let cell = Signal::new(vec![1, 2, 3]);
        assert_eq!(cell.with(|v| v.len()), 3);
    }

    #[test]
    fn update_in_place() {
        let cell = Signal::new(vec![1]);
        cell.update(|v| v.push(2));
        assert_eq!(cell.get(), vec![1, 2]);
        assert_eq!(cell.version(), 1);

        cell.update(|_| {});
        assert_eq!(cell.version(), 1);
    }

    #[test]
    fn subscriber_sees_each_new_value() {
        let cell = Signal::new(0);
        let seen = Rc::new(Cell::new(0));
        let seen_by_cb = Rc::clone(&seen);
        let _sub = cell.subscribe(move |v| seen_by_cb.set(*v));

        cell.set(5);
        assert_eq!(seen.get(), 5);
        cell.set(9);
        assert_eq!(seen.get(), 9);
    }

    #[test]
    fn equal_set_does_not_notify() {
        let cell = Signal::new(1);
        let hits = Rc::new(Cell::new(0u32));
        let hits_by_cb = Rc::clone(&hits);
        let _sub = cell.subscribe(move |_| hits_by_cb.set(hits_by_cb.get() + 1));

        cell.set(1);
        assert_eq!(hits.get(), 0);
        cell.set(2);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let cell = Signal::new(0);
        let hits = Rc::new(Cell::new(0u32));
        let hits_by_cb = Rc::clone(&hits);
        let sub = cell.subscribe(move |_| hits_by_cb.set(hits_by_cb.get() + 1));

        cell.set(1);
        assert_eq!(hits.get(), 1);

        drop(sub);
        cell.set(2);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn notification_order_is_registration_order() {
        let cell = Signal::new(0);
        let order = Rc::new(RefCell::new(Vec::new()));

        let o = Rc::clone(&order);
        let _a = cell.subscribe(move |_| o.borrow_mut().push('a'));
        let o = Rc::clone(&order);
        let _b = cell.subscribe(move |_| o.borrow_mut().push('b'));
        let o = Rc::clone(&order);
        let _c = cell.subscribe(move |_| o.borrow_mut().push('c'));

        cell.set(1);
        assert_eq!(*order.borrow(), vec!['a', 'b', 'c']);
    }

    #[test]
    fn clones_share_value_and_subscribers() {
        let a = Signal::new(0);
        let b = a.clone();
        let hits = Rc::new(Cell::new(0u32));
        let hits_by_cb = Rc::clone(&hits);
        let _sub = a.subscribe(move |_| hits_by_cb.set(hits_by_cb.get() + 1));

        b.set(3);
        assert_eq!(a.get(), 3);
        assert_eq!(a.version(), 1);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn dead_subscribers_pruned_on_notify() {
        let cell = Signal::new(0);
        let _keep = cell.subscribe(|_| {});
        let drop_me = cell.subscribe(|_| {});
        assert_eq!(cell.subscriber_count(), 2);

        drop(drop_me);
        // Not pruned until the next notification.
        assert_eq!(cell.subscriber_count(), 2);

        cell.set(1);
        assert_eq!(cell.subscriber_count(), 1);
    }

    #[test]
    fn version_is_monotonic() {
        let cell = Signal::new(0);
        for i in 1..=50 {
            cell.set(i);
        }
        assert_eq!(cell.version(), 50);
    }

    #[test]
    fn debug_output_names_the_cell() {
        let cell = Signal::new(42);
        let text = format!("{cell:?}");
        assert!(text.contains("Signal"));
        assert!(text.contains("42"));
    }
}
