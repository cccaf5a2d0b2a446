#![forbid(unsafe_code)]

//! Write coalescing for [`Signal`](crate::Signal) notifications.
//!
//! Switching application state often touches several cells in a row. Without
//! batching, every write notifies immediately and downstream consumers
//! recompute once per write. Opening a [`BatchScope`] defers delivery: values
//! still update immediately, but each distinct subscriber fires at most once,
//! with the final value, when the outermost scope exits.
//!
//! ```ignore
//! let lang = Signal::new(english());
//! {
//!     let _batch = BatchScope::new();
//!     lang.set(french());
//!     lang.set(german());
//! } // subscribers fire once here, seeing german()
//! ```
//!
//! # Invariants
//!
//! 1. Nested scopes are allowed; only the outermost exit flushes.
//! 2. Reads inside a batch always return the latest written value.
//! 3. A subscriber never observes an intermediate value from a batch.
//! 4. Flush preserves the order in which subscribers were first deferred.
//!
//! A callback that panics during flush does not starve the rest: remaining
//! callbacks still run, and the first panic is re-raised afterwards.

use std::cell::RefCell;
use tracing::debug;

type Deferred = Box<dyn FnOnce()>;

struct Slot {
    key: usize,
    run: Deferred,
}

struct BatchState {
    depth: u32,
    slots: Vec<Slot>,
}

thread_local! {
    static BATCH: RefCell<Option<BatchState>> = const { RefCell::new(None) };
}

/// True while a [`BatchScope`] is alive on this thread.
pub fn is_batching() -> bool {
    BATCH.with(|state| state.borrow().is_some())
}

/// Queue `f` to run when the current batch exits, replacing any entry with
/// the same `key` (the slot keeps its original queue position). Runs `f`
/// immediately when no batch is active.
pub(crate) fn defer_keyed(key: usize, f: impl FnOnce() + 'static) {
    BATCH.with(|state| {
        let mut guard = state.borrow_mut();
        match *guard {
            Some(ref mut batch) => {
                if let Some(slot) = batch.slots.iter_mut().find(|slot| slot.key == key) {
                    slot.run = Box::new(f);
                } else {
                    batch.slots.push(Slot {
                        key,
                        run: Box::new(f),
                    });
                }
            }
            None => {
                drop(guard); // f may write signals, which re-enters this module
                f();
            }
        }
    });
}

fn take_slots() -> Vec<Deferred> {
    BATCH.with(|state| {
        let mut guard = state.borrow_mut();
        match *guard {
            Some(ref mut batch) => std::mem::take(&mut batch.slots)
                .into_iter()
                .map(|slot| slot.run)
                .collect(),
            None => Vec::new(),
        }
    })
}

fn flush() {
    // Callbacks may write further signals (derived values recomputing), and
    // those writes defer again while the batch state is still present. Drain
    // wave by wave until the queue stays empty, so a chain of derivations
    // settles before the scope is gone. A cyclic derivation would spin here;
    // mappings must be pure and acyclic.
    let mut first_panic: Option<Box<dyn std::any::Any + Send>> = None;
    loop {
        let slots = take_slots();
        if slots.is_empty() {
            break;
        }
        debug!(notifications = slots.len(), "batch wave flushed");
        for run in slots {
            if let Err(payload) = std::panic::catch_unwind(std::panic::AssertUnwindSafe(run))
                && first_panic.is_none()
            {
                first_panic = Some(payload);
            }
        }
    }
    if let Some(payload) = first_panic {
        std::panic::resume_unwind(payload);
    }
}

/// RAII guard that defers signal notifications until it drops.
///
/// Nesting is fine; deferred work runs when the outermost guard drops.
pub struct BatchScope {
    is_root: bool,
}

impl BatchScope {
    /// Open a batch scope, or deepen the current one.
    #[must_use]
    pub fn new() -> Self {
        let is_root = BATCH.with(|state| {
            let mut guard = state.borrow_mut();
            match *guard {
                Some(ref mut batch) => {
                    batch.depth += 1;
                    false
                }
                None => {
                    *guard = Some(BatchState {
                        depth: 1,
                        slots: Vec::new(),
                    });
                    true
                }
            }
        });
        Self { is_root }
    }

    /// Notifications currently waiting on this thread's batch.
    #[must_use]
    pub fn pending(&self) -> usize {
        BATCH.with(|state| state.borrow().as_ref().map_or(0, |b| b.slots.len()))
    }
}

impl Default for BatchScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for BatchScope {
    fn drop(&mut self) {
        let at_root = BATCH.with(|state| {
            let mut guard = state.borrow_mut();
            match *guard {
                Some(ref mut batch) => {
                    batch.depth -= 1;
                    batch.depth == 0
                }
                None => false,
            }
        });
        if at_root {
            flush();
            BATCH.with(|state| {
                *state.borrow_mut() = None;
            });
        }
    }
}

impl std::fmt::Debug for BatchScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatchScope")
            .field("is_root", &self.is_root)
            .field("pending", &self.pending())
            .finish()
    }
}
