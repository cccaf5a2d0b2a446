//! Property-based invariant tests for the reactive layer.
//!
//! Verifies structural guarantees of signals, derived values, and batching:
//!
//! 1. `get()` always returns the last written value
//! 2. `version()` counts exactly the value-changing writes
//! 3. A subscriber fires once per value-changing write outside a batch
//! 4. Inside a batch a subscriber fires at most once and sees the final value
//! 5. A `Computed` always agrees with the mapping applied to the source

use proptest::prelude::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wicker_reactive::{BatchScope, Computed, Signal};

// ═════════════════════════════════════════════════════════════════════════
// 1–2. Last-write-wins and version counting
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn get_returns_last_write_and_version_counts_changes(
        writes in proptest::collection::vec(0i64..8, 1..40)
    ) {
        let cell = Signal::new(-1i64);
        let mut previous = -1i64;
        let mut changes = 0u64;
        for &w in &writes {
            cell.set(w);
            if w != previous {
                changes += 1;
                previous = w;
            }
        }
        prop_assert_eq!(cell.get(), previous);
        prop_assert_eq!(cell.version(), changes);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Subscriber firing count outside a batch
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn subscriber_fires_once_per_change(
        writes in proptest::collection::vec(0i64..8, 1..40)
    ) {
        let cell = Signal::new(-1i64);
        let hits = Rc::new(Cell::new(0u64));
        let hits_by_cb = Rc::clone(&hits);
        let _sub = cell.subscribe(move |_| hits_by_cb.set(hits_by_cb.get() + 1));

        for &w in &writes {
            cell.set(w);
        }
        prop_assert_eq!(hits.get(), cell.version());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Batched writes coalesce to one firing with the final value
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn batched_writes_coalesce(
        writes in proptest::collection::vec(0i64..8, 1..40)
    ) {
        let cell = Signal::new(-1i64);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_by_cb = Rc::clone(&seen);
        let _sub = cell.subscribe(move |v: &i64| seen_by_cb.borrow_mut().push(*v));

        let mut previous = -1i64;
        let mut any_change = false;
        {
            let _batch = BatchScope::new();
            for &w in &writes {
                cell.set(w);
                if w != previous {
                    any_change = true;
                    previous = w;
                }
            }
            prop_assert!(seen.borrow().is_empty(), "no delivery inside the batch");
        }

        let deliveries = seen.borrow();
        if any_change {
            prop_assert_eq!(deliveries.len(), 1, "exactly one coalesced firing");
            prop_assert_eq!(deliveries[0], previous, "subscriber sees final value");
        } else {
            prop_assert!(deliveries.is_empty());
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Computed agrees with map(source)
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn computed_matches_mapping(
        writes in proptest::collection::vec(0i64..100, 0..30)
    ) {
        let source = Signal::new(0i64);
        let tripled = Computed::new(&source, |n| n * 3);
        for &w in &writes {
            source.set(w);
            prop_assert_eq!(tripled.get(), source.get() * 3);
        }
    }
}
