#![forbid(unsafe_code)]

//! Single-threaded reactive value cells for Wicker.
//!
//! # Role in Wicker
//! `wicker-reactive` is the change-propagation layer the rest of the kit
//! builds on. A [`Signal`] holds a shared value, a [`Computed`] derives a
//! value from a signal and tracks it, and a [`BatchScope`] coalesces bursts
//! of writes into a single notification per subscriber.
//!
//! # How it fits in the system
//! `wicker-i18n` stores the active language in a `Signal` so that a bound
//! translator and the derived language name always read the same, current
//! value. Nothing here is async or thread-safe: cells are `Rc`-based and all
//! propagation is synchronous on the owning thread.

/// Write coalescing across multiple cells.
pub mod batch;
/// Derived reactive values.
pub mod computed;
/// The value cell itself and its subscription guard.
pub mod signal;

pub use batch::{BatchScope, is_batching};
pub use computed::Computed;
pub use signal::{Signal, Subscription};
