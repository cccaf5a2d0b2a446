#![forbid(unsafe_code)]

//! The shared locale slot and the process-wide default.
//!
//! Instead of components fishing a locale out of a hidden registry, the
//! embedding application creates one [`LocaleOverride`] and passes it down
//! its tree; every [`use_locale`] call against that slot yields a context
//! that tracks it. Whenever the slot is empty, the effective language is the
//! process-wide default — configurable once at startup via
//! [`set_default_language`], with [`reset_default_language`] as the
//! test-isolation hook, and the bundled `zh-cn` as the built-in fallback.
//!
//! Code running outside any tree (toasts, confirm dialogs spawned from plain
//! functions) uses [`outside_locale_context`], which is [`use_locale`] over
//! a thread-local slot preloaded with the default.

use std::sync::{PoisonError, RwLock};

use wicker_reactive::{Computed, Signal};

use crate::bundles;
use crate::context::LocaleContext;
use crate::language::Language;

static DEFAULT_LANGUAGE: RwLock<Option<Language>> = RwLock::new(None);

/// The process-wide default language: the last value passed to
/// [`set_default_language`], or the bundled `zh-cn`.
#[must_use]
pub fn default_language() -> Language {
    DEFAULT_LANGUAGE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
        .unwrap_or_else(bundles::zh_cn)
}

/// Configure the process-wide default language. Expected to be called at
/// most once, early; contexts built later pick it up on their next
/// recomputation.
pub fn set_default_language(language: Language) {
    *DEFAULT_LANGUAGE
        .write()
        .unwrap_or_else(PoisonError::into_inner) = Some(language);
}

/// Drop any configured default, restoring the bundled `zh-cn`.
pub fn reset_default_language() {
    *DEFAULT_LANGUAGE
        .write()
        .unwrap_or_else(PoisonError::into_inner) = None;
}

/// The locale slot an application shares with its component tree.
///
/// The slot holds `Option<Language>`: `None` means "nothing chosen here,
/// fall through to the process default". Clones share one slot, so a parent
/// can keep a handle for writing while descendants build contexts from
/// theirs.
#[derive(Clone, Debug)]
pub struct LocaleOverride {
    slot: Signal<Option<Language>>,
}

impl LocaleOverride {
    /// An empty slot (contexts over it resolve to the default).
    #[must_use]
    pub fn new() -> Self {
        Self {
            slot: Signal::new(None),
        }
    }

    /// A slot preloaded with `language`.
    #[must_use]
    pub fn with(language: Language) -> Self {
        Self {
            slot: Signal::new(Some(language)),
        }
    }

    /// Put `language` into the slot. Every context built over this slot
    /// switches with it.
    pub fn set(&self, language: Language) {
        self.slot.set(Some(language));
    }

    /// Empty the slot; contexts fall back to the process default.
    pub fn clear(&self) {
        self.slot.set(None);
    }

    /// The slot's current value, if any.
    #[must_use]
    pub fn get(&self) -> Option<Language> {
        self.slot.get()
    }

    pub(crate) fn slot(&self) -> &Signal<Option<Language>> {
        &self.slot
    }
}

impl Default for LocaleOverride {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a [`LocaleContext`] over the given slot, or over a fresh empty one.
///
/// The context's effective language is the slot value when present, else the
/// process-wide default, tracked reactively: setting or clearing the slot
/// moves the context's `lang` and translator with it.
#[must_use]
pub fn use_locale(overrides: Option<&LocaleOverride>) -> LocaleContext {
    let slot = overrides.cloned().unwrap_or_default();
    let effective = Computed::new(slot.slot(), |value: &Option<Language>| {
        value.clone().unwrap_or_else(default_language)
    });
    LocaleContext::new(effective)
}

thread_local! {
    static OUTSIDE_LOCALE: LocaleOverride = LocaleOverride::with(default_language());
}

/// The thread's outside-of-tree locale slot, preloaded with the process
/// default on first use. Writing to the returned handle retargets every
/// context obtained from [`outside_locale_context`] on this thread.
#[must_use]
pub fn outside_locale() -> LocaleOverride {
    OUTSIDE_LOCALE.with(Clone::clone)
}

/// A [`LocaleContext`] for code with no slot threaded to it.
#[must_use]
pub fn outside_locale_context() -> LocaleContext {
    OUTSIDE_LOCALE.with(|slot| use_locale(Some(slot)))
}
