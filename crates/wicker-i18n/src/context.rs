#![forbid(unsafe_code)]

//! Bound translators and the shared locale context.
//!
//! A [`Translator`] is [`translate`](crate::translate::translate) closed
//! over a locale cell: it re-reads the cell on every call, so one translator
//! instance follows every later locale switch. A [`LocaleContext`] bundles
//! the cell, the derived language name, and such a translator — all three
//! views of one underlying cell, never copies of it.

use std::rc::Rc;

use wicker_reactive::{Computed, Signal};

use crate::language::Language;
use crate::translate::{ArgValue, translate};

/// What a translator or context binds to.
///
/// An owned [`Language`] gets its own fresh cell; an existing
/// [`Signal`] handle is shared as-is; a [`Computed`] is shared and kept
/// alive by whatever binds to it.
#[derive(Debug)]
pub enum LocaleSource {
    /// A plain value, wrapped in a new cell.
    Value(Language),
    /// A handle to an existing cell.
    Cell(Signal<Language>),
    /// A derived cell, kept alive by the binder.
    Derived(Computed<Language>),
}

impl LocaleSource {
    fn into_parts(self) -> (Signal<Language>, Option<Rc<Computed<Language>>>) {
        match self {
            Self::Value(language) => (Signal::new(language), None),
            Self::Cell(cell) => (cell, None),
            Self::Derived(derived) => {
                let handle = derived.handle();
                (handle, Some(Rc::new(derived)))
            }
        }
    }
}

impl From<Language> for LocaleSource {
    fn from(language: Language) -> Self {
        Self::Value(language)
    }
}

impl From<Signal<Language>> for LocaleSource {
    fn from(cell: Signal<Language>) -> Self {
        Self::Cell(cell)
    }
}

impl From<&Signal<Language>> for LocaleSource {
    fn from(cell: &Signal<Language>) -> Self {
        Self::Cell(cell.clone())
    }
}

impl From<Computed<Language>> for LocaleSource {
    fn from(derived: Computed<Language>) -> Self {
        Self::Derived(derived)
    }
}

/// A translator bound to a locale cell.
///
/// Late-binding: each [`Translator::translate`] call reads the cell's
/// *current* value, so a locale switch after construction is picked up
/// without rebuilding the translator. Clones share the binding.
#[derive(Clone, Debug)]
pub struct Translator {
    locale: Signal<Language>,
    _upstream: Option<Rc<Computed<Language>>>,
}

impl Translator {
    /// Bind a translator to `source`.
    #[must_use]
    pub fn new(source: impl Into<LocaleSource>) -> Self {
        let (locale, upstream) = source.into().into_parts();
        Self {
            locale,
            _upstream: upstream,
        }
    }

    /// Translate `path` against the current locale value.
    #[must_use]
    pub fn translate(&self, path: &str, args: &[(&str, ArgValue)]) -> String {
        self.locale.with(|lang| translate(path, args, lang))
    }
}

/// The read-only bundle a consumer works with: the locale cell, the derived
/// language name, and a bound translator.
///
/// All three come from one cell. Reading `lang()` and calling `t()` in the
/// same tick can never observe two different languages.
#[derive(Debug)]
pub struct LocaleContext {
    locale: Signal<Language>,
    lang: Computed<String>,
    translator: Translator,
}

impl LocaleContext {
    /// Build a context over `source`.
    #[must_use]
    pub fn new(source: impl Into<LocaleSource>) -> Self {
        let (locale, upstream) = source.into().into_parts();
        let lang = Computed::new(&locale, |language: &Language| language.name().to_string());
        let translator = Translator {
            locale: locale.clone(),
            _upstream: upstream,
        };
        Self {
            locale,
            lang,
            translator,
        }
    }

    /// The locale cell itself.
    #[must_use]
    pub fn locale(&self) -> &Signal<Language> {
        &self.locale
    }

    /// The current language name, kept in sync with the cell.
    #[must_use]
    pub fn lang(&self) -> &Computed<String> {
        &self.lang
    }

    /// The bound translator.
    #[must_use]
    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    /// Shorthand for `self.translator().translate(path, args)`.
    #[must_use]
    pub fn t(&self, path: &str, args: &[(&str, ArgValue)]) -> String {
        self.translator.translate(path, args)
    }
}
