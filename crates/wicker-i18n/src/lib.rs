#![forbid(unsafe_code)]

//! Localization for the Wicker component kit.
//!
//! Externalized strings live in [`Language`] bundles — nested tables of
//! templates addressed by dotted keys — and reach components through a
//! [`LocaleContext`] that follows the active locale reactively.
//!
//! # Role in Wicker
//! `wicker-i18n` keeps every user-facing string out of component code.
//! Components ask a bound [`Translator`] for text; applications decide which
//! bundle is active, once, in one place.
//!
//! # How it fits in the system
//! The active language sits in a `wicker-reactive` cell. A context built
//! with [`use_locale`] derives its language name and translator from that
//! one cell, so switching locale at runtime moves every consumer together.
//! Nothing in the lookup path errors: missing keys come back as the key
//! text and unmatched `{placeholders}` stay put.
//!
//! ```
//! use wicker_i18n::{Language, TextTable, LocaleOverride, use_locale};
//!
//! let en = Language::new(
//!     "en",
//!     TextTable::new().with_table(
//!         "el",
//!         TextTable::new().with_text("greet", "Hello, {name}!"),
//!     ),
//! );
//!
//! let shared = LocaleOverride::with(en);
//! let ctx = use_locale(Some(&shared));
//! assert_eq!(ctx.t("el.greet", &[("name", "Ada".into())]), "Hello, Ada!");
//! ```

/// The shared locale slot and process-wide default.
pub mod ambient;
/// Bundles shipped with the kit (`zh-cn`, `en`).
pub mod bundles;
/// Bound translators and the locale context.
pub mod context;
/// Key coverage reporting across bundles.
pub mod coverage;
/// Language bundles and dotted-path lookup.
pub mod language;
/// Template lookup and placeholder interpolation.
pub mod translate;

pub use ambient::{
    LocaleOverride, default_language, outside_locale, outside_locale_context,
    reset_default_language, set_default_language, use_locale,
};
pub use context::{LocaleContext, LocaleSource, Translator};
pub use coverage::{CoverageReport, LocaleCoverage, coverage_report};
#[cfg(feature = "serde")]
pub use language::BundleError;
pub use language::{Language, TextNode, TextTable};
pub use translate::{ArgValue, interpolate, translate};
