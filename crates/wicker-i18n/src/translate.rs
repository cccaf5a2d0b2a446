#![forbid(unsafe_code)]

//! Template lookup and `{placeholder}` interpolation.
//!
//! [`translate`] is the whole pipeline: resolve a dotted path in a
//! [`Language`], then substitute placeholders from the caller's arguments.
//! Neither step can fail — a missing key degrades to the path itself and a
//! missing argument leaves its placeholder in the output, so a stale or
//! half-translated bundle produces readable text instead of an error.

use std::fmt;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::debug;

use crate::language::Language;

/// `{identifier}` where identifier is one or more word characters.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\w+)\}").expect("placeholder pattern is valid"));

/// An interpolation argument: a string or a number.
///
/// Call sites usually rely on `Into`:
///
/// ```
/// use wicker_i18n::interpolate;
///
/// let out = interpolate("{count} of {total}", &[("count", 3.into()), ("total", 10.into())]);
/// assert_eq!(out, "3 of 10");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum ArgValue {
    /// Substituted verbatim.
    Text(String),
    /// Signed integer, rendered in decimal.
    Int(i64),
    /// Unsigned integer, rendered in decimal.
    Uint(u64),
    /// Floating point, rendered with `Display` (no trailing zeros).
    Float(f64),
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Int(value) => write!(f, "{value}"),
            Self::Uint(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i32> for ArgValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<i64> for ArgValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for ArgValue {
    fn from(value: u32) -> Self {
        Self::Uint(value.into())
    }
}

impl From<u64> for ArgValue {
    fn from(value: u64) -> Self {
        Self::Uint(value)
    }
}

impl From<usize> for ArgValue {
    fn from(value: usize) -> Self {
        Self::Uint(value as u64)
    }
}

impl From<f32> for ArgValue {
    fn from(value: f32) -> Self {
        Self::Float(value.into())
    }
}

impl From<f64> for ArgValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Resolve `path` in `lang` and interpolate `args` into the template.
///
/// A path with no leaf in the bundle falls back to the path string itself;
/// the fallback runs through the same interpolation scan as a real template.
#[must_use]
pub fn translate(path: &str, args: &[(&str, ArgValue)], lang: &Language) -> String {
    let template = match lang.resolve(path) {
        Some(text) => text,
        None => {
            debug!(path, lang = lang.name(), "no translation for key, using path as text");
            path
        }
    };
    interpolate(template, args)
}

/// Substitute `{identifier}` placeholders in `template` from `args`.
///
/// Placeholders with no matching argument stay in the output verbatim.
/// Substitution is a single pass: replacement text is never re-scanned, so
/// an argument value containing `{...}` comes through literally.
#[must_use]
pub fn interpolate(template: &str, args: &[(&str, ArgValue)]) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            let name = &caps[1];
            args.iter()
                .find(|(key, _)| *key == name)
                .map_or_else(|| caps[0].to_string(), |(_, value)| value.to_string())
        })
        .into_owned()
}
