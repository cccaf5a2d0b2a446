#![forbid(unsafe_code)]

//! Language bundles: named trees of translation text.
//!
//! A [`Language`] is a name (`"zh-cn"`, `"en"`, ...) plus a [`TextTable`],
//! a nested string-keyed mapping whose leaves are template strings. Leaves
//! may carry `{identifier}` placeholders filled in at translation time.
//!
//! Lookup is by dotted path: `"pagination.next"` descends into the
//! `pagination` table and reads its `next` leaf. Lookup never fails loudly —
//! [`Language::resolve`] returns `None` for anything that is not a leaf at
//! exactly that path, and callers fall back to the path text itself.

use std::collections::BTreeMap;

/// One node of a translation tree: a leaf template or a nested table.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum TextNode {
    /// A template string, possibly containing `{identifier}` placeholders.
    Text(String),
    /// A nested table of further keys.
    Table(TextTable),
}

/// A nested mapping from keys to [`TextNode`]s.
///
/// Keys are plain identifiers; the dot is reserved as the path separator.
/// Iteration order is the key order (`BTreeMap`), which keeps derived
/// listings such as [`TextTable::leaf_paths`] deterministic.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct TextTable {
    entries: BTreeMap<String, TextNode>,
}

impl TextTable {
    /// An empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a leaf template under `key`.
    pub fn insert_text(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), TextNode::Text(text.into()));
    }

    /// Insert a nested table under `key`.
    pub fn insert_table(&mut self, key: impl Into<String>, table: TextTable) {
        self.entries.insert(key.into(), TextNode::Table(table));
    }

    /// Chainable [`TextTable::insert_text`].
    #[must_use]
    pub fn with_text(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert_text(key, text);
        self
    }

    /// Chainable [`TextTable::insert_table`].
    #[must_use]
    pub fn with_table(mut self, key: impl Into<String>, table: TextTable) -> Self {
        self.insert_table(key, table);
        self
    }

    /// Node stored directly under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&TextNode> {
        self.entries.get(key)
    }

    /// Number of direct entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dotted paths of every leaf in the tree, in deterministic key order.
    #[must_use]
    pub fn leaf_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        self.collect_leaf_paths("", &mut paths);
        paths
    }

    fn collect_leaf_paths(&self, prefix: &str, out: &mut Vec<String>) {
        for (key, node) in &self.entries {
            let path = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{prefix}.{key}")
            };
            match node {
                TextNode::Text(_) => out.push(path),
                TextNode::Table(table) => table.collect_leaf_paths(&path, out),
            }
        }
    }
}

/// A named bundle of translation text.
///
/// Language values are plain immutable data: applications build them once
/// (statically or from JSON with the `serde` feature) and move them into a
/// reactive cell to share them.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Language {
    name: String,
    #[cfg_attr(feature = "serde", serde(flatten))]
    root: TextTable,
}

impl Language {
    /// Bundle `root` under the language name `name`.
    #[must_use]
    pub fn new(name: impl Into<String>, root: TextTable) -> Self {
        Self {
            name: name.into(),
            root,
        }
    }

    /// The language name, e.g. `"zh-cn"`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The translation tree.
    #[must_use]
    pub fn root(&self) -> &TextTable {
        &self.root
    }

    /// Look up the leaf template at a dotted `path`.
    ///
    /// Returns `None` when any segment is missing, when the path runs
    /// through a leaf, or when it stops on a table. A table is never
    /// stringified implicitly; a non-leaf path is simply a miss.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<&str> {
        let mut table = &self.root;
        let mut segments = path.split('.').peekable();
        while let Some(segment) = segments.next() {
            match table.get(segment)? {
                TextNode::Text(text) => {
                    return if segments.peek().is_none() {
                        Some(text.as_str())
                    } else {
                        None
                    };
                }
                TextNode::Table(next) => {
                    segments.peek()?;
                    table = next;
                }
            }
        }
        None
    }
}

/// Failure to read a [`Language`] bundle from JSON.
#[cfg(feature = "serde")]
#[derive(Debug, thiserror::Error)]
pub enum BundleError {
    /// The input was not the documented bundle shape.
    #[error("malformed language bundle: {0}")]
    Parse(#[from] serde_json::Error),
    /// The bundle parsed but carries no usable language name.
    #[error("language bundle has an empty name")]
    EmptyName,
}

#[cfg(feature = "serde")]
impl Language {
    /// Parse a bundle from its JSON form: an object with a `name` string
    /// whose remaining members are nested string-or-object values.
    pub fn from_json(source: &str) -> Result<Self, BundleError> {
        let language: Language = serde_json::from_str(source)?;
        if language.name.trim().is_empty() {
            return Err(BundleError::EmptyName);
        }
        Ok(language)
    }
}
