// SPDX-License-Identifier: MPL-2.0
//! Displayable references and the registry of session-scoped local ones.
//!
//! A [`DisplayRef`] is an opaque, non-empty string the rendering layer can
//! resolve into an image: either a remote URL (placeholders) or a `blob:`
//! reference derived from a file the user picked. Local references only mean
//! something inside the [`LocalRefRegistry`] that produced them, which lives
//! for the duration of the session.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Scheme prefix of locally derived references.
pub const LOCAL_SCHEME: &str = "blob:";

/// Opaque, non-empty reference to a displayable image.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisplayRef(String);

impl DisplayRef {
    /// Wraps `raw`, returning `None` for empty or whitespace-only strings.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    /// Wraps a string the caller has already built as non-empty.
    pub(crate) fn from_non_empty(raw: String) -> Self {
        debug_assert!(!raw.trim().is_empty());
        Self(raw)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for references derived from a local file.
    #[must_use]
    pub fn is_local(&self) -> bool {
        self.0.starts_with(LOCAL_SCHEME)
    }

    /// Returns `true` for `http(s)` references.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        self.0.starts_with("http://") || self.0.starts_with("https://")
    }
}

impl fmt::Display for DisplayRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derives `blob:` references for local files and resolves them back.
///
/// References are never reused within a session, even after release, so a
/// file picked twice yields two distinct references.
#[derive(Debug, Default)]
pub struct LocalRefRegistry {
    next_serial: u64,
    entries: HashMap<DisplayRef, PathBuf>,
}

impl LocalRefRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `path` and returns a fresh reference to it.
    pub fn derive(&mut self, path: &Path) -> DisplayRef {
        self.next_serial += 1;
        let reference = DisplayRef::from_non_empty(format!(
            "{LOCAL_SCHEME}local-ref-{}",
            self.next_serial
        ));
        self.entries.insert(reference.clone(), path.to_path_buf());
        reference
    }

    /// Returns the file behind a local reference, if still registered.
    #[must_use]
    pub fn resolve(&self, reference: &DisplayRef) -> Option<&Path> {
        self.entries.get(reference).map(PathBuf::as_path)
    }

    /// Drops a reference. Returns `true` if it was registered.
    pub fn release(&mut self, reference: &DisplayRef) -> bool {
        self.entries.remove(reference).is_some()
    }

    /// Number of live references.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_references_are_rejected() {
        assert!(DisplayRef::new("").is_none());
        assert!(DisplayRef::new("  \t").is_none());
        assert!(DisplayRef::new("blob:x").is_some());
    }

    #[test]
    fn reference_kinds_are_detected() {
        let local = DisplayRef::new("blob:local-ref-1").unwrap();
        let remote = DisplayRef::new("https://example.org/a.jpg").unwrap();
        assert!(local.is_local() && !local.is_remote());
        assert!(remote.is_remote() && !remote.is_local());
    }

    #[test]
    fn derive_returns_unique_local_references() {
        let mut registry = LocalRefRegistry::new();
        let path = Path::new("/photos/cat.png");

        let first = registry.derive(path);
        let second = registry.derive(path);

        assert_ne!(first, second);
        assert!(first.is_local());
        assert_eq!(registry.resolve(&first), Some(path));
        assert_eq!(registry.resolve(&second), Some(path));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn release_forgets_reference_without_reusing_serials() {
        let mut registry = LocalRefRegistry::new();
        let first = registry.derive(Path::new("/a.png"));

        assert!(registry.release(&first));
        assert!(!registry.release(&first));
        assert!(registry.resolve(&first).is_none());
        assert!(registry.is_empty());

        let next = registry.derive(Path::new("/a.png"));
        assert_ne!(first, next);
    }
}
