// SPDX-License-Identifier: MPL-2.0
//! Deterministic default references used to seed slots.

use super::{DisplayRef, SlotId};

/// Template used when none is configured. `{id}` is replaced by the slot id.
pub const DEFAULT_PLACEHOLDER_TEMPLATE: &str = "https://picsum.photos/seed/gallery-{id}/600/600";

const ID_TOKEN: &str = "{id}";

/// Produces the placeholder reference of each slot from a URL template.
///
/// The reference is opaque to the store; it is never fetched or validated
/// here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderSource {
    template: String,
}

impl Default for PlaceholderSource {
    fn default() -> Self {
        Self {
            template: DEFAULT_PLACEHOLDER_TEMPLATE.to_string(),
        }
    }
}

impl PlaceholderSource {
    /// Builds a source from a template. Blank templates fall back to the
    /// default one.
    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        let template = template.into();
        if template.trim().is_empty() {
            Self::default()
        } else {
            Self { template }
        }
    }

    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Returns the reference for `id`.
    ///
    /// Templates without an `{id}` token get the id appended as a query
    /// parameter so every slot still receives its own reference.
    #[must_use]
    pub fn reference_for(&self, id: SlotId) -> DisplayRef {
        let raw = if self.template.contains(ID_TOKEN) {
            self.template.replace(ID_TOKEN, &id.to_string())
        } else {
            let separator = if self.template.contains('?') { '&' } else { '?' };
            format!("{}{separator}slot={id}", self.template)
        };
        DisplayRef::from_non_empty(raw)
    }
}
