// SPDX-License-Identifier: MPL-2.0
//! Maps displayable references to renderable image handles.
//!
//! Local `blob:` references resolve to the picked file on disk. Remote
//! references resolve once their bytes have been downloaded; until then, or
//! after a failed download, the slot shows its neutral placeholder.

use crate::error::Error;
use crate::gallery::{DisplayRef, ImageSlot};
use iced::widget::image::Handle;
use std::collections::HashMap;
use std::path::Path;

/// Download/decode state of one reference.
#[derive(Debug, Clone)]
enum Entry {
    Pending,
    Ready(Handle),
    Failed,
}

/// Cache of image handles keyed by reference.
#[derive(Debug, Default)]
pub struct ImageResolver {
    entries: HashMap<DisplayRef, Entry>,
}

impl ImageResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the file behind a freshly derived local reference.
    pub fn insert_local(&mut self, reference: DisplayRef, path: &Path) {
        self.entries
            .insert(reference, Entry::Ready(Handle::from_path(path)));
    }

    /// Drops whatever is cached for `reference`.
    pub fn forget(&mut self, reference: &DisplayRef) {
        self.entries.remove(reference);
    }

    /// Returns the handle to draw for `reference`, if one is ready.
    #[must_use]
    pub fn handle(&self, reference: &DisplayRef) -> Option<&Handle> {
        match self.entries.get(reference) {
            Some(Entry::Ready(handle)) => Some(handle),
            Some(Entry::Pending | Entry::Failed) | None => None,
        }
    }

    /// Returns whether a download for `reference` is in flight.
    #[must_use]
    pub fn is_pending(&self, reference: &DisplayRef) -> bool {
        matches!(self.entries.get(reference), Some(Entry::Pending))
    }

    /// Marks every remote reference shown by `slots` that is not yet known
    /// as pending and returns them, so each is fetched at most once.
    pub fn claim_remote_fetches<'a>(
        &mut self,
        slots: impl IntoIterator<Item = &'a ImageSlot>,
    ) -> Vec<DisplayRef> {
        let mut claimed = Vec::new();
        for reference in slots.into_iter().filter_map(|slot| slot.image().reference()) {
            if reference.is_remote() && !self.entries.contains_key(reference) {
                self.entries.insert(reference.clone(), Entry::Pending);
                claimed.push(reference.clone());
            }
        }
        claimed
    }

    /// Records the outcome of a remote download.
    pub fn complete_fetch(&mut self, reference: DisplayRef, result: Result<Vec<u8>, Error>) {
        let entry = match result {
            Ok(bytes) => Entry::Ready(Handle::from_bytes(bytes)),
            Err(err) => {
                tracing::warn!(reference = %reference, error = %err, "placeholder fetch failed");
                Entry::Failed
            }
        };
        self.entries.insert(reference, entry);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
