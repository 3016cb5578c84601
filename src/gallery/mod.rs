// SPDX-License-Identifier: MPL-2.0
//! Gallery state store: the single source of truth for slot contents and the
//! active layout mode.
//!
//! The store is a plain value owned by the application root. Every operation
//! is either a pure function returning a new [`GalleryState`] or an in-place
//! variant used by the update loop; none of them perform I/O.
//!
//! # Invariants
//!
//! - Exactly one [`ImageSlot`] exists per id in `1..=N`, in id order.
//! - Ids are assigned once by [`GalleryState::initialize`] and never change.
//! - Mutations addressed to an unknown id are silent no-ops.

pub mod placeholder;
pub mod reference;

pub use placeholder::PlaceholderSource;
pub use reference::{DisplayRef, LocalRefRegistry};

use std::fmt;

/// Stable identifier of a slot, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotId(u32);

impl SlotId {
    /// Wraps a raw id. Ids are only meaningful when they exist in a state.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Content of a slot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SlotImage {
    /// No image; rendered as a neutral placeholder with an upload invitation.
    #[default]
    Placeholder,
    /// An image identified by a displayable reference.
    Populated(DisplayRef),
}

impl SlotImage {
    /// Returns the displayable reference, if any.
    #[must_use]
    pub fn reference(&self) -> Option<&DisplayRef> {
        match self {
            SlotImage::Placeholder => None,
            SlotImage::Populated(reference) => Some(reference),
        }
    }
}

/// One addressable position in the gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSlot {
    id: SlotId,
    image: SlotImage,
}

impl ImageSlot {
    #[must_use]
    pub fn id(&self) -> SlotId {
        self.id
    }

    #[must_use]
    pub fn image(&self) -> &SlotImage {
        &self.image
    }
}

/// Visual arrangement applied uniformly to all slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutMode {
    #[default]
    Grid,
    Feed,
}

impl LayoutMode {
    /// Both modes, in toggle order.
    pub const ALL: [LayoutMode; 2] = [LayoutMode::Grid, LayoutMode::Feed];

    /// Returns the i18n key of the toggle label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            LayoutMode::Grid => "layout-grid",
            LayoutMode::Feed => "layout-feed",
        }
    }
}

/// Ordered slots plus the current layout mode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GalleryState {
    slots: Vec<ImageSlot>,
    layout: LayoutMode,
}

impl GalleryState {
    /// Creates `count` slots with ids `1..=count`, each seeded with the
    /// placeholder reference derived from its id. The layout starts as grid.
    #[must_use]
    pub fn initialize(count: u32, placeholder: &PlaceholderSource) -> Self {
        let slots = (1..=count)
            .map(SlotId::new)
            .map(|id| ImageSlot {
                id,
                image: SlotImage::Populated(placeholder.reference_for(id)),
            })
            .collect();

        Self {
            slots,
            layout: LayoutMode::Grid,
        }
    }

    /// Returns a new state identical to `self` except that the slot matching
    /// `id` shows `reference`. Unknown ids return an unchanged copy.
    #[must_use]
    pub fn replace_slot_image(&self, id: SlotId, reference: DisplayRef) -> Self {
        let mut next = self.clone();
        next.apply_replace(id, reference);
        next
    }

    /// In-place form of [`replace_slot_image`](Self::replace_slot_image).
    ///
    /// Returns the slot's previous image, or `None` when no slot matches `id`
    /// (in which case nothing changed).
    pub fn apply_replace(&mut self, id: SlotId, reference: DisplayRef) -> Option<SlotImage> {
        let slot = self.slot_mut(id)?;
        Some(std::mem::replace(
            &mut slot.image,
            SlotImage::Populated(reference),
        ))
    }

    /// Returns a new state with the given layout mode.
    #[must_use]
    pub fn with_layout(&self, mode: LayoutMode) -> Self {
        Self {
            slots: self.slots.clone(),
            layout: mode,
        }
    }

    /// Replaces the layout mode unconditionally.
    pub fn set_layout(&mut self, mode: LayoutMode) {
        self.layout = mode;
    }

    #[must_use]
    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    #[must_use]
    pub fn slots(&self) -> &[ImageSlot] {
        &self.slots
    }

    #[must_use]
    pub fn slot(&self, id: SlotId) -> Option<&ImageSlot> {
        let index = usize::try_from(id.get()).ok()?.checked_sub(1)?;
        self.slots.get(index).filter(|slot| slot.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn slot_mut(&mut self, id: SlotId) -> Option<&mut ImageSlot> {
        // Slots are stored in id order starting at 1.
        let index = usize::try_from(id.get()).ok()?.checked_sub(1)?;
        self.slots.get_mut(index).filter(|slot| slot.id == id)
    }
}
