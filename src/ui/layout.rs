// SPDX-License-Identifier: MPL-2.0
//! Presentation style of the slot area for each layout mode.
//!
//! The style is a pure function of the mode and the configured column count,
//! so switching back to grid always restores the exact grid metrics.

use crate::app::config::{
    FEED_CELL_HEIGHT, FEED_MAX_WIDTH, FEED_SPACING, GRID_CELL_HEIGHT, GRID_MAX_WIDTH,
    GRID_SPACING, MAX_GRID_COLUMNS, MIN_GRID_COLUMNS,
};
use crate::gallery::LayoutMode;

/// Metrics used to lay out slots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutStyle {
    /// Slots per row.
    pub columns: u32,
    /// Height of every slot cell.
    pub cell_height: f32,
    /// Gap between cells, both directions.
    pub spacing: f32,
    /// Upper bound on the width of the slot area.
    pub max_width: f32,
}

impl LayoutStyle {
    /// Derives the style for `mode`. `grid_columns` only affects grid mode.
    #[must_use]
    pub fn for_mode(mode: LayoutMode, grid_columns: u32) -> Self {
        match mode {
            LayoutMode::Grid => Self {
                columns: grid_columns.clamp(MIN_GRID_COLUMNS, MAX_GRID_COLUMNS),
                cell_height: GRID_CELL_HEIGHT,
                spacing: GRID_SPACING,
                max_width: GRID_MAX_WIDTH,
            },
            LayoutMode::Feed => Self {
                columns: 1,
                cell_height: FEED_CELL_HEIGHT,
                spacing: FEED_SPACING,
                max_width: FEED_MAX_WIDTH,
            },
        }
    }

    /// Number of rows needed to hold `slot_count` slots.
    #[must_use]
    pub fn row_count(&self, slot_count: usize) -> usize {
        let columns = self.columns.max(1) as usize;
        slot_count.div_ceil(columns)
    }
}
