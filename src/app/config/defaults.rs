// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Gallery**: Slot count and grid columns, with their bounds
//! - **Layout**: Cell sizes and spacing for the two presentations

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Number of slots created at startup.
pub const DEFAULT_SLOT_COUNT: u32 = 16;

/// Minimum number of slots.
pub const MIN_SLOT_COUNT: u32 = 1;

/// Maximum number of slots.
pub const MAX_SLOT_COUNT: u32 = 256;

/// Number of columns in grid layout.
pub const DEFAULT_GRID_COLUMNS: u32 = 4;

/// Minimum grid columns.
pub const MIN_GRID_COLUMNS: u32 = 1;

/// Maximum grid columns.
pub const MAX_GRID_COLUMNS: u32 = 8;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Height of a grid cell, in logical pixels.
pub const GRID_CELL_HEIGHT: f32 = 220.0;

/// Gap between grid cells.
pub const GRID_SPACING: f32 = 12.0;

/// Maximum width of the grid area.
pub const GRID_MAX_WIDTH: f32 = 1200.0;

/// Height of a feed cell.
pub const FEED_CELL_HEIGHT: f32 = 520.0;

/// Gap between feed cells.
pub const FEED_SPACING: f32 = 24.0;

/// Maximum width of the single feed column.
pub const FEED_MAX_WIDTH: f32 = 640.0;
