//! Headless window-management core for the desktop shell.
//!
//! Owns the session data model, the usable-bounds and icon-grid math, and the
//! synchronous reducer that is the single mutation path for window state. No
//! DOM types and no I/O live here, so everything is exercised by native unit
//! tests.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod bounds;
pub mod icon_grid;
pub mod model;
pub mod recent;
pub mod reducer;

pub use bounds::{clamp_rect_origin, clamp_resize_rect, desktop_bounds, DesktopBounds};
pub use icon_grid::{
    cell_origin, first_free_cell, grid_metrics, snap_to_cell, GridCell, GridMetrics,
    IconSizePreset, GRID_SPACING,
};
pub use model::*;
pub use recent::{RecentApps, RECENT_APPS_MAX};
pub use reducer::{
    reduce_session, SessionAction, SessionEffect, SessionError, SNAP_EDGE_THRESHOLD,
};
