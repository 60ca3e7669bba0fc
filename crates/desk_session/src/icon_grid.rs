//! Desktop icon grid layout: column math, first-fit placement, and cell snapping.

use serde::{Deserialize, Serialize};

use crate::bounds::DesktopBounds;
use crate::model::PointerPosition;

/// Spacing in pixels between grid cells and around the grid origin.
pub const GRID_SPACING: i32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
/// Named desktop icon size presets.
pub enum IconSizePreset {
    /// Compact icons.
    Small,
    /// Standard icons.
    #[default]
    Medium,
    /// Prominent icons.
    Large,
}

impl IconSizePreset {
    /// Icon footprint (width, height) in pixels, label included.
    pub const fn dimensions(self) -> (i32, i32) {
        match self {
            Self::Small => (48, 64),
            Self::Medium => (64, 80),
            Self::Large => (80, 96),
        }
    }

    /// Stable token used for CSS hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// One cell of the desktop icon grid.
pub struct GridCell {
    /// Column index, zero-based from the bounds origin.
    pub col: i32,
    /// Row index, zero-based from the bounds origin.
    pub row: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Grid geometry derived from the usable bounds and the icon preset.
pub struct GridMetrics {
    /// Number of columns that fit; at least 1 even on degenerate viewports.
    pub columns: i32,
    /// Number of rows that fit above the reserved bottom space; at least 1.
    pub rows: i32,
    /// Horizontal cell pitch (icon width plus spacing).
    pub cell_w: i32,
    /// Vertical cell pitch (icon height plus spacing).
    pub cell_h: i32,
}

/// Computes grid geometry for the usable desktop bounds.
///
/// `columns = floor((width - spacing) / (icon_w + spacing))`, clamped to at
/// least one column so degenerate viewports still lay out.
pub fn grid_metrics(bounds: DesktopBounds, preset: IconSizePreset) -> GridMetrics {
    let (icon_w, icon_h) = preset.dimensions();
    let cell_w = icon_w + GRID_SPACING;
    let cell_h = icon_h + GRID_SPACING;
    let columns = ((bounds.width() - GRID_SPACING) / cell_w).max(1);
    let rows = ((bounds.height() - GRID_SPACING) / cell_h).max(1);
    GridMetrics {
        columns,
        rows,
        cell_w,
        cell_h,
    }
}

/// Pixel origin of a cell, relative to the desktop bounds origin.
pub fn cell_origin(cell: GridCell, bounds: DesktopBounds, metrics: GridMetrics) -> (i32, i32) {
    (
        bounds.left + GRID_SPACING + cell.col * metrics.cell_w,
        bounds.top + GRID_SPACING + cell.row * metrics.cell_h,
    )
}

/// First-fit scan: the first cell in row-major order not present in
/// `occupied`.
///
/// Collisions are resolved purely by scan order; when the grid is full the
/// origin cell is reused rather than failing.
pub fn first_free_cell(metrics: GridMetrics, occupied: &[GridCell]) -> GridCell {
    for row in 0..metrics.rows {
        for col in 0..metrics.columns {
            let cell = GridCell { col, row };
            if !occupied.contains(&cell) {
                return cell;
            }
        }
    }
    GridCell { col: 0, row: 0 }
}

/// Snaps a dropped icon position to the nearest grid cell, clamped to the
/// grid extent.
pub fn snap_to_cell(
    position: PointerPosition,
    bounds: DesktopBounds,
    metrics: GridMetrics,
) -> GridCell {
    let rel_x = position.x - bounds.left - GRID_SPACING;
    let rel_y = position.y - bounds.top - GRID_SPACING;
    let col = round_div(rel_x, metrics.cell_w).clamp(0, metrics.columns - 1);
    let row = round_div(rel_y, metrics.cell_h).clamp(0, metrics.rows - 1);
    GridCell { col, row }
}

fn round_div(value: i32, divisor: i32) -> i32 {
    if divisor <= 0 {
        return 0;
    }
    let half = divisor / 2;
    if value >= 0 {
        (value + half) / divisor
    } else {
        (value - half) / divisor
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn bounds(w: i32, h: i32) -> DesktopBounds {
        DesktopBounds {
            left: 0,
            top: 0,
            right: w,
            bottom: h,
        }
    }

    #[test]
    fn column_count_follows_the_spacing_formula() {
        let metrics = grid_metrics(bounds(1280, 732), IconSizePreset::Medium);
        // (1280 - 20) / (64 + 20)
        assert_eq!(metrics.columns, 15);
        assert_eq!(metrics.cell_w, 84);
    }

    #[test]
    fn degenerate_bounds_keep_one_column_and_row() {
        let metrics = grid_metrics(bounds(10, 10), IconSizePreset::Large);
        assert_eq!(metrics.columns, 1);
        assert_eq!(metrics.rows, 1);
    }

    #[test]
    fn first_fit_skips_occupied_cells_in_row_major_order() {
        let metrics = grid_metrics(bounds(500, 400), IconSizePreset::Medium);
        let occupied = vec![
            GridCell { col: 0, row: 0 },
            GridCell { col: 1, row: 0 },
        ];
        assert_eq!(
            first_free_cell(metrics, &occupied),
            GridCell { col: 2, row: 0 }
        );

        let full_first_row: Vec<GridCell> = (0..metrics.columns)
            .map(|col| GridCell { col, row: 0 })
            .collect();
        assert_eq!(
            first_free_cell(metrics, &full_first_row),
            GridCell { col: 0, row: 1 }
        );
    }

    #[test]
    fn full_grid_falls_back_to_the_origin() {
        let metrics = GridMetrics {
            columns: 1,
            rows: 1,
            cell_w: 84,
            cell_h: 100,
        };
        let occupied = vec![GridCell { col: 0, row: 0 }];
        assert_eq!(
            first_free_cell(metrics, &occupied),
            GridCell { col: 0, row: 0 }
        );
    }

    #[test]
    fn snapping_rounds_to_the_nearest_cell_and_clamps() {
        let b = bounds(1280, 732);
        let metrics = grid_metrics(b, IconSizePreset::Medium);

        let near_second = snap_to_cell(PointerPosition { x: 130, y: 30 }, b, metrics);
        assert_eq!(near_second, GridCell { col: 1, row: 0 });

        let far_out = snap_to_cell(PointerPosition { x: 5000, y: 5000 }, b, metrics);
        assert_eq!(
            far_out,
            GridCell {
                col: metrics.columns - 1,
                row: metrics.rows - 1
            }
        );

        let negative = snap_to_cell(PointerPosition { x: -400, y: -400 }, b, metrics);
        assert_eq!(negative, GridCell { col: 0, row: 0 });
    }
}
