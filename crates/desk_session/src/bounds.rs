//! Usable-desktop bounds math and geometry clamping.

use serde::{Deserialize, Serialize};

use crate::model::{TaskbarEdge, TaskbarSettings, WindowRect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Usable rectangle of the viewport after subtracting the taskbar inset.
pub struct DesktopBounds {
    /// Left limit.
    pub left: i32,
    /// Top limit.
    pub top: i32,
    /// Right limit (exclusive of the inset).
    pub right: i32,
    /// Bottom limit (exclusive of the inset).
    pub bottom: i32,
}

impl DesktopBounds {
    /// Usable width; never negative.
    pub fn width(&self) -> i32 {
        (self.right - self.left).max(0)
    }

    /// Usable height; never negative.
    pub fn height(&self) -> i32 {
        (self.bottom - self.top).max(0)
    }

    /// The bounds as a window rect, used when maximizing.
    pub fn as_rect(&self) -> WindowRect {
        WindowRect {
            x: self.left,
            y: self.top,
            w: self.width(),
            h: self.height(),
        }
    }
}

/// Computes the usable desktop rectangle for a viewport and taskbar placement.
///
/// Exactly one side carries the taskbar inset; a degenerate viewport collapses
/// toward the opposing edge instead of producing negative extents.
pub fn desktop_bounds(viewport: WindowRect, taskbar: TaskbarSettings) -> DesktopBounds {
    let inset = taskbar.size_px.max(0);
    let mut bounds = DesktopBounds {
        left: viewport.x,
        top: viewport.y,
        right: viewport.x + viewport.w.max(0),
        bottom: viewport.y + viewport.h.max(0),
    };
    match taskbar.edge {
        TaskbarEdge::Top => bounds.top = (bounds.top + inset).min(bounds.bottom),
        TaskbarEdge::Bottom => bounds.bottom = (bounds.bottom - inset).max(bounds.top),
        TaskbarEdge::Left => bounds.left = (bounds.left + inset).min(bounds.right),
        TaskbarEdge::Right => bounds.right = (bounds.right - inset).max(bounds.left),
    }
    bounds
}

/// Clamps a window origin so the rect stays inside the bounds.
///
/// Oversized windows pin to the top/left limit rather than overflowing the
/// opposite edge.
pub fn clamp_rect_origin(rect: WindowRect, bounds: DesktopBounds) -> WindowRect {
    let max_x = (bounds.right - rect.w).max(bounds.left);
    let max_y = (bounds.bottom - rect.h).max(bounds.top);
    WindowRect {
        x: rect.x.clamp(bounds.left, max_x),
        y: rect.y.clamp(bounds.top, max_y),
        ..rect
    }
}

/// Clamps a resized rect to its minimum size, the bounds extent, and the
/// usable origin range.
pub fn clamp_resize_rect(
    rect: WindowRect,
    bounds: DesktopBounds,
    min_w: i32,
    min_h: i32,
) -> WindowRect {
    let w = rect.w.max(min_w).min(bounds.width().max(min_w));
    let h = rect.h.max(min_h).min(bounds.height().max(min_h));
    clamp_rect_origin(WindowRect { w, h, ..rect }, bounds)
}
