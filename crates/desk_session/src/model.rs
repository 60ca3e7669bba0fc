//! Data model for the desktop window-management session.

use desk_app_contract::AppId;
use serde::{Deserialize, Serialize};

use crate::bounds::{desktop_bounds, DesktopBounds};
use crate::icon_grid::{GridCell, IconSizePreset};
use crate::recent::RecentApps;

/// Schema version stamped into [`SessionSnapshot`] payloads.
pub const SESSION_SNAPSHOT_SCHEMA_VERSION: u32 = 1;

/// Default window width when a descriptor declares no preferred size.
pub const DEFAULT_WINDOW_WIDTH: i32 = 800;
/// Default window height when a descriptor declares no preferred size.
pub const DEFAULT_WINDOW_HEIGHT: i32 = 600;
/// Minimum allowed managed window width.
pub const MIN_WINDOW_WIDTH: i32 = 220;
/// Minimum allowed managed window height.
pub const MIN_WINDOW_HEIGHT: i32 = 140;
/// Per-window offset applied to staggered default placement.
pub const WINDOW_STAGGER_STEP: i32 = 20;
/// Origin of staggered default placement.
pub const WINDOW_STAGGER_ORIGIN: i32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// Stable identifier for one open window, minted from a per-session counter.
pub struct WindowId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Window geometry in desktop pixel coordinates.
pub struct WindowRect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width.
    pub w: i32,
    /// Height.
    pub h: i32,
}

impl WindowRect {
    /// Returns the rect translated by `(dx, dy)`.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Returns the rect with width/height clamped up to the given minimums.
    pub fn clamped_min(self, min_w: i32, min_h: i32) -> Self {
        Self {
            w: self.w.max(min_w),
            h: self.h.max(min_h),
            ..self
        }
    }
}

impl Default for WindowRect {
    fn default() -> Self {
        Self {
            x: WINDOW_STAGGER_ORIGIN,
            y: WINDOW_STAGGER_ORIGIN,
            w: DEFAULT_WINDOW_WIDTH,
            h: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
/// Display mode of a managed window.
///
/// A single tagged variant: a window can never be both minimized and maximized.
pub enum WindowMode {
    /// Free-floating window at its stored rect.
    #[default]
    Normal,
    /// Hidden from the surface, restorable from the taskbar.
    Minimized,
    /// Filling the usable desktop bounds.
    Maximized,
}

impl WindowMode {
    /// True for [`WindowMode::Minimized`].
    pub fn is_minimized(self) -> bool {
        matches!(self, Self::Minimized)
    }

    /// True for [`WindowMode::Maximized`].
    pub fn is_maximized(self) -> bool {
        matches!(self, Self::Maximized)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One open, on-screen session of an application.
pub struct WindowInstance {
    /// Session-unique window identifier.
    pub id: WindowId,
    /// Owning catalog application.
    pub app_id: AppId,
    /// Title bar text.
    pub title: String,
    /// Symbolic icon key copied from the descriptor.
    pub icon: String,
    /// Current geometry. While maximized this is the filled bounds rect.
    pub rect: WindowRect,
    /// Geometry saved when entering a maximized or edge-snapped layout.
    pub restore_rect: Option<WindowRect>,
    /// Stacking key; unique across live windows, strict maximum is topmost.
    pub z_index: u32,
    /// Display mode.
    pub mode: WindowMode,
    /// Orthogonal native-fullscreen flag layered on top of the mode.
    pub fullscreen: bool,
    /// Minimum width honored by resize clamping.
    pub min_w: i32,
    /// Minimum height honored by resize clamping.
    pub min_h: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Window-open request projected from an [`desk_app_contract::AppDescriptor`].
///
/// The reducer never needs the render target; the shell resolves it again by
/// id when mounting the window body.
pub struct OpenRequest {
    /// Catalog application to open.
    pub app_id: AppId,
    /// Title for the new window.
    pub title: String,
    /// Symbolic icon key.
    pub icon: String,
    /// Preferred window size, when declared.
    pub preferred_size: Option<(i32, i32)>,
    /// Minimum window size, when declared.
    pub min_size: Option<(i32, i32)>,
}

impl OpenRequest {
    /// Projects the window-relevant fields out of a catalog descriptor.
    pub fn from_descriptor(app: &desk_app_contract::AppDescriptor) -> Self {
        Self {
            app_id: app.id.clone(),
            title: app.name.to_string(),
            icon: app.icon.to_string(),
            preferred_size: app.preferred_size,
            min_size: app.min_size,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
/// Viewport edge the taskbar is docked to.
pub enum TaskbarEdge {
    /// Docked along the top edge.
    Top,
    /// Docked along the bottom edge.
    #[default]
    Bottom,
    /// Docked along the left edge.
    Left,
    /// Docked along the right edge.
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Resolved taskbar configuration supplied by the settings collaborator.
pub struct TaskbarSettings {
    /// Docked edge.
    pub edge: TaskbarEdge,
    /// Reserved inset in pixels along the docked edge.
    pub size_px: i32,
    /// Render opacity, 0-100.
    pub opacity_percent: u8,
    /// Whether the taskbar hides until hovered.
    pub autohide: bool,
}

impl Default for TaskbarSettings {
    fn default() -> Self {
        Self {
            edge: TaskbarEdge::Bottom,
            size_px: 48,
            opacity_percent: 100,
            autohide: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Resolved desktop background (workspace) configuration.
pub struct DesktopBackground {
    /// Stable background identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Wallpaper preset id rendered by the backdrop.
    pub wallpaper_id: String,
    /// App visibility allowlist; empty means every catalog app is shown.
    pub app_ids: Vec<AppId>,
}

impl DesktopBackground {
    /// Returns the default always-on background showing every app.
    pub fn everything() -> Self {
        Self {
            id: "default".to_string(),
            name: "Default".to_string(),
            wallpaper_id: "teal-solid".to_string(),
            app_ids: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Sticky per-session desktop icon placement.
pub struct IconPlacement {
    /// Catalog app the icon launches.
    pub app_id: AppId,
    /// Assigned grid cell.
    pub cell: GridCell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Pointer position in desktop pixel coordinates.
pub struct PointerPosition {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Edge or corner driving a resize gesture.
pub enum ResizeEdge {
    /// Top edge.
    North,
    /// Bottom edge.
    South,
    /// Right edge.
    East,
    /// Left edge.
    West,
    /// Top-right corner.
    NorthEast,
    /// Top-left corner.
    NorthWest,
    /// Bottom-right corner.
    SouthEast,
    /// Bottom-left corner.
    SouthWest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Active titlebar drag gesture.
pub struct DragSession {
    /// Window being dragged.
    pub window_id: WindowId,
    /// Pointer position at gesture start.
    pub pointer_start: PointerPosition,
    /// Window rect at gesture start.
    pub rect_start: WindowRect,
    /// Clamped geometry awaiting the next frame commit.
    pub pending: Option<WindowRect>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Active resize gesture.
pub struct ResizeSession {
    /// Window being resized.
    pub window_id: WindowId,
    /// Edge or corner being dragged.
    pub edge: ResizeEdge,
    /// Pointer position at gesture start.
    pub pointer_start: PointerPosition,
    /// Window rect at gesture start.
    pub rect_start: WindowRect,
    /// Clamped geometry awaiting the next frame commit.
    pub pending: Option<WindowRect>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Transient pointer-interaction state kept outside the authoritative store.
///
/// Pointer moves update the `pending` rect of the active session; the store is
/// only written by an explicit commit, scheduled once per animation frame.
pub struct InteractionState {
    /// Active drag gesture, if any.
    pub dragging: Option<DragSession>,
    /// Active resize gesture, if any.
    pub resizing: Option<ResizeSession>,
}

impl InteractionState {
    /// Returns the pending geometry for `window_id` when a gesture targets it.
    pub fn pending_rect_for(&self, window_id: WindowId) -> Option<WindowRect> {
        if let Some(session) = &self.dragging {
            if session.window_id == window_id {
                return session.pending;
            }
        }
        if let Some(session) = &self.resizing {
            if session.window_id == window_id {
                return session.pending;
            }
        }
        None
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// The single owned state container for the desktop session.
///
/// Constructed by the shell provider at startup and torn down with it; tests
/// construct their own instances, so nothing here is global.
pub struct SessionState {
    /// Counter minting the next [`WindowId`].
    pub next_window_id: u64,
    /// Live window registry.
    pub windows: Vec<WindowInstance>,
    /// Bounded most-recent-first launcher affordance.
    pub recent_apps: RecentApps,
    /// Sticky desktop icon placements for this session.
    pub icon_layout: Vec<IconPlacement>,
    /// Whether the start menu overlay is open.
    pub start_menu_open: bool,
    /// Current viewport rect reported by the host.
    pub viewport: WindowRect,
    /// Resolved taskbar configuration.
    pub taskbar: TaskbarSettings,
    /// Resolved background (workspace) definitions.
    pub backgrounds: Vec<DesktopBackground>,
    /// Index of the active background within `backgrounds`.
    pub active_background: usize,
    /// Desktop icon size preset.
    pub icon_size: IconSizePreset,
    /// Mobile layout flag; forces maximized windows and suppresses gestures.
    pub mobile_layout: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            next_window_id: 1,
            windows: Vec::new(),
            recent_apps: RecentApps::default(),
            icon_layout: Vec::new(),
            start_menu_open: false,
            viewport: WindowRect {
                x: 0,
                y: 0,
                w: 1280,
                h: 800,
            },
            taskbar: TaskbarSettings::default(),
            backgrounds: vec![DesktopBackground::everything()],
            active_background: 0,
            icon_size: IconSizePreset::default(),
            mobile_layout: false,
        }
    }
}

impl SessionState {
    /// Usable desktop rectangle: the viewport minus the taskbar inset.
    pub fn bounds(&self) -> DesktopBounds {
        desktop_bounds(self.viewport, self.taskbar)
    }

    /// Looks up a live window by id.
    pub fn window(&self, window_id: WindowId) -> Option<&WindowInstance> {
        self.windows.iter().find(|w| w.id == window_id)
    }

    /// True iff a live window references `app_id`.
    ///
    /// The desktop surface double-checks this before rendering a frame so a
    /// stale render list can never resurrect a closed window.
    pub fn is_app_open(&self, app_id: &AppId) -> bool {
        self.windows.iter().any(|w| &w.app_id == app_id)
    }

    /// Returns the most recent live window for `app_id`, if any.
    pub fn window_for_app(&self, app_id: &AppId) -> Option<&WindowInstance> {
        self.windows.iter().rev().find(|w| &w.app_id == app_id)
    }

    /// Highest stacking key currently assigned, or 0 with no windows.
    pub fn max_z(&self) -> u32 {
        self.windows.iter().map(|w| w.z_index).max().unwrap_or(0)
    }

    /// Id of the focused window: the non-minimized window holding the maximum
    /// stacking key.
    pub fn focused_window_id(&self) -> Option<WindowId> {
        self.windows
            .iter()
            .filter(|w| !w.mode.is_minimized())
            .max_by_key(|w| w.z_index)
            .map(|w| w.id)
    }

    /// Windows ordered back-to-front for taskbar listings.
    pub fn ordered_windows(&self) -> Vec<WindowInstance> {
        let mut windows = self.windows.clone();
        windows.sort_by_key(|w| (w.z_index, w.id.0));
        windows
    }

    /// Active background definition; falls back to show-everything when the
    /// configured list is empty.
    pub fn active_background(&self) -> DesktopBackground {
        self.backgrounds
            .get(self.active_background)
            .cloned()
            .unwrap_or_else(DesktopBackground::everything)
    }

    /// Per-workspace visibility policy: core apps are always visible, an empty
    /// allowlist shows everything, otherwise membership decides.
    pub fn background_allows(&self, app_id: &AppId, core: bool) -> bool {
        if core {
            return true;
        }
        let background = self.active_background();
        background.app_ids.is_empty() || background.app_ids.contains(app_id)
    }

    /// Assigned icon cell for `app_id`, if the surface has placed it.
    pub fn icon_cell(&self, app_id: &AppId) -> Option<GridCell> {
        self.icon_layout
            .iter()
            .find(|placement| &placement.app_id == app_id)
            .map(|placement| placement.cell)
    }

    /// Serializable projection of the restorable session state.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            schema_version: SESSION_SNAPSHOT_SCHEMA_VERSION,
            windows: self.windows.clone(),
            recent_apps: self.recent_apps.clone(),
            taskbar: self.taskbar,
            active_background_id: self.active_background().id,
        }
    }

    /// Rebuilds session state from a snapshot, re-deriving the id counter.
    ///
    /// Stacking keys are re-normalized by the reducer's hydration path; this
    /// constructor only guarantees the counter stays ahead of restored ids.
    pub fn from_snapshot(snapshot: SessionSnapshot) -> Self {
        let mut state = Self::default();
        state.windows = snapshot.windows;
        state.recent_apps = snapshot.recent_apps;
        state.taskbar = snapshot.taskbar;
        if let Some(index) = state
            .backgrounds
            .iter()
            .position(|b| b.id == snapshot.active_background_id)
        {
            state.active_background = index;
        }
        state.next_window_id = state
            .windows
            .iter()
            .map(|w| w.id.0)
            .max()
            .unwrap_or(0)
            .saturating_add(1);
        state
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Restorable projection of [`SessionState`] handed to the layout sink.
pub struct SessionSnapshot {
    /// Snapshot schema version.
    pub schema_version: u32,
    /// Live windows at snapshot time.
    pub windows: Vec<WindowInstance>,
    /// Recent-apps affordance.
    pub recent_apps: RecentApps,
    /// Taskbar configuration.
    pub taskbar: TaskbarSettings,
    /// Id of the active background.
    pub active_background_id: String,
}
