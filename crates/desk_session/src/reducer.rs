//! Reducer actions, side-effect intents, and transition logic for the desktop
//! session.
//!
//! All window-state mutation funnels through [`reduce_session`], a total,
//! synchronous function over the in-memory registry. Actions referencing a
//! missing window resolve to [`SessionError::WindowNotFound`], which callers
//! log and drop: state stays unchanged and nothing propagates to the shell.

use thiserror::Error;

use crate::bounds::{clamp_rect_origin, clamp_resize_rect};
use crate::icon_grid::{first_free_cell, grid_metrics, snap_to_cell, IconSizePreset};
use crate::model::{
    DesktopBackground, IconPlacement, InteractionState, OpenRequest, PointerPosition, ResizeEdge,
    ResizeSession, SessionSnapshot, SessionState, TaskbarSettings, WindowId, WindowInstance,
    WindowMode, WindowRect, WINDOW_STAGGER_ORIGIN, WINDOW_STAGGER_STEP,
};

/// Pointer threshold (in px) for edge snap behavior at drag end.
pub const SNAP_EDGE_THRESHOLD: i32 = 24;

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_session`] to mutate [`SessionState`].
pub enum SessionAction {
    /// Open an app: raise its existing window or create a new one.
    OpenApp(OpenRequest),
    /// Close a window by id, removing it from the registry.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Replace a stored window wholesale; the caller supplies the merged state.
    UpdateWindow {
        /// Replacement instance; matched by id.
        window: WindowInstance,
    },
    /// Raise a window to the top of the stacking order.
    BringToFront {
        /// Window to raise.
        window_id: WindowId,
    },
    /// Toggle a window between its visible mode and minimized.
    ToggleMinimize {
        /// Window to toggle.
        window_id: WindowId,
    },
    /// Toggle a window between normal and maximized.
    ToggleMaximize {
        /// Window to toggle.
        window_id: WindowId,
    },
    /// Toggle the orthogonal native-fullscreen flag.
    ToggleFullscreen {
        /// Window to toggle.
        window_id: WindowId,
    },
    /// Taskbar button behavior: restore if minimized, minimize if focused,
    /// focus otherwise.
    ToggleTaskbarWindow {
        /// Window associated with the taskbar button.
        window_id: WindowId,
    },
    /// Toggle the start menu open/closed.
    ToggleStartMenu,
    /// Close the start menu if open.
    CloseStartMenu,
    /// Begin dragging a window by its titlebar.
    BeginMove {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update an in-progress drag; writes pending geometry only.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// Begin resizing a window from an edge or corner.
    BeginResize {
        /// Window being resized.
        window_id: WindowId,
        /// Edge or corner being dragged.
        edge: ResizeEdge,
        /// Pointer position at resize start.
        pointer: PointerPosition,
    },
    /// Update an in-progress resize; writes pending geometry only.
    UpdateResize {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// Commit pending gesture geometry to the store (once per frame).
    CommitInteraction,
    /// End the active drag, committing geometry and applying edge snapping.
    EndMove,
    /// End the active resize, committing geometry.
    EndResize,
    /// Record a new viewport rect reported by the host.
    ViewportResized {
        /// Current viewport rectangle.
        viewport: WindowRect,
    },
    /// Apply resolved taskbar configuration.
    SetTaskbarSettings {
        /// New taskbar settings.
        taskbar: TaskbarSettings,
    },
    /// Replace the resolved background definitions.
    SetBackgrounds {
        /// Background list handed in by the settings collaborator.
        backgrounds: Vec<DesktopBackground>,
    },
    /// Activate a background by index.
    SetActiveBackground {
        /// Index into the background list.
        index: usize,
    },
    /// Advance to the next background, wrapping around.
    CycleBackground,
    /// Change the desktop icon size preset.
    SetIconSize {
        /// New preset.
        preset: IconSizePreset,
    },
    /// First-fit place any currently unpositioned desktop icons.
    PlaceDesktopIcons {
        /// Visible desktop apps in catalog order.
        app_ids: Vec<desk_app_contract::AppId>,
    },
    /// Snap a dropped desktop icon to the nearest grid cell.
    MoveDesktopIcon {
        /// App whose icon was dropped.
        app_id: desk_app_contract::AppId,
        /// Drop position in desktop coordinates.
        position: PointerPosition,
    },
    /// Enter or leave the forced-maximized mobile layout.
    SetMobileLayout {
        /// Whether mobile layout is active.
        enabled: bool,
    },
    /// Restore session state from a persisted snapshot.
    HydrateSnapshot {
        /// Snapshot payload to restore.
        snapshot: SessionSnapshot,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_session`] for the shell to execute.
pub enum SessionEffect {
    /// Hand the current layout snapshot to the external layout sink.
    PersistLayout,
    /// Move focus into the window's primary input.
    FocusWindowInput(WindowId),
    /// Request native fullscreen for the window's frame element.
    EnterFullscreen(WindowId),
    /// Leave native fullscreen.
    ExitFullscreen(WindowId),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions referencing state that is not present.
pub enum SessionError {
    /// The target window id was not found in the registry.
    #[error("window not found")]
    WindowNotFound,
}

/// Applies a [`SessionAction`] to the session and collects resulting effects.
///
/// # Errors
///
/// Returns [`SessionError::WindowNotFound`] when an action targets a window
/// that is no longer registered. State is unchanged in that case.
pub fn reduce_session(
    state: &mut SessionState,
    interaction: &mut InteractionState,
    action: SessionAction,
) -> Result<Vec<SessionEffect>, SessionError> {
    let mut effects = Vec::new();
    match action {
        SessionAction::OpenApp(request) => {
            let window_id = open_app(state, request);
            state.start_menu_open = false;
            effects.push(SessionEffect::PersistLayout);
            effects.push(SessionEffect::FocusWindowInput(window_id));
        }
        SessionAction::CloseWindow { window_id } => {
            let window = find_window(state, window_id)?;
            if window.fullscreen {
                effects.push(SessionEffect::ExitFullscreen(window_id));
            }
            state.windows.retain(|w| w.id != window_id);
            abandon_gestures_for(interaction, window_id);
            effects.push(SessionEffect::PersistLayout);
        }
        SessionAction::UpdateWindow { window } => {
            let slot = state
                .windows
                .iter_mut()
                .find(|w| w.id == window.id)
                .ok_or(SessionError::WindowNotFound)?;
            *slot = window;
            effects.push(SessionEffect::PersistLayout);
        }
        SessionAction::BringToFront { window_id } => {
            bring_to_front(state, window_id)?;
            state.start_menu_open = false;
            effects.push(SessionEffect::FocusWindowInput(window_id));
        }
        SessionAction::ToggleMinimize { window_id } => {
            let mode = find_window(state, window_id)?.mode;
            match mode {
                WindowMode::Normal => {
                    find_window_mut(state, window_id)?.mode = WindowMode::Minimized;
                }
                WindowMode::Maximized => {
                    // Fold the pre-maximize rect back in so un-minimizing
                    // always lands in a normal layout.
                    let window = find_window_mut(state, window_id)?;
                    if let Some(restore) = window.restore_rect.take() {
                        window.rect = restore;
                    }
                    window.mode = WindowMode::Minimized;
                }
                WindowMode::Minimized => {
                    bring_to_front(state, window_id)?;
                }
            }
            effects.push(SessionEffect::PersistLayout);
        }
        SessionAction::ToggleMaximize { window_id } => {
            let bounds_rect = state.bounds().as_rect();
            let window = find_window_mut(state, window_id)?;
            if window.mode.is_maximized() {
                let fallback = WindowRect::default().clamped_min(window.min_w, window.min_h);
                window.rect = window.restore_rect.take().unwrap_or(fallback);
                window.mode = WindowMode::Normal;
            } else {
                window.restore_rect = Some(window.rect);
                window.rect = bounds_rect.clamped_min(window.min_w, window.min_h);
                window.mode = WindowMode::Maximized;
            }
            bring_to_front(state, window_id)?;
            effects.push(SessionEffect::PersistLayout);
        }
        SessionAction::ToggleFullscreen { window_id } => {
            let window = find_window_mut(state, window_id)?;
            window.fullscreen = !window.fullscreen;
            if window.fullscreen {
                effects.push(SessionEffect::EnterFullscreen(window_id));
            } else {
                effects.push(SessionEffect::ExitFullscreen(window_id));
            }
        }
        SessionAction::ToggleTaskbarWindow { window_id } => {
            let minimized = find_window(state, window_id)?.mode.is_minimized();
            let focused = state.focused_window_id() == Some(window_id);
            if minimized {
                bring_to_front(state, window_id)?;
                effects.push(SessionEffect::FocusWindowInput(window_id));
            } else if focused {
                effects.extend(reduce_session(
                    state,
                    interaction,
                    SessionAction::ToggleMinimize { window_id },
                )?);
            } else {
                bring_to_front(state, window_id)?;
                effects.push(SessionEffect::FocusWindowInput(window_id));
            }
        }
        SessionAction::ToggleStartMenu => {
            state.start_menu_open = !state.start_menu_open;
        }
        SessionAction::CloseStartMenu => {
            state.start_menu_open = false;
        }
        SessionAction::BeginMove { window_id, pointer } => {
            if !state.mobile_layout {
                let window = find_window(state, window_id)?;
                if !window.mode.is_maximized() {
                    interaction.dragging = Some(crate::model::DragSession {
                        window_id,
                        pointer_start: pointer,
                        rect_start: window.rect,
                        pending: None,
                    });
                }
                bring_to_front(state, window_id)?;
            }
        }
        SessionAction::UpdateMove { pointer } => {
            let bounds = state.bounds();
            let target_alive = interaction
                .dragging
                .as_ref()
                .map(|session| state.windows.iter().any(|w| w.id == session.window_id));
            match target_alive {
                Some(true) => {
                    if let Some(session) = interaction.dragging.as_mut() {
                        let dx = pointer.x - session.pointer_start.x;
                        let dy = pointer.y - session.pointer_start.y;
                        session.pending =
                            Some(clamp_rect_origin(session.rect_start.offset(dx, dy), bounds));
                    }
                }
                Some(false) => {
                    // Window closed mid-gesture; further moves are no-ops.
                    interaction.dragging = None;
                }
                None => {}
            }
        }
        SessionAction::BeginResize {
            window_id,
            edge,
            pointer,
        } => {
            if !state.mobile_layout {
                let window = find_window(state, window_id)?;
                if !window.mode.is_maximized() {
                    interaction.resizing = Some(ResizeSession {
                        window_id,
                        edge,
                        pointer_start: pointer,
                        rect_start: window.rect,
                        pending: None,
                    });
                }
                bring_to_front(state, window_id)?;
            }
        }
        SessionAction::UpdateResize { pointer } => {
            let bounds = state.bounds();
            let minimums = interaction.resizing.as_ref().map(|session| {
                state
                    .windows
                    .iter()
                    .find(|w| w.id == session.window_id)
                    .map(|w| (w.min_w, w.min_h))
            });
            match minimums {
                Some(Some((min_w, min_h))) => {
                    if let Some(session) = interaction.resizing.as_mut() {
                        let dx = pointer.x - session.pointer_start.x;
                        let dy = pointer.y - session.pointer_start.y;
                        let resized = resize_rect(session.rect_start, session.edge, dx, dy);
                        session.pending = Some(clamp_resize_rect(resized, bounds, min_w, min_h));
                    }
                }
                Some(None) => {
                    // Window closed mid-gesture; further resizes are no-ops.
                    interaction.resizing = None;
                }
                None => {}
            }
        }
        SessionAction::CommitInteraction => {
            commit_pending(state, interaction);
        }
        SessionAction::EndMove => {
            commit_pending(state, interaction);
            let dragged = interaction.dragging.take().map(|session| session.window_id);
            if let Some(window_id) = dragged {
                if !state.mobile_layout {
                    snap_window_to_bounds_edge(state, window_id);
                }
            }
            effects.push(SessionEffect::PersistLayout);
        }
        SessionAction::EndResize => {
            commit_pending(state, interaction);
            interaction.resizing = None;
            effects.push(SessionEffect::PersistLayout);
        }
        SessionAction::ViewportResized { viewport } => {
            state.viewport = viewport;
            apply_bounds_change(state);
        }
        SessionAction::SetTaskbarSettings { taskbar } => {
            state.taskbar = taskbar;
            apply_bounds_change(state);
        }
        SessionAction::SetBackgrounds { backgrounds } => {
            state.backgrounds = backgrounds;
            if state.backgrounds.is_empty() {
                state.backgrounds.push(DesktopBackground::everything());
            }
            state.active_background = state.active_background.min(state.backgrounds.len() - 1);
        }
        SessionAction::SetActiveBackground { index } => {
            state.active_background = index.min(state.backgrounds.len().saturating_sub(1));
        }
        SessionAction::CycleBackground => {
            if !state.backgrounds.is_empty() {
                state.active_background = (state.active_background + 1) % state.backgrounds.len();
            }
        }
        SessionAction::SetIconSize { preset } => {
            state.icon_size = preset;
            let metrics = grid_metrics(state.bounds(), state.icon_size);
            for placement in &mut state.icon_layout {
                placement.cell.col = placement.cell.col.clamp(0, metrics.columns - 1);
                placement.cell.row = placement.cell.row.clamp(0, metrics.rows - 1);
            }
        }
        SessionAction::PlaceDesktopIcons { app_ids } => {
            let metrics = grid_metrics(state.bounds(), state.icon_size);
            for app_id in app_ids {
                if state.icon_cell(&app_id).is_some() {
                    continue;
                }
                let occupied: Vec<_> = state
                    .icon_layout
                    .iter()
                    .map(|placement| placement.cell)
                    .collect();
                let cell = first_free_cell(metrics, &occupied);
                state.icon_layout.push(IconPlacement { app_id, cell });
            }
        }
        SessionAction::MoveDesktopIcon { app_id, position } => {
            let metrics = grid_metrics(state.bounds(), state.icon_size);
            let cell = snap_to_cell(position, state.bounds(), metrics);
            if let Some(placement) = state
                .icon_layout
                .iter_mut()
                .find(|placement| placement.app_id == app_id)
            {
                placement.cell = cell;
            } else {
                state.icon_layout.push(IconPlacement { app_id, cell });
            }
        }
        SessionAction::SetMobileLayout { enabled } => {
            state.mobile_layout = enabled;
            if enabled {
                interaction.dragging = None;
                interaction.resizing = None;
                let bounds_rect = state.bounds().as_rect();
                for window in &mut state.windows {
                    if window.mode == WindowMode::Normal {
                        window.restore_rect = Some(window.rect);
                        window.rect = bounds_rect.clamped_min(window.min_w, window.min_h);
                        window.mode = WindowMode::Maximized;
                    }
                }
                effects.push(SessionEffect::PersistLayout);
            }
        }
        SessionAction::HydrateSnapshot { snapshot } => {
            let active_id = snapshot.active_background_id.clone();
            let restored = SessionState::from_snapshot(snapshot);
            state.windows = restored.windows;
            state.recent_apps = restored.recent_apps;
            state.taskbar = restored.taskbar;
            state.next_window_id = restored.next_window_id;
            if let Some(index) = state.backgrounds.iter().position(|b| b.id == active_id) {
                state.active_background = index;
            }
            normalize_stacking(state);
            apply_bounds_change(state);
        }
    }

    Ok(effects)
}

/// Opens a window for the request, reusing a live window for the same app.
///
/// Returns the id of the raised or newly created window.
fn open_app(state: &mut SessionState, request: OpenRequest) -> WindowId {
    if let Some(existing) = state.window_for_app(&request.app_id).map(|w| w.id) {
        // Idempotent open: un-minimize and raise, geometry untouched.
        let _ = bring_to_front(state, existing);
        return existing;
    }

    let window_id = WindowId(state.next_window_id);
    state.next_window_id = state.next_window_id.saturating_add(1);

    let n = state.windows.len() as i32;
    let (preferred_w, preferred_h) = request
        .preferred_size
        .unwrap_or((crate::model::DEFAULT_WINDOW_WIDTH, crate::model::DEFAULT_WINDOW_HEIGHT));
    let (min_w, min_h) = request
        .min_size
        .unwrap_or((crate::model::MIN_WINDOW_WIDTH, crate::model::MIN_WINDOW_HEIGHT));
    let rect = WindowRect {
        x: WINDOW_STAGGER_ORIGIN + n * WINDOW_STAGGER_STEP,
        y: WINDOW_STAGGER_ORIGIN + n * WINDOW_STAGGER_STEP,
        w: preferred_w,
        h: preferred_h,
    }
    .clamped_min(min_w, min_h);

    let mut window = WindowInstance {
        id: window_id,
        app_id: request.app_id.clone(),
        title: request.title,
        icon: request.icon,
        rect,
        restore_rect: None,
        z_index: state.max_z() + 1,
        mode: WindowMode::Normal,
        fullscreen: false,
        min_w,
        min_h,
    };
    if state.mobile_layout {
        window.restore_rect = Some(window.rect);
        window.rect = state.bounds().as_rect().clamped_min(min_w, min_h);
        window.mode = WindowMode::Maximized;
    }
    state.windows.push(window);
    state.recent_apps.record(&request.app_id);
    window_id
}

/// Assigns `max_z + 1` to the target only, leaving every other stacking key
/// untouched, and un-minimizes it. Stacking stays a total order with no ties.
fn bring_to_front(state: &mut SessionState, window_id: WindowId) -> Result<(), SessionError> {
    let next_z = state.max_z() + 1;
    let app_id = {
        let window = find_window_mut(state, window_id)?;
        window.z_index = next_z;
        if window.mode.is_minimized() {
            window.mode = WindowMode::Normal;
        }
        window.app_id.clone()
    };
    state.recent_apps.record(&app_id);
    Ok(())
}

fn find_window(state: &SessionState, window_id: WindowId) -> Result<&WindowInstance, SessionError> {
    state
        .windows
        .iter()
        .find(|w| w.id == window_id)
        .ok_or(SessionError::WindowNotFound)
}

fn find_window_mut(
    state: &mut SessionState,
    window_id: WindowId,
) -> Result<&mut WindowInstance, SessionError> {
    state
        .windows
        .iter_mut()
        .find(|w| w.id == window_id)
        .ok_or(SessionError::WindowNotFound)
}

/// Writes any pending gesture geometry through to the store.
fn commit_pending(state: &mut SessionState, interaction: &mut InteractionState) {
    if let Some(session) = interaction.dragging.as_ref() {
        if let (Some(rect), Ok(window)) = (session.pending, find_window_mut(state, session.window_id))
        {
            window.rect = rect;
        }
    }
    if let Some(session) = interaction.resizing.as_ref() {
        if let (Some(rect), Ok(window)) = (session.pending, find_window_mut(state, session.window_id))
        {
            window.rect = rect;
        }
    }
}

fn abandon_gestures_for(interaction: &mut InteractionState, window_id: WindowId) {
    if interaction
        .dragging
        .as_ref()
        .is_some_and(|session| session.window_id == window_id)
    {
        interaction.dragging = None;
    }
    if interaction
        .resizing
        .as_ref()
        .is_some_and(|session| session.window_id == window_id)
    {
        interaction.resizing = None;
    }
}

/// Re-clamps window geometry after the viewport or taskbar inset changed.
fn apply_bounds_change(state: &mut SessionState) {
    let bounds = state.bounds();
    let bounds_rect = bounds.as_rect();
    for window in &mut state.windows {
        match window.mode {
            WindowMode::Maximized => {
                window.rect = bounds_rect.clamped_min(window.min_w, window.min_h);
            }
            WindowMode::Normal | WindowMode::Minimized => {
                window.rect = clamp_rect_origin(window.rect, bounds);
            }
        }
    }
}

/// Reassigns dense stacking keys after hydration, preserving relative order.
///
/// Runtime focus changes never reindex; this only repairs snapshots carrying
/// stale or duplicated keys.
fn normalize_stacking(state: &mut SessionState) {
    state.windows.sort_by_key(|w| (w.z_index, w.id.0));
    for (idx, window) in state.windows.iter_mut().enumerate() {
        window.z_index = (idx + 1) as u32;
    }
}

/// Applies resize deltas for a given edge/corner drag.
fn resize_rect(start: WindowRect, edge: ResizeEdge, dx: i32, dy: i32) -> WindowRect {
    match edge {
        ResizeEdge::East => WindowRect {
            w: start.w + dx,
            ..start
        },
        ResizeEdge::West => WindowRect {
            x: start.x + dx,
            w: start.w - dx,
            ..start
        },
        ResizeEdge::South => WindowRect {
            h: start.h + dy,
            ..start
        },
        ResizeEdge::North => WindowRect {
            y: start.y + dy,
            h: start.h - dy,
            ..start
        },
        ResizeEdge::NorthEast => WindowRect {
            y: start.y + dy,
            h: start.h - dy,
            w: start.w + dx,
            ..start
        },
        ResizeEdge::NorthWest => WindowRect {
            x: start.x + dx,
            y: start.y + dy,
            w: start.w - dx,
            h: start.h - dy,
        },
        ResizeEdge::SouthEast => WindowRect {
            w: start.w + dx,
            h: start.h + dy,
            ..start
        },
        ResizeEdge::SouthWest => WindowRect {
            x: start.x + dx,
            w: start.w - dx,
            h: start.h + dy,
            ..start
        },
    }
}

/// Applies edge snap behavior for a dragged window released near a bound.
///
/// Releasing near the top maximizes; releasing near a side snaps to that half
/// of the usable bounds.
fn snap_window_to_bounds_edge(state: &mut SessionState, window_id: WindowId) {
    let bounds = state.bounds();
    let Some(window) = state.windows.iter_mut().find(|w| w.id == window_id) else {
        return;
    };
    if window.mode.is_minimized() {
        return;
    }

    let near_left = window.rect.x <= bounds.left + SNAP_EDGE_THRESHOLD;
    let near_right = window.rect.x + window.rect.w >= bounds.right - SNAP_EDGE_THRESHOLD;
    let near_top = window.rect.y <= bounds.top + SNAP_EDGE_THRESHOLD;

    if near_top {
        if !window.mode.is_maximized() {
            window.restore_rect = Some(window.rect);
        }
        window.rect = bounds.as_rect().clamped_min(window.min_w, window.min_h);
        window.mode = WindowMode::Maximized;
        return;
    }

    if !(near_left || near_right) {
        return;
    }

    let half_width = (bounds.width() / 2).max(window.min_w);
    let snapped = WindowRect {
        x: if near_right {
            bounds.right - half_width
        } else {
            bounds.left
        },
        y: bounds.top,
        w: half_width,
        h: bounds.height().max(window.min_h),
    };

    window.restore_rect = Some(window.rect);
    window.rect = snapped;
    window.mode = WindowMode::Normal;
}

#[cfg(test)]
mod tests {
    use desk_app_contract::AppId;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{TaskbarEdge, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};

    fn request(raw_id: &str) -> OpenRequest {
        OpenRequest {
            app_id: AppId::trusted(raw_id),
            title: raw_id.to_string(),
            icon: "folder".to_string(),
            preferred_size: None,
            min_size: None,
        }
    }

    fn sized_request(raw_id: &str, w: i32, h: i32) -> OpenRequest {
        OpenRequest {
            preferred_size: Some((w, h)),
            ..request(raw_id)
        }
    }

    fn open(
        state: &mut SessionState,
        interaction: &mut InteractionState,
        req: OpenRequest,
    ) -> WindowId {
        let _ = reduce_session(state, interaction, SessionAction::OpenApp(req)).expect("open app");
        state.focused_window_id().expect("focused window")
    }

    fn dispatch(
        state: &mut SessionState,
        interaction: &mut InteractionState,
        action: SessionAction,
    ) -> Vec<SessionEffect> {
        reduce_session(state, interaction, action).expect("reduce")
    }

    fn z_values(state: &SessionState) -> Vec<u32> {
        state.windows.iter().map(|w| w.z_index).collect()
    }

    fn assert_unique_z(state: &SessionState) {
        let mut zs = z_values(state);
        zs.sort_unstable();
        zs.dedup();
        assert_eq!(zs.len(), state.windows.len(), "duplicate stacking keys");
    }

    #[test]
    fn opening_creates_a_staggered_window_with_preferred_size() {
        let mut state = SessionState::default();
        let mut interaction = InteractionState::default();

        let id = open(&mut state, &mut interaction, sized_request("desk.files", 1000, 700));
        let window = state.window(id).expect("window");

        assert_eq!(window.rect, WindowRect { x: 50, y: 50, w: 1000, h: 700 });
        assert_eq!(window.z_index, 1);
        assert_eq!(window.mode, WindowMode::Normal);
        assert_eq!(state.recent_apps.as_slice(), &[AppId::trusted("desk.files")]);
    }

    #[test]
    fn default_size_falls_back_to_800_by_600() {
        let mut state = SessionState::default();
        let mut interaction = InteractionState::default();

        let id = open(&mut state, &mut interaction, request("desk.sheets"));
        let window = state.window(id).expect("window");
        assert_eq!((window.rect.w, window.rect.h), (DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT));
    }

    #[test]
    fn second_window_staggers_by_twenty_pixels() {
        let mut state = SessionState::default();
        let mut interaction = InteractionState::default();

        open(&mut state, &mut interaction, request("desk.files"));
        let second = open(&mut state, &mut interaction, request("desk.sheets"));
        let window = state.window(second).expect("window");
        assert_eq!((window.rect.x, window.rect.y), (70, 70));
    }

    #[test]
    fn reopening_an_app_raises_instead_of_duplicating() {
        let mut state = SessionState::default();
        let mut interaction = InteractionState::default();

        let first = open(&mut state, &mut interaction, sized_request("desk.files", 1000, 700));
        let before = state.window(first).expect("window").clone();
        let second = open(&mut state, &mut interaction, sized_request("desk.files", 1000, 700));

        assert_eq!(first, second);
        assert_eq!(state.windows.len(), 1);
        let after = state.window(first).expect("window");
        assert_eq!(after.rect, before.rect);
        assert!(after.z_index > before.z_index);
    }

    #[test]
    fn distinct_app_ids_open_distinct_windows() {
        let mut state = SessionState::default();
        let mut interaction = InteractionState::default();

        for raw in ["desk.files", "desk.sheets", "desk.crm", "desk.files", "desk.sheets"] {
            open(&mut state, &mut interaction, request(raw));
        }
        assert_eq!(state.windows.len(), 3);
        assert_unique_z(&state);
    }

    #[test]
    fn bring_to_front_assigns_max_plus_one_leaving_others_unchanged() {
        let mut state = SessionState::default();
        let mut interaction = InteractionState::default();

        let a = open(&mut state, &mut interaction, request("desk.files"));
        let b = open(&mut state, &mut interaction, request("desk.sheets"));
        assert_eq!(state.window(a).unwrap().z_index, 1);
        assert_eq!(state.window(b).unwrap().z_index, 2);

        dispatch(&mut state, &mut interaction, SessionAction::BringToFront { window_id: a });

        assert_eq!(state.window(a).unwrap().z_index, 3);
        assert_eq!(state.window(b).unwrap().z_index, 2);
        assert_eq!(state.focused_window_id(), Some(a));
        assert_unique_z(&state);
    }

    #[test]
    fn closing_removes_and_later_actions_do_not_resurrect() {
        let mut state = SessionState::default();
        let mut interaction = InteractionState::default();

        let id = open(&mut state, &mut interaction, request("desk.files"));
        let ghost = state.window(id).expect("window").clone();
        dispatch(&mut state, &mut interaction, SessionAction::CloseWindow { window_id: id });
        assert!(state.windows.is_empty());

        let update = reduce_session(
            &mut state,
            &mut interaction,
            SessionAction::UpdateWindow { window: ghost },
        );
        assert_eq!(update, Err(SessionError::WindowNotFound));
        let raise = reduce_session(
            &mut state,
            &mut interaction,
            SessionAction::BringToFront { window_id: id },
        );
        assert_eq!(raise, Err(SessionError::WindowNotFound));
        assert!(state.windows.is_empty());
    }

    #[test]
    fn closing_a_missing_window_is_an_error_without_state_change() {
        let mut state = SessionState::default();
        let mut interaction = InteractionState::default();
        let before = state.clone();

        let result = reduce_session(
            &mut state,
            &mut interaction,
            SessionAction::CloseWindow { window_id: WindowId(99) },
        );
        assert_eq!(result, Err(SessionError::WindowNotFound));
        assert_eq!(state, before);
    }

    #[test]
    fn update_window_replaces_wholesale() {
        let mut state = SessionState::default();
        let mut interaction = InteractionState::default();

        let id = open(&mut state, &mut interaction, request("desk.files"));
        let mut replacement = state.window(id).expect("window").clone();
        replacement.title = "Project Files".to_string();
        replacement.rect.x = 123;

        dispatch(
            &mut state,
            &mut interaction,
            SessionAction::UpdateWindow { window: replacement.clone() },
        );
        assert_eq!(state.window(id), Some(&replacement));
    }

    #[test]
    fn drag_updates_pending_only_until_committed() {
        let mut state = SessionState::default();
        let mut interaction = InteractionState::default();

        let id = open(&mut state, &mut interaction, request("desk.files"));
        let original = state.window(id).expect("window").rect;

        dispatch(
            &mut state,
            &mut interaction,
            SessionAction::BeginMove { window_id: id, pointer: PointerPosition { x: 60, y: 60 } },
        );
        dispatch(
            &mut state,
            &mut interaction,
            SessionAction::UpdateMove { pointer: PointerPosition { x: 85, y: 100 } },
        );

        assert_eq!(state.window(id).expect("window").rect, original);
        assert_eq!(
            interaction.pending_rect_for(id),
            Some(original.offset(25, 40))
        );

        dispatch(&mut state, &mut interaction, SessionAction::CommitInteraction);
        assert_eq!(state.window(id).expect("window").rect, original.offset(25, 40));
    }

    #[test]
    fn extreme_drag_commits_the_clamped_rect() {
        let mut state = SessionState::default();
        let mut interaction = InteractionState::default();
        state.viewport = WindowRect { x: 0, y: 0, w: 1280, h: 800 };
        state.taskbar = TaskbarSettings {
            edge: TaskbarEdge::Bottom,
            size_px: 68,
            ..TaskbarSettings::default()
        };

        let id = open(&mut state, &mut interaction, sized_request("desk.files", 400, 300));
        dispatch(
            &mut state,
            &mut interaction,
            SessionAction::BeginMove { window_id: id, pointer: PointerPosition { x: 0, y: 0 } },
        );
        dispatch(
            &mut state,
            &mut interaction,
            SessionAction::UpdateMove { pointer: PointerPosition { x: 2000, y: 2000 } },
        );
        dispatch(&mut state, &mut interaction, SessionAction::EndMove);

        let rect = state.window(id).expect("window").rect;
        assert_eq!((rect.x, rect.y), (880, 432));
    }

    #[test]
    fn moves_after_mid_gesture_close_are_no_ops() {
        let mut state = SessionState::default();
        let mut interaction = InteractionState::default();

        let id = open(&mut state, &mut interaction, request("desk.files"));
        dispatch(
            &mut state,
            &mut interaction,
            SessionAction::BeginMove { window_id: id, pointer: PointerPosition { x: 0, y: 0 } },
        );
        dispatch(&mut state, &mut interaction, SessionAction::CloseWindow { window_id: id });
        dispatch(
            &mut state,
            &mut interaction,
            SessionAction::UpdateMove { pointer: PointerPosition { x: 500, y: 500 } },
        );
        dispatch(&mut state, &mut interaction, SessionAction::EndMove);

        assert!(state.windows.is_empty());
        assert_eq!(interaction, InteractionState::default());
    }

    #[test]
    fn resize_clamps_to_window_minimums() {
        let mut state = SessionState::default();
        let mut interaction = InteractionState::default();

        let id = open(&mut state, &mut interaction, request("desk.files"));
        dispatch(
            &mut state,
            &mut interaction,
            SessionAction::BeginResize {
                window_id: id,
                edge: ResizeEdge::SouthEast,
                pointer: PointerPosition { x: 0, y: 0 },
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            SessionAction::UpdateResize { pointer: PointerPosition { x: -2000, y: -2000 } },
        );
        dispatch(&mut state, &mut interaction, SessionAction::EndResize);

        let window = state.window(id).expect("window");
        assert_eq!((window.rect.w, window.rect.h), (window.min_w, window.min_h));
    }

    #[test]
    fn maximize_fills_bounds_and_restore_returns_pre_maximize_geometry() {
        let mut state = SessionState::default();
        let mut interaction = InteractionState::default();

        let id = open(&mut state, &mut interaction, sized_request("desk.files", 400, 300));
        // Manual resize before maximizing; restore must return here.
        let mut resized = state.window(id).expect("window").clone();
        resized.rect = WindowRect { x: 120, y: 90, w: 520, h: 340 };
        dispatch(&mut state, &mut interaction, SessionAction::UpdateWindow { window: resized });

        dispatch(&mut state, &mut interaction, SessionAction::ToggleMaximize { window_id: id });
        let maximized = state.window(id).expect("window");
        assert_eq!(maximized.mode, WindowMode::Maximized);
        assert_eq!(maximized.rect, state.bounds().as_rect());

        dispatch(&mut state, &mut interaction, SessionAction::ToggleMaximize { window_id: id });
        let restored = state.window(id).expect("window");
        assert_eq!(restored.mode, WindowMode::Normal);
        assert_eq!(restored.rect, WindowRect { x: 120, y: 90, w: 520, h: 340 });
        assert_eq!(restored.restore_rect, None);
    }

    #[test]
    fn minimize_hides_and_restore_refocuses() {
        let mut state = SessionState::default();
        let mut interaction = InteractionState::default();

        let a = open(&mut state, &mut interaction, request("desk.files"));
        let b = open(&mut state, &mut interaction, request("desk.sheets"));

        dispatch(&mut state, &mut interaction, SessionAction::ToggleMinimize { window_id: b });
        assert_eq!(state.window(b).unwrap().mode, WindowMode::Minimized);
        assert_eq!(state.focused_window_id(), Some(a));

        dispatch(&mut state, &mut interaction, SessionAction::ToggleMinimize { window_id: b });
        assert_eq!(state.window(b).unwrap().mode, WindowMode::Normal);
        assert_eq!(state.focused_window_id(), Some(b));
        assert_unique_z(&state);
    }

    #[test]
    fn minimizing_a_maximized_window_restores_normal_geometry_on_return() {
        let mut state = SessionState::default();
        let mut interaction = InteractionState::default();

        let id = open(&mut state, &mut interaction, sized_request("desk.files", 400, 300));
        let original = state.window(id).expect("window").rect;

        dispatch(&mut state, &mut interaction, SessionAction::ToggleMaximize { window_id: id });
        dispatch(&mut state, &mut interaction, SessionAction::ToggleMinimize { window_id: id });
        let minimized = state.window(id).expect("window");
        assert_eq!(minimized.mode, WindowMode::Minimized);

        dispatch(&mut state, &mut interaction, SessionAction::ToggleMinimize { window_id: id });
        let back = state.window(id).expect("window");
        assert_eq!(back.mode, WindowMode::Normal);
        assert_eq!(back.rect, original);
    }

    #[test]
    fn taskbar_toggle_cycles_restore_minimize_focus() {
        let mut state = SessionState::default();
        let mut interaction = InteractionState::default();

        let a = open(&mut state, &mut interaction, request("desk.files"));
        let b = open(&mut state, &mut interaction, request("desk.sheets"));

        // Focused window minimizes.
        dispatch(&mut state, &mut interaction, SessionAction::ToggleTaskbarWindow { window_id: b });
        assert_eq!(state.window(b).unwrap().mode, WindowMode::Minimized);

        // Unfocused window focuses.
        dispatch(&mut state, &mut interaction, SessionAction::BringToFront { window_id: a });
        dispatch(&mut state, &mut interaction, SessionAction::ToggleTaskbarWindow { window_id: b });
        assert_eq!(state.window(b).unwrap().mode, WindowMode::Normal);
        assert_eq!(state.focused_window_id(), Some(b));
    }

    #[test]
    fn fullscreen_toggle_emits_host_effects_and_close_exits() {
        let mut state = SessionState::default();
        let mut interaction = InteractionState::default();

        let id = open(&mut state, &mut interaction, request("desk.files"));
        let effects = dispatch(
            &mut state,
            &mut interaction,
            SessionAction::ToggleFullscreen { window_id: id },
        );
        assert_eq!(effects, vec![SessionEffect::EnterFullscreen(id)]);
        assert!(state.window(id).unwrap().fullscreen);

        let effects = dispatch(
            &mut state,
            &mut interaction,
            SessionAction::ToggleFullscreen { window_id: id },
        );
        assert_eq!(effects, vec![SessionEffect::ExitFullscreen(id)]);

        dispatch(&mut state, &mut interaction, SessionAction::ToggleFullscreen { window_id: id });
        let effects = dispatch(
            &mut state,
            &mut interaction,
            SessionAction::CloseWindow { window_id: id },
        );
        assert!(effects.contains(&SessionEffect::ExitFullscreen(id)));
    }

    #[test]
    fn mobile_layout_maximizes_windows_and_suppresses_gestures() {
        let mut state = SessionState::default();
        let mut interaction = InteractionState::default();

        let id = open(&mut state, &mut interaction, request("desk.files"));
        dispatch(&mut state, &mut interaction, SessionAction::SetMobileLayout { enabled: true });
        assert_eq!(state.window(id).unwrap().mode, WindowMode::Maximized);

        dispatch(
            &mut state,
            &mut interaction,
            SessionAction::BeginMove { window_id: id, pointer: PointerPosition { x: 0, y: 0 } },
        );
        assert_eq!(interaction.dragging, None);

        let second = open(&mut state, &mut interaction, request("desk.sheets"));
        assert_eq!(state.window(second).unwrap().mode, WindowMode::Maximized);
    }

    #[test]
    fn drag_end_near_top_edge_maximizes() {
        let mut state = SessionState::default();
        let mut interaction = InteractionState::default();

        let id = open(&mut state, &mut interaction, sized_request("desk.files", 400, 300));
        dispatch(
            &mut state,
            &mut interaction,
            SessionAction::BeginMove { window_id: id, pointer: PointerPosition { x: 60, y: 60 } },
        );
        dispatch(
            &mut state,
            &mut interaction,
            SessionAction::UpdateMove { pointer: PointerPosition { x: 200, y: 12 } },
        );
        dispatch(&mut state, &mut interaction, SessionAction::EndMove);

        let window = state.window(id).expect("window");
        assert_eq!(window.mode, WindowMode::Maximized);
        assert!(window.restore_rect.is_some());
    }

    #[test]
    fn drag_end_near_left_edge_snaps_to_half() {
        let mut state = SessionState::default();
        let mut interaction = InteractionState::default();
        state.viewport = WindowRect { x: 0, y: 0, w: 1000, h: 748 };
        state.taskbar = TaskbarSettings {
            edge: TaskbarEdge::Bottom,
            size_px: 48,
            ..TaskbarSettings::default()
        };

        let id = open(&mut state, &mut interaction, sized_request("desk.files", 400, 300));
        dispatch(
            &mut state,
            &mut interaction,
            SessionAction::BeginMove { window_id: id, pointer: PointerPosition { x: 60, y: 60 } },
        );
        dispatch(
            &mut state,
            &mut interaction,
            SessionAction::UpdateMove { pointer: PointerPosition { x: -45, y: 160 } },
        );
        dispatch(&mut state, &mut interaction, SessionAction::EndMove);

        let window = state.window(id).expect("window");
        assert_eq!(window.mode, WindowMode::Normal);
        assert_eq!(window.rect, WindowRect { x: 0, y: 0, w: 500, h: 700 });
    }

    #[test]
    fn viewport_resize_reclamps_windows_and_refills_maximized() {
        let mut state = SessionState::default();
        let mut interaction = InteractionState::default();

        let a = open(&mut state, &mut interaction, sized_request("desk.files", 400, 300));
        let b = open(&mut state, &mut interaction, sized_request("desk.sheets", 400, 300));
        dispatch(&mut state, &mut interaction, SessionAction::ToggleMaximize { window_id: b });

        dispatch(
            &mut state,
            &mut interaction,
            SessionAction::ViewportResized {
                viewport: WindowRect { x: 0, y: 0, w: 640, h: 480 },
            },
        );

        let bounds = state.bounds();
        let a_rect = state.window(a).unwrap().rect;
        assert!(a_rect.x + a_rect.w <= bounds.right || a_rect.x == bounds.left);
        assert_eq!(state.window(b).unwrap().rect, bounds.as_rect());
    }

    #[test]
    fn hydration_normalizes_stale_stacking_keys() {
        let mut state = SessionState::default();
        let mut interaction = InteractionState::default();

        open(&mut state, &mut interaction, request("desk.files"));
        open(&mut state, &mut interaction, request("desk.sheets"));
        let mut snapshot = state.snapshot();
        for window in &mut snapshot.windows {
            window.z_index = 7;
        }

        let mut fresh = SessionState::default();
        dispatch(&mut fresh, &mut interaction, SessionAction::HydrateSnapshot { snapshot });
        assert_unique_z(&fresh);
        assert_eq!(fresh.next_window_id, 3);
    }

    #[test]
    fn start_menu_closes_when_an_app_opens() {
        let mut state = SessionState::default();
        let mut interaction = InteractionState::default();

        dispatch(&mut state, &mut interaction, SessionAction::ToggleStartMenu);
        assert!(state.start_menu_open);
        open(&mut state, &mut interaction, request("desk.files"));
        assert!(!state.start_menu_open);
    }

    #[test]
    fn background_cycling_wraps_and_filters() {
        let mut state = SessionState::default();
        let mut interaction = InteractionState::default();

        dispatch(
            &mut state,
            &mut interaction,
            SessionAction::SetBackgrounds {
                backgrounds: vec![
                    DesktopBackground::everything(),
                    DesktopBackground {
                        id: "focus".to_string(),
                        name: "Focus".to_string(),
                        wallpaper_id: "slate".to_string(),
                        app_ids: vec![AppId::trusted("desk.files")],
                    },
                ],
            },
        );

        dispatch(&mut state, &mut interaction, SessionAction::CycleBackground);
        assert_eq!(state.active_background(), state.backgrounds[1].clone());
        assert!(!state.background_allows(&AppId::trusted("desk.sheets"), false));

        dispatch(&mut state, &mut interaction, SessionAction::CycleBackground);
        assert_eq!(state.active_background, 0);
    }

    #[test]
    fn icon_placement_is_sticky_and_first_fit() {
        let mut state = SessionState::default();
        let mut interaction = InteractionState::default();
        let files = AppId::trusted("desk.files");
        let sheets = AppId::trusted("desk.sheets");

        dispatch(
            &mut state,
            &mut interaction,
            SessionAction::PlaceDesktopIcons { app_ids: vec![files.clone(), sheets.clone()] },
        );
        let first = state.icon_cell(&files).expect("placed");
        let second = state.icon_cell(&sheets).expect("placed");
        assert_ne!(first, second);

        // Re-running placement never recomputes assigned cells.
        dispatch(
            &mut state,
            &mut interaction,
            SessionAction::PlaceDesktopIcons { app_ids: vec![files.clone(), sheets.clone()] },
        );
        assert_eq!(state.icon_cell(&files), Some(first));

        dispatch(
            &mut state,
            &mut interaction,
            SessionAction::MoveDesktopIcon {
                app_id: files.clone(),
                position: PointerPosition { x: 400, y: 260 },
            },
        );
        assert_ne!(state.icon_cell(&files), Some(first));
    }

    #[test]
    fn set_active_background_clamps_to_the_configured_list() {
        let mut state = SessionState::default();
        let mut interaction = InteractionState::default();

        dispatch(
            &mut state,
            &mut interaction,
            SessionAction::SetActiveBackground { index: 42 },
        );
        assert_eq!(state.active_background, 0);
    }

    #[test]
    fn shrinking_the_icon_preset_keeps_placements_inside_the_grid() {
        let mut state = SessionState::default();
        let mut interaction = InteractionState::default();
        state.viewport = WindowRect { x: 0, y: 0, w: 400, h: 300 };
        state.icon_layout.push(IconPlacement {
            app_id: AppId::trusted("desk.files"),
            cell: crate::icon_grid::GridCell { col: 30, row: 30 },
        });

        dispatch(
            &mut state,
            &mut interaction,
            SessionAction::SetIconSize { preset: IconSizePreset::Large },
        );

        let metrics = grid_metrics(state.bounds(), state.icon_size);
        let cell = state.icon_cell(&AppId::trusted("desk.files")).expect("placed");
        assert!(cell.col < metrics.columns && cell.row < metrics.rows);
    }

    #[test]
    fn is_app_open_tracks_the_registry() {
        let mut state = SessionState::default();
        let mut interaction = InteractionState::default();
        let files = AppId::trusted("desk.files");

        assert!(!state.is_app_open(&files));
        let id = open(&mut state, &mut interaction, request("desk.files"));
        assert!(state.is_app_open(&files));
        dispatch(&mut state, &mut interaction, SessionAction::CloseWindow { window_id: id });
        assert!(!state.is_app_open(&files));
    }

    #[test]
    fn stacking_keys_stay_unique_across_a_mixed_action_burst() {
        let mut state = SessionState::default();
        let mut interaction = InteractionState::default();

        let a = open(&mut state, &mut interaction, request("desk.files"));
        let b = open(&mut state, &mut interaction, request("desk.sheets"));
        let c = open(&mut state, &mut interaction, request("desk.crm"));

        for target in [a, c, b, a, b, c, a] {
            dispatch(&mut state, &mut interaction, SessionAction::BringToFront { window_id: target });
            assert_unique_z(&state);
            assert_eq!(state.focused_window_id(), Some(target));
        }
    }
}
