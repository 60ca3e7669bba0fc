//! Browser host boundary for the desktop runtime.
//!
//! Keeps reducer semantics free of DOM concerns: viewport queries, focus
//! hand-off, native fullscreen, frame-commit scheduling, and the layout sink
//! all live behind this typed boundary so they can be injected and mocked.

use std::cell::Cell;
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use desk_app_contract::{window_frame_dom_id, window_input_dom_id};
use desk_session::{SessionSnapshot, WindowId, WindowRect};
use leptos::{logging, Callable, Callback};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

/// Viewport width below which the shell switches to the mobile layout.
pub const MOBILE_LAYOUT_BREAKPOINT: i32 = 768;

/// Receiver for layout snapshots emitted by the `PersistLayout` effect.
///
/// Durable storage is an external collaborator; the shell only hands the
/// snapshot over. The default sink logs and drops it.
pub trait LayoutSink {
    /// Accepts the latest session snapshot.
    fn persist(&self, snapshot: &SessionSnapshot);
}

/// Default sink: serializes the snapshot for the console and drops it.
pub struct ConsoleLayoutSink;

impl LayoutSink for ConsoleLayoutSink {
    fn persist(&self, snapshot: &SessionSnapshot) {
        match serde_json::to_string(snapshot) {
            Ok(payload) => logging::log!(
                "layout snapshot: {} windows, {} bytes",
                snapshot.windows.len(),
                payload.len()
            ),
            Err(err) => logging::warn!("layout snapshot serialize failed: {err}"),
        }
    }
}

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects and environment queries.
pub struct DesktopHostContext {
    layout_sink: Rc<dyn LayoutSink>,
    frame_scheduled: Rc<Cell<bool>>,
}

impl Default for DesktopHostContext {
    fn default() -> Self {
        Self::with_layout_sink(Rc::new(ConsoleLayoutSink))
    }
}

impl DesktopHostContext {
    /// Builds a host bundle around an injected layout sink.
    pub fn with_layout_sink(layout_sink: Rc<dyn LayoutSink>) -> Self {
        Self {
            layout_sink,
            frame_scheduled: Rc::new(Cell::new(false)),
        }
    }

    /// Returns the configured layout sink.
    pub fn layout_sink(&self) -> Rc<dyn LayoutSink> {
        self.layout_sink.clone()
    }

    /// Current viewport rect reported by the browser.
    pub fn viewport_rect(&self) -> WindowRect {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let w = window
                    .inner_width()
                    .ok()
                    .and_then(|value| value.as_f64())
                    .unwrap_or(1280.0) as i32;
                let h = window
                    .inner_height()
                    .ok()
                    .and_then(|value| value.as_f64())
                    .unwrap_or(800.0) as i32;
                return WindowRect { x: 0, y: 0, w, h };
            }
        }

        WindowRect {
            x: 0,
            y: 0,
            w: 1280,
            h: 800,
        }
    }

    /// Whether the current viewport should use the forced-maximized mobile
    /// layout.
    pub fn prefers_mobile_layout(&self) -> bool {
        self.viewport_rect().w < MOBILE_LAYOUT_BREAKPOINT
    }

    /// Schedules `commit` for the next animation frame, coalescing repeat
    /// requests so pointer-move bursts commit at most once per frame.
    pub fn schedule_frame_commit(&self, commit: Callback<()>) {
        #[cfg(target_arch = "wasm32")]
        {
            if self.frame_scheduled.get() {
                return;
            }
            let Some(window) = web_sys::window() else {
                commit.call(());
                return;
            };
            self.frame_scheduled.set(true);
            let gate = self.frame_scheduled.clone();
            let handler = Closure::once_into_js(move || {
                gate.set(false);
                commit.call(());
            });
            if window
                .request_animation_frame(handler.unchecked_ref())
                .is_err()
            {
                self.frame_scheduled.set(false);
                commit.call(());
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = &self.frame_scheduled;
            commit.call(());
        }
    }

    /// Moves focus to the window's primary input, falling back to the frame.
    ///
    /// Deferred a tick so freshly opened windows are mounted before focusing.
    pub fn focus_window_input(&self, window_id: WindowId) {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let input_id = window_input_dom_id(window_id.0);
            let frame_id = window_frame_dom_id(window_id.0);
            let callback = Closure::once_into_js(move || {
                let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                    return;
                };
                let element = document
                    .get_element_by_id(&input_id)
                    .or_else(|| document.get_element_by_id(&frame_id));
                if let Some(element) = element {
                    if let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() {
                        let _ = element.focus();
                    }
                }
            });
            let _ = window
                .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
        }

        #[cfg(not(target_arch = "wasm32"))]
        let _ = window_id;
    }

    /// Best-effort native fullscreen request for the window's frame element.
    ///
    /// Failure is cosmetic: it is logged and the shell stays in its prior
    /// state.
    pub fn enter_fullscreen(&self, window_id: WindowId) {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let frame_id = window_frame_dom_id(window_id.0);
            match document.get_element_by_id(&frame_id) {
                Some(element) => {
                    if let Err(err) = element.request_fullscreen() {
                        logging::warn!("fullscreen request failed: {err:?}");
                    }
                }
                None => logging::warn!("fullscreen target missing: {frame_id}"),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        let _ = window_id;
    }

    /// Best-effort native fullscreen exit.
    pub fn exit_fullscreen(&self) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                document.exit_fullscreen();
            }
        }
    }
}
