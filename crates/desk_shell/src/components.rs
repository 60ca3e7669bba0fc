//! Desktop shell UI composition and interaction surfaces.

mod icons_surface;
mod taskbar;
mod window;

use desk_app_contract::AppId;
use desk_session::{
    PointerPosition, ResizeEdge, SessionAction, SessionState, TaskbarEdge, WindowId, WindowMode,
};
use desk_ui::{DesktopBackdrop, DesktopWindowLayer};
use leptos::*;

use self::{icons_surface::DesktopIconsSurface, taskbar::StartMenu, taskbar::TaskbarView};
use crate::{
    apps,
    context::{use_desktop_runtime, DesktopRuntimeContext},
};
use window::DesktopWindow;

#[component]
/// Renders the full desktop shell: backdrop, icon surface, window layer,
/// taskbar, and start menu.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let icon_drag = create_rw_signal(None::<AppId>);

    let resize_listener = window_event_listener(ev::resize, move |_| {
        let environment = runtime.host.get_value();
        runtime.dispatch_action(SessionAction::ViewportResized {
            viewport: environment.viewport_rect(),
        });
        let mobile = environment.prefers_mobile_layout();
        if mobile != runtime.state.get_untracked().mobile_layout {
            runtime.dispatch_action(SessionAction::SetMobileLayout { enabled: mobile });
        }
    });
    on_cleanup(move || resize_listener.remove());

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() || ev.key() != "Escape" {
            return;
        }
        if runtime.state.get_untracked().start_menu_open {
            ev.prevent_default();
            runtime.dispatch_action(SessionAction::CloseStartMenu);
        }
    });
    on_cleanup(move || escape_listener.remove());

    // First-fit placement for desktop icons whenever unpositioned apps appear.
    create_effect(move |_| {
        let session = state.get();
        let visible: Vec<AppId> = apps::visible_desktop_apps(&session)
            .iter()
            .map(|app| app.id.clone())
            .collect();
        if visible.iter().any(|id| session.icon_cell(id).is_none()) {
            runtime.dispatch_action(SessionAction::PlaceDesktopIcons { app_ids: visible });
        }
    });

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        let gesture = runtime.interaction.get_untracked();
        if gesture.dragging.is_none() && gesture.resizing.is_none() {
            return;
        }
        let pointer = pointer_from_pointer_event(&ev);
        if gesture.dragging.is_some() {
            runtime.dispatch_action(SessionAction::UpdateMove { pointer });
        }
        if gesture.resizing.is_some() {
            runtime.dispatch_action(SessionAction::UpdateResize { pointer });
        }
        // Pending geometry is committed at most once per animation frame.
        runtime
            .host
            .get_value()
            .schedule_frame_commit(Callback::new(move |_| {
                runtime.dispatch_action(SessionAction::CommitInteraction);
            }));
    };
    let on_pointer_end = move |ev: web_sys::PointerEvent| {
        if let Some(app_id) = icon_drag.get_untracked() {
            icon_drag.set(None);
            runtime.dispatch_action(SessionAction::MoveDesktopIcon {
                app_id,
                position: pointer_from_pointer_event(&ev),
            });
        }
        end_active_pointer_interaction(runtime);
    };

    view! {
        <div
            id="desk-shell-root"
            class="desk-shell"
            tabindex="-1"
            data-ui-kind="desktop-root"
            data-taskbar-edge=move || taskbar_edge_token(state.get().taskbar.edge).to_string()
            data-mobile=move || state.get().mobile_layout.to_string()
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
        >
            <DesktopBackdrop
                wallpaper=Signal::derive(move || state.get().active_background().wallpaper_id)
            >
                <DesktopIconsSurface icon_drag=icon_drag />
                <DesktopWindowLayer>
                    <For each=move || state.get().windows key=|win| win.id.0 let:win>
                        <DesktopWindow window_id=win.id />
                    </For>
                </DesktopWindowLayer>
            </DesktopBackdrop>
            <StartMenu />
            <TaskbarView />
        </div>
    }
}

pub(crate) fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

pub(crate) fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn end_active_pointer_interaction(runtime: DesktopRuntimeContext) {
    let gesture = runtime.interaction.get_untracked();
    if gesture.dragging.is_some() {
        runtime.dispatch_action(SessionAction::EndMove);
    }
    if gesture.resizing.is_some() {
        runtime.dispatch_action(SessionAction::EndResize);
    }
}

pub(crate) fn taskbar_edge_token(edge: TaskbarEdge) -> &'static str {
    match edge {
        TaskbarEdge::Top => "top",
        TaskbarEdge::Bottom => "bottom",
        TaskbarEdge::Left => "left",
        TaskbarEdge::Right => "right",
    }
}

pub(crate) fn window_mode_token(mode: WindowMode) -> &'static str {
    match mode {
        WindowMode::Normal => "normal",
        WindowMode::Minimized => "minimized",
        WindowMode::Maximized => "maximized",
    }
}

pub(crate) fn resize_edge_token(edge: ResizeEdge) -> &'static str {
    match edge {
        ResizeEdge::North => "n",
        ResizeEdge::South => "s",
        ResizeEdge::East => "e",
        ResizeEdge::West => "w",
        ResizeEdge::NorthEast => "ne",
        ResizeEdge::NorthWest => "nw",
        ResizeEdge::SouthEast => "se",
        ResizeEdge::SouthWest => "sw",
    }
}
