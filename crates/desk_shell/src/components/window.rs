use super::*;
use desk_app_contract::{window_frame_dom_id, window_input_dom_id, RenderTarget};
use desk_session::WindowInstance;
use desk_ui::{
    Icon, IconName, IconSize, ResizeHandle, WindowControlButton, WindowControls, WindowFrame,
    WindowTitle, WindowTitleBar,
};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let window = Signal::derive(move || {
        runtime
            .state
            .get()
            .windows
            .into_iter()
            .find(|w| w.id == window_id)
    });

    let focus = move |_ev: web_sys::PointerEvent| {
        let already_focused =
            runtime.state.get_untracked().focused_window_id() == Some(window_id);
        if window.get_untracked().is_some() && !already_focused {
            runtime.dispatch_action(SessionAction::BringToFront { window_id });
        }
    };
    let minimize = move |_| {
        runtime.dispatch_action(SessionAction::ToggleMinimize { window_id });
    };
    let close = move |_| {
        runtime.dispatch_action(SessionAction::CloseWindow { window_id });
    };
    let toggle_maximize = move |_| {
        runtime.dispatch_action(SessionAction::ToggleMaximize { window_id });
    };
    let toggle_fullscreen = move |_| {
        runtime.dispatch_action(SessionAction::ToggleFullscreen { window_id });
    };
    let begin_move = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(SessionAction::BeginMove {
            window_id,
            pointer: pointer_from_pointer_event(&ev),
        });
    };
    let titlebar_double_click = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(SessionAction::ToggleMaximize { window_id });
    };

    view! {
        <Show when=move || window.get().is_some() fallback=|| ()>
            {move || {
                let win = window.get().expect("window exists while shown");
                // Live gestures render the pending rect; the store commit
                // happens once per frame.
                let rect = runtime
                    .interaction
                    .get()
                    .pending_rect_for(win.id)
                    .unwrap_or(win.rect);
                let style = format!(
                    "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
                    rect.x, rect.y, rect.w, rect.h, win.z_index
                );
                let focused = runtime.state.get().focused_window_id() == Some(win.id);
                let resizable = win.mode == WindowMode::Normal
                    && !runtime.state.get().mobile_layout;
                let title = win.title.clone();
                let icon = apps::icon_for_key(&win.icon);

                view! {
                    <WindowFrame
                        id=window_frame_dom_id(win.id.0)
                        style=style
                        aria_label=title.clone()
                        focused=focused
                        mode=window_mode_token(win.mode).to_string()
                        on_pointerdown=Callback::new(focus)
                    >
                        <WindowTitleBar
                            on_pointerdown=Callback::new(begin_move)
                            on_dblclick=Callback::new(titlebar_double_click)
                        >
                            <WindowTitle>
                                <Icon icon=icon size=IconSize::Sm />
                                <span>{title}</span>
                            </WindowTitle>
                            <WindowControls>
                                <TitlebarControl
                                    aria_label="Minimize window"
                                    icon=IconName::WindowMinimize
                                    on_activate=Callback::new(minimize)
                                />
                                <TitlebarControl
                                    aria_label="Toggle fullscreen"
                                    icon=IconName::FullscreenExpand
                                    on_activate=Callback::new(toggle_fullscreen)
                                />
                                <TitlebarControl
                                    aria_label=if win.mode.is_maximized() {
                                        "Restore window"
                                    } else {
                                        "Maximize window"
                                    }
                                    icon=if win.mode.is_maximized() {
                                        IconName::WindowRestore
                                    } else {
                                        IconName::WindowMaximize
                                    }
                                    on_activate=Callback::new(toggle_maximize)
                                />
                                <TitlebarControl
                                    aria_label="Close window"
                                    icon=IconName::Dismiss
                                    on_activate=Callback::new(close)
                                />
                            </WindowControls>
                        </WindowTitleBar>
                        <div
                            class="desk-window-body"
                            id=window_input_dom_id(win.id.0)
                            tabindex="-1"
                        >
                            {render_window_body(&win)}
                        </div>
                        {if resizable {
                            view! {
                                <>
                                    <WindowResizeHandle window_id=win.id edge=ResizeEdge::North />
                                    <WindowResizeHandle window_id=win.id edge=ResizeEdge::South />
                                    <WindowResizeHandle window_id=win.id edge=ResizeEdge::East />
                                    <WindowResizeHandle window_id=win.id edge=ResizeEdge::West />
                                    <WindowResizeHandle window_id=win.id edge=ResizeEdge::NorthEast />
                                    <WindowResizeHandle window_id=win.id edge=ResizeEdge::NorthWest />
                                    <WindowResizeHandle window_id=win.id edge=ResizeEdge::SouthEast />
                                    <WindowResizeHandle window_id=win.id edge=ResizeEdge::SouthWest />
                                </>
                            }
                            .into_view()
                        } else {
                            ().into_view()
                        }}
                    </WindowFrame>
                }
                .into_view()
            }}
        </Show>
    }
}

#[component]
fn TitlebarControl(
    aria_label: &'static str,
    icon: IconName,
    on_activate: Callback<web_sys::MouseEvent>,
) -> impl IntoView {
    view! {
        <WindowControlButton
            aria_label=aria_label.to_string()
            on_pointerdown=Callback::new(move |ev: web_sys::PointerEvent| {
                ev.prevent_default();
                ev.stop_propagation();
            })
            on_mousedown=Callback::new(move |ev: web_sys::MouseEvent| stop_mouse_event(&ev))
            on_click=Callback::new(move |ev: web_sys::MouseEvent| {
                stop_mouse_event(&ev);
                on_activate.call(ev);
            })
        >
            <Icon icon=icon size=IconSize::Xs />
        </WindowControlButton>
    }
}

#[component]
fn WindowResizeHandle(window_id: WindowId, edge: ResizeEdge) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let on_pointerdown = Callback::new(move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(SessionAction::BeginResize {
            window_id,
            edge,
            pointer: pointer_from_pointer_event(&ev),
        });
    });

    view! { <ResizeHandle edge=resize_edge_token(edge) on_pointerdown=on_pointerdown /> }
}

/// Mounts the opaque render target for the window's app.
///
/// The frame never inspects app content: local targets render inline, remote
/// targets load in a sandboxed embed, and uninstalled apps get a notice.
fn render_window_body(win: &WindowInstance) -> View {
    match apps::descriptor_by_id(&win.app_id).map(|app| app.render) {
        Some(RenderTarget::Component(render)) => render(),
        Some(RenderTarget::RemoteUrl(url)) => view! {
            <iframe
                class="desk-remote-app"
                src=url
                sandbox="allow-scripts allow-same-origin"
                title=win.title.clone()
            ></iframe>
        }
        .into_view(),
        None => view! { <p>"This application is no longer installed."</p> }.into_view(),
    }
}
