use super::*;
use desk_app_contract::AppDescriptor;
use desk_session::{cell_origin, grid_metrics};
use desk_ui::{DesktopIconButton, DesktopIconGrid, Icon, IconSize};

#[component]
pub(super) fn DesktopIconsSurface(
    /// App whose icon is mid-drag; the shell root snaps it on pointer up.
    icon_drag: RwSignal<Option<AppId>>,
) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    view! {
        <DesktopIconGrid
            icon_size=Signal::derive(move || state.get().icon_size.token().to_string())
        >
            <For
                each=move || apps::visible_desktop_apps(&state.get())
                key=|app| app.id.to_string()
                let:app
            >
                <DesktopIcon app=app icon_drag=icon_drag />
            </For>
        </DesktopIconGrid>
    }
}

#[component]
fn DesktopIcon(
    app: &'static AppDescriptor,
    icon_drag: RwSignal<Option<AppId>>,
) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let app_id = app.id.clone();

    let position_style = {
        let app_id = app_id.clone();
        Signal::derive(move || {
            let session = state.get();
            let bounds = session.bounds();
            let metrics = grid_metrics(bounds, session.icon_size);
            match session.icon_cell(&app_id) {
                Some(cell) => {
                    let (x, y) = cell_origin(cell, bounds, metrics);
                    format!("left:{x}px;top:{y}px;")
                }
                // Placement runs right after the app becomes visible.
                None => "visibility:hidden;".to_string(),
            }
        })
    };
    let open_marker = {
        let app_id = app_id.clone();
        Signal::derive(move || state.get().is_app_open(&app_id))
    };
    let launch = Callback::new(move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(SessionAction::OpenApp(apps::open_request(app)));
    });
    let begin_icon_drag = Callback::new(move |ev: web_sys::PointerEvent| {
        if ev.pointer_type() == "mouse" && ev.button() != 0 {
            return;
        }
        runtime.dispatch_action(SessionAction::CloseStartMenu);
        icon_drag.set(Some(app_id.clone()));
    });

    view! {
        <DesktopIconButton
            style=position_style
            title=app.name.to_string()
            aria_label=format!("Open {}", app.name)
            open=open_marker
            on_dblclick=launch
            on_pointerdown=begin_icon_drag
        >
            <Icon icon=apps::icon_for_key(app.icon) size=IconSize::Lg />
            <span class="desk-icon-label">{app.name}</span>
        </DesktopIconButton>
    }
}
