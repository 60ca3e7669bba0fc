use super::*;
use desk_app_contract::AppDescriptor;
use desk_session::WindowInstance;
use desk_ui::{
    Icon, IconName, IconSize, LauncherItem, LauncherMenu, LauncherSectionLabel, TaskbarButton,
    TaskbarSection, TaskbarShell,
};

#[component]
pub(super) fn TaskbarView() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let taskbar_style = Signal::derive(move || {
        let taskbar = state.get().taskbar;
        let opacity = f64::from(taskbar.opacity_percent) / 100.0;
        match taskbar.edge {
            TaskbarEdge::Top | TaskbarEdge::Bottom => {
                format!("height:{}px;opacity:{opacity};", taskbar.size_px)
            }
            TaskbarEdge::Left | TaskbarEdge::Right => {
                format!("width:{}px;opacity:{opacity};", taskbar.size_px)
            }
        }
    });
    let edge = Signal::derive(move || taskbar_edge_token(state.get().taskbar.edge).to_string());
    let autohide = Signal::derive(move || state.get().taskbar.autohide);

    view! {
        <TaskbarShell edge=edge autohide=autohide style=taskbar_style>
            <TaskbarSection ui_slot="start">
                <TaskbarButton
                    aria_label="Open app launcher".to_string()
                    pressed=Signal::derive(move || state.get().start_menu_open)
                    on_click=Callback::new(move |ev: web_sys::MouseEvent| {
                        stop_mouse_event(&ev);
                        runtime.dispatch_action(SessionAction::ToggleStartMenu);
                    })
                >
                    <Icon icon=IconName::Launcher size=IconSize::Sm />
                </TaskbarButton>
            </TaskbarSection>
            <TaskbarSection ui_slot="windows">
                <For each=move || state.get().ordered_windows() key=|win| win.id.0 let:win>
                    <TaskbarWindowButton window=win />
                </For>
            </TaskbarSection>
            <TaskbarSection ui_slot="tray">
                <span class="desk-tray-count" title="Open windows">
                    <Icon icon=IconName::WindowMultiple size=IconSize::Sm />
                    <span>{move || state.get().windows.len()}</span>
                </span>
                <TaskbarButton
                    aria_label="Cycle desktop background".to_string()
                    on_click=Callback::new(move |ev: web_sys::MouseEvent| {
                        stop_mouse_event(&ev);
                        runtime.dispatch_action(SessionAction::CycleBackground);
                    })
                >
                    <span>{move || state.get().active_background().name}</span>
                </TaskbarButton>
            </TaskbarSection>
        </TaskbarShell>
    }
}

#[component]
fn TaskbarWindowButton(window: WindowInstance) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let window_id = window.id;
    let aria_label = window_button_aria_label(&window);
    let icon = apps::icon_for_key(&window.icon);

    let active = Signal::derive(move || state.get().focused_window_id() == Some(window_id));
    let pressed = Signal::derive(move || {
        state
            .get()
            .window(window_id)
            .map(|w| !w.mode.is_minimized())
            .unwrap_or(false)
    });

    view! {
        <TaskbarButton
            aria_label=aria_label
            active=active
            pressed=pressed
            on_click=Callback::new(move |ev: web_sys::MouseEvent| {
                stop_mouse_event(&ev);
                runtime.dispatch_action(SessionAction::ToggleTaskbarWindow { window_id });
            })
        >
            <Icon icon=icon size=IconSize::Sm />
            <span class="desk-taskbar-button-title">{window.title.clone()}</span>
        </TaskbarButton>
    }
}

fn window_button_aria_label(window: &WindowInstance) -> String {
    let mut parts = vec![window.title.clone()];
    match window.mode {
        WindowMode::Minimized => parts.push("minimized".to_string()),
        WindowMode::Maximized => parts.push("maximized".to_string()),
        WindowMode::Normal => {}
    }
    if window.fullscreen {
        parts.push("fullscreen".to_string());
    }
    parts.join(", ")
}

#[component]
pub(super) fn StartMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    view! {
        <Show when=move || state.get().start_menu_open fallback=|| ()>
            <LauncherMenu id="desk-start-menu".to_string()>
                <Show when=move || !state.get().recent_apps.is_empty() fallback=|| ()>
                    <LauncherSectionLabel>"Recent"</LauncherSectionLabel>
                    <For
                        each=move || recent_descriptors(&state.get())
                        key=|app| app.id.to_string()
                        let:app
                    >
                        <LauncherEntry app=app />
                    </For>
                </Show>
                <LauncherSectionLabel>"All apps"</LauncherSectionLabel>
                <For
                    each=move || apps::launcher_apps()
                    key=|app| app.id.to_string()
                    let:app
                >
                    <LauncherEntry app=app />
                </For>
            </LauncherMenu>
        </Show>
    }
}

fn recent_descriptors(state: &SessionState) -> Vec<&'static AppDescriptor> {
    state
        .recent_apps
        .as_slice()
        .iter()
        .filter_map(apps::descriptor_by_id)
        .collect()
}

#[component]
fn LauncherEntry(app: &'static AppDescriptor) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let open = Callback::new(move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(SessionAction::OpenApp(apps::open_request(app)));
    });

    view! {
        <LauncherItem aria_label=format!("Open {}", app.name) on_click=open>
            <Icon icon=apps::icon_for_key(app.icon) size=IconSize::Sm />
            <span>{app.name}</span>
        </LauncherItem>
    }
}
