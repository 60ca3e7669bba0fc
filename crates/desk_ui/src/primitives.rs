//! Structural Leptos primitives for the desktop shell.
//!
//! Each primitive owns one piece of the stable `data-ui-*` DOM contract the
//! shell CSS layers target. Components compose these instead of emitting ad
//! hoc markup.

use leptos::ev::MouseEvent;
use leptos::*;

fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[component]
/// Desktop wallpaper and backdrop host.
pub fn DesktopBackdrop(
    /// Active wallpaper preset id, exposed for the CSS wallpaper layers.
    #[prop(optional, into)]
    wallpaper: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="desk-backdrop"
            data-ui-primitive="true"
            data-ui-kind="desktop-backdrop"
            data-wallpaper=move || wallpaper.get()
        >
            {children()}
        </div>
    }
}

#[component]
/// Desktop icon surface hosting absolutely positioned icon launchers.
pub fn DesktopIconGrid(
    /// Active icon size preset token.
    #[prop(optional, into)]
    icon_size: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="desk-icon-grid"
            data-ui-primitive="true"
            data-ui-kind="desktop-icon-grid"
            data-icon-size=move || icon_size.get()
        >
            {children()}
        </div>
    }
}

#[component]
/// Desktop icon launcher button, positioned by the surface.
pub fn DesktopIconButton(
    #[prop(optional, into)] style: MaybeSignal<String>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    /// True when a window for this app is registered; rendered as a marker dot.
    #[prop(optional, into)]
    open: MaybeSignal<bool>,
    #[prop(optional)] on_dblclick: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="desk-icon-button"
            style=move || style.get()
            title=title
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="desktop-icon-button"
            data-ui-open=move || bool_token(open.get())
            on:dblclick=move |ev| {
                if let Some(on_dblclick) = on_dblclick.as_ref() {
                    on_dblclick.call(ev);
                }
            }
            on:pointerdown=move |ev| {
                if let Some(on_pointerdown) = on_pointerdown.as_ref() {
                    on_pointerdown.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Stacking host for managed window frames.
pub fn DesktopWindowLayer(children: Children) -> impl IntoView {
    view! {
        <div
            class="desk-window-layer"
            data-ui-primitive="true"
            data-ui-kind="desktop-window-layer"
        >
            {children()}
        </div>
    }
}

#[component]
/// Managed window frame chrome.
pub fn WindowFrame(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] style: MaybeSignal<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] focused: MaybeSignal<bool>,
    /// Display-mode token: `normal`, `minimized`, or `maximized`.
    #[prop(optional, into)]
    mode: MaybeSignal<String>,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            id=id
            class="desk-window-frame"
            style=move || style.get()
            role="dialog"
            aria-label=move || aria_label.get()
            data-ui-primitive="true"
            data-ui-kind="window-frame"
            data-ui-focused=move || bool_token(focused.get())
            data-ui-mode=move || mode.get()
            on:pointerdown=move |ev| {
                if let Some(on_pointerdown) = on_pointerdown.as_ref() {
                    on_pointerdown.call(ev);
                }
            }
        >
            {children()}
        </section>
    }
}

#[component]
/// Window titlebar drag surface.
pub fn WindowTitleBar(
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
    #[prop(optional)] on_dblclick: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <header
            class="desk-window-titlebar"
            data-ui-primitive="true"
            data-ui-kind="window-titlebar"
            on:pointerdown=move |ev| {
                if let Some(on_pointerdown) = on_pointerdown.as_ref() {
                    on_pointerdown.call(ev);
                }
            }
            on:dblclick=move |ev| {
                if let Some(on_dblclick) = on_dblclick.as_ref() {
                    on_dblclick.call(ev);
                }
            }
        >
            {children()}
        </header>
    }
}

#[component]
/// Window title group (icon + text).
pub fn WindowTitle(children: Children) -> impl IntoView {
    view! {
        <div
            class="desk-window-title"
            data-ui-primitive="true"
            data-ui-kind="window-title"
        >
            {children()}
        </div>
    }
}

#[component]
/// Titlebar controls row.
pub fn WindowControls(children: Children) -> impl IntoView {
    view! {
        <div
            class="desk-window-controls"
            data-ui-primitive="true"
            data-ui-kind="window-controls"
        >
            {children()}
        </div>
    }
}

#[component]
/// Titlebar control button.
pub fn WindowControlButton(
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
    #[prop(optional)] on_mousedown: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="desk-window-control"
            aria-label=move || aria_label.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="window-control"
            on:pointerdown=move |ev| {
                if let Some(on_pointerdown) = on_pointerdown.as_ref() {
                    on_pointerdown.call(ev);
                }
            }
            on:mousedown=move |ev| {
                if let Some(on_mousedown) = on_mousedown.as_ref() {
                    on_mousedown.call(ev);
                }
            }
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Window resize grab surface for one edge or corner.
pub fn ResizeHandle(
    /// Edge token (`n`, `s`, `e`, `w`, `ne`, `nw`, `se`, `sw`).
    edge: &'static str,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
) -> impl IntoView {
    view! {
        <div
            class=format!("desk-resize-handle edge-{edge}")
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="resize-handle"
            data-edge=edge
            on:pointerdown=move |ev| {
                if let Some(on_pointerdown) = on_pointerdown.as_ref() {
                    on_pointerdown.call(ev);
                }
            }
        />
    }
}

#[component]
/// Taskbar container docked to a viewport edge.
pub fn TaskbarShell(
    /// Docked edge token (`top`, `bottom`, `left`, `right`).
    #[prop(optional, into)]
    edge: MaybeSignal<String>,
    /// Whether the bar hides until hovered.
    #[prop(optional, into)]
    autohide: MaybeSignal<bool>,
    #[prop(optional, into)] style: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <nav
            class="desk-taskbar"
            aria-label="Taskbar"
            style=move || style.get()
            data-ui-primitive="true"
            data-ui-kind="taskbar"
            data-edge=move || edge.get()
            data-autohide=move || bool_token(autohide.get())
        >
            {children()}
        </nav>
    }
}

#[component]
/// Grouping section inside the taskbar.
pub fn TaskbarSection(
    /// Section slot token (`start`, `windows`, `tray`).
    ui_slot: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="desk-taskbar-section"
            data-ui-primitive="true"
            data-ui-kind="taskbar-section"
            data-ui-slot=ui_slot
        >
            {children()}
        </div>
    }
}

#[component]
/// Taskbar button for the launcher or a running window.
pub fn TaskbarButton(
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] pressed: MaybeSignal<bool>,
    /// True when the associated window holds focus.
    #[prop(optional, into)]
    active: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="desk-taskbar-button"
            aria-label=move || aria_label.get()
            aria-pressed=move || bool_token(pressed.get())
            data-ui-primitive="true"
            data-ui-kind="taskbar-button"
            data-ui-active=move || bool_token(active.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Start-menu style launcher overlay surface.
pub fn LauncherMenu(
    #[prop(optional, into)] id: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=id
            class="desk-launcher-menu"
            role="menu"
            aria-label="App launcher"
            data-ui-primitive="true"
            data-ui-kind="launcher-menu"
        >
            {children()}
        </div>
    }
}

#[component]
/// Section heading inside the launcher menu.
pub fn LauncherSectionLabel(children: Children) -> impl IntoView {
    view! {
        <div
            class="desk-launcher-section-label"
            data-ui-primitive="true"
            data-ui-kind="launcher-section-label"
        >
            {children()}
        </div>
    }
}

#[component]
/// Launcher menu entry.
pub fn LauncherItem(
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="desk-launcher-item"
            role="menuitem"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="launcher-item"
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
