//! Built-in application registry and catalog policy queries.
//!
//! The registry is the ordered [`AppDescriptor`] input contract of the
//! windowing core. Window bodies here are deliberately thin placeholders: the
//! shell only manages the frame around each app, never its content.

use std::sync::OnceLock;

use desk_app_contract::{AppDescriptor, AppId, RenderTarget};
use desk_session::{OpenRequest, SessionState};
use desk_ui::IconName;
use leptos::*;

static REGISTRY: OnceLock<Vec<AppDescriptor>> = OnceLock::new();

/// Ordered catalog of installable applications.
pub fn app_registry() -> &'static [AppDescriptor] {
    REGISTRY.get_or_init(build_registry).as_slice()
}

fn build_registry() -> Vec<AppDescriptor> {
    vec![
        AppDescriptor {
            id: AppId::trusted("desk.files"),
            name: "Files",
            icon: "folder",
            preferred_size: Some((1000, 700)),
            min_size: Some((360, 260)),
            render: RenderTarget::Component(files_view),
            core: true,
            show_on_desktop: true,
        },
        AppDescriptor {
            id: AppId::trusted("desk.store"),
            name: "App Store",
            icon: "storefront",
            preferred_size: Some((960, 640)),
            min_size: None,
            render: RenderTarget::Component(store_view),
            core: false,
            show_on_desktop: true,
        },
        AppDescriptor {
            id: AppId::trusted("desk.settings"),
            name: "Settings",
            icon: "settings",
            preferred_size: Some((720, 520)),
            min_size: Some((420, 320)),
            render: RenderTarget::Component(settings_view),
            core: true,
            show_on_desktop: false,
        },
        AppDescriptor {
            id: AppId::trusted("desk.chat"),
            name: "Chat",
            icon: "chat",
            preferred_size: Some((480, 640)),
            min_size: None,
            render: RenderTarget::RemoteUrl("https://assistant.example.net/embed"),
            core: false,
            show_on_desktop: true,
        },
        AppDescriptor {
            id: AppId::trusted("desk.sheets"),
            name: "Sheets",
            icon: "table",
            preferred_size: Some((1100, 720)),
            min_size: Some((480, 320)),
            render: RenderTarget::Component(sheets_view),
            core: false,
            show_on_desktop: true,
        },
        AppDescriptor {
            id: AppId::trusted("desk.crm"),
            name: "CRM",
            icon: "people",
            preferred_size: None,
            min_size: None,
            render: RenderTarget::Component(crm_view),
            core: false,
            show_on_desktop: true,
        },
    ]
}

/// Looks up a catalog descriptor by id.
pub fn descriptor_by_id(app_id: &AppId) -> Option<&'static AppDescriptor> {
    app_registry().iter().find(|app| &app.id == app_id)
}

/// Apps listed in the start-menu launcher (the whole catalog, in order).
pub fn launcher_apps() -> Vec<&'static AppDescriptor> {
    app_registry().iter().collect()
}

/// Apps that receive a desktop icon, filtered by the active background.
pub fn visible_desktop_apps(state: &SessionState) -> Vec<&'static AppDescriptor> {
    app_registry()
        .iter()
        .filter(|app| app.show_on_desktop && state.background_allows(&app.id, app.core))
        .collect()
}

/// Builds the reducer open request for a descriptor.
pub fn open_request(app: &AppDescriptor) -> OpenRequest {
    OpenRequest::from_descriptor(app)
}

/// Resolves a catalog icon key to its shell glyph.
pub fn icon_for_key(key: &str) -> IconName {
    IconName::from_key(key)
}

fn files_view() -> View {
    view! {
        <div class="app app-files">
            <p><strong>"Files"</strong></p>
            <p>"Browse and manage your stored documents."</p>
            <ul>
                <li>"Documents"</li>
                <li>"Pictures"</li>
                <li>"Shared with me"</li>
            </ul>
        </div>
    }
    .into_view()
}

fn store_view() -> View {
    view! {
        <div class="app app-store">
            <p><strong>"App Store"</strong></p>
            <p>"Install additional applications into the catalog."</p>
        </div>
    }
    .into_view()
}

fn settings_view() -> View {
    view! {
        <div class="app app-settings">
            <p><strong>"Settings"</strong></p>
            <p>"Taskbar, background, and accessibility preferences."</p>
        </div>
    }
    .into_view()
}

fn sheets_view() -> View {
    view! {
        <div class="app app-sheets">
            <p><strong>"Sheets"</strong></p>
            <p>"Spreadsheet workspace."</p>
            <table>
                <tbody>
                    <tr><td>"A1"</td><td>"B1"</td></tr>
                    <tr><td>"A2"</td><td>"B2"</td></tr>
                </tbody>
            </table>
        </div>
    }
    .into_view()
}

fn crm_view() -> View {
    view! {
        <div class="app app-crm">
            <p><strong>"CRM"</strong></p>
            <p>"Contact and pipeline overview."</p>
        </div>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn registry_ids_are_unique_and_valid() {
        let registry = app_registry();
        for app in registry {
            assert!(AppId::new(app.id.as_str()).is_ok(), "bad id {}", app.id);
        }
        let mut ids: Vec<&str> = registry.iter().map(|app| app.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), registry.len());
    }

    #[test]
    fn registry_icons_resolve_to_known_glyphs() {
        for app in app_registry() {
            assert_ne!(
                icon_for_key(app.icon),
                IconName::Unknown,
                "unmapped icon key `{}` for {}",
                app.icon,
                app.id
            );
        }
    }

    #[test]
    fn background_allowlist_filters_desktop_apps() {
        let mut state = SessionState::default();
        state.backgrounds = vec![desk_session::DesktopBackground {
            id: "focus".to_string(),
            name: "Focus".to_string(),
            wallpaper_id: "slate".to_string(),
            app_ids: vec![AppId::trusted("desk.sheets")],
        }];

        let visible = visible_desktop_apps(&state);
        let ids: Vec<&str> = visible.iter().map(|app| app.id.as_str()).collect();
        // Core apps stay; sheets is allowlisted; the rest drop out.
        assert!(ids.contains(&"desk.files"));
        assert!(ids.contains(&"desk.sheets"));
        assert!(!ids.contains(&"desk.crm"));
    }

    #[test]
    fn open_request_projects_descriptor_fields() {
        let files = descriptor_by_id(&AppId::trusted("desk.files")).expect("files registered");
        let request = open_request(files);
        assert_eq!(request.title, "Files");
        assert_eq!(request.preferred_size, Some((1000, 700)));
    }
}
