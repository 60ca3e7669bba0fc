//! Semantic icon catalog and SVG renderer for the desktop shell.
//!
//! Shell components and the app registry refer to icons through [`IconName`]
//! rather than raw strings or inline SVG. Catalog string keys resolve through
//! [`IconName::from_key`], which falls back to an explicit
//! [`IconName::Unknown`] glyph instead of silently rendering nothing.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers used by shell components.
pub enum IconName {
    /// Folder / file manager icon.
    Folder,
    /// App store icon.
    Storefront,
    /// System settings icon.
    Settings,
    /// Chat / assistant icon.
    Chat,
    /// Spreadsheet / table icon.
    Table,
    /// Contacts / CRM icon.
    People,
    /// Start/launcher button glyph.
    Launcher,
    /// Generic multi-window status icon.
    WindowMultiple,
    /// Window minimize control icon.
    WindowMinimize,
    /// Window maximize control icon.
    WindowMaximize,
    /// Window restore control icon.
    WindowRestore,
    /// Fullscreen toggle control icon.
    FullscreenExpand,
    /// Dismiss/close icon.
    Dismiss,
    /// Fallback glyph for unrecognized catalog keys.
    Unknown,
}

impl IconName {
    /// Resolves a catalog icon key, falling back to [`IconName::Unknown`].
    pub fn from_key(key: &str) -> Self {
        match key {
            "folder" => Self::Folder,
            "storefront" => Self::Storefront,
            "settings" => Self::Settings,
            "chat" => Self::Chat,
            "table" => Self::Table,
            "people" => Self::People,
            _ => Self::Unknown,
        }
    }

    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Folder => "folder",
            Self::Storefront => "storefront",
            Self::Settings => "settings",
            Self::Chat => "chat",
            Self::Table => "table",
            Self::People => "people",
            Self::Launcher => "launcher",
            Self::WindowMultiple => "window-multiple",
            Self::WindowMinimize => "window-minimize",
            Self::WindowMaximize => "window-maximize",
            Self::WindowRestore => "window-restore",
            Self::FullscreenExpand => "fullscreen-expand",
            Self::Dismiss => "dismiss",
            Self::Unknown => "unknown",
        }
    }

    /// Raw SVG body markup for the icon (24px viewBox, `currentColor` fill).
    fn svg_body(self) -> &'static str {
        match self {
            Self::Folder => {
                r#"<path d="M3.5 6.25c0-.97.78-1.75 1.75-1.75h2.88c.2 0 .39.08.53.22l2.06 2.06c.14.14.33.22.53.22h5.5c.97 0 1.75.78 1.75 1.75 0 .09.01.17.04.25H8.72c-1.34 0-2.58.71-3.25 1.87L3.5 14.28V6.25ZM2 17.79A3.25 3.25 0 0 0 5.25 21h11.04c1.33 0 2.57-.72 3.24-1.88l3.03-5.25A3.25 3.25 0 0 0 19.96 9a.75.75 0 0 0 .04-.25c0-1.8-1.45-3.25-3.25-3.25h-5.19L9.72 3.66c-.42-.42-1-.66-1.6-.66H5.26A3.25 3.25 0 0 0 2 6.25V17.79Zm6.72-7.3h11.03a1.75 1.75 0 0 1 1.51 2.63l-3.03 5.25c-.4.7-1.14 1.13-1.95 1.13H5.25a1.75 1.75 0 0 1-1.51-2.63l3.03-5.25c.4-.7 1.14-1.12 1.95-1.12Z"/>"#
            }
            Self::Storefront => {
                r#"<path d="M8 7V6a4 4 0 1 1 8 0v1h2.25c.88 0 1.61.68 1.74 1.54l1 9.5A2.25 2.25 0 0 1 18.75 21H5.25A2.25 2.25 0 0 1 3 18.04l1-9.5C4.14 7.68 4.87 7 5.75 7H8Zm1.5-1v1h5V6a2.5 2.5 0 0 0-5 0Zm-4 2.66-.99 9.45a.75.75 0 0 0 .74.89h13.5a.75.75 0 0 0 .74-.89l-.99-9.45a.25.25 0 0 0-.25-.16H5.75a.25.25 0 0 0-.25.16Zm3.25 2.09c.41 0 .75.34.75.75a2.5 2.5 0 0 0 5 0 .75.75 0 0 1 1.5 0 4 4 0 1 1-8 0c0-.41.34-.75.75-.75Z"/>"#
            }
            Self::Settings => {
                r#"<path d="M12 2a1 1 0 0 1 .98.8l.25 1.2a8.1 8.1 0 0 1 1.74.72l1.06-.64a1 1 0 0 1 1.24.15l1.58 1.58a1 1 0 0 1 .15 1.24l-.64 1.06c.3.55.54 1.13.72 1.74l1.2.25a1 1 0 0 1 .8.98v2.24a1 1 0 0 1-.8.98l-1.2.25a8.1 8.1 0 0 1-.72 1.74l.64 1.06a1 1 0 0 1-.15 1.24l-1.58 1.58a1 1 0 0 1-1.24.15l-1.06-.64a8.1 8.1 0 0 1-1.74.72l-.25 1.2a1 1 0 0 1-.98.8H9.76a1 1 0 0 1-.98-.8l-.25-1.2a8.1 8.1 0 0 1-1.74-.72l-1.06.64a1 1 0 0 1-1.24-.15l-1.58-1.58a1 1 0 0 1-.15-1.24l.64-1.06a8.1 8.1 0 0 1-.72-1.74l-1.2-.25a1 1 0 0 1-.8-.98V9.76a1 1 0 0 1 .8-.98l1.2-.25c.18-.61.42-1.19.72-1.74l-.64-1.06a1 1 0 0 1 .15-1.24l1.58-1.58a1 1 0 0 1 1.24-.15l1.06.64c.55-.3 1.13-.54 1.74-.72l.25-1.2A1 1 0 0 1 9.76 2H12Zm-.38 1.5H10.4l-.24 1.16a1 1 0 0 1-.76.78 6.6 6.6 0 0 0-2.2.91 1 1 0 0 1-1.09.02l-1.02-.62-.86.86.62 1.02a1 1 0 0 1-.02 1.09 6.6 6.6 0 0 0-.91 2.2 1 1 0 0 1-.78.76L2 11.62v1.2l1.16.24a1 1 0 0 1 .78.76 6.6 6.6 0 0 0 .91 2.2 1 1 0 0 1 .02 1.09l-.62 1.02.86.86 1.02-.62a1 1 0 0 1 1.09.02 6.6 6.6 0 0 0 2.2.91 1 1 0 0 1 .76.78l.24 1.16h1.2l.24-1.16a1 1 0 0 1 .76-.78 6.6 6.6 0 0 0 2.2-.91 1 1 0 0 1 1.09.02l1.02.62.86-.86-.62-1.02a1 1 0 0 1 .02-1.09 6.6 6.6 0 0 0 .91-2.2 1 1 0 0 1 .78-.76l1.16-.24v-1.2l-1.16-.24a1 1 0 0 1-.78-.76 6.6 6.6 0 0 0-.91-2.2 1 1 0 0 1-.02-1.09l.62-1.02-.86-.86-1.02.62a1 1 0 0 1-1.09-.02 6.6 6.6 0 0 0-2.2-.91 1 1 0 0 1-.76-.78l-.24-1.16ZM11 8a3 3 0 1 1 0 6 3 3 0 0 1 0-6Zm0 1.5a1.5 1.5 0 1 0 0 3 1.5 1.5 0 0 0 0-3Z"/>"#
            }
            Self::Chat => {
                r#"<path d="M12 2.5c5.25 0 9.5 3.69 9.5 8.25S17.25 19 12 19c-.96 0-1.9-.12-2.78-.36-1.33.94-3.02 1.61-4.92 1.61a.55.55 0 0 1-.4-.93c.86-.9 1.44-1.98 1.68-3.08C3.96 14.84 2.5 12.93 2.5 10.75 2.5 6.19 6.75 2.5 12 2.5Zm0 1.5c-4.5 0-8 3.1-8 6.75 0 1.8 1.27 3.43 2.85 4.47.27.18.4.5.34.81-.15.83-.48 1.64-.95 2.38 1.06-.24 2.01-.72 2.79-1.34.2-.16.47-.21.71-.13.72.22 1.5.34 2.26.34 4.5 0 8-3.1 8-6.53 0-3.64-3.5-6.75-8-6.75Zm-4.25 5h8.5a.75.75 0 0 1 .1 1.5H7.75a.75.75 0 0 1-.1-1.5h8.6-8.5Zm0 3h5.5a.75.75 0 0 1 .1 1.5H7.75a.75.75 0 0 1-.1-1.5h5.6-5.5Z"/>"#
            }
            Self::Table => {
                r#"<path d="M6.25 3A3.25 3.25 0 0 0 3 6.25v11.5C3 19.55 4.46 21 6.25 21h11.5c1.8 0 3.25-1.46 3.25-3.25V6.25C21 4.45 19.54 3 17.75 3H6.25ZM4.5 6.25c0-.97.78-1.75 1.75-1.75h11.5c.97 0 1.75.78 1.75 1.75V8.5h-15V6.25ZM10.5 10v3.25h-6V10h6Zm1.5 3.25V10h7.5v3.25H12Zm-1.5 1.5v4.75H6.25c-.97 0-1.75-.78-1.75-1.75v-3h6Zm1.5 4.75v-4.75h7.5v3c0 .97-.78 1.75-1.75 1.75H12Z"/>"#
            }
            Self::People => {
                r#"<path d="M12 2.75a4.25 4.25 0 1 0 0 8.5 4.25 4.25 0 0 0 0-8.5ZM9.25 7a2.75 2.75 0 1 1 5.5 0 2.75 2.75 0 0 1-5.5 0ZM5.25 13A2.25 2.25 0 0 0 3 15.25v.55c0 1.42.72 2.6 1.9 3.43 1.17.82 2.96 1.27 6.1 1.27s4.93-.45 6.1-1.27c1.18-.83 1.9-2.01 1.9-3.43v-.55A2.25 2.25 0 0 0 16.75 13H5.25Zm-.75 2.25c0-.41.34-.75.75-.75h13.5c.41 0 .75.34.75.75v.55c0 .9-.43 1.63-1.26 2.2-.85.6-2.35 1-6.24 1s-5.39-.4-6.24-1c-.83-.57-1.26-1.3-1.26-2.2v-.55Z"/>"#
            }
            Self::Launcher => {
                r#"<path d="M6.25 3A3.25 3.25 0 0 0 3 6.25v11.5C3 19.55 4.46 21 6.25 21h2.76L9 20.75V19.5H6.25c-.97 0-1.75-.78-1.75-1.75V8.5h15V9H21V6.26C21 4.45 19.54 3 17.75 3H6.25ZM19.5 7h-15v-.75c0-.97.78-1.75 1.75-1.75h11.5c.97 0 1.75.78 1.75 1.75V7Zm-7.25 8.5h3.25v-3.25c0-1.24 1-2.25 2.25-2.25h3c1.24 0 2.25 1 2.25 2.25v7.5c0 1.8-1.46 3.25-3.25 3.25h-7.5C11.01 23 10 22 10 20.75v-3c0-1.24 1-2.25 2.25-2.25ZM17 12.25v3.25h4.5v-3.25a.75.75 0 0 0-.75-.75h-3a.75.75 0 0 0-.75.75Zm-1.5 9.25V17h-3.25a.75.75 0 0 0-.75.75v3c0 .41.34.75.75.75h3.25ZM17 17v4.5h2.75c.97 0 1.75-.78 1.75-1.75V17H17Z"/>"#
            }
            Self::WindowMultiple => {
                r#"<path d="M19 6.01c1.68.13 3 1.53 3 3.24v8A4.75 4.75 0 0 1 17.25 22h-8a3.25 3.25 0 0 1-3.24-3h1.51c.12.85.85 1.5 1.73 1.5h8c1.8 0 3.25-1.46 3.25-3.25v-8c0-.88-.65-1.6-1.5-1.73V6.01ZM14.75 2C16.55 2 18 3.46 18 5.25v9.5c0 1.8-1.46 3.25-3.25 3.25h-9.5A3.25 3.25 0 0 1 2 14.75v-9.5C2 3.45 3.46 2 5.25 2h9.5ZM3.5 14.75c0 .97.78 1.75 1.75 1.75h9.5c.97 0 1.75-.78 1.75-1.75V7.5h-13v7.25ZM5.25 3.5c-.97 0-1.75.78-1.75 1.75V6h13v-.75c0-.97-.78-1.75-1.75-1.75h-9.5Z"/>"#
            }
            Self::WindowMinimize => {
                r#"<path d="M3.75 12.5h16.5a.75.75 0 0 0 0-1.5H3.75a.75.75 0 0 0 0 1.5Z"/>"#
            }
            Self::WindowMaximize => {
                r#"<path d="M3 6.25C3 4.45 4.46 3 6.25 3h11.5C19.55 3 21 4.46 21 6.25v11.5c0 1.8-1.46 3.25-3.25 3.25H6.25A3.25 3.25 0 0 1 3 17.75V6.25ZM6.25 4.5c-.97 0-1.75.78-1.75 1.75v11.5c0 .97.78 1.75 1.75 1.75h11.5c.97 0 1.75-.78 1.75-1.75V6.25c0-.97-.78-1.75-1.75-1.75H6.25Z"/>"#
            }
            Self::WindowRestore => {
                r#"<path d="M7.52 5H6c.13-1.68 1.53-3 3.24-3h8A4.75 4.75 0 0 1 22 6.75v8a3.25 3.25 0 0 1-3 3.24v-1.5c.85-.13 1.5-.86 1.5-1.74v-8c0-1.8-1.46-3.25-3.25-3.25h-8c-.88 0-1.61.65-1.73 1.5ZM5.25 6A3.25 3.25 0 0 0 2 9.25v9.5C2 20.55 3.46 22 5.25 22h9.5c1.8 0 3.25-1.46 3.25-3.25v-9.5C18 7.45 16.55 6 14.75 6h-9.5ZM3.5 9.25c0-.97.78-1.75 1.75-1.75h9.5c.97 0 1.75.78 1.75 1.75v9.5c0 .97-.78 1.75-1.75 1.75h-9.5c-.97 0-1.75-.78-1.75-1.75v-9.5Z"/>"#
            }
            Self::FullscreenExpand => {
                r#"<path d="M4.75 4A.75.75 0 0 0 4 4.75v4.5a.75.75 0 0 0 1.5 0V6.56l4.22 4.22a.75.75 0 1 0 1.06-1.06L6.56 5.5h2.69a.75.75 0 0 0 0-1.5h-4.5Zm14.5 16c.41 0 .75-.34.75-.75v-4.5a.75.75 0 0 0-1.5 0v2.69l-4.22-4.22a.75.75 0 1 0-1.06 1.06l4.22 4.22h-2.69a.75.75 0 0 0 0 1.5h4.5Z"/>"#
            }
            Self::Dismiss => {
                r#"<path d="m4.4 4.55.07-.08a.75.75 0 0 1 .98-.07l.08.07L12 10.94l6.47-6.47a.75.75 0 1 1 1.06 1.06L13.06 12l6.47 6.47c.27.27.3.68.07.98l-.07.08a.75.75 0 0 1-.98.07l-.08-.07L12 13.06l-6.47 6.47a.75.75 0 0 1-1.06-1.06L10.94 12 4.47 5.53a.75.75 0 0 1-.07-.98l.07-.08-.07.08Z"/>"#
            }
            Self::Unknown => {
                r#"<path d="M6.25 3A3.25 3.25 0 0 0 3 6.25v11.5C3 19.55 4.46 21 6.25 21h11.5c1.8 0 3.25-1.46 3.25-3.25V6.25C21 4.45 19.54 3 17.75 3H6.25ZM4.5 6.25c0-.97.78-1.75 1.75-1.75h11.5c.97 0 1.75.78 1.75 1.75v11.5c0 .97-.78 1.75-1.75 1.75H6.25c-.97 0-1.75-.78-1.75-1.75V6.25ZM12 7a2.75 2.75 0 0 0-2.75 2.75.75.75 0 0 0 1.5 0c0-.69.56-1.25 1.25-1.25s1.25.56 1.25 1.25c0 .4-.14.6-.63 1l-.3.25c-.71.6-1.07 1.13-1.07 2a.75.75 0 0 0 1.5 0c0-.4.14-.6.63-1l.3-.25c.71-.6 1.07-1.13 1.07-2A2.75 2.75 0 0 0 12 7Zm0 8a1 1 0 1 0 0 2 1 1 0 0 0 0-2Z"/>"#
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Standardized shell icon sizes.
pub enum IconSize {
    /// 14px compact icon (titlebar controls).
    Xs,
    /// 16px standard icon (taskbar, menus).
    #[default]
    Sm,
    /// 20px medium icon (prominent controls).
    Md,
    /// 24px large icon (desktop launchers).
    Lg,
}

impl IconSize {
    /// Pixel size for the icon.
    pub const fn px(self) -> u16 {
        match self {
            Self::Xs => 14,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 24,
        }
    }

    /// Stable size token used for CSS hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Renders an SVG icon from the shell icon catalog.
pub fn Icon(
    /// Semantic icon identifier.
    icon: IconName,
    /// Standardized icon size token.
    #[prop(default = IconSize::Sm)]
    size: IconSize,
) -> impl IntoView {
    let size_px = size.px().to_string();

    view! {
        <svg
            class="ui-icon"
            data-icon=icon.token()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="currentColor"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}
