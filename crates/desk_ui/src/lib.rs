//! Shared UI primitive library for the desktop shell.
//!
//! Owns the reusable Leptos primitives, the semantic icon catalog, and the
//! stable `data-ui-*` DOM contract consumed by the shell CSS layers. Shell
//! components compose these primitives instead of emitting ad hoc markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopWindowLayer, LauncherItem,
    LauncherMenu, LauncherSectionLabel, ResizeHandle, TaskbarButton, TaskbarSection, TaskbarShell,
    WindowControlButton, WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
};
