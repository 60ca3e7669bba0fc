//! Shared contract types between the desktop shell and the applications it hosts.
//!
//! The shell treats application content as opaque: a catalog of immutable
//! [`AppDescriptor`] records flows in, window-management events flow out, and the
//! only rendering obligation the shell takes on is mounting each descriptor's
//! [`RenderTarget`] inside a managed window frame.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::View;
use serde::{Deserialize, Serialize};

/// Stable identifier for a catalog application.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AppId(String);

impl AppId {
    /// Returns an app identifier when `raw` conforms to the `segment.segment...` policy.
    pub fn new(raw: impl Into<String>) -> Result<Self, String> {
        let raw = raw.into();
        if is_valid_app_id(&raw) {
            Ok(Self(raw))
        } else {
            Err(format!(
                "invalid app id `{raw}`; expected namespaced dotted segments"
            ))
        }
    }

    /// Returns the string form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Creates an id without validation for registry constants the shell owns.
    pub fn trusted(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }
}

impl std::fmt::Display for AppId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn is_valid_app_id(raw: &str) -> bool {
    if raw.is_empty() || raw.len() > 120 {
        return false;
    }

    let mut count = 0usize;
    for part in raw.split('.') {
        count += 1;
        if part.is_empty() || part.len() > 32 {
            return false;
        }
        let bytes = part.as_bytes();
        if !bytes[0].is_ascii_lowercase() {
            return false;
        }
        if !bytes
            .iter()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-')
        {
            return false;
        }
        if part.ends_with('-') {
            return false;
        }
    }

    count >= 2
}

/// Opaque render surface for an application window body.
///
/// The windowing core only manages the frame around it; a `Component` target is
/// mounted inline while a `RemoteUrl` target is hosted in a sandboxed embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderTarget {
    /// Locally rendered view fragment.
    Component(fn() -> View),
    /// Remote page embedded by the shell.
    RemoteUrl(&'static str),
}

/// Immutable catalog entry describing an installable/launchable application.
///
/// Created once at registry load and never mutated at runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct AppDescriptor {
    /// Unique application identifier.
    pub id: AppId,
    /// Human-readable launcher/title name.
    pub name: &'static str,
    /// Symbolic icon key resolved by the shell's icon catalog.
    pub icon: &'static str,
    /// Preferred window size in pixels, when the app declares one.
    pub preferred_size: Option<(i32, i32)>,
    /// Minimum window size in pixels, when the app declares one.
    pub min_size: Option<(i32, i32)>,
    /// Opaque window-body render surface.
    pub render: RenderTarget,
    /// Core apps stay visible on every desktop background.
    pub core: bool,
    /// Whether the app receives a desktop icon.
    pub show_on_desktop: bool,
}

/// DOM id carrying the primary input of a managed window.
///
/// Apps opt in to shell-driven focus hand-off by rendering this id on their
/// primary focusable element; the shell falls back to the frame itself.
pub fn window_input_dom_id(window_id: u64) -> String {
    format!("desk-window-input-{window_id}")
}

/// DOM id of a managed window frame, used for focus and fullscreen targeting.
pub fn window_frame_dom_id(window_id: u64) -> String {
    format!("desk-window-{window_id}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn accepts_namespaced_dotted_ids() {
        assert!(AppId::new("desk.files").is_ok());
        assert!(AppId::new("vendor.suite.crm-board").is_ok());
    }

    #[test]
    fn rejects_malformed_ids() {
        for raw in [
            "",
            "files",
            "Desk.files",
            "desk.",
            ".files",
            "desk.files-",
            "desk.Files",
            "desk.fi les",
        ] {
            assert!(AppId::new(raw).is_err(), "expected rejection for `{raw}`");
        }
    }

    #[test]
    fn dom_ids_are_window_scoped() {
        assert_eq!(window_frame_dom_id(7), "desk-window-7");
        assert_eq!(window_input_dom_id(7), "desk-window-input-7");
    }
}
