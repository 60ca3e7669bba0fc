//! Client-side desktop shell runtime.
//!
//! Wires the headless session core (`desk_session`) to the browser: app
//! registry, reducer container and dispatch context, effect execution, the
//! host boundary, and the shell components themselves.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod apps;
mod components;
mod context;
mod effects;
pub mod host;

pub use components::DesktopShell;
pub use context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};
pub use host::{ConsoleLayoutSink, DesktopHostContext, LayoutSink, MOBILE_LAYOUT_BREAKPOINT};
