//! Effect-queue executor for reducer-emitted session effects.

use leptos::*;

use desk_session::SessionEffect;

use crate::context::DesktopRuntimeContext;

/// Installs the executor that drains reducer-emitted effects in order.
pub fn install(runtime: DesktopRuntimeContext) {
    // Clear the queue before processing so nested dispatches enqueue a fresh
    // batch instead of being overwritten by the in-flight drain.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        for effect in queued {
            run_effect(runtime, effect);
        }
    });
}

fn run_effect(runtime: DesktopRuntimeContext, effect: SessionEffect) {
    let host = runtime.host.get_value();
    match effect {
        SessionEffect::PersistLayout => {
            let snapshot = runtime.state.get_untracked().snapshot();
            host.layout_sink().persist(&snapshot);
        }
        SessionEffect::FocusWindowInput(window_id) => host.focus_window_input(window_id),
        SessionEffect::EnterFullscreen(window_id) => host.enter_fullscreen(window_id),
        SessionEffect::ExitFullscreen(_) => host.exit_fullscreen(),
    }
}
