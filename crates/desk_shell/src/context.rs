//! Runtime provider and context wiring for the desktop shell.
//!
//! Owns the long-lived reducer container and effect queue. UI composition
//! stays in [`crate::components`].

use leptos::*;

use desk_session::{
    reduce_session, InteractionState, SessionAction, SessionEffect, SessionState,
};

use crate::{effects, host::DesktopHostContext};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop session state and dispatching
/// [`SessionAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for side effects and environment queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Reactive session state signal; the single authoritative window store.
    pub state: RwSignal<SessionState>,
    /// Reactive pointer-gesture state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of effects emitted by the reducer and drained by the executor.
    pub effects: RwSignal<Vec<SessionEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<SessionAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: SessionAction) {
        self.dispatch.call(action);
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and primes the
/// session with the current environment.
pub fn DesktopProvider(
    /// Injected host bundle; defaults to the browser host with a console sink.
    #[prop(optional)]
    host_context: Option<DesktopHostContext>,
    children: Children,
) -> impl IntoView {
    let host = store_value(host_context.unwrap_or_default());
    let state = create_rw_signal(SessionState::default());
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<SessionEffect>::new());

    let dispatch = Callback::new(move |action: SessionAction| {
        let mut session = state.get_untracked();
        let mut gesture = interaction.get_untracked();
        let previous_session = session.clone();
        let previous_gesture = gesture.clone();

        match reduce_session(&mut session, &mut gesture, action) {
            Ok(new_effects) => {
                if session != previous_session {
                    state.set(session);
                }
                if gesture != previous_gesture {
                    interaction.set(gesture);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("desk session reducer error: {err}"),
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        state,
        interaction,
        effects,
        dispatch,
    };

    provide_context(runtime);

    // Prime the session with the real viewport before the first paint.
    let environment = host.get_value();
    runtime.dispatch_action(SessionAction::ViewportResized {
        viewport: environment.viewport_rect(),
    });
    if environment.prefers_mobile_layout() {
        runtime.dispatch_action(SessionAction::SetMobileLayout { enabled: true });
    }

    effects::install(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
