use dioxus::prelude::*;

use crate::domain::models::{Destination, Session, SessionPolicy};
use crate::domain::services::check_session;
use crate::shared::hooks::use_api;
use crate::shared::utils::navigate;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Checking,
    Authenticated(Session),
    Anonymous,
}

impl SessionState {
    pub fn is_checking(&self) -> bool {
        matches!(self, SessionState::Checking)
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            SessionState::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    /// True only when the backend did not flag the session as anonymous.
    pub fn is_signed_in(&self) -> bool {
        self.session().is_some_and(|s| s.authenticated)
    }

    pub fn shown_name(&self) -> String {
        self.session()
            .map(|s| s.shown_name().to_string())
            .unwrap_or_default()
    }
}

/// Check the backend session once on mount.
///
/// With [`SessionPolicy::RequireLogin`] a failed check sends the visitor to
/// `/login`; the state then stays `Anonymous`.
pub fn use_session(policy: SessionPolicy) -> Signal<SessionState> {
    let api = use_api();
    let nav = navigator();
    let mut state = use_signal(|| SessionState::Checking);

    use_effect(move || {
        let api = api.clone();
        spawn(async move {
            let next = match check_session(&api).await {
                Some(session) => SessionState::Authenticated(session),
                None => SessionState::Anonymous,
            };
            if next == SessionState::Anonymous && policy == SessionPolicy::RequireLogin {
                navigate(nav, &Destination::route("/login"));
            }
            state.set(next);
        });
    });

    state
}
