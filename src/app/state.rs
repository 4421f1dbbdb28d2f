// src/app/state.rs

use crate::session::{AuthGrant, Credentials, PendingRequest, Registration};

#[derive(Clone, Default)]
pub(crate) struct LoadingState;

#[derive(Clone)]
pub(crate) struct RunningState;

pub(crate) enum AppState {
    /// Durable storage not read yet.
    Loading(LoadingState),
    Running(RunningState),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Loading(LoadingState)
    }
}

#[derive(Default)]
pub(crate) struct LoginState {
    pub(crate) form: Credentials,
    pub(crate) error: Option<String>,
    pub(crate) pending: Option<PendingRequest<AuthGrant>>,
}

impl LoginState {
    pub(crate) fn is_busy(&self) -> bool {
        self.pending.as_ref().is_some_and(|p| p.is_pending())
    }
}

#[derive(Default)]
pub(crate) struct RegisterState {
    pub(crate) form: Registration,
    pub(crate) error: Option<String>,
    pub(crate) pending: Option<PendingRequest<()>>,
}

impl RegisterState {
    pub(crate) fn is_busy(&self) -> bool {
        self.pending.as_ref().is_some_and(|p| p.is_pending())
    }
}
