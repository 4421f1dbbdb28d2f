use {
    crate::{
        config::{DF, PERSISTENCE},
        data::KeyValueStore,
        domain::Role,
    },
    std::{fmt, str::FromStr},
    thiserror::Error,
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Durable storage not read yet.
    #[default]
    Loading,
    Unauthenticated,
    Authenticated(Role),
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading => write!(f, "Loading"),
            Self::Unauthenticated => write!(f, "Unauthenticated"),
            Self::Authenticated(role) => write!(f, "Authenticated({})", role),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("cannot start a session with an empty token")]
    EmptyToken,
}

/// Owns the in-memory view of the session and mirrors it into a [`KeyValueStore`].
///
/// Tokens are opaque: nothing checks expiry or signatures, any non-empty string is a session.
#[derive(Debug, Clone, Default)]
pub struct SessionGate {
    state: SessionState,
}

impl SessionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn role(&self) -> Option<Role> {
        match self.state {
            SessionState::Authenticated(role) => Some(role),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.role().is_some()
    }

    /// Leaves `Loading`: authenticated only if both keys are present and the role parses.
    pub fn restore<S: KeyValueStore + ?Sized>(&mut self, store: &S) -> &SessionState {
        let keys = &PERSISTENCE.session;
        let token = store.get(keys.token);
        let role = store.get(keys.role).and_then(|r| match Role::from_str(&r) {
            Ok(role) => Some(role),
            Err(_) => {
                log::warn!("Ignoring stored session with unknown role {:?}", r);
                None
            }
        });

        self.state = match (token, role) {
            (Some(_), Some(role)) => SessionState::Authenticated(role),
            _ => SessionState::Unauthenticated,
        };

        if DF.log_session {
            log::info!("Session restored: {}", self.state);
        }
        &self.state
    }

    pub fn login<S: KeyValueStore + ?Sized>(
        &mut self,
        store: &mut S,
        token: &str,
        role: Role,
    ) -> Result<(), SessionError> {
        if token.is_empty() {
            return Err(SessionError::EmptyToken);
        }
        let keys = &PERSISTENCE.session;
        store.set(keys.token, token);
        store.set(keys.role, role.as_ref());
        store.flush();

        self.state = SessionState::Authenticated(role);
        if DF.log_session {
            log::info!("Session started: {}", self.state);
        }
        Ok(())
    }

    pub fn logout<S: KeyValueStore + ?Sized>(&mut self, store: &mut S) {
        let keys = &PERSISTENCE.session;
        store.remove(keys.token);
        store.remove(keys.role);
        store.flush();

        self.state = SessionState::Unauthenticated;
        if DF.log_session {
            log::info!("Session ended");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MemoryStore;

    fn stored(token: &str, role: &str) -> MemoryStore {
        let mut store = MemoryStore::new();
        store.set("token", token);
        store.set("userRole", role);
        store
    }

    #[test]
    fn starts_loading() {
        let gate = SessionGate::new();
        assert_eq!(gate.state(), &SessionState::Loading);
        assert!(!gate.is_authenticated());
    }

    #[test]
    fn restore_with_both_keys_authenticates() {
        let mut gate = SessionGate::new();
        let state = gate.restore(&stored("mock-jwt-token-abc", "mentor")).clone();
        assert_eq!(state, SessionState::Authenticated(Role::Mentor));
    }

    #[test]
    fn restore_with_missing_key_is_unauthenticated() {
        let mut store = MemoryStore::new();
        store.set("token", "t");
        let mut gate = SessionGate::new();
        assert_eq!(gate.restore(&store), &SessionState::Unauthenticated);

        let mut store = MemoryStore::new();
        store.set("userRole", "client");
        assert_eq!(gate.restore(&store), &SessionState::Unauthenticated);
    }

    #[test]
    fn restore_with_unknown_role_is_unauthenticated() {
        let mut gate = SessionGate::new();
        assert_eq!(gate.restore(&stored("t", "admin")), &SessionState::Unauthenticated);
    }

    #[test]
    fn login_writes_both_keys() {
        let mut store = MemoryStore::new();
        let mut gate = SessionGate::new();
        gate.restore(&store);
        gate.login(&mut store, "tok", Role::Client).unwrap();
        assert_eq!(gate.role(), Some(Role::Client));
        assert_eq!(store.get("token").as_deref(), Some("tok"));
        assert_eq!(store.get("userRole").as_deref(), Some("client"));
    }

    #[test]
    fn login_rejects_empty_token_and_leaves_store_alone() {
        let mut store = MemoryStore::new();
        let mut gate = SessionGate::new();
        gate.restore(&store);
        assert_eq!(gate.login(&mut store, "", Role::Mentor), Err(SessionError::EmptyToken));
        assert!(store.is_empty());
        assert_eq!(gate.state(), &SessionState::Unauthenticated);
    }

    #[test]
    fn logout_clears_both_keys() {
        let mut store = stored("tok", "mentor");
        let mut gate = SessionGate::new();
        gate.restore(&store);
        gate.logout(&mut store);
        assert_eq!(gate.state(), &SessionState::Unauthenticated);
        assert_eq!(store.get("token"), None);
        assert_eq!(store.get("userRole"), None);
    }

    #[test]
    fn session_survives_a_reload() {
        let mut store = MemoryStore::new();
        let mut first = SessionGate::new();
        first.restore(&store);
        first.login(&mut store, "tok", Role::Mentor).unwrap();

        let mut second = SessionGate::new();
        assert_eq!(second.restore(&store), &SessionState::Authenticated(Role::Mentor));
    }
}
