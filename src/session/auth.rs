use {
    crate::{
        config::{AUTH, DF},
        domain::Role,
        utils::AppInstant,
    },
    std::{sync::Arc, time::Duration},
    thiserror::Error,
    uuid::Uuid,
};

/// Error kinds an authentication request can end with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Please enter email and password")]
    MissingCredentials,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Please fill in the {0} field")]
    MissingField(&'static str),
    #[error("The server did not answer within {0:?}")]
    Timeout(Duration),
    #[error("Request cancelled")]
    Cancelled,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub full_name: String,
    pub role: Role,
    /// Only asked of mentors.
    pub company_name: String,
}

impl Registration {
    /// Checks that can fail before anything is sent.
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.password != self.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }
        Ok(())
    }
}

/// What a successful login hands to the session gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthGrant {
    pub token: String,
    pub role: Role,
}

/// Abstract interface for whoever answers logins and registrations.
pub trait AuthBackend {
    /// How long after the request the answer becomes available.
    fn latency(&self) -> Duration;
    fn login(&self, credentials: &Credentials) -> Result<AuthGrant, AuthError>;
    fn register(&self, registration: &Registration) -> Result<(), AuthError>;
}

/// Accepts any non-empty email/password pair and fabricates a token.
#[derive(Debug, Clone)]
pub struct MockAuthBackend {
    latency: Duration,
}

impl Default for MockAuthBackend {
    fn default() -> Self {
        Self::new(AUTH.mock_latency)
    }
}

impl MockAuthBackend {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl AuthBackend for MockAuthBackend {
    fn latency(&self) -> Duration {
        self.latency
    }

    fn login(&self, credentials: &Credentials) -> Result<AuthGrant, AuthError> {
        if credentials.email.is_empty() || credentials.password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        Ok(AuthGrant {
            token: format!("{}{}", AUTH.token_prefix, Uuid::new_v4().simple()),
            role: credentials.role,
        })
    }

    fn register(&self, registration: &Registration) -> Result<(), AuthError> {
        registration.validate()?;
        if registration.email.is_empty() || registration.password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        if registration.full_name.trim().is_empty() {
            return Err(AuthError::MissingField("full name"));
        }
        Ok(())
    }
}

enum RequestState<T> {
    Waiting(Box<dyn FnOnce() -> Result<T, AuthError>>),
    Cancelled,
    Done,
}

/// A request whose answer arrives after the backend's latency, polled once per frame.
///
/// Dropping the request discards the answer. `cancel` does the same but reports
/// `AuthError::Cancelled` on the next poll.
pub struct PendingRequest<T> {
    started: AppInstant,
    answer_after: Duration,
    timeout: Duration,
    state: RequestState<T>,
}

impl<T> PendingRequest<T> {
    pub fn new(
        started: AppInstant,
        answer_after: Duration,
        timeout: Duration,
        resolve: impl FnOnce() -> Result<T, AuthError> + 'static,
    ) -> Self {
        Self {
            started,
            answer_after,
            timeout,
            state: RequestState::Waiting(Box::new(resolve)),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, RequestState::Waiting(_))
    }

    pub fn cancel(&mut self) {
        if self.is_pending() {
            self.state = RequestState::Cancelled;
        }
    }

    /// Time left before the next poll can produce an outcome.
    pub fn remaining(&self, now: AppInstant) -> Duration {
        let elapsed = now.saturating_duration_since(self.started);
        self.answer_after.min(self.timeout).saturating_sub(elapsed)
    }

    /// `Some` exactly once: with the answer, a timeout, or a cancellation.
    pub fn poll(&mut self, now: AppInstant) -> Option<Result<T, AuthError>> {
        let elapsed = now.saturating_duration_since(self.started);
        match std::mem::replace(&mut self.state, RequestState::Done) {
            RequestState::Waiting(resolve) => {
                if self.answer_after > self.timeout && elapsed >= self.timeout {
                    Some(Err(AuthError::Timeout(self.timeout)))
                } else if elapsed >= self.answer_after {
                    Some(resolve())
                } else {
                    self.state = RequestState::Waiting(resolve);
                    None
                }
            }
            RequestState::Cancelled => Some(Err(AuthError::Cancelled)),
            RequestState::Done => None,
        }
    }
}

/// Issues requests against an injected backend with a fixed timeout.
#[derive(Clone)]
pub struct Authenticator {
    backend: Arc<dyn AuthBackend>,
    timeout: Duration,
}

impl Authenticator {
    pub fn new(backend: Arc<dyn AuthBackend>, timeout: Duration) -> Self {
        Self { backend, timeout }
    }

    pub fn mock(latency: Duration) -> Self {
        Self::new(Arc::new(MockAuthBackend::new(latency)), AUTH.request_timeout)
    }

    pub fn begin_login(&self, credentials: Credentials, now: AppInstant) -> PendingRequest<AuthGrant> {
        if DF.log_auth {
            log::info!("Login requested for {} as {}", credentials.email, credentials.role);
        }
        let backend = Arc::clone(&self.backend);
        PendingRequest::new(now, backend.latency(), self.timeout, move || {
            backend.login(&credentials)
        })
    }

    /// Fails straight away on a password mismatch; otherwise the backend decides.
    pub fn begin_register(
        &self,
        registration: Registration,
        now: AppInstant,
    ) -> Result<PendingRequest<()>, AuthError> {
        registration.validate()?;
        if DF.log_auth {
            log::info!("Registration requested for {} as {}", registration.email, registration.role);
        }
        let backend = Arc::clone(&self.backend);
        Ok(PendingRequest::new(now, backend.latency(), self.timeout, move || {
            backend.register(&registration)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    fn creds(email: &str, password: &str, role: Role) -> Credentials {
        Credentials {
            email: email.into(),
            password: password.into(),
            role,
        }
    }

    fn registration(password: &str, confirm: &str) -> Registration {
        Registration {
            email: "new@user.com".into(),
            password: password.into(),
            confirm_password: confirm.into(),
            full_name: "New User".into(),
            role: Role::Mentor,
            company_name: "Pips Ltd".into(),
        }
    }

    #[test]
    fn login_resolves_only_after_latency() {
        let auth = Authenticator::mock(SECOND);
        let t0 = AppInstant::now();
        let mut req = auth.begin_login(creds("a@b.com", "x", Role::Mentor), t0);

        assert!(req.poll(t0).is_none());
        assert!(req.poll(t0 + Duration::from_millis(999)).is_none());
        let grant = req.poll(t0 + SECOND).unwrap().unwrap();
        assert_eq!(grant.role, Role::Mentor);
        assert!(grant.token.starts_with("mock-jwt-token-"));
        assert!(grant.token.len() > "mock-jwt-token-".len());
    }

    #[test]
    fn outcome_is_reported_once() {
        let auth = Authenticator::mock(SECOND);
        let t0 = AppInstant::now();
        let mut req = auth.begin_login(creds("a@b.com", "x", Role::Client), t0);
        assert!(req.poll(t0 + SECOND).is_some());
        assert!(!req.is_pending());
        assert!(req.poll(t0 + SECOND * 2).is_none());
    }

    #[test]
    fn empty_email_or_password_fails_after_delay() {
        let auth = Authenticator::mock(SECOND);
        let t0 = AppInstant::now();
        for (email, password) in [("", "x"), ("a@b.com", ""), ("", "")] {
            let mut req = auth.begin_login(creds(email, password, Role::Client), t0);
            assert!(req.poll(t0).is_none());
            assert_eq!(
                req.poll(t0 + SECOND).unwrap(),
                Err(AuthError::MissingCredentials)
            );
        }
        assert_eq!(
            AuthError::MissingCredentials.to_string(),
            "Please enter email and password"
        );
    }

    #[test]
    fn slow_backend_times_out() {
        let auth = Authenticator::new(
            Arc::new(MockAuthBackend::new(SECOND * 5)),
            SECOND * 2,
        );
        let t0 = AppInstant::now();
        let mut req = auth.begin_login(creds("a@b.com", "x", Role::Client), t0);
        assert_eq!(req.remaining(t0), SECOND * 2);
        assert!(req.poll(t0 + SECOND).is_none());
        assert_eq!(
            req.poll(t0 + SECOND * 2).unwrap(),
            Err(AuthError::Timeout(SECOND * 2))
        );
    }

    #[test]
    fn cancelled_request_reports_cancellation_and_never_resolves() {
        let auth = Authenticator::mock(SECOND);
        let t0 = AppInstant::now();
        let mut req = auth.begin_login(creds("a@b.com", "x", Role::Client), t0);
        req.cancel();
        assert_eq!(req.poll(t0 + SECOND).unwrap(), Err(AuthError::Cancelled));
        assert!(req.poll(t0 + SECOND * 2).is_none());
    }

    #[test]
    fn remaining_counts_down() {
        let auth = Authenticator::mock(SECOND);
        let t0 = AppInstant::now();
        let req = auth.begin_login(creds("a@b.com", "x", Role::Client), t0);
        assert_eq!(req.remaining(t0 + Duration::from_millis(400)), Duration::from_millis(600));
        assert_eq!(req.remaining(t0 + SECOND * 3), Duration::ZERO);
    }

    #[test]
    fn password_mismatch_fails_immediately() {
        let auth = Authenticator::mock(SECOND);
        let result = auth.begin_register(registration("abc", "abd"), AppInstant::now());
        assert!(matches!(result, Err(AuthError::PasswordMismatch)));
        assert_eq!(AuthError::PasswordMismatch.to_string(), "Passwords do not match");
    }

    #[test]
    fn matching_registration_succeeds_after_delay() {
        let auth = Authenticator::mock(SECOND);
        let t0 = AppInstant::now();
        let mut req = auth.begin_register(registration("abc", "abc"), t0).unwrap();
        assert!(req.poll(t0).is_none());
        assert_eq!(req.poll(t0 + SECOND), Some(Ok(())));
    }

    #[test]
    fn registration_needs_a_full_name() {
        let mut reg = registration("abc", "abc");
        reg.full_name = "  ".into();
        assert_eq!(
            MockAuthBackend::default().register(&reg),
            Err(AuthError::MissingField("full name"))
        );
    }
}
