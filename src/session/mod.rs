//! Session lifecycle: who is logged in, how they got there, and what they may see.
mod auth;
mod gate;
mod router;

pub use {
    auth::{
        AuthBackend, AuthError, AuthGrant, Authenticator, Credentials, MockAuthBackend,
        PendingRequest, Registration,
    },
    gate::{SessionError, SessionGate, SessionState},
    router::{Navigator, Resolution, RouteError, Screen, resolve},
};
