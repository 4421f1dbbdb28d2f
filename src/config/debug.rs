//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Session gate transitions (restore, login, logout).
    pub log_session: bool,

    /// Every route resolution, including redirect hops.
    pub log_routing: bool,

    /// Records appended to the in-memory repositories.
    pub log_repository: bool,

    /// Login / registration requests being issued, resolved or cancelled.
    pub log_auth: bool,

    pub log_notices: bool,
}

pub const DF: LogFlags = LogFlags {
    log_session: true,
    log_auth: true,

    log_routing: false,
    log_repository: false,
    log_notices: false,
};
