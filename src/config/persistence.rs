//! Durable storage configuration

/// Keys used for the session in durable storage.
/// In the browser build these are plain `localStorage` keys.
pub struct SessionKeys {
    pub token: &'static str,
    pub role: &'static str,
}

/// Configuration for Application State Persistence
pub struct AppPersistenceConfig {
    /// Path for saving/loading application state (native only)
    pub state_path: &'static str,
}

/// The Master Persistence Configuration
pub struct PersistenceConfig {
    pub session: SessionKeys,
    pub app: AppPersistenceConfig,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    session: SessionKeys {
        token: "token",
        role: "userRole",
    },
    app: AppPersistenceConfig {
        state_path: ".states.json",
    },
};
