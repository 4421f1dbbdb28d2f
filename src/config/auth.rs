//! Login, registration and license key settings.
use std::time::Duration;

/// Shape of generated license keys, e.g. `LIC-ABC123DEF456`.
pub struct LicenseKeyConfig {
    pub prefix: &'static str,
    /// Number of random alphanumerics after the prefix
    pub random_len: usize,
}

pub struct AuthConfig {
    /// How long the mock backend takes to answer a login or registration.
    pub mock_latency: Duration,
    /// Requests still unanswered after this are failed with a timeout.
    pub request_timeout: Duration,
    pub token_prefix: &'static str,
    pub license_key: LicenseKeyConfig,
    pub default_license_days: i64,
    pub default_robot_version: &'static str,
    /// Used when a license is generated without a client email.
    pub unassigned_client: &'static str,
    /// Platform label recorded on accounts connected from this app.
    pub connect_platform: &'static str,
}

pub const AUTH: AuthConfig = AuthConfig {
    mock_latency: Duration::from_millis(1000),
    request_timeout: Duration::from_secs(10),
    token_prefix: "mock-jwt-token-",
    license_key: LicenseKeyConfig {
        prefix: "LIC-",
        random_len: 12,
    },
    default_license_days: 30,
    default_robot_version: "1.0",
    unassigned_client: "Not assigned",
    connect_platform: "Web",
};
