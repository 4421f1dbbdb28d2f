use crate::config::{ClientFigures, MentorFigures};

/// Headline figures on the mentor home page. Fixed mock values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MentorStats {
    pub total_robots: u32,
    pub active_licenses: u32,
    pub total_clients: u32,
    pub monthly_revenue: u32,
}

impl From<&MentorFigures> for MentorStats {
    fn from(f: &MentorFigures) -> Self {
        Self {
            total_robots: f.total_robots,
            active_licenses: f.active_licenses,
            total_clients: f.total_clients,
            monthly_revenue: f.monthly_revenue,
        }
    }
}

/// Headline figures on the client home page. Fixed mock values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClientStats {
    pub active_robots: u32,
    pub connected_accounts: u32,
    pub expiring_soon: u32,
}

impl From<&ClientFigures> for ClientStats {
    fn from(f: &ClientFigures) -> Self {
        Self {
            active_robots: f.active_robots,
            connected_accounts: f.connected_accounts,
            expiring_soon: f.expiring_soon,
        }
    }
}
