//! Sample records shown on first render of each dashboard page.
//! Dates are ISO-8601 strings and are parsed when the repositories are seeded.

pub struct SeedRobot {
    pub name: &'static str,
    pub description: &'static str,
    pub version: &'static str,
    pub monthly_price: u32,
}

pub struct SeedLicense {
    pub key: &'static str,
    pub robot_name: &'static str,
    pub client_email: &'static str,
    pub expires_on: &'static str,
    pub active: bool,
}

pub struct SeedClient {
    pub full_name: &'static str,
    pub email: &'static str,
    pub active_licenses: u32,
    pub joined_on: &'static str,
}

pub struct SeedAccount {
    pub account_number: &'static str,
    pub server: &'static str,
    pub platform: &'static str,
    pub last_sync: &'static str,
}

pub struct SeedOwnedRobot {
    pub name: &'static str,
    pub license_key: &'static str,
    pub expires_on: &'static str,
    pub active: bool,
}

pub struct MentorFigures {
    pub total_robots: u32,
    pub active_licenses: u32,
    pub total_clients: u32,
    pub monthly_revenue: u32,
}

pub struct ClientFigures {
    pub active_robots: u32,
    pub connected_accounts: u32,
    pub expiring_soon: u32,
}

pub struct DemoConfig {
    pub robots: &'static [SeedRobot],
    pub licenses: &'static [SeedLicense],
    pub clients: &'static [SeedClient],
    pub accounts: &'static [SeedAccount],
    pub owned_robots: &'static [SeedOwnedRobot],
    pub mentor_figures: MentorFigures,
    pub client_figures: ClientFigures,
}

pub const DEMO: DemoConfig = DemoConfig {
    robots: &[
        SeedRobot {
            name: "Gold Trader Pro",
            description: "Advanced gold trading EA",
            version: "2.1",
            monthly_price: 99,
        },
        SeedRobot {
            name: "Forex Scalper",
            description: "High-frequency scalping robot",
            version: "1.5",
            monthly_price: 149,
        },
        SeedRobot {
            name: "Trend Master",
            description: "Trend-following expert advisor",
            version: "3.0",
            monthly_price: 79,
        },
    ],
    licenses: &[
        SeedLicense {
            key: "LIC-ABC123DEF456",
            robot_name: "Gold Trader Pro",
            client_email: "client1@email.com",
            expires_on: "2024-12-31",
            active: true,
        },
        SeedLicense {
            key: "LIC-GHI789JKL012",
            robot_name: "Forex Scalper",
            client_email: "client2@email.com",
            expires_on: "2024-11-15",
            active: true,
        },
    ],
    clients: &[
        SeedClient {
            full_name: "John Smith",
            email: "john@email.com",
            active_licenses: 2,
            joined_on: "2024-01-15",
        },
        SeedClient {
            full_name: "Sarah Johnson",
            email: "sarah@email.com",
            active_licenses: 1,
            joined_on: "2024-02-20",
        },
        SeedClient {
            full_name: "Mike Wilson",
            email: "mike@email.com",
            active_licenses: 3,
            joined_on: "2024-03-10",
        },
    ],
    accounts: &[SeedAccount {
        account_number: "12345678",
        server: "MetaQuotes-Demo",
        platform: "Windows",
        last_sync: "2024-10-20T10:30:00",
    }],
    owned_robots: &[
        SeedOwnedRobot {
            name: "Gold Trader Pro",
            license_key: "LIC-ABC123DEF456",
            expires_on: "2024-12-31",
            active: true,
        },
        SeedOwnedRobot {
            name: "Forex Scalper",
            license_key: "LIC-GHI789JKL012",
            expires_on: "2024-11-15",
            active: true,
        },
    ],
    mentor_figures: MentorFigures {
        total_robots: 3,
        active_licenses: 15,
        total_clients: 8,
        monthly_revenue: 1250,
    },
    client_figures: ClientFigures {
        active_robots: 2,
        connected_accounts: 1,
        expiring_soon: 1,
    },
};
