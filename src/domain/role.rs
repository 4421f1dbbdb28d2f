use {
    serde::{Deserialize, Serialize},
    strum_macros::{AsRefStr, Display, EnumIter, EnumString},
};

/// Who is logged in. Stored verbatim (`"mentor"` / `"client"`) in durable storage.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    /// Sells robots, issues licenses.
    Mentor,
    /// Buys robots, connects trading accounts.
    #[default]
    Client,
}

impl Role {
    /// Capitalised form for form pickers.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Mentor => "Mentor",
            Self::Client => "Client",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn storage_form_round_trips() {
        for role in Role::iter() {
            assert_eq!(Role::from_str(role.as_ref()).unwrap(), role);
        }
        assert_eq!(Role::Mentor.to_string(), "mentor");
        assert_eq!(Role::Client.as_ref(), "client");
    }

    #[test]
    fn unknown_role_string_is_rejected() {
        assert!(Role::from_str("admin").is_err());
        assert!(Role::from_str("").is_err());
    }

    #[test]
    fn client_is_the_default_pick() {
        assert_eq!(Role::default(), Role::Client);
    }
}
