use {
    crate::domain::Role,
    std::fmt,
    strum_macros::{Display, EnumIter},
};

/// Pages inside the mentor portal, in sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
pub enum MentorPage {
    #[default]
    #[strum(to_string = "Dashboard")]
    Home,
    #[strum(to_string = "My Robots")]
    Robots,
    #[strum(to_string = "License Manager")]
    Licenses,
    #[strum(to_string = "Clients")]
    Clients,
}

impl MentorPage {
    fn segment(&self) -> Option<&'static str> {
        match self {
            Self::Home => None,
            Self::Robots => Some("robots"),
            Self::Licenses => Some("licenses"),
            Self::Clients => Some("clients"),
        }
    }

    fn from_segment(segment: &str) -> Self {
        match segment {
            "robots" => Self::Robots,
            "licenses" => Self::Licenses,
            "clients" => Self::Clients,
            _ => Self::Home,
        }
    }
}

/// Pages inside the client portal, in sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
pub enum ClientPage {
    #[default]
    #[strum(to_string = "Dashboard")]
    Home,
    #[strum(to_string = "My Robots")]
    Robots,
    #[strum(to_string = "MT5 Accounts")]
    Mt5,
    #[strum(to_string = "Activate License")]
    Licenses,
}

impl ClientPage {
    fn segment(&self) -> Option<&'static str> {
        match self {
            Self::Home => None,
            Self::Robots => Some("robots"),
            Self::Mt5 => Some("mt5"),
            Self::Licenses => Some("licenses"),
        }
    }

    fn from_segment(segment: &str) -> Self {
        match segment {
            "robots" => Self::Robots,
            "mt5" => Self::Mt5,
            "licenses" => Self::Licenses,
            _ => Self::Home,
        }
    }
}

/// A parsed location. Unmatched sub-pages of a portal fall back to its home page,
/// unmatched top-level paths are kept as `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Root,
    Login,
    Register,
    Mentor(MentorPage),
    Client(ClientPage),
    Unknown(String),
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim().trim_matches('/');
        let mut segments = trimmed.split('/').filter(|s| !s.is_empty());
        let head = segments.next();
        let sub = segments.next();

        match head {
            None => Self::Root,
            Some("login") => Self::Login,
            Some("register") => Self::Register,
            Some("mentor") => Self::Mentor(sub.map(MentorPage::from_segment).unwrap_or_default()),
            Some("client") => Self::Client(sub.map(ClientPage::from_segment).unwrap_or_default()),
            Some(_) => Self::Unknown(format!("/{}", trimmed)),
        }
    }

    /// Landing page of a role's portal.
    pub fn home_for(role: Role) -> Self {
        match role {
            Role::Mentor => Self::Mentor(MentorPage::Home),
            Role::Client => Self::Client(ClientPage::Home),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Root => "/".to_string(),
            Self::Login => "/login".to_string(),
            Self::Register => "/register".to_string(),
            Self::Mentor(page) => match page.segment() {
                Some(s) => format!("/mentor/{}", s),
                None => "/mentor".to_string(),
            },
            Self::Client(page) => match page.segment() {
                Some(s) => format!("/client/{}", s),
                None => "/client".to_string(),
            },
            Self::Unknown(path) => path.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn parses_every_documented_path() {
        assert_eq!(Route::parse("/"), Route::Root);
        assert_eq!(Route::parse(""), Route::Root);
        assert_eq!(Route::parse("/login"), Route::Login);
        assert_eq!(Route::parse("/register"), Route::Register);
        assert_eq!(Route::parse("/mentor"), Route::Mentor(MentorPage::Home));
        assert_eq!(Route::parse("/mentor/robots"), Route::Mentor(MentorPage::Robots));
        assert_eq!(Route::parse("/mentor/licenses"), Route::Mentor(MentorPage::Licenses));
        assert_eq!(Route::parse("/mentor/clients"), Route::Mentor(MentorPage::Clients));
        assert_eq!(Route::parse("/client"), Route::Client(ClientPage::Home));
        assert_eq!(Route::parse("/client/robots"), Route::Client(ClientPage::Robots));
        assert_eq!(Route::parse("/client/mt5"), Route::Client(ClientPage::Mt5));
        assert_eq!(Route::parse("/client/licenses"), Route::Client(ClientPage::Licenses));
    }

    #[test]
    fn tolerates_trailing_slashes_and_whitespace() {
        assert_eq!(Route::parse(" /mentor/robots/ "), Route::Mentor(MentorPage::Robots));
        assert_eq!(Route::parse("login/"), Route::Login);
    }

    #[test]
    fn unmatched_portal_subpage_lands_on_portal_home() {
        assert_eq!(Route::parse("/mentor/nope"), Route::Mentor(MentorPage::Home));
        assert_eq!(Route::parse("/client/a/b"), Route::Client(ClientPage::Home));
    }

    #[test]
    fn unmatched_top_level_is_unknown() {
        assert_eq!(Route::parse("/admin/x"), Route::Unknown("/admin/x".to_string()));
    }

    #[test]
    fn path_is_inverse_of_parse_for_known_routes() {
        let mut routes = vec![Route::Root, Route::Login, Route::Register];
        routes.extend(MentorPage::iter().map(Route::Mentor));
        routes.extend(ClientPage::iter().map(Route::Client));
        for route in routes {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn role_homes() {
        assert_eq!(Route::home_for(Role::Mentor).path(), "/mentor");
        assert_eq!(Route::home_for(Role::Client).path(), "/client");
    }
}
