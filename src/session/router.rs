use {
    crate::{
        config::DF,
        domain::{ClientPage, MentorPage, Role, Route},
    },
    thiserror::Error,
};

/// Upper bound on redirect hops in one navigation. The table below settles in two.
const MAX_REDIRECTS: usize = 4;

/// What ends up on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Register,
    Mentor(MentorPage),
    Client(ClientPage),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Render(Screen),
    Redirect(Route),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("redirect loop starting at {0}")]
    RedirectLoop(String),
}

/// Role gate. `session` is `None` when nobody is logged in.
///
/// A role that does not own the section is sent to `/login`, never shown an error.
pub fn resolve(session: Option<Role>, route: &Route) -> Resolution {
    match (route, session) {
        (Route::Login, None) => Resolution::Render(Screen::Login),
        (Route::Register, None) => Resolution::Render(Screen::Register),
        (Route::Login | Route::Register | Route::Root, Some(role)) => {
            Resolution::Redirect(Route::home_for(role))
        }
        (Route::Root, None) => Resolution::Redirect(Route::Login),
        (Route::Mentor(page), Some(Role::Mentor)) => Resolution::Render(Screen::Mentor(*page)),
        (Route::Client(page), Some(Role::Client)) => Resolution::Render(Screen::Client(*page)),
        (Route::Mentor(_) | Route::Client(_), _) => Resolution::Redirect(Route::Login),
        (Route::Unknown(_), _) => Resolution::Redirect(Route::Root),
    }
}

/// Current location plus back-history. Redirects replace the current entry.
#[derive(Debug, Clone)]
pub struct Navigator {
    current: Route,
    history: Vec<Route>,
}

impl Navigator {
    pub fn new(initial: Route) -> Self {
        Self {
            current: initial,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// User-initiated move. Navigating to where we already are is a no-op.
    pub fn push(&mut self, route: Route) {
        if route == self.current {
            return;
        }
        if DF.log_routing {
            log::info!("Navigate {} -> {}", self.current, route);
        }
        let previous = std::mem::replace(&mut self.current, route);
        self.history.push(previous);
    }

    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(route) => {
                self.current = route;
                true
            }
            None => false,
        }
    }

    /// Follows redirects from the current route until something renders.
    pub fn settle(&mut self, session: Option<Role>) -> Result<Screen, RouteError> {
        let start = self.current.clone();
        for _ in 0..=MAX_REDIRECTS {
            match resolve(session, &self.current) {
                Resolution::Render(screen) => return Ok(screen),
                Resolution::Redirect(target) => {
                    if DF.log_routing {
                        log::info!("Redirect {} -> {}", self.current, target);
                    }
                    self.current = target;
                }
            }
        }
        Err(RouteError::RedirectLoop(start.path()))
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Route::Root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn redirect(path: &str) -> Resolution {
        Resolution::Redirect(Route::parse(path))
    }

    #[test]
    fn guest_table() {
        assert_eq!(resolve(None, &Route::Login), Resolution::Render(Screen::Login));
        assert_eq!(resolve(None, &Route::Register), Resolution::Render(Screen::Register));
        assert_eq!(resolve(None, &Route::Root), redirect("/login"));
        assert_eq!(resolve(None, &Route::parse("/mentor/robots")), redirect("/login"));
        assert_eq!(resolve(None, &Route::parse("/client/mt5")), redirect("/login"));
    }

    #[test]
    fn logged_in_users_bounce_off_auth_pages() {
        for route in [Route::Login, Route::Register, Route::Root] {
            assert_eq!(resolve(Some(Role::Mentor), &route), redirect("/mentor"));
            assert_eq!(resolve(Some(Role::Client), &route), redirect("/client"));
        }
    }

    #[test]
    fn sections_are_role_gated() {
        for page in MentorPage::iter() {
            let route = Route::Mentor(page);
            assert_eq!(
                resolve(Some(Role::Mentor), &route),
                Resolution::Render(Screen::Mentor(page))
            );
            assert_eq!(resolve(Some(Role::Client), &route), redirect("/login"));
        }
        for page in ClientPage::iter() {
            let route = Route::Client(page);
            assert_eq!(
                resolve(Some(Role::Client), &route),
                Resolution::Render(Screen::Client(page))
            );
            assert_eq!(resolve(Some(Role::Mentor), &route), redirect("/login"));
        }
    }

    #[test]
    fn client_visiting_mentor_section_settles_on_their_home() {
        // /mentor -> /login -> /client
        let mut nav = Navigator::new(Route::parse("/mentor/licenses"));
        let screen = nav.settle(Some(Role::Client)).unwrap();
        assert_eq!(screen, Screen::Client(ClientPage::Home));
        assert_eq!(nav.current().path(), "/client");
    }

    #[test]
    fn root_dispatches_by_role() {
        let mut nav = Navigator::default();
        assert_eq!(nav.settle(Some(Role::Mentor)).unwrap(), Screen::Mentor(MentorPage::Home));
        assert_eq!(nav.current().path(), "/mentor");

        let mut nav = Navigator::default();
        assert_eq!(nav.settle(None).unwrap(), Screen::Login);
        assert_eq!(nav.current().path(), "/login");
    }

    #[test]
    fn unknown_path_goes_through_root() {
        let mut nav = Navigator::new(Route::parse("/pricing"));
        assert_eq!(nav.settle(None).unwrap(), Screen::Login);
    }

    #[test]
    fn logout_returns_to_login() {
        let mut nav = Navigator::new(Route::parse("/mentor/robots"));
        assert!(matches!(nav.settle(Some(Role::Mentor)), Ok(Screen::Mentor(_))));
        assert_eq!(nav.settle(None).unwrap(), Screen::Login);
        assert_eq!(nav.current(), &Route::Login);
    }

    #[test]
    fn redirects_do_not_enter_history() {
        let mut nav = Navigator::default();
        nav.settle(Some(Role::Client)).unwrap();
        assert!(!nav.can_go_back());
        nav.push(Route::Client(ClientPage::Mt5));
        nav.push(Route::Client(ClientPage::Mt5));
        assert!(nav.back());
        assert_eq!(nav.current(), &Route::Client(ClientPage::Home));
        assert!(!nav.back());
    }
}
