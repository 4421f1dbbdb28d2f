use {
    eframe::{
        Frame,
        egui::{Context, Visuals},
    },
    std::{mem, time::Duration},
};

use crate::{
    Cli,
    app::{
        AppState, ClientWorkspace, LoginState, MentorWorkspace, PhaseView, RegisterState,
        RunningState,
    },
    config::{AUTH, DF},
    data::{EframeStore, KeyValueStore, MemoryStore},
    domain::{Role, Route},
    session::{AuthError, Authenticator, Navigator, Screen, SessionGate},
    ui::{Notice, UI_CONFIG, UI_TEXT, render_loading},
    utils::AppInstant,
};

pub struct App {
    pub(crate) gate: SessionGate,
    pub(crate) navigator: Navigator,
    pub(crate) authenticator: Authenticator,
    pub(crate) login: LoginState,
    pub(crate) register: RegisterState,
    pub(crate) mentor: Option<MentorWorkspace>,
    pub(crate) client: Option<ClientWorkspace>,
    pub(crate) notice: Option<Notice>,
    pub(crate) logout_requested: bool,
    /// Used when eframe runs without persistence.
    fallback_store: MemoryStore,
    forget_session: bool,
    state: AppState,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        setup_custom_visuals(&cc.egui_ctx);
        if cc.storage.is_none() {
            log::warn!("No persistence available: the session will not survive a restart");
        }
        Self::from_cli(&args)
    }

    /// Everything except the egui context. Starts in the loading phase.
    pub(crate) fn from_cli(args: &Cli) -> Self {
        let latency = args
            .login_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(AUTH.mock_latency);
        Self {
            gate: SessionGate::new(),
            navigator: Navigator::new(Route::parse(&args.route)),
            authenticator: Authenticator::mock(latency),
            login: LoginState::default(),
            register: RegisterState::default(),
            mentor: None,
            client: None,
            notice: None,
            logout_requested: false,
            fallback_store: MemoryStore::new(),
            forget_session: args.forget_session,
            state: AppState::default(),
        }
    }

    /// Runs `f` against eframe's storage if there is one, else the in-memory fallback.
    fn with_store<R>(
        &mut self,
        frame: &mut Frame,
        f: impl FnOnce(&mut App, &mut dyn KeyValueStore) -> R,
    ) -> R {
        match frame.storage_mut() {
            Some(storage) => f(self, &mut EframeStore::new(storage)),
            None => {
                let mut store = mem::take(&mut self.fallback_store);
                let out = f(self, &mut store);
                self.fallback_store = store;
                out
            }
        }
    }

    pub(crate) fn tick_loading_state(&mut self, ctx: &Context, frame: &mut Frame) -> AppState {
        render_loading(ctx);
        self.with_store(frame, |app, store| app.restore_session(store));
        ctx.request_repaint();
        AppState::Running(RunningState)
    }

    /// RUNNING PHASE MAIN LOOP
    pub(crate) fn tick_running_state(&mut self, ctx: &Context, frame: &mut Frame) {
        let now = AppInstant::now();

        if mem::take(&mut self.logout_requested) {
            self.with_store(frame, |app, store| app.end_session(store));
        }
        self.with_store(frame, |app, store| app.poll_auth(store, now));

        let screen = self.current_screen();
        self.discard_abandoned_requests(screen);
        self.ensure_workspace();

        if self.gate.is_authenticated() {
            self.render_nav_bar(ctx);
        }
        match screen {
            Screen::Login => self.render_login(ctx),
            Screen::Register => self.render_register(ctx),
            Screen::Mentor(page) => self.render_mentor(ctx, page),
            Screen::Client(page) => self.render_client(ctx, page),
        }
        self.render_notice(ctx);

        if self.logout_requested {
            ctx.request_repaint();
        }
        if let Some(wait) = self.next_auth_deadline(now) {
            ctx.request_repaint_after(wait);
        }
    }

    pub(crate) fn restore_session<S: KeyValueStore + ?Sized>(&mut self, store: &mut S) {
        if self.forget_session {
            log::info!("Forgetting stored session as requested");
            self.gate.logout(store);
        }
        self.gate.restore(store);
    }

    /// Screen for the current route, following redirects.
    pub(crate) fn current_screen(&mut self) -> Screen {
        match self.navigator.settle(self.gate.role()) {
            Ok(screen) => screen,
            Err(err) => {
                log::error!("Routing failed: {}. Falling back to login.", err);
                self.navigator = Navigator::new(Route::Login);
                Screen::Login
            }
        }
    }

    pub(crate) fn navigate(&mut self, route: Route) {
        self.navigator.push(route);
    }

    pub(crate) fn raise_notice(&mut self, message: impl Into<String>) {
        let notice = Notice::new(message);
        if DF.log_notices {
            log::info!("Notice: {}", notice.message);
        }
        self.notice = Some(notice);
    }

    /// Starts a login with whatever is in the login form.
    /// Ignored while a request is in flight or a notice is waiting to be dismissed.
    pub(crate) fn submit_login(&mut self, now: AppInstant) {
        if self.login.is_busy() || self.notice.is_some() {
            return;
        }
        self.login.error = None;
        let request = self
            .authenticator
            .begin_login(self.login.form.clone(), now);
        self.login.pending = Some(request);
    }

    pub(crate) fn submit_register(&mut self, now: AppInstant) {
        if self.register.is_busy() || self.notice.is_some() {
            return;
        }
        match self
            .authenticator
            .begin_register(self.register.form.clone(), now)
        {
            Ok(request) => {
                self.register.error = None;
                self.register.pending = Some(request);
            }
            Err(err) => self.register.error = Some(err.to_string()),
        }
    }

    /// Delivers any login/registration answers that are due.
    pub(crate) fn poll_auth<S: KeyValueStore + ?Sized>(&mut self, store: &mut S, now: AppInstant) {
        if let Some(outcome) = self.login.pending.as_mut().and_then(|p| p.poll(now)) {
            self.login.pending = None;
            match outcome {
                Ok(grant) => {
                    if DF.log_auth {
                        log::info!("Login succeeded as {}", grant.role);
                    }
                    match self.gate.login(store, &grant.token, grant.role) {
                        Ok(()) => {
                            self.login.form.password.clear();
                            self.login.error = None;
                            // Guest pages all redirect away once logged in.
                            self.navigator = Navigator::new(self.navigator.current().clone());
                        }
                        Err(err) => self.login.error = Some(err.to_string()),
                    }
                }
                Err(AuthError::Cancelled) => {
                    if DF.log_auth {
                        log::info!("Login request discarded");
                    }
                }
                Err(err) => {
                    log::warn!("Login failed: {}", err);
                    self.login.error = Some(err.to_string());
                }
            }
        }

        if let Some(outcome) = self.register.pending.as_mut().and_then(|p| p.poll(now)) {
            self.register.pending = None;
            match outcome {
                Ok(()) => {
                    self.register = RegisterState::default();
                    self.raise_notice(&UI_TEXT.notice_registered);
                    self.navigate(Route::Login);
                }
                Err(AuthError::Cancelled) => {
                    if DF.log_auth {
                        log::info!("Registration request discarded");
                    }
                }
                Err(err) => self.register.error = Some(err.to_string()),
            }
        }
    }

    /// A request whose screen is no longer showing must not land later.
    fn discard_abandoned_requests(&mut self, screen: Screen) {
        if screen != Screen::Login {
            if let Some(mut request) = self.login.pending.take() {
                request.cancel();
                if DF.log_auth {
                    log::info!("Login request abandoned");
                }
            }
        }
        if screen != Screen::Register {
            if let Some(mut request) = self.register.pending.take() {
                request.cancel();
            }
        }
    }

    fn next_auth_deadline(&self, now: AppInstant) -> Option<Duration> {
        let login = self.login.pending.as_ref().map(|p| p.remaining(now));
        let register = self.register.pending.as_ref().map(|p| p.remaining(now));
        match (login, register) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub(crate) fn end_session<S: KeyValueStore + ?Sized>(&mut self, store: &mut S) {
        self.gate.logout(store);
        self.navigator = Navigator::new(Route::Login);
        self.mentor = None;
        self.client = None;
        self.login = LoginState::default();
    }

    /// Builds the seeded workspace for the logged-in role on first use.
    pub(crate) fn ensure_workspace(&mut self) {
        match self.gate.role() {
            Some(Role::Mentor) if self.mentor.is_none() => match MentorWorkspace::seeded() {
                Ok(ws) => self.mentor = Some(ws),
                Err(err) => log::error!("Failed to seed mentor workspace: {:#}", err),
            },
            Some(Role::Client) if self.client.is_none() => match ClientWorkspace::seeded() {
                Ok(ws) => self.client = Some(ws),
                Err(err) => log::error!("Failed to seed client workspace: {:#}", err),
            },
            _ => {}
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        let current = mem::take(&mut self.state);
        self.state = match current {
            AppState::Loading(mut s) => s.tick(self, ctx, frame),
            AppState::Running(mut s) => s.tick(self, ctx, frame),
        };
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
}
