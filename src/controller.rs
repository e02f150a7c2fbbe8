//! Auth page controller: tab switching, validation and the submission
//! lifecycle of the login and signup forms.
//!
//! ARCHITECTURE
//! ============
//! `AuthController` owns the `AuthViewState` and is the only thing that
//! mutates it. Every mutation is mirrored onto an `AuthView` (the render
//! boundary), requests go through an `AuthApi`, and the post-success pause
//! goes through a `Timer`. The Leptos page supplies browser implementations
//! of all three; tests supply recording mocks.
//!
//! SUBMISSION LIFECYCLE
//! ====================
//! `Idle -> Validating -> Submitting -> {Idle with error, success pending
//! navigation}`. A failed validation never enters `Submitting`. Rejections
//! and transport failures release the loading state; a login success keeps
//! it until the browser navigates away.
//!
//! CONCURRENCY
//! ===========
//! Single-threaded. The in-flight flag of a form is checked and claimed
//! synchronously before the request future is created, and no `RefCell`
//! borrow is held across an `.await`, so a second submission of the same
//! form while one is outstanding is dropped. The two forms are independent.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::RefCell;

use crate::config::AuthConfig;
use crate::net::api::{ApiError, AuthApi};
use crate::net::types::AuthResponse;
use crate::state::auth_view::{Alert, AuthTab, AuthViewState, FocusTarget, FormKind, PasswordField};
use crate::util::timer::Timer;
use crate::util::validation::{LoginInput, SignupInput, ValidationError, validate_login, validate_signup};

/// Shown for transport failures and undecodable responses.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again.";

/// Shown on the login tab after a signup that did not redirect.
pub const ACCOUNT_CREATED_MESSAGE: &str = "Account created successfully! Please sign in.";

/// Render boundary between the controller and the document.
pub trait AuthView {
    /// Present `tab` and hide the other section.
    fn show_tab(&self, tab: AuthTab);
    /// Replace the alert area of `form`; `None` empties it.
    fn render_alert(&self, form: FormKind, alert: Option<&Alert>);
    /// Disable the submit control of `form` and show its busy label, or undo that.
    fn set_loading(&self, form: FormKind, loading: bool);
    fn set_masked(&self, field: PasswordField, masked: bool);
    fn focus(&self, target: FocusTarget);
    fn fill_login_fields(&self, email: &str, password: &str);
    fn navigate(&self, url: &str);
}

/// UI events the page forwards to the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    PageLoaded,
    SwitchTab(AuthTab),
    ToggleVisibility(PasswordField),
    DismissAlert(FormKind),
    SubmitLogin(LoginInput),
    SubmitSignup(SignupInput),
    FillDemoCredentials { email: String, password: String },
}

/// Terminal state of one submission attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Client validation failed; no request was sent.
    Invalid(ValidationError),
    /// A request for this form was already outstanding; nothing happened.
    InFlight,
    /// The server answered `success: false` with this message.
    Rejected(String),
    /// Transport or decode failure.
    Failed,
    /// The browser was sent to this URL.
    Navigated(String),
    /// Signup succeeded without a redirect; the login tab is now active.
    ReturnedToLogin,
}

pub struct AuthController<V, A, T> {
    state: RefCell<AuthViewState>,
    view: V,
    api: A,
    timer: T,
    config: AuthConfig,
}

impl<V: AuthView, A: AuthApi, T: Timer> AuthController<V, A, T> {
    pub fn new(view: V, api: A, timer: T, config: AuthConfig) -> Self {
        Self { state: RefCell::new(AuthViewState::default()), view, api, timer, config }
    }

    /// Snapshot of the current view state.
    pub fn state(&self) -> AuthViewState {
        self.state.borrow().clone()
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Dispatch one UI event. Submissions report their outcome.
    pub async fn handle(&self, event: UiEvent) -> Option<SubmitOutcome> {
        match event {
            UiEvent::PageLoaded => self.init(),
            UiEvent::SwitchTab(tab) => self.switch_tab(tab),
            UiEvent::ToggleVisibility(field) => {
                self.toggle_visibility(field);
            }
            UiEvent::DismissAlert(form) => self.clear_alert(form),
            UiEvent::FillDemoCredentials { email, password } => self.fill_demo_credentials(&email, &password),
            UiEvent::SubmitLogin(input) => return Some(self.submit_login(input).await),
            UiEvent::SubmitSignup(input) => return Some(self.submit_signup(input).await),
        }
        None
    }

    /// Render the initial tab and focus its primary field.
    pub fn init(&self) {
        let tab = self.state.borrow().active_tab;
        self.view.show_tab(tab);
        self.view.focus(tab.primary_field());
    }

    /// Activate `tab`, clear both alert areas and focus the tab's primary field.
    pub fn switch_tab(&self, tab: AuthTab) {
        self.state.borrow_mut().switch_tab(tab);
        log::debug!("auth tab -> {tab:?}");
        self.view.show_tab(tab);
        self.view.render_alert(FormKind::Login, None);
        self.view.render_alert(FormKind::Signup, None);
        self.view.focus(tab.primary_field());
    }

    /// Flip masking of `field`; returns the new masked flag.
    pub fn toggle_visibility(&self, field: PasswordField) -> bool {
        let masked = self.state.borrow_mut().toggle_visibility(field);
        self.view.set_masked(field, masked);
        masked
    }

    /// Put demo credentials into the login form and focus its button.
    pub fn fill_demo_credentials(&self, email: &str, password: &str) {
        self.view.fill_login_fields(email, password);
        self.view.focus(FocusTarget::LoginButton);
    }

    pub async fn submit_login(&self, input: LoginInput) -> SubmitOutcome {
        let form = FormKind::Login;
        let request = match self.prepare(form, validate_login(&input)) {
            Ok(request) => request,
            Err(outcome) => return outcome,
        };

        let result = self.api.login(&request).await;
        let response = match self.settle(form, result) {
            Ok(response) => response,
            Err(outcome) => return outcome,
        };

        // The button stays disabled until the page unloads.
        self.timer.sleep(self.config.redirect_delay_ms).await;
        let target = response.redirect_target().unwrap_or(self.config.default_redirect.as_str()).to_owned();
        log::info!("login succeeded; navigating to {target}");
        self.view.navigate(&target);
        SubmitOutcome::Navigated(target)
    }

    pub async fn submit_signup(&self, input: SignupInput) -> SubmitOutcome {
        let form = FormKind::Signup;
        let request = match self.prepare(form, validate_signup(&input)) {
            Ok(request) => request,
            Err(outcome) => return outcome,
        };

        let result = self.api.signup(&request).await;
        let response = match self.settle(form, result) {
            Ok(response) => response,
            Err(outcome) => return outcome,
        };

        self.timer.sleep(self.config.redirect_delay_ms).await;
        if let Some(target) = response.redirect_target() {
            log::info!("signup succeeded; navigating to {target}");
            self.view.navigate(target);
            return SubmitOutcome::Navigated(target.to_owned());
        }

        log::info!("signup succeeded; returning to login");
        self.finish_submit(form);
        self.switch_tab(AuthTab::Login);
        self.set_alert(FormKind::Login, Alert::success(ACCOUNT_CREATED_MESSAGE));
        SubmitOutcome::ReturnedToLogin
    }

    /// Steps before the request: duplicate guard, alert reset, validation,
    /// loading state.
    fn prepare<R>(&self, form: FormKind, validated: Result<R, ValidationError>) -> Result<R, SubmitOutcome> {
        if self.state.borrow().form(form).loading {
            log::warn!("{} submission dropped: request already in flight", form.as_str());
            return Err(SubmitOutcome::InFlight);
        }

        self.clear_alert(form);
        let request = match validated {
            Ok(request) => request,
            Err(e) => {
                log::debug!("{} validation failed: {e}", form.as_str());
                self.set_alert(form, Alert::danger(e.to_string()));
                return Err(SubmitOutcome::Invalid(e));
            }
        };

        if !self.state.borrow_mut().begin_submit(form) {
            return Err(SubmitOutcome::InFlight);
        }
        self.view.set_loading(form, true);
        log::info!("{} submission sent", form.as_str());
        Ok(request)
    }

    /// Apply a response to the form. Only a success passes through.
    fn settle(&self, form: FormKind, result: Result<AuthResponse, ApiError>) -> Result<AuthResponse, SubmitOutcome> {
        match result {
            Ok(response) if response.success => {
                self.set_alert(form, Alert::success(response.message.clone()));
                Ok(response)
            }
            Ok(response) => {
                log::info!("{} rejected by server", form.as_str());
                self.set_alert(form, Alert::danger(response.message.clone()));
                self.finish_submit(form);
                Err(SubmitOutcome::Rejected(response.message))
            }
            Err(e) => {
                log::error!("{} request failed: {e}", form.as_str());
                self.set_alert(form, Alert::danger(UNEXPECTED_ERROR_MESSAGE));
                self.finish_submit(form);
                Err(SubmitOutcome::Failed)
            }
        }
    }

    fn set_alert(&self, form: FormKind, alert: Alert) {
        self.view.render_alert(form, Some(&alert));
        self.state.borrow_mut().set_alert(form, alert);
    }

    fn clear_alert(&self, form: FormKind) {
        self.state.borrow_mut().clear_alert(form);
        self.view.render_alert(form, None);
    }

    fn finish_submit(&self, form: FormKind) {
        self.state.borrow_mut().finish_submit(form);
        self.view.set_loading(form, false);
    }
}
