//! Ephemeral view state for the login / signup page.
//!
//! DESIGN
//! ======
//! This is the single source of truth for which tab is shown, which alert
//! each form displays, whether a submission is in flight and how each
//! password field is masked. Only `AuthController` mutates it; the render
//! boundary (`AuthView`) mirrors whatever changes here.
//!
//! INVARIANTS
//! ==========
//! - Exactly one tab is active at a time.
//! - `switch_tab` clears the alerts of both forms.
//! - A form's submit control is disabled iff its `loading` flag is set, and
//!   the flag is claimed in one synchronous step by `begin_submit`.

#[cfg(test)]
#[path = "auth_view_test.rs"]
mod auth_view_test;

/// Which of the two mutually exclusive form sections is presented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthTab {
    #[default]
    Login,
    Signup,
}

impl AuthTab {
    /// Subtitle shown under the page heading while this tab is active.
    pub fn subtitle(self) -> &'static str {
        match self {
            Self::Login => "Sign in to your account",
            Self::Signup => "Create your account",
        }
    }

    /// Field that receives focus when this tab becomes active.
    pub fn primary_field(self) -> FocusTarget {
        match self {
            Self::Login => FocusTarget::LoginEmail,
            Self::Signup => FocusTarget::SignupName,
        }
    }

    /// The form rendered inside this tab.
    pub fn form(self) -> FormKind {
        match self {
            Self::Login => FormKind::Login,
            Self::Signup => FormKind::Signup,
        }
    }
}

/// One of the two forms on the page. Each owns an alert area and a loading
/// flag, independent of the other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    Login,
    Signup,
}

impl FormKind {
    /// Submit button label while idle.
    pub fn idle_label(self) -> &'static str {
        match self {
            Self::Login => "Sign In",
            Self::Signup => "Create Account",
        }
    }

    /// Submit button label while a request is in flight.
    pub fn busy_label(self) -> &'static str {
        match self {
            Self::Login => "Signing in...",
            Self::Signup => "Creating account...",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Signup => "signup",
        }
    }
}

/// Severity of an alert, mapped onto the `alert-{level}` CSS modifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertLevel {
    Info,
    Success,
    Warning,
    Danger,
}

impl AlertLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

/// The most recent user-facing message of a form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub message: String,
    pub level: AlertLevel,
}

impl Alert {
    pub fn new(level: AlertLevel, message: impl Into<String>) -> Self {
        Self { message: message.into(), level }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(AlertLevel::Success, message)
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self::new(AlertLevel::Danger, message)
    }

    /// CSS classes for the alert container, e.g. `alert alert-danger`.
    pub fn css_class(&self) -> String {
        format!("alert alert-{}", self.level.as_str())
    }
}

/// Password inputs whose masking can be toggled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasswordField {
    LoginPassword,
    SignupPassword,
    ConfirmPassword,
}

/// Elements the controller can move focus to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusTarget {
    LoginEmail,
    SignupName,
    LoginButton,
}

impl FocusTarget {
    /// DOM id of the element.
    pub fn element_id(self) -> &'static str {
        match self {
            Self::LoginEmail => "login-email",
            Self::SignupName => "signup-name",
            Self::LoginButton => "login-button",
        }
    }
}

/// Masking of each password input; `true` means rendered as dots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PasswordVisibility {
    pub login_password: bool,
    pub signup_password: bool,
    pub confirm_password: bool,
}

impl Default for PasswordVisibility {
    fn default() -> Self {
        Self { login_password: true, signup_password: true, confirm_password: true }
    }
}

impl PasswordVisibility {
    pub fn is_masked(&self, field: PasswordField) -> bool {
        match field {
            PasswordField::LoginPassword => self.login_password,
            PasswordField::SignupPassword => self.signup_password,
            PasswordField::ConfirmPassword => self.confirm_password,
        }
    }

    fn slot_mut(&mut self, field: PasswordField) -> &mut bool {
        match field {
            PasswordField::LoginPassword => &mut self.login_password,
            PasswordField::SignupPassword => &mut self.signup_password,
            PasswordField::ConfirmPassword => &mut self.confirm_password,
        }
    }
}

/// Per-form state: in-flight flag plus the current alert.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub loading: bool,
    pub alert: Option<Alert>,
}

/// Whole-page view state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthViewState {
    pub active_tab: AuthTab,
    pub login: FormState,
    pub signup: FormState,
    pub visibility: PasswordVisibility,
}

impl AuthViewState {
    pub fn form(&self, kind: FormKind) -> &FormState {
        match kind {
            FormKind::Login => &self.login,
            FormKind::Signup => &self.signup,
        }
    }

    fn form_mut(&mut self, kind: FormKind) -> &mut FormState {
        match kind {
            FormKind::Login => &mut self.login,
            FormKind::Signup => &mut self.signup,
        }
    }

    /// Activate `tab` and clear both alert areas.
    pub fn switch_tab(&mut self, tab: AuthTab) {
        self.active_tab = tab;
        self.login.alert = None;
        self.signup.alert = None;
    }

    pub fn is_active(&self, tab: AuthTab) -> bool {
        self.active_tab == tab
    }

    /// Replace the alert of `kind`.
    pub fn set_alert(&mut self, kind: FormKind, alert: Alert) {
        self.form_mut(kind).alert = Some(alert);
    }

    pub fn clear_alert(&mut self, kind: FormKind) {
        self.form_mut(kind).alert = None;
    }

    /// Flip the masking of `field`, returning the new masked flag.
    pub fn toggle_visibility(&mut self, field: PasswordField) -> bool {
        let slot = self.visibility.slot_mut(field);
        *slot = !*slot;
        *slot
    }

    /// Claim the in-flight flag for `kind`.
    ///
    /// Returns `false` without touching state when a request is already
    /// outstanding for that form.
    pub fn begin_submit(&mut self, kind: FormKind) -> bool {
        let form = self.form_mut(kind);
        if form.loading {
            return false;
        }
        form.loading = true;
        true
    }

    /// Release the in-flight flag for `kind`.
    pub fn finish_submit(&mut self, kind: FormKind) {
        self.form_mut(kind).loading = false;
    }

    /// Whether the submit control of `kind` must be rendered disabled.
    pub fn submit_disabled(&self, kind: FormKind) -> bool {
        self.form(kind).loading
    }
}
