use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn auth_view_state_defaults_to_login_tab() {
    let state = AuthViewState::default();
    assert_eq!(state.active_tab, AuthTab::Login);
    assert!(state.is_active(AuthTab::Login));
    assert!(!state.is_active(AuthTab::Signup));
}

#[test]
fn auth_view_state_defaults_idle_without_alerts() {
    let state = AuthViewState::default();
    assert_eq!(state.login, FormState::default());
    assert_eq!(state.signup, FormState::default());
    assert!(!state.submit_disabled(FormKind::Login));
    assert!(!state.submit_disabled(FormKind::Signup));
}

#[test]
fn password_fields_default_masked() {
    let visibility = PasswordVisibility::default();
    assert!(visibility.is_masked(PasswordField::LoginPassword));
    assert!(visibility.is_masked(PasswordField::SignupPassword));
    assert!(visibility.is_masked(PasswordField::ConfirmPassword));
}

// =============================================================
// Tabs
// =============================================================

#[test]
fn switch_tab_activates_exactly_one_tab() {
    let mut state = AuthViewState::default();
    state.switch_tab(AuthTab::Signup);
    assert!(state.is_active(AuthTab::Signup));
    assert!(!state.is_active(AuthTab::Login));

    state.switch_tab(AuthTab::Login);
    assert!(state.is_active(AuthTab::Login));
    assert!(!state.is_active(AuthTab::Signup));
}

#[test]
fn switch_tab_clears_both_alerts() {
    let mut state = AuthViewState::default();
    state.set_alert(FormKind::Login, Alert::danger("bad login"));
    state.set_alert(FormKind::Signup, Alert::success("ok"));

    state.switch_tab(AuthTab::Signup);
    assert_eq!(state.login.alert, None);
    assert_eq!(state.signup.alert, None);
}

#[test]
fn switch_tab_to_same_tab_still_clears_alerts() {
    let mut state = AuthViewState::default();
    state.set_alert(FormKind::Login, Alert::danger("x"));
    state.switch_tab(AuthTab::Login);
    assert_eq!(state.login.alert, None);
}

#[test]
fn switch_tab_keeps_loading_flags() {
    let mut state = AuthViewState::default();
    assert!(state.begin_submit(FormKind::Signup));
    state.switch_tab(AuthTab::Login);
    assert!(state.submit_disabled(FormKind::Signup));
}

#[test]
fn tab_subtitles_and_primary_fields() {
    assert_eq!(AuthTab::Login.subtitle(), "Sign in to your account");
    assert_eq!(AuthTab::Signup.subtitle(), "Create your account");
    assert_eq!(AuthTab::Login.primary_field(), FocusTarget::LoginEmail);
    assert_eq!(AuthTab::Signup.primary_field(), FocusTarget::SignupName);
    assert_eq!(AuthTab::Signup.form(), FormKind::Signup);
}

// =============================================================
// Alerts
// =============================================================

#[test]
fn set_alert_replaces_previous_message() {
    let mut state = AuthViewState::default();
    state.set_alert(FormKind::Login, Alert::danger("first"));
    state.set_alert(FormKind::Login, Alert::success("second"));
    assert_eq!(state.login.alert, Some(Alert::success("second")));
}

#[test]
fn alerts_are_scoped_to_their_form() {
    let mut state = AuthViewState::default();
    state.set_alert(FormKind::Signup, Alert::danger("signup only"));
    assert_eq!(state.login.alert, None);

    state.clear_alert(FormKind::Login);
    assert_eq!(state.signup.alert, Some(Alert::danger("signup only")));
}

#[test]
fn alert_css_class_uses_level() {
    assert_eq!(Alert::danger("x").css_class(), "alert alert-danger");
    assert_eq!(Alert::success("x").css_class(), "alert alert-success");
    assert_eq!(Alert::new(AlertLevel::Warning, "x").css_class(), "alert alert-warning");
    assert_eq!(Alert::new(AlertLevel::Info, "x").css_class(), "alert alert-info");
}

// =============================================================
// Visibility
// =============================================================

#[test]
fn toggle_visibility_twice_restores_masking() {
    let mut state = AuthViewState::default();
    let before = state.visibility;
    assert!(!state.toggle_visibility(PasswordField::SignupPassword));
    assert!(state.toggle_visibility(PasswordField::SignupPassword));
    assert_eq!(state.visibility, before);
}

#[test]
fn toggle_visibility_only_affects_target_field() {
    let mut state = AuthViewState::default();
    state.toggle_visibility(PasswordField::ConfirmPassword);
    assert!(!state.visibility.is_masked(PasswordField::ConfirmPassword));
    assert!(state.visibility.is_masked(PasswordField::LoginPassword));
    assert!(state.visibility.is_masked(PasswordField::SignupPassword));
}

// =============================================================
// Submission flag
// =============================================================

#[test]
fn begin_submit_claims_flag_once() {
    let mut state = AuthViewState::default();
    assert!(state.begin_submit(FormKind::Login));
    assert!(state.submit_disabled(FormKind::Login));
    assert!(!state.begin_submit(FormKind::Login));
}

#[test]
fn finish_submit_releases_flag() {
    let mut state = AuthViewState::default();
    assert!(state.begin_submit(FormKind::Login));
    state.finish_submit(FormKind::Login);
    assert!(!state.submit_disabled(FormKind::Login));
    assert!(state.begin_submit(FormKind::Login));
}

#[test]
fn forms_have_independent_flags() {
    let mut state = AuthViewState::default();
    assert!(state.begin_submit(FormKind::Login));
    assert!(state.begin_submit(FormKind::Signup));
    state.finish_submit(FormKind::Login);
    assert!(!state.submit_disabled(FormKind::Login));
    assert!(state.submit_disabled(FormKind::Signup));
}

#[test]
fn form_labels() {
    assert_eq!(FormKind::Login.idle_label(), "Sign In");
    assert_eq!(FormKind::Login.busy_label(), "Signing in...");
    assert_eq!(FormKind::Signup.idle_label(), "Create Account");
    assert_eq!(FormKind::Signup.busy_label(), "Creating account...");
}

#[test]
fn focus_targets_map_to_element_ids() {
    assert_eq!(FocusTarget::LoginEmail.element_id(), "login-email");
    assert_eq!(FocusTarget::SignupName.element_id(), "signup-name");
    assert_eq!(FocusTarget::LoginButton.element_id(), "login-button");
}
