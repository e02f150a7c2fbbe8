//! Login / signup page.
//!
//! ARCHITECTURE
//! ============
//! The page owns the input signals and a `SignalView`, the signal-backed
//! `AuthView` the controller renders into. DOM events become `UiEvent`s and
//! are handed to `AuthController::handle` on the local executor; the page
//! holds no auth logic of its own.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::rc::Rc;

use leptos::prelude::*;

use crate::config::{AuthConfig, DemoAccount};
use crate::controller::{AuthController, AuthView, UiEvent};
use crate::net::api::HttpAuthApi;
use crate::state::auth_view::{Alert, AuthTab, FocusTarget, FormKind, PasswordField};
use crate::util::browser;
use crate::util::timer::BrowserTimer;
use crate::util::validation::{LoginInput, SignupInput};

/// `AuthView` backed by Leptos signals.
#[derive(Clone, Copy, Debug)]
pub struct SignalView {
    pub active_tab: RwSignal<AuthTab>,
    pub login_alert: RwSignal<Option<Alert>>,
    pub signup_alert: RwSignal<Option<Alert>>,
    pub login_loading: RwSignal<bool>,
    pub signup_loading: RwSignal<bool>,
    pub login_password_masked: RwSignal<bool>,
    pub signup_password_masked: RwSignal<bool>,
    pub confirm_password_masked: RwSignal<bool>,
    pub login_email: RwSignal<String>,
    pub login_password: RwSignal<String>,
}

impl Default for SignalView {
    fn default() -> Self {
        Self {
            active_tab: RwSignal::new(AuthTab::default()),
            login_alert: RwSignal::new(None),
            signup_alert: RwSignal::new(None),
            login_loading: RwSignal::new(false),
            signup_loading: RwSignal::new(false),
            login_password_masked: RwSignal::new(true),
            signup_password_masked: RwSignal::new(true),
            confirm_password_masked: RwSignal::new(true),
            login_email: RwSignal::new(String::new()),
            login_password: RwSignal::new(String::new()),
        }
    }
}

impl SignalView {
    fn alert(self, form: FormKind) -> RwSignal<Option<Alert>> {
        match form {
            FormKind::Login => self.login_alert,
            FormKind::Signup => self.signup_alert,
        }
    }

    fn loading(self, form: FormKind) -> RwSignal<bool> {
        match form {
            FormKind::Login => self.login_loading,
            FormKind::Signup => self.signup_loading,
        }
    }

    fn masked(self, field: PasswordField) -> RwSignal<bool> {
        match field {
            PasswordField::LoginPassword => self.login_password_masked,
            PasswordField::SignupPassword => self.signup_password_masked,
            PasswordField::ConfirmPassword => self.confirm_password_masked,
        }
    }
}

impl AuthView for SignalView {
    fn show_tab(&self, tab: AuthTab) {
        self.active_tab.set(tab);
    }

    fn render_alert(&self, form: FormKind, alert: Option<&Alert>) {
        self.alert(form).set(alert.cloned());
    }

    fn set_loading(&self, form: FormKind, loading: bool) {
        self.loading(form).set(loading);
    }

    fn set_masked(&self, field: PasswordField, masked: bool) {
        self.masked(field).set(masked);
    }

    fn focus(&self, target: FocusTarget) {
        browser::focus_element(target.element_id());
    }

    fn fill_login_fields(&self, email: &str, password: &str) {
        self.login_email.set(email.to_owned());
        self.login_password.set(password.to_owned());
    }

    fn navigate(&self, url: &str) {
        browser::navigate_to(url);
    }
}

type PageController = AuthController<SignalView, HttpAuthApi, BrowserTimer>;

fn input_type(masked: bool) -> &'static str {
    if masked { "password" } else { "text" }
}

fn toggle_icon_class(masked: bool) -> &'static str {
    if masked { "fas fa-eye" } else { "fas fa-eye-slash" }
}

fn submit_label(form: FormKind, loading: bool) -> &'static str {
    if loading { form.busy_label() } else { form.idle_label() }
}

fn tab_class(active: bool) -> &'static str {
    if active { "auth-tab active" } else { "auth-tab" }
}

fn section_class(active: bool) -> &'static str {
    if active { "auth-section active" } else { "auth-section" }
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let config = use_context::<AuthConfig>().unwrap_or_default();
    let demo_accounts = config.demo_accounts.clone();
    let view = SignalView::default();

    let remember_me = RwSignal::new(false);
    let signup_name = RwSignal::new(String::new());
    let signup_email = RwSignal::new(String::new());
    let signup_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let agree_terms = RwSignal::new(false);

    let controller: Rc<PageController> =
        Rc::new(AuthController::new(view, HttpAuthApi::new(&config), BrowserTimer, config));
    let controller = StoredValue::new_local(controller);

    let dispatch = move |event: UiEvent| {
        let controller = controller.get_value();
        leptos::task::spawn_local(async move {
            controller.handle(event).await;
        });
    };

    Effect::new(move || dispatch(UiEvent::PageLoaded));

    let on_login = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        dispatch(UiEvent::SubmitLogin(LoginInput {
            email: view.login_email.get_untracked(),
            password: view.login_password.get_untracked(),
            remember_me: remember_me.get_untracked(),
        }));
    };

    let on_signup = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        dispatch(UiEvent::SubmitSignup(SignupInput {
            name: signup_name.get_untracked(),
            email: signup_email.get_untracked(),
            password: signup_password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
            agree_terms: agree_terms.get_untracked(),
        }));
    };

    let is_active = move |tab: AuthTab| view.active_tab.get() == tab;

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome"</h1>
                <p class="auth-card__subtitle">{move || view.active_tab.get().subtitle()}</p>

                <div class="auth-tabs" role="tablist">
                    <button
                        type="button"
                        class=move || tab_class(is_active(AuthTab::Login))
                        on:click=move |_| dispatch(UiEvent::SwitchTab(AuthTab::Login))
                    >
                        "Sign In"
                    </button>
                    <button
                        type="button"
                        class=move || tab_class(is_active(AuthTab::Signup))
                        on:click=move |_| dispatch(UiEvent::SwitchTab(AuthTab::Signup))
                    >
                        "Sign Up"
                    </button>
                </div>

                <section class=move || section_class(is_active(AuthTab::Login))>
                    {alert_area(view.login_alert, move || dispatch(UiEvent::DismissAlert(FormKind::Login)))}
                    <form class="auth-form" on:submit=on_login>
                        <input
                            id=FocusTarget::LoginEmail.element_id()
                            class="auth-input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || view.login_email.get()
                            on:input=move |ev| view.login_email.set(event_target_value(&ev))
                        />
                        <div class="auth-password">
                            <input
                                class="auth-input"
                                type=move || input_type(view.login_password_masked.get())
                                placeholder="Password"
                                prop:value=move || view.login_password.get()
                                on:input=move |ev| view.login_password.set(event_target_value(&ev))
                            />
                            <button
                                type="button"
                                class="auth-password__toggle"
                                aria-label="Toggle password visibility"
                                on:click=move |_| dispatch(UiEvent::ToggleVisibility(PasswordField::LoginPassword))
                            >
                                <i class=move || toggle_icon_class(view.login_password_masked.get())></i>
                            </button>
                        </div>
                        <label class="auth-check">
                            <input
                                type="checkbox"
                                prop:checked=move || remember_me.get()
                                on:change=move |ev| remember_me.set(event_target_checked(&ev))
                            />
                            "Remember me"
                        </label>
                        <button
                            id=FocusTarget::LoginButton.element_id()
                            class="auth-button"
                            type="submit"
                            disabled=move || view.login_loading.get()
                        >
                            {move || submit_label(FormKind::Login, view.login_loading.get())}
                        </button>
                    </form>
                    <div class="auth-demo">
                        {demo_accounts
                            .into_iter()
                            .map(|DemoAccount { label, email, password }| {
                                view! {
                                    <button
                                        type="button"
                                        class="auth-demo__button"
                                        on:click=move |_| {
                                            dispatch(UiEvent::FillDemoCredentials {
                                                email: email.clone(),
                                                password: password.clone(),
                                            });
                                        }
                                    >
                                        {label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>

                <section class=move || section_class(is_active(AuthTab::Signup))>
                    {alert_area(view.signup_alert, move || dispatch(UiEvent::DismissAlert(FormKind::Signup)))}
                    <form class="auth-form" on:submit=on_signup>
                        <input
                            id=FocusTarget::SignupName.element_id()
                            class="auth-input"
                            type="text"
                            placeholder="Full name"
                            prop:value=move || signup_name.get()
                            on:input=move |ev| signup_name.set(event_target_value(&ev))
                        />
                        <input
                            class="auth-input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || signup_email.get()
                            on:input=move |ev| signup_email.set(event_target_value(&ev))
                        />
                        <div class="auth-password">
                            <input
                                class="auth-input"
                                type=move || input_type(view.signup_password_masked.get())
                                placeholder="Password"
                                prop:value=move || signup_password.get()
                                on:input=move |ev| signup_password.set(event_target_value(&ev))
                            />
                            <button
                                type="button"
                                class="auth-password__toggle"
                                aria-label="Toggle password visibility"
                                on:click=move |_| dispatch(UiEvent::ToggleVisibility(PasswordField::SignupPassword))
                            >
                                <i class=move || toggle_icon_class(view.signup_password_masked.get())></i>
                            </button>
                        </div>
                        <div class="auth-password">
                            <input
                                class="auth-input"
                                type=move || input_type(view.confirm_password_masked.get())
                                placeholder="Confirm password"
                                prop:value=move || confirm_password.get()
                                on:input=move |ev| confirm_password.set(event_target_value(&ev))
                            />
                            <button
                                type="button"
                                class="auth-password__toggle"
                                aria-label="Toggle password visibility"
                                on:click=move |_| dispatch(UiEvent::ToggleVisibility(PasswordField::ConfirmPassword))
                            >
                                <i class=move || toggle_icon_class(view.confirm_password_masked.get())></i>
                            </button>
                        </div>
                        <label class="auth-check">
                            <input
                                type="checkbox"
                                prop:checked=move || agree_terms.get()
                                on:change=move |ev| agree_terms.set(event_target_checked(&ev))
                            />
                            "I agree to the Terms and Conditions"
                        </label>
                        <button class="auth-button" type="submit" disabled=move || view.signup_loading.get()>
                            {move || submit_label(FormKind::Signup, view.signup_loading.get())}
                        </button>
                    </form>
                </section>
            </div>
        </div>
    }
}

/// Alert area of one form; empty while the form has no alert.
fn alert_area<F>(alert: RwSignal<Option<Alert>>, dismiss: F) -> impl IntoView
where
    F: Fn() + Copy + Send + Sync + 'static,
{
    move || {
        alert.get().map(|alert| {
            view! {
                <div class=alert.css_class() role="alert">
                    <span class="alert__message">{alert.message.clone()}</span>
                    <button type="button" class="btn-close" aria-label="Close" on:click=move |_| dismiss()></button>
                </div>
            }
        })
    }
}
