//! Page configuration: endpoints, redirect timing and demo accounts.
//!
//! In the browser the config is read from
//! `<meta name="auth-config" content="{...json...}">`. Every field has a
//! default, so the tag and each of its keys are optional.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

pub const DEFAULT_LOGIN_ENDPOINT: &str = "/login";
pub const DEFAULT_SIGNUP_ENDPOINT: &str = "/signup";
pub const DEFAULT_REDIRECT_DELAY_MS: u32 = 1500;
pub const DEFAULT_LOGIN_REDIRECT: &str = "/";

/// Name of the `<meta>` tag carrying the JSON config.
pub const CONFIG_META_NAME: &str = "auth-config";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse failed: {0}")]
    Parse(String),

    #[error("invalid {field}: '{value}' (expected a rooted path or http(s) URL)")]
    InvalidEndpoint { field: &'static str, value: String },
}

/// Credentials offered as one-click fill buttons on the login form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DemoAccount {
    pub label: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub login_endpoint: String,
    pub signup_endpoint: String,
    /// Pause between a success alert and the navigation that follows it.
    pub redirect_delay_ms: u32,
    /// Login navigation target when the server supplies none.
    pub default_redirect: String,
    pub demo_accounts: Vec<DemoAccount>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            login_endpoint: DEFAULT_LOGIN_ENDPOINT.to_owned(),
            signup_endpoint: DEFAULT_SIGNUP_ENDPOINT.to_owned(),
            redirect_delay_ms: DEFAULT_REDIRECT_DELAY_MS,
            default_redirect: DEFAULT_LOGIN_REDIRECT.to_owned(),
            demo_accounts: Vec::new(),
        }
    }
}

impl AuthConfig {
    /// Parse and validate a JSON config document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed JSON and
    /// `ConfigError::InvalidEndpoint` for an unusable endpoint or redirect.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        check_target("login_endpoint", &self.login_endpoint)?;
        check_target("signup_endpoint", &self.signup_endpoint)?;
        check_target("default_redirect", &self.default_redirect)?;
        Ok(())
    }
}

fn check_target(field: &'static str, value: &str) -> Result<(), ConfigError> {
    let ok = value.starts_with('/') || value.starts_with("https://") || value.starts_with("http://");
    if ok {
        Ok(())
    } else {
        Err(ConfigError::InvalidEndpoint { field, value: value.to_owned() })
    }
}

/// Resolve the config for this page.
///
/// A missing tag yields the defaults; a malformed one is logged and also
/// yields the defaults so the page stays usable.
pub fn load() -> AuthConfig {
    match read_meta_content() {
        Some(raw) => resolve(&raw),
        None => AuthConfig::default(),
    }
}

fn resolve(raw: &str) -> AuthConfig {
    AuthConfig::from_json(raw).unwrap_or_else(|e| {
        log::warn!("ignoring {CONFIG_META_NAME} meta tag: {e}");
        AuthConfig::default()
    })
}

fn read_meta_content() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let doc = web_sys::window()?.document()?;
        let selector = format!("meta[name=\"{CONFIG_META_NAME}\"]");
        let el = doc.query_selector(&selector).ok().flatten()?;
        let meta = el.dyn_into::<web_sys::HtmlMetaElement>().ok()?;
        Some(meta.content())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
