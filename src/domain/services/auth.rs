//! Session checks, credential forms and the Google OAuth round-trip

use crate::config::AppConfig;
use crate::domain::models::{Destination, Session};
use crate::shared::errors::{AppError, Result};
use crate::shared::logging::{log_session_check, LogOperation};
use crate::shared::services::{ApiClient, Transport};

const PASSWORD_SPECIALS: &str = "@#$%^&+=!";

pub const PASSWORD_HINT: &str =
    "At least 8 characters including 1 uppercase, 1 lowercase, 1 digit, and 1 special character";

/// Ask the backend who is logged in. Any failure means "nobody".
pub async fn check_session<T: Transport>(api: &ApiClient<T>) -> Option<Session> {
    let session = match api.get(LogOperation::SessionCheck, "/api/check-auth", &[]).await {
        Ok(response) if response.ok() => response.json::<Session>().ok(),
        _ => None,
    };

    log_session_check(
        session.as_ref().is_some_and(|s| s.authenticated),
        session.as_ref().map(|s| s.username.as_str()),
    );
    session
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialsFlow {
    Login,
    Register,
}

impl CredentialsFlow {
    pub fn path(&self) -> &'static str {
        match self {
            CredentialsFlow::Login => "/login",
            CredentialsFlow::Register => "/register",
        }
    }

    /// Where to go when the backend accepts without naming a target.
    pub fn default_destination(&self) -> Destination {
        match self {
            CredentialsFlow::Login => Destination::route("/"),
            CredentialsFlow::Register => Destination::route("/login"),
        }
    }

    pub fn rejected_message(&self) -> &'static str {
        match self {
            CredentialsFlow::Login => "Invalid username or password. Please try again.",
            CredentialsFlow::Register => "Registration failed. Username might already exist.",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            CredentialsFlow::Login => "Login failed. Please try again.",
            CredentialsFlow::Register => "Registration failed. Please try again.",
        }
    }

    /// User-facing text for an error returned by [`submit_credentials`].
    pub fn error_message(&self, error: &AppError) -> &'static str {
        match error {
            AppError::CredentialsRejected => self.rejected_message(),
            _ => self.failure_message(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Check form input before anything is sent.
pub fn validate_credentials(
    flow: CredentialsFlow,
    username: &str,
    password: &str,
    confirmation: Option<&str>,
) -> std::result::Result<Credentials, String> {
    let username = username.trim();
    if username.is_empty() {
        return Err("Username is required".to_string());
    }
    if !password_is_strong(password) {
        return Err(format!("Password must be {}", PASSWORD_HINT.to_lowercase()));
    }
    if flow == CredentialsFlow::Register && confirmation != Some(password) {
        return Err("Passwords do not match".to_string());
    }

    Ok(Credentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}

fn password_is_strong(password: &str) -> bool {
    password.chars().count() >= 8
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| PASSWORD_SPECIALS.contains(c))
}

/// Post credentials and work out where the browser should go next.
///
/// The backend answers with a redirect whose `Location` may point at its own
/// host; those are rewritten onto the frontend host.
pub async fn submit_credentials<T: Transport>(
    api: &ApiClient<T>,
    flow: CredentialsFlow,
    credentials: &Credentials,
) -> Result<Destination> {
    let fields = vec![
        ("username".to_string(), credentials.username.clone()),
        ("password".to_string(), credentials.password.clone()),
    ];
    let response = api.submit_credentials_form(flow.path(), fields).await?;

    if response.is_redirect() {
        return Ok(match response.location.as_deref() {
            Some(location) => redirect_destination(api.config(), location),
            None => flow.default_destination(),
        });
    }
    if response.ok() {
        return Ok(flow.default_destination());
    }

    tracing::warn!(
        operation = LogOperation::Credentials.as_str(),
        status = response.status,
        flow = flow.path(),
        "Credentials rejected"
    );
    Err(AppError::CredentialsRejected)
}

/// Full-page target for a redirect `Location`, moved onto the frontend host
/// when it names the backend.
pub fn redirect_destination(config: &AppConfig, location: &str) -> Destination {
    let backend_host = config.backend_host();
    if !backend_host.is_empty() && location.contains(backend_host) {
        Destination::external(location.replace(backend_host, config.frontend_host()))
    } else {
        Destination::external(location)
    }
}

/// Finish the OAuth round-trip. Always lands on `/`, whatever the backend says.
pub async fn complete_oauth<T: Transport>(
    api: &ApiClient<T>,
    code: Option<&str>,
    state: Option<&str>,
) -> Destination {
    fn present(value: Option<&str>) -> Option<&str> {
        value.filter(|v| !v.trim().is_empty())
    }

    match (present(code), present(state)) {
        (Some(code), Some(state)) => {
            let query = [("code", code), ("state", state)];
            // Outcome is only logged by the client
            let _ = api.get(LogOperation::OAuthExchange, "/exchange-token", &query).await;
        }
        _ => {
            tracing::warn!(
                operation = LogOperation::OAuthExchange.as_str(),
                "Callback without code or state, skipping exchange"
            );
        }
    }

    Destination::route("/")
}

/// Backend URL that starts Google sign-in and returns to `/search`.
pub fn google_login_url<T: Transport>(api: &ApiClient<T>) -> String {
    let return_to = format!("{}/search", api.config().frontend_origin());
    api.endpoint("/login/google", &[("redirect_uri", &return_to)])
}

/// Backend URL that ends the session and returns to the app root.
pub fn logout_url<T: Transport>(api: &ApiClient<T>) -> String {
    let return_to = api.config().frontend_origin();
    api.endpoint("/logout", &[("redirect_uri", &return_to)])
}
