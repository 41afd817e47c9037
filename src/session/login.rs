use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::client::{Session, read_body};
use crate::config::Credentials;
use crate::console::Console;
use crate::error::AppResult;

pub const LOGIN_PATH: &str = "/users/login";

#[derive(Debug, Serialize)]
struct LoginRequest<'creds> {
    email: &'creds str,
    password: &'creds str,
}

impl<'creds> From<&'creds Credentials> for LoginRequest<'creds> {
    fn from(credentials: &'creds Credentials) -> Self {
        Self {
            email: &credentials.email,
            password: &credentials.password,
        }
    }
}

/// What a single login attempt produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// 2xx with a `token` field; the session now carries it.
    TokenStored,
    /// 2xx but the body has no usable `token` field.
    TokenMissing,
    /// 2xx but the body was not JSON.
    InvalidBody,
    /// Non-2xx answer.
    Rejected(StatusCode),
}

impl LoginOutcome {
    #[must_use]
    pub const fn token_acquired(&self) -> bool {
        matches!(self, LoginOutcome::TokenStored)
    }
}

/// Login state recorded by the bootstrap in front of a routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginStatus {
    /// The routine does not need authentication.
    NotNeeded,
    /// A token was already held; no login was attempted.
    AlreadyHeld,
    /// Login ran and stored a token.
    Acquired,
    /// Login ran (or errored) without producing a token.
    Failed,
}

/// Posts `credentials` to the login endpoint and stores the returned token.
///
/// A non-2xx answer or a body without a token is reported on the console and
/// returned as an outcome, leaving any previously held token untouched.
///
/// # Errors
///
/// Returns an error only on transport failure.
pub async fn login(
    session: &mut Session,
    credentials: &Credentials,
    console: &mut Console,
) -> AppResult<LoginOutcome> {
    let request = session.post_json(LOGIN_PATH, &LoginRequest::from(credentials))?;
    let response = session.send(request).await?;
    let status = response.status();

    if !status.is_success() {
        console.say(format!("Login failed with status code: {}", status));
        return Ok(LoginOutcome::Rejected(status));
    }

    console.say("Login successful.");
    let body = read_body(response).await?;
    match extract_token(&body) {
        Ok(Some(token)) => {
            debug!("Stored bearer token ({} chars)", token.len());
            session.set_token(token);
            Ok(LoginOutcome::TokenStored)
        }
        Ok(None) => {
            warn!("Login response had no token field");
            console.say("Token not found in the response.");
            Ok(LoginOutcome::TokenMissing)
        }
        Err(err) => {
            warn!("Login response was not JSON: {}", err);
            console.say("Login response was not valid JSON.");
            Ok(LoginOutcome::InvalidBody)
        }
    }
}

/// Logs in first when no token is held. Never aborts: a failed login is
/// reported through the returned status and the caller decides what to do.
pub async fn ensure_logged_in(
    session: &mut Session,
    credentials: &Credentials,
    console: &mut Console,
) -> LoginStatus {
    if session.has_token() {
        return LoginStatus::AlreadyHeld;
    }
    match login(session, credentials, console).await {
        Ok(outcome) if outcome.token_acquired() => LoginStatus::Acquired,
        Ok(_) => LoginStatus::Failed,
        Err(err) => {
            console.say(format!("Login request failed: {}", err.describe()));
            LoginStatus::Failed
        }
    }
}

/// Top-level string `token`; empty or non-string values count as missing.
fn extract_token(body: &str) -> Result<Option<String>, serde_json::Error> {
    let value: Value = serde_json::from_str(body)?;
    Ok(value
        .get("token")
        .and_then(Value::as_str)
        .filter(|token| !token.is_empty())
        .map(str::to_owned))
}

#[cfg(test)]
mod tests {
    use super::extract_token;

    #[test]
    fn extracts_string_token() -> Result<(), String> {
        let token = extract_token(r#"{"user": {"email": "a@b.c"}, "token": "abc"}"#)
            .map_err(|err| format!("parse failed: {}", err))?;
        if token.as_deref() != Some("abc") {
            return Err(format!("Unexpected token: {:?}", token));
        }
        Ok(())
    }

    #[test]
    fn non_string_or_empty_token_is_missing() -> Result<(), String> {
        for body in [r#"{"token": 42}"#, r#"{"token": ""}"#, r#"{"user": {}}"#, "[]"] {
            let token = extract_token(body).map_err(|err| format!("parse failed: {}", err))?;
            if token.is_some() {
                return Err(format!("Expected no token for {}", body));
            }
        }
        Ok(())
    }

    #[test]
    fn non_json_body_is_an_error() -> Result<(), String> {
        if extract_token("<html>").is_ok() {
            return Err("Expected parse error".to_owned());
        }
        Ok(())
    }
}
