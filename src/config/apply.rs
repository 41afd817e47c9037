use std::time::Duration;

use reqwest::Url;

use crate::args::{
    DEFAULT_BASE_URL, DEFAULT_CONCURRENT_REQUESTS, DEFAULT_CONTACT_NAME, DEFAULT_EMAIL,
    DEFAULT_NETWORK_TIMEOUT, DEFAULT_PASSWORD, DEFAULT_REQUEST_TIMEOUT, DEFAULT_WRONG_EMAIL,
    DEFAULT_WRONG_PASSWORD, PositiveUsize, SmokeArgs, parse_base_url,
};
use crate::error::{AppError, AppResult, ConfigError, ValidationError};

use super::types::{ConfigFile, DurationValue};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Fully resolved run settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub base_url: Url,
    pub credentials: Credentials,
    pub wrong_credentials: Credentials,
    pub request_timeout: Duration,
    pub network_timeout: Duration,
    pub concurrent_requests: PositiveUsize,
    pub contact_name: String,
    pub require_login: bool,
    pub strict: bool,
}

impl Settings {
    /// Built-in settings pointed at `base_url`.
    #[must_use]
    pub fn with_base_url(base_url: Url) -> Self {
        Self {
            base_url,
            credentials: Credentials {
                email: DEFAULT_EMAIL.to_owned(),
                password: DEFAULT_PASSWORD.to_owned(),
            },
            wrong_credentials: Credentials {
                email: DEFAULT_WRONG_EMAIL.to_owned(),
                password: DEFAULT_WRONG_PASSWORD.to_owned(),
            },
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            network_timeout: DEFAULT_NETWORK_TIMEOUT,
            concurrent_requests: DEFAULT_CONCURRENT_REQUESTS,
            contact_name: DEFAULT_CONTACT_NAME.to_owned(),
            require_login: false,
            strict: false,
        }
    }
}

/// Merges command line flags over an optional settings file over the defaults.
///
/// # Errors
///
/// Returns an error when a value from the settings file fails validation.
pub fn resolve_settings(args: &SmokeArgs, file: Option<ConfigFile>) -> AppResult<Settings> {
    let file = file.unwrap_or_default();

    let base_url = match (args.base_url.clone(), file.base_url.as_deref()) {
        (Some(url), _) => url,
        (None, Some(raw)) => parse_base_url(raw).map_err(|err| invalid_field("base_url", err))?,
        (None, None) => parse_base_url(DEFAULT_BASE_URL).map_err(AppError::validation)?,
    };
    let mut settings = Settings::with_base_url(base_url);

    if let Some(email) = file.email {
        settings.credentials.email = email;
    }
    if let Some(password) = file.password {
        settings.credentials.password = password;
    }
    if let Some(email) = file.wrong_email {
        settings.wrong_credentials.email = email;
    }
    if let Some(password) = file.wrong_password {
        settings.wrong_credentials.password = password;
    }

    settings.request_timeout = pick_duration(
        args.request_timeout,
        file.timeout.as_ref(),
        "timeout",
        settings.request_timeout,
    )?;
    settings.network_timeout = pick_duration(
        args.network_timeout,
        file.network_timeout.as_ref(),
        "network_timeout",
        settings.network_timeout,
    )?;

    if let Some(count) = args.concurrent_requests {
        settings.concurrent_requests = count;
    } else if let Some(count) = file.concurrent_requests {
        settings.concurrent_requests = PositiveUsize::try_from(count)
            .map_err(|err| invalid_field("concurrent_requests", err))?;
    }

    if let Some(name) = file.contact_name {
        settings.contact_name = name;
    }

    settings.require_login = args.require_login || file.require_login.unwrap_or(false);
    settings.strict = args.strict || file.strict.unwrap_or(false);

    Ok(settings)
}

fn pick_duration(
    cli: Option<Duration>,
    file: Option<&DurationValue>,
    field: &'static str,
    fallback: Duration,
) -> AppResult<Duration> {
    cli.map_or_else(
        || {
            file.map_or(Ok(fallback), |value| {
                value.to_duration().map_err(|err| invalid_field(field, err))
            })
        },
        Ok,
    )
}

fn invalid_field(field: &'static str, source: ValidationError) -> AppError {
    AppError::config(ConfigError::InvalidField { field, source })
}
