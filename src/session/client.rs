use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::Serialize;
use tracing::debug;

use crate::args::DEFAULT_USER_AGENT;
use crate::config::Settings;
use crate::error::{AppError, AppResult, HttpError};

/// Shared client plus the bearer token of the most recent successful login.
///
/// The token is attached to every request built through [`Session::request`]
/// once it is set; there is no expiry handling.
#[derive(Debug, Clone)]
pub struct Session {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

impl Session {
    /// Builds the HTTP client from the resolved settings.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying client cannot be constructed.
    pub fn new(settings: &Settings) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(settings.request_timeout)
            .user_agent(DEFAULT_USER_AGENT)
            .build()
            .map_err(|err| AppError::http(HttpError::BuildClientFailed { source: err }))?;
        Ok(Self {
            client,
            base_url: settings.base_url.clone(),
            token: None,
        })
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub const fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Replaces the held token; every request built afterwards carries it.
    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    /// Resolves an endpoint path such as `/contacts` below the base URL.
    ///
    /// # Errors
    ///
    /// Returns an error when the path cannot be joined onto the base URL.
    pub fn endpoint(&self, path: &str) -> AppResult<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|err| {
                AppError::http(HttpError::JoinUrlFailed {
                    base: self.base_url.to_string(),
                    path: path.to_owned(),
                    source: err,
                })
            })
    }

    /// Starts a request, adding `Authorization: Bearer <token>` when a token is held.
    ///
    /// # Errors
    ///
    /// Returns an error when the endpoint URL is invalid.
    pub fn request(&self, method: Method, path: &str) -> AppResult<RequestBuilder> {
        let url = self.endpoint(path)?;
        let builder = self.client.request(method, url);
        Ok(match self.token.as_deref() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        })
    }

    /// # Errors
    ///
    /// Returns an error when the endpoint URL is invalid.
    pub fn get(&self, path: &str) -> AppResult<RequestBuilder> {
        self.request(Method::GET, path)
    }

    /// # Errors
    ///
    /// Returns an error when the endpoint URL is invalid.
    pub fn post_json<T>(&self, path: &str, body: &T) -> AppResult<RequestBuilder>
    where
        T: Serialize + ?Sized,
    {
        Ok(self.request(Method::POST, path)?.json(body))
    }

    /// Sends a request built by this session.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Request`] on any transport failure, including timeouts.
    pub async fn send(&self, builder: RequestBuilder) -> AppResult<Response> {
        let request = builder
            .build()
            .map_err(|err| AppError::http(HttpError::BuildRequestFailed { source: err }))?;
        let endpoint = request.url().to_string();
        debug!("{} {}", request.method(), endpoint);
        let response = self
            .client
            .execute(request)
            .await
            .map_err(|err| {
                AppError::http(HttpError::Request {
                    endpoint: endpoint.clone(),
                    source: err,
                })
            })?;
        debug!("{} answered {}", endpoint, response.status());
        Ok(response)
    }
}

/// Reads a whole response body as text.
///
/// # Errors
///
/// Returns [`HttpError::Request`] when the body cannot be read.
pub async fn read_body(response: Response) -> AppResult<String> {
    let endpoint = response.url().to_string();
    response.text().await.map_err(|err| {
        AppError::http(HttpError::Request {
            endpoint,
            source: err,
        })
    })
}
