//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;

#[cfg(test)]
mod tests;

pub use cli::SmokeArgs;
pub use defaults::{
    DEFAULT_BASE_URL, DEFAULT_CONCURRENT_REQUESTS, DEFAULT_CONTACT_NAME, DEFAULT_EMAIL,
    DEFAULT_NETWORK_TIMEOUT, DEFAULT_PASSWORD, DEFAULT_REQUEST_TIMEOUT, DEFAULT_WRONG_EMAIL,
    DEFAULT_WRONG_PASSWORD,
};
pub use types::PositiveUsize;

pub(crate) use defaults::DEFAULT_USER_AGENT;
pub(crate) use parsers::{parse_base_url, parse_duration_arg};
