use clap::Parser;
use reqwest::Url;
use std::time::Duration;

use super::parsers::{parse_base_url, parse_duration_arg, parse_positive_usize};
use super::types::PositiveUsize;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Smoke-test harness for the contact-list web API: logs in, exercises the contact endpoints and reports pass/fail lines."
)]
pub struct SmokeArgs {
    /// Test to run (login, addcontact, wronglogin, wrongdataformat, gettest, brokenapi, updatecontact, deletecontact, concurrency, servererror, networktimeout)
    #[arg(value_name = "TEST")]
    pub test: Option<String>,

    /// Base URL of the contact-list API
    #[arg(long = "base-url", env = "CONTACT_SMOKE_BASE_URL", value_parser = parse_base_url)]
    pub base_url: Option<Url>,

    /// Path to a settings file (.toml or .json)
    #[arg(long, short = 'c')]
    pub config: Option<String>,

    /// Request timeout for every call (supports ms/s/m/h)
    #[arg(long = "timeout", value_parser = parse_duration_arg)]
    pub request_timeout: Option<Duration>,

    /// Timeout applied by the networktimeout test (supports ms/s/m/h)
    #[arg(long = "network-timeout", value_parser = parse_duration_arg)]
    pub network_timeout: Option<Duration>,

    /// Number of parallel requests fired by the concurrency test
    #[arg(long = "concurrent-requests", value_parser = parse_positive_usize)]
    pub concurrent_requests: Option<PositiveUsize>,

    /// Skip the selected test when the login bootstrap yields no token
    #[arg(long = "require-login")]
    pub require_login: bool,

    /// Exit with status 1 when the selected test fails or errors
    #[arg(long)]
    pub strict: bool,

    /// Suppress the narration lines on stdout
    #[arg(long, short)]
    pub quiet: bool,

    /// List the available tests and exit
    #[arg(long)]
    pub list: bool,

    /// Enable debug logging on stderr
    #[arg(long, short)]
    pub verbose: bool,
}
