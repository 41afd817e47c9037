use std::time::Duration;

use serde::Deserialize;

use crate::args::parse_duration_arg;
use crate::error::ValidationError;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub base_url: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub wrong_email: Option<String>,
    pub wrong_password: Option<String>,
    pub timeout: Option<DurationValue>,
    pub network_timeout: Option<DurationValue>,
    #[serde(alias = "concurrency")]
    pub concurrent_requests: Option<usize>,
    pub contact_name: Option<String>,
    pub require_login: Option<bool>,
    pub strict: Option<bool>,
}

/// Either whole seconds or a suffixed duration string such as `"1500ms"`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self) -> Result<Duration, ValidationError> {
        match self {
            DurationValue::Seconds(secs) => {
                if *secs == 0 {
                    Err(ValidationError::DurationZero)
                } else {
                    Ok(Duration::from_secs(*secs))
                }
            }
            DurationValue::Text(text) => parse_duration_arg(text),
        }
    }
}
