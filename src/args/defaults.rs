use std::num::NonZeroUsize;
use std::time::Duration;

use super::types::PositiveUsize;

pub(crate) const DEFAULT_USER_AGENT: &str = concat!("contact-smoke/", env!("CARGO_PKG_VERSION"));

pub const DEFAULT_BASE_URL: &str = "https://thinking-tester-contact-list.herokuapp.com";

pub const DEFAULT_EMAIL: &str = "phytontest@test.com";
pub const DEFAULT_PASSWORD: &str = "Testpass";
pub const DEFAULT_WRONG_EMAIL: &str = "wrongemail@test.com";
pub const DEFAULT_WRONG_PASSWORD: &str = "WrongPass";

/// Substring `gettest` looks for in the contact list.
pub const DEFAULT_CONTACT_NAME: &str = "George";

pub const DEFAULT_CONCURRENT_REQUESTS: PositiveUsize =
    // SAFETY: 10 is non-zero; a zero literal here is rejected during const evaluation.
    PositiveUsize::new(unsafe { NonZeroUsize::new_unchecked(10) });
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_NETWORK_TIMEOUT: Duration = Duration::from_secs(1);
