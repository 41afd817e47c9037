//! Authenticated HTTP session against the contact-list API.
mod client;
mod login;


pub use client::{Session, read_body};
pub use login::{LOGIN_PATH, LoginOutcome, LoginStatus, ensure_logged_in, login};
