//! Smoke-test harness for the contact-list web API.
//!
//! The binary maps one command name to one routine, logs in first when the
//! routine needs a bearer token, and narrates each check on stdout. The library
//! exposes the same pieces so the routines can be driven against a mock server.
pub mod args;
pub mod config;
pub mod console;
pub mod dispatch;
pub mod entry;
pub mod error;
pub mod logger;
pub mod outcome;
pub mod routines;
pub mod session;

#[cfg(test)]
mod test_support;
