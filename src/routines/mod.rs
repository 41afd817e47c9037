//! The named scenarios the harness can run.
mod auth;
mod contacts;
mod faults;


use async_trait::async_trait;

use crate::config::Settings;
use crate::console::Console;
use crate::error::AppResult;
use crate::outcome::Verdict;
use crate::session::Session;

pub use auth::{Login, WrongLogin};
pub use contacts::{
    AddContact, BrokenApi, CONTACTS_PATH, DeleteContact, GetContacts, UpdateContact,
    WrongDataFormat,
};
pub use faults::{
    Concurrency, NetworkTimeout, SERVER_ERROR_PATH, SLOW_PATH, ServerError, USERS_PATH,
};

/// Everything a routine may touch while it runs.
pub struct RoutineContext<'run> {
    pub session: &'run mut Session,
    pub settings: &'run Settings,
    pub console: &'run mut Console,
}

/// One independently invokable scenario: run it and report what happened.
#[async_trait]
pub trait Routine: Send + Sync {
    /// Lowercase command name used on the command line.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Whether the dispatcher logs in before running this routine.
    fn requires_login(&self) -> bool {
        false
    }

    /// Runs the scenario, narrating on the console.
    ///
    /// # Errors
    ///
    /// Transport failures the routine does not expect are returned as errors.
    async fn run(&self, ctx: &mut RoutineContext<'_>) -> AppResult<Verdict>;
}

static ROUTINES: [&dyn Routine; 11] = [
    &Login,
    &AddContact,
    &WrongLogin,
    &WrongDataFormat,
    &GetContacts,
    &BrokenApi,
    &UpdateContact,
    &DeleteContact,
    &Concurrency,
    &ServerError,
    &NetworkTimeout,
];

/// All routines in command-line order.
#[must_use]
pub fn registry() -> &'static [&'static dyn Routine] {
    &ROUTINES
}
