//! Command name to routine lookup and the login bootstrap in front of it.
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::console::Console;
use crate::outcome::{RunReport, Verdict};
use crate::routines::{Routine, RoutineContext, registry};
use crate::session::{LoginStatus, Session, ensure_logged_in};

/// What the dispatcher decided for a command line argument. Selecting never
/// touches the network.
pub enum Selection {
    /// No command given.
    Usage,
    /// Command given but not in the table.
    Unknown(String),
    Run(&'static dyn Routine),
}

/// Case-insensitive lookup in the routine table.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static dyn Routine> {
    let wanted = name.trim().to_ascii_lowercase();
    registry()
        .iter()
        .copied()
        .find(|routine| routine.name() == wanted)
}

#[must_use]
pub fn select(command: Option<&str>) -> Selection {
    match command {
        None => Selection::Usage,
        Some(name) if name.trim().is_empty() => Selection::Usage,
        Some(name) => lookup(name).map_or_else(
            || Selection::Unknown(name.to_owned()),
            Selection::Run,
        ),
    }
}

#[must_use]
pub fn usage_line() -> String {
    let names: Vec<&str> = registry().iter().map(|routine| routine.name()).collect();
    format!("Please specify which test to run ({}).", names.join(", "))
}

pub const UNKNOWN_TEST_LINE: &str = "Unknown test. Please specify a valid test name.";

/// Prints the routine table for `--list`.
pub fn print_routines(console: &mut Console) {
    for routine in registry() {
        let auth = if routine.requires_login() {
            " [login]"
        } else {
            ""
        };
        console.notice(format!(
            "{:<16}{}{}",
            routine.name(),
            routine.description(),
            auth
        ));
    }
}

/// Runs one routine, logging in first when it needs a token and none is held.
///
/// A failed login does not stop the routine unless `settings.require_login`
/// is set. Errors returned by the routine are narrated and recorded as
/// [`Verdict::Errored`]; nothing propagates to the caller.
pub async fn run_routine(
    routine: &dyn Routine,
    session: &mut Session,
    settings: &Settings,
    console: &mut Console,
) -> RunReport {
    let name = routine.name();
    let login = if routine.requires_login() {
        ensure_logged_in(session, &settings.credentials, console).await
    } else {
        LoginStatus::NotNeeded
    };
    debug!("Routine {} login status {:?}", name, login);

    if login == LoginStatus::Failed {
        if settings.require_login {
            console.say(format!("Skipping {}: login did not produce a token.", name));
            return RunReport {
                routine: name,
                login,
                verdict: Verdict::Errored,
            };
        }
        warn!("Running {} without a bearer token", name);
    }

    let mut ctx = RoutineContext {
        session,
        settings,
        console,
    };
    let verdict = match routine.run(&mut ctx).await {
        Ok(verdict) => verdict,
        Err(err) => {
            ctx.console.say(err.describe());
            Verdict::Errored
        }
    };
    info!("Routine {} {}", name, verdict);

    RunReport {
        routine: name,
        login,
        verdict,
    }
}

/// Selects and runs `command`. Usage and unknown commands print a line and
/// return `None` without any network traffic.
pub async fn dispatch(
    command: Option<&str>,
    session: &mut Session,
    settings: &Settings,
    console: &mut Console,
) -> Option<RunReport> {
    match select(command) {
        Selection::Usage => {
            console.notice(usage_line());
            None
        }
        Selection::Unknown(name) => {
            debug!("Unknown test '{}'", name);
            console.notice(UNKNOWN_TEST_LINE);
            None
        }
        Selection::Run(routine) => Some(run_routine(routine, session, settings, console).await),
    }
}
