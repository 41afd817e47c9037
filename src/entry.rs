use std::ffi::OsString;
use std::process::ExitCode;

use clap::{CommandFactory, FromArgMatches};

use crate::args::SmokeArgs;
use crate::config::{Settings, load_config, resolve_settings};
use crate::console::Console;
use crate::dispatch::{
    Selection, UNKNOWN_TEST_LINE, print_routines, run_routine, select, usage_line,
};
use crate::error::AppResult;
use crate::routines::Routine;
use crate::session::Session;

/// Parses the command line, runs the selected routine and maps its verdict to
/// the process exit code.
///
/// # Errors
///
/// Returns an error for invalid arguments, unreadable settings or when the
/// runtime or HTTP client cannot be built. Failed checks are not errors.
pub fn run() -> AppResult<ExitCode> {
    let raw_args: Vec<OsString> = std::env::args_os().collect();
    let matches = SmokeArgs::command().get_matches_from(raw_args);
    let args = SmokeArgs::from_arg_matches(&matches)?;

    crate::logger::init_logging(args.verbose);

    let mut console = Console::stdout(args.quiet);
    if args.list {
        print_routines(&mut console);
        return Ok(ExitCode::SUCCESS);
    }

    let routine = match select(args.test.as_deref()) {
        Selection::Usage => {
            console.notice(usage_line());
            return Ok(ExitCode::SUCCESS);
        }
        Selection::Unknown(name) => {
            tracing::debug!("Unknown test '{}'", name);
            console.notice(UNKNOWN_TEST_LINE);
            return Ok(ExitCode::SUCCESS);
        }
        Selection::Run(routine) => routine,
    };

    let file = load_config(args.config.as_deref())?;
    let settings = resolve_settings(&args, file)?;
    let mut session = Session::new(&settings)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    Ok(runtime.block_on(run_async(routine, &mut session, &settings, &mut console)))
}

async fn run_async(
    routine: &dyn Routine,
    session: &mut Session,
    settings: &Settings,
    console: &mut Console,
) -> ExitCode {
    tracing::debug!("Running {} against {}", routine.name(), settings.base_url);
    let report = run_routine(routine, session, settings, console).await;
    report.exit_code(settings.strict)
}
