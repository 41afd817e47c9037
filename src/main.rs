use std::process::ExitCode;

use contact_smoke::error::AppResult;

fn main() -> AppResult<ExitCode> {
    contact_smoke::entry::run()
}
