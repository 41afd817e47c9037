use std::future::Future;

use reqwest::Url;

use crate::args::parse_base_url;
use crate::config::Settings;
use crate::session::Session;

pub(crate) fn run_async_test<F>(future: F) -> Result<(), String>
where
    F: Future<Output = Result<(), String>>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| format!("Failed to build runtime: {}", err))?;
    runtime.block_on(future)
}

pub(crate) fn settings_for(uri: &str) -> Result<Settings, String> {
    let base_url: Url = parse_base_url(uri).map_err(|err| err.to_string())?;
    Ok(Settings::with_base_url(base_url))
}

pub(crate) fn session_for(settings: &Settings) -> Result<Session, String> {
    Session::new(settings).map_err(|err| err.to_string())
}

/// Base URL of a local port with nothing listening on it.
pub(crate) fn closed_port_uri() -> Result<String, String> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("local_addr failed: {}", err))?;
    drop(listener);
    Ok(format!("http://{}", addr))
}
