use async_trait::async_trait;
use futures_util::StreamExt;
use futures_util::stream::FuturesUnordered;
use reqwest::StatusCode;
use tracing::debug;

use super::{Routine, RoutineContext};
use crate::error::{AppError, AppResult};
use crate::outcome::Verdict;
use crate::session::{Session, read_body};

pub const USERS_PATH: &str = "/users";
pub const SERVER_ERROR_PATH: &str = "/error";
pub const SLOW_PATH: &str = "/slow-endpoint";

pub struct Concurrency;

#[async_trait]
impl Routine for Concurrency {
    fn name(&self) -> &'static str {
        "concurrency"
    }

    fn description(&self) -> &'static str {
        "Fire parallel GET requests and log each outcome"
    }

    async fn run(&self, ctx: &mut RoutineContext<'_>) -> AppResult<Verdict> {
        let count = ctx.settings.concurrent_requests.get();
        let session: &Session = &*ctx.session;

        let mut pending: FuturesUnordered<_> = (0..count)
            .map(move |request_id| async move { (request_id, fetch_status(session).await) })
            .collect();

        let mut completed = 0usize;
        while let Some((request_id, result)) = pending.next().await {
            completed = completed.saturating_add(1);
            match result {
                Ok(status) => ctx.console.say(format!(
                    "Request {}: Response Status Code: {}",
                    request_id, status
                )),
                Err(err) => ctx
                    .console
                    .say(format!("Request {}: Error - {}", request_id, err)),
            }
        }
        debug!("{} of {} parallel requests completed", completed, count);

        Ok(Verdict::Observed)
    }
}

async fn fetch_status(session: &Session) -> AppResult<StatusCode> {
    let request = session.get(USERS_PATH)?;
    Ok(session.send(request).await?.status())
}

pub struct ServerError;

#[async_trait]
impl Routine for ServerError {
    fn name(&self) -> &'static str {
        "servererror"
    }

    fn description(&self) -> &'static str {
        "Call the error endpoint and expect 500"
    }

    async fn run(&self, ctx: &mut RoutineContext<'_>) -> AppResult<Verdict> {
        let request = ctx.session.get(SERVER_ERROR_PATH)?;
        let response = ctx.session.send(request).await?;
        let status = response.status();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            let body = read_body(response).await?;
            ctx.console.say(format!("Server Error Response Body: {}", body));
            Ok(Verdict::Passed)
        } else {
            ctx.console.say(format!("Unexpected Response Status Code: {}", status));
            Ok(Verdict::Failed)
        }
    }
}

pub struct NetworkTimeout;

#[async_trait]
impl Routine for NetworkTimeout {
    fn name(&self) -> &'static str {
        "networktimeout"
    }

    fn description(&self) -> &'static str {
        "Call a slow endpoint with a short timeout and expect the timeout"
    }

    async fn run(&self, ctx: &mut RoutineContext<'_>) -> AppResult<Verdict> {
        let timeout = ctx.settings.network_timeout;
        let request = ctx.session.get(SLOW_PATH)?.timeout(timeout);
        debug!("Waiting at most {:?} for {}", timeout, SLOW_PATH);

        match ctx.session.send(request).await {
            Ok(response) => {
                ctx.console.say(format!("Response Status Code: {}", response.status()));
                Ok(Verdict::Failed)
            }
            Err(AppError::Http(err)) if err.is_timeout() => {
                ctx.console.say("Network Timeout occurred.");
                Ok(Verdict::Passed)
            }
            Err(err) => {
                ctx.console.say(format!("Request failed: {}", err));
                Ok(Verdict::Errored)
            }
        }
    }
}
