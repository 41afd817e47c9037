use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::json;

use super::{Routine, RoutineContext};
use crate::error::AppResult;
use crate::outcome::Verdict;
use crate::session::{LOGIN_PATH, LoginOutcome, login};

pub struct Login;

#[async_trait]
impl Routine for Login {
    fn name(&self) -> &'static str {
        "login"
    }

    fn description(&self) -> &'static str {
        "Log in with the configured credentials and capture the bearer token"
    }

    async fn run(&self, ctx: &mut RoutineContext<'_>) -> AppResult<Verdict> {
        let outcome = login(ctx.session, &ctx.settings.credentials, ctx.console).await?;
        Ok(match outcome {
            LoginOutcome::TokenStored => Verdict::Passed,
            LoginOutcome::TokenMissing
            | LoginOutcome::InvalidBody
            | LoginOutcome::Rejected(_) => Verdict::Failed,
        })
    }
}

pub struct WrongLogin;

#[async_trait]
impl Routine for WrongLogin {
    fn name(&self) -> &'static str {
        "wronglogin"
    }

    fn description(&self) -> &'static str {
        "Log in with invalid credentials and expect 401"
    }

    async fn run(&self, ctx: &mut RoutineContext<'_>) -> AppResult<Verdict> {
        let credentials = &ctx.settings.wrong_credentials;
        let body = json!({
            "email": credentials.email,
            "password": credentials.password,
        });
        let request = ctx.session.post_json(LOGIN_PATH, &body)?;
        let status = ctx.session.send(request).await?.status();

        if status == StatusCode::UNAUTHORIZED {
            ctx.console.say("Login attempt unauthorized as expected.");
            Ok(Verdict::Passed)
        } else {
            ctx.console.say(format!("Unexpected response status: {}", status));
            Ok(Verdict::Failed)
        }
    }
}
