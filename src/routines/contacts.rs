use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::{Map, Value};

use super::{Routine, RoutineContext};
use crate::error::AppResult;
use crate::outcome::Verdict;
use crate::session::read_body;

pub const CONTACTS_PATH: &str = "/contacts";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NewContact {
    first_name: &'static str,
    last_name: &'static str,
    birthdate: &'static str,
    email: &'static str,
    phone: &'static str,
    street1: &'static str,
    street2: &'static str,
    city: &'static str,
    state_province: &'static str,
    postal_code: &'static str,
    country: &'static str,
}

const SAMPLE_CONTACT: NewContact = NewContact {
    first_name: "George",
    last_name: "Test",
    birthdate: "1970-01-01",
    email: "jdoe@fake.com",
    phone: "8005555555",
    street1: "1 Main St.",
    street2: "Apartment A",
    city: "Anytown",
    state_province: "KS",
    postal_code: "12345",
    country: "USA",
};

pub struct AddContact;

#[async_trait]
impl Routine for AddContact {
    fn name(&self) -> &'static str {
        "addcontact"
    }

    fn description(&self) -> &'static str {
        "Create a sample contact and expect 2xx"
    }

    fn requires_login(&self) -> bool {
        true
    }

    async fn run(&self, ctx: &mut RoutineContext<'_>) -> AppResult<Verdict> {
        let request = ctx.session.post_json(CONTACTS_PATH, &SAMPLE_CONTACT)?;
        let status = ctx.session.send(request).await?.status();

        if status.is_success() {
            ctx.console.say("Contact added successfully.");
            Ok(Verdict::Passed)
        } else {
            ctx.console.say(format!(
                "Failed to add contact with status code: {}",
                status
            ));
            Ok(Verdict::Failed)
        }
    }
}

/// Posts `{}` to the contacts endpoint and expects 400 or 404.
async fn post_empty_contact(ctx: &mut RoutineContext<'_>) -> AppResult<Verdict> {
    let request = ctx
        .session
        .post_json(CONTACTS_PATH, &Value::Object(Map::new()))?;
    let status = ctx.session.send(request).await?.status();

    if matches!(status, StatusCode::BAD_REQUEST | StatusCode::NOT_FOUND) {
        ctx.console.say(format!("Received expected status code: {}", status));
        Ok(Verdict::Passed)
    } else {
        ctx.console.say(format!("Unexpected response status: {}", status));
        Ok(Verdict::Failed)
    }
}

pub struct WrongDataFormat;

#[async_trait]
impl Routine for WrongDataFormat {
    fn name(&self) -> &'static str {
        "wrongdataformat"
    }

    fn description(&self) -> &'static str {
        "Post an empty contact and expect 400 or 404"
    }

    fn requires_login(&self) -> bool {
        true
    }

    async fn run(&self, ctx: &mut RoutineContext<'_>) -> AppResult<Verdict> {
        post_empty_contact(ctx).await
    }
}

/// Same request as [`WrongDataFormat`], kept under its own name for scripts
/// that already call it.
pub struct BrokenApi;

#[async_trait]
impl Routine for BrokenApi {
    fn name(&self) -> &'static str {
        "brokenapi"
    }

    fn description(&self) -> &'static str {
        "Post malformed contact data and expect 400 or 404"
    }

    fn requires_login(&self) -> bool {
        true
    }

    async fn run(&self, ctx: &mut RoutineContext<'_>) -> AppResult<Verdict> {
        post_empty_contact(ctx).await
    }
}

pub struct GetContacts;

#[async_trait]
impl Routine for GetContacts {
    fn name(&self) -> &'static str {
        "gettest"
    }

    fn description(&self) -> &'static str {
        "List contacts and look for the configured contact name"
    }

    fn requires_login(&self) -> bool {
        true
    }

    async fn run(&self, ctx: &mut RoutineContext<'_>) -> AppResult<Verdict> {
        let request = ctx.session.get(CONTACTS_PATH)?;
        let response = ctx.session.send(request).await?;
        let status = response.status();
        if !status.is_success() {
            ctx.console.say(format!(
                "Failed to retrieve contacts with status code: {}",
                status
            ));
            return Ok(Verdict::Failed);
        }

        let body = read_body(response).await?;
        let name = &ctx.settings.contact_name;
        if body.contains(name.as_str()) {
            ctx.console.say(format!("Contact '{}' found.", name));
            Ok(Verdict::Passed)
        } else {
            ctx.console.say(format!("Contact '{}' not found.", name));
            Ok(Verdict::Failed)
        }
    }
}

pub struct UpdateContact;

#[async_trait]
impl Routine for UpdateContact {
    fn name(&self) -> &'static str {
        "updatecontact"
    }

    fn description(&self) -> &'static str {
        "Add or update a contact (no checks defined yet)"
    }

    fn requires_login(&self) -> bool {
        true
    }

    async fn run(&self, ctx: &mut RoutineContext<'_>) -> AppResult<Verdict> {
        ctx.console.say(format!("{}: no checks defined yet.", self.name()));
        Ok(Verdict::Skipped)
    }
}

pub struct DeleteContact;

#[async_trait]
impl Routine for DeleteContact {
    fn name(&self) -> &'static str {
        "deletecontact"
    }

    fn description(&self) -> &'static str {
        "Delete a contact (no checks defined yet)"
    }

    fn requires_login(&self) -> bool {
        true
    }

    async fn run(&self, ctx: &mut RoutineContext<'_>) -> AppResult<Verdict> {
        ctx.console.say(format!("{}: no checks defined yet.", self.name()));
        Ok(Verdict::Skipped)
    }
}
