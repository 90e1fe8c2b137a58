use models::FormValues;
use serde_json::json;
use services::{FieldValidator, Rule, Submission, SubmissionFailure, SubmissionOutcome, ValidationPipeline};
use transport::Transport;

use crate::routes::{Redirect, Route};

pub const FORM: &str = "create-account";
pub const ENDPOINT: &str = "/api/users/create-account";

pub const FIRST_NAME: &str = "first_name";
pub const LAST_NAME: &str = "last_name";
pub const EMAIL: &str = "email";
pub const PASSWORD: &str = "password";
pub const PASSWORD_CONFIRMATION: &str = "password_confirmation";
/// "I am primarily a..." select; unset means client.
pub const IS_COACH: &str = "is_coach";

pub fn pipeline() -> ValidationPipeline {
    ValidationPipeline::new()
        .field(FIRST_NAME, FieldValidator::name("First"))
        .field(LAST_NAME, FieldValidator::name("Last"))
        .field(EMAIL, FieldValidator::email())
        .field(PASSWORD, FieldValidator::password())
        .field(PASSWORD_CONFIRMATION, FieldValidator::password_confirmation(PASSWORD))
        .field(IS_COACH, Rule::new())
}

pub async fn submit(transport: &dyn Transport, values: FormValues) -> Submission<Redirect> {
    pipeline()
        .submit(values, |values| async move {
            SubmissionOutcome::from(create_account(transport, &values).await)
        })
        .await
}

async fn create_account(
    transport: &dyn Transport,
    values: &FormValues,
) -> Result<Redirect, SubmissionFailure> {
    let is_coach = values.flag(IS_COACH).unwrap_or(false);
    let body = json!({
        "first_name": values.text(FIRST_NAME),
        "last_name": values.text(LAST_NAME),
        "email": values.text(EMAIL),
        "password": values.text(PASSWORD),
        "is_coach": is_coach,
    });
    let response = transport.post_json(ENDPOINT, body).await?;

    let user_id = match response.text_field("user_id") {
        Some(user_id) => user_id,
        None => {
            tracing::warn!(form = FORM, "account creation rejected");
            return Err(SubmissionFailure::rejected(
                response.message().unwrap_or("Account was not created"),
            ));
        }
    };

    tracing::info!(form = FORM, user_id = %user_id, is_coach, "account created");
    Ok(Redirect {
        route: Route::InitialSurvey { user_id, is_coach },
        body: response.body,
    })
}
