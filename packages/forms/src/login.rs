use models::FormValues;
use serde_json::json;
use services::{FieldValidator, Submission, SubmissionFailure, SubmissionOutcome, ValidationPipeline};
use transport::Transport;

use crate::routes::{Redirect, Route};

pub const FORM: &str = "login";
pub const ENDPOINT: &str = "/api/login";
pub const SUCCESS_MESSAGE: &str = "Logged in successfully";

pub const EMAIL: &str = "email";
pub const PASSWORD: &str = "password";

pub fn pipeline() -> ValidationPipeline {
    ValidationPipeline::new()
        .field(EMAIL, FieldValidator::email())
        .field(PASSWORD, FieldValidator::password())
}

pub async fn submit(transport: &dyn Transport, values: FormValues) -> Submission<Redirect> {
    pipeline()
        .submit(values, |values| async move {
            SubmissionOutcome::from(log_in(transport, &values).await)
        })
        .await
}

async fn log_in(transport: &dyn Transport, values: &FormValues) -> Result<Redirect, SubmissionFailure> {
    let body = json!({
        "email": values.text(EMAIL),
        "password": values.text(PASSWORD),
    });
    let response = transport.post_json(ENDPOINT, body).await?;

    if response.message() != Some(SUCCESS_MESSAGE) {
        tracing::warn!(form = FORM, "login rejected");
        return Err(SubmissionFailure::rejected(
            response.message().unwrap_or("Unexpected login response"),
        ));
    }

    tracing::info!(form = FORM, "login success");
    Ok(Redirect {
        route: Route::Home,
        body: response.body,
    })
}
