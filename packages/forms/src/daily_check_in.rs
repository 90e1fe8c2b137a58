use models::FormValues;
use serde_json::json;
use services::{FieldValidator, Submission, SubmissionFailure, SubmissionOutcome, ValidationPipeline};
use transport::Transport;

use crate::routes::{Redirect, Route};

pub const FORM: &str = "daily-check-in";
pub const ENDPOINT: &str = "/api/surveys/daily-survey";

pub const CALORIES: &str = "calories";
pub const WATER_INTAKE: &str = "water_intake";
pub const WEIGHT: &str = "weight";
pub const MOOD: &str = "mood";

/// Whether today's check-in has been filled in already.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckInStatus {
    #[default]
    Open,
    AlreadyFilled,
}

pub fn pipeline() -> ValidationPipeline {
    ValidationPipeline::new()
        .field(CALORIES, FieldValidator::required("Missing Calorie Intake"))
        .field(WATER_INTAKE, FieldValidator::required("Missing Water Intake"))
        .field(WEIGHT, FieldValidator::weight())
        .field(MOOD, FieldValidator::required("Missing mood."))
}

/// Submit today's check-in. Returns `None` without validating when it was already filled.
pub async fn submit(
    transport: &dyn Transport,
    values: FormValues,
    status: CheckInStatus,
) -> Option<Submission<Redirect>> {
    if status == CheckInStatus::AlreadyFilled {
        tracing::info!(form = FORM, "daily check-in already filled");
        return None;
    }

    let submission = pipeline()
        .submit(values, |values| async move {
            SubmissionOutcome::from(send_check_in(transport, &values).await)
        })
        .await;
    Some(submission)
}

async fn send_check_in(
    transport: &dyn Transport,
    values: &FormValues,
) -> Result<Redirect, SubmissionFailure> {
    let body = json!({
        "calories": values.text(CALORIES),
        "waterIntake": values.text(WATER_INTAKE),
        "weight": values.text(WEIGHT),
        "mood": values.text(MOOD),
    });
    let response = transport.post_json(ENDPOINT, body).await?;

    tracing::info!(form = FORM, status = response.status, "daily check-in submitted");
    Ok(Redirect {
        route: Route::Home,
        body: response.body,
    })
}
