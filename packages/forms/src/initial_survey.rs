use models::field_value::DATE_FORMAT;
use models::FormValues;
use serde_json::json;
use services::{FieldValidator, Submission, SubmissionFailure, SubmissionOutcome, ValidationPipeline};
use transport::Transport;

use crate::routes::{Redirect, Route};

pub const FORM: &str = "initial-survey";
pub const ENDPOINT: &str = "/api/surveys/initial-survey";

pub const DATE_OF_BIRTH: &str = "date_of_birth";
pub const GENDER: &str = "gender";
pub const HEIGHT: &str = "height";
pub const WEIGHT: &str = "weight";
pub const FITNESS_GOAL: &str = "fitness_goal";

pub const GENDERS: [&str; 5] = ["male", "female", "non-binary", "other", "no-answer"];

/// The account the survey belongs to, carried over from account creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyContext {
    pub user_id: String,
    pub is_coach: bool,
}

impl SurveyContext {
    pub fn from_route(route: &Route) -> Option<Self> {
        match route {
            Route::InitialSurvey { user_id, is_coach } => Some(SurveyContext {
                user_id: user_id.clone(),
                is_coach: *is_coach,
            }),
            _ => None,
        }
    }

    /// Coaches continue to the coach survey, clients go home.
    pub fn next_route(&self) -> Route {
        if self.is_coach {
            Route::CoachSurvey {
                user_id: self.user_id.clone(),
            }
        } else {
            Route::Home
        }
    }
}

pub fn pipeline() -> ValidationPipeline {
    ValidationPipeline::new()
        .field(DATE_OF_BIRTH, FieldValidator::date())
        .field(GENDER, FieldValidator::selection(&GENDERS, "Select a value"))
        .field(HEIGHT, FieldValidator::height())
        .field(WEIGHT, FieldValidator::weight())
        .field(FITNESS_GOAL, FieldValidator::goal())
}

pub async fn submit(
    transport: &dyn Transport,
    values: FormValues,
    context: &SurveyContext,
) -> Submission<Redirect> {
    pipeline()
        .submit(values, |values| async move {
            SubmissionOutcome::from(send_survey(transport, &values, context).await)
        })
        .await
}

async fn send_survey(
    transport: &dyn Transport,
    values: &FormValues,
    context: &SurveyContext,
) -> Result<Redirect, SubmissionFailure> {
    let date_of_birth = values
        .date(DATE_OF_BIRTH)
        .map(|date| date.format(DATE_FORMAT).to_string());
    let body = json!({
        "user_id": context.user_id,
        "date_of_birth": date_of_birth,
        "gender": values.text(GENDER),
        "height": values.text(HEIGHT),
        "weight": values.text(WEIGHT),
        "fitness_goal": values.text(FITNESS_GOAL),
    });
    let response = transport.post_json(ENDPOINT, body).await?;

    tracing::info!(form = FORM, user_id = %context.user_id, "initial survey submitted");
    Ok(Redirect {
        route: context.next_route(),
        body: response.body,
    })
}
