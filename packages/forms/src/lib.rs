pub mod create_account;
pub mod daily_check_in;
pub mod initial_survey;
pub mod login;
pub mod routes;

pub use routes::{Redirect, Route};

use std::fmt;
use std::str::FromStr;

use models::FormValues;
use services::{Submission, ValidationPipeline};
use tracing::Instrument;
use transport::Transport;

use daily_check_in::CheckInStatus;
use initial_survey::SurveyContext;

/// Value key callers use to pass the check-in status alongside the fields.
pub const ALREADY_FILLED: &str = "already_filled";
/// Value keys carrying the survey context alongside the fields.
pub const USER_ID: &str = "user_id";
pub const IS_COACH: &str = create_account::IS_COACH;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    CreateAccount,
    Login,
    DailyCheckIn,
    InitialSurvey,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown form '{0}', expected one of: create-account, login, daily-check-in, initial-survey")]
pub struct UnknownForm(pub String);

/// A form was dispatched without the context value it needs to submit.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("form '{form}' needs a non-empty '{key}' value")]
pub struct MissingContext {
    pub form: &'static str,
    pub key: &'static str,
}

impl FormKind {
    pub const ALL: [FormKind; 4] = [
        FormKind::CreateAccount,
        FormKind::Login,
        FormKind::DailyCheckIn,
        FormKind::InitialSurvey,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FormKind::CreateAccount => create_account::FORM,
            FormKind::Login => login::FORM,
            FormKind::DailyCheckIn => daily_check_in::FORM,
            FormKind::InitialSurvey => initial_survey::FORM,
        }
    }

    pub fn pipeline(&self) -> ValidationPipeline {
        match self {
            FormKind::CreateAccount => create_account::pipeline(),
            FormKind::Login => login::pipeline(),
            FormKind::DailyCheckIn => daily_check_in::pipeline(),
            FormKind::InitialSurvey => initial_survey::pipeline(),
        }
    }

    /// Run the form's submit flow. Context the form needs beyond its own fields
    /// (`already_filled`, `user_id`, `is_coach`) is read from `values`.
    ///
    /// Returns `None` when the form decided not to submit at all, and
    /// [`MissingContext`] when a required context value is absent or empty.
    pub async fn submit(
        &self,
        transport: &dyn Transport,
        values: FormValues,
    ) -> Result<Option<Submission<Redirect>>, MissingContext> {
        let span = tracing::info_span!("submit", form = self.name());
        self.run(transport, values).instrument(span).await
    }

    async fn run(
        &self,
        transport: &dyn Transport,
        values: FormValues,
    ) -> Result<Option<Submission<Redirect>>, MissingContext> {
        let submission = match self {
            FormKind::CreateAccount => Some(create_account::submit(transport, values).await),
            FormKind::Login => Some(login::submit(transport, values).await),
            FormKind::DailyCheckIn => {
                let status = if values.flag(ALREADY_FILLED).unwrap_or(false) {
                    CheckInStatus::AlreadyFilled
                } else {
                    CheckInStatus::Open
                };
                daily_check_in::submit(transport, values, status).await
            }
            FormKind::InitialSurvey => {
                let user_id = values.text(USER_ID).to_string();
                if user_id.is_empty() {
                    tracing::warn!(key = USER_ID, "survey submitted without an account");
                    return Err(MissingContext {
                        form: self.name(),
                        key: USER_ID,
                    });
                }
                let context = SurveyContext {
                    user_id,
                    is_coach: values.flag(IS_COACH).unwrap_or(false),
                };
                Some(initial_survey::submit(transport, values, &context).await)
            }
        };
        Ok(submission)
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormKind {
    type Err = UnknownForm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownForm(s.to_string()))
    }
}

#[cfg(test)]
pub mod test_helpers;
