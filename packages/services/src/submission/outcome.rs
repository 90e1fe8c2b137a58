use std::fmt;

use serde::Serialize;

use crate::validation::ValidationResult;

/// Why a submission that passed validation did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SubmissionFailure {
    /// No response was obtained from the server.
    Unreachable { detail: String },
    /// The server answered but refused the submission.
    Rejected { detail: String },
    /// The server answered with an error status.
    #[serde(rename = "error")]
    ErrorStatus { status: u16, detail: String },
}

impl SubmissionFailure {
    pub fn unreachable(detail: impl Into<String>) -> Self {
        SubmissionFailure::Unreachable {
            detail: detail.into(),
        }
    }

    pub fn rejected(detail: impl Into<String>) -> Self {
        SubmissionFailure::Rejected {
            detail: detail.into(),
        }
    }

    pub fn error_status(status: u16, detail: impl Into<String>) -> Self {
        SubmissionFailure::ErrorStatus {
            status,
            detail: detail.into(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            SubmissionFailure::Unreachable { .. } => "unreachable",
            SubmissionFailure::Rejected { .. } => "rejected",
            SubmissionFailure::ErrorStatus { .. } => "error",
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            SubmissionFailure::Unreachable { detail }
            | SubmissionFailure::Rejected { detail }
            | SubmissionFailure::ErrorStatus { detail, .. } => detail,
        }
    }
}

impl fmt::Display for SubmissionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionFailure::Unreachable { detail } => write!(f, "no response from server: {}", detail),
            SubmissionFailure::Rejected { detail } => write!(f, "rejected by server: {}", detail),
            SubmissionFailure::ErrorStatus { status, detail } => {
                write!(f, "server responded with status {}: {}", status, detail)
            }
        }
    }
}

impl std::error::Error for SubmissionFailure {}

/// Result of running a submission action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "data", rename_all = "snake_case")]
pub enum SubmissionOutcome<T> {
    Success(T),
    Failure(SubmissionFailure),
}

impl<T> SubmissionOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success(_))
    }

    pub fn failure(&self) -> Option<&SubmissionFailure> {
        match self {
            SubmissionOutcome::Success(_) => None,
            SubmissionOutcome::Failure(failure) => Some(failure),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> SubmissionOutcome<U> {
        match self {
            SubmissionOutcome::Success(payload) => SubmissionOutcome::Success(f(payload)),
            SubmissionOutcome::Failure(failure) => SubmissionOutcome::Failure(failure),
        }
    }

    pub fn into_result(self) -> Result<T, SubmissionFailure> {
        match self {
            SubmissionOutcome::Success(payload) => Ok(payload),
            SubmissionOutcome::Failure(failure) => Err(failure),
        }
    }
}

impl<T> From<Result<T, SubmissionFailure>> for SubmissionOutcome<T> {
    fn from(result: Result<T, SubmissionFailure>) -> Self {
        match result {
            Ok(payload) => SubmissionOutcome::Success(payload),
            Err(failure) => SubmissionOutcome::Failure(failure),
        }
    }
}

/// What a call to `submit` produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum Submission<T> {
    /// At least one field failed; the action was not invoked.
    Invalid(ValidationResult),
    /// Every field passed and the action ran once.
    Completed(SubmissionOutcome<T>),
}

impl<T> Submission<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Submission::Completed(outcome) if outcome.is_success())
    }

    pub fn validation(&self) -> Option<&ValidationResult> {
        match self {
            Submission::Invalid(result) => Some(result),
            Submission::Completed(_) => None,
        }
    }

    pub fn outcome(&self) -> Option<&SubmissionOutcome<T>> {
        match self {
            Submission::Invalid(_) => None,
            Submission::Completed(outcome) => Some(outcome),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Submission<U> {
        match self {
            Submission::Invalid(result) => Submission::Invalid(result),
            Submission::Completed(outcome) => Submission::Completed(outcome.map(f)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_kinds() {
        assert_eq!(SubmissionFailure::unreachable("timeout").kind(), "unreachable");
        assert_eq!(SubmissionFailure::rejected("Wrong password").kind(), "rejected");
        assert_eq!(SubmissionFailure::error_status(500, "boom").kind(), "error");
        assert_eq!(SubmissionFailure::error_status(500, "boom").detail(), "boom");
    }

    #[test]
    fn test_failure_serializes_with_kind_tag() {
        let json = serde_json::to_value(SubmissionFailure::error_status(404, "Not Found")).unwrap();
        assert_eq!(json["kind"], "error");
        assert_eq!(json["status"], 404);
        assert_eq!(json["detail"], "Not Found");
    }

    #[test]
    fn test_outcome_from_result() {
        let ok: SubmissionOutcome<u32> = Ok(7).into();
        assert_eq!(ok, SubmissionOutcome::Success(7));

        let err: SubmissionOutcome<u32> = Err(SubmissionFailure::rejected("no")).into();
        assert_eq!(err.failure().map(|f| f.kind()), Some("rejected"));
        assert!(err.into_result().is_err());
    }

    #[test]
    fn test_submission_success_requires_completed_success() {
        let done: Submission<()> = Submission::Completed(SubmissionOutcome::Success(()));
        assert!(done.is_success());

        let failed: Submission<()> =
            Submission::Completed(SubmissionOutcome::Failure(SubmissionFailure::unreachable("x")));
        assert!(!failed.is_success());

        let invalid: Submission<()> = Submission::Invalid(ValidationResult::new());
        assert!(!invalid.is_success());
        assert!(invalid.validation().is_some());
    }
}
