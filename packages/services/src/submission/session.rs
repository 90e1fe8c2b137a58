use std::collections::BTreeMap;
use std::future::Future;

use models::{FieldValue, FormValues};

use super::outcome::{Submission, SubmissionOutcome};
use crate::validation::ValidationPipeline;

/// Where a form is in its current submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Validating,
    /// Validation failed. The next edit returns the form to `Idle`.
    Invalid,
    Submitting,
    Succeeded,
    Failed,
}

/// Caller-side state of one mounted form: the value snapshot, the errors currently
/// shown next to each field, and the submission state.
#[derive(Debug)]
pub struct FormSession {
    pipeline: ValidationPipeline,
    values: FormValues,
    errors: BTreeMap<String, String>,
    state: SubmissionState,
}

impl FormSession {
    /// Mount a form with every registered field empty.
    pub fn mount(pipeline: ValidationPipeline) -> Self {
        let values = pipeline
            .field_names()
            .map(|name| (name.to_string(), FieldValue::empty()))
            .collect();
        FormSession {
            pipeline,
            values,
            errors: BTreeMap::new(),
            state: SubmissionState::Idle,
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn pipeline(&self) -> &ValidationPipeline {
        &self.pipeline
    }

    /// Error currently shown for `field`.
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Record user input for `field` and clear that field's shown error.
    pub fn set_value(&mut self, field: &str, value: impl Into<FieldValue>) {
        self.values.set(field, value);
        self.errors.remove(field);
        if self.state == SubmissionState::Invalid {
            self.state = SubmissionState::Idle;
        }
    }

    /// Validate the current values and submit them through `action` when valid.
    ///
    /// Shown errors are replaced by the fresh validation result on every call.
    pub async fn submit<T, F, Fut>(&mut self, action: F) -> Submission<T>
    where
        F: FnOnce(FormValues) -> Fut,
        Fut: Future<Output = SubmissionOutcome<T>>,
    {
        let submission = self
            .pipeline
            .submit_observed(self.values.clone(), action, |state| self.state = state)
            .await;
        self.errors = match &submission {
            Submission::Invalid(result) => result
                .fields()
                .filter_map(|(field, error)| error.map(|e| (field.to_string(), e.to_string())))
                .collect(),
            Submission::Completed(_) => BTreeMap::new(),
        };
        submission
    }
}
