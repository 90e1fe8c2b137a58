use std::future::Future;

use models::FormValues;

use super::result::ValidationResult;
use super::rule::Rule;
use crate::submission::{Submission, SubmissionOutcome, SubmissionState};

/// A form's rule table.
///
/// Holds one [`Rule`] per field name. The pipeline owns no field values; callers pass
/// a fresh snapshot into [`validate`](Self::validate) or [`submit`](Self::submit).
#[derive(Debug, Default)]
pub struct ValidationPipeline {
    fields: Vec<(String, Rule)>,
}

impl ValidationPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `rule` for `name`, replacing any rule already registered for it.
    pub fn register_field(&mut self, name: impl Into<String>, rule: Rule) -> &mut Self {
        let name = name.into();
        match self.fields.iter_mut().find(|(field, _)| *field == name) {
            Some(entry) => entry.1 = rule,
            None => self.fields.push((name, rule)),
        }
        self
    }

    /// Builder form of [`register_field`](Self::register_field).
    pub fn field(mut self, name: impl Into<String>, rule: Rule) -> Self {
        self.register_field(name, rule);
        self
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn rule(&self, name: &str) -> Option<&Rule> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, rule)| rule)
    }

    /// Evaluate every registered field against `values`.
    pub fn validate(&self, values: &FormValues) -> ValidationResult {
        let mut result = ValidationResult::new();
        for (name, rule) in &self.fields {
            let value = values.value(name);
            result.record(name, rule.evaluate(&value, values));
        }
        result
    }

    /// Validate `values` and, only when every field passes, hand them to `action`.
    ///
    /// `action` runs at most once and its outcome is returned as is.
    pub async fn submit<T, F, Fut>(&self, values: FormValues, action: F) -> Submission<T>
    where
        F: FnOnce(FormValues) -> Fut,
        Fut: Future<Output = SubmissionOutcome<T>>,
    {
        self.submit_observed(values, action, |_| {}).await
    }

    /// [`submit`](Self::submit), reporting each state the attempt enters to `observe`.
    pub(crate) async fn submit_observed<T, F, Fut, O>(
        &self,
        values: FormValues,
        action: F,
        mut observe: O,
    ) -> Submission<T>
    where
        F: FnOnce(FormValues) -> Fut,
        Fut: Future<Output = SubmissionOutcome<T>>,
        O: FnMut(SubmissionState),
    {
        observe(SubmissionState::Validating);
        let result = self.validate(&values);
        if result.is_invalid() {
            observe(SubmissionState::Invalid);
            tracing::debug!(invalid_fields = result.error_count(), "submission blocked by validation");
            return Submission::Invalid(result);
        }

        observe(SubmissionState::Submitting);
        let outcome = action(values).await;
        match &outcome {
            SubmissionOutcome::Success(_) => {
                observe(SubmissionState::Succeeded);
                tracing::info!(field_count = self.fields.len(), "submission succeeded");
            }
            SubmissionOutcome::Failure(failure) => {
                observe(SubmissionState::Failed);
                tracing::warn!(kind = failure.kind(), error = %failure, "submission failed");
            }
        }
        Submission::Completed(outcome)
    }
}
