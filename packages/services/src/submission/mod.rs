pub mod outcome;
pub mod session;

pub use outcome::{Submission, SubmissionFailure, SubmissionOutcome};
pub use session::{FormSession, SubmissionState};
