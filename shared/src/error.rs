/// Message shown for every failed submission, whatever the cause.
pub const SUBMISSION_FAILURE_MESSAGE: &str =
    "An error occurred during prediction. Please try again.";

/// A prediction request that did not produce a usable result. The variant
/// is kept for logging only; the view always shows the same message.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmissionFailure {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server error: {0}")]
    Status(u16),
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl SubmissionFailure {
    pub fn user_message(&self) -> &'static str {
        SUBMISSION_FAILURE_MESSAGE
    }
}
