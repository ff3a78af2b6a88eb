//! Submission lifecycle: form state, loading flag, error and current result.
//!
//! The controller is synchronous. A caller starts a submission with
//! [`SubmissionController::begin_submit`], performs the request however it
//! likes, then hands the outcome back through
//! [`SubmissionController::complete`] along with the ticket's token. Only
//! the most recently issued token is accepted, so a late response from an
//! earlier request (or one that was in flight during a reset) never
//! overwrites newer state.

use crate::error::SubmissionFailure;
use crate::form::{FormInputs, VitalField};
use crate::prediction::PredictionResult;

/// Viewports narrower than this (in CSS pixels) scroll the results into view
/// after a successful prediction.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

pub fn is_small_viewport(width: f64) -> bool {
    width < MOBILE_BREAKPOINT_PX
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Everything needed to send one prediction request.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitTicket {
    pub token: RequestToken,
    pub inputs: FormInputs,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub loading: bool,
    pub error: Option<String>,
    pub prediction: Option<PredictionResult>,
}

/// What a call to [`SubmissionController::complete`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Succeeded,
    Failed,
    /// The token was not the latest one issued; state is unchanged.
    Ignored,
}

#[derive(Debug, Default)]
pub struct SubmissionController {
    form: FormInputs,
    view: ViewState,
    last_issued: u64,
    pending: Option<RequestToken>,
}

impl SubmissionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &FormInputs {
        &self.form
    }

    pub fn is_loading(&self) -> bool {
        self.view.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.view.error.as_deref()
    }

    pub fn prediction(&self) -> Option<&PredictionResult> {
        self.view.prediction.as_ref()
    }

    pub fn set_field(&mut self, field: VitalField, value: impl Into<String>) {
        self.form.set_field(field, value);
    }

    /// Marks the view as loading and issues a fresh token. Any earlier
    /// outstanding token is superseded.
    pub fn begin_submit(&mut self) -> SubmitTicket {
        self.last_issued += 1;
        let token = RequestToken(self.last_issued);
        self.pending = Some(token);
        self.view.loading = true;
        self.view.error = None;

        log::info!("Submitting vitals (request #{})", token.value());

        SubmitTicket {
            token,
            inputs: self.form.clone(),
        }
    }

    pub fn complete(
        &mut self,
        token: RequestToken,
        outcome: Result<PredictionResult, SubmissionFailure>,
    ) -> Completion {
        if self.pending != Some(token) {
            log::debug!("Ignoring stale response for request #{}", token.value());
            return Completion::Ignored;
        }
        self.pending = None;
        self.view.loading = false;

        match outcome {
            Ok(result) => {
                log::info!(
                    "Prediction #{} received: {} ({} classes)",
                    token.value(),
                    result.prediction,
                    result.probabilities.len()
                );
                self.view.error = None;
                self.view.prediction = Some(result);
                Completion::Succeeded
            }
            Err(failure) => {
                log::error!("Prediction #{} failed: {}", token.value(), failure);
                // The previous prediction, if any, stays on screen.
                self.view.error = Some(failure.user_message().to_string());
                Completion::Failed
            }
        }
    }

    /// Clears the form, the result and the error. An in-flight request is
    /// not cancelled but its response will be ignored.
    pub fn reset(&mut self) {
        self.form.reset();
        self.view = ViewState::default();
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prediction::Probabilities;

    fn result(prediction: &str, probabilities: &[(&str, f64)]) -> PredictionResult {
        PredictionResult {
            prediction: prediction.to_string(),
            probabilities: probabilities.iter().copied().collect::<Probabilities>(),
            message: "x".to_string(),
        }
    }

    fn network_failure() -> SubmissionFailure {
        SubmissionFailure::Network("connection reset".into())
    }

    #[test]
    fn test_loading_spans_submission() {
        let mut controller = SubmissionController::new();
        assert!(!controller.is_loading());

        let ticket = controller.begin_submit();
        assert!(controller.is_loading());

        controller.complete(ticket.token, Ok(result("Good", &[("Good", 1.0)])));
        assert!(!controller.is_loading());

        let ticket = controller.begin_submit();
        assert!(controller.is_loading());
        controller.complete(ticket.token, Err(network_failure()));
        assert!(!controller.is_loading());
    }

    #[test]
    fn test_ticket_carries_current_inputs() {
        let mut controller = SubmissionController::new();
        controller.set_field(VitalField::Age, "61");
        controller.set_field(VitalField::Spo2, "94");

        let ticket = controller.begin_submit();
        assert_eq!(ticket.inputs.age, "61");
        assert_eq!(ticket.inputs.spo2, "94");
        assert_eq!(ticket.inputs.hr, "");
    }

    #[test]
    fn test_failure_keeps_previous_prediction() {
        let mut controller = SubmissionController::new();
        let first = result("Heart Failure", &[("Heart Failure", 0.8), ("Good", 0.2)]);

        let ticket = controller.begin_submit();
        assert_eq!(controller.complete(ticket.token, Ok(first.clone())), Completion::Succeeded);

        let ticket = controller.begin_submit();
        assert_eq!(controller.complete(ticket.token, Err(network_failure())), Completion::Failed);

        assert_eq!(
            controller.error(),
            Some("An error occurred during prediction. Please try again.")
        );
        assert_eq!(controller.prediction(), Some(&first));
    }

    #[test]
    fn test_new_submission_clears_error() {
        let mut controller = SubmissionController::new();
        let ticket = controller.begin_submit();
        controller.complete(ticket.token, Err(SubmissionFailure::Status(500)));
        assert!(controller.error().is_some());

        controller.begin_submit();
        assert!(controller.error().is_none());
    }

    #[test]
    fn test_second_result_replaces_first() {
        let mut controller = SubmissionController::new();

        let ticket = controller.begin_submit();
        controller.complete(
            ticket.token,
            Ok(result("Heart Failure", &[("Heart Failure", 0.8), ("Good", 0.2)])),
        );

        let second = result("Arrhythmia", &[("Arrhythmia", 0.7), ("Good", 0.3)]);
        let ticket = controller.begin_submit();
        controller.complete(ticket.token, Ok(second.clone()));

        let current = controller.prediction().unwrap();
        assert_eq!(current, &second);
        assert_eq!(current.probabilities.get("Heart Failure"), None);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut controller = SubmissionController::new();
        controller.set_field(VitalField::Weight, "80");

        let ticket = controller.begin_submit();
        controller.complete(ticket.token, Ok(result("Good", &[("Good", 1.0)])));
        let ticket = controller.begin_submit();
        controller.complete(ticket.token, Err(network_failure()));

        controller.reset();
        assert!(controller.form().is_empty());
        assert!(!controller.is_loading());
        assert!(controller.error().is_none());
        assert!(controller.prediction().is_none());
    }

    #[test]
    fn test_response_after_reset_is_ignored() {
        let mut controller = SubmissionController::new();
        let ticket = controller.begin_submit();
        controller.reset();
        assert!(!controller.is_loading());

        let outcome = controller.complete(ticket.token, Ok(result("Good", &[("Good", 1.0)])));
        assert_eq!(outcome, Completion::Ignored);
        assert!(controller.prediction().is_none());
    }

    #[test]
    fn test_reset_while_loading_wins_over_late_completion() {
        let mut controller = SubmissionController::new();
        controller.set_field(VitalField::Height, "180");
        let ticket = controller.begin_submit();
        controller.complete(ticket.token, Ok(result("Good", &[("Good", 1.0)])));
        let ticket = controller.begin_submit();
        controller.complete(ticket.token, Err(network_failure()));

        let in_flight = controller.begin_submit();
        controller.reset();
        let outcome = controller.complete(
            in_flight.token,
            Ok(result("Heart Failure", &[("Heart Failure", 0.9), ("Good", 0.1)])),
        );

        assert_eq!(outcome, Completion::Ignored);
        assert!(controller.form().is_empty());
        assert!(controller.prediction().is_none());
        assert!(controller.error().is_none());
        assert!(!controller.is_loading());
    }

    #[test]
    fn test_out_of_order_response_is_ignored() {
        let mut controller = SubmissionController::new();
        let older = controller.begin_submit();
        let newer = controller.begin_submit();
        assert!(newer.token > older.token);

        let latest = result("Arrhythmia", &[("Arrhythmia", 0.9), ("Good", 0.1)]);
        assert_eq!(controller.complete(newer.token, Ok(latest.clone())), Completion::Succeeded);

        let stale = controller.complete(older.token, Ok(result("Good", &[("Good", 1.0)])));
        assert_eq!(stale, Completion::Ignored);
        assert_eq!(controller.prediction(), Some(&latest));
        assert!(!controller.is_loading());
    }

    #[test]
    fn test_stale_failure_does_not_end_loading() {
        let mut controller = SubmissionController::new();
        let older = controller.begin_submit();
        let _newer = controller.begin_submit();

        controller.complete(older.token, Err(network_failure()));
        assert!(controller.is_loading());
        assert!(controller.error().is_none());
    }

    #[test]
    fn test_small_viewport() {
        assert!(is_small_viewport(375.0));
        assert!(!is_small_viewport(768.0));
        assert!(!is_small_viewport(1280.0));
    }
}
