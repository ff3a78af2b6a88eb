use crate::controller::{Completion, SubmissionController};
use crate::error::SubmissionFailure;
use crate::form::FormInputs;
use crate::prediction::PredictionResult;

/// Transport for a single prediction request.
///
/// The web client implements this over the browser fetch API; tests use an
/// in-memory double.
#[allow(async_fn_in_trait)]
pub trait PredictionClient {
    async fn predict(
        &self,
        endpoint: &str,
        inputs: &FormInputs,
    ) -> Result<PredictionResult, SubmissionFailure>;
}

/// Turns a raw HTTP reply into a prediction. Any non-2xx status is a
/// `Status` failure; a 2xx body that is not a prediction is a `Decode` failure.
pub fn interpret_response(status: u16, body: &str) -> Result<PredictionResult, SubmissionFailure> {
    if !(200..300).contains(&status) {
        return Err(SubmissionFailure::Status(status));
    }
    serde_json::from_str(body).map_err(|e| SubmissionFailure::Decode(e.to_string()))
}

/// Runs one full submit cycle against `client` and applies the outcome.
pub async fn submit_with<C: PredictionClient>(
    controller: &mut SubmissionController,
    client: &C,
    endpoint: &str,
) -> Completion {
    let ticket = controller.begin_submit();
    let outcome = client.predict(endpoint, &ticket.inputs).await;
    controller.complete(ticket.token, outcome)
}
