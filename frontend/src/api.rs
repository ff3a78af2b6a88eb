use gloo_net::http::Request;
use shared::{
    ClientConfig, FormInputs, PredictionClient, PredictionResult, SubmissionFailure,
    interpret_response,
};

const CONFIG_PATH: &str = "/api/config";

/// Prediction transport over the browser fetch API.
#[derive(Clone, Copy, Default)]
pub struct HttpPredictionClient;

impl PredictionClient for HttpPredictionClient {
    async fn predict(
        &self,
        endpoint: &str,
        inputs: &FormInputs,
    ) -> Result<PredictionResult, SubmissionFailure> {
        let request = Request::post(endpoint)
            .json(inputs)
            .map_err(|e| SubmissionFailure::Network(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| SubmissionFailure::Network(e.to_string()))?;

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) if response.ok() => return Err(SubmissionFailure::Network(e.to_string())),
            Err(_) => String::new(),
        };

        if !response.ok() {
            log::warn!("Prediction service replied {}: {}", status, body);
        }
        interpret_response(status, &body)
    }
}

/// Asks the host server which prediction endpoint to use.
pub async fn fetch_client_config() -> Result<ClientConfig, gloo_net::Error> {
    let response = Request::get(CONFIG_PATH).send().await?;
    if !response.ok() {
        return Err(gloo_net::Error::GlooError(format!(
            "config request failed with status {}",
            response.status()
        )));
    }
    response.json::<ClientConfig>().await
}

/// Endpoint compiled into the bundle, used until the host config arrives.
pub fn default_endpoint() -> String {
    option_env!("CARDIOCHECK_PREDICTION_URL")
        .unwrap_or(shared::DEFAULT_PREDICTION_URL)
        .to_string()
}
