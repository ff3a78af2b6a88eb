//! Domain types and view logic shared by the CardioCheck web client and host.

pub mod client;
pub mod controller;
pub mod error;
pub mod form;
pub mod prediction;
pub mod presenter;

pub use client::{PredictionClient, interpret_response, submit_with};
pub use controller::{
    Completion, MOBILE_BREAKPOINT_PX, RequestToken, SubmissionController, SubmitTicket, ViewState,
    is_small_viewport,
};
pub use error::{SUBMISSION_FAILURE_MESSAGE, SubmissionFailure};
pub use form::{FormInputs, VitalField};
pub use prediction::{ClientConfig, PredictionResult, Probabilities};
pub use presenter::{
    CHART_PALETTE, ChartData, DiagnosisCategory, Recommendation, chart_data, diagnosis_category,
    recommendation,
};

/// Prediction endpoint used when no configuration has been supplied.
pub const DEFAULT_PREDICTION_URL: &str = "http://127.0.0.1:8000/predict";
