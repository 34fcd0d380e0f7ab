use crate::client::{ApiResponse, ProductApi};
use crate::product::FormValues;
use leptos::logging::{log, warn};
use serde::Deserialize;
use thiserror::Error;

pub const SUCCESS_MESSAGE: &str = "product stored";

const CREATED: u16 = 201;
const INVALID_REQUEST: u16 = 400;

/// Why a submission did not store the product. `Display` is the text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Unexpected error, please try again")]
    Server,
    #[error("{0}")]
    InvalidRequest(String),
    #[error("connection error, please try later")]
    Connection,
    /// Status the form has no dedicated message for
    #[error("Unexpected error, please try again")]
    Unexpected(u16),
}

pub type SubmissionOutcome = Result<(), SubmitError>;

#[derive(Deserialize)]
struct InvalidRequestBody {
    message: String,
}

/// Maps an HTTP answer onto the outcome of the submission.
pub fn classify(response: &ApiResponse) -> SubmissionOutcome {
    match response.status {
        CREATED => Ok(()),
        INVALID_REQUEST => {
            let parsed = response
                .body
                .as_deref()
                .map(serde_json::from_str::<InvalidRequestBody>);
            match parsed {
                Some(Ok(body)) => Err(SubmitError::InvalidRequest(body.message)),
                Some(Err(e)) => {
                    warn!("400 without a readable message: {e}");
                    Err(SubmitError::Unexpected(INVALID_REQUEST))
                }
                None => Err(SubmitError::Unexpected(INVALID_REQUEST)),
            }
        }
        500..=599 => Err(SubmitError::Server),
        status => Err(SubmitError::Unexpected(status)),
    }
}

/// Posts the values and classifies whatever comes back.
pub async fn submit_product<A: ProductApi>(api: &A, values: &FormValues) -> SubmissionOutcome {
    let outcome = match api.create_product(values).await {
        Ok(response) => {
            log!("create product answered {}", response.status);
            classify(&response)
        }
        Err(e) => {
            warn!("create product failed: {e}");
            Err(SubmitError::Connection)
        }
    };
    log!("submission outcome: {outcome:?}");
    outcome
}

/// Feedback of the most recent submission. No history is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionState {
    pub is_saving: bool,
    pub is_success: bool,
    pub error_message: Option<String>,
}

impl SubmissionState {
    /// A request is about to go out; the previous feedback stays until it settles.
    pub fn begin(&mut self) {
        self.is_saving = true;
    }

    pub fn settle(&mut self, outcome: &SubmissionOutcome) {
        self.is_saving = false;
        match outcome {
            Ok(()) => {
                self.is_success = true;
                self.error_message = None;
            }
            Err(e) => {
                self.is_success = false;
                self.error_message = Some(e.to_string());
            }
        }
    }

    pub fn success_message(&self) -> Option<&'static str> {
        self.is_success.then_some(SUCCESS_MESSAGE)
    }
}
