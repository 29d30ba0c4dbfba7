use gloo_net::http::Request;
use northline_core::{LeadPayload, SubmissionError};

use crate::config;

/// POST the lead to the configured webhook as JSON. Any status in the
/// success range counts as delivered; everything else, or a
/// transport-level failure, maps to a `SubmissionError` whose detail
/// never reaches the visitor.
pub async fn post_lead(payload: &LeadPayload) -> Result<(), SubmissionError> {
    let request = Request::post(&config::get_webhook_url())
        .json(payload)
        .map_err(|err| SubmissionError::Transport(err.to_string()))?;
    match request.send().await {
        Ok(response) if response.ok() => Ok(()),
        Ok(response) => Err(SubmissionError::Rejected(response.status())),
        Err(err) => Err(SubmissionError::Transport(err.to_string())),
    }
}
