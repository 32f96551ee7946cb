//! Transaction detail endpoint client

use gloo_net::http::Request;
use hisab_core::TransactionDetails;

use crate::error::{Result, UiError};

/// Fetch and decode one transaction's details.
///
/// Single attempt, no timeout beyond the browser's own.
///
/// # Errors
///
/// - `UiError::RequestFailed` if the request cannot be sent or the body read
/// - `UiError::BadStatus` for non-2xx responses
/// - `UiError::Core` if the body is not a JSON object
pub async fn fetch_transaction_details(path: &str) -> Result<TransactionDetails> {
    let response = Request::get(path)
        .send()
        .await
        .map_err(|err| request_failed(path, &err))?;

    if !response.ok() {
        return Err(UiError::BadStatus {
            url: path.to_string(),
            status: response.status(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|err| request_failed(path, &err))?;

    Ok(TransactionDetails::from_json(&body)?)
}

fn request_failed(path: &str, err: &gloo_net::Error) -> UiError {
    UiError::RequestFailed {
        url: path.to_string(),
        reason: err.to_string(),
    }
}
