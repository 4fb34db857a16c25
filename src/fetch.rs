/// Fetching the product collection from the remote API
///
/// One GET, no retry, no auth. Either the whole list arrives or the
/// caller gets a single descriptive error — there is no partial result.

use thiserror::Error;

use crate::state::data::Product;

/// The product collection endpoint (Platzi fake store API)
pub const API_URL: &str = "https://api.escuelajs.co/api/v1/products";

/// The one failure kind the dashboard knows: the fetch didn't produce a
/// product list. Covers transport failures, non-2xx statuses, and
/// malformed bodies alike; `Clone` so it can ride inside a Message.
#[derive(Debug, Clone, Error)]
#[error("{reason}")]
pub struct FetchError {
    reason: String,
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        let reason = match error.status() {
            Some(status) => format!("HTTP error! status: {status}"),
            None => error.to_string(),
        };
        FetchError { reason }
    }
}

/// Fetch the full product collection.
///
/// Runs once at startup (and again on Reload). A failed fetch leaves
/// the caller's state untouched; the error message is shown to the user.
pub async fn fetch_products() -> Result<Vec<Product>, FetchError> {
    let response = reqwest::get(API_URL).await?;
    let response = response.error_for_status()?;
    let products = response.json::<Vec<Product>>().await?;

    Ok(products)
}
