//! Query-string payloads for requests.

use serde::{Deserialize, Serialize};

/// Query parameters accepted by the payment lookup endpoint.
///
/// The server deserializes this from the request's query string and the
/// client SDK serializes it back into one. `filter` is unconstrained;
/// present and absent are the only states the endpoint distinguishes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentQuery {
    /// Optional filter passed through to the response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}
