//! Wire shapes of the LearnHub REST contract.

use serde::Deserialize;

/// Envelope wrapping every successful list response:
/// `{ "data": { "items": [...], ... } }`.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: T,
}

/// Best-effort shape of an error response body. Anything without a
/// `message` field still deserializes, it just carries no server text.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
