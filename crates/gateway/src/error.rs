use thiserror::Error;

/// A completion response that does not match its output contract.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("{contract} response did not match the expected shape: {source}")]
    Shape {
        contract: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("{contract} response is not a JSON object")]
    NotAnObject { contract: &'static str },
}

/// Failure at the completion-service boundary. The stages degrade these into
/// valid empty or explanatory results; the HTTP layer surfaces them directly.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("completion request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("completion service returned status {0}")]
    Status(u16),
    #[error("completion service returned an empty response")]
    EmptyResponse,
    #[error("completion response was not valid JSON: {0}")]
    MalformedJson(#[source] serde_json::Error),
    #[error(transparent)]
    Schema(#[from] SchemaError),
}
