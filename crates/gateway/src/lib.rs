pub mod contract;
pub mod error;
pub mod llm;

pub use contract::Contract;
pub use error::{GatewayError, SchemaError};
pub use llm::{CompletionClient, OllamaClient};

use serde_json::Value;

/// Run one completion against a typed output contract.
///
/// Sends the rendered prompt, awaits the single response, strips any markdown
/// code fence the model wrapped the payload in, parses it as JSON and
/// validates it through the contract. Returns a fully schema-valid value or a
/// `GatewayError`; never a partially-valid one.
pub async fn complete<T: Contract>(
    client: &dyn CompletionClient,
    prompt: &str,
) -> Result<T, GatewayError> {
    let raw = client.complete_raw(prompt).await?;

    let payload = strip_code_fence(&raw);
    if payload.trim().is_empty() {
        return Err(GatewayError::EmptyResponse);
    }

    let value: Value = serde_json::from_str(payload).map_err(GatewayError::MalformedJson)?;
    if value.is_null() {
        return Err(GatewayError::EmptyResponse);
    }

    let typed = T::validate(value)?;
    tracing::debug!(contract = T::NAME, "completion response validated");
    Ok(typed)
}

/// Models occasionally wrap JSON in a ```json fence despite instructions.
/// Unwrap it; anything else passes through untouched.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Echo {
        text: String,
    }

    impl Contract for Echo {
        const NAME: &'static str = "echo";

        fn schema_lines() -> &'static str {
            r#""text": string"#
        }

        fn empty() -> Self {
            Self {
                text: String::new(),
            }
        }

        fn validate(raw: Value) -> Result<Self, SchemaError> {
            contract::decode(Self::NAME, raw)
        }
    }

    struct FixedClient(String);

    #[async_trait]
    impl CompletionClient for FixedClient {
        async fn complete_raw(&self, _prompt: &str) -> Result<String, GatewayError> {
            Ok(self.0.clone())
        }
    }

    struct FailingClient;

    #[async_trait]
    impl CompletionClient for FailingClient {
        async fn complete_raw(&self, _prompt: &str) -> Result<String, GatewayError> {
            Err(GatewayError::Status(503))
        }
    }

    #[tokio::test]
    async fn complete_returns_validated_value() {
        let client = FixedClient(r#"{"text": "hello"}"#.to_string());
        let echo: Echo = complete(&client, "prompt").await.unwrap();
        assert_eq!(echo.text, "hello");
    }

    #[tokio::test]
    async fn complete_accepts_code_fenced_payload() {
        let client = FixedClient("```json\n{\"text\": \"hello\"}\n```".to_string());
        let echo: Echo = complete(&client, "prompt").await.unwrap();
        assert_eq!(echo.text, "hello");
    }

    #[tokio::test]
    async fn complete_rejects_empty_payload() {
        let client = FixedClient("   ".to_string());
        let err = complete::<Echo>(&client, "prompt").await.unwrap_err();
        assert!(matches!(err, GatewayError::EmptyResponse));
    }

    #[tokio::test]
    async fn complete_rejects_null_payload() {
        let client = FixedClient("null".to_string());
        let err = complete::<Echo>(&client, "prompt").await.unwrap_err();
        assert!(matches!(err, GatewayError::EmptyResponse));
    }

    #[tokio::test]
    async fn complete_rejects_malformed_json() {
        let client = FixedClient("{not json".to_string());
        let err = complete::<Echo>(&client, "prompt").await.unwrap_err();
        assert!(matches!(err, GatewayError::MalformedJson(_)));
    }

    #[tokio::test]
    async fn complete_rejects_schema_mismatch() {
        let client = FixedClient(r#"{"text": 42}"#.to_string());
        let err = complete::<Echo>(&client, "prompt").await.unwrap_err();
        assert!(matches!(err, GatewayError::Schema(_)));
    }

    #[tokio::test]
    async fn complete_propagates_transport_failure() {
        let err = complete::<Echo>(&FailingClient, "prompt").await.unwrap_err();
        assert!(matches!(err, GatewayError::Status(503)));
    }

    #[test]
    fn fence_stripping_leaves_bare_json_alone() {
        assert_eq!(strip_code_fence(r#"{"a": 1}"#), r#"{"a": 1}"#);
        assert_eq!(strip_code_fence("```{\"a\": 1}```"), r#"{"a": 1}"#);
    }
}
