use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::SchemaError;

/// A structured output contract for one completion call.
///
/// Each contract is the single source of truth for its shape: the prompt
/// builders embed `schema_lines()` to describe the expected JSON to the model,
/// and the gateway runs `validate()` on whatever comes back. `empty()` is the
/// degrade value the stages fall back to.
pub trait Contract: Sized {
    /// Diagnostic label used in error messages and logs.
    const NAME: &'static str;

    /// Natural-language description of the expected JSON shape, one field per
    /// line, ready to paste into a prompt's SCHEMA section.
    fn schema_lines() -> &'static str;

    /// The well-formed empty value for this contract.
    fn empty() -> Self;

    /// Check a raw response value against the contract. Rejects missing
    /// required fields and wrong primitive types; implementations may also
    /// normalize (e.g. collapse empty-string optionals).
    fn validate(raw: Value) -> Result<Self, SchemaError>;
}

/// Shared decode step for contract implementations: serde's field/type
/// checking with the contract name attached to the failure.
pub fn decode<T: DeserializeOwned>(name: &'static str, raw: Value) -> Result<T, SchemaError> {
    if !raw.is_object() {
        return Err(SchemaError::NotAnObject { contract: name });
    }
    serde_json::from_value(raw).map_err(|source| SchemaError::Shape {
        contract: name,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Probe {
        value: String,
    }

    #[test]
    fn decode_accepts_matching_object() {
        let raw = serde_json::json!({"value": "ok"});
        let probe: Probe = decode("probe", raw).unwrap();
        assert_eq!(probe.value, "ok");
    }

    #[test]
    fn decode_rejects_missing_field() {
        let raw = serde_json::json!({});
        let err = decode::<Probe>("probe", raw).unwrap_err();
        assert!(err.to_string().contains("probe"));
    }

    #[test]
    fn decode_rejects_wrong_type() {
        let raw = serde_json::json!({"value": 7});
        assert!(decode::<Probe>("probe", raw).is_err());
    }

    #[test]
    fn decode_rejects_non_object() {
        let raw = serde_json::json!(["value"]);
        assert!(matches!(
            decode::<Probe>("probe", raw),
            Err(SchemaError::NotAnObject { .. })
        ));
    }
}
