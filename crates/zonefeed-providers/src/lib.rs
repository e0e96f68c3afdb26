//! zonefeed-providers — provider payload adapters for zonefeed.
//!
//! Each adapter validates a provider's raw JSON payload against its expected
//! shape and lowers every zone into a provider-neutral
//! [`zonefeed_core::RawZone`] for the normalization core.
//!
//! A payload that does not match its shape is a fatal
//! [`NormalizeError::SchemaValidation`]. A single zone's supplementary detail
//! that is missing or malformed only degrades that zone and is logged.

pub mod europark;
pub mod parkimine;
pub mod snabb;

use lazy_static::lazy_static;
use regex::Regex;
use serde::de::DeserializeOwned;
use zonefeed_core::{NormalizeError, RawZone, Result};

/// Trait implemented by each provider adapter.
pub trait ProviderAdapter {
    /// Provider name used in diagnostics and as the CLI value.
    const NAME: &'static str;

    /// Expected shape of the whole payload.
    type Payload: DeserializeOwned;

    /// Lower a validated payload into raw zones, in payload order.
    fn into_zones(payload: Self::Payload, provider_id: u32) -> Result<Vec<RawZone>>;
}

/// Validate `json` as `A`'s payload and lower it into raw zones.
pub fn load_zones<A: ProviderAdapter>(json: &str, provider_id: u32) -> Result<Vec<RawZone>> {
    let payload: A::Payload =
        serde_json::from_str(json).map_err(|source| NormalizeError::SchemaValidation {
            provider: A::NAME,
            source,
        })?;
    let zones = A::into_zones(payload, provider_id)?;
    tracing::debug!(provider = A::NAME, zones = zones.len(), "payload lowered");
    Ok(zones)
}

/// The known providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    Europark,
    Parkimine,
    Snabb,
}

impl Provider {
    pub const ALL: [Provider; 3] = [Provider::Europark, Provider::Parkimine, Provider::Snabb];

    pub fn name(self) -> &'static str {
        match self {
            Provider::Europark => europark::Europark::NAME,
            Provider::Parkimine => parkimine::Parkimine::NAME,
            Provider::Snabb => snabb::Snabb::NAME,
        }
    }

    /// Dispatch to the matching adapter's [`load_zones`].
    pub fn load_zones(self, json: &str, provider_id: u32) -> Result<Vec<RawZone>> {
        match self {
            Provider::Europark => load_zones::<europark::Europark>(json, provider_id),
            Provider::Parkimine => load_zones::<parkimine::Parkimine>(json, provider_id),
            Provider::Snabb => load_zones::<snabb::Snabb>(json, provider_id),
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

lazy_static! {
    static ref NON_WORD: Regex = Regex::new(r"\W").expect("NON_WORD regex to compile");
}

/// Strip non-word characters from a code token.
///
/// Every occurrence is removed, not only the first, and `\W` is Unicode-aware:
/// `"(K2)"` becomes `"K2"` and letters such as `ü` are kept.
pub(crate) fn sanitize_code(token: &str) -> String {
    NON_WORD.replace_all(token, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("A1", "A1")]
    #[case("(K2)", "K2")]
    #[case("Zone-5.", "Zone5")]
    #[case("Südalinn", "Südalinn")]
    #[case("Õ-1«", "Õ1")]
    #[case("--", "")]
    fn code_sanitizing(#[case] token: &str, #[case] expected: &str) {
        assert_eq!(sanitize_code(token), expected);
    }

    #[test]
    fn provider_names() {
        let names: Vec<&str> = Provider::ALL.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["europark", "parkimine", "snabb"]);
        assert_eq!(Provider::Snabb.to_string(), "snabb");
    }

    #[rstest]
    #[case(Provider::Europark, r#"{"paringzones": 3}"#)]
    #[case(Provider::Parkimine, r#"{"items": [{"id": "x"}]}"#)]
    #[case(Provider::Snabb, "not json")]
    fn malformed_payload_is_schema_error(#[case] provider: Provider, #[case] json: &str) {
        let err = provider.load_zones(json, 1).unwrap_err();
        match err {
            NormalizeError::SchemaValidation { provider: name, .. } => {
                assert_eq!(name, provider.name())
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
