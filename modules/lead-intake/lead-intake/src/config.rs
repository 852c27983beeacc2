use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Module configuration, loaded once at process start and injected into the
/// CRM client and the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LeadIntakeConfig {
    /// Phone number quoted to visitors whenever a submission cannot be recorded.
    #[serde(deserialize_with = "string_from_scalar")]
    pub business_phone: String,
    /// Provenance label used when the form does not send `source`.
    #[serde(deserialize_with = "string_from_scalar")]
    pub default_source: String,
    /// Page path used when the form does not send `sourcePage`.
    #[serde(deserialize_with = "string_from_scalar")]
    pub default_source_page: String,
    pub crm: CrmConfig,
}

impl Default for LeadIntakeConfig {
    fn default() -> Self {
        Self {
            business_phone: "(330) 555-0100".to_owned(),
            default_source: "Website Contact Form".to_owned(),
            default_source_page: "/contact".to_owned(),
            crm: CrmConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CrmConfig {
    pub api_base_url: String,
    /// Static bearer token. Lead creation fails (and falls back to the backup
    /// store) while this is unset.
    pub api_key: Option<ApiToken>,
    /// Request timeout for CRM calls in milliseconds.
    pub timeout_ms: u64,
}

impl Default for CrmConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.housecallpro.com".to_owned(),
            api_key: None,
            timeout_ms: 30_000,
        }
    }
}

/// Opaque wrapper around the CRM API token.
///
/// `Debug`, `Display` and `Serialize` all print `[REDACTED]`, so dumping the
/// effective configuration never leaks the credential. Use
/// [`expose`](Self::expose) only when building the `Authorization` header.
///
/// On [`Drop`] the backing buffer is zeroed via the [`zeroize`] crate.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ApiToken(String);

impl ApiToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Callers must not log, store, or otherwise persist the returned slice.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl Clone for ApiToken {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl Serialize for ApiToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str("[REDACTED]")
    }
}

impl<'de> Deserialize<'de> for ApiToken {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        string_from_scalar(deserializer).map(Self)
    }
}

/// Deserialize a string field from any scalar.
///
/// Environment layers type their values, so `APP__..=3305550100` arrives as an
/// integer. Numbers and booleans are taken in their display form; leading
/// zeros and float formatting are already lost at that point, so such values
/// must be quoted in the source.
///
/// # Errors
/// Fails for sequences, maps and other non-scalar input.
pub fn string_from_scalar<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    struct ScalarVisitor;

    impl Visitor<'_> for ScalarVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string or scalar value")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_owned())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i128<E: de::Error>(self, v: i128) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u128<E: de::Error>(self, v: u128) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_char<E: de::Error>(self, v: char) -> Result<String, E> {
            Ok(v.to_string())
        }
    }

    deserializer.deserialize_any(ScalarVisitor)
}
