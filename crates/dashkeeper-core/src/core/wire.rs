// crates/dashkeeper-core/src/core/wire.rs
// ============================================================================
// Module: Dashkeeper Wire Helpers
// Description: Field-level serde adapters for byte and duration fields.
// Purpose: Keep resource wire forms text-safe and human-editable.
// Dependencies: base64, humantime, serde, time
// ============================================================================

//! ## Overview
//! Dashboard resources round-trip through text transports, so byte fields
//! serialize as standard-alphabet base64 strings and duration fields as
//! humantime expressions ("30s", "10m", "24h"). Negative durations carry a
//! leading "-"; a non-positive cache TTL disables time expiry.

// ============================================================================
// SECTION: Byte Fields
// ============================================================================

/// Serde adapter for required byte fields encoded as base64 strings.
pub(crate) mod base64_bytes {
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use serde::Deserialize;
    use serde::Deserializer;
    use serde::Serializer;
    use serde::de::Error;

    /// Serializes bytes as a standard-alphabet base64 string.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures.
    pub(crate) fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    /// Deserializes a standard-alphabet base64 string into bytes.
    ///
    /// # Errors
    ///
    /// Returns a deserialization error when the value is not valid base64.
    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded = String::deserialize(deserializer)?;
        STANDARD.decode(encoded.as_bytes()).map_err(D::Error::custom)
    }
}

/// Serde adapter for optional byte fields encoded as base64 strings.
pub(crate) mod opt_base64_bytes {
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use serde::Deserialize;
    use serde::Deserializer;
    use serde::Serializer;
    use serde::de::Error;

    /// Serializes optional bytes as a base64 string or an explicit null.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures.
    pub(crate) fn serialize<S>(bytes: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match bytes {
            Some(value) => serializer.serialize_some(&STANDARD.encode(value)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserializes an optional base64 string into optional bytes.
    ///
    /// # Errors
    ///
    /// Returns a deserialization error when the value is not valid base64.
    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(encoded) => STANDARD
                .decode(encoded.as_bytes())
                .map(Some)
                .map_err(D::Error::custom),
            None => Ok(None),
        }
    }
}

// ============================================================================
// SECTION: Duration Fields
// ============================================================================

/// Serde adapter for signed durations written as humantime expressions.
pub(crate) mod signed_duration {
    use serde::Deserialize;
    use serde::Deserializer;
    use serde::Serializer;
    use serde::de::Error;
    use time::Duration;

    /// Serializes a signed duration as a humantime string, "-" prefixed when
    /// negative.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures.
    pub(crate) fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let magnitude = std::time::Duration::new(
            duration.whole_seconds().unsigned_abs(),
            duration.subsec_nanoseconds().unsigned_abs(),
        );
        let rendered = humantime::format_duration(magnitude).to_string();
        if duration.is_negative() {
            serializer.serialize_str(&format!("-{rendered}"))
        } else {
            serializer.serialize_str(&rendered)
        }
    }

    /// Deserializes a humantime string, honoring an optional leading "-".
    ///
    /// # Errors
    ///
    /// Returns a deserialization error when the value is not a valid
    /// humantime expression or exceeds the representable range.
    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rendered = String::deserialize(deserializer)?;
        let (negative, body) = match rendered.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, rendered.as_str()),
        };
        let parsed = humantime::parse_duration(body).map_err(D::Error::custom)?;
        let duration = Duration::try_from(parsed).map_err(D::Error::custom)?;
        Ok(if negative { -duration } else { duration })
    }
}
