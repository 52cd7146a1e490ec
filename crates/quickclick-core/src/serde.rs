// Module name shadows the `serde` crate; use `::serde` for the external crate.
use ::serde::Serializer;
use ::serde::ser::SerializeSeq;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, SecondsFormat, Utc};

/// Serialize `DateTime<Utc>` as RFC 3339 with 3-digit fractional seconds.
pub fn to_rfc3339_ms<S>(dt: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Serialize a list of byte payloads as standard base64 strings.
pub fn to_base64_list<S>(payloads: &[Vec<u8>], s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut seq = s.serialize_seq(Some(payloads.len()))?;
    for payload in payloads {
        seq.serialize_element(&STANDARD.encode(payload))?;
    }
    seq.end()
}
