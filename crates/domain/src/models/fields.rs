//! Serde helpers shared by the request payloads.

use serde::{Deserialize, Deserializer};

/// Marks a field as present, so `null` deserializes to `Some(None)` while an
/// absent key stays `None` through `#[serde(default)]`.
pub(crate) fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Trims surrounding whitespace before the value reaches the validators.
pub(crate) fn trimmed<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.map(|v| v.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Payload {
        #[serde(default, deserialize_with = "present")]
        note: Option<Option<String>>,
        #[serde(default, deserialize_with = "trimmed")]
        email: Option<String>,
    }

    #[test]
    fn test_present_distinguishes_null_from_absent() {
        let absent: Payload = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.note, None);

        let cleared: Payload = serde_json::from_str(r#"{"note":null}"#).unwrap();
        assert_eq!(cleared.note, Some(None));

        let set: Payload = serde_json::from_str(r#"{"note":"oi"}"#).unwrap();
        assert_eq!(set.note, Some(Some("oi".to_string())));
    }

    #[test]
    fn test_trimmed_strips_whitespace() {
        let payload: Payload =
            serde_json::from_str(r#"{"email":"  ana@psiclin.com \n"}"#).unwrap();
        assert_eq!(payload.email.as_deref(), Some("ana@psiclin.com"));

        let missing: Payload = serde_json::from_str(r#"{"email":null}"#).unwrap();
        assert_eq!(missing.email, None);
    }
}
