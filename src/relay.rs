//! Relay global identifier helpers
//!
//! A global id is the base64 encoding of `"{type_name}:{local_id}"`, giving
//! every entity an opaque identifier usable for uniform `node(id:)` lookup.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GlobalIdError {
    #[error("global id is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("global id is not valid utf-8")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("global id is missing the type separator")]
    MissingSeparator,
}

/// Encode a type name and local id into an opaque global id
pub fn to_global_id(type_name: &str, local_id: &str) -> String {
    STANDARD.encode(format!("{}:{}", type_name, local_id))
}

/// Decode a global id into `(type_name, local_id)`
pub fn from_global_id(global_id: &str) -> Result<(String, String), GlobalIdError> {
    let decoded = String::from_utf8(STANDARD.decode(global_id)?)?;
    let (type_name, local_id) = decoded
        .split_once(':')
        .ok_or(GlobalIdError::MissingSeparator)?;
    Ok((type_name.to_string(), local_id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_type_and_local_id() {
        let id = to_global_id("Count", "first");
        let (type_name, local_id) = from_global_id(&id).unwrap();
        assert_eq!(type_name, "Count");
        assert_eq!(local_id, "first");
    }

    #[test]
    fn local_id_may_contain_separator() {
        let id = to_global_id("Count", "a:b");
        let (type_name, local_id) = from_global_id(&id).unwrap();
        assert_eq!(type_name, "Count");
        assert_eq!(local_id, "a:b");
    }

    #[test]
    fn rejects_invalid_base64() {
        assert!(matches!(
            from_global_id("not base64!!!"),
            Err(GlobalIdError::Base64(_))
        ));
    }

    #[test]
    fn rejects_missing_separator() {
        let id = STANDARD.encode("CountWithoutSeparator");
        assert!(matches!(
            from_global_id(&id),
            Err(GlobalIdError::MissingSeparator)
        ));
    }
}
