//! Input validation for place data and storage keys.

use crate::error::{PlacebookError, Result, ValidationError};
use chrono::{DateTime, SubsecRound, Utc};

/// Maximum allowed length for a blob key.
pub const MAX_KEY_LENGTH: usize = 100;

/// Characters forbidden in blob keys to prevent path traversal.
const FORBIDDEN_KEY_CHARS: &[char] = &['/', '\\', '\0', ':'];

/// Validates an already-trimmed place name.
pub fn validate_name(name: &str) -> std::result::Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::NameRequired);
    }
    Ok(())
}

/// Parses a stored `createdAt` value into a UTC timestamp with millisecond precision.
pub fn parse_created_at(raw: &str) -> std::result::Result<DateTime<Utc>, ValidationError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc).trunc_subsecs(3))
        .map_err(|_| ValidationError::InvalidTimestamp(raw.to_string()))
}

/// Validates a blob key so it can be used as a file name.
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(PlacebookError::Storage("Key cannot be empty".to_string()));
    }
    if key.len() > MAX_KEY_LENGTH {
        return Err(PlacebookError::Storage(format!(
            "Key exceeds maximum length of {} characters",
            MAX_KEY_LENGTH
        )));
    }
    if key.contains("..") {
        return Err(PlacebookError::Storage(
            "Key cannot contain '..' (path traversal)".to_string(),
        ));
    }
    for c in FORBIDDEN_KEY_CHARS {
        if key.contains(*c) {
            return Err(PlacebookError::Storage(format!(
                "Key cannot contain '{}'",
                c.escape_default()
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name_empty() {
        assert_eq!(validate_name(""), Err(ValidationError::NameRequired));
    }

    #[test]
    fn test_validate_name_valid() {
        assert!(validate_name("Kyoto").is_ok());
    }

    #[test]
    fn test_parse_created_at_normalizes_offset() {
        let ts = parse_created_at("2024-03-01T10:00:00+02:00").unwrap();
        assert_eq!(ts.to_rfc3339(), "2024-03-01T08:00:00+00:00");
    }

    #[test]
    fn test_parse_created_at_truncates_to_millis() {
        let ts = parse_created_at("2024-03-01T10:00:00.123456Z").unwrap();
        assert_eq!(ts.timestamp_subsec_micros(), 123_000);
    }

    #[test]
    fn test_parse_created_at_rejects_garbage() {
        assert!(matches!(
            parse_created_at("yesterday"),
            Err(ValidationError::InvalidTimestamp(_))
        ));
    }

    #[test]
    fn test_validate_key_path_traversal() {
        assert!(validate_key("../../../etc/passwd").is_err());
        assert!(validate_key("travelPlaces").is_ok());
    }

    #[test]
    fn test_validate_key_forbidden_chars() {
        assert!(validate_key("travel/places").is_err());
        assert!(validate_key("travel\\places").is_err());
        assert!(validate_key("").is_err());
    }
}
