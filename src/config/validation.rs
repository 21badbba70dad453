//! Setting value validation
//!
//! Candidates arrive as raw text (the way the host persists them) and are
//! parsed against the setting's kind before constraints are checked.

use std::num::IntErrorKind;
use thiserror::Error;

use super::schema::{SettingKey, SettingKind, SettingValue};
use crate::common::color::HexColor;
use crate::types::{ChatMessageType, Choice, PersonalityType, TimerImage};

/// Why a candidate value was rejected. Never fatal; surfaced to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{key} must be between {min} and {max}, got {value}")]
    Range {
        key: &'static str,
        value: i64,
        min: i32,
        max: i32,
    },

    #[error("'{value}' is not a valid {key} (expected one of: {})", .expected.join(", "))]
    InvalidVariant {
        key: &'static str,
        value: String,
        expected: Vec<&'static str>,
    },

    #[error("{key} expects a {expected} value, got '{value}'")]
    Malformed {
        key: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("{key} expects a {expected} value, got a {actual}")]
    KindMismatch {
        key: &'static str,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Unknown setting key '{0}'")]
    UnknownKey(String),
}

/// Validate a raw candidate for the setting named `key`.
/// Returns the parsed value on success.
pub fn validate(key: &str, candidate: &str) -> Result<SettingValue, ValidationError> {
    let key = SettingKey::from_key(key).ok_or_else(|| ValidationError::UnknownKey(key.to_string()))?;
    parse_candidate(key, candidate)
}

/// Parse and check a raw candidate for a known setting
pub fn parse_candidate(key: SettingKey, candidate: &str) -> Result<SettingValue, ValidationError> {
    let kind = key.setting().kind;
    let trimmed = candidate.trim();
    let malformed = || ValidationError::Malformed {
        key: key.as_str(),
        value: candidate.to_string(),
        expected: kind.type_name(),
    };

    let value = match kind {
        SettingKind::Bool => match trimmed.to_ascii_lowercase().as_str() {
            "true" => SettingValue::Bool(true),
            "false" => SettingValue::Bool(false),
            _ => return Err(malformed()),
        },
        SettingKind::Int { min, max, .. } => {
            // Overflowing digits are still a number, just far out of range
            let parsed: i64 = match trimmed.parse::<i64>() {
                Ok(v) => v,
                Err(e) => match e.kind() {
                    IntErrorKind::PosOverflow => i64::MAX,
                    IntErrorKind::NegOverflow => i64::MIN,
                    _ => return Err(malformed()),
                },
            };
            check_range(key, parsed, min, max)?;
            // In range of two i32 bounds, so the narrowing cannot truncate
            SettingValue::Int(parsed as i32)
        }
        SettingKind::Color => {
            SettingValue::Color(HexColor::parse(trimmed).ok_or_else(malformed)?)
        }
        SettingKind::ChatMessageType => {
            SettingValue::ChatMessageType(lookup_variant::<ChatMessageType>(key, candidate)?)
        }
        SettingKind::TimerImage => {
            SettingValue::TimerImage(lookup_variant::<TimerImage>(key, candidate)?)
        }
        SettingKind::PersonalityType => {
            SettingValue::PersonalityType(lookup_variant::<PersonalityType>(key, candidate)?)
        }
    };

    Ok(value)
}

/// Check an already-typed value against the setting's kind and constraints
pub fn validate_value(key: SettingKey, value: &SettingValue) -> Result<(), ValidationError> {
    let kind = key.setting().kind;
    match (kind, value) {
        (SettingKind::Int { min, max, .. }, SettingValue::Int(v)) => {
            check_range(key, i64::from(*v), min, max)
        }
        (SettingKind::Bool, SettingValue::Bool(_))
        | (SettingKind::Color, SettingValue::Color(_))
        | (SettingKind::ChatMessageType, SettingValue::ChatMessageType(_))
        | (SettingKind::TimerImage, SettingValue::TimerImage(_))
        | (SettingKind::PersonalityType, SettingValue::PersonalityType(_)) => Ok(()),
        _ => Err(ValidationError::KindMismatch {
            key: key.as_str(),
            expected: kind.type_name(),
            actual: value.type_name(),
        }),
    }
}

fn check_range(key: SettingKey, value: i64, min: i32, max: i32) -> Result<(), ValidationError> {
    if value < i64::from(min) || value > i64::from(max) {
        return Err(ValidationError::Range {
            key: key.as_str(),
            value,
            min,
            max,
        });
    }
    Ok(())
}

fn lookup_variant<T: Choice>(key: SettingKey, candidate: &str) -> Result<T, ValidationError> {
    T::lookup(candidate).ok_or_else(|| ValidationError::InvalidVariant {
        key: key.as_str(),
        value: candidate.to_string(),
        expected: T::persisted_names(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::SETTINGS;
    use crate::constants::keys;

    #[test]
    fn test_interval_bounds() {
        assert!(matches!(
            validate(keys::INTERVAL, "0"),
            Err(ValidationError::Range { value: 0, min: 1, max: 90, .. })
        ));
        assert_eq!(validate(keys::INTERVAL, "1"), Ok(SettingValue::Int(1)));
        assert_eq!(validate(keys::INTERVAL, "90"), Ok(SettingValue::Int(90)));
        assert!(matches!(
            validate(keys::INTERVAL, "91"),
            Err(ValidationError::Range { value: 91, .. })
        ));
        assert!(matches!(
            validate(keys::INTERVAL, "-5"),
            Err(ValidationError::Range { .. })
        ));
    }

    #[test]
    fn test_interval_huge_value_is_range_error() {
        assert!(matches!(
            validate(keys::INTERVAL, "99999999999"),
            Err(ValidationError::Range { value: 99999999999, .. })
        ));
    }

    #[test]
    fn test_interval_beyond_i64_is_range_error() {
        assert!(matches!(
            validate(keys::INTERVAL, "99999999999999999999"),
            Err(ValidationError::Range { value: i64::MAX, .. })
        ));
        assert!(matches!(
            validate(keys::INTERVAL, "-99999999999999999999"),
            Err(ValidationError::Range { value: i64::MIN, .. })
        ));
        assert!(matches!(
            validate(keys::INTERVAL, "+99999999999999999999"),
            Err(ValidationError::Range { .. })
        ));
    }

    #[test]
    fn test_interval_malformed() {
        assert!(matches!(
            validate(keys::INTERVAL, "twenty"),
            Err(ValidationError::Malformed { expected: "integer", .. })
        ));
        assert!(matches!(
            validate(keys::INTERVAL, ""),
            Err(ValidationError::Malformed { .. })
        ));
    }

    #[test]
    fn test_chat_message_type_invalid_variant() {
        let err = validate(keys::CHAT_MESSAGE_TYPE, "CARRIER_PIGEON").unwrap_err();
        match &err {
            ValidationError::InvalidVariant { key, value, expected } => {
                assert_eq!(*key, keys::CHAT_MESSAGE_TYPE);
                assert_eq!(value, "CARRIER_PIGEON");
                assert!(expected.contains(&"GAMEMESSAGE"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("GAMEMESSAGE"));
    }

    #[test]
    fn test_enum_settings_accept_names_and_labels() {
        assert_eq!(
            validate(keys::CHAT_MESSAGE_TYPE, "GAMEMESSAGE"),
            Ok(SettingValue::ChatMessageType(ChatMessageType::GameMessage))
        );
        assert_eq!(
            validate(keys::OVERLAY_TIMER_IMAGE, "Cup of Tea"),
            Ok(SettingValue::TimerImage(TimerImage::CupOfTea))
        );
        assert_eq!(
            validate(keys::PERSONALITY_TYPE, "nerd"),
            Ok(SettingValue::PersonalityType(PersonalityType::Nerd))
        );
        assert!(matches!(
            validate(keys::PERSONALITY_TYPE, "GRUMPY"),
            Err(ValidationError::InvalidVariant { .. })
        ));
    }

    #[test]
    fn test_bool_and_color() {
        assert_eq!(
            validate(keys::WELCOME_MESSAGE_ENABLED, "FALSE"),
            Ok(SettingValue::Bool(false))
        );
        assert!(matches!(
            validate(keys::CHAT_MESSAGE_ENABLED, "yes"),
            Err(ValidationError::Malformed { expected: "boolean", .. })
        ));
        assert_eq!(
            validate(keys::OVERLAY_TIMER_TEXT_COLOR, "#80FF0000"),
            Ok(SettingValue::Color(HexColor::from_argb32(0x80FF0000)))
        );
        assert!(matches!(
            validate(keys::OVERLAY_TIMER_TEXT_COLOR, "white"),
            Err(ValidationError::Malformed { expected: "color", .. })
        ));
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(
            validate("hydrateReminderVolume", "3"),
            Err(ValidationError::UnknownKey("hydrateReminderVolume".to_string()))
        );
    }

    #[test]
    fn test_every_default_validates() {
        for setting in &SETTINGS {
            assert_eq!(validate_value(setting.key, &setting.default), Ok(()));
            assert_eq!(
                parse_candidate(setting.key, &setting.default.to_persisted()),
                Ok(setting.default)
            );
        }
    }

    #[test]
    fn test_validate_value_checks_kind_and_range() {
        assert!(matches!(
            validate_value(SettingKey::Interval, &SettingValue::Int(120)),
            Err(ValidationError::Range { value: 120, .. })
        ));
        assert_eq!(
            validate_value(SettingKey::Interval, &SettingValue::Bool(true)),
            Err(ValidationError::KindMismatch {
                key: keys::INTERVAL,
                expected: "integer",
                actual: "boolean",
            })
        );
    }
}
