//! Typed codec for the flat key/value settings store.
//!
//! The store itself is a `key TEXT PRIMARY KEY, value TEXT` table; every
//! value is persisted as a string. This module is the single source of truth
//! for which keys exist, what type each value has, and its default — both
//! the read path (decode to typed JSON) and the write path (validate +
//! encode) go through it, so no caller ever parses a raw string by key name.

use serde_json::Value;

use crate::error::CoreError;

/// The value type a setting key carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    /// `#rrggbb` hex color.
    Color,
    /// Stored as `"true"` / `"false"`.
    Boolean,
    /// Stored as a base-10 string.
    Integer,
}

/// Every setting key the back office knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    SiteName,
    ContactEmail,
    PrimaryColor,
    SecondaryColor,
    AccentColor,
    BackgroundColor,
    TextColor,
    MaintenanceMode,
    DonationsEnabled,
    DonationGoalCents,
    PixKey,
    FacebookUrl,
    InstagramUrl,
    YoutubeUrl,
}

impl SettingKey {
    /// All known keys, in display order.
    pub const ALL: &'static [SettingKey] = &[
        SettingKey::SiteName,
        SettingKey::ContactEmail,
        SettingKey::PrimaryColor,
        SettingKey::SecondaryColor,
        SettingKey::AccentColor,
        SettingKey::BackgroundColor,
        SettingKey::TextColor,
        SettingKey::MaintenanceMode,
        SettingKey::DonationsEnabled,
        SettingKey::DonationGoalCents,
        SettingKey::PixKey,
        SettingKey::FacebookUrl,
        SettingKey::InstagramUrl,
        SettingKey::YoutubeUrl,
    ];

    /// The `key` column value in the settings table.
    pub fn key_name(self) -> &'static str {
        match self {
            SettingKey::SiteName => "site_name",
            SettingKey::ContactEmail => "contact_email",
            SettingKey::PrimaryColor => "primary_color",
            SettingKey::SecondaryColor => "secondary_color",
            SettingKey::AccentColor => "accent_color",
            SettingKey::BackgroundColor => "background_color",
            SettingKey::TextColor => "text_color",
            SettingKey::MaintenanceMode => "maintenance_mode",
            SettingKey::DonationsEnabled => "donations_enabled",
            SettingKey::DonationGoalCents => "donation_goal_cents",
            SettingKey::PixKey => "pix_key",
            SettingKey::FacebookUrl => "facebook_url",
            SettingKey::InstagramUrl => "instagram_url",
            SettingKey::YoutubeUrl => "youtube_url",
        }
    }

    /// Parse a `key` column value back into a known key.
    pub fn from_key_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.key_name() == name)
    }

    pub fn kind(self) -> ValueKind {
        match self {
            SettingKey::SiteName
            | SettingKey::ContactEmail
            | SettingKey::PixKey
            | SettingKey::FacebookUrl
            | SettingKey::InstagramUrl
            | SettingKey::YoutubeUrl => ValueKind::Text,
            SettingKey::PrimaryColor
            | SettingKey::SecondaryColor
            | SettingKey::AccentColor
            | SettingKey::BackgroundColor
            | SettingKey::TextColor => ValueKind::Color,
            SettingKey::MaintenanceMode | SettingKey::DonationsEnabled => ValueKind::Boolean,
            SettingKey::DonationGoalCents => ValueKind::Integer,
        }
    }

    /// Default raw (stored-form) value used when the row is absent.
    pub fn default_raw(self) -> &'static str {
        match self {
            SettingKey::SiteName => "Paróquia",
            SettingKey::ContactEmail => "",
            SettingKey::PrimaryColor => "#8b0000",
            SettingKey::SecondaryColor => "#d4af37",
            SettingKey::AccentColor => "#4a6741",
            SettingKey::BackgroundColor => "#fdf6ec",
            SettingKey::TextColor => "#2b2b2b",
            SettingKey::MaintenanceMode => "false",
            SettingKey::DonationsEnabled => "true",
            SettingKey::DonationGoalCents => "0",
            SettingKey::PixKey => "",
            SettingKey::FacebookUrl => "",
            SettingKey::InstagramUrl => "",
            SettingKey::YoutubeUrl => "",
        }
    }

    /// Validate a raw stored-form value against this key's kind.
    pub fn validate_raw(self, raw: &str) -> Result<(), CoreError> {
        match self.kind() {
            ValueKind::Text => Ok(()),
            ValueKind::Color => {
                if is_valid_hex_color(raw) {
                    Ok(())
                } else {
                    Err(CoreError::Validation(format!(
                        "Setting '{}' must be a #rrggbb hex color, got '{raw}'",
                        self.key_name()
                    )))
                }
            }
            ValueKind::Boolean => match raw {
                "true" | "false" => Ok(()),
                _ => Err(CoreError::Validation(format!(
                    "Setting '{}' must be 'true' or 'false', got '{raw}'",
                    self.key_name()
                ))),
            },
            ValueKind::Integer => raw.parse::<i64>().map(|_| ()).map_err(|_| {
                CoreError::Validation(format!(
                    "Setting '{}' must be an integer, got '{raw}'",
                    self.key_name()
                ))
            }),
        }
    }

    /// Decode a raw stored-form value into typed JSON.
    ///
    /// A stored value that no longer parses (edited out-of-band) falls back
    /// to the key's default rather than failing the whole settings read.
    pub fn decode(self, raw: &str) -> Value {
        match self.kind() {
            ValueKind::Text | ValueKind::Color => Value::String(raw.to_string()),
            ValueKind::Boolean => match raw {
                "true" => Value::Bool(true),
                "false" => Value::Bool(false),
                _ => self.decode(self.default_raw()),
            },
            ValueKind::Integer => match raw.parse::<i64>() {
                Ok(n) => Value::Number(n.into()),
                Err(_) => self.decode(self.default_raw()),
            },
        }
    }

    /// Encode a typed JSON value into stored form, validating it.
    pub fn encode(self, value: &Value) -> Result<String, CoreError> {
        let raw = match (self.kind(), value) {
            (ValueKind::Text | ValueKind::Color, Value::String(s)) => s.clone(),
            (ValueKind::Boolean, Value::Bool(b)) => b.to_string(),
            (ValueKind::Integer, Value::Number(n)) if n.is_i64() => n.to_string(),
            // Stringly-typed clients may send everything as strings.
            (ValueKind::Boolean | ValueKind::Integer, Value::String(s)) => s.clone(),
            _ => {
                return Err(CoreError::Validation(format!(
                    "Setting '{}' has the wrong JSON type",
                    self.key_name()
                )))
            }
        };
        self.validate_raw(&raw)?;
        Ok(raw)
    }
}

/// Check a `#rrggbb` hex color literal.
pub fn is_valid_hex_color(raw: &str) -> bool {
    let Some(hex) = raw.strip_prefix('#') else {
        return false;
    };
    hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // -- key round trip -----------------------------------------------------

    #[test]
    fn every_key_name_round_trips() {
        for key in SettingKey::ALL {
            assert_eq!(SettingKey::from_key_name(key.key_name()), Some(*key));
        }
    }

    #[test]
    fn unknown_key_name_is_none() {
        assert_eq!(SettingKey::from_key_name("nonsense"), None);
    }

    #[test]
    fn every_default_validates() {
        for key in SettingKey::ALL {
            assert!(key.validate_raw(key.default_raw()).is_ok(), "{key:?}");
        }
    }

    // -- colors -------------------------------------------------------------

    #[test]
    fn hex_color_accepts_six_digits() {
        assert!(is_valid_hex_color("#8b0000"));
        assert!(is_valid_hex_color("#ABCDEF"));
    }

    #[test]
    fn hex_color_rejects_bad_shapes() {
        assert!(!is_valid_hex_color("8b0000"));
        assert!(!is_valid_hex_color("#8b00"));
        assert!(!is_valid_hex_color("#8b000g"));
        assert!(!is_valid_hex_color(""));
    }

    #[test]
    fn color_key_rejects_non_color() {
        assert!(SettingKey::PrimaryColor.validate_raw("red").is_err());
    }

    // -- booleans and integers ----------------------------------------------

    #[test]
    fn boolean_decode_and_encode() {
        assert_eq!(SettingKey::MaintenanceMode.decode("true"), json!(true));
        assert_eq!(
            SettingKey::MaintenanceMode.encode(&json!(false)).unwrap(),
            "false"
        );
    }

    #[test]
    fn boolean_accepts_stringly_form() {
        assert_eq!(
            SettingKey::DonationsEnabled.encode(&json!("true")).unwrap(),
            "true"
        );
    }

    #[test]
    fn boolean_rejects_garbage() {
        assert!(SettingKey::MaintenanceMode.encode(&json!("yes")).is_err());
        assert!(SettingKey::MaintenanceMode.encode(&json!(1)).is_err());
    }

    #[test]
    fn integer_decode_and_encode() {
        assert_eq!(SettingKey::DonationGoalCents.decode("250000"), json!(250000));
        assert_eq!(
            SettingKey::DonationGoalCents.encode(&json!(1000)).unwrap(),
            "1000"
        );
    }

    #[test]
    fn corrupt_stored_value_decodes_to_default() {
        assert_eq!(SettingKey::MaintenanceMode.decode("maybe"), json!(false));
        assert_eq!(SettingKey::DonationGoalCents.decode("abc"), json!(0));
    }

    #[test]
    fn text_key_rejects_non_string_json() {
        assert!(SettingKey::SiteName.encode(&json!(42)).is_err());
    }
}
