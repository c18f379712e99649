//! Theme computation.
//!
//! The public site styles itself from CSS custom properties. This module
//! turns the persisted color settings into that variable map as a pure
//! function, so the mapping is testable without a database or any markup.

use std::collections::BTreeMap;

use crate::settings::SettingKey;

/// The color settings that participate in the theme, with their CSS
/// custom-property names.
const THEME_VARIABLES: &[(SettingKey, &str)] = &[
    (SettingKey::PrimaryColor, "--color-primary"),
    (SettingKey::SecondaryColor, "--color-secondary"),
    (SettingKey::AccentColor, "--color-accent"),
    (SettingKey::BackgroundColor, "--color-background"),
    (SettingKey::TextColor, "--color-text"),
];

/// Compute the CSS custom-property map from raw stored settings.
///
/// `stored` maps setting key names to raw stored values; keys that are
/// missing (or hold an invalid color) fall back to the codec default, so the
/// site always renders with a complete palette.
pub fn compute_css_variables(stored: &BTreeMap<String, String>) -> BTreeMap<String, String> {
    let mut vars = BTreeMap::new();

    for &(key, css_name) in THEME_VARIABLES {
        let value = stored
            .get(key.key_name())
            .filter(|raw| key.validate_raw(raw).is_ok())
            .map(String::as_str)
            .unwrap_or_else(|| key.default_raw());
        vars.insert(css_name.to_string(), value.to_string());
    }

    vars
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
