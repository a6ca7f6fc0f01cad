//! Theme colors supplied with every render pass.

use crate::models::rgb::{ColorError, RgbColor};
use serde::{Deserialize, Serialize};

/// Theme colors as stored in the resume document.
///
/// Colors stay as raw strings so that a malformed value can still be carried
/// through a render; decoding happens lazily via [`ThemeConfig::primary_rgb`]
/// and friends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Accent color chosen by the user
    pub primary: String,
    /// Body text color
    pub text: String,
    /// Page background color
    pub background: String,
}

impl ThemeConfig {
    /// Creates a theme from three color strings.
    pub fn new(
        primary: impl Into<String>,
        text: impl Into<String>,
        background: impl Into<String>,
    ) -> Self {
        Self {
            primary: primary.into(),
            text: text.into(),
            background: background.into(),
        }
    }

    /// Decodes the accent color.
    pub fn primary_rgb(&self) -> Result<RgbColor, ColorError> {
        RgbColor::from_hex(&self.primary)
    }

    /// Decodes the text color.
    pub fn text_rgb(&self) -> Result<RgbColor, ColorError> {
        RgbColor::from_hex(&self.text)
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::new("#F44336", "#000000", "#FFFFFF")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_is_decodable() {
        let theme = ThemeConfig::default();
        assert!(theme.primary_rgb().is_ok());
        assert!(theme.text_rgb().is_ok());
        assert!(RgbColor::from_hex(&theme.background).is_ok());
    }

    #[test]
    fn test_malformed_primary_survives_deserialization() {
        let theme: ThemeConfig =
            serde_json::from_str(r##"{"primary":"tomato","text":"#222"}"##).unwrap();
        assert_eq!(theme.primary, "tomato");
        assert!(theme.primary_rgb().is_err());
        assert_eq!(theme.text_rgb().unwrap(), RgbColor::new(0x22, 0x22, 0x22));
        assert_eq!(theme.background, "#FFFFFF");
    }
}
