//! Contrast classification of the accent color and the foreground colors
//! derived from it.

use crate::models::{ColorError, RgbColor, ThemeConfig};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Luminance above which a background counts as light (0-255 scale).
pub const LUMINANCE_THRESHOLD: f32 = 186.0;

/// Binary classification of a background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContrastClass {
    /// Dark background, needs light foreground content.
    ///
    /// Also the fallback when the accent color cannot be decoded.
    #[default]
    Dark,
    /// Light background, needs dark foreground content.
    Light,
}

impl ContrastClass {
    /// Lowercase name used in CLI and JSON output.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl fmt::Display for ContrastClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies an already-decoded color.
pub fn classify(color: RgbColor) -> ContrastClass {
    if color.luminance() > LUMINANCE_THRESHOLD {
        ContrastClass::Light
    } else {
        ContrastClass::Dark
    }
}

/// Classifies `primary`, surfacing decoding failures.
pub fn try_resolve_contrast(primary: &str) -> Result<ContrastClass, ColorError> {
    RgbColor::from_hex(primary).map(classify)
}

/// Classifies `primary`, falling back to [`ContrastClass::Dark`] when it cannot be decoded.
///
/// # Examples
///
/// ```
/// use masthead::render::contrast::{resolve_contrast, ContrastClass};
///
/// assert_eq!(resolve_contrast("#1a1a1a"), ContrastClass::Dark);
/// assert_eq!(resolve_contrast("#f5f5f5"), ContrastClass::Light);
/// assert_eq!(resolve_contrast("not-a-color"), ContrastClass::Dark);
/// ```
pub fn resolve_contrast(primary: &str) -> ContrastClass {
    match try_resolve_contrast(primary) {
        Ok(class) => class,
        Err(err) => {
            warn!("{err}; using {} contrast", ContrastClass::default());
            ContrastClass::default()
        }
    }
}

/// Icon color: `theme.text` on dark contrast, `theme.background` otherwise.
pub fn icon_color(theme: &ThemeConfig, contrast: ContrastClass) -> String {
    match contrast {
        ContrastClass::Dark => theme.text.clone(),
        ContrastClass::Light => theme.background.clone(),
    }
}

/// Link/emphasis text color.
///
/// Dark contrast keeps `theme.text` as is. Light contrast substitutes the
/// channel-wise complement of `theme.text`; an undecodable text color is
/// returned unchanged.
pub fn inverted_text_color(theme: &ThemeConfig, contrast: ContrastClass) -> String {
    match contrast {
        ContrastClass::Dark => theme.text.clone(),
        ContrastClass::Light => match theme.text_rgb() {
            Ok(text) => text.invert().to_hex(),
            Err(err) => {
                warn!("{err}; leaving text color uninverted");
                theme.text.clone()
            }
        },
    }
}

/// Colors resolved once per render and shared by every masthead row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContrastPalette {
    /// Contrast class of the accent color
    pub contrast: ContrastClass,
    /// Color for row icons
    pub icon_color: String,
    /// Color for links and emphasized text
    pub text_color: String,
}

impl ContrastPalette {
    /// Resolves contrast and both derived colors for `theme`.
    pub fn resolve(theme: &ThemeConfig) -> Self {
        let contrast = resolve_contrast(&theme.primary);
        Self {
            contrast,
            icon_color: icon_color(theme, contrast),
            text_color: inverted_text_color(theme, contrast),
        }
    }
}
