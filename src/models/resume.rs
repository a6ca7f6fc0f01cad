//! Resume document snapshot consumed by the masthead.
//!
//! Only the parts of the document the masthead reads are modeled here. Every
//! field has a default so partially filled documents still deserialize.

use crate::models::theme::ThemeConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default date pattern when the document does not carry one.
pub const DEFAULT_DATE_FORMAT: &str = "MMMM DD, YYYY";

/// Root of a resume document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeDocument {
    /// Identity and contact block
    pub basics: Basics,
    /// Presentation settings (date format, theme)
    pub metadata: Metadata,
}

impl ResumeDocument {
    /// Parses a resume document from a JSON string.
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse resume document")
    }

    /// Loads a resume document from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read resume file: {}", path.display()))?;

        serde_json::from_str(&content)
            .context(format!("Failed to parse resume file: {}", path.display()))
    }
}

/// Document-level presentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    /// Date display settings
    pub date: DateMetadata,
    /// Theme colors
    pub theme: ThemeConfig,
}

/// Date display settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateMetadata {
    /// Display pattern, either dayjs-style (`MMMM DD, YYYY`) or strftime (`%B %d, %Y`)
    pub format: String,
}

impl Default for DateMetadata {
    fn default() -> Self {
        Self {
            format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

/// Identity block of a resume.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Basics {
    /// Full name
    pub name: String,
    /// One-line professional headline
    pub headline: String,
    /// Markdown source for the summary paragraph
    pub summary: String,
    /// Profile photo
    pub photo: Photo,
    /// Email address
    pub email: String,
    /// Phone number as typed by the user
    pub phone: String,
    /// Birth date (ISO 8601 date string)
    pub birthdate: String,
    /// Personal website
    pub website: String,
    /// Postal location
    pub location: Location,
    /// Social profiles in display order
    pub profiles: Vec<Profile>,
}

/// Profile photo and its presentation filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Photo {
    /// Image URL
    pub url: String,
    /// Whether the user chose to show the photo
    pub visible: bool,
    /// Size, shape and effects
    pub filters: PhotoFilters,
}

impl Default for Photo {
    fn default() -> Self {
        Self {
            url: String::new(),
            visible: true,
            filters: PhotoFilters::default(),
        }
    }
}

/// Photo presentation filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhotoFilters {
    /// Edge length in pixels
    pub size: u32,
    /// Crop shape
    pub shape: PhotoShape,
    /// Render in grayscale
    pub grayscale: bool,
    /// Draw a border around the photo
    pub border: bool,
}

impl Default for PhotoFilters {
    fn default() -> Self {
        Self {
            size: 128,
            shape: PhotoShape::default(),
            grayscale: false,
            border: false,
        }
    }
}

/// Crop shape of the profile photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhotoShape {
    /// Sharp corners
    #[default]
    Square,
    /// Rounded corners
    Rounded,
    /// Circular crop
    Circle,
}

/// A social network profile.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Unique identifier within the document
    pub id: String,
    /// Network name, e.g. "GitHub"
    pub network: String,
    /// Handle on the network (may be empty)
    pub username: String,
    /// Profile URL (may be empty or lack a scheme)
    pub url: String,
}

impl Profile {
    /// Creates a profile entry.
    pub fn new(
        id: impl Into<String>,
        network: impl Into<String>,
        username: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            network: network.into(),
            username: username.into(),
            url: url.into(),
        }
    }
}

/// Structured postal address.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Location {
    /// Street address
    pub address: String,
    /// City
    pub city: String,
    /// State, province or region
    pub region: String,
    /// Postal or ZIP code
    pub postal_code: String,
    /// Country
    pub country: String,
}
