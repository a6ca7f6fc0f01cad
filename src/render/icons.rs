//! Glyphs used by masthead rows.

use serde::{Serialize, Serializer};
use std::fmt;

/// Glyph for a social network profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NetworkIcon {
    /// Behance
    Behance,
    /// Dribbble
    Dribbble,
    /// Facebook
    Facebook,
    /// GitHub
    GitHub,
    /// GitLab
    GitLab,
    /// Instagram
    Instagram,
    /// LinkedIn
    LinkedIn,
    /// Mastodon
    Mastodon,
    /// Medium
    Medium,
    /// Skype
    Skype,
    /// SoundCloud
    SoundCloud,
    /// Stack Overflow
    StackOverflow,
    /// Telegram
    Telegram,
    /// Twitter / X
    Twitter,
    /// YouTube
    YouTube,
    /// Any network not in the registry
    Generic,
}

impl NetworkIcon {
    /// Every known network, excluding the fallback.
    pub const KNOWN: [Self; 15] = [
        Self::Behance,
        Self::Dribbble,
        Self::Facebook,
        Self::GitHub,
        Self::GitLab,
        Self::Instagram,
        Self::LinkedIn,
        Self::Mastodon,
        Self::Medium,
        Self::Skype,
        Self::SoundCloud,
        Self::StackOverflow,
        Self::Telegram,
        Self::Twitter,
        Self::YouTube,
    ];

    /// Stable glyph key understood by the icon registry.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Behance => "behance",
            Self::Dribbble => "dribbble",
            Self::Facebook => "facebook",
            Self::GitHub => "github",
            Self::GitLab => "gitlab",
            Self::Instagram => "instagram",
            Self::LinkedIn => "linkedin",
            Self::Mastodon => "mastodon",
            Self::Medium => "medium",
            Self::Skype => "skype",
            Self::SoundCloud => "soundcloud",
            Self::StackOverflow => "stackoverflow",
            Self::Telegram => "telegram",
            Self::Twitter => "twitter",
            Self::YouTube => "youtube",
            Self::Generic => "link",
        }
    }
}

/// Resolves the glyph for a network name.
///
/// Matching ignores case and surrounding whitespace. Unknown names get
/// [`NetworkIcon::Generic`].
///
/// # Examples
///
/// ```
/// use masthead::render::icons::{icon_for, NetworkIcon};
///
/// assert_eq!(icon_for("GitHub"), NetworkIcon::GitHub);
/// assert_eq!(icon_for("  linkedin "), NetworkIcon::LinkedIn);
/// assert_eq!(icon_for("Myspace"), NetworkIcon::Generic);
/// ```
pub fn icon_for(network: &str) -> NetworkIcon {
    match network.trim().to_lowercase().as_str() {
        "behance" => NetworkIcon::Behance,
        "dribbble" => NetworkIcon::Dribbble,
        "facebook" => NetworkIcon::Facebook,
        "github" => NetworkIcon::GitHub,
        "gitlab" => NetworkIcon::GitLab,
        "instagram" => NetworkIcon::Instagram,
        "linkedin" => NetworkIcon::LinkedIn,
        "mastodon" => NetworkIcon::Mastodon,
        "medium" => NetworkIcon::Medium,
        "skype" => NetworkIcon::Skype,
        "soundcloud" => NetworkIcon::SoundCloud,
        "stackoverflow" | "stack overflow" => NetworkIcon::StackOverflow,
        "telegram" => NetworkIcon::Telegram,
        "twitter" | "x" => NetworkIcon::Twitter,
        "youtube" => NetworkIcon::YouTube,
        _ => NetworkIcon::Generic,
    }
}

/// Every glyph a masthead row can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    /// Pin for the location row
    Location,
    /// Cake for the birthdate row
    Birthday,
    /// Envelope for the email row
    Email,
    /// Handset for the phone row
    Phone,
    /// Globe for the website row
    Website,
    /// Social network glyph
    Network(NetworkIcon),
}

impl Icon {
    /// Stable glyph key understood by the icon registry.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Location => "room",
            Self::Birthday => "cake",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Website => "public",
            Self::Network(network) => network.key(),
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Serialize for Icon {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}
