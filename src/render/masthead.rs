//! Masthead projection.
//!
//! Turns a resume snapshot and its theme into the rows, photo and summary a
//! template draws in its header. The projection is pure: the same snapshot
//! always yields the same [`Masthead`].

use crate::models::{Basics, PhotoFilters, ResumeDocument, RgbColor, ThemeConfig};
use crate::render::contrast::{ContrastClass, ContrastPalette};
use crate::render::format::{
    display_text, format_date, format_location, mailto_link, normalize_url, tel_link,
};
use crate::render::icons::{icon_for, Icon};
use crate::render::rich_text::{PassthroughRenderer, RichTextRenderer};
use serde::Serialize;
use tracing::debug;

/// Opacity of the accent tint behind the summary block.
pub const DEFAULT_SUMMARY_TINT_OPACITY: f32 = 0.15;

/// Read-only view of everything the masthead needs for one render.
#[derive(Debug, Clone, Copy)]
pub struct MastheadSnapshot<'a> {
    /// Identity and contact block
    pub basics: &'a Basics,
    /// Theme colors for this render
    pub theme: &'a ThemeConfig,
    /// Date display pattern
    pub date_format: &'a str,
}

impl<'a> MastheadSnapshot<'a> {
    /// Creates a snapshot from explicit parts.
    pub const fn new(basics: &'a Basics, theme: &'a ThemeConfig, date_format: &'a str) -> Self {
        Self {
            basics,
            theme,
            date_format,
        }
    }

    /// Borrows the masthead inputs from a whole document.
    pub fn from_document(document: &'a ResumeDocument) -> Self {
        Self::new(
            &document.basics,
            &document.metadata.theme,
            &document.metadata.date.format,
        )
    }
}

/// Fully resolved masthead, ready for a layout substrate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Masthead {
    /// Colors shared by every row
    pub palette: ContrastPalette,
    /// Photo, present only when visible and set
    pub photo: Option<PhotoView>,
    /// Name and headline
    pub identity: Identity,
    /// Contact and profile rows in display order
    pub rows: Vec<Row>,
    /// Summary paragraph
    pub summary: SummaryBlock,
}

/// Photo to draw at the top of the masthead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhotoView {
    /// Image URL
    pub url: String,
    /// Alternative text (the person's name)
    pub alt: String,
    /// Edge length in pixels
    pub size: u32,
    /// Shape and effects, passed through untouched
    pub filters: PhotoFilters,
}

/// Name and headline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    /// Full name
    pub name: String,
    /// Professional headline
    pub headline: String,
}

/// One (icon, label?, link?) entry in the contact list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    /// Stable key: the field name for contact rows, the profile id for profiles
    pub key: String,
    /// Glyph drawn before the label
    pub icon: Icon,
    /// Display text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Link target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Label should be drawn with inverted colors
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub inverted: bool,
}

impl Row {
    fn new(key: impl Into<String>, icon: Icon, label: Option<String>, link: Option<String>) -> Self {
        Self {
            key: key.into(),
            icon,
            label,
            link,
            inverted: false,
        }
    }

    /// Contact rows need something to show or something to follow.
    fn is_renderable(&self) -> bool {
        self.label.is_some() || self.link.is_some()
    }
}

/// Summary paragraph with its tinted background.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryBlock {
    /// Output of the rich-text renderer
    pub content: String,
    /// `rgba(...)` tint of the accent color; `None` if the accent is malformed
    pub background: Option<String>,
}

/// Projects resume snapshots into [`Masthead`]s.
#[derive(Debug, Clone)]
pub struct MastheadProjector<R = PassthroughRenderer> {
    renderer: R,
    summary_tint_opacity: f32,
}

impl<R: RichTextRenderer> MastheadProjector<R> {
    /// Creates a projector that renders the summary with `renderer`.
    pub const fn new(renderer: R) -> Self {
        Self {
            renderer,
            summary_tint_opacity: DEFAULT_SUMMARY_TINT_OPACITY,
        }
    }

    /// Overrides the summary tint opacity (clamped to `0.0..=1.0`).
    pub fn with_summary_tint_opacity(mut self, opacity: f32) -> Self {
        self.summary_tint_opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Projects one snapshot.
    pub fn project(&self, snapshot: &MastheadSnapshot<'_>) -> Masthead {
        let basics = snapshot.basics;
        let palette = ContrastPalette::resolve(snapshot.theme);

        let mut rows = contact_rows(basics, snapshot.date_format, palette.contrast);
        rows.extend(profile_rows(basics));

        let masthead = Masthead {
            photo: photo_view(basics),
            identity: Identity {
                name: basics.name.clone(),
                headline: basics.headline.clone(),
            },
            rows,
            summary: SummaryBlock {
                content: self.renderer.render(&basics.summary),
                background: summary_tint(&snapshot.theme.primary, self.summary_tint_opacity),
            },
            palette,
        };

        debug!(
            contrast = %masthead.palette.contrast,
            rows = masthead.rows.len(),
            photo = masthead.photo.is_some(),
            "Projected masthead"
        );

        masthead
    }
}

/// Projects a snapshot with the default projector.
pub fn project_masthead(snapshot: &MastheadSnapshot<'_>) -> Masthead {
    MastheadProjector::new(PassthroughRenderer).project(snapshot)
}

fn photo_view(basics: &Basics) -> Option<PhotoView> {
    let photo = &basics.photo;
    let url = display_text(&photo.url)?;
    if !photo.visible {
        return None;
    }

    Some(PhotoView {
        url,
        alt: basics.name.clone(),
        size: photo.filters.size,
        filters: photo.filters.clone(),
    })
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn contact_rows(basics: &Basics, date_format: &str, contrast: ContrastClass) -> Vec<Row> {
    let mut birthdate = Row::new(
        "birthdate",
        Icon::Birthday,
        non_empty(format_date(&basics.birthdate, date_format)),
        None,
    );
    birthdate.inverted = contrast == ContrastClass::Light;

    [
        Row::new(
            "location",
            Icon::Location,
            non_empty(format_location(&basics.location)),
            None,
        ),
        birthdate,
        Row::new(
            "email",
            Icon::Email,
            display_text(&basics.email),
            mailto_link(&basics.email),
        ),
        Row::new(
            "phone",
            Icon::Phone,
            display_text(&basics.phone),
            tel_link(&basics.phone),
        ),
        Row::new(
            "website",
            Icon::Website,
            display_text(&basics.website),
            normalize_url(&basics.website),
        ),
    ]
    .into_iter()
    .filter(Row::is_renderable)
    .collect()
}

/// One row per profile, in document order. Unknown networks still resolve
/// to the generic glyph, so no profile is dropped.
fn profile_rows(basics: &Basics) -> impl Iterator<Item = Row> + '_ {
    basics.profiles.iter().map(|profile| {
        Row::new(
            profile.id.clone(),
            Icon::Network(icon_for(&profile.network)),
            display_text(&profile.username),
            normalize_url(&profile.url),
        )
    })
}

fn summary_tint(primary: &str, opacity: f32) -> Option<String> {
    RgbColor::from_hex(primary)
        .ok()
        .map(|color| color.to_rgba(opacity))
}
