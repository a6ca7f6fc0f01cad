//! Masthead rendering core.
//!
//! Resolves contrast-aware colors for a theme, formats document fields, maps
//! social networks to glyphs, and projects a resume snapshot into the rows a
//! template draws. Nothing in here performs I/O.

pub mod contrast;
pub mod format;
pub mod icons;
pub mod masthead;
pub mod rich_text;

pub use contrast::{
    icon_color, inverted_text_color, resolve_contrast, try_resolve_contrast, ContrastClass,
    ContrastPalette,
};
pub use format::{format_date, format_location, normalize_url};
pub use icons::{icon_for, Icon, NetworkIcon};
pub use masthead::{
    project_masthead, Identity, Masthead, MastheadProjector, MastheadSnapshot, PhotoView, Row,
    SummaryBlock,
};
pub use rich_text::{PassthroughRenderer, RichTextRenderer};
