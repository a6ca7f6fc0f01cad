//! Data models for resume documents, theme colors and color math.
//!
//! Models are plain data and independent of rendering decisions.

pub mod resume;
pub mod rgb;
pub mod theme;

// Re-export all model types
pub use resume::{
    Basics, DateMetadata, Location, Metadata, Photo, PhotoFilters, PhotoShape, Profile,
    ResumeDocument,
};
pub use rgb::{ColorError, RgbColor};
pub use theme::ThemeConfig;
