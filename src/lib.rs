//! Masthead Library
//!
//! This library provides the rendering core behind resume masthead templates:
//! contrast-aware color resolution for a user-chosen accent color, field
//! formatting with empty-value suppression, social network glyph lookup, and
//! the projection of a resume snapshot into display rows.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod render;
