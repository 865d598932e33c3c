//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`TableauError`] covers all failure modes including:
//! - Texture decoding and registration errors
//! - Registry capacity and tag-uniqueness violations
//! - Scene description parsing errors
//!
//! # Usage
//!
//! All fallible public APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, TableauError>`. Lookups that can simply miss
//! (`find_slot`, `MaterialRegistry::find`) return `Option` instead; a miss is
//! not an error condition.
//!
//! ```rust,ignore
//! use tableau::errors::{Result, TableauError};
//!
//! fn build_scene() -> Result<()> {
//!     // Operations that may fail return Result
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// The main error type for the tableau crate.
///
/// This enum covers all possible error conditions that can occur while
/// building and rendering a scene. Each variant provides specific context
/// about what went wrong.
#[derive(Error, Debug)]
pub enum TableauError {
    // ========================================================================
    // Image & Texture Errors
    // ========================================================================
    /// Image decoding error.
    #[error("Image decode error: {0}")]
    ImageDecodeError(String),

    /// The decoded image has a channel layout the pipeline does not accept.
    /// Only 3-channel (RGB) and 4-channel (RGBA) images are supported.
    #[error("Unsupported channel count for '{label}': {channels} (expected 3 or 4)")]
    UnsupportedChannelCount {
        /// Path or label of the offending image
        label: String,
        /// The channel count that was found
        channels: u8,
    },

    // ========================================================================
    // Registry Errors
    // ========================================================================
    /// Every texture unit is already occupied.
    #[error("Texture registry is full: all {capacity} slots are in use")]
    TextureCapacityExceeded {
        /// The fixed slot capacity
        capacity: usize,
    },

    /// A texture or material was registered twice under the same tag.
    #[error("Tag already registered: '{0}'")]
    DuplicateTag(String),

    /// Every light-source array slot is already occupied.
    #[error("Light rig is full: all {capacity} sources are in use")]
    LightCapacityExceeded {
        /// The fixed light-source capacity
        capacity: usize,
    },

    // ========================================================================
    // I/O Errors
    // ========================================================================
    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    // ========================================================================
    // Format & Parsing Errors
    // ========================================================================
    /// JSON parsing error (scene descriptions).
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

// ============================================================================
// Convenient conversion implementations
// ============================================================================

impl From<image::ImageError> for TableauError {
    fn from(err: image::ImageError) -> Self {
        TableauError::ImageDecodeError(err.to_string())
    }
}

/// Alias for `Result<T, TableauError>`.
pub type Result<T> = std::result::Result<T, TableauError>;
