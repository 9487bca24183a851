//! Error Types
//!
//! This module defines the error types used throughout the engine.
//!
//! # Overview
//!
//! The main error type [`TableauError`] covers the synchronous failure modes of
//! scene assembly and motion building:
//! - Invalid animation parameters
//! - Configuration variants the factories do not implement
//! - Missing or malformed configuration
//! - File I/O errors
//!
//! The render loop and the auto-framing solver never fail; a mixer that errors
//! while advancing is logged and retired by the loop instead of surfacing here.
//!
//! # Usage
//!
//! All fallible public APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, TableauError>`.
//!
//! ```rust,ignore
//! use tableau::errors::{TableauError, Result};
//!
//! fn build() -> Result<()> {
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// The main error type for the Tableau engine.
#[derive(Error, Debug)]
pub enum TableauError {
    // ========================================================================
    // Animation Errors
    // ========================================================================
    /// A motion was requested with a non-positive (or non-finite) duration.
    #[error("Invalid animation duration: {0} (must be > 0)")]
    InvalidDuration(f32),

    /// A mixer's bound node no longer exists in the scene.
    #[error("Animation target node is missing from the scene")]
    AnimationTargetMissing,

    // ========================================================================
    // Factory Errors
    // ========================================================================
    /// Camera config names a type the camera factory does not implement.
    #[error("Unsupported camera type: {0}")]
    UnsupportedCameraType(String),

    /// Light config names a type the light factory does not implement.
    #[error("Unsupported light type: {0}")]
    UnsupportedLightType(String),

    /// Geometry config names a type the geometry factory does not implement.
    #[error("Unsupported geometry type: {0}")]
    UnsupportedGeometryType(String),

    /// Material config names a type the material factory does not implement.
    #[error("Unsupported material type: {0}")]
    UnsupportedMaterialType(String),

    /// A required configuration object is absent.
    #[error("Missing config: {0}")]
    MissingConfig(&'static str),

    /// A colour string could not be parsed.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    // ========================================================================
    // Format & I/O Errors
    // ========================================================================
    /// JSON parsing error.
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// File I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, TableauError>`.
pub type Result<T> = std::result::Result<T, TableauError>;
