//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! Rendering itself is infallible: a camera whose culling parameters cannot be
//! retrieved is skipped for the frame without producing an error value. The
//! main error type [`FrameError`] therefore only covers the set-up surface:
//! - Renderer settings validation and loading
//! - Drawing-settings pass slot limits
//! - I/O and JSON decoding of configuration files
//!
//! # Usage
//!
//! Fallible public APIs return [`Result<T>`], an alias for
//! `std::result::Result<T, FrameError>`.
//!
//! ```rust,ignore
//! use frame_renderer::errors::Result;
//! use frame_renderer::renderer::RendererSettings;
//!
//! fn load() -> Result<RendererSettings> {
//!     RendererSettings::load("renderer.json")
//! }
//! ```

use thiserror::Error;

/// The main error type for the frame renderer.
#[derive(Error, Debug)]
pub enum FrameError {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Renderer settings failed validation.
    #[error("Invalid renderer settings: {0}")]
    InvalidSettings(String),

    /// A shader pass was assigned past the drawing-settings pass limit, or
    /// would leave a gap in the pass list.
    #[error("Shader pass index {index} out of range (limit: {limit})")]
    ShaderPassIndexOutOfRange {
        /// The rejected slot index
        index: usize,
        /// The first index that may not be written
        limit: usize,
    },

    // ========================================================================
    // I/O & Format Errors
    // ========================================================================
    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Alias for `Result<T, FrameError>`.
pub type Result<T> = std::result::Result<T, FrameError>;
