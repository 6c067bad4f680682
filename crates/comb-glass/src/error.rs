//! Error types for presets, themes and the output writers.
//!
//! The layout generator has no error type: every input produces a layout,
//! possibly an empty one. Failures only come from reading configuration
//! and from writing files.
//!
//! ## Rust Lesson #20: Error Handling
//!
//! `thiserror` derives `Display` and `std::error::Error` from the
//! `#[error(...)]` attributes, so each variant documents its own message.
//! `#[from]` additionally lets `?` convert the wrapped error for us.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from looking up or loading named boards and glasses.
#[derive(Debug, Error)]
pub enum PresetError {
    #[error("unknown board '{name}' (available: {available})")]
    UnknownBoard { name: String, available: String },

    #[error("unknown glass '{name}' (available: {available})")]
    UnknownGlass { name: String, available: String },

    #[error("failed to read presets from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse presets YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Errors from loading or validating a rendering theme.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("invalid color '{value}' for {field}")]
    InvalidColor { field: &'static str, value: String },

    #[error("failed to read theme from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse theme YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Errors from producing or writing an output file.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("generated SVG could not be parsed: {0}")]
    Svg(String),

    #[error("PDF conversion failed: {0}")]
    Pdf(String),

    #[error("cannot allocate a {width}x{height} pixmap")]
    Pixmap { width: u32, height: u32 },

    #[error("PNG encoding failed: {0}")]
    Png(String),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
