// ABOUTME: Error types for GPS value coercion and parsing
// ABOUTME: Defines GpxError with structured context and the crate Result alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 gpx-core contributors

/// Common error type for GPS value operations
#[derive(Debug, thiserror::Error)]
pub enum GpxError {
    /// A textual speed value could not be parsed as a decimal number
    #[error("Invalid speed value '{input}'")]
    InvalidSpeed {
        /// The text that failed to parse
        input: String,
        /// Underlying float parse error
        #[source]
        source: std::num::ParseFloatError,
    },

    /// A document value of this kind cannot carry a scalar speed
    #[error("Unsupported value kind '{kind}' for speed field")]
    UnsupportedValue {
        /// JSON kind of the rejected value
        kind: &'static str,
    },
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, GpxError>;
