// ABOUTME: Core value types for GPS data interchange
// ABOUTME: Foundation crate with the Speed measurement type and lenient coercion helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 gpx-core contributors

#![deny(unsafe_code)]

//! # GPX Core
//!
//! Foundation crate providing shared value types for GPS data interchange.
//! This crate is designed to change infrequently and to sit underneath
//! document-binding and serialization layers that ingest loosely-typed
//! field values.
//!
//! ## Modules
//!
//! - **errors**: Crate error handling with `GpxError` and a `Result` alias
//! - **models**: Core value types (`Speed`, `SpeedValue`)

/// Crate error types and the crate-wide `Result` alias
pub mod errors;

/// Core value types (`Speed` measurement, `SpeedValue` coercion boundary)
pub mod models;

pub use errors::{GpxError, Result};
pub use models::{Speed, SpeedValue};
