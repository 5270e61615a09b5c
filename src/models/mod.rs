// ABOUTME: Core data models for GPS data interchange
// ABOUTME: Re-exports the Speed value type and the SpeedValue coercion boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 gpx-core contributors

//! # Data Models
//!
//! Value types used throughout GPS document handling. These models are pure
//! data holders: immutable, provider-agnostic, and safe to share freely
//! across threads.

mod speed;

pub use speed::{Speed, SpeedValue};
