// ABOUTME: GPS speed measurement value type with m/s and km/h unit conversion
// ABOUTME: SpeedValue tagged union for coercing loosely-typed document field values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 gpx-core contributors

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use tracing::trace;

use crate::errors::{GpxError, Result};

/// Conversion factor between m/s and km/h (1 km/h = 1/3.6 m/s exactly)
const MPS_TO_KMH_FACTOR: f64 = 3.6;

/// GPS speed measurement, stored canonically in meters per second
///
/// The stored magnitude is exactly the value supplied at construction; no
/// clamping, rounding, or range validation is performed, so negative, zero,
/// NaN, and infinite magnitudes are all accepted. All derived views (km/h,
/// integer, reduced precision) are computed on demand from the stored value.
///
/// # Examples
///
/// ```
/// use gpx_core::Speed;
///
/// let speed = Speed::from_kmh(36.0);
/// assert_eq!(speed.as_mps(), 10.0);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Speed {
    mps: f64,
}

impl Speed {
    /// Create a new `Speed` from a magnitude in m/s
    ///
    /// The value is stored exactly as given. Physical plausibility is not
    /// enforced.
    #[must_use]
    pub const fn from_mps(meter_per_second: f64) -> Self {
        Self {
            mps: meter_per_second,
        }
    }

    /// Create a new `Speed` from a magnitude in km/h
    ///
    /// The stored m/s magnitude is `kilometer_per_hour / 3.6`, with standard
    /// floating-point rounding.
    #[must_use]
    pub fn from_kmh(kilometer_per_hour: f64) -> Self {
        Self::from_mps(kilometer_per_hour / MPS_TO_KMH_FACTOR)
    }

    /// Return the speed in m/s, unchanged from construction
    #[must_use]
    pub const fn as_mps(&self) -> f64 {
        self.mps
    }

    /// Return the speed in km/h (`m/s * 3.6`)
    #[must_use]
    pub fn to_kmh(&self) -> f64 {
        self.mps * MPS_TO_KMH_FACTOR
    }

    /// Return the m/s magnitude truncated toward zero as an `i32`
    ///
    /// Uses Rust `as` cast semantics: out-of-range magnitudes saturate at the
    /// `i32` bounds and NaN maps to 0.
    #[must_use]
    pub fn to_i32(&self) -> i32 {
        self.mps as i32
    }

    /// Return the m/s magnitude truncated toward zero as an `i64`
    ///
    /// Same truncation rule as [`Speed::to_i32`], widened range.
    #[must_use]
    pub fn to_i64(&self) -> i64 {
        self.mps as i64
    }

    /// Return the m/s magnitude narrowed to `f32`
    ///
    /// Standard IEEE-754 narrowing: precision may be lost, and magnitudes
    /// beyond the `f32` range become infinite.
    #[must_use]
    pub fn to_f32(&self) -> f32 {
        self.mps as f32
    }

    /// Encode the speed as its IEEE-754 bit pattern in big-endian byte order
    ///
    /// Lossless for every magnitude, including NaN payloads; the inverse is
    /// [`Speed::from_be_bytes`].
    #[must_use]
    pub fn to_be_bytes(&self) -> [u8; 8] {
        self.mps.to_be_bytes()
    }

    /// Decode a speed from the fixed 8-byte layout produced by
    /// [`Speed::to_be_bytes`]
    #[must_use]
    pub fn from_be_bytes(bytes: [u8; 8]) -> Self {
        Self::from_mps(f64::from_be_bytes(bytes))
    }

    /// Coerce a loosely-typed document value into a `Speed`
    ///
    /// Normalizes the heterogeneous field values a document-binding layer
    /// extracts from parsed documents:
    ///
    /// - an already-typed speed passes through unchanged
    /// - a number becomes its m/s magnitude via [`Speed::from_mps`]
    /// - text is parsed with Rust's standard `f64` parser
    /// - an absent value yields `None`
    ///
    /// # Errors
    ///
    /// Returns [`GpxError::InvalidSpeed`] when text is not a valid decimal
    /// numeral. The error is propagated, never swallowed.
    pub fn coerce(value: SpeedValue<'_>) -> Result<Option<Self>> {
        match value {
            SpeedValue::Speed(speed) => Ok(Some(speed)),
            SpeedValue::Number(mps) => Ok(Some(Self::from_mps(mps))),
            SpeedValue::Text(text) => {
                trace!(input = text, "coercing textual speed value");
                text.parse().map(Some)
            }
            SpeedValue::Absent => Ok(None),
        }
    }

    /// Coerce a JSON document value into a `Speed`
    ///
    /// Bridges `serde_json::Value` into the [`SpeedValue`] boundary: numbers,
    /// strings, and null map to their obvious variants; booleans coerce
    /// through their textual rendering (and so fail the numeric parse).
    ///
    /// # Errors
    ///
    /// Returns [`GpxError::InvalidSpeed`] for unparseable text and
    /// [`GpxError::UnsupportedValue`] for JSON kinds that cannot carry a
    /// scalar speed (arrays and objects).
    pub fn from_json(value: &serde_json::Value) -> Result<Option<Self>> {
        match value {
            serde_json::Value::Null => Self::coerce(SpeedValue::Absent),
            serde_json::Value::Number(number) => match number.as_f64() {
                Some(mps) => Self::coerce(SpeedValue::Number(mps)),
                None => Err(GpxError::UnsupportedValue { kind: "number" }),
            },
            serde_json::Value::String(text) => Self::coerce(SpeedValue::Text(text)),
            serde_json::Value::Bool(flag) => {
                Self::coerce(SpeedValue::Text(if *flag { "true" } else { "false" }))
            }
            serde_json::Value::Array(_) => Err(GpxError::UnsupportedValue { kind: "array" }),
            serde_json::Value::Object(_) => Err(GpxError::UnsupportedValue { kind: "object" }),
        }
    }
}

// Equality is over the bit pattern, the `Double.compare` analogue: two NaN
// speeds constructed identically compare equal, +0.0 and -0.0 are distinct.
impl PartialEq for Speed {
    fn eq(&self, other: &Self) -> bool {
        self.mps.to_bits() == other.mps.to_bits()
    }
}

impl Eq for Speed {}

impl Hash for Speed {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.mps.to_bits().hash(state);
    }
}

impl PartialOrd for Speed {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Speed {
    fn cmp(&self, other: &Self) -> Ordering {
        self.mps.total_cmp(&other.mps)
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} m/s", self.mps)
    }
}

impl FromStr for Speed {
    type Err = GpxError;

    fn from_str(s: &str) -> Result<Self> {
        s.parse::<f64>()
            .map(Self::from_mps)
            .map_err(|source| GpxError::InvalidSpeed {
                input: s.to_owned(),
                source,
            })
    }
}

impl From<f64> for Speed {
    fn from(meter_per_second: f64) -> Self {
        Self::from_mps(meter_per_second)
    }
}

impl From<Speed> for f64 {
    fn from(speed: Speed) -> Self {
        speed.as_mps()
    }
}

/// Loosely-typed input to speed coercion
///
/// Explicit tagged union over the shapes a document-binding layer hands to
/// [`Speed::coerce`], dispatched by variant rather than by runtime type
/// inspection.
#[derive(Debug, Clone, Copy)]
pub enum SpeedValue<'a> {
    /// An already-typed speed (identity passthrough)
    Speed(Speed),
    /// A numeric magnitude in m/s
    Number(f64),
    /// A textual decimal magnitude in m/s
    Text(&'a str),
    /// No value present
    Absent,
}
