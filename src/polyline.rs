//! Polyline codec and representation for route geometries.
//!
//! This module provides a type for working with polylines as decoded
//! coordinate sequences, plus the codec for the compact ASCII encoding
//! used at the boundary (when receiving a route from the trip planner
//! or sending geometry to the map renderer).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Decimal precision used by the trip planner's geometry strings.
pub const DEFAULT_PRECISION: u32 = 5;

/// A polyline representing a route geometry as decoded coordinates.
///
/// Stores latitude/longitude points directly for internal processing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<(f64, f64)>,
}

impl Polyline {
    /// Creates a new Polyline from decoded coordinate points.
    ///
    /// Each point is a (latitude, longitude) tuple.
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }
}

/// Failure while decoding an encoded geometry string.
///
/// Both cases carry the points decoded before the malformed tail, so
/// callers can degrade to a partial geometry instead of rendering nothing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("geometry terminated mid-coordinate at byte {offset}")]
    Truncated { offset: usize, decoded: Polyline },
    #[error("geometry byte {byte:#04x} at offset {offset} is outside the codec alphabet")]
    InvalidByte { byte: u8, offset: usize, decoded: Polyline },
}

impl DecodeError {
    /// Points successfully decoded before the malformed tail.
    pub fn into_decoded(self) -> Polyline {
        match self {
            DecodeError::Truncated { decoded, .. } => decoded,
            DecodeError::InvalidByte { decoded, .. } => decoded,
        }
    }
}

/// Decodes an encoded polyline at the given decimal precision.
///
/// Reverses the variable-length delta + zig-zag packing: each coordinate
/// is the running sum of signed deltas scaled by `10^precision`.
pub fn decode(encoded: &str, precision: u32) -> Result<Polyline, DecodeError> {
    let factor = 10f64.powi(precision as i32);
    let bytes = encoded.as_bytes();
    let mut points = Vec::new();
    let mut offset = 0usize;
    let mut lat = 0i64;
    let mut lon = 0i64;

    while offset < bytes.len() {
        let (dlat, after_lat) = match read_delta(bytes, offset) {
            Ok(step) => step,
            Err(raw) => return Err(raw.with_prefix(points)),
        };
        let (dlon, after_lon) = match read_delta(bytes, after_lat) {
            Ok(step) => step,
            Err(raw) => return Err(raw.with_prefix(points)),
        };
        lat += dlat;
        lon += dlon;
        points.push((lat as f64 / factor, lon as f64 / factor));
        offset = after_lon;
    }

    Ok(Polyline::new(points))
}

/// Encodes coordinate points at the given decimal precision.
///
/// Inverse of [`decode`]; used for round-trip tests and fixtures.
pub fn encode(points: &[(f64, f64)], precision: u32) -> String {
    let factor = 10f64.powi(precision as i32);
    let mut out = String::new();
    let mut prev_lat = 0i64;
    let mut prev_lon = 0i64;

    for &(lat, lon) in points {
        let lat_scaled = (lat * factor).round() as i64;
        let lon_scaled = (lon * factor).round() as i64;
        write_delta(lat_scaled - prev_lat, &mut out);
        write_delta(lon_scaled - prev_lon, &mut out);
        prev_lat = lat_scaled;
        prev_lon = lon_scaled;
    }

    out
}

enum RawDecodeError {
    Truncated { offset: usize },
    InvalidByte { byte: u8, offset: usize },
}

impl RawDecodeError {
    fn with_prefix(self, points: Vec<(f64, f64)>) -> DecodeError {
        let decoded = Polyline::new(points);
        match self {
            RawDecodeError::Truncated { offset } => DecodeError::Truncated { offset, decoded },
            RawDecodeError::InvalidByte { byte, offset } => {
                DecodeError::InvalidByte { byte, offset, decoded }
            }
        }
    }
}

/// Reads one zig-zag encoded delta starting at `offset`.
///
/// Returns the delta and the offset just past its last 5-bit group.
fn read_delta(bytes: &[u8], mut offset: usize) -> Result<(i64, usize), RawDecodeError> {
    let mut shift = 0u32;
    let mut result = 0i64;

    loop {
        let Some(&byte) = bytes.get(offset) else {
            return Err(RawDecodeError::Truncated { offset });
        };
        // Valid codec bytes are '?'..='~'; more than 12 continuation
        // groups cannot encode a real coordinate.
        if !(63..=126).contains(&byte) || shift > 60 {
            return Err(RawDecodeError::InvalidByte { byte, offset });
        }
        let chunk = i64::from(byte - 63);
        result |= (chunk & 0x1f) << shift;
        shift += 5;
        offset += 1;
        if chunk < 0x20 {
            break;
        }
    }

    let delta = if result & 1 != 0 { !(result >> 1) } else { result >> 1 };
    Ok((delta, offset))
}

fn write_delta(delta: i64, out: &mut String) {
    let mut value = if delta < 0 { !(delta << 1) } else { delta << 1 };
    while value >= 0x20 {
        out.push((((value & 0x1f) | 0x20) as u8 + 63) as char);
        value >>= 5;
    }
    out.push((value as u8 + 63) as char);
}
