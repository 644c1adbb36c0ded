// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::BBoxError;

/// A geographic position: longitude and latitude in degrees, with an optional
/// elevation.
///
/// This mirrors a GeoJSON position (`[lng, lat]` or `[lng, lat, elevation]`).
/// Raw arrays are validated through `TryFrom<&[f64]>`; numbers past the third
/// are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<f64>", into = "Vec<f64>")
)]
pub struct Position {
    /// Longitude in degrees.
    pub lng: f64,
    /// Latitude in degrees.
    pub lat: f64,
    /// Optional elevation, carried along but never used for extents.
    pub elevation: Option<f64>,
}

impl Position {
    /// Creates a 2D position.
    #[must_use]
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self {
            lng,
            lat,
            elevation: None,
        }
    }

    /// Returns this position with the given elevation attached.
    #[must_use]
    pub const fn with_elevation(self, elevation: f64) -> Self {
        Self {
            elevation: Some(elevation),
            ..self
        }
    }
}

impl TryFrom<&[f64]> for Position {
    type Error = BBoxError;

    fn try_from(coords: &[f64]) -> Result<Self, Self::Error> {
        match *coords {
            [] => Err(BBoxError::EmptyPosition),
            [_] => Err(BBoxError::MissingLatitude),
            [lng, lat] => Ok(Self::new(lng, lat)),
            [lng, lat, elevation, ..] => Ok(Self::new(lng, lat).with_elevation(elevation)),
        }
    }
}

impl TryFrom<Vec<f64>> for Position {
    type Error = BBoxError;

    fn try_from(coords: Vec<f64>) -> Result<Self, Self::Error> {
        Self::try_from(coords.as_slice())
    }
}

impl From<Position> for Vec<f64> {
    fn from(position: Position) -> Self {
        let mut out = Self::with_capacity(3);
        out.push(position.lng);
        out.push(position.lat);
        if let Some(elevation) = position.elevation {
            out.push(elevation);
        }
        out
    }
}

impl From<[f64; 2]> for Position {
    fn from([lng, lat]: [f64; 2]) -> Self {
        Self::new(lng, lat)
    }
}

impl From<[f64; 3]> for Position {
    fn from([lng, lat, elevation]: [f64; 3]) -> Self {
        Self::new(lng, lat).with_elevation(elevation)
    }
}

impl From<(f64, f64)> for Position {
    fn from((lng, lat): (f64, f64)) -> Self {
        Self::new(lng, lat)
    }
}
