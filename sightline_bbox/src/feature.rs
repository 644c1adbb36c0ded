// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! GeoJSON‑shaped inputs whose extents the algebra accumulates.
//!
//! Only the members that matter for extents are modelled. With the `serde`
//! feature these deserialize straight from GeoJSON text; unknown members such
//! as `properties` are ignored.

use alloc::vec::Vec;

use crate::{BBox, Position};

/// A GeoJSON `Point` geometry.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", rename = "Point")
)]
pub struct Point {
    /// The point's position.
    pub coordinates: Position,
    /// Optional precomputed extent.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub bbox: Option<BBox>,
}

impl Point {
    /// Creates a point geometry without a precomputed extent.
    #[must_use]
    pub fn new(coordinates: impl Into<Position>) -> Self {
        Self {
            coordinates: coordinates.into(),
            bbox: None,
        }
    }
}

/// A GeoJSON `Feature` whose geometry is a [`Point`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", rename = "Feature")
)]
pub struct PointFeature {
    /// The feature's geometry.
    pub geometry: Point,
    /// Optional precomputed extent of the whole feature.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub bbox: Option<BBox>,
}

impl PointFeature {
    /// Creates a feature around a bare position.
    #[must_use]
    pub fn new(coordinates: impl Into<Position>) -> Self {
        Self {
            geometry: Point::new(coordinates),
            bbox: None,
        }
    }

    /// The extent this feature declares for itself, if any.
    ///
    /// The feature's own `bbox` wins over the geometry's.
    #[must_use]
    pub fn declared_bbox(&self) -> Option<BBox> {
        self.bbox.or(self.geometry.bbox)
    }
}

/// A GeoJSON `LineString` geometry, such as a route or a drawn polyline.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", rename = "LineString")
)]
pub struct LineString {
    /// Ordered positions along the line.
    pub coordinates: Vec<Position>,
    /// Optional precomputed extent.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub bbox: Option<BBox>,
}

impl LineString {
    /// Creates a line string without a precomputed extent.
    #[must_use]
    pub fn new(coordinates: Vec<Position>) -> Self {
        Self {
            coordinates,
            bbox: None,
        }
    }
}

/// Expands `bbox_to_expand` so it contains `feature`.
///
/// A declared extent (on the feature or its geometry) is unioned in as a
/// whole; otherwise the point's position is used.
#[must_use]
pub fn expand_with_point_feature(feature: &PointFeature, bbox_to_expand: Option<BBox>) -> BBox {
    let own = feature
        .declared_bbox()
        .unwrap_or_else(|| BBox::from_position(feature.geometry.coordinates));
    match bbox_to_expand {
        Some(bbox) => own.union(bbox),
        None => own,
    }
}

/// Extent of all `features`, or `None` when there are none.
#[must_use]
pub fn bbox_from_point_features(features: &[PointFeature]) -> Option<BBox> {
    features
        .iter()
        .fold(None, |acc, feature| Some(expand_with_point_feature(feature, acc)))
}
