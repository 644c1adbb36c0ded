// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sightline BBox: geographic bounding‑box algebra.
//!
//! This crate provides the small set of pure operations a map SDK uses to
//! accumulate rectangular extents from points, features, routes and
//! polylines:
//! - [`BBox`] and [`Position`] value types with validated conversions from
//!   raw GeoJSON‑style number arrays.
//! - Area tests ([`is_bbox_with_area`], [`bbox_only_if_with_area`]).
//! - Expansion by a position or by another box ([`expand_with_position`],
//!   [`expand_with_bbox`]) and the union of many boxes ([`union_of_bboxes`]).
//! - Extents of point features ([`expand_with_point_feature`],
//!   [`bbox_from_point_features`]).
//! - Extents of long coordinate runs, either sampled
//!   ([`quick_bbox_from_coordinates`], [`quick_bbox_from_line_string`]) or
//!   exact ([`bbox_from_coordinates`]).
//!
//! "No data yet" is a normal state for incrementally built map displays, so
//! operations over collections return `None` for empty input rather than an
//! error. The only caller error is a malformed raw position, reported as
//! [`BBoxError`].
//!
//! ## Example
//!
//! ```rust
//! use sightline_bbox::{BBox, Position, expand_with_position, quick_bbox_from_coordinates};
//!
//! let bbox = expand_with_position(&[2.35, 48.85], None).unwrap();
//! assert_eq!(bbox, BBox::new(2.35, 48.85, 2.35, 48.85));
//! assert!(!bbox.has_area());
//!
//! // A long route: only ~1000 samples are scanned, endpoints always included.
//! let route: Vec<Position> = (0..100_000)
//!     .map(|i| Position::new(f64::from(i) * 1e-4, 45.0))
//!     .collect();
//! let extent = quick_bbox_from_coordinates(&route).unwrap();
//! assert_eq!(extent.west, 0.0);
//! assert_eq!(extent.east, route[99_999].lng);
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to `std` support in dependencies.
//! - `serde`: `Serialize`/`Deserialize` for every value type. Boxes and
//!   positions use their GeoJSON array forms, geometries and features their
//!   GeoJSON object forms.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod bbox;
mod error;
mod feature;
mod position;
mod quick;

pub use bbox::{
    BBox, bbox_only_if_with_area, expand_with_bbox, expand_with_position, is_bbox_with_area,
    union_of_bboxes,
};
pub use error::BBoxError;
pub use feature::{
    LineString, Point, PointFeature, bbox_from_point_features, expand_with_point_feature,
};
pub use position::Position;
pub use quick::{
    QUICK_BBOX_MAX_SAMPLES, bbox_from_coordinates, quick_bbox_from_coordinates,
    quick_bbox_from_line_string,
};
