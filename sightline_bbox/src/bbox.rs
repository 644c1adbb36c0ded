// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::{BBoxError, Position};

/// Axis‑aligned geographic bounding box, `[west, south, east, north]` in degrees.
///
/// No ordering invariant is enforced: a box whose corners are swapped is still
/// a valid value. Use [`BBox::has_area`] to ask whether the box is degenerate.
/// Every operation returns a new value.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<f64>", into = "[f64; 4]")
)]
pub struct BBox {
    /// Minimum longitude.
    pub west: f64,
    /// Minimum latitude.
    pub south: f64,
    /// Maximum longitude.
    pub east: f64,
    /// Maximum latitude.
    pub north: f64,
}

impl BBox {
    /// Creates a box from its four bounds.
    #[must_use]
    pub const fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west,
            south,
            east,
            north,
        }
    }

    /// Degenerate box covering a single position: `[lng, lat, lng, lat]`.
    #[must_use]
    pub const fn from_position(position: Position) -> Self {
        Self::new(position.lng, position.lat, position.lng, position.lat)
    }

    /// Returns `true` when opposite corners differ on both axes.
    ///
    /// This checks inequality only, not min/max ordering, so a box with
    /// swapped corners still has area.
    #[must_use]
    pub fn has_area(&self) -> bool {
        self.east != self.west && self.north != self.south
    }

    /// Longitude extent, `east - west`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.east - self.west
    }

    /// Latitude extent, `north - south`.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.north - self.south
    }

    /// Midpoint of the box.
    #[must_use]
    pub fn center(&self) -> Position {
        Position::new(
            (self.west + self.east) * 0.5,
            (self.south + self.north) * 0.5,
        )
    }

    /// Returns `true` if `position` lies inside the box or on its boundary.
    #[must_use]
    pub fn contains_position(&self, position: Position) -> bool {
        position.lng >= self.west
            && position.lng <= self.east
            && position.lat >= self.south
            && position.lat <= self.north
    }

    /// Component‑wise min/max of this box and `position`.
    #[must_use]
    pub fn expand_with_position(self, position: Position) -> Self {
        Self::new(
            self.west.min(position.lng),
            self.south.min(position.lat),
            self.east.max(position.lng),
            self.north.max(position.lat),
        )
    }

    /// Union of two boxes: min of wests/souths, max of easts/norths.
    ///
    /// The result does not depend on argument order.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self::new(
            self.west.min(other.west),
            self.south.min(other.south),
            self.east.max(other.east),
            self.north.max(other.north),
        )
    }

    /// The box as a `[west, south, east, north]` array.
    #[must_use]
    pub const fn to_array(self) -> [f64; 4] {
        [self.west, self.south, self.east, self.north]
    }
}

impl From<[f64; 4]> for BBox {
    fn from([west, south, east, north]: [f64; 4]) -> Self {
        Self::new(west, south, east, north)
    }
}

impl From<BBox> for [f64; 4] {
    fn from(bbox: BBox) -> Self {
        bbox.to_array()
    }
}

impl TryFrom<&[f64]> for BBox {
    type Error = BBoxError;

    /// Reads the first four numbers; anything after them is ignored.
    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        match *values {
            [west, south, east, north, ..] => Ok(Self::new(west, south, east, north)),
            _ => Err(BBoxError::TooShort { len: values.len() }),
        }
    }
}

impl TryFrom<Vec<f64>> for BBox {
    type Error = BBoxError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::try_from(values.as_slice())
    }
}

/// Returns `true` if `bbox` is present and [has area](BBox::has_area).
#[must_use]
pub fn is_bbox_with_area(bbox: Option<BBox>) -> bool {
    bbox.is_some_and(|b| b.has_area())
}

/// Passes `bbox` through only if it [has area](BBox::has_area).
#[must_use]
pub fn bbox_only_if_with_area(bbox: Option<BBox>) -> Option<BBox> {
    bbox.filter(BBox::has_area)
}

/// Expands `bbox_to_expand` so it contains the raw `position` array.
///
/// Without a box to expand, the result is the degenerate box around the
/// position.
///
/// # Errors
///
/// Returns [`BBoxError::EmptyPosition`] for an empty array and
/// [`BBoxError::MissingLatitude`] when only a longitude is given.
pub fn expand_with_position(
    position: &[f64],
    bbox_to_expand: Option<BBox>,
) -> Result<BBox, BBoxError> {
    let position = Position::try_from(position)?;
    Ok(match bbox_to_expand {
        Some(bbox) => bbox.expand_with_position(position),
        None => BBox::from_position(position),
    })
}

/// Expands `to_expand` so it contains `to_contain`.
///
/// Without a box to expand, `to_contain` is returned unchanged.
#[must_use]
pub fn expand_with_bbox(to_contain: BBox, to_expand: Option<BBox>) -> BBox {
    match to_expand {
        Some(bbox) => to_contain.union(bbox),
        None => to_contain,
    }
}

/// Union of all `bboxes`.
///
/// A single box is returned unchanged; an empty input yields `None`.
#[must_use]
pub fn union_of_bboxes<I>(bboxes: I) -> Option<BBox>
where
    I: IntoIterator<Item = BBox>,
{
    bboxes.into_iter().reduce(BBox::union)
}
