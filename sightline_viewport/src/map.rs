// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};
use sightline_bbox::Position;

/// A geographic coordinate produced by [`MapView::unproject`].
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct LngLat {
    /// Longitude in degrees.
    pub lng: f64,
    /// Latitude in degrees.
    pub lat: f64,
}

impl LngLat {
    /// Creates a coordinate from longitude and latitude.
    #[must_use]
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }
}

impl From<LngLat> for Position {
    fn from(value: LngLat) -> Self {
        Self::new(value.lng, value.lat)
    }
}

/// The map renderer, as seen by the padding engine.
///
/// Implementors are read as a snapshot: the engine queries the container
/// rect once per operation and performs all of its `unproject` calls in the
/// same synchronous pass. Call the engine only while the projection is
/// stable (not mid‑animation) to get a consistent result.
pub trait MapView {
    /// Bounding rectangle of the map container, in the same pixel space as
    /// the obstructions.
    ///
    /// Screen convention: `y0` is the top edge, `y1` the bottom edge.
    fn container_rect(&self) -> Rect;

    /// Converts a pixel position into a geographic one for the current
    /// zoom, pan and projection.
    ///
    /// `pixel` is in the same coordinate frame as [`container_rect`]: the
    /// engine passes corners and centers of sub-rectangles of that rect
    /// unchanged. An implementor whose container rect is page-relative must
    /// therefore accept page-relative pixels here.
    ///
    /// [`container_rect`]: MapView::container_rect
    fn unproject(&self, pixel: Point) -> LngLat;
}

impl<M: MapView + ?Sized> MapView for &M {
    fn container_rect(&self) -> Rect {
        (**self).container_rect()
    }

    fn unproject(&self, pixel: Point) -> LngLat {
        (**self).unproject(pixel)
    }
}

/// An opaque UI element that may cover part of the map container.
pub trait Obstruction {
    /// Bounding rectangle of the element, in the container's pixel space.
    fn bounding_rect(&self) -> Rect;
}

impl Obstruction for Rect {
    fn bounding_rect(&self) -> Rect {
        *self
    }
}

impl<O: Obstruction + ?Sized> Obstruction for &O {
    fn bounding_rect(&self) -> Rect {
        (**self).bounding_rect()
    }
}
