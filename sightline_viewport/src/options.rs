// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::Rect;

use crate::edges::DEFAULT_SPAN_TOLERANCE_PX;

/// Inputs shared by the padding operations.
///
/// Borrowing the map and the element list keeps a call cheap enough to run
/// on every `moveend`/`resize` of the host map.
///
/// ```rust
/// use kurbo::{Point, Rect};
/// use sightline_viewport::{LngLat, MapView, PaddingOptions};
///
/// struct Flat;
///
/// impl MapView for Flat {
///     fn container_rect(&self) -> Rect {
///         Rect::new(0.0, 0.0, 800.0, 600.0)
///     }
///     fn unproject(&self, pixel: Point) -> LngLat {
///         LngLat::new(pixel.x, -pixel.y)
///     }
/// }
///
/// let sidebar = [Rect::new(0.0, 0.0, 240.0, 600.0)];
/// let options = PaddingOptions::new(&Flat, &sidebar).with_padding(16.0);
/// assert_eq!(options.padding_px, 16.0);
/// ```
pub struct PaddingOptions<'a, M: ?Sized, O> {
    /// The map whose container and projection are read.
    pub map: &'a M,
    /// UI elements that may cover parts of the container.
    pub surrounding_elements: &'a [O],
    /// Uniform padding applied to every edge, in pixels.
    pub padding_px: f64,
    /// Slack used when deciding whether an element spans a full container
    /// dimension or touches an edge.
    pub span_tolerance_px: f64,
}

impl<'a, M: ?Sized, O> PaddingOptions<'a, M, O> {
    /// Options with no padding and the default span tolerance.
    #[must_use]
    pub fn new(map: &'a M, surrounding_elements: &'a [O]) -> Self {
        Self {
            map,
            surrounding_elements,
            padding_px: 0.0,
            span_tolerance_px: DEFAULT_SPAN_TOLERANCE_PX,
        }
    }

    /// Sets the uniform padding. Negative or NaN values behave as zero.
    #[must_use]
    pub fn with_padding(mut self, padding_px: f64) -> Self {
        self.padding_px = padding_px;
        self
    }

    /// Sets the span tolerance.
    #[must_use]
    pub fn with_span_tolerance(mut self, span_tolerance_px: f64) -> Self {
        self.span_tolerance_px = span_tolerance_px;
        self
    }
}

impl<'a, M: ?Sized> PaddingOptions<'a, M, Rect> {
    /// Options for a map with no surrounding elements.
    #[must_use]
    pub fn unobstructed(map: &'a M) -> Self {
        Self::new(map, &[])
    }
}

impl<M: ?Sized, O> Clone for PaddingOptions<'_, M, O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: ?Sized, O> Copy for PaddingOptions<'_, M, O> {}

impl<M: ?Sized, O> fmt::Debug for PaddingOptions<'_, M, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaddingOptions")
            .field("surrounding_elements", &self.surrounding_elements.len())
            .field("padding_px", &self.padding_px)
            .field("span_tolerance_px", &self.span_tolerance_px)
            .finish_non_exhaustive()
    }
}
