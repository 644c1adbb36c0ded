// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Insets, Point, Rect};
use sightline_bbox::{BBox, Position};

use crate::edges::{DEFAULT_SPAN_TOLERANCE_PX, obstruction_insets};
use crate::{MapView, Obstruction, PaddingOptions};

/// Container, insets and visible rect read in one pass from the map.
#[derive(Clone, Copy, Debug)]
struct PaddedView {
    container: Rect,
    insets: Insets,
    visible: Rect,
}

impl PaddedView {
    fn capture<M, O>(options: &PaddingOptions<'_, M, O>) -> Option<Self>
    where
        M: MapView + ?Sized,
        O: Obstruction,
    {
        let container = options.map.container_rect().abs();
        let insets = obstruction_insets(
            container,
            options.surrounding_elements,
            options.padding_px,
            options.span_tolerance_px,
        );
        let visible = shrink(container, insets)?;
        Some(Self {
            container,
            insets,
            visible,
        })
    }
}

fn shrink(container: Rect, insets: Insets) -> Option<Rect> {
    let visible = container - insets;
    if visible.x1 <= visible.x0 || visible.y1 <= visible.y0 {
        tracing::debug!(
            ?insets,
            width = container.width(),
            height = container.height(),
            "viewport fully obscured"
        );
        return None;
    }
    Some(visible)
}

/// Pixel rectangle of `container` left visible by padding and obstructions.
///
/// Each edge is inset by `padding_px` or by the deepest obstruction
/// attributed to it, whichever is larger. Obstructions that do not overlap
/// the container are ignored. Returns `None` when nothing remains visible.
#[must_use]
pub fn visible_pixel_rect<O: Obstruction>(
    container: Rect,
    obstructions: &[O],
    padding_px: f64,
) -> Option<Rect> {
    let container = container.abs();
    let insets = obstruction_insets(
        container,
        obstructions,
        padding_px,
        DEFAULT_SPAN_TOLERANCE_PX,
    );
    shrink(container, insets)
}

/// Geographic extent of the part of the map left visible by the options'
/// padding and surrounding elements.
///
/// Returns `None` when the viewport is fully obscured.
#[must_use]
pub fn calculate_padded_bbox<M, O>(options: &PaddingOptions<'_, M, O>) -> Option<BBox>
where
    M: MapView + ?Sized,
    O: Obstruction,
{
    let view = PaddedView::capture(options)?;
    let north_west = options.map.unproject(view.visible.origin());
    let south_east = options
        .map
        .unproject(Point::new(view.visible.x1, view.visible.y1));
    Some(BBox::new(
        north_west.lng,
        south_east.lat,
        south_east.lng,
        north_west.lat,
    ))
}

/// Geographic position at the center of the visible part of the map.
///
/// Returns `None` when the viewport is fully obscured.
#[must_use]
pub fn calculate_padded_center<M, O>(options: &PaddingOptions<'_, M, O>) -> Option<Position>
where
    M: MapView + ?Sized,
    O: Obstruction,
{
    let view = PaddedView::capture(options)?;
    Some(options.map.unproject(view.visible.center()).into())
}

/// Extent to hand to a plain "fit bounds" so that `to_be_contained` ends up
/// in the visible part of the map.
///
/// Each edge of `to_be_contained` with a non‑zero inset is pushed outward by
/// the geographic distance that inset covers at the current view, measured
/// with [`MapView::unproject`] along the container's center line. Edges with
/// no padding and no obstruction are left alone.
///
/// The conversion is a local linearization: it is accurate when the fit does
/// not change the zoom much and the insets are small to moderate, and it
/// degrades near the poles and for very large insets.
///
/// Returns `None` when the options leave nothing visible, since no extent
/// could then be shown.
#[must_use]
pub fn calculate_fitting_bbox<M, O>(
    options: &PaddingOptions<'_, M, O>,
    to_be_contained: BBox,
) -> Option<BBox>
where
    M: MapView + ?Sized,
    O: Obstruction,
{
    let PaddedView {
        container: c,
        insets,
        ..
    } = PaddedView::capture(options)?;
    let map = options.map;
    let mid = c.center();

    let mut fitting = to_be_contained;
    if insets.x0 > 0.0 {
        fitting.west -= lng_span(map, c.x0, c.x0 + insets.x0, mid.y);
    }
    if insets.x1 > 0.0 {
        fitting.east += lng_span(map, c.x1 - insets.x1, c.x1, mid.y);
    }
    if insets.y0 > 0.0 {
        fitting.north += lat_span(map, c.y0, c.y0 + insets.y0, mid.x);
    }
    if insets.y1 > 0.0 {
        fitting.south -= lat_span(map, c.y1 - insets.y1, c.y1, mid.x);
    }
    Some(fitting)
}

/// Longitude covered between two x positions on the row at `y`.
fn lng_span<M: MapView + ?Sized>(map: &M, x_from: f64, x_to: f64, y: f64) -> f64 {
    let a = map.unproject(Point::new(x_from, y)).lng;
    let b = map.unproject(Point::new(x_to, y)).lng;
    a.max(b) - a.min(b)
}

/// Latitude covered between two y positions on the column at `x`.
fn lat_span<M: MapView + ?Sized>(map: &M, y_from: f64, y_to: f64, x: f64) -> f64 {
    let a = map.unproject(Point::new(x, y_from)).lat;
    let b = map.unproject(Point::new(x, y_to)).lat;
    a.max(b) - a.min(b)
}
