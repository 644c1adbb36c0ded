// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attribution of obstructions to container edges.
//!
//! Every obstruction that overlaps the container is clipped to it and
//! assigned to exactly one edge:
//! - An element spanning the full width and touching the top (or bottom)
//!   edge obstructs that edge; likewise an element spanning the full height
//!   and touching the left (or right) edge.
//! - A full-width element touching neither top nor bottom goes to whichever
//!   of the two it is closer to; a full-height one to the closer of left and
//!   right. Such a band never narrows the view in the direction it spans.
//! - Any other ("floating") element is assigned to the edge it is closest
//!   to. When two edges are equally close, the one that costs the smaller
//!   inset wins, then `Top`, `Bottom`, `Left`, `Right` in that order.
//!
//! The inset an element contributes is how far it reaches into the container
//! from its edge. Per edge, the deepest contribution wins; contributions are
//! not summed.

use kurbo::{Insets, Rect};

use crate::Obstruction;

/// Default slack, in pixels, used when deciding whether an element spans a
/// full container dimension or touches an edge.
pub const DEFAULT_SPAN_TOLERANCE_PX: f64 = 1.0;

/// One side of the map container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// The west side (minimum x).
    Left,
    /// The north side (minimum y in screen space).
    Top,
    /// The east side (maximum x).
    Right,
    /// The south side (maximum y in screen space).
    Bottom,
}

impl Edge {
    /// Order in which equally close edges are preferred.
    const TIE_BREAK_ORDER: [Self; 4] = [Self::Top, Self::Bottom, Self::Left, Self::Right];

    /// Gap between `element` and this edge of `container`.
    fn distance(self, container: Rect, element: Rect) -> f64 {
        match self {
            Self::Left => element.x0 - container.x0,
            Self::Top => element.y0 - container.y0,
            Self::Right => container.x1 - element.x1,
            Self::Bottom => container.y1 - element.y1,
        }
    }

    /// How far `element` reaches into `container` measured from this edge.
    fn reach(self, container: Rect, element: Rect) -> f64 {
        match self {
            Self::Left => element.x1 - container.x0,
            Self::Top => element.y1 - container.y0,
            Self::Right => container.x1 - element.x0,
            Self::Bottom => container.y1 - element.y0,
        }
    }

    fn slot(self, insets: &mut Insets) -> &mut f64 {
        match self {
            Self::Left => &mut insets.x0,
            Self::Top => &mut insets.y0,
            Self::Right => &mut insets.x1,
            Self::Bottom => &mut insets.y1,
        }
    }
}

/// The edge an obstruction is attributed to and the inset it demands there.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeInset {
    /// Obstructed edge.
    pub edge: Edge,
    /// Pixels, measured inward from `edge`, covered by the obstruction.
    pub depth: f64,
}

/// Attributes `element` to one edge of `container`.
///
/// Returns `None` when the element does not overlap the container at all
/// (including elements that only share a border with it).
#[must_use]
pub fn classify_obstruction(
    container: Rect,
    element: Rect,
    span_tolerance_px: f64,
) -> Option<EdgeInset> {
    let container = container.abs();
    let clipped = container.intersect(element.abs());
    if clipped.area() <= 0.0 {
        return None;
    }

    let tol = span_tolerance_px.max(0.0);
    let spans_width = clipped.width() >= container.width() - tol;
    let spans_height = clipped.height() >= container.height() - tol;
    let touches = |edge: Edge| edge.distance(container, clipped) <= tol;

    let edge = if spans_width && touches(Edge::Top) {
        Edge::Top
    } else if spans_width && touches(Edge::Bottom) {
        Edge::Bottom
    } else if spans_height && touches(Edge::Left) {
        Edge::Left
    } else if spans_height && touches(Edge::Right) {
        Edge::Right
    } else if spans_width {
        // A full-width band can only shorten the view vertically.
        closest_edge(container, clipped, tol, &[Edge::Top, Edge::Bottom])
    } else if spans_height {
        closest_edge(container, clipped, tol, &[Edge::Left, Edge::Right])
    } else {
        closest_edge(container, clipped, tol, &Edge::TIE_BREAK_ORDER)
    };

    let depth = edge.reach(container, clipped);
    tracing::trace!(?edge, depth, "classified obstruction");
    Some(EdgeInset { edge, depth })
}

/// Closest of `candidates` to `clipped`, listed in tie-break order.
fn closest_edge(container: Rect, clipped: Rect, tol: f64, candidates: &[Edge]) -> Edge {
    let mut best: Option<(Edge, f64, f64)> = None;
    for &edge in candidates {
        let distance = edge.distance(container, clipped);
        let reach = edge.reach(container, clipped);
        let better = match best {
            None => true,
            Some((_, best_distance, best_reach)) => {
                let tied = distance <= best_distance + tol && distance >= best_distance - tol;
                (!tied && distance < best_distance) || (tied && reach < best_reach)
            }
        };
        if better {
            best = Some((edge, distance, reach));
        }
    }
    best.map_or(Edge::Top, |(edge, ..)| edge)
}

/// Per‑edge insets of `container` after padding and obstructions.
///
/// Every edge starts at `padding_px` (negative or NaN padding counts as
/// zero) and is raised to the deepest obstruction attributed to it.
#[must_use]
pub fn obstruction_insets<O: Obstruction>(
    container: Rect,
    obstructions: &[O],
    padding_px: f64,
    span_tolerance_px: f64,
) -> Insets {
    let mut insets = Insets::uniform(padding_px.max(0.0));
    for obstruction in obstructions {
        let rect = obstruction.bounding_rect();
        let Some(inset) = classify_obstruction(container, rect, span_tolerance_px) else {
            tracing::debug!(?rect, "ignoring obstruction outside the map container");
            continue;
        };
        let slot = inset.edge.slot(&mut insets);
        *slot = slot.max(inset.depth);
    }
    insets
}
