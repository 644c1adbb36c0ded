// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sightline Viewport: what part of a map is visible around UI chrome.
//!
//! A map is usually drawn in a container that other UI overlaps: headers,
//! sidebars, legends, zoom buttons. This crate answers two questions about
//! such a map:
//! - **Forward:** given the container and the panels covering it, which
//!   geographic region is actually visible? See [`calculate_padded_bbox`] and
//!   [`calculate_padded_center`].
//! - **Inverse:** given a region that must stay visible despite those panels,
//!   which larger region should a plain "fit bounds" be asked to show? See
//!   [`calculate_fitting_bbox`].
//!
//! Both rest on the same pixel‑space step: every panel overlapping the
//! container is attributed to one container edge ([`classify_obstruction`]),
//! each edge is inset by the deepest panel attributed to it or by the uniform
//! padding, whichever is larger ([`obstruction_insets`]), and what remains is
//! the visible rectangle ([`visible_pixel_rect`]). When nothing remains, the
//! operations return `None`.
//!
//! The map itself is a collaborator behind [`MapView`]: a container rect and
//! an `unproject` from pixels to [`LngLat`]. Panels are anything implementing
//! [`Obstruction`], including a plain [`kurbo::Rect`].
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use sightline_bbox::BBox;
//! use sightline_viewport::{
//!     LngLat, MapView, PaddingOptions, calculate_fitting_bbox, calculate_padded_bbox,
//! };
//!
//! /// 800x600 container, one degree per 10 pixels.
//! struct Map;
//!
//! impl MapView for Map {
//!     fn container_rect(&self) -> Rect {
//!         Rect::new(0.0, 0.0, 800.0, 600.0)
//!     }
//!     fn unproject(&self, pixel: Point) -> LngLat {
//!         LngLat::new(pixel.x / 10.0, (600.0 - pixel.y) / 10.0)
//!     }
//! }
//!
//! let sidebar = [Rect::new(0.0, 0.0, 200.0, 600.0)];
//! let options = PaddingOptions::new(&Map, &sidebar);
//!
//! // Everything west of 20°E sits under the sidebar.
//! assert_eq!(calculate_padded_bbox(&options), Some(BBox::new(20.0, 0.0, 80.0, 60.0)));
//!
//! // Ask the map to fit a wider box so the target lands right of the sidebar.
//! let target = BBox::new(30.0, 10.0, 50.0, 30.0);
//! let fitting = calculate_fitting_bbox(&options, target).unwrap();
//! assert_eq!(fitting, BBox::new(10.0, 10.0, 50.0, 30.0));
//! ```
//!
//! ## Design notes
//!
//! - Everything is axis‑aligned and top‑down: map rotation and pitch are not
//!   taken into account, and obstructions are treated as their bounding
//!   rectangles.
//! - Every operation reads the container once and performs all `unproject`
//!   calls in the same pass. Nothing is cached between calls, so they can run
//!   on every `moveend`/`resize` of the host map.
//! - [`calculate_fitting_bbox`] converts pixel insets to degrees at the
//!   current view; see its documentation for where that approximation holds.
//!
//! This crate is `no_std`.

#![no_std]

mod edges;
mod map;
mod options;
mod padding;

pub use edges::{
    DEFAULT_SPAN_TOLERANCE_PX, Edge, EdgeInset, classify_obstruction, obstruction_insets,
};
pub use map::{LngLat, MapView, Obstruction};
pub use options::PaddingOptions;
pub use padding::{
    calculate_fitting_bbox, calculate_padded_bbox, calculate_padded_center, visible_pixel_rect,
};
