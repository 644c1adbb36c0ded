// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{BBox, LineString, Position};

/// Upper bound on the number of strided samples [`quick_bbox_from_coordinates`]
/// scans, whatever the input length.
pub const QUICK_BBOX_MAX_SAMPLES: usize = 1000;

/// Approximate extent of a possibly very long coordinate run.
///
/// Samples every `ceil(len / 1000)`th position starting at the first, and
/// always includes the last one, so both endpoints of a route or polyline are
/// represented. Extremes that fall between samples can be missed; use
/// [`bbox_from_coordinates`] when the extent has to be exact.
///
/// Returns `None` for an empty slice.
#[must_use]
pub fn quick_bbox_from_coordinates(coordinates: &[Position]) -> Option<BBox> {
    let (first, rest) = coordinates.split_first()?;
    let stride = coordinates.len().div_ceil(QUICK_BBOX_MAX_SAMPLES);

    let mut bbox = BBox::from_position(*first);
    // `rest` starts at index 1, so the next sample sits at `stride - 1` in it.
    for position in rest.iter().skip(stride - 1).step_by(stride) {
        bbox = bbox.expand_with_position(*position);
    }

    if stride > 1 {
        tracing::trace!(len = coordinates.len(), stride, "sampled coordinate extent");
        if let Some(last) = rest.last() {
            bbox = bbox.expand_with_position(*last);
        }
    }
    Some(bbox)
}

/// Approximate extent of `line_string`.
///
/// Samples the coordinates with [`quick_bbox_from_coordinates`]. A declared
/// `bbox` on the line string is not consulted, since it may be stale.
#[must_use]
pub fn quick_bbox_from_line_string(line_string: Option<&LineString>) -> Option<BBox> {
    line_string.and_then(|line| quick_bbox_from_coordinates(&line.coordinates))
}

/// Exact extent of `coordinates`, scanning every position.
///
/// Returns `None` for an empty slice.
#[must_use]
pub fn bbox_from_coordinates(coordinates: &[Position]) -> Option<BBox> {
    let (first, rest) = coordinates.split_first()?;
    Some(
        rest.iter()
            .fold(BBox::from_position(*first), |bbox, position| {
                bbox.expand_with_position(*position)
            }),
    )
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::{bbox_from_coordinates, quick_bbox_from_coordinates, quick_bbox_from_line_string};
    use crate::{BBox, LineString, Position};

    fn diagonal(len: usize) -> Vec<Position> {
        (0..len)
            .map(|i| Position::new(i as f64, -(i as f64)))
            .collect()
    }

    #[test]
    fn empty_input_has_no_extent() {
        assert_eq!(quick_bbox_from_coordinates(&[]), None);
        assert_eq!(bbox_from_coordinates(&[]), None);
        assert_eq!(quick_bbox_from_line_string(None), None);
        assert_eq!(quick_bbox_from_line_string(Some(&LineString::default())), None);
    }

    #[test]
    fn single_position_is_degenerate() {
        let coords = [Position::new(7.0, 45.0)];
        assert_eq!(
            quick_bbox_from_coordinates(&coords),
            Some(BBox::new(7.0, 45.0, 7.0, 45.0))
        );
    }

    #[test]
    fn short_runs_are_scanned_exactly() {
        let mut coords = diagonal(1000);
        coords[500] = Position::new(5000.0, 5000.0);
        assert_eq!(
            quick_bbox_from_coordinates(&coords),
            bbox_from_coordinates(&coords)
        );
    }

    #[test]
    fn last_position_is_included_off_stride() {
        // 2501 points gives a stride of 3; index 2500 is not a multiple of it.
        let coords = diagonal(2501);
        let bbox = quick_bbox_from_coordinates(&coords).unwrap();
        assert_eq!(bbox, BBox::new(0.0, -2500.0, 2500.0, 0.0));
    }

    #[test]
    fn spikes_between_samples_can_be_missed() {
        let mut coords = diagonal(10_000);
        // Stride is 10; index 5 is never sampled.
        coords[5] = Position::new(-1.0e6, 1.0e6);
        let quick = quick_bbox_from_coordinates(&coords).unwrap();
        let exact = bbox_from_coordinates(&coords).unwrap();
        assert_eq!(quick, BBox::new(0.0, -9999.0, 9999.0, 0.0));
        assert_eq!(exact, BBox::new(-1.0e6, -9999.0, 9999.0, 1.0e6));
    }

    #[test]
    fn line_string_ignores_declared_extent() {
        let mut line = LineString::new(vec![Position::new(0.0, 0.0), Position::new(10.0, 5.0)]);
        line.bbox = Some(BBox::new(100.0, 100.0, 101.0, 101.0));
        assert_eq!(
            quick_bbox_from_line_string(Some(&line)),
            Some(BBox::new(0.0, 0.0, 10.0, 5.0))
        );
        assert_eq!(
            quick_bbox_from_line_string(Some(&line)),
            quick_bbox_from_coordinates(&line.coordinates)
        );
    }
}
