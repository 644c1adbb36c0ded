// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Errors raised when raw coordinate arrays cannot describe a position or a box.
///
/// These are caller errors: the algebra never coerces a malformed array into
/// a degenerate value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum BBoxError {
    /// A position array contained no numbers at all.
    #[error("cannot build a position from an empty coordinate array")]
    EmptyPosition,
    /// A position array contained a longitude but no latitude.
    #[error("position has a longitude but no latitude")]
    MissingLatitude,
    /// A bounding-box array contained fewer than four numbers.
    #[error("bounding box needs at least 4 numbers, got {len}")]
    TooShort {
        /// Number of values that were supplied.
        len: usize,
    },
}
