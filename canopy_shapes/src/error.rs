// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Geometry rejected at construction time.
///
/// Shapes validate their input once, when they are built, so hit testing and
/// transforms never have to deal with degenerate geometry.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ShapeError {
    /// A polygon needs at least three vertices to enclose an area.
    #[error("polygon needs at least 3 vertices, got {count}")]
    TooFewVertices {
        /// Number of vertices supplied.
        count: usize,
    },

    /// A coordinate or extent was NaN or infinite.
    #[error("geometry contains a non-finite value")]
    NonFinite,

    /// A circle was given a negative radius.
    #[error("radius must not be negative, got {radius}")]
    NegativeRadius {
        /// The rejected radius.
        radius: f64,
    },

    /// A rectangle-like shape was given a negative width or height.
    #[error("size must not be negative, got {width}x{height}")]
    NegativeSize {
        /// The rejected width.
        width: f64,
        /// The rejected height.
        height: f64,
    },
}

pub(crate) fn check_point(pt: kurbo::Point) -> Result<(), ShapeError> {
    if pt.is_finite() {
        Ok(())
    } else {
        Err(ShapeError::NonFinite)
    }
}

pub(crate) fn check_rect(rect: kurbo::Rect) -> Result<(), ShapeError> {
    if !rect.is_finite() {
        return Err(ShapeError::NonFinite);
    }
    if rect.width() < 0.0 || rect.height() < 0.0 {
        return Err(ShapeError::NegativeSize {
            width: rect.width(),
            height: rect.height(),
        });
    }
    Ok(())
}
