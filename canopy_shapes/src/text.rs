// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::error::{ShapeError, check_point};
use crate::{DrawContext, Font, Painter, Shape};

/// Where text sits relative to its anchor along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// The anchor is at the left (or top) edge.
    #[default]
    Start,
    /// The anchor is at the middle.
    Center,
    /// The anchor is at the right (or bottom) edge.
    End,
}

impl TextAlign {
    fn offset(self, extent: f64) -> f64 {
        match self {
            Self::Start => 0.0,
            Self::Center => extent / 2.0,
            Self::End => extent,
        }
    }
}

/// A single line of text anchored at a world point. Its position is that
/// anchor.
///
/// Text is hit tested against the extent measured on its most recent draw,
/// so a string that has never been drawn only hits if an extent was given up
/// front with [`TextString::with_extent`]. Rotation is ignored.
#[derive(Clone, Debug, PartialEq)]
pub struct TextString {
    anchor: Point,
    text: String,
    font: Font,
    align: TextAlign,
    line_align: TextAlign,
    extent: Size,
}

impl TextString {
    /// Creates text at `anchor` in the default font, aligned top-left.
    pub fn new(anchor: impl Into<Point>, text: impl Into<String>) -> Result<Self, ShapeError> {
        Self::with_font(anchor, Font::default(), text)
    }

    /// Creates text at `anchor` in `font`, aligned top-left.
    pub fn with_font(
        anchor: impl Into<Point>,
        font: Font,
        text: impl Into<String>,
    ) -> Result<Self, ShapeError> {
        let anchor = anchor.into();
        check_point(anchor)?;
        if !font.size.is_finite() {
            return Err(ShapeError::NonFinite);
        }
        Ok(Self {
            anchor,
            text: text.into(),
            font,
            align: TextAlign::Start,
            line_align: TextAlign::Start,
            extent: Size::ZERO,
        })
    }

    /// Sets horizontal and vertical alignment relative to the anchor.
    #[must_use]
    pub fn aligned(mut self, align: TextAlign, line_align: TextAlign) -> Self {
        self.align = align;
        self.line_align = line_align;
        self
    }

    /// Seeds the measured extent, for hit testing before the first draw.
    #[must_use]
    pub fn with_extent(mut self, extent: Size) -> Self {
        self.extent = extent;
        self
    }

    /// Returns the text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the text. The extent is refreshed on the next draw.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Returns the font.
    #[must_use]
    pub fn font(&self) -> &Font {
        &self.font
    }

    /// Returns the last measured extent in world units.
    #[must_use]
    pub fn extent(&self) -> Size {
        self.extent
    }

    /// The world-space box the text occupies, given its alignment.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        let origin = Point::new(
            self.anchor.x - self.align.offset(self.extent.width),
            self.anchor.y - self.line_align.offset(self.extent.height),
        );
        Rect::from_origin_size(origin, self.extent)
    }
}

impl Shape for TextString {
    fn position(&self) -> Point {
        self.anchor
    }

    fn contains_point(&self, pt: Point) -> bool {
        let b = self.bounds();
        !(pt.x < b.x0 || pt.y < b.y0 || pt.x > b.x1 || pt.y > b.y1)
    }

    fn translate_by(&mut self, delta: Vec2) {
        self.anchor += delta;
    }

    fn rotate_around(&mut self, _pivot: Point, _radians: f64) {}

    fn resize_around(&mut self, pivot: Point, multiplier: f64) {
        self.anchor = Affine::scale_about(multiplier, pivot) * self.anchor;
        let m = multiplier.abs();
        self.font.size *= m;
        self.extent = Size::new(self.extent.width * m, self.extent.height * m);
    }

    fn draw<P: Painter + ?Sized>(&mut self, painter: &mut P, ctx: &DrawContext) {
        self.extent = painter.measure_text(&self.text, &self.font);
        let local = ctx.local_rect(self.bounds());
        painter.fill_text(
            local.origin(),
            &self.text,
            &self.font,
            1.0 / ctx.scale,
            ctx.style.foreground,
        );
    }
}
