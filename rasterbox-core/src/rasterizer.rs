//! Primitives that paint into a [`FrameBuffer`].
//!
//! Geometry falling outside the buffer is clipped away silently. Nothing is
//! blended: the last primitive to touch a cell decides its color.

use crate::error::{RasterError, RasterResult};
use crate::{Color, FrameBuffer};
use std::ops::Range;

/// Axis-aligned filled rectangle
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub color: Color,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32, color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            color,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Columns and rows of a `width`x`height` surface covered by the rectangle.
    /// `None` when nothing is visible.
    pub fn clip(&self, width: usize, height: usize) -> Option<(Range<usize>, Range<usize>)> {
        let columns = clip_axis(self.x, self.width, width)?;
        let rows = clip_axis(self.y, self.height, height)?;

        Some((columns, rows))
    }
}

fn clip_axis(origin: i32, extent: i32, limit: usize) -> Option<Range<usize>> {
    // i64 so that origin + extent can't overflow
    let origin = i64::from(origin);
    let start = origin.max(0);
    let end = (origin + i64::from(extent)).min(i64::try_from(limit).ok()?);

    if start >= end {
        return None;
    }

    Some(usize::try_from(start).ok()?..usize::try_from(end).ok()?)
}

/// Paints the whole buffer with `background_color`, except for the cells where
/// both `x + 1` and `y + 1` are multiples of `cell_size`, which get `line_color`.
pub fn draw_grid(
    buffer: &mut FrameBuffer,
    cell_size: i32,
    line_color: Color,
    background_color: Color,
) -> RasterResult<()> {
    let period = usize::try_from(cell_size)
        .ok()
        .filter(|&period| period > 0)
        .ok_or(RasterError::InvalidParameter {
            name: "cell_size",
            value: cell_size.into(),
        })?;

    for y in 0..buffer.height() {
        let row_is_line = (y + 1) % period == 0;

        for x in 0..buffer.width() {
            let color = if row_is_line && (x + 1) % period == 0 {
                line_color
            } else {
                background_color
            };
            buffer.set_pixel(x, y, color);
        }
    }

    Ok(())
}

pub fn draw_rect(buffer: &mut FrameBuffer, rect: &Rect) {
    if rect.is_empty() {
        return;
    }

    let Some((columns, rows)) = rect.clip(buffer.width(), buffer.height()) else {
        return;
    };

    for y in rows {
        buffer.fill_span(y, columns.clone(), rect.color);
    }
}
