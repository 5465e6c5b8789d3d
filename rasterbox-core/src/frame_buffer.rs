use crate::error::{RasterError, RasterResult};
use crate::{Byte, Color};
use log::debug;
use std::ops::Range;

const BYTES_PER_PIXEL: usize = 4;

/// Read-only handoff of a finished frame to the presenter.
#[derive(Debug, Copy, Clone)]
pub struct RawView<'a> {
    /// Rows of native-endian ARGB8888 pixels, top to bottom
    pub pixel_data: &'a [Byte],
    /// Length of one row in bytes
    pub pitch: usize,
}

/// CPU-side pixel storage addressed in row-major order.
///
/// Cell `(x, y)` lives at linear index `y * width + x`. Writes that miss the
/// buffer are dropped without touching neighbouring cells.
#[derive(Debug)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixel_data: Vec<Byte>,
}

impl FrameBuffer {
    pub fn allocate(width: i32, height: i32) -> RasterResult<Self> {
        let allocation_error = || RasterError::Allocation { width, height };

        let columns = usize::try_from(width)
            .ok()
            .filter(|&columns| columns > 0)
            .ok_or_else(allocation_error)?;
        let rows = usize::try_from(height)
            .ok()
            .filter(|&rows| rows > 0)
            .ok_or_else(allocation_error)?;
        let len = columns
            .checked_mul(rows)
            .and_then(|cells| cells.checked_mul(BYTES_PER_PIXEL))
            .ok_or_else(allocation_error)?;

        let mut pixel_data = Vec::new();
        pixel_data
            .try_reserve_exact(len)
            .map_err(|_| allocation_error())?;
        pixel_data.resize(len, 0);

        debug!("Allocated {columns}x{rows} frame buffer ({len} bytes)");

        Ok(Self {
            width: columns,
            height: rows,
            pixel_data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn pitch(&self) -> usize {
        self.width * BYTES_PER_PIXEL
    }

    pub fn write(&mut self, x: i32, y: i32, color: Color) {
        if let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) {
            self.set_pixel(x, y, color);
        }
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        if let Some(base) = self.offset(x, y) {
            self.pixel_data[base..base + BYTES_PER_PIXEL]
                .copy_from_slice(&color.argb().to_ne_bytes());
        }
    }

    pub fn read(&self, x: i32, y: i32) -> Option<Color> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;

        self.pixel(x, y)
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        let base = self.offset(x, y)?;
        let bytes = self.pixel_data[base..base + BYTES_PER_PIXEL]
            .try_into()
            .ok()?;

        Some(Color::new(u32::from_ne_bytes(bytes)))
    }

    /// All cells in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = Color> + '_ {
        self.pixel_data
            .chunks_exact(BYTES_PER_PIXEL)
            .map(|bytes| {
                Color::new(u32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
            })
    }

    pub fn fill(&mut self, color: Color) {
        let bytes = color.argb().to_ne_bytes();

        for pixel in self.pixel_data.chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel.copy_from_slice(&bytes);
        }
    }

    /// Paints `columns` of row `y`. Columns past the right edge are cut off.
    pub fn fill_span(&mut self, y: usize, columns: Range<usize>, color: Color) {
        if y >= self.height {
            return;
        }

        let start = columns.start.min(self.width);
        let end = columns.end.min(self.width);
        if start >= end {
            return;
        }

        let row_base = y * self.pitch();
        let span = &mut self.pixel_data
            [row_base + start * BYTES_PER_PIXEL..row_base + end * BYTES_PER_PIXEL];
        let bytes = color.argb().to_ne_bytes();

        for pixel in span.chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel.copy_from_slice(&bytes);
        }
    }

    pub fn raw_view(&self) -> RawView<'_> {
        RawView {
            pixel_data: &self.pixel_data,
            pitch: self.pitch(),
        }
    }

    pub fn release(self) {
        debug!("Releasing {}x{} frame buffer", self.width, self.height);
    }

    fn offset(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }

        Some((y * self.width + x) * BYTES_PER_PIXEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    const MAGENTA: Color = Color::new(0xffff_00ff);

    fn buffer_20x20() -> FrameBuffer {
        FrameBuffer::allocate(20, 20).expect("20x20 buffer")
    }

    #[test]
    fn allocates_zeroed_storage() {
        let buffer = FrameBuffer::allocate(8, 3).unwrap();

        assert_eq!((8, 3), (buffer.width(), buffer.height()));
        assert_eq!(24, buffer.len());
        assert_eq!(8 * 3 * 4, buffer.raw_view().pixel_data.len());
        assert!(buffer.pixels().all(|pixel| pixel == Color::new(0)));
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        for (width, height) in [(0, 10), (10, 0), (-1, 10), (10, -7), (0, 0)] {
            assert_matches!(
                FrameBuffer::allocate(width, height),
                Err(RasterError::Allocation { width: w, height: h }) if w == width && h == height
            );
        }
    }

    #[test]
    fn rejects_unsatisfiable_allocation() {
        assert_matches!(
            FrameBuffer::allocate(i32::MAX, i32::MAX),
            Err(RasterError::Allocation { .. })
        );
    }

    #[test]
    fn write_then_read_round_trips_everywhere() {
        let mut buffer = FrameBuffer::allocate(7, 5).unwrap();

        for y in 0..5u8 {
            for x in 0..7u8 {
                let color = Color::new(0xff10_0000 | u32::from(y) << 8 | u32::from(x));
                buffer.write(x.into(), y.into(), color);

                assert_eq!(Some(color), buffer.read(x.into(), y.into()));
            }
        }
    }

    #[test]
    fn cell_lives_at_row_major_index() {
        let mut buffer = FrameBuffer::allocate(4, 3).unwrap();
        buffer.write(1, 2, MAGENTA);

        let index = buffer.pixels().position(|pixel| pixel == MAGENTA);

        assert_eq!(Some(2 * 4 + 1), index);
    }

    #[test]
    fn out_of_bounds_writes_are_dropped() {
        let mut buffer = buffer_20x20();
        buffer.fill(Color::BLACK);

        let misses = [
            (-1, 0),
            (0, -1),
            (20, 0),
            (0, 20),
            (20, 19),
            (-1, -1),
            (i32::MAX, i32::MIN),
        ];

        for (x, y) in misses {
            buffer.write(x, y, MAGENTA);
            assert_eq!(None, buffer.read(x, y));
        }

        assert!(buffer.pixels().all(|pixel| pixel == Color::BLACK));
    }

    #[test]
    fn write_past_row_end_does_not_wrap() {
        let mut buffer = FrameBuffer::allocate(4, 4).unwrap();
        buffer.write(4, 0, MAGENTA);

        assert_eq!(Some(Color::new(0)), buffer.read(0, 1));
    }

    #[test]
    fn fill_sets_every_cell() {
        let mut buffer = buffer_20x20();
        buffer.write(3, 3, MAGENTA);
        buffer.fill(Color::YELLOW);

        let yellow = buffer
            .pixels()
            .filter(|&pixel| pixel == Color::YELLOW)
            .count();

        assert_eq!(400, yellow);
    }

    #[test]
    fn fill_span_is_cut_at_the_right_edge() {
        let mut buffer = FrameBuffer::allocate(6, 2).unwrap();
        buffer.fill_span(1, 3..50, MAGENTA);
        buffer.fill_span(2, 0..6, MAGENTA);

        let row: Vec<_> = (0..6).map(|x| buffer.pixel(x, 1).unwrap()).collect();
        let zero = Color::new(0);

        assert_eq!(vec![zero, zero, zero, MAGENTA, MAGENTA, MAGENTA], row);
        assert!((0..6).all(|x| buffer.pixel(x, 0) == Some(zero)));
    }

    #[test]
    fn raw_view_exposes_native_endian_rows() {
        let mut buffer = FrameBuffer::allocate(3, 2).unwrap();
        buffer.write(2, 1, MAGENTA);
        let view = buffer.raw_view();

        assert_eq!(12, view.pitch);
        assert_eq!(
            &MAGENTA.argb().to_ne_bytes()[..],
            &view.pixel_data[view.pitch + 8..view.pitch + 12]
        );
    }
}
