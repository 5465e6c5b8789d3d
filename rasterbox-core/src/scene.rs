//! Frame content: a grid background with a house drawn over it.
//!
//! Every frame the draw list is recomputed from the layout, so there is no
//! state carried from one frame to the next.

use crate::error::{RasterError, RasterResult};
use crate::rasterizer::{Rect, draw_grid, draw_rect};
use crate::{Color, FrameBuffer};

pub const DEFAULT_CELL_SIZE: i32 = 10;

/// Position and size of the house body. Door, windows and chimney are derived
/// from these four numbers.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct HouseLayout {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Default for HouseLayout {
    fn default() -> Self {
        Self {
            x: 500,
            y: 500,
            width: 500,
            height: 300,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Palette {
    /// Buffer fill at the start of a frame
    pub clear: Color,
    /// Buffer fill once the frame has been presented
    pub next_frame_clear: Color,
    pub grid_line: Color,
    pub grid_background: Color,
    pub body: Color,
    pub door: Color,
    pub window: Color,
    pub chimney: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            clear: Color::BLACK,
            next_frame_clear: Color::YELLOW,
            grid_line: Color::GREY,
            grid_background: Color::BLACK,
            body: Color::new(0xff9e_774a),
            door: Color::new(0xffd6_984f),
            window: Color::new(0xff6f_e3df),
            chimney: Color::new(0xff8a_3838),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DrawCommand {
    Grid {
        cell_size: i32,
        line_color: Color,
        background_color: Color,
    },
    Rect(Rect),
}

impl DrawCommand {
    pub fn apply(&self, buffer: &mut FrameBuffer) -> RasterResult<()> {
        match self {
            Self::Grid {
                cell_size,
                line_color,
                background_color,
            } => draw_grid(buffer, *cell_size, *line_color, *background_color),
            Self::Rect(rect) => {
                draw_rect(buffer, rect);
                Ok(())
            }
        }
    }
}

/// Grid followed by body, door, left window, right window and chimney.
pub fn compose(layout: &HouseLayout, palette: &Palette, cell_size: i32) -> [DrawCommand; 6] {
    let HouseLayout {
        x,
        y,
        width,
        height,
    } = *layout;
    // saturating: a layout pushed to the i32 limits only ends up further off the buffer
    let third = height / 3;
    let opening = width / 5;
    let inset = width / 10;
    let openings_y = y.saturating_add(third);

    [
        DrawCommand::Grid {
            cell_size,
            line_color: palette.grid_line,
            background_color: palette.grid_background,
        },
        DrawCommand::Rect(Rect::new(x, y, width, height, palette.body)),
        DrawCommand::Rect(Rect::new(
            x.saturating_add(width / 2).saturating_sub(opening / 2),
            openings_y,
            opening,
            third * 2,
            palette.door,
        )),
        DrawCommand::Rect(Rect::new(
            x.saturating_add(inset),
            openings_y,
            opening,
            opening,
            palette.window,
        )),
        DrawCommand::Rect(Rect::new(
            x.saturating_add(width)
                .saturating_sub(inset)
                .saturating_sub(opening),
            openings_y,
            opening,
            opening,
            palette.window,
        )),
        DrawCommand::Rect(Rect::new(
            x.saturating_add(width / 4),
            y.saturating_sub(third),
            inset,
            third,
            palette.chimney,
        )),
    ]
}

#[derive(Debug, Copy, Clone)]
pub struct Scene {
    layout: HouseLayout,
    palette: Palette,
    cell_size: i32,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            layout: HouseLayout::default(),
            palette: Palette::default(),
            cell_size: DEFAULT_CELL_SIZE,
        }
    }
}

impl Scene {
    pub fn new(layout: HouseLayout, palette: Palette, cell_size: i32) -> RasterResult<Self> {
        if cell_size <= 0 {
            return Err(RasterError::InvalidParameter {
                name: "cell_size",
                value: cell_size.into(),
            });
        }

        Ok(Self {
            layout,
            palette,
            cell_size,
        })
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn commands(&self) -> [DrawCommand; 6] {
        compose(&self.layout, &self.palette, self.cell_size)
    }

    pub fn draw(&self, buffer: &mut FrameBuffer) -> RasterResult<()> {
        self.commands()
            .iter()
            .try_for_each(|command| command.apply(buffer))
    }
}
