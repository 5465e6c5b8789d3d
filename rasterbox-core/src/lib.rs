pub mod color;
pub mod error;
pub mod frame_buffer;
pub mod frame_loop;
pub mod rasterizer;
pub mod scene;

pub use anyhow::{Error, Result};
pub use color::Color;
pub use error::{RasterError, RasterResult};
pub use frame_buffer::{FrameBuffer, RawView};
pub use frame_loop::{FrameLoop, InputSource, LoopState, Presenter};
pub use rasterizer::{Rect, draw_grid, draw_rect};
pub use scene::{DrawCommand, HouseLayout, Palette, Scene};

pub type Byte = u8;
