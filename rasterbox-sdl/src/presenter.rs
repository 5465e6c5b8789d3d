use anyhow::Error;
use log::debug;
use rasterbox_core::{Presenter, RawView, Result};
use sdl2::pixels::Color;
use sdl2::render::{Texture, WindowCanvas};

/// Shown wherever the texture doesn't cover the window
const CANVAS_CLEAR: Color = Color::RGBA(255, 0, 0, 1);

/// Uploads each frame into an ARGB8888 streaming texture and presents it.
pub struct SdlPresenter<'a> {
    canvas: &'a mut WindowCanvas,
    texture: Texture<'a>,
}

impl<'a> SdlPresenter<'a> {
    pub fn new(canvas: &'a mut WindowCanvas, texture: Texture<'a>) -> Self {
        Self { canvas, texture }
    }
}

impl Presenter for SdlPresenter<'_> {
    fn present(&mut self, frame: RawView<'_>) -> Result<()> {
        self.canvas.set_draw_color(CANVAS_CLEAR);
        self.canvas.clear();

        self.texture.update(None, frame.pixel_data, frame.pitch)?;
        self.canvas
            .copy(&self.texture, None, None)
            .map_err(Error::msg)?;
        self.canvas.present();

        Ok(())
    }

    fn teardown(&mut self) {
        debug!("Tearing down SDL presenter");
    }
}
