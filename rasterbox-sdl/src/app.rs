use crate::config::Config;
use crate::input::SdlInput;
use crate::presenter::SdlPresenter;
use anyhow::{Context, Error};
use log::{debug, info};
use rasterbox_core::{FrameLoop, Palette, Result, Scene};
use sdl2::EventPump;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::WindowCanvas;

pub struct App {
    config: Config,
    canvas: WindowCanvas,
    event_pump: EventPump,
    width: u32,
    height: u32,
}

impl App {
    pub fn create(config: Config) -> Result<Self> {
        let sdl_context = sdl2::init().map_err(Error::msg)?;
        let video_subsystem = sdl_context.video().map_err(Error::msg)?;

        let display_mode = video_subsystem
            .current_display_mode(0)
            .map_err(Error::msg)
            .context("Failed to query the current display mode")?;
        debug!(
            "Display mode: {}x{} @ {}Hz",
            display_mode.w, display_mode.h, display_mode.refresh_rate
        );

        let (width, height) = config.resolution(
            u32::try_from(display_mode.w)?,
            u32::try_from(display_mode.h)?,
        );

        let window = video_subsystem
            .window(&config.title, width, height)
            .position_centered()
            .borderless()
            .build()?;
        let canvas = window.into_canvas().build()?;
        let event_pump = sdl_context.event_pump().map_err(Error::msg)?;

        Ok(Self {
            config,
            canvas,
            event_pump,
            width,
            height,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        let scene = Scene::new(self.config.layout(), Palette::default(), self.config.cell_size)?;

        let creator = self.canvas.texture_creator();
        let texture =
            creator.create_texture_streaming(PixelFormatEnum::ARGB8888, self.width, self.height)?;

        let presenter = SdlPresenter::new(&mut self.canvas, texture);
        let mut input = SdlInput::new(&mut self.event_pump);
        let mut frame_loop = FrameLoop::new(presenter, scene);

        frame_loop.start(i32::try_from(self.width)?, i32::try_from(self.height)?)?;
        frame_loop.run(&mut input)?;

        info!("Presented {} frame(s)", frame_loop.frames_presented());

        Ok(())
    }
}
