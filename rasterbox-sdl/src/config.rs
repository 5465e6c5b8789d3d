use clap::Parser;
use rasterbox_core::HouseLayout;
use rasterbox_core::scene::DEFAULT_CELL_SIZE;

#[derive(Debug, Parser)]
#[command(about = "Draws a house on a grid with a software rasterizer")]
pub struct Config {
    /// Frame width in pixels; defaults to the width of the current display mode
    #[arg(long = "width")]
    pub width: Option<u32>,
    /// Frame height in pixels; defaults to the height of the current display mode
    #[arg(long = "height")]
    pub height: Option<u32>,
    #[arg(default_value_t = DEFAULT_CELL_SIZE, long = "cell-size")]
    pub cell_size: i32,
    #[arg(default_value = "500", long = "house-x", allow_negative_numbers = true)]
    pub house_x: i32,
    #[arg(default_value = "500", long = "house-y", allow_negative_numbers = true)]
    pub house_y: i32,
    #[arg(default_value = "500", long = "house-width")]
    pub house_width: i32,
    #[arg(default_value = "300", long = "house-height")]
    pub house_height: i32,
    #[arg(default_value = "", long = "title")]
    pub title: String,
}

impl Config {
    pub fn layout(&self) -> HouseLayout {
        HouseLayout {
            x: self.house_x,
            y: self.house_y,
            width: self.house_width,
            height: self.house_height,
        }
    }

    /// Frame size: command line overrides first, display mode otherwise.
    pub fn resolution(&self, display_width: u32, display_height: u32) -> (u32, u32) {
        (
            self.width.unwrap_or(display_width),
            self.height.unwrap_or(display_height),
        )
    }
}
