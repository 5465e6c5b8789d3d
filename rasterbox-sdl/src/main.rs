mod app;
mod config;
mod input;
mod presenter;

use crate::app::App;
use crate::config::Config;
use clap::Parser;
use rasterbox_core::Result;

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::parse();
    let mut app = App::create(config)?;

    app.run()
}
