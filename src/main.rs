#![cfg_attr(all(not(debug_assertions), target_os = "windows"), windows_subsystem = "windows")]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

use std::env;

use anyhow::{Context, Result};
use hush::app::App;
use hush::config::Options;
use hush::constants::LOOP_TIME;
use hush::platform;
use tracing::info;

/// The main entry point of the application.
///
/// Sets up logging, loads assets and SDL, then runs the game loop until the player quits.
/// Startup failures (a missing asset, no audio device) end the process before the loop starts.
pub fn main() -> Result<()> {
    platform::init_console().context("Could not initialize console")?;

    let options = Options::parse(env::args().skip(1));
    let mut app = App::new(&options).context("Could not create app")?;

    info!(loop_time = ?LOOP_TIME, "Starting game loop");
    while app.run() {}

    info!("Exiting");
    Ok(())
}
