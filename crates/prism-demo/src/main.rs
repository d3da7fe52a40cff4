//! Rotating RGB triangle with live rotation-speed and brightness sliders.
//!
//! Press Escape or close the window to quit. `RUST_LOG` controls logging and
//! `PRISM_FONT` points at a `.ttf` used for the readouts.

mod app;
mod config;
mod controls;
mod driver;
mod fonts;

use anyhow::Context;
use prism_engine::device::GpuInit;
use prism_engine::logging::{init_logging, LoggingConfig};
use prism_engine::window::Runtime;

use crate::app::DemoApp;
use crate::config::DemoConfig;

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let config = DemoConfig::default();
    log::info!(
        "starting prism: speed {:.2} turns/s, brightness {:.2}",
        config.rotation_speed,
        config.brightness
    );

    let runtime = config.runtime_config();
    Runtime::run(runtime, GpuInit::default(), DemoApp::new(config)).context("prism demo failed")
}
