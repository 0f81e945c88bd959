use std::str::FromStr;
use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, LogLevel, get_logger};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use domain::frame_timing::{FrameSampler, FrameTimes, PercentileProfiler};
pub use presentation::Bencher;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    domain::logging::init_time_provider(Box::new(infrastructure::PerformanceClock::new()));
}

/// Register the console logger. `log_level` is one of debug/info/warn/error;
/// when omitted, debug builds log at DEBUG and release builds at INFO.
#[wasm_bindgen]
pub fn initialize(log_level: Option<String>) -> Result<(), JsValue> {
    let logger = match log_level {
        Some(level) => {
            let level = LogLevel::from_str(&level)
                .map_err(|_| JsValue::from_str(&format!("unknown log level '{}'", level)))?;
            infrastructure::ConsoleLogger::new(level)
        }
        None if cfg!(debug_assertions) => infrastructure::ConsoleLogger::new_development(),
        None => infrastructure::ConsoleLogger::new_production(),
    };
    domain::logging::init_logger(Box::new(logger));

    get_logger().info(LogComponent::Presentation("Initialize"), "Frame bench initialized");
    Ok(())
}
