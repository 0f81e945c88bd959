use wasm_bindgen::JsValue;

use crate::domain::{
    errors::{AppError, BrowserResult},
    logging::{LogEntry, LogLevel, Logger, TimeProvider},
};

/// Console logger for the WASM environment
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    pub fn new_production() -> Self {
        Self::new(LogLevel::Info)
    }

    pub fn new_development() -> Self {
        Self::new(LogLevel::Debug)
    }

    pub fn format_log_entry(entry: &LogEntry, clock: &dyn TimeProvider) -> String {
        format!(
            "[{}] {} {} | {}",
            clock.format_timestamp(entry.timestamp),
            entry.level,
            entry.component,
            entry.message
        )
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, entry: LogEntry) {
        if entry.level < self.min_level {
            return;
        }
        let formatted: JsValue = Self::format_log_entry(&entry, &PerformanceClock).into();
        match entry.level {
            LogLevel::Debug => web_sys::console::debug_1(&formatted),
            LogLevel::Info => web_sys::console::info_1(&formatted),
            LogLevel::Warn => web_sys::console::warn_1(&formatted),
            LogLevel::Error => web_sys::console::error_1(&formatted),
        }
    }
}

/// High-resolution browser clock backed by `performance.now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PerformanceClock;

impl PerformanceClock {
    pub fn new() -> Self {
        Self
    }

    pub fn try_now(&self) -> BrowserResult<f64> {
        let window = web_sys::window()
            .ok_or_else(|| AppError::BrowserApiError("Window not available".to_string()))?;
        let performance = window
            .performance()
            .ok_or_else(|| AppError::BrowserApiError("Performance API not available".to_string()))?;
        Ok(performance.now())
    }
}

impl TimeProvider for PerformanceClock {
    /// Falls back to wall-clock time when `performance` is missing.
    fn now_ms(&self) -> f64 {
        self.try_now().unwrap_or_else(|_| js_sys::Date::now())
    }

    fn format_timestamp(&self, timestamp: f64) -> String {
        let total_ms = timestamp.max(0.0) as u64;
        let seconds = total_ms / 1000;
        format!(
            "{:02}:{:02}:{:02}.{:03}",
            seconds / 3600,
            (seconds / 60) % 60,
            seconds % 60,
            total_ms % 1000
        )
    }
}
