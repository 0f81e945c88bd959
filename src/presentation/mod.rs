pub mod display;
pub mod wasm_api;

pub use display::{DomStatsDisplay, FpsReport, PageDisplay, format_fps};
pub use wasm_api::Bencher;
