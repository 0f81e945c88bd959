pub mod config;
pub mod errors;
pub mod frame_timing;
pub mod logging;
