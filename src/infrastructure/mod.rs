pub mod services;

pub use services::{ConsoleLogger, PerformanceClock};
