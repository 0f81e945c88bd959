pub mod bench_session;

pub use bench_session::{BenchSession, FrameStatsSink, SharedProfiler, refresh_display, shared_profiler};
