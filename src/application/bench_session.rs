use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::{
    config::ProfilerConfig,
    errors::AppError,
    frame_timing::{FrameTimes, FrameTimestamp, PercentileProfiler, ProfilerState, RefreshCadence},
    logging::{LogComponent, get_logger},
};
use crate::log_debug;

/// Handle shared between the render-loop callback and a UI-refresh callback
/// running on the same event turn.
pub type SharedProfiler = Rc<RefCell<PercentileProfiler>>;

pub fn shared_profiler(profiler: PercentileProfiler) -> SharedProfiler {
    Rc::new(RefCell::new(profiler))
}

/// Receiver of freshly derived statistics (UI element, telemetry, test recorder).
pub trait FrameStatsSink {
    fn publish(&mut self, times: &FrameTimes) -> Result<(), AppError>;
}

impl<F> FrameStatsSink for F
where
    F: FnMut(&FrameTimes),
{
    fn publish(&mut self, times: &FrameTimes) -> Result<(), AppError> {
        self(times);
        Ok(())
    }
}

/// Derive a snapshot from `profiler` and hand it to `sink`.
///
/// This is the body of a UI-refresh callback; the profiler is passed in
/// explicitly rather than looked up from global state.
pub fn refresh_display<S: FrameStatsSink + ?Sized>(
    profiler: &SharedProfiler,
    sink: &mut S,
) -> Result<FrameTimes, AppError> {
    let times = profiler.borrow().current_data();
    sink.publish(&times)?;
    Ok(times)
}

/// Drives a profiler from the render loop and publishes statistics at a
/// bounded cadence.
pub struct BenchSession<S: FrameStatsSink> {
    profiler: SharedProfiler,
    cadence: RefreshCadence,
    sink: S,
    latest: Option<FrameTimes>,
}

impl<S: FrameStatsSink> BenchSession<S> {
    pub fn new(config: &ProfilerConfig, sink: S) -> Result<Self, AppError> {
        let profiler = PercentileProfiler::from_config(config)?;
        Ok(Self::with_parts(
            shared_profiler(profiler),
            RefreshCadence::new(config.refresh_interval_ms),
            sink,
        ))
    }

    pub fn with_parts(profiler: SharedProfiler, cadence: RefreshCadence, sink: S) -> Self {
        get_logger().info(
            LogComponent::Application("BenchSession"),
            &format!("Bench session started, window of {} frames", profiler.borrow().capacity()),
        );
        Self { profiler, cadence, sink, latest: None }
    }

    /// Feed one frame timestamp. Returns `true` when a snapshot was published.
    pub fn on_frame(&mut self, now: f64) -> bool {
        let duration = {
            let mut profiler = self.profiler.borrow_mut();
            let duration = match profiler.state() {
                ProfilerState::Running { previous } => {
                    Some(FrameTimestamp::from_millis(now).duration_since(previous))
                }
                ProfilerState::Uninitialized => None,
            };
            profiler.update(now);
            duration
        };

        match duration {
            Some(duration) if FrameTimestamp::from_millis(now).is_valid() => {
                self.cadence.tick(duration) && self.publish_now()
            }
            _ => false,
        }
    }

    /// Publish immediately regardless of cadence.
    pub fn refresh(&mut self) -> FrameTimes {
        self.cadence.restart();
        self.publish_now();
        self.latest.unwrap_or_default()
    }

    fn publish_now(&mut self) -> bool {
        match refresh_display(&self.profiler, &mut self.sink) {
            Ok(times) => {
                log_debug!(LogComponent::Application("BenchSession"), "published {}", times);
                self.latest = Some(times);
                true
            }
            Err(e) => {
                get_logger().warn(
                    LogComponent::Application("BenchSession"),
                    &format!("Display refresh failed: {}", e),
                );
                false
            }
        }
    }

    /// Most recently published snapshot; earlier ones are not kept.
    pub fn latest(&self) -> Option<FrameTimes> {
        self.latest
    }

    pub fn profiler(&self) -> SharedProfiler {
        Rc::clone(&self.profiler)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn reset(&mut self) {
        self.profiler.borrow_mut().reset();
        self.cadence.restart();
        self.latest = None;
    }
}
