use wasm_bindgen::prelude::*;

use super::display::{FpsReport, PageDisplay};
use crate::application::{BenchSession, SharedProfiler, shared_profiler};
use crate::domain::{
    config::ProfilerConfig,
    frame_timing::{FrameTimes, PercentileProfiler, RefreshCadence},
    logging::{LogComponent, get_logger},
};
use crate::infrastructure::PerformanceClock;

/// Frame-pacing profiler exposed to JavaScript.
///
/// The render loop calls `update(performance.now())` (or `tick()`) once per
/// frame. Every `refresh_interval_ms` of accumulated frame time a snapshot is
/// derived; `attachDisplay()` makes those snapshots land in the stats elements,
/// and `latestData()` returns the most recent one. `current_data()` always
/// recomputes on demand.
#[wasm_bindgen]
pub struct Bencher {
    session: BenchSession<PageDisplay>,
    config: ProfilerConfig,
    clock: PerformanceClock,
}

#[wasm_bindgen]
impl Bencher {
    #[wasm_bindgen(constructor)]
    pub fn new(capacity: Option<usize>) -> Bencher {
        let mut config = ProfilerConfig::default();
        if let Some(capacity) = capacity {
            config.sample_capacity = capacity.max(1);
        }
        Self::with_config(config)
    }

    /// Build from a JSON config; omitted fields take their defaults.
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: &str) -> Result<Bencher, JsValue> {
        let config = ProfilerConfig::from_json(json)?;
        Ok(Self::with_config(config))
    }

    /// Record one frame. Returns `true` when the frame completed a refresh
    /// interval and a new snapshot was published.
    pub fn update(&mut self, now: f64) -> bool {
        self.session.on_frame(now)
    }

    /// `update` with the current `performance.now()` reading.
    pub fn tick(&mut self) -> Result<bool, JsValue> {
        let now = self.clock.try_now()?;
        Ok(self.update(now))
    }

    pub fn current_data(&self) -> FrameTimes {
        self.session.profiler().borrow().current_data()
    }

    /// Snapshot from the last completed refresh interval, if any.
    #[wasm_bindgen(js_name = latestData)]
    pub fn latest_data(&self) -> Option<FrameTimes> {
        self.session.latest()
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }

    pub fn sample_count(&self) -> usize {
        self.session.profiler().borrow().sample_count()
    }

    pub fn capacity(&self) -> usize {
        self.session.profiler().borrow().capacity()
    }

    /// Formatted frame rates as a JSON object.
    pub fn fps_report(&self) -> Result<String, JsValue> {
        let report = FpsReport::from_times(&self.current_data(), self.config.fps_decimals);
        Ok(report.to_json()?)
    }

    /// Write the current statistics into the stats elements now, then again
    /// at every refresh interval until detached.
    #[wasm_bindgen(js_name = attachDisplay)]
    pub fn attach_display(&mut self) {
        self.session.sink_mut().attach();
        self.session.refresh();
    }

    #[wasm_bindgen(js_name = detachDisplay)]
    pub fn detach_display(&mut self) {
        self.session.sink_mut().detach();
    }

    #[wasm_bindgen(js_name = isDisplayAttached)]
    pub fn is_display_attached(&self) -> bool {
        self.session.sink().is_attached()
    }
}

impl Bencher {
    pub fn with_config(config: ProfilerConfig) -> Bencher {
        get_logger().info(
            LogComponent::Presentation("Bencher"),
            &format!(
                "Bencher created: {} frame window, refresh every {}ms of frame time",
                config.sample_capacity, config.refresh_interval_ms
            ),
        );
        let session = BenchSession::with_parts(
            shared_profiler(PercentileProfiler::with_capacity(config.sample_capacity)),
            RefreshCadence::new(config.refresh_interval_ms),
            PageDisplay::new(config.fps_decimals),
        );
        Bencher { session, config, clock: PerformanceClock::new() }
    }

    pub fn config(&self) -> &ProfilerConfig {
        &self.config
    }

    pub fn profiler(&self) -> SharedProfiler {
        self.session.profiler()
    }
}
