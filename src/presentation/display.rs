use serde::Serialize;

use crate::application::FrameStatsSink;
use crate::domain::{
    errors::AppError,
    frame_timing::{FrameDuration, FrameTimes},
    logging::{LogComponent, get_logger},
};

pub const FPS_UNIT: &str = "fps";
/// Shown instead of a rate when there is no frame data yet.
pub const NO_DATA: &str = "--";

pub const AVG_ELEMENT_ID: &str = "avg_frame_time";
pub const ONE_PERCENT_ELEMENT_ID: &str = "one_percent_frame_time";
pub const TENTH_PERCENT_ELEMENT_ID: &str = "tenth_percent_frame_time";

/// Render a frame time as a rate, e.g. `16.0` -> `"62.500fps"`.
pub fn format_fps(duration_ms: f64, decimals: usize) -> String {
    match FrameDuration::from_millis(duration_ms).as_fps() {
        Some(fps) => format!("{:.*}{}", decimals, fps, FPS_UNIT),
        None => format!("{}{}", NO_DATA, FPS_UNIT),
    }
}

/// The three statistics rendered as display strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FpsReport {
    pub avg: String,
    pub one_percent_low: String,
    pub tenth_percent_low: String,
}

impl FpsReport {
    pub fn from_times(times: &FrameTimes, decimals: usize) -> Self {
        Self {
            avg: format_fps(times.avg_frame_time, decimals),
            one_percent_low: format_fps(times.one_percent_frame_time, decimals),
            tenth_percent_low: format_fps(times.tenth_percent_frame_time, decimals),
        }
    }

    pub fn to_json(&self) -> Result<String, AppError> {
        serde_json::to_string(self)
            .map_err(|e| AppError::DisplayError(format!("failed to serialize fps report: {}", e)))
    }
}

/// Writes the formatted rates into the bench page's text elements.
#[derive(Debug, Clone)]
pub struct DomStatsDisplay {
    decimals: usize,
}

impl DomStatsDisplay {
    pub fn new(decimals: usize) -> Self {
        Self { decimals }
    }
}

impl FrameStatsSink for DomStatsDisplay {
    fn publish(&mut self, times: &FrameTimes) -> Result<(), AppError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| AppError::BrowserApiError("Document not available".to_string()))?;

        let report = FpsReport::from_times(times, self.decimals);
        let fields = [
            (AVG_ELEMENT_ID, &report.avg),
            (ONE_PERCENT_ELEMENT_ID, &report.one_percent_low),
            (TENTH_PERCENT_ELEMENT_ID, &report.tenth_percent_low),
        ];

        for (id, text) in fields {
            match document.get_element_by_id(id) {
                Some(element) => element.set_text_content(Some(text.as_str())),
                None => get_logger().warn(
                    LogComponent::Presentation("DomStatsDisplay"),
                    &format!("Stats element '{}' not found in DOM", id),
                ),
            }
        }

        Ok(())
    }
}

/// Sink behind the JS `Bencher`: every cadence snapshot passes through, but
/// the stats elements are only touched while the page has attached them.
#[derive(Debug, Clone)]
pub struct PageDisplay {
    dom: DomStatsDisplay,
    attached: bool,
}

impl PageDisplay {
    pub fn new(decimals: usize) -> Self {
        Self { dom: DomStatsDisplay::new(decimals), attached: false }
    }

    pub fn attach(&mut self) {
        self.attached = true;
    }

    pub fn detach(&mut self) {
        self.attached = false;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }
}

impl FrameStatsSink for PageDisplay {
    fn publish(&mut self, times: &FrameTimes) -> Result<(), AppError> {
        if self.attached {
            self.dom.publish(times)
        } else {
            Ok(())
        }
    }
}
