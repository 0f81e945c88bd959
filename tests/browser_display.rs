#![cfg(target_arch = "wasm32")]
use frame_bench_wasm::application::FrameStatsSink;
use frame_bench_wasm::domain::frame_timing::FrameTimes;
use frame_bench_wasm::domain::logging::TimeProvider;
use frame_bench_wasm::infrastructure::PerformanceClock;
use frame_bench_wasm::presentation::{Bencher, DomStatsDisplay};
use frame_bench_wasm::presentation::display::{
    AVG_ELEMENT_ID, ONE_PERCENT_ELEMENT_ID, TENTH_PERCENT_ELEMENT_ID,
};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn setup_stats_elements() {
    let document = web_sys::window().unwrap().document().unwrap();
    for id in [AVG_ELEMENT_ID, ONE_PERCENT_ELEMENT_ID, TENTH_PERCENT_ELEMENT_ID] {
        if document.get_element_by_id(id).is_none() {
            let element = document.create_element("span").unwrap();
            element.set_id(id);
            document.body().unwrap().append_child(&element).unwrap();
        }
    }
}

fn text_of(id: &str) -> Option<String> {
    web_sys::window()?.document()?.get_element_by_id(id)?.text_content()
}

#[wasm_bindgen_test]
fn dom_display_writes_formatted_rates() {
    setup_stats_elements();
    let times = FrameTimes {
        avg_frame_time: 16.0,
        one_percent_frame_time: 40.0,
        tenth_percent_frame_time: 0.0,
    };
    DomStatsDisplay::new(3).publish(&times).unwrap();

    assert_eq!(text_of(AVG_ELEMENT_ID).as_deref(), Some("62.500fps"));
    assert_eq!(text_of(ONE_PERCENT_ELEMENT_ID).as_deref(), Some("25.000fps"));
    assert_eq!(text_of(TENTH_PERCENT_ELEMENT_ID).as_deref(), Some("--fps"));
}

#[wasm_bindgen_test]
fn performance_clock_is_monotonic() {
    let clock = PerformanceClock::new();
    let first = clock.try_now().unwrap();
    let second = clock.now_ms();
    assert!(second >= first);
}

#[wasm_bindgen_test]
fn bencher_tick_reads_the_browser_clock() {
    let mut bencher = Bencher::new(Some(8));
    bencher.tick().unwrap();
    bencher.tick().unwrap();
    assert_eq!(bencher.sample_count(), 1);
    assert!(bencher.current_data().avg_frame_time >= 0.0);

}

#[wasm_bindgen_test]
fn attached_display_follows_the_refresh_cadence() {
    setup_stats_elements();
    let mut bencher = Bencher::from_config(r#"{"refresh_interval_ms": 10.0}"#).unwrap();
    bencher.attach_display();
    assert!(bencher.is_display_attached());
    assert_eq!(text_of(AVG_ELEMENT_ID).as_deref(), Some("--fps"));

    bencher.update(0.0);
    assert!(bencher.update(16.0));
    assert_eq!(text_of(AVG_ELEMENT_ID).as_deref(), Some("62.500fps"));

    bencher.detach_display();
    assert!(!bencher.is_display_attached());
    bencher.update(48.0);
    assert_eq!(text_of(AVG_ELEMENT_ID).as_deref(), Some("62.500fps"));
}
