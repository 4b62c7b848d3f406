// Host-side tests for the redraw scheduler and the resize debouncer.

mod common;

use common::core::schedule::*;
use std::thread::sleep;
use std::time::Duration;

#[test]
fn first_request_asks_for_a_frame_and_later_ones_coalesce() {
    let mut s = FrameScheduler::new();
    assert!(s.request_redraw());
    assert!(!s.request_redraw());
    assert!(!s.request_redraw());
    assert!(s.frame_pending());
    assert!(s.needs_redraw());
}

#[test]
fn begin_frame_checks_and_clears_once() {
    let mut s = FrameScheduler::new();
    s.request_redraw();
    assert!(s.begin_frame());
    assert!(!s.needs_redraw());
    assert!(!s.frame_pending());
    // A spurious second tick draws nothing.
    assert!(!s.begin_frame());
}

#[test]
fn idle_scheduler_draws_nothing() {
    let mut s = FrameScheduler::new();
    assert!(!s.begin_frame());
}

#[test]
fn request_after_a_frame_asks_again() {
    let mut s = FrameScheduler::new();
    assert!(s.request_redraw());
    s.begin_frame();
    assert!(s.request_redraw());
}

#[test]
fn stop_silences_everything() {
    let mut s = FrameScheduler::new();
    s.request_redraw();
    s.stop();
    assert!(s.is_stopped());
    assert!(!s.begin_frame());
    assert!(!s.request_redraw());
    assert!(!s.needs_redraw());
}

#[test]
fn only_the_latest_ticket_fires() {
    let mut d = Debouncer::new();
    let t1 = d.schedule(1);
    let t2 = d.schedule(2);
    let t3 = d.schedule(3);
    assert_eq!(d.fire(t1), None);
    assert_eq!(d.fire(t2), None);
    let settled = d.fire(t3).expect("latest ticket fires");
    assert_eq!(settled.value, 3);
    assert_eq!(settled.coalesced, 3);
    assert!(!d.is_pending());
}

#[test]
fn a_ticket_fires_at_most_once() {
    let mut d = Debouncer::new();
    let t = d.schedule("a");
    assert!(d.fire(t).is_some());
    assert!(d.fire(t).is_none());
}

#[test]
fn cancel_prevents_the_trailing_call() {
    let mut d = Debouncer::new();
    let t = d.schedule(10);
    d.cancel();
    assert!(!d.is_pending());
    assert!(d.fire(t).is_none());
}

#[test]
fn bursts_are_counted_separately() {
    let mut d = Debouncer::new();
    d.schedule(1);
    let t = d.schedule(2);
    assert_eq!(d.fire(t).map(|s| s.coalesced), Some(2));

    let t = d.schedule(3);
    let settled = d.fire(t).unwrap();
    assert_eq!(settled.coalesced, 1);
    assert_eq!(settled.burst, Duration::ZERO);
}

#[test]
fn burst_duration_spans_first_to_last_event() {
    let mut d = Debouncer::new();
    d.schedule(());
    sleep(Duration::from_millis(15));
    let t = d.schedule(());
    let settled = d.fire(t).unwrap();
    assert!(settled.burst >= Duration::from_millis(15));
}

#[test]
fn failed_frame_clears_pending_but_keeps_the_redraw() {
    let mut s = FrameScheduler::new();
    assert!(s.request_redraw());
    s.frame_failed();
    assert!(!s.frame_pending());
    assert!(s.needs_redraw());
    assert!(s.request_redraw(), "next request asks for a frame again");
    assert!(s.begin_frame());
}
