// Keydyn Integration Tests
//
// These tests verify the complete capture pipeline:
// signals -> CaptureSession -> sink -> analysis
//
// Run with: cargo test --test integration_test

use keydyn_core::{
    summarize, CaptureSession, JsonLinesSink, KeyRecord, ManualClock, MemorySink, RawSignal,
    SignalLog,
};

// Helper to drive one press/release pair at the given timestamps
fn tap(
    session: &mut CaptureSession<ManualClock>,
    sink: &mut MemorySink,
    key: &str,
    press_ms: u64,
    up_ms: u64,
) {
    session.clock().set(press_ms);
    session.press(key);
    session.clock().set(up_ms);
    session.release(key, sink).unwrap();
}

#[test]
fn test_sequence_length_matches_signal_count() {
    let mut session = CaptureSession::with_clock(ManualClock::default());
    let mut sink = MemorySink::new();

    tap(&mut session, &mut sink, "h", 1000, 1090);
    tap(&mut session, &mut sink, "e", 1120, 1200);
    tap(&mut session, &mut sink, "y", 1250, 1310);

    // 6 signals delivered, 6 records accumulated
    assert_eq!(session.len(), 6);
}

#[test]
fn test_readme_example_timings() {
    // press "a" at t=1000 -> {key:"a", keyPressTime:0}
    // release "a" at t=1150 -> {key:"a", keyUpTime:150}
    let mut session = CaptureSession::with_clock(ManualClock::default());
    let mut sink = MemorySink::new();

    tap(&mut session, &mut sink, "a", 1000, 1150);

    assert_eq!(
        sink.last().unwrap(),
        &[KeyRecord::press("a", 0), KeyRecord::release("a", 150)]
    );
}

#[test]
fn test_one_publish_per_release_with_prefix_payloads() {
    let mut session = CaptureSession::with_clock(ManualClock::default());
    let mut sink = MemorySink::new();

    tap(&mut session, &mut sink, "h", 1000, 1090);
    tap(&mut session, &mut sink, "e", 1120, 1200);
    tap(&mut session, &mut sink, "y", 1250, 1310);

    assert_eq!(sink.publish_count(), 3);

    // Each payload strictly prefix-extends the previous one
    for pair in sink.payloads().windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        assert!(next.len() > prev.len());
        assert_eq!(&next[..prev.len()], prev.as_slice());
    }
}

#[test]
fn test_publish_payload_wire_format() {
    let mut session = CaptureSession::with_clock(ManualClock::default());
    let mut sink = JsonLinesSink::new(Vec::new());

    session.clock().set(1000);
    session.press("a");
    session.clock().set(1150);
    session.release("a", &mut sink).unwrap();

    let out = String::from_utf8(sink.into_inner()).unwrap();
    assert_eq!(
        out,
        "[{\"key\":\"a\",\"keyPressTime\":0},{\"key\":\"a\",\"keyUpTime\":150}]\n"
    );
}

#[test]
fn test_replay_matches_live_capture() {
    let jsonl = "\
{\"action\":\"press\",\"key\":\"h\",\"timeMs\":1000}
{\"action\":\"release\",\"key\":\"h\",\"timeMs\":1090}
{\"action\":\"press\",\"key\":\"e\",\"timeMs\":1120}
{\"action\":\"release\",\"key\":\"e\",\"timeMs\":1200}
";
    let log = SignalLog::from_reader(jsonl.as_bytes()).unwrap();

    let mut replayed = CaptureSession::with_clock(ManualClock::default());
    let mut replay_sink = MemorySink::new();
    log.drive(&mut replayed, &mut replay_sink).unwrap();

    let mut live = CaptureSession::with_clock(ManualClock::default());
    let mut live_sink = MemorySink::new();
    tap(&mut live, &mut live_sink, "h", 1000, 1090);
    tap(&mut live, &mut live_sink, "e", 1120, 1200);

    assert_eq!(replayed.records(), live.records());
    assert_eq!(replay_sink.payloads(), live_sink.payloads());
}

#[test]
fn test_end_to_end_analysis_of_replayed_session() {
    let log = SignalLog::from_signals(vec![
        RawSignal::press("h", 1000),
        RawSignal::release("h", 1090),
        RawSignal::press("e", 1120),
        RawSignal::release("e", 1200),
        RawSignal::press("y", 1250),
        RawSignal::release("y", 1310),
    ]);

    let mut session = CaptureSession::with_clock(ManualClock::default());
    let mut sink = MemorySink::new();
    log.drive(&mut session, &mut sink).unwrap();

    let summary = summarize(session.records());
    assert_eq!(summary.flight_times, vec![120, 130]);
    assert_eq!(summary.dwell_times, vec![90, 80, 60]);
    assert_eq!(summary.mean_flight_ms, Some(125.0));
}

#[test]
fn test_release_only_session_publishes_degenerate_offset() {
    // Documented fallback for a release with no preceding press: the
    // marker stays unset and the record carries the raw clock reading.
    let log = SignalLog::from_signals(vec![RawSignal::release("a", 1234)]);

    let mut session = CaptureSession::with_clock(ManualClock::default());
    let mut sink = MemorySink::new();
    log.drive(&mut session, &mut sink).unwrap();

    assert_eq!(session.start_marker(), None);
    assert_eq!(sink.last().unwrap(), &[KeyRecord::release("a", 1234)]);
}
