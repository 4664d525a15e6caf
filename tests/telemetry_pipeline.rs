use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use curtail::domain::visit_event::{VisitEvent, VisitRecord};
use curtail::infrastructure::telemetry::{FileSink, OfferOutcome, TelemetryPipeline, VisitSink};

fn event_from(forwarded_for: &str) -> VisitEvent {
    VisitEvent::new(Some("curl/8.5"), Some(forwarded_for), None, None)
}

#[tokio::test]
async fn overflow_drops_exactly_the_excess_without_blocking_producers() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("visits.log");

    let pipeline = TelemetryPipeline::new(100, Arc::new(FileSink::new(&log_path)));
    let handle = pipeline.handle();

    // Nothing is consuming yet, so the buffer alone decides the outcomes.
    let mut enqueued = 0;
    let mut dropped = 0;
    for i in 0..101 {
        match handle.offer(event_from(&format!("10.9.{}.{}", i / 100, i % 100))) {
            OfferOutcome::Enqueued => enqueued += 1,
            OfferOutcome::Dropped => dropped += 1,
        }
    }

    assert_eq!(enqueued, 100);
    assert_eq!(dropped, 1);

    pipeline.start().shutdown().await;

    // Every buffered event reached the sink, in offer order.
    let contents = std::fs::read_to_string(&log_path).unwrap();
    let ips: Vec<&str> = contents
        .lines()
        .filter_map(|line| line.strip_prefix("ip: "))
        .filter_map(|rest| rest.strip_suffix(';'))
        .collect();

    assert_eq!(ips.len(), 100);
    assert_eq!(ips[0], "10.9.0.0");
    assert_eq!(ips[99], "10.9.0.99");
    let mut sorted_check = ips.clone();
    sorted_check.sort_by_key(|ip| {
        let last: u32 = ip.rsplit('.').next().unwrap().parse().unwrap();
        let third: u32 = ip.split('.').nth(2).unwrap().parse().unwrap();
        third * 100 + last
    });
    assert_eq!(ips, sorted_check);
}

/// Sink that fails its first append and records every attempt.
struct FlakySink {
    attempts: AtomicUsize,
    written: Mutex<Vec<VisitRecord>>,
}

impl FlakySink {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            attempts: AtomicUsize::new(0),
            written: Mutex::new(Vec::new()),
        })
    }
}

impl VisitSink for FlakySink {
    fn append(&self, record: &VisitRecord) -> io::Result<()> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst);
        if attempt == 0 {
            return Err(io::Error::new(io::ErrorKind::Other, "disk on fire"));
        }
        self.written.lock().unwrap().push(record.clone());
        Ok(())
    }
}

#[tokio::test]
async fn sink_failure_drops_that_event_only_and_never_retries() {
    let sink = FlakySink::new();
    let pipeline = TelemetryPipeline::new(10, sink.clone());
    let handle = pipeline.handle();

    for i in 0..3 {
        assert_eq!(
            handle.offer(event_from(&format!("192.0.2.{i}"))),
            OfferOutcome::Enqueued
        );
    }

    pipeline.start().shutdown().await;

    // One attempt per event: the failed first event is gone, the rest landed.
    assert_eq!(sink.attempts.load(Ordering::SeqCst), 3);
    let written = sink.written.lock().unwrap();
    let ips: Vec<&str> = written.iter().map(|r| r.ip.as_str()).collect();
    assert_eq!(ips, ["192.0.2.1", "192.0.2.2"]);
}

#[tokio::test]
async fn records_carry_parsed_agent_and_derived_ip() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("visits.log");

    let pipeline = TelemetryPipeline::new(10, Arc::new(FileSink::new(&log_path)));
    let handle = pipeline.handle();

    let chrome = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
        (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
    handle.offer(VisitEvent::new(
        Some(chrome),
        Some("203.0.113.7, 10.0.0.1"),
        None,
        Some("127.0.0.1".parse().unwrap()),
    ));

    pipeline.start().shutdown().await;

    let contents = std::fs::read_to_string(&log_path).unwrap();
    assert!(contents.contains("ip: 203.0.113.7;"));
    assert!(contents.contains("Browser: Chrome (120"));
    assert!(contents.contains("Platform: Windows"));
    assert!(contents.contains("Device: pc;"));
    assert!(contents.ends_with("\n\n"));
}
