//! Bounded visit-telemetry pipeline with an explicit lifecycle.
//!
//! The pipeline owns a fixed-capacity FIFO buffer fed by arbitrarily many
//! request handlers and drained by exactly one background task. Enqueueing
//! never blocks: when the buffer is full the event is dropped and a warning
//! is emitted. Telemetry is diagnostic, not transactional — the request path
//! is never delayed or failed because of it.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tokio::task::JoinHandle;

use crate::domain::visit_event::VisitEvent;
use crate::infrastructure::telemetry::consumer::run_consumer;
use crate::infrastructure::telemetry::sink::VisitSink;

/// Internal queue message. `Shutdown` travels through the same FIFO queue as
/// events, so a draining shutdown processes everything offered before it.
#[derive(Debug)]
pub(crate) enum Command {
    Record(VisitEvent),
    Shutdown,
}

/// Result of a non-blocking enqueue attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferOutcome {
    Enqueued,
    Dropped,
}

/// A constructed-but-idle pipeline: the buffer exists and accepts events,
/// but nothing consumes them until [`TelemetryPipeline::start`] is called.
pub struct TelemetryPipeline {
    tx: mpsc::Sender<Command>,
    rx: mpsc::Receiver<Command>,
    sink: Arc<dyn VisitSink>,
}

impl TelemetryPipeline {
    /// Creates a pipeline with a buffer of `capacity` slots writing to `sink`.
    pub fn new(capacity: usize, sink: Arc<dyn VisitSink>) -> Self {
        let (tx, rx) = mpsc::channel(capacity);
        Self { tx, rx, sink }
    }

    /// Returns a cheap, cloneable producer handle.
    pub fn handle(&self) -> TelemetryHandle {
        TelemetryHandle {
            tx: self.tx.clone(),
        }
    }

    /// Spawns the consumer task and hands back the running lifecycle.
    pub fn start(self) -> RunningTelemetry {
        let worker = tokio::spawn(run_consumer(self.rx, self.sink));

        RunningTelemetry {
            tx: self.tx,
            worker,
        }
    }
}

/// Producer side of the pipeline, held by request handlers.
#[derive(Clone)]
pub struct TelemetryHandle {
    tx: mpsc::Sender<Command>,
}

impl TelemetryHandle {
    /// Offers an event to the queue without ever suspending the caller.
    ///
    /// A full buffer drops the event on the spot and records the drop as a
    /// warning. A closed pipeline (already shut down) behaves the same way.
    pub fn offer(&self, event: VisitEvent) -> OfferOutcome {
        match self.tx.try_send(Command::Record(event)) {
            Ok(()) => OfferOutcome::Enqueued,
            Err(TrySendError::Full(_)) => {
                tracing::warn!("visit queue full, dropping event");
                OfferOutcome::Dropped
            }
            Err(TrySendError::Closed(_)) => {
                tracing::warn!("visit pipeline stopped, dropping event");
                OfferOutcome::Dropped
            }
        }
    }
}

/// A started pipeline. Dropping it without calling [`Self::shutdown`] leaves
/// the consumer running for the lifetime of the process.
pub struct RunningTelemetry {
    tx: mpsc::Sender<Command>,
    worker: JoinHandle<()>,
}

impl RunningTelemetry {
    /// Stops the pipeline after draining everything enqueued so far.
    ///
    /// Events offered after the shutdown request are discarded.
    pub async fn shutdown(self) {
        // Queued behind in-flight events, so the consumer reaches it only
        // after the backlog is written out.
        let _ = self.tx.send(Command::Shutdown).await;
        let _ = self.worker.await;
    }

    /// Stops the pipeline immediately, discarding queued events.
    pub fn abort(self) {
        self.worker.abort();
    }
}
