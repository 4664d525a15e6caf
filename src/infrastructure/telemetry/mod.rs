//! Best-effort visit telemetry: bounded queue, background consumer, log sink.

mod consumer;
mod pipeline;
mod sink;

pub use pipeline::{OfferOutcome, RunningTelemetry, TelemetryHandle, TelemetryPipeline};
pub use sink::{FileSink, VisitSink};
