//! Background consumer draining the visit queue.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::domain::visit_event::VisitRecord;
use crate::infrastructure::telemetry::pipeline::Command;
use crate::infrastructure::telemetry::sink::VisitSink;

/// Drains the queue one event at a time, strictly in arrival order.
///
/// Each event gets a single write attempt; a sink failure is logged and the
/// event is dropped, while the consumer keeps running. The loop exits on an
/// explicit [`Command::Shutdown`] or when every sender has been dropped.
pub(crate) async fn run_consumer(mut rx: mpsc::Receiver<Command>, sink: Arc<dyn VisitSink>) {
    while let Some(command) = rx.recv().await {
        match command {
            Command::Record(event) => {
                let record = VisitRecord::from_event(&event);

                if let Err(e) = sink.append(&record) {
                    tracing::error!("failed to write visit record: {e}");
                }
            }
            Command::Shutdown => break,
        }
    }

    tracing::debug!("visit consumer stopped");
}
