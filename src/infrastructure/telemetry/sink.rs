//! Append-only sinks for parsed visit records.

use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::domain::visit_event::VisitRecord;

/// Destination for parsed visit records.
///
/// Implementations append one formatted block per record and flush before
/// returning. The consumer gives each record exactly one `append` attempt;
/// a failed write is logged and the record is gone.
pub trait VisitSink: Send + Sync {
    fn append(&self, record: &VisitRecord) -> io::Result<()>;
}

/// Appends visit records to a plain text log file.
///
/// The file is opened per write so log rotation (moving the file aside)
/// works without restarting the service.
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl VisitSink for FileSink {
    fn append(&self, record: &VisitRecord) -> io::Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = BufWriter::new(file);
        writer.write_all(record.format_block().as_bytes())?;
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::visit_event::VisitEvent;

    #[test]
    fn file_sink_appends_and_separates_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("visits.log");
        let sink = FileSink::new(&path);

        let event = VisitEvent::new(Some("curl/8.5"), None, None, None);
        let record = VisitRecord::from_event(&event);

        sink.append(&record).unwrap();
        sink.append(&record).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.matches("Timestamp: ").count(), 2);
        assert!(contents.contains("\n\n"));
    }
}
