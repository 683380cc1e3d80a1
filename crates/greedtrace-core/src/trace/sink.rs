//! Trace sinks
//!
//! A sink accepts one record per call and returns only once the record has
//! been handed off to its destination. Sinks never batch or reorder. A
//! failed hand-off is returned to the engine, which stops the run.

use std::io::Write;

use crate::error::{GreedError, Result};
use crate::trace::records::TraceRecord;

/// Destination for trace records
pub trait TraceSink {
    /// Hand off a single record
    fn emit(&mut self, record: &TraceRecord) -> Result<()>;
}

/// Newline-delimited JSON over any writer, flushed after every record
pub struct JsonLinesSink<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Number of records handed off so far
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TraceSink for JsonLinesSink<W> {
    fn emit(&mut self, record: &TraceRecord) -> Result<()> {
        let mut line = serde_json::to_vec(record)?;
        line.push(b'\n');

        self.writer
            .write_all(&line)
            .and_then(|()| self.writer.flush())
            .map_err(|e| GreedError::emit(record.kind(), e))?;

        self.written += 1;
        Ok(())
    }
}

/// In-memory sink that keeps every record in emission order
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    records: Vec<TraceRecord>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[TraceRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<TraceRecord> {
        self.records
    }

    /// Records of the given `type`, in order
    pub fn of_kind(&self, kind: &str) -> Vec<&TraceRecord> {
        self.records.iter().filter(|r| r.kind() == kind).collect()
    }
}

impl TraceSink for RecordingSink {
    fn emit(&mut self, record: &TraceRecord) -> Result<()> {
        self.records.push(record.clone());
        Ok(())
    }
}
