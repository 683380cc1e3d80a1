//! Trace records and the sinks that carry them
//!
//! Every run emits, in order: one `init` record, zero or more step records,
//! exactly one `final` record and one `end` record.

pub mod records;
pub mod sink;

pub use records::{FinalRecord, StepRecord, TraceRecord};
pub use sink::{JsonLinesSink, RecordingSink, TraceSink};
