use std::io::{self, Write};

use aws_lambda_events::event::sqs::SqsMessage;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LogError {
    #[error("failed to write record {index}: {source}")]
    Write { index: usize, source: io::Error },
    #[error("failed to flush output: {0}")]
    Flush(io::Error),
}

/// Renders a record as `The message <id> for event source <source> = <body> \n`.
pub fn format_record(record: &SqsMessage) -> String {
    format!(
        "The message {} for event source {} = {} \n",
        record.message_id.as_deref().unwrap_or_default(),
        record.event_source.as_deref().unwrap_or_default(),
        record.body.as_deref().unwrap_or_default(),
    )
}

/// Outcome of one pass over a batch.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub written: usize,
    pub failures: Vec<LogError>,
}

/// Writes one line per record to `sink`, in batch order. A failed write is
/// recorded and the next record is still attempted.
pub fn log_batch<W: Write>(records: &[SqsMessage], sink: &mut W) -> BatchReport {
    let mut report = BatchReport::default();

    for (index, record) in records.iter().enumerate() {
        match sink.write_all(format_record(record).as_bytes()) {
            Ok(()) => report.written += 1,
            Err(source) => report.failures.push(LogError::Write { index, source }),
        }
    }
    if let Err(e) = sink.flush() {
        report.failures.push(LogError::Flush(e));
    }

    report
}
