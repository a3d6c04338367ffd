use std::io::{self, Write};

use aws_lambda_events::event::sqs::{SqsEvent, SqsMessage};
use lambda_runtime::{Error, LambdaEvent};

use crate::message_logger::log_batch;

/// Prints one line per record of the batch to standard output.
pub async fn function_handler(event: LambdaEvent<SqsEvent>) -> Result<(), Error> {
    tracing::debug!(
        request_id = %event.context.request_id,
        records = event.payload.records.len(),
        "received SQS batch"
    );

    let mut stdout = io::stdout().lock();
    handle_batch(&event.payload.records, &mut stdout)
}

/// Logs the batch to `sink` and reports every failed write as a warning.
pub fn handle_batch<W: Write>(records: &[SqsMessage], sink: &mut W) -> Result<(), Error> {
    let report = log_batch(records, sink);

    for failure in &report.failures {
        tracing::warn!(error = %failure, "failed to log SQS record");
    }
    tracing::debug!(
        written = report.written,
        failed = report.failures.len(),
        "SQS batch logged"
    );

    Ok(())
}
