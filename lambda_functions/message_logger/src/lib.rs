//! Lambda function that prints every message of an SQS batch to standard output.

pub mod event_handler;
pub mod message_logger;
