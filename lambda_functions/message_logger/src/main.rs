use lambda_runtime::{run, service_fn, Error};
use sqs_message_logger::event_handler::function_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_ansi(false)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // CloudWatch adds the ingestion time.
        .without_time()
        .with_max_level(tracing::Level::INFO)
        // stdout carries only the record lines.
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("message logger starting");

    run(service_fn(function_handler)).await
}
