// This is the Lambda bootstrap entry point for the worker function

use lambda_runtime::{Error, run, service_fn};

#[tokio::main]
async fn main() -> Result<(), Error> {
    docsum::setup_logging();

    run(service_fn(docsum::worker::handler)).await?;

    Ok(())
}
