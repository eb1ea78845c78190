use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Run the CLI
    quire::cli::run().await
}
