use std::process::ExitCode;
use tcf_runner::cli;

#[tokio::main]
async fn main() -> ExitCode {
    // Parse the arguments, run the program and verify it
    match cli::run().await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
