use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match filter_runner::cli::run().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
