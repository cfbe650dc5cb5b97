//! stockd entry point
//!
//! Delegates everything to the CLI module and exits non-zero on failure.

use stockd::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
