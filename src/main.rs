use std::path::Path;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize tracing with RUST_LOG env filter.
    // Default: warn for most crates, info for our app (run summaries visible).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,frameweave=info")),
        )
        .init();

    if let Err(err) = frameweave::run(Path::new(".")).await {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
