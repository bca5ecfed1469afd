use clap::Parser;
use tracing::{error, info};

use octave_bands::cli::Args;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    info!("octave-bands v{} starting...", env!("CARGO_PKG_VERSION"));

    match octave_bands::run(&args) {
        Ok(out) => println!("{}", out.trim_end()),
        Err(e) => {
            error!("{}", e);
            if args.json {
                println!("{}", serde_json::json!({ "error": e }));
            }
            std::process::exit(1);
        }
    }
}
