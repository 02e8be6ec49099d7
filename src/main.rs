mod cli;
mod entropy;
mod error;
mod exits;
mod pass;
mod rng;
mod settings;

use tracing_subscriber::EnvFilter;

fn main() {
    exits::harden();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = pass::validate_pools().and_then(|()| cli::run()) {
        exits::fail(&e);
    }
}
