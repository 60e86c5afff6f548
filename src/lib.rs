//! Fetches a KidBright weather-station scan and pretty-prints the raw JSON,
//! for eyeballing the shape of the API's response.

pub mod error;
pub mod inspect;
pub mod probe;

use tracing_subscriber::EnvFilter;

/// Installs the `RUST_LOG` driven subscriber. Logs go to stderr, stdout is the report.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
