//! Tracing subscriber setup for the `rojak` binary.
//!
//! Logs go to stderr so stdout only carries game output. The filter comes from
//! `RUST_LOG` and defaults to errors only; the CLI reports card file warnings
//! itself through [`crate::ui`].

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "error";

pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // a subscriber may already be installed when embedded in another binary
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
