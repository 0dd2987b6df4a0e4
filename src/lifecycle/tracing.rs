//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing`
//! crate. Levels are controlled by `RUST_LOG`; the line format by `--log-format`.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup, and the final collection size at shutdown
//! - **Collection Operations**: list, find, get, create, update and delete, tagged
//!   with `entity_type` and the record id
//! - **HTTP Requests**: one span per request from `tower_http::trace::TraceLayer`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Show request payloads and lookups
//! RUST_LOG=debug cargo run
//!
//! # Machine readable output
//! RUST_LOG=info cargo run -- --log-format json
//! ```
//!
//! **With `RUST_LOG=info`** a create and a rename look like:
//!
//! ```text
//! INFO Created entity_type="Hospital" id=hos001 size=1
//! INFO Updated entity_type="Hospital" id=hos001 from=General to=Central
//! ```

use crate::config::LogFormat;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Falls back to `info` when `RUST_LOG` is unset.
pub fn setup_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false); // entity_type already says where an event comes from

    match format {
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Json => builder.json().init(),
    }
}
