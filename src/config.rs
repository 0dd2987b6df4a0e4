//! Command line and environment configuration.
//!
//! Every flag has an environment fallback so the service can be configured the same
//! way from a shell or a container:
//!
//! | Flag | Environment | Default |
//! |------|-------------|---------|
//! | `--bind` | `ICHANNEL_BIND` | `127.0.0.1:8080` |
//! | `--buffer-size` | `ICHANNEL_BUFFER_SIZE` | `32` |
//! | `--log-format` | `ICHANNEL_LOG_FORMAT` | `compact` |
//!
//! Log levels come from `RUST_LOG` (see [`lifecycle::tracing`](crate::lifecycle::tracing)).

use clap::{Parser, ValueEnum};
use std::net::SocketAddr;

#[derive(Parser, Debug, Clone)]
#[command(name = "ichannel")]
#[command(version)]
#[command(about = "In-memory registry of hospitals, doctors and appointments")]
pub struct ServiceConfig {
    /// Address the HTTP listener binds to
    #[arg(long, env = "ICHANNEL_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Request queue capacity of each collection actor
    #[arg(
        long,
        env = "ICHANNEL_BUFFER_SIZE",
        default_value_t = 32,
        value_parser = parse_buffer_size
    )]
    pub buffer_size: usize,

    /// Log line format
    #[arg(long, env = "ICHANNEL_LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human readable single-line output
    Compact,
    /// One JSON object per event
    Json,
}

// tokio's mpsc::channel panics on a zero capacity.
fn parse_buffer_size(s: &str) -> Result<usize, String> {
    let size: usize = s
        .parse()
        .map_err(|_| format!("`{s}` is not a valid buffer size"))?;
    if size == 0 {
        return Err("buffer size must be at least 1".to_string());
    }
    Ok(size)
}
