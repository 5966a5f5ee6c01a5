//! Startup error types.
//!
//! Request handling has no error taxonomy of its own: unknown paths and
//! unsupported methods fall through to axum's default responses.

use std::error::Error;
use std::io;

use thiserror::Error;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value: {0:?}")]
    InvalidPort(String),
}

/// Process-level failures that abort the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to bind {addr}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to install Prometheus recorder")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("server error")]
    Serve(#[source] io::Error),
}

/// Formats an error followed by each of its sources, separated by `": "`.
pub fn report(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
