//! Error taxonomy: fetch and dispatch failures abort the run; config
//! problems abort startup. Data-shape problems never surface here, they
//! degrade in place (see normalize).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{kind} inventory query failed: {source}")]
    Transport {
        kind: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{kind} inventory query returned status {status}")]
    Status {
        kind: &'static str,
        status: reqwest::StatusCode,
    },
    #[error("{kind} inventory response could not be decoded: {source}")]
    Decode {
        kind: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("webhook send failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("webhook rejected the report with status {0}")]
    Rejected(reqwest::StatusCode),
}

/// Umbrella for the driver: either phase failing fails the invocation.
#[derive(Debug, Error)]
pub enum WatcherError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}
