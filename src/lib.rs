use std::io;

pub mod client;
pub mod config;
pub mod fetch;
pub mod record;

/// the single fault type for the whole pipeline. every failure mode of one
/// substance's resolution collapses into this; the fetch loop never
/// distinguishes variants beyond logging them
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("write failed: {0}")]
    Io(#[from] io::Error),

    #[error("malformed document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing field `{0}`")]
    MissingField(&'static str),
}
