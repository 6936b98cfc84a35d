//! DigitalOcean API error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DoError {
    #[error("DIGITALOCEAN_ACCESS_TOKEN environment variable is required")]
    MissingToken,

    #[error("{status} {id}: {message}")]
    Api {
        status: u16,
        id: String,
        message: String,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DoError>;
