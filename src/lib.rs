use reqwest::StatusCode;
use thiserror::Error;

pub mod config;
pub mod porkbun;

pub use config::ConfigError;
pub use porkbun::{Credentials, Porkbun, Record, TxtRecords};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Error occured while reading config: {0}")]
    Config(#[from] ConfigError),
    #[error("Error while accessing the Porkbun API: {0}")]
    Api(#[from] ApiError),
    #[error("Error while sending request: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Error while decoding a response or printing JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("API returned unexpected status code {0}, response: {1}")]
    HttpStatus(StatusCode, String),
    #[error("failed to {operation} with status {status}")]
    Status {
        operation: &'static str,
        status: String,
    },
}
