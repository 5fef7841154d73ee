//! Error types for zonemeet operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZonemeetError {
    #[error("Unknown timezone: {0}")]
    UnknownZone(String),

    #[error("Malformed locale tag: {0}")]
    InvalidLocale(String),
}

pub type Result<T> = std::result::Result<T, ZonemeetError>;
