//! Service error types

use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CalcSrvError>;

#[derive(Error, Debug)]
pub enum CalcSrvError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Logging error: {0}")]
    Logging(String),
}
