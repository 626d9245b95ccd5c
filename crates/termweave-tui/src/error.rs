//! Error types

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("fps cannot be negative, got {0}")]
    InvalidFps(i32),

    #[error("failed to change terminal raw mode: {0}")]
    RawMode(#[source] io::Error),

    #[error("raw mode is not supported by the {0} terminal interface")]
    RawModeUnsupported(&'static str),

    #[error("terminal interface already initialized")]
    InterfaceAlreadyInitialized,

    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
