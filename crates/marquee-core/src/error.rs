use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("step cannot be smaller than or equal to 0")]
    InvalidStep,

    #[error("placeholder substitution requested but no provider is available")]
    PlaceholdersUnavailable,

    #[error("animation has no frames")]
    EmptyFrames,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
