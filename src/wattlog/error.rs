use thiserror::Error;

#[derive(Error, Debug)]
pub enum WattlogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input stream closed")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, WattlogError>;
