use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown navigation option: {value}")]
    UnknownView { value: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
