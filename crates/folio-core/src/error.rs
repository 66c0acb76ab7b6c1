use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FolioError {
    #[error("counter target {raw:?} is not an integer")]
    InvalidCounterTarget { raw: String },
    #[error("counter target {value} is negative")]
    NegativeCounterTarget { value: i64 },
}

pub type Result<T> = std::result::Result<T, FolioError>;
