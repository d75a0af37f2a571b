use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid year: {0}")]
    InvalidYear(i64),

    #[error("empty field: {0}")]
    EmptyField(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
