use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("empty domain: min ({min}) must be less than max ({max})")]
    EmptyDomain { min: i32, max: i32 },
}

pub type Result<T> = std::result::Result<T, Error>;
