//! Error type shared by every module.

use crate::registry::AlgorithmKind;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TourError {
    #[error("unknown algorithm variant: {0}")]
    UnknownVariant(String),

    #[error("invalid value for {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("{0} cannot be used with the given matrix")]
    Rejected(AlgorithmKind),

    #[error("no matrices were given")]
    EmptySelection,
}

pub type Result<T> = std::result::Result<T, TourError>;
