use thiserror::Error;

/// Rejections raised while turning raw learner input into engine arguments.
///
/// The engines themselves never fail; everything here is caught before a
/// call reaches them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("not a valid integer: {0:?}")]
    NotANumber(String),
    #[error("node label must not be empty")]
    EmptyLabel,
    #[error("node label must contain letters only: {0:?}")]
    InvalidLabel(String),
    #[error("weight must be a positive integer: {0:?}")]
    InvalidWeight(String),
    #[error("edge must look like FROM-TO:WEIGHT, got {0:?}")]
    MalformedEdge(String),
}
