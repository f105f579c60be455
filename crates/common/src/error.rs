//! Common error types.

use thiserror::Error;

/// Errors raised while declaring a layout tree or configuring the engine.
///
/// The layout passes themselves are total over a well-formed tree and never
/// produce these; they surface at construction and configuration time.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UiError {
    #[error("Invalid sizing: {0}")]
    InvalidSizing(String),

    #[error("Tree construction error: {0}")]
    Tree(String),

    #[error("Duplicate element id: {0:#010x}")]
    DuplicateId(u32),

    #[error("Element limit exceeded: {count} elements, limit is {limit}")]
    ElementLimitExceeded { count: usize, limit: usize },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type UiResult<T> = Result<T, UiError>;

impl UiError {
    pub fn invalid_sizing(msg: impl Into<String>) -> Self {
        Self::InvalidSizing(msg.into())
    }

    pub fn tree(msg: impl Into<String>) -> Self {
        Self::Tree(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
