//! Errors raised by the node-level API.
//!
//! [`crate::tree::PrefixTree`] never returns these: a missing symbol during a
//! tree walk is an ordinary negative answer (`false` or an empty result).

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A child was requested for a symbol the node has no link for
    #[error("no child for symbol {symbol}")]
    MissingChild { symbol: String },
}

impl Error {
    pub(crate) fn missing_child<A: std::fmt::Debug>(symbol: &A) -> Self {
        Self::MissingChild {
            symbol: format!("{symbol:?}"),
        }
    }
}
