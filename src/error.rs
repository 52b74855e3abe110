use thiserror::Error;

use crate::{MAX_ORDER, MIN_ORDER};

/// Failures reported by the public numbering operations
///
/// Nothing is produced when one of these is returned; a node ordering is either complete or absent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum OrderingError {
    /// The requested polynomial order is outside of `[MIN_ORDER, MAX_ORDER]`
    #[error("order must be in interval [{}, {}], got {0}", MIN_ORDER, MAX_ORDER)]
    InvalidOrder(usize),
    /// The element type name is not one of the supported Lagrange elements
    #[error("unknown element type '{0}'")]
    UnknownElementType(String),
}
