pub mod eq;
pub mod lt;
pub mod max;

pub use eq::eq_op;
pub use lt::lt_op;
pub use max::max_op;

use crate::error::ScalarGradError;
use crate::node::{Node, VarId};

/// Shared backward for comparison and selection results.
///
/// These operations have a derivative of zero almost everywhere, so every
/// parent gets an explicit zero contribution rather than being omitted: leaf
/// derivative sums come out identical either way, but callers must not have
/// to rely on zero-valued pairs being elided.
pub(crate) fn zero_backward(node: &Node, _upstream: f64) -> Result<Vec<(VarId, f64)>, ScalarGradError> {
    Ok(node.parents.iter().map(|&p| (p, 0.0)).collect())
}
