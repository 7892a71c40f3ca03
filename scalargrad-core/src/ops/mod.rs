//! Elementary graph operations.
//!
//! Each operation lives in its own file under a category submodule: a
//! forward `xxx_op` function that computes the value through [`crate::num`],
//! saves whatever its local rule needs into a fresh
//! [`Context`](crate::context::Context), and pushes the tagged node; plus a
//! `pub(crate)` backward function implementing the chain rule at that node,
//! dispatched from the closed operation match in
//! [`Graph::chain_rule`](crate::graph::Graph).

pub mod activation;
pub mod arithmetic;
pub mod comparison;
pub mod math_elem;

use crate::error::ScalarGradError;
use crate::node::Node;

/// Pulls the single saved input value a unary backward expects.
///
/// Missing saved values mean the forward ran with retention suppressed or
/// the forward/backward pair fell out of step; either way the contract
/// between them is broken and the walk must fail rather than guess.
pub(crate) fn saved_unary(node: &Node, op_name: &str) -> Result<f64, ScalarGradError> {
    match node.ctx.saved_values() {
        &[x] => Ok(x),
        other => Err(ScalarGradError::InternalError(format!(
            "{} backward expects one saved value, found {}",
            op_name,
            other.len()
        ))),
    }
}

/// Pulls the two saved input values a binary backward expects.
pub(crate) fn saved_pair(node: &Node, op_name: &str) -> Result<(f64, f64), ScalarGradError> {
    match node.ctx.saved_values() {
        &[a, b] => Ok((a, b)),
        other => Err(ScalarGradError::InternalError(format!(
            "{} backward expects two saved values, found {}",
            op_name,
            other.len()
        ))),
    }
}
