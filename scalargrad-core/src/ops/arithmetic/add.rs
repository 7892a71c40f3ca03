use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{Node, Op, VarId};
use crate::num;

/// Adds two graph values.
///
/// Addition saves nothing: its local derivative is 1 towards each operand.
pub fn add_op(graph: &mut Graph, a: VarId, b: VarId) -> VarId {
    let value = num::add(graph.value(a), graph.value(b));
    let ctx = graph.new_context();
    graph.push_op(Op::Add, vec![a, b], value, ctx)
}

/// The upstream derivative flows to both operands unchanged.
pub(crate) fn add_backward(node: &Node, upstream: f64) -> Result<Vec<(VarId, f64)>, ScalarGradError> {
    Ok(node.parents.iter().map(|&p| (p, upstream)).collect())
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
