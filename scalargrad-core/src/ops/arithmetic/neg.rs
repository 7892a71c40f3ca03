use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{Node, Op, VarId};
use crate::num;

/// Negates a graph value.
pub fn neg_op(graph: &mut Graph, a: VarId) -> VarId {
    let value = num::neg(graph.value(a));
    let ctx = graph.new_context();
    graph.push_op(Op::Neg, vec![a], value, ctx)
}

/// d(-a)/da = -1.
pub(crate) fn neg_backward(node: &Node, upstream: f64) -> Result<Vec<(VarId, f64)>, ScalarGradError> {
    Ok(vec![(node.parents[0], -upstream)])
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
