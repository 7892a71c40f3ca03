use crate::graph::Graph;
use crate::node::{Op, VarId};
use crate::num;

/// `a == b` as a graph value: 1.0 when exactly equal, 0.0 otherwise.
///
/// Non-differentiable: the backward pass delivers explicit zero
/// contributions to both operands.
pub fn eq_op(graph: &mut Graph, a: VarId, b: VarId) -> VarId {
    let value = if num::eq(graph.value(a), graph.value(b)) {
        1.0
    } else {
        0.0
    };
    let ctx = graph.new_context();
    graph.push_op(Op::Eq, vec![a, b], value, ctx)
}

#[cfg(test)]
#[path = "eq_test.rs"]
mod tests;
