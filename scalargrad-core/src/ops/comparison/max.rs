use crate::graph::Graph;
use crate::node::{Op, VarId};
use crate::num;

/// The larger of two graph values.
///
/// Treated as non-differentiable selection: the backward pass delivers
/// explicit zero contributions to both operands.
pub fn max_op(graph: &mut Graph, a: VarId, b: VarId) -> VarId {
    let value = num::max(graph.value(a), graph.value(b));
    let ctx = graph.new_context();
    graph.push_op(Op::Max, vec![a, b], value, ctx)
}

#[cfg(test)]
#[path = "max_test.rs"]
mod tests;
