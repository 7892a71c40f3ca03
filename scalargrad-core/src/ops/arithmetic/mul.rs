use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{Node, Op, VarId};
use crate::num;
use crate::ops::saved_pair;

/// Multiplies two graph values.
///
/// The forward saves both input values; each operand's contribution is the
/// other operand's value times the upstream derivative.
pub fn mul_op(graph: &mut Graph, a: VarId, b: VarId) -> VarId {
    let va = graph.value(a);
    let vb = graph.value(b);
    let mut ctx = graph.new_context();
    ctx.save(&[va, vb]);
    graph.push_op(Op::Mul, vec![a, b], num::mul(va, vb), ctx)
}

/// d(a * b)/da = b, d(a * b)/db = a, each scaled by the upstream derivative.
pub(crate) fn mul_backward(node: &Node, upstream: f64) -> Result<Vec<(VarId, f64)>, ScalarGradError> {
    let (va, vb) = saved_pair(node, "mul")?;
    Ok(vec![
        (node.parents[0], vb * upstream),
        (node.parents[1], va * upstream),
    ])
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
