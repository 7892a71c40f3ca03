use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{Node, Op, VarId};
use crate::num;
use crate::ops::saved_unary;

/// `e` raised to a graph value.
pub fn exp_op(graph: &mut Graph, a: VarId) -> VarId {
    let va = graph.value(a);
    let mut ctx = graph.new_context();
    ctx.save(&[va]);
    graph.push_op(Op::Exp, vec![a], num::exp(va), ctx)
}

/// d(e^a)/da = e^a.
pub(crate) fn exp_backward(node: &Node, upstream: f64) -> Result<Vec<(VarId, f64)>, ScalarGradError> {
    let va = saved_unary(node, "exp")?;
    Ok(vec![(node.parents[0], num::exp_back(va, upstream))])
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
