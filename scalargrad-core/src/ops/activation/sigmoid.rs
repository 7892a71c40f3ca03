use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{Node, Op, VarId};
use crate::num;
use crate::ops::saved_unary;

/// Logistic function of a graph value.
pub fn sigmoid_op(graph: &mut Graph, a: VarId) -> VarId {
    let va = graph.value(a);
    let mut ctx = graph.new_context();
    ctx.save(&[va]);
    graph.push_op(Op::Sigmoid, vec![a], num::sigmoid(va), ctx)
}

/// d(sigmoid(a))/da = sigmoid(a) * (1 - sigmoid(a)).
pub(crate) fn sigmoid_backward(
    node: &Node,
    upstream: f64,
) -> Result<Vec<(VarId, f64)>, ScalarGradError> {
    let va = saved_unary(node, "sigmoid")?;
    Ok(vec![(node.parents[0], num::sigmoid_back(va, upstream))])
}

#[cfg(test)]
#[path = "sigmoid_test.rs"]
mod tests;
