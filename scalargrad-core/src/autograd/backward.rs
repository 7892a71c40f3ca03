use std::collections::HashMap;

use crate::autograd::{topological_sort, Differentiable};
use crate::error::ScalarGradError;
use crate::node::VarId;

/// Runs backpropagation from `root`, distributing `seed` to every
/// contributing leaf.
///
/// The walk consumes the topological order root-first, keeping a map from
/// node id to the derivative still pending delivery to that node. Because
/// the order lists a node strictly after all of its consumers in the current
/// pass, a node with fan-out greater than one has received the *sum* of
/// every downstream contribution by the time it is dequeued. Leaves get
/// exactly one [`accumulate`](Differentiable::accumulate) delivery per pass;
/// non-leaves expand through [`chain_rule`](Differentiable::chain_rule),
/// adding (never overwriting) into their parents' pending entries.
///
/// # Errors
///
/// * [`ScalarGradError::SelfReferentialGradient`] — a chain-rule expansion
///   named the expanding node as its own parent.
/// * [`ScalarGradError::MissingPendingDerivative`] — a node was dequeued
///   without a pending entry; unreachable for a well-formed DAG.
pub fn backpropagate<G: Differentiable>(
    graph: &mut G,
    root: VarId,
    seed: f64,
) -> Result<(), ScalarGradError> {
    let order = topological_sort(&*graph, root);
    log::debug!("backward pass from {:?} over {} nodes", root, order.len());

    let mut pending: HashMap<VarId, f64> = HashMap::new();
    pending.insert(root, seed);

    for node in order {
        let upstream = pending
            .remove(&node)
            .ok_or(ScalarGradError::MissingPendingDerivative { node })?;

        if graph.is_leaf(node) {
            graph.accumulate(node, upstream);
            continue;
        }

        for (parent, contribution) in graph.chain_rule(node, upstream)? {
            if parent == node {
                return Err(ScalarGradError::SelfReferentialGradient { node });
            }
            *pending.entry(parent).or_insert(0.0) += contribution;
        }
    }

    Ok(())
}
