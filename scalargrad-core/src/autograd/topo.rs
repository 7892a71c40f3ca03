use std::collections::HashSet;

use crate::autograd::Differentiable;
use crate::node::VarId;

/// Computes the topological order of the computation graph rooted at `root`.
///
/// Depth-first post-order over the parent relation, reversed: the returned
/// sequence presents the root first and the deepest leaves last, so the
/// backward walk that consumes it processes a node only after every one of
/// its downstream consumers has already delivered its contribution.
///
/// Constant nodes are excluded entirely. A node reachable through several
/// paths (diamond structure) is visited and emitted exactly once, guarded by
/// the visited-id set; repeat visits are no-ops, which also bounds the walk
/// for any acyclic graph.
pub fn topological_sort<G: Differentiable>(graph: &G, root: VarId) -> Vec<VarId> {
    let mut visited = HashSet::new();
    let mut order = Vec::new();
    visit(graph, root, &mut visited, &mut order);
    order.reverse();
    log::trace!("topological order from {:?}: {} nodes", root, order.len());
    order
}

fn visit<G: Differentiable>(
    graph: &G,
    node: VarId,
    visited: &mut HashSet<VarId>,
    order: &mut Vec<VarId>,
) {
    if visited.contains(&node) || graph.is_constant(node) {
        return;
    }
    visited.insert(node);
    for &parent in graph.parents(node) {
        visit(graph, parent, visited, order);
    }
    order.push(node);
}

#[cfg(test)]
mod tests {
    use super::topological_sort;
    use crate::autograd::Differentiable;
    use crate::graph::Graph;
    use std::collections::HashSet;

    /// Every node must appear exactly once and strictly before each of its
    /// (non-constant) parents; the root comes first.
    fn assert_valid_order(graph: &Graph, root: crate::node::VarId) {
        let order = topological_sort(graph, root);
        assert_eq!(order.first(), Some(&root));

        let positions: std::collections::HashMap<_, _> =
            order.iter().enumerate().map(|(i, &n)| (n, i)).collect();
        assert_eq!(positions.len(), order.len(), "order contains duplicates");

        for &node in &order {
            for &parent in graph.parents(node) {
                if graph.is_constant(parent) {
                    assert!(!positions.contains_key(&parent));
                    continue;
                }
                assert!(
                    positions[&node] < positions[&parent],
                    "{:?} must precede its parent {:?}",
                    node,
                    parent
                );
            }
        }
    }

    #[test]
    fn test_single_leaf_yields_one_element() {
        let mut g = Graph::new();
        let x = g.leaf(1.0);
        assert_eq!(topological_sort(&g, x), vec![x]);
    }

    #[test]
    fn test_chain_is_root_first() {
        let mut g = Graph::new();
        let x = g.leaf(2.0);
        let y = g.exp(x);
        let z = g.ln(y);
        assert_eq!(topological_sort(&g, z), vec![z, y, x]);
    }

    #[test]
    fn test_diamond_emits_shared_node_once() {
        let mut g = Graph::new();
        let a = g.leaf(1.0);
        let c = g.neg(a);
        let d = g.exp(a);
        let e = g.add(c, d);
        let order = topological_sort(&g, e);
        assert_eq!(order.len(), 4);
        assert_eq!(order.iter().filter(|&&n| n == a).count(), 1);
        assert_valid_order(&g, e);
    }

    #[test]
    fn test_fan_out_order_is_valid() {
        let mut g = Graph::new();
        let x = g.leaf(1.5);
        let y = g.leaf(-0.5);
        let m = g.mul(x, y);
        let s = g.add(m, x);
        let out = g.sigmoid(s);
        assert_valid_order(&g, out);
    }

    #[test]
    fn test_constants_are_excluded() {
        let mut g = Graph::new();
        let x = g.leaf(2.0);
        let c = g.constant(3.0);
        let s = g.add(x, c);
        assert_eq!(topological_sort(&g, s), vec![s, x]);
    }

    #[test]
    fn test_constant_root_yields_empty_order() {
        let mut g = Graph::new();
        let c = g.constant(3.0);
        assert!(topological_sort(&g, c).is_empty());
    }

    #[test]
    fn test_revisits_are_idempotent() {
        // Both operands of the multiplication are the same node.
        let mut g = Graph::new();
        let x = g.leaf(3.0);
        let y = g.mul(x, x);
        let order = topological_sort(&g, y);
        assert_eq!(order, vec![y, x]);
        let seen: HashSet<_> = order.iter().collect();
        assert_eq!(seen.len(), order.len());
    }
}
