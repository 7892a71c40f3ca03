use crate::error::ScalarGradError;
use crate::node::VarId;

/// Capability contract a computation-graph store must satisfy to participate
/// in reverse-mode differentiation.
///
/// [`topological_sort`](crate::autograd::topological_sort) and
/// [`backpropagate`](crate::autograd::backpropagate) are written purely in
/// terms of this trait. [`Graph`](crate::graph::Graph) is the production
/// implementation; tests use mocks to drive failure paths a well-formed
/// graph cannot produce.
pub trait Differentiable {
    /// True when the node has no recorded parent computation — an original
    /// input.
    fn is_leaf(&self, node: VarId) -> bool;

    /// True when the node is excluded from differentiation entirely.
    ///
    /// Independent of [`is_leaf`](Self::is_leaf): a constant is structurally
    /// a leaf but never receives a derivative and never appears in the
    /// topological order.
    fn is_constant(&self, node: VarId) -> bool;

    /// The ordered nodes this node's value was derived from; empty for
    /// leaves.
    fn parents(&self, node: VarId) -> &[VarId];

    /// Delivers `derivative` into the node's accumulated-derivative slot.
    ///
    /// The engine calls this on leaves only, exactly once per backward pass.
    /// Whether deliveries from successive passes sum or replace is the
    /// implementation's policy; [`Graph`](crate::graph::Graph) sums until
    /// reset.
    fn accumulate(&mut self, node: VarId, derivative: f64);

    /// Chain-rule expansion at `node`: converts an upstream derivative into
    /// an ordered sequence of per-parent local contributions.
    ///
    /// A node with several parents yields one pair per parent (the same
    /// parent id may legitimately appear twice when an operation consumed
    /// one value in two argument positions), but a pair must never name
    /// `node` itself.
    fn chain_rule(&self, node: VarId, upstream: f64)
        -> Result<Vec<(VarId, f64)>, ScalarGradError>;
}
