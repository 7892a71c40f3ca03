use crate::node::VarId;
use thiserror::Error;

/// Custom error type for the ScalarGrad engine.
///
/// Every variant indicates a structural bug in graph construction or engine
/// logic, never a transient condition: callers should propagate these as hard
/// failures rather than retry, since a silently wrong gradient is worse than
/// a crash.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ScalarGradError {
    #[error("chain rule expansion for node {node:?} named the node itself as a parent")]
    SelfReferentialGradient { node: VarId },

    #[error("no pending derivative for node {node:?} during the backward walk; the topological order is broken")]
    MissingPendingDerivative { node: VarId },

    #[error("epsilon must be strictly positive, got {epsilon}")]
    NonPositiveEpsilon { epsilon: f64 },

    #[error("argument index {index} out of range for {len} values")]
    ArgIndexOutOfBounds { index: usize, len: usize },

    #[error("Internal error: {0}")]
    InternalError(String),
}
