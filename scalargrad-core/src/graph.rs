use crate::autograd::Differentiable;
use crate::context::Context;
use crate::error::ScalarGradError;
use crate::node::{Node, Op, VarId};
use crate::ops;

/// Arena holding every node of one computation graph.
///
/// Nodes are stored contiguously and addressed by [`VarId`] index. A node is
/// kept alive for the lifetime of the graph, so a value referenced by several
/// downstream consumers (diamond structure) needs no reference counting; the
/// graph is acyclic by construction of the forward computation, so index
/// ownership cannot form cycles either.
///
/// The backward pass takes `&mut Graph`, which rules out two concurrent
/// passes over shared leaves at compile time.
#[derive(Debug, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    no_grad: bool,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph whose operations skip retaining forward values.
    ///
    /// Use when the computation is known not to require gradients; forward
    /// values are unaffected, but the per-node contexts stay empty.
    pub fn no_grad() -> Self {
        Graph {
            nodes: Vec::new(),
            no_grad: true,
        }
    }

    /// Appends a new input variable with the given value and returns its id.
    pub fn leaf(&mut self, value: f64) -> VarId {
        let ctx = self.new_context();
        self.push(Node {
            value,
            op: None,
            parents: Vec::new(),
            constant: false,
            grad: 0.0,
            ctx,
        })
    }

    /// Appends a constant input, excluded from differentiation entirely.
    ///
    /// Constants never appear in the topological order and never receive or
    /// propagate a derivative.
    pub fn constant(&mut self, value: f64) -> VarId {
        let ctx = self.new_context();
        self.push(Node {
            value,
            op: None,
            parents: Vec::new(),
            constant: true,
            grad: 0.0,
            ctx,
        })
    }

    /// Forward value of `node`.
    pub fn value(&self, node: VarId) -> f64 {
        self.nodes[node.0].value
    }

    /// Accumulated derivative of `node`.
    ///
    /// Meaningful on leaves; accumulation persists and sums across backward
    /// passes until [`zero_grad`](Graph::zero_grad) resets it.
    pub fn grad(&self, node: VarId) -> f64 {
        self.nodes[node.0].grad
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the graph holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Resets every accumulated-derivative slot to zero.
    pub fn zero_grad(&mut self) {
        for node in &mut self.nodes {
            node.grad = 0.0;
        }
    }

    pub(crate) fn node(&self, id: VarId) -> &Node {
        &self.nodes[id.0]
    }

    /// Fresh context honouring the graph's retention mode.
    pub(crate) fn new_context(&self) -> Context {
        Context::new(self.no_grad)
    }

    /// Appends an operation node. Parents must already live in this arena,
    /// which keeps the graph acyclic: a node can only point backwards.
    pub(crate) fn push_op(&mut self, op: Op, parents: Vec<VarId>, value: f64, ctx: Context) -> VarId {
        debug_assert!(parents.iter().all(|p| p.0 < self.nodes.len()));
        self.push(Node {
            value,
            op: Some(op),
            parents,
            constant: false,
            grad: 0.0,
            ctx,
        })
    }

    fn push(&mut self, node: Node) -> VarId {
        let id = VarId(self.nodes.len());
        self.nodes.push(node);
        id
    }
}

// Convenience constructors, one per elementary operation. These delegate to
// the `_op` functions under `ops`, which own the forward math and the saved
// values for the chain rule.
impl Graph {
    /// `a + b`.
    pub fn add(&mut self, a: VarId, b: VarId) -> VarId {
        ops::arithmetic::add_op(self, a, b)
    }

    /// `a * b`.
    pub fn mul(&mut self, a: VarId, b: VarId) -> VarId {
        ops::arithmetic::mul_op(self, a, b)
    }

    /// `-a`.
    pub fn neg(&mut self, a: VarId) -> VarId {
        ops::arithmetic::neg_op(self, a)
    }

    /// Natural logarithm of `a`.
    pub fn ln(&mut self, a: VarId) -> VarId {
        ops::math_elem::ln_op(self, a)
    }

    /// `e` raised to `a`.
    pub fn exp(&mut self, a: VarId) -> VarId {
        ops::math_elem::exp_op(self, a)
    }

    /// Reciprocal of `a`.
    pub fn inv(&mut self, a: VarId) -> VarId {
        ops::math_elem::inv_op(self, a)
    }

    /// Rectified linear unit of `a`.
    pub fn relu(&mut self, a: VarId) -> VarId {
        ops::activation::relu_op(self, a)
    }

    /// Logistic function of `a`.
    pub fn sigmoid(&mut self, a: VarId) -> VarId {
        ops::activation::sigmoid_op(self, a)
    }

    /// `a < b`, encoded as 1.0 or 0.0. Non-differentiable.
    pub fn lt(&mut self, a: VarId, b: VarId) -> VarId {
        ops::comparison::lt_op(self, a, b)
    }

    /// `a == b`, encoded as 1.0 or 0.0. Non-differentiable.
    pub fn eq(&mut self, a: VarId, b: VarId) -> VarId {
        ops::comparison::eq_op(self, a, b)
    }

    /// The larger of `a` and `b`. Treated as non-differentiable selection.
    pub fn max(&mut self, a: VarId, b: VarId) -> VarId {
        ops::comparison::max_op(self, a, b)
    }
}

impl Differentiable for Graph {
    fn is_leaf(&self, node: VarId) -> bool {
        self.nodes[node.0].parents.is_empty()
    }

    fn is_constant(&self, node: VarId) -> bool {
        self.nodes[node.0].constant
    }

    fn parents(&self, node: VarId) -> &[VarId] {
        &self.nodes[node.0].parents
    }

    fn accumulate(&mut self, node: VarId, derivative: f64) {
        self.nodes[node.0].grad += derivative;
    }

    fn chain_rule(&self, node: VarId, upstream: f64) -> Result<Vec<(VarId, f64)>, ScalarGradError> {
        let n = self.node(node);
        let op = n.op.ok_or_else(|| {
            ScalarGradError::InternalError(format!("chain rule invoked on leaf node {:?}", node))
        })?;
        let pairs = match op {
            Op::Add => ops::arithmetic::add_backward(n, upstream)?,
            Op::Mul => ops::arithmetic::mul_backward(n, upstream)?,
            Op::Neg => ops::arithmetic::neg_backward(n, upstream)?,
            Op::Ln => ops::math_elem::ln_backward(n, upstream)?,
            Op::Exp => ops::math_elem::exp_backward(n, upstream)?,
            Op::Inv => ops::math_elem::inv_backward(n, upstream)?,
            Op::Relu => ops::activation::relu_backward(n, upstream)?,
            Op::Sigmoid => ops::activation::sigmoid_backward(n, upstream)?,
            Op::Lt | Op::Eq | Op::Max => ops::comparison::zero_backward(n, upstream)?,
        };
        // Constants are excluded from differentiation; drop their pairs here
        // so they never enter the pending-derivative map. Zero-valued pairs
        // for non-constant parents are kept.
        Ok(pairs
            .into_iter()
            .filter(|(parent, _)| !self.is_constant(*parent))
            .collect())
    }
}
