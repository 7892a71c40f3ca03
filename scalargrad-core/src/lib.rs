//! # ScalarGrad
//!
//! Scalar reverse-mode automatic differentiation over a dynamically
//! constructed computation graph, with a central-difference oracle for
//! validating analytic gradients.
//!
//! A client builds an expression from [`Graph`] leaves and elementary
//! operations, then calls [`backpropagate`] on the final node with a seed
//! derivative (commonly `1.0`). The engine walks the graph in topological
//! order and delivers to every contributing leaf its partial derivative,
//! summed exactly once per node even when a value feeds several downstream
//! computations.
//!
//! ```
//! use scalargrad_core::{backpropagate, Graph};
//!
//! let mut g = Graph::new();
//! let x = g.leaf(2.0);
//! let y = g.leaf(3.0);
//! let z = g.mul(x, y);
//! backpropagate(&mut g, z, 1.0).unwrap();
//! assert_eq!(g.grad(x), 3.0);
//! assert_eq!(g.grad(y), 2.0);
//! ```

pub mod autograd;
pub mod context;
pub mod error;
pub mod graph;
pub mod node;
pub mod num;
pub mod ops;
pub mod utils;

pub use autograd::{
    backpropagate, central_difference, check_grad, topological_sort, Differentiable,
    GradCheckError,
};
pub use context::Context;
pub use error::ScalarGradError;
pub use graph::Graph;
pub use node::VarId;
