/// Per-operation record of forward values retained for the later chain-rule
/// call on the node that owns it.
///
/// A fresh `Context` is created for every forward operation; it lives and
/// dies with its node. Saving is write-once per instance in spirit: a second
/// [`save`](Context::save) overwrites the previous values (last write wins),
/// it never appends.
#[derive(Debug, Clone, Default)]
pub struct Context {
    no_grad: bool,
    saved: Vec<f64>,
}

impl Context {
    /// Creates an empty context. When `no_grad` is set, retention is
    /// suppressed entirely and [`save`](Context::save) becomes a no-op.
    pub fn new(no_grad: bool) -> Self {
        Context {
            no_grad,
            saved: Vec::new(),
        }
    }

    /// Whether this context suppresses retention.
    pub fn no_grad(&self) -> bool {
        self.no_grad
    }

    /// Stores `values` for use by the chain rule during backpropagation.
    ///
    /// Overwrites anything saved before. Does nothing when the enclosing
    /// computation was marked as not requiring gradients.
    pub fn save(&mut self, values: &[f64]) {
        if self.no_grad {
            return;
        }
        self.saved = values.to_vec();
    }

    /// Read access to the saved values, in the order they were given.
    pub fn saved_values(&self) -> &[f64] {
        &self.saved
    }
}
