pub mod exp;
pub mod inv;
pub mod ln;

pub use exp::exp_op;
pub use inv::inv_op;
pub use ln::ln_op;

pub(crate) use exp::exp_backward;
pub(crate) use inv::inv_backward;
pub(crate) use ln::ln_backward;
