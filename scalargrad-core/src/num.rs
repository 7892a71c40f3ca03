//! Scalar prelude: the elementary functions the graph operations are built
//! from, their analytic derivative helpers, and small list utilities.
//!
//! Everything here is pure and stateless. The engine never inspects these
//! functions; it only ever sees the per-parent contributions the chain rules
//! compute with them.

use num_traits::Float;

/// `a * b`.
pub fn mul<F: Float>(a: F, b: F) -> F {
    a * b
}

/// `a + b`.
pub fn add<F: Float>(a: F, b: F) -> F {
    a + b
}

/// `-a`.
pub fn neg<F: Float>(a: F) -> F {
    -a
}

/// `a < b`.
pub fn lt<F: Float>(a: F, b: F) -> bool {
    a < b
}

/// Exact equality of `a` and `b`.
pub fn eq<F: Float>(a: F, b: F) -> bool {
    a == b
}

/// The larger of `a` and `b`.
pub fn max<F: Float>(a: F, b: F) -> F {
    if a > b {
        a
    } else {
        b
    }
}

/// True when `a` and `b` differ by less than `1e-2`.
pub fn is_close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-2
}

/// Logistic function.
///
/// Computed as `1 / (1 + e^-x)` for non-negative `x` and `e^x / (1 + e^x)`
/// otherwise, so the exponential never overflows.
pub fn sigmoid<F: Float>(x: F) -> F {
    if x >= F::zero() {
        F::one() / (F::one() + (-x).exp())
    } else {
        x.exp() / (F::one() + x.exp())
    }
}

/// `max(x, 0)`.
pub fn relu<F: Float>(x: F) -> F {
    if x > F::zero() {
        x
    } else {
        F::zero()
    }
}

/// Natural logarithm.
pub fn ln<F: Float>(x: F) -> F {
    x.ln()
}

/// `e^x`.
pub fn exp<F: Float>(x: F) -> F {
    x.exp()
}

/// `1 / x`.
pub fn inv<F: Float>(x: F) -> F {
    x.recip()
}

// --- Derivative helpers ---
//
// Shape: (input value, upstream derivative) -> downstream contribution.
// Each one is the exact analytic derivative of its elementary function at
// the input, times the upstream value (the chain rule at a single edge).

/// `upstream / x`.
pub fn ln_back<F: Float>(x: F, upstream: F) -> F {
    upstream / x
}

/// `-upstream / x^2`.
pub fn inv_back<F: Float>(x: F, upstream: F) -> F {
    -upstream / (x * x)
}

/// Passes `upstream` through where the rectifier was active, zero elsewhere.
pub fn relu_back<F: Float>(x: F, upstream: F) -> F {
    if x > F::zero() {
        upstream
    } else {
        F::zero()
    }
}

/// `sigmoid(x) * (1 - sigmoid(x)) * upstream`.
pub fn sigmoid_back<F: Float>(x: F, upstream: F) -> F {
    let s = sigmoid(x);
    s * (F::one() - s) * upstream
}

/// `e^x * upstream`.
pub fn exp_back<F: Float>(x: F, upstream: F) -> F {
    x.exp() * upstream
}

// --- Higher-order list utilities ---

/// Applies `op` to every element.
pub fn map_each<F: Float>(xs: &[F], op: impl Fn(F) -> F) -> Vec<F> {
    xs.iter().map(|&x| op(x)).collect()
}

/// Combines corresponding elements of two slices, stopping at the shorter.
pub fn zip_with<F: Float>(xs: &[F], ys: &[F], comb: impl Fn(F, F) -> F) -> Vec<F> {
    xs.iter().zip(ys).map(|(&x, &y)| comb(x, y)).collect()
}

/// Folds the slice with `comb`; `None` on an empty slice.
pub fn reduce<F: Float>(xs: &[F], comb: impl Fn(F, F) -> F) -> Option<F> {
    let mut iter = xs.iter().copied();
    let first = iter.next()?;
    Some(iter.fold(first, comb))
}

/// Negates every element.
pub fn neg_list<F: Float>(xs: &[F]) -> Vec<F> {
    map_each(xs, neg)
}

/// Element-wise sum of two slices.
pub fn add_lists<F: Float>(xs: &[F], ys: &[F]) -> Vec<F> {
    zip_with(xs, ys, add)
}

/// Sum of all elements; zero for an empty slice.
pub fn sum<F: Float>(xs: &[F]) -> F {
    reduce(xs, add).unwrap_or_else(F::zero)
}

/// Product of all elements; one for an empty slice.
pub fn prod<F: Float>(xs: &[F]) -> F {
    reduce(xs, mul).unwrap_or_else(F::one)
}
