/// Checks that two scalars are approximately equal within a tolerance.
/// Panics with the actual, expected and observed difference otherwise.
pub fn check_scalar_near(actual: f64, expected: f64, tolerance: f64) {
    let diff = (actual - expected).abs();
    if diff > tolerance {
        panic!(
            "Scalar mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual, expected, diff, tolerance
        );
    }
}
