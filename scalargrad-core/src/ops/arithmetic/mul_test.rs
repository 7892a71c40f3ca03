#[cfg(test)]
mod tests {
    use crate::autograd::{backpropagate, check_grad, DEFAULT_EPSILON};
    use crate::graph::Graph;
    use approx::assert_relative_eq;

    #[test]
    fn test_mul_forward() {
        let mut g = Graph::new();
        let a = g.leaf(2.0);
        let b = g.leaf(3.0);
        let c = g.mul(a, b);
        assert_eq!(g.value(c), 6.0);
    }

    #[test]
    fn test_mul_backward() {
        let mut g = Graph::new();
        let a = g.leaf(2.0);
        let b = g.leaf(3.0);
        let c = g.mul(a, b);
        backpropagate(&mut g, c, 1.0).unwrap();
        assert_relative_eq!(g.grad(a), 3.0, epsilon = 1e-10);
        assert_relative_eq!(g.grad(b), 2.0, epsilon = 1e-10);
    }

    #[test]
    fn test_mul_same_operand_in_both_positions() {
        let mut g = Graph::new();
        let x = g.leaf(4.0);
        let y = g.mul(x, x);
        backpropagate(&mut g, y, 1.0).unwrap();
        assert_relative_eq!(g.grad(x), 8.0, epsilon = 1e-10);
    }

    #[test]
    fn test_mul_matches_oracle() {
        check_grad(
            |g, ids| g.mul(ids[0], ids[1]),
            &[1.5, -2.0],
            DEFAULT_EPSILON,
            1e-2,
        )
        .unwrap();
    }

    #[test]
    fn test_mul_matches_oracle_at_random_points() {
        use rand::{rngs::StdRng, Rng, SeedableRng};
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..8 {
            let a = rng.gen_range(-3.0..3.0);
            let b = rng.gen_range(-3.0..3.0);
            check_grad(
                |g, ids| g.mul(ids[0], ids[1]),
                &[a, b],
                DEFAULT_EPSILON,
                1e-2,
            )
            .unwrap();
        }
    }
}
