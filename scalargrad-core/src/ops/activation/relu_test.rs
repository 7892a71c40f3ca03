#[cfg(test)]
mod tests {
    use crate::autograd::{backpropagate, check_grad, DEFAULT_EPSILON};
    use crate::graph::Graph;

    #[test]
    fn test_relu_forward() {
        let mut g = Graph::new();
        let pos = g.leaf(2.0);
        let zero = g.leaf(0.0);
        let min = g.leaf(-1.5);
        let r_pos = g.relu(pos);
        let r_zero = g.relu(zero);
        let r_min = g.relu(min);
        assert_eq!(g.value(r_pos), 2.0);
        assert_eq!(g.value(r_zero), 0.0);
        assert_eq!(g.value(r_min), 0.0);
    }

    #[test]
    fn test_relu_backward_active() {
        let mut g = Graph::new();
        let x = g.leaf(2.0);
        let y = g.relu(x);
        backpropagate(&mut g, y, 1.0).unwrap();
        assert_eq!(g.grad(x), 1.0);
    }

    #[test]
    fn test_relu_backward_blocks_inactive_input() {
        let mut g = Graph::new();
        let x = g.leaf(-2.0);
        let y = g.relu(x);
        backpropagate(&mut g, y, 1.0).unwrap();
        assert_eq!(g.grad(x), 0.0);
    }

    #[test]
    fn test_relu_backward_zero_at_kink() {
        let mut g = Graph::new();
        let x = g.leaf(0.0);
        let y = g.relu(x);
        backpropagate(&mut g, y, 1.0).unwrap();
        assert_eq!(g.grad(x), 0.0);
    }

    #[test]
    fn test_relu_matches_oracle_away_from_kink() {
        // The central difference straddles the kink at 0, so only probe
        // points where both evaluations land on the same side.
        for x in [-2.0, -1.0, 1.0, 2.0] {
            check_grad(|g, ids| g.relu(ids[0]), &[x], DEFAULT_EPSILON, 1e-2).unwrap();
        }
    }
}
