#[cfg(test)]
mod tests {
    use crate::autograd::backpropagate;
    use crate::graph::Graph;

    #[test]
    fn test_max_forward() {
        let mut g = Graph::new();
        let a = g.leaf(2.0);
        let b = g.leaf(-5.0);
        let m = g.max(a, b);
        assert_eq!(g.value(m), 2.0);
    }

    #[test]
    fn test_max_backward_delivers_zero() {
        let mut g = Graph::new();
        let a = g.leaf(2.0);
        let b = g.leaf(-5.0);
        let m = g.max(a, b);
        backpropagate(&mut g, m, 1.0).unwrap();
        assert_eq!(g.grad(a), 0.0);
        assert_eq!(g.grad(b), 0.0);
    }
}
