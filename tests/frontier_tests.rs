use ordered_float::OrderedFloat;
use safest_path::data_structures::Frontier;

#[test]
fn test_pop_returns_minimum_first() {
    let mut frontier: Frontier<usize, OrderedFloat<f64>> = Frontier::new();
    frontier.push(0, OrderedFloat(3.0));
    frontier.push(1, OrderedFloat(1.0));
    frontier.push(2, OrderedFloat(2.0));

    assert_eq!(frontier.pop(), Some((1, OrderedFloat(1.0))));
    assert_eq!(frontier.pop(), Some((2, OrderedFloat(2.0))));
    assert_eq!(frontier.pop(), Some((0, OrderedFloat(3.0))));
    assert_eq!(frontier.pop(), None);
}

#[test]
fn test_duplicate_entries_surface_best_first() {
    let mut frontier: Frontier<usize, OrderedFloat<f64>> = Frontier::new();
    frontier.push(7, OrderedFloat(5.0));
    frontier.push(7, OrderedFloat(2.5));

    // The improved snapshot surfaces first; the stale one stays behind it
    assert_eq!(frontier.pop(), Some((7, OrderedFloat(2.5))));
    assert_eq!(frontier.pop(), Some((7, OrderedFloat(5.0))));
    assert!(frontier.is_empty());
}

#[test]
fn test_peek_does_not_remove() {
    let mut frontier: Frontier<usize, OrderedFloat<f64>> = Frontier::new();
    frontier.push(3, OrderedFloat(4.0));
    frontier.push(9, OrderedFloat(0.5));

    assert_eq!(frontier.peek(), Some((9, OrderedFloat(0.5))));
    assert_eq!(frontier.len(), 2);
    assert_eq!(frontier.pop(), Some((9, OrderedFloat(0.5))));
    assert_eq!(frontier.len(), 1);
}

#[test]
fn test_clear() {
    let mut frontier: Frontier<usize, OrderedFloat<f64>> = Frontier::new();
    assert!(frontier.is_empty());

    frontier.push(1, OrderedFloat(1.0));
    frontier.push(2, OrderedFloat(2.0));
    assert_eq!(frontier.len(), 2);

    frontier.clear();
    assert!(frontier.is_empty());
    assert_eq!(frontier.pop(), None);
}
