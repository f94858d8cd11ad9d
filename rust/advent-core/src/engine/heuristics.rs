/// 2D grid coordinate used by the distance helpers.
pub type Point = (i32, i32);

/// Manhattan distance. Admissible for unit-cost 4-directional movement.
pub fn manhattan(a: Point, b: Point) -> f64 {
    ((a.0 - b.0).abs() + (a.1 - b.1).abs()) as f64
}

/// Chebyshev distance. Admissible for unit-cost 8-directional movement.
pub fn chebyshev(a: Point, b: Point) -> f64 {
    let dx = (a.0 - b.0).abs();
    let dy = (a.1 - b.1).abs();
    dx.max(dy) as f64
}

/// The zero heuristic, which degrades `shortest_path` to Dijkstra.
pub fn zero<N>(_node: &N) -> f64 {
    0.0
}
