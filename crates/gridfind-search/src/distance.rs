use gridfind_core::Coord;

/// Manhattan (L1) distance between two coordinates.
///
/// Equals the step count of an unobstructed 4-directional path, so it is
/// admissible and consistent for unit-cost cardinal movement.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_distance() {
        assert_eq!(manhattan(Coord::new(0, 0), Coord::new(4, 4)), 8);
        assert_eq!(manhattan(Coord::new(2, 5), Coord::new(2, 5)), 0);
        assert_eq!(manhattan(Coord::new(3, 1), Coord::new(0, 2)), 4);
        // Symmetric.
        assert_eq!(
            manhattan(Coord::new(1, 7), Coord::new(5, 2)),
            manhattan(Coord::new(5, 2), Coord::new(1, 7)),
        );
    }
}
