//! Tests for whole-grid compatibility checks

#[cfg(test)]
mod tests {
    use crate::fixtures::{Piece, east_west_rules};
    use backtile::algorithm::validation::{Violation, find_violations, is_consistent};
    use backtile::{Direction, RuleTable, TileGrid, TileType};

    // Tests a matching pair produces no violations
    #[test]
    fn test_matching_pair_is_consistent() {
        let rules = east_west_rules();
        let grid = TileGrid::from_rows(&[vec![Piece::A, Piece::B]]).expect("rectangular");

        assert!(find_violations(&grid, &rules).is_empty());
        assert!(is_consistent(&grid, &rules));
    }

    // Tests a one-sided connector is reported once with its direction
    #[test]
    fn test_horizontal_violation() {
        let rules = east_west_rules();
        let grid = TileGrid::from_rows(&[vec![Piece::A, Piece::A]]).expect("rectangular");

        assert_eq!(
            find_violations(&grid, &rules),
            vec![Violation {
                position: [0, 0],
                direction: Direction::East,
                tile: Piece::A,
                neighbour: Piece::A,
            }]
        );
        assert!(!is_consistent(&grid, &rules));
    }

    // Tests vertical pairs are checked too
    #[test]
    fn test_vertical_violation() {
        let rules = RuleTable::standard();
        let grid = TileGrid::from_rows(&[
            vec![TileType::Vertical, TileType::CornerSouthEast],
            vec![TileType::Horizontal, TileType::Vertical],
        ])
        .expect("rectangular");

        let violations = find_violations(&grid, &rules);
        assert_eq!(violations.len(), 2);
        assert!(violations.iter().any(|v| v.position == [0, 0]
            && v.direction == Direction::South
            && v.neighbour == TileType::Horizontal));
        assert!(violations.iter().any(|v| v.position == [1, 0]
            && v.direction == Direction::East
            && v.tile == TileType::Horizontal));
    }

    // Tests empty cells are skipped but keep the grid from being consistent
    #[test]
    fn test_empty_cells_are_ignored() {
        let rules = east_west_rules();
        let grid = TileGrid::from_rows(&[vec![Piece::A, Piece::Empty]]).expect("rectangular");

        assert!(find_violations(&grid, &rules).is_empty());
        assert!(!is_consistent(&grid, &rules));
    }
}
