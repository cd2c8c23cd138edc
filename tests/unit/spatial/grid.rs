//! Tests for the fixed-size tile grid

#[cfg(test)]
mod tests {
    use backtile::{Direction, GenerationError, Tile, TileGrid, TileType};

    // Tests a new grid is empty with the requested dimensions
    #[test]
    fn test_new_grid_is_empty() {
        let grid: TileGrid<TileType> = TileGrid::new(3, 5);

        assert_eq!(grid.dimensions(), (3, 5));
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 5);
        assert_eq!(grid.count_empty(), 15);
        assert!(!grid.is_complete());
        assert!(grid.iter().all(|(_, tile)| tile.is_empty()));
    }

    // Tests reads and writes inside and outside the grid
    #[test]
    fn test_get_and_set() {
        let mut grid = TileGrid::new(2, 2);

        assert_eq!(grid.set([1, 0], TileType::Cross), Some(TileType::Empty));
        assert_eq!(grid.get([1, 0]), Some(TileType::Cross));
        assert!(!grid.is_vacant([1, 0]));
        assert!(grid.is_vacant([0, 0]));

        assert_eq!(grid.set([2, 0], TileType::Cross), None);
        assert_eq!(grid.get([2, 0]), None);
        assert!(!grid.is_vacant([2, 0]));
        assert_eq!(grid.count_empty(), 3);
    }

    // Tests neighbours stop at every edge of the grid
    #[test]
    fn test_neighbour_bounds() {
        let grid: TileGrid<TileType> = TileGrid::new(2, 3);

        assert_eq!(grid.neighbour([0, 0], Direction::North), None);
        assert_eq!(grid.neighbour([0, 0], Direction::West), None);
        assert_eq!(grid.neighbour([0, 0], Direction::East), Some([0, 1]));
        assert_eq!(grid.neighbour([0, 0], Direction::South), Some([1, 0]));

        assert_eq!(grid.neighbour([1, 2], Direction::South), None);
        assert_eq!(grid.neighbour([1, 2], Direction::East), None);
        assert_eq!(grid.neighbour([1, 2], Direction::North), Some([0, 2]));
        assert_eq!(grid.neighbour([1, 2], Direction::West), Some([1, 1]));
    }

    // Tests construction from rows and copying back out
    #[test]
    fn test_from_rows() {
        let rows = vec![
            vec![TileType::Horizontal, TileType::Empty],
            vec![TileType::Vertical, TileType::Cross],
        ];
        let grid = TileGrid::from_rows(&rows).expect("rows are rectangular");

        assert_eq!(grid.dimensions(), (2, 2));
        assert_eq!(grid.get([1, 0]), Some(TileType::Vertical));
        assert_eq!(grid.to_rows(), rows);
        assert_eq!(grid.count_empty(), 1);
    }

    // Tests ragged rows are rejected
    #[test]
    fn test_from_rows_rejects_ragged_input() {
        let rows = vec![vec![TileType::Cross, TileType::Cross], vec![TileType::Cross]];
        let result = TileGrid::from_rows(&rows);

        assert!(matches!(
            result,
            Err(GenerationError::InvalidParameter {
                parameter: "rows",
                ..
            })
        ));
    }

    // Tests iteration visits cells in row-major order
    #[test]
    fn test_iter_row_major() {
        let mut grid = TileGrid::new(2, 2);
        grid.set([0, 1], TileType::TeeUp);

        let positions: Vec<[usize; 2]> = grid.iter().map(|(position, _)| position).collect();
        assert_eq!(positions, vec![[0, 0], [0, 1], [1, 0], [1, 1]]);

        let filled: Vec<_> = grid.iter().filter(|(_, tile)| !tile.is_empty()).collect();
        assert_eq!(filled, vec![([0, 1], TileType::TeeUp)]);
    }

    // Tests a grid with every cell filled reports completion
    #[test]
    fn test_is_complete() {
        let rows = vec![vec![TileType::Cross; 3]; 2];
        let grid = TileGrid::from_rows(&rows).expect("rectangular");
        assert!(grid.is_complete());
        assert_eq!(grid.count_empty(), 0);
    }
}
