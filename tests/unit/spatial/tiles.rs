//! Tests for the tile trait and the bundled pipe tile set

#[cfg(test)]
mod tests {
    use backtile::{DirectionSet, Tile, TileType};
    use std::collections::HashSet;

    // Tests only the empty member reports empty
    #[test]
    fn test_empty_member() {
        assert!(TileType::Empty.is_empty());
        assert_eq!(TileType::EMPTY, TileType::Empty);
        assert_eq!(TileType::default(), TileType::Empty);
        assert!(TileType::PLACEABLE.iter().all(|tile| !tile.is_empty()));
    }

    // Tests the placeable list has eleven distinct members
    #[test]
    fn test_placeable_members_are_distinct() {
        let unique: HashSet<TileType> = TileType::PLACEABLE.into_iter().collect();
        assert_eq!(unique.len(), 11);
        assert!(!unique.contains(&TileType::Empty));
    }

    // Tests every piece has at least two connectors and no two pieces share a set
    #[test]
    fn test_connector_sets() {
        assert!(TileType::Empty.connectors().is_empty());

        let mut seen = HashSet::new();
        for tile in TileType::PLACEABLE {
            let set = DirectionSet::from_directions(tile.connectors());
            assert_eq!(set.len(), tile.connectors().len(), "{tile:?} repeats a side");
            assert!(set.len() >= 2, "{tile:?} is a dead end");
            assert!(seen.insert(set), "{tile:?} duplicates another piece");
        }
    }

    // Tests a few pieces against their names
    #[test]
    fn test_named_pieces() {
        let cross = DirectionSet::from_directions(TileType::Cross.connectors());
        assert_eq!(cross, DirectionSet::all());

        let horizontal = DirectionSet::from_directions(TileType::Horizontal.connectors());
        assert_eq!(horizontal.to_string(), "-E-W");

        let corner = DirectionSet::from_directions(TileType::CornerSouthEast.connectors());
        assert_eq!(corner.to_string(), "-ES-");
    }
}
