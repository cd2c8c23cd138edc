//! Tests for glyph derivation and bordered text rendering

#[cfg(test)]
mod tests {
    use crate::fixtures::{Piece, east_west_rules};
    use backtile::io::render::{GlyphTable, SOLID_GLYPH, connector_glyph, render};
    use backtile::{Direction, DirectionSet, RuleTable, TileGrid, TileType};

    fn lines(glyph: [[char; 3]; 3]) -> Vec<String> {
        glyph.iter().map(|row| row.iter().collect()).collect()
    }

    // Tests straight pieces open the matching edges
    #[test]
    fn test_connector_glyph_for_pipes() {
        let horizontal =
            connector_glyph(DirectionSet::from_directions(&[Direction::West, Direction::East]));
        assert_eq!(lines(horizontal), vec!["###", "   ", "###"]);

        assert_eq!(
            lines(connector_glyph(DirectionSet::all())),
            vec!["# #", "   ", "# #"]
        );
        assert_eq!(
            lines(connector_glyph(DirectionSet::empty())),
            vec!["###", "# #", "###"]
        );
    }

    // Tests tees and corners keep the centre open and corners walled
    #[test]
    fn test_connector_glyph_for_bends() {
        let rules = RuleTable::standard();
        let glyphs = GlyphTable::from_rules(&rules);

        assert_eq!(
            lines(glyphs.glyph(TileType::TeeRight)),
            vec!["# #", "#  ", "# #"]
        );
        assert_eq!(
            lines(glyphs.glyph(TileType::CornerSouthWest)),
            vec!["###", "  #", "# #"]
        );
    }

    // Tests empty and unknown tiles render as solid blocks
    #[test]
    fn test_solid_fallback() {
        let glyphs = GlyphTable::from_rules(&RuleTable::standard());
        assert_eq!(glyphs.glyph(TileType::Empty), SOLID_GLYPH);

        let mut blank: GlyphTable<Piece> = GlyphTable::default();
        assert_eq!(blank.glyph(Piece::A), SOLID_GLYPH);

        let custom = [['+'; 3]; 3];
        blank.insert(Piece::A, custom);
        assert_eq!(blank.glyph(Piece::A), custom);
    }

    // Tests the bordered layout of a two-cell map
    #[test]
    fn test_render_pair() {
        let rules = east_west_rules();
        let grid = TileGrid::from_rows(&[vec![Piece::A, Piece::B]]).expect("rectangular");

        let text = render(&grid, &GlyphTable::from_rules(&rules));
        assert_eq!(
            text,
            "+------+\n|######|\n|#    #|\n|######|\n+------+\n"
        );
    }

    // Tests every row of cells becomes three framed lines
    #[test]
    fn test_render_dimensions() {
        let grid: TileGrid<TileType> = TileGrid::new(2, 5);
        let text = render(&grid, &GlyphTable::new());

        let rendered: Vec<&str> = text.lines().collect();
        assert_eq!(rendered.len(), 2 * 3 + 2);
        assert!(rendered.iter().all(|line| line.chars().count() == 5 * 3 + 2));
        assert_eq!(rendered.get(1).copied(), Some("|###############|"));
    }
}
