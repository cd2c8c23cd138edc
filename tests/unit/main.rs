//! Unit tests mirroring the `src/` layout, plus smoke tests of the binary


/// Hand-sized tile sets for exercising the search
pub mod fixtures {
    use backtile::{Direction, RuleTable, Tile};

    /// Tiles named only by their connector rules in each fixture
    #[allow(missing_docs)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Piece {
        Empty,
        A,
        B,
        C,
    }

    impl Tile for Piece {
        const EMPTY: Self = Self::Empty;
    }

    /// A opens east, B opens west
    pub fn east_west_rules() -> RuleTable<Piece> {
        RuleTable::from_rules(&[
            (Piece::A, &[Direction::East]),
            (Piece::B, &[Direction::West]),
        ])
        .expect("east/west rules are valid")
    }

    /// A opens east, C opens nothing
    pub fn east_closed_rules() -> RuleTable<Piece> {
        RuleTable::from_rules(&[(Piece::A, &[Direction::East]), (Piece::C, &[])])
            .expect("east/closed rules are valid")
    }

    /// B opens west, C opens nothing
    pub fn west_closed_rules() -> RuleTable<Piece> {
        RuleTable::from_rules(&[(Piece::B, &[Direction::West]), (Piece::C, &[])])
            .expect("west/closed rules are valid")
    }

    /// A alone, opening east
    pub fn east_only_rules() -> RuleTable<Piece> {
        RuleTable::from_rules(&[(Piece::A, &[Direction::East])]).expect("east rule is valid")
    }
}

#[cfg(test)]
mod tests {
    use std::process::Command;

    // Tests the binary prints a bordered map of the requested size
    #[test]
    fn test_binary_prints_bordered_map() {
        let output = Command::new(env!("CARGO_BIN_EXE_backtile"))
            .args(["--width", "4", "--height", "3", "--attempts", "50", "--quiet"])
            .output()
            .expect("binary should start");

        assert!(
            output.status.success(),
            "stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        let stdout = String::from_utf8_lossy(&output.stdout);
        let lines: Vec<&str> = stdout.lines().collect();
        assert_eq!(lines.len(), 3 * 3 + 2);
        assert_eq!(lines.first().copied(), Some("+------------+"));
        assert_eq!(lines.last().copied(), Some("+------------+"));
        assert!(lines.iter().all(|line| line.chars().count() == 14));
    }

    // Tests invalid dimensions make the binary exit unsuccessfully
    #[test]
    fn test_binary_rejects_zero_width() {
        let output = Command::new(env!("CARGO_BIN_EXE_backtile"))
            .args(["--width", "0", "--quiet"])
            .output()
            .expect("binary should start");

        assert!(!output.status.success());
        assert!(output.stdout.is_empty());
    }
}
