/// Randomized backtracking placement
pub mod builder;
/// Generation entry points and the seeded multi-attempt generator
pub mod executor;
/// Connector rules for placeable tiles
pub mod rules;
/// Whole-grid compatibility checks
pub mod validation;
