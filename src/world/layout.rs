//! Level layout table and RON loading.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::error::DataLoadError;

/// Where the authored layout table lives.
pub const LEVELS_PATH: &str = "assets/data/levels.ron";

/// Scale applied to the ground sprite for the full-width base platform.
pub const BASE_PLATFORM_SCALE: f32 = 2.0;

fn default_fruit_count() -> usize {
    5
}

fn default_base_platform() -> (f32, f32) {
    (400.0, 568.0)
}

/// Static configuration for one level.
///
/// Positions are in screen space: origin at the top-left, y growing down.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LevelConfig {
    pub level_number: u32,
    /// Centres of the floating platforms. The base platform is shared and
    /// lives on [`LevelTable`].
    pub platform_positions: Vec<(f32, f32)>,
    #[serde(default = "default_fruit_count")]
    pub fruit_count: usize,
}

/// Result of looking a level up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Layout<'a> {
    Level(&'a LevelConfig),
    /// No layout exists for that number: the run is over.
    Complete,
}

/// Every level's layout, indexed from 1.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LevelTable {
    #[serde(default = "default_base_platform")]
    pub base_platform: (f32, f32),
    pub levels: Vec<LevelConfig>,
}

impl Default for LevelTable {
    fn default() -> Self {
        Self {
            base_platform: default_base_platform(),
            levels: vec![
                LevelConfig {
                    level_number: 1,
                    platform_positions: vec![(600.0, 400.0), (50.0, 250.0), (750.0, 220.0)],
                    fruit_count: 5,
                },
                LevelConfig {
                    level_number: 2,
                    platform_positions: vec![(300.0, 400.0), (500.0, 280.0), (700.0, 160.0)],
                    fruit_count: 5,
                },
                LevelConfig {
                    level_number: 3,
                    platform_positions: vec![
                        (200.0, 450.0),
                        (400.0, 350.0),
                        (600.0, 250.0),
                        (800.0, 150.0),
                    ],
                    fruit_count: 5,
                },
            ],
        }
    }
}

impl LevelTable {
    /// Look up the layout for `level`. Anything past the last level is `Complete`.
    pub fn layout_for(&self, level: u32) -> Layout<'_> {
        level
            .checked_sub(1)
            .and_then(|index| self.levels.get(index as usize))
            .map_or(Layout::Complete, Layout::Level)
    }

    /// Number of the final level.
    pub fn last_level(&self) -> u32 {
        self.levels.len() as u32
    }

    /// Parse and validate a table from RON text. `origin` names the source in errors.
    pub fn from_ron(contents: &str, origin: &str) -> Result<Self, DataLoadError> {
        let table: LevelTable = ron::from_str(contents).map_err(|e| DataLoadError::ParseError {
            path: origin.to_string(),
            details: e.to_string(),
        })?;
        table.validate(origin)
    }

    /// Read a table from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataLoadError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| DataLoadError::ReadError {
            path: path.display().to_string(),
            details: e.to_string(),
        })?;
        Self::from_ron(&contents, &path.display().to_string())
    }

    fn validate(self, origin: &str) -> Result<Self, DataLoadError> {
        if self.levels.is_empty() {
            return Err(DataLoadError::NoLevels {
                path: origin.to_string(),
            });
        }

        for (expected, level) in (1u32..).zip(&self.levels) {
            if level.level_number != expected {
                return Err(DataLoadError::NonContiguousLevel {
                    expected,
                    found: level.level_number,
                });
            }
            if level.fruit_count == 0 {
                return Err(DataLoadError::EmptyLevel {
                    level: level.level_number,
                });
            }
        }

        Ok(self)
    }
}

/// Load the authored table, falling back to the built-in one.
pub fn load_level_table() -> LevelTable {
    match LevelTable::load(LEVELS_PATH) {
        Ok(table) => {
            info!("Loaded {} level layout(s) from {}", table.levels.len(), LEVELS_PATH);
            table
        }
        Err(DataLoadError::ReadError { path, details }) => {
            warn!("Could not read {}: {}. Using built-in layouts.", path, details);
            LevelTable::default()
        }
        Err(e) => {
            error!("{}. Using built-in layouts.", e);
            LevelTable::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_levels_resolve() {
        let table = LevelTable::default();
        for level in 1..=3 {
            let Layout::Level(config) = table.layout_for(level) else {
                panic!("level {level} should have a layout");
            };
            assert_eq!(config.level_number, level);
            assert_eq!(config.fruit_count, 5);
            assert!((3..=4).contains(&config.platform_positions.len()));
        }
    }

    #[test]
    fn past_the_last_level_is_complete() {
        let table = LevelTable::default();
        assert_eq!(table.last_level(), 3);
        assert_eq!(table.layout_for(4), Layout::Complete);
        assert_eq!(table.layout_for(u32::MAX), Layout::Complete);
        assert_eq!(table.layout_for(0), Layout::Complete);
    }

    #[test]
    fn level_three_has_four_platforms() {
        let table = LevelTable::default();
        let Layout::Level(config) = table.layout_for(3) else {
            panic!("level 3 missing");
        };
        assert_eq!(config.platform_positions.last(), Some(&(800.0, 150.0)));
        assert_eq!(config.platform_positions.len(), 4);
    }

    #[test]
    fn authored_file_matches_built_in_table() {
        let contents = include_str!("../../assets/data/levels.ron");
        let table = LevelTable::from_ron(contents, LEVELS_PATH).unwrap();
        assert_eq!(table, LevelTable::default());
    }

    #[test]
    fn fruit_count_defaults_to_five() {
        let table = LevelTable::from_ron(
            "(levels: [(level_number: 1, platform_positions: [(10.0, 20.0)])])",
            "inline",
        )
        .unwrap();
        assert_eq!(table.levels[0].fruit_count, 5);
        assert_eq!(table.base_platform, (400.0, 568.0));
    }

    #[test]
    fn rejects_gaps_in_level_numbers() {
        let result = LevelTable::from_ron(
            "(levels: [(level_number: 1, platform_positions: []), (level_number: 3, platform_positions: [])])",
            "inline",
        );
        assert!(matches!(
            result,
            Err(DataLoadError::NonContiguousLevel { expected: 2, found: 3 })
        ));
    }

    #[test]
    fn rejects_empty_tables_and_fruitless_levels() {
        assert!(matches!(
            LevelTable::from_ron("(levels: [])", "inline"),
            Err(DataLoadError::NoLevels { .. })
        ));
        assert!(matches!(
            LevelTable::from_ron(
                "(levels: [(level_number: 1, platform_positions: [], fruit_count: 0)])",
                "inline"
            ),
            Err(DataLoadError::EmptyLevel { level: 1 })
        ));
    }

    #[test]
    fn malformed_ron_is_a_parse_error() {
        assert!(matches!(
            LevelTable::from_ron("(levels: [", "broken.ron"),
            Err(DataLoadError::ParseError { .. })
        ));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        assert!(matches!(
            LevelTable::load("assets/data/does_not_exist.ron"),
            Err(DataLoadError::ReadError { .. })
        ));
    }
}
