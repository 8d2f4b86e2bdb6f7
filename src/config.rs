use std::{path::PathBuf, time::Duration};

use crate::grid::{Coord, Grid, GridError};

/// Runtime settings for the visualizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub rows: u16,
    pub cols: u16,
    pub start: Coord,
    pub goal: Coord,
    /// Delay between revealing two visited cells
    pub visit_delay: Duration,
    /// Delay between revealing two path cells
    pub path_delay: Duration,
    /// Delay between revealing two maze walls
    pub wall_delay: Duration,
    /// Seed for maze generation. Random when unset.
    pub seed: Option<u64>,
    /// Directory the log file is written to
    pub log_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 50,
            start: (10, 10),
            goal: (10, 40),
            visit_delay: Duration::from_millis(10),
            path_delay: Duration::from_millis(50),
            wall_delay: Duration::from_millis(10),
            seed: None,
            log_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Parses `--rows N`, `--cols N`, `--seed N` and `--log-dir PATH`.
    ///
    /// The default start and goal are kept when they still fit. On a smaller grid they
    /// move to the same relative positions as the default layout: the middle row, a fifth
    /// and four fifths of the way across. A single column stacks them at either end.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Config::default();
        let mut args = args.into_iter();
        let mut resized = false;

        while let Some(flag) = args.next() {
            let value = args
                .next()
                .ok_or_else(|| ConfigError::MissingValue(flag.clone()))?;
            match flag.as_str() {
                "--rows" => {
                    config.rows = parse_dimension(&flag, &value)?;
                    resized = true;
                }
                "--cols" => {
                    config.cols = parse_dimension(&flag, &value)?;
                    resized = true;
                }
                "--seed" => {
                    config.seed = Some(value.parse::<u64>().map_err(|_| {
                        ConfigError::InvalidValue {
                            flag: flag.clone(),
                            value: value.clone(),
                        }
                    })?);
                }
                "--log-dir" => config.log_dir = PathBuf::from(value),
                _ => return Err(ConfigError::UnknownFlag(flag)),
            }
        }

        let fits = |(row, col): Coord| row < config.rows && col < config.cols;
        if resized && !(fits(config.start) && fits(config.goal)) {
            (config.start, config.goal) = relative_start_and_goal(config.rows, config.cols)?;
        }
        Ok(config)
    }

    /// Builds the empty grid described by this configuration.
    pub fn build_grid(&self) -> Result<Grid, GridError> {
        Grid::new(self.rows, self.cols, self.start, self.goal)
    }
}

fn relative_start_and_goal(rows: u16, cols: u16) -> Result<(Coord, Coord), ConfigError> {
    if cols == 1 {
        if rows == 1 {
            return Err(ConfigError::TooSmall { rows, cols });
        }
        return Ok(((0, 0), (rows - 1, 0)));
    }
    let row = rows / 2;
    Ok(((row, cols / 5), (row, (cols as u32 * 4 / 5) as u16)))
}

fn parse_dimension(flag: &str, value: &str) -> Result<u16, ConfigError> {
    match value.parse::<u16>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidValue {
            flag: flag.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Rejected command-line arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnknownFlag(String),
    MissingValue(String),
    InvalidValue { flag: String, value: String },
    /// No room for a start and a goal on separate cells
    TooSmall { rows: u16, cols: u16 },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownFlag(flag) => write!(f, "unknown flag {flag}"),
            Self::MissingValue(flag) => write!(f, "missing value for {flag}"),
            Self::InvalidValue { flag, value } => write!(f, "invalid value {value:?} for {flag}"),
            Self::TooSmall { rows, cols } => {
                write!(f, "a {rows}x{cols} grid has no room for both start and goal")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults_match_reference_layout() {
        let config = Config::from_args(Vec::new()).unwrap();
        assert_eq!(config, Config::default());
        let grid = config.build_grid().unwrap();
        assert_eq!((grid.rows(), grid.cols()), (20, 50));
        assert_eq!(grid.start(), (10, 10));
        assert_eq!(grid.goal(), (10, 40));
    }

    #[test]
    fn test_resize_moves_start_and_goal() {
        let config = Config::from_args(args(&["--rows", "9", "--cols", "25", "--seed", "5"])).unwrap();
        assert_eq!(config.start, (4, 5));
        assert_eq!(config.goal, (4, 20));
        assert_eq!(config.seed, Some(5));
        assert!(config.build_grid().is_ok());
    }

    #[test]
    fn test_larger_grid_keeps_default_start_and_goal() {
        let config = Config::from_args(args(&["--rows", "30", "--cols", "80"])).unwrap();
        assert_eq!(config.start, (10, 10));
        assert_eq!(config.goal, (10, 40));
        // Only one dimension shrinks below the default positions
        let config = Config::from_args(args(&["--rows", "8"])).unwrap();
        assert_eq!(config.start, (4, 10));
        assert_eq!(config.goal, (4, 40));
    }

    #[test]
    fn test_single_column_stacks_start_and_goal() {
        let config = Config::from_args(args(&["--cols", "1"])).unwrap();
        assert_eq!(config.start, (0, 0));
        assert_eq!(config.goal, (19, 0));
        assert!(config.build_grid().is_ok());

        let config = Config::from_args(args(&["--rows", "2", "--cols", "1"])).unwrap();
        assert_eq!((config.start, config.goal), ((0, 0), (1, 0)));
        assert!(config.build_grid().is_ok());

        assert_eq!(
            Config::from_args(args(&["--rows", "1", "--cols", "1"])),
            Err(ConfigError::TooSmall { rows: 1, cols: 1 })
        );
    }

    #[test]
    fn test_two_columns_fit() {
        let config = Config::from_args(args(&["--rows", "3", "--cols", "2"])).unwrap();
        assert_eq!((config.start, config.goal), ((1, 0), (1, 1)));
        assert!(config.build_grid().is_ok());
    }

    #[test]
    fn test_bad_args() {
        assert_eq!(
            Config::from_args(args(&["--rows"])),
            Err(ConfigError::MissingValue("--rows".to_string()))
        );
        assert_eq!(
            Config::from_args(args(&["--rows", "0"])),
            Err(ConfigError::InvalidValue {
                flag: "--rows".to_string(),
                value: "0".to_string()
            })
        );
        assert_eq!(
            Config::from_args(args(&["--speed", "3"])),
            Err(ConfigError::UnknownFlag("--speed".to_string()))
        );
    }
}
