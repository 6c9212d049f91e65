//! Tunable search limits.
//!
//! The defaults are the heuristic constants the solver has always shipped
//! with. Changing them trades solution quality for time; they do not affect
//! correctness of any returned solution. A zero limit is honoured as given:
//! the search does no rounds, keeps no states or expands no moves.

use crate::puzzle_errors::PuzzleError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// States kept between rounds.
    pub beam_width: usize,
    /// Rounds before giving up. Also the most pieces a solution can use.
    pub max_depth: usize,
    /// Best candidate moves expanded per beam state.
    pub moves_per_state: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            beam_width: 10,
            max_depth: 15,
            moves_per_state: 5,
        }
    }
}

impl SolverConfig {
    /// Set an option by name (`BeamWidth`, `MaxDepth`, `MovesPerState`).
    /// Values must parse as integers >= 1.
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), PuzzleError> {
        let invalid = || PuzzleError::InvalidOption {
            name: name.to_owned(),
            value: value.to_owned(),
        };
        let parsed = value
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|&v| v >= 1)
            .ok_or_else(invalid)?;

        match name.trim().to_ascii_lowercase().as_str() {
            "beamwidth" => self.beam_width = parsed,
            "maxdepth" => self.max_depth = parsed,
            "movesperstate" => self.moves_per_state = parsed,
            _ => return Err(invalid()),
        }
        Ok(())
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shipped_constants() {
        let config = SolverConfig::default();
        assert_eq!(config.beam_width, 10);
        assert_eq!(config.max_depth, 15);
        assert_eq!(config.moves_per_state, 5);
    }

    #[test]
    fn set_option_updates_named_field() {
        let mut config = SolverConfig::default();
        config.set_option("BeamWidth", "32").expect("valid option");
        config.set_option("maxdepth", " 20 ").expect("valid option");
        config.set_option("MovesPerState", "3").expect("valid option");
        assert_eq!(
            config,
            SolverConfig {
                beam_width: 32,
                max_depth: 20,
                moves_per_state: 3
            }
        );
    }

    #[test]
    fn set_option_rejects_bad_names_and_values() {
        let mut config = SolverConfig::default();
        assert!(config.set_option("Threads", "4").is_err());
        assert!(config.set_option("BeamWidth", "0").is_err());
        assert!(config.set_option("MaxDepth", "deep").is_err());
        assert_eq!(config, SolverConfig::default());
    }

}
