//! Difficulty levels and their search depth configuration.

use std::fmt;
use std::str::FromStr;

use crate::types::Depth;

/// Strength of the automated opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    /// Uniformly random legal moves.
    Easy,
    /// Shallow minimax search.
    #[default]
    Medium,
    /// Deeper minimax search.
    Hard,
}

/// Search depth of each difficulty, `None` meaning a random move.
#[rustfmt::skip]
const LEVELS: [(Difficulty, Option<Depth>); 3] = [
    (Difficulty::Easy,   None),
    (Difficulty::Medium, Some(3)),
    (Difficulty::Hard,   Some(5)),
];

impl Difficulty {
    /// All difficulties from weakest to strongest.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Returns the fixed search depth for this difficulty.
    ///
    /// # Returns
    ///
    /// `None` for [`Difficulty::Easy`], which plays random moves.
    pub fn search_depth(self) -> Option<Depth> {
        LEVELS
            .iter()
            .find_map(|&(difficulty, depth)| (difficulty == self).then_some(depth))
            .flatten()
    }

    /// Returns the lowercase name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned for an unknown difficulty name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown difficulty '{0}': expected easy, medium or hard")]
pub struct ParseDifficultyError(String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name() == name)
            .ok_or_else(|| ParseDifficultyError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_depths() {
        assert_eq!(Difficulty::Easy.search_depth(), None);
        assert_eq!(Difficulty::Medium.search_depth(), Some(3));
        assert_eq!(Difficulty::Hard.search_depth(), Some(5));
    }

    #[test]
    fn test_level_progression() {
        let depths: Vec<Depth> = Difficulty::ALL
            .iter()
            .filter_map(|d| d.search_depth())
            .collect();
        assert!(depths.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_parse() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!(" Hard ".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("expert".parse::<Difficulty>().is_err());
        for d in Difficulty::ALL {
            assert_eq!(d.to_string().parse::<Difficulty>(), Ok(d));
        }
    }
}
