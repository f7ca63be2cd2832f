use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DifficultyError {
    #[error("random move chance must be a probability between 0 and 1, got {chance}")]
    InvalidRandomMoveChance { chance: f64 },
    #[error("look-ahead depth must be at least 1")]
    DepthTooLow,
    #[error("unknown difficulty {name:?}; options are: easy, medium, hard")]
    UnknownDifficulty { name: String },
}

/// How a profile picks a column once it has decided not to play randomly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Win now, else block now, else the most central playable column.
    Greedy,
    /// Alpha-beta search to the profile's look-ahead depth.
    Minimax,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Greedy => write!(f, "greedy"),
            Strategy::Minimax => write!(f, "minimax"),
        }
    }
}

/// A validated set of tuning knobs for the AI. Use `DifficultyProfile::new`
/// or one of the canonical `Difficulty` tiers to build one.
#[derive(Clone, Debug, PartialEq)]
pub struct DifficultyProfile {
    name: String,
    random_move_chance: f64,
    look_ahead_depth: u8,
    strategy: Strategy,
}

impl DifficultyProfile {
    pub fn new(
        name: impl Into<String>,
        random_move_chance: f64,
        look_ahead_depth: u8,
        strategy: Strategy,
    ) -> Result<Self, DifficultyError> {
        if !random_move_chance.is_finite() || !(0.0..=1.0).contains(&random_move_chance) {
            return Err(DifficultyError::InvalidRandomMoveChance {
                chance: random_move_chance,
            });
        }
        if look_ahead_depth < 1 {
            return Err(DifficultyError::DepthTooLow);
        }

        Ok(Self {
            name: name.into(),
            random_move_chance,
            look_ahead_depth,
            strategy,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn random_move_chance(&self) -> f64 {
        self.random_move_chance
    }

    pub fn look_ahead_depth(&self) -> u8 {
        self.look_ahead_depth
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// The same profile searching to a different depth.
    pub fn with_look_ahead_depth(self, look_ahead_depth: u8) -> Result<Self, DifficultyError> {
        Self::new(
            self.name,
            self.random_move_chance,
            look_ahead_depth,
            self.strategy,
        )
    }
}

impl Default for DifficultyProfile {
    fn default() -> Self {
        Difficulty::Medium.profile()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn profile(&self) -> DifficultyProfile {
        let (random_move_chance, look_ahead_depth, strategy) = match self {
            Difficulty::Easy => (0.7, 1, Strategy::Greedy),
            Difficulty::Medium => (0.3, 3, Strategy::Greedy),
            Difficulty::Hard => (0.0, 7, Strategy::Minimax),
        };

        DifficultyProfile {
            name: self.to_string(),
            random_move_chance,
            look_ahead_depth,
            strategy,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Difficulty {
    type Err = DifficultyError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(DifficultyError::UnknownDifficulty {
                name: name.to_string(),
            }),
        }
    }
}

impl From<Difficulty> for DifficultyProfile {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.profile()
    }
}
