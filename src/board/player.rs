use rand::Rng;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    One = 1,
    Two = 2,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    pub fn opposite(&self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn random() -> Self {
        if rand::thread_rng().gen_bool(0.5) {
            Player::One
        } else {
            Player::Two
        }
    }

    /// Character used for this player's pieces in position strings.
    pub fn to_char(&self) -> char {
        match self {
            Player::One => 'X',
            Player::Two => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'X' => Some(Player::One),
            'O' => Some(Player::Two),
            _ => None,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let player_str = match self {
            Player::One => "player one",
            Player::Two => "player two",
        };
        write!(f, "{}", player_str)
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Player {
    type Err = ParseError;
    fn from_str(player: &str) -> Result<Self, Self::Err> {
        match player.to_ascii_lowercase().as_str() {
            "one" | "1" | "x" => Ok(Player::One),
            "two" | "2" | "o" => Ok(Player::Two),
            "random" => Ok(Player::random()),
            _ => Err("invalid player; options are: one, two, random"),
        }
    }
}
