//! Compass directions

use std::fmt;
use std::str::FromStr;

/// A compass direction (hemisphere letter)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Single-letter form
    pub fn letter(&self) -> char {
        match self {
            Direction::North => 'N',
            Direction::South => 'S',
            Direction::East => 'E',
            Direction::West => 'W',
        }
    }

    /// Map a letter (either case) to a direction
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'N' => Some(Direction::North),
            'S' => Some(Direction::South),
            'E' => Some(Direction::East),
            'W' => Some(Direction::West),
            _ => None,
        }
    }

    /// True for the directions that make a coordinate negative (S and W)
    pub fn is_negative(&self) -> bool {
        matches!(self, Direction::South | Direction::West)
    }

    /// Find the first N/S/E/W letter anywhere in `text`, ignoring case
    pub fn find_in(text: &str) -> Option<Self> {
        text.chars().find_map(Direction::from_letter)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Direction::from_letter(c).ok_or_else(|| format!("Unknown direction: {}", s))
            },
            _ => Err(format!("Direction must be a single letter, got '{}'", s)),
        }
    }
}
