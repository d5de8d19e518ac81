use std::fmt;
use std::str::FromStr;

use crate::error::GameError;

/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }

    /// Returns the unit delta (dx, dy) for moving in this direction.
    /// Screen coordinates: y grows downwards.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Discrete input event consumed by the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Restart,
}

impl Input {
    /// The direction requested by this input, if it is a move
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Input::MoveLeft => Some(Direction::Left),
            Input::MoveRight => Some(Direction::Right),
            Input::MoveUp => Some(Direction::Up),
            Input::MoveDown => Some(Direction::Down),
            Input::Restart => None,
        }
    }
}

impl From<Direction> for Input {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => Input::MoveUp,
            Direction::Down => Input::MoveDown,
            Direction::Left => Input::MoveLeft,
            Direction::Right => Input::MoveRight,
        }
    }
}

impl FromStr for Input {
    type Err = GameError;

    /// Parses the tokens used by headless move scripts.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "l" | "left" => Ok(Input::MoveLeft),
            "r" | "right" => Ok(Input::MoveRight),
            "u" | "up" => Ok(Input::MoveUp),
            "d" | "down" => Ok(Input::MoveDown),
            "restart" => Ok(Input::Restart),
            _ => Err(GameError::InvalidDirectionInput(s.to_string())),
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Input::MoveLeft => "left",
            Input::MoveRight => "right",
            Input::MoveUp => "up",
            Input::MoveDown => "down",
            Input::Restart => "restart",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Down.is_opposite(Direction::Up));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(Direction::Right.is_opposite(Direction::Left));

        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Up.is_opposite(Direction::Right));
        assert!(!Direction::Right.is_opposite(Direction::Right));
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn test_input_direction_mapping() {
        assert_eq!(Input::MoveLeft.direction(), Some(Direction::Left));
        assert_eq!(Input::MoveUp.direction(), Some(Direction::Up));
        assert_eq!(Input::Restart.direction(), None);
        assert_eq!(Input::from(Direction::Down), Input::MoveDown);
    }

    #[test]
    fn test_parse_script_tokens() {
        assert_eq!("up".parse::<Input>().unwrap(), Input::MoveUp);
        assert_eq!(" L ".parse::<Input>().unwrap(), Input::MoveLeft);
        assert_eq!("Restart".parse::<Input>().unwrap(), Input::Restart);
    }

    #[test]
    fn test_parse_unknown_token() {
        let err = "sideways".parse::<Input>().unwrap_err();
        assert!(matches!(err, GameError::InvalidDirectionInput(ref s) if s == "sideways"));
    }
}
