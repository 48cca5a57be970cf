//! Player identification.
//!
//! ## Player
//!
//! One of the two marks on the board. `X` is the first player and `O` the
//! second. Each mark maps to a numeric sign (`+1` / `-1`) used by the
//! line-sum win detection in [`crate::rules`].

use serde::{Deserialize, Serialize};

/// One of the two players.
///
/// `X` is conventionally the first player, `O` the second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// First player, sign `+1`.
    X,
    /// Second player, sign `-1`.
    O,
}

impl Player {
    /// The first player.
    pub const FIRST: Player = Player::X;

    /// The second player.
    pub const SECOND: Player = Player::O;

    /// Get the other player.
    ///
    /// ```
    /// use tictactoe_engine::core::Player;
    ///
    /// assert_eq!(Player::X.opponent(), Player::O);
    /// assert_eq!(Player::O.opponent(), Player::X);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Numeric sign used in line sums (`X` = +1, `O` = -1).
    #[must_use]
    pub const fn sign(self) -> i8 {
        match self {
            Player::X => 1,
            Player::O => -1,
        }
    }

    /// Board character for this player.
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }

    /// Iterate over both players, first player first.
    pub fn all() -> impl Iterator<Item = Player> {
        [Player::X, Player::O].into_iter()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involution() {
        for player in Player::all() {
            assert_ne!(player.opponent(), player);
            assert_eq!(player.opponent().opponent(), player);
        }
    }

    #[test]
    fn test_signs() {
        assert_eq!(Player::X.sign(), 1);
        assert_eq!(Player::O.sign(), -1);
        assert_eq!(Player::FIRST, Player::X);
        assert_eq!(Player::SECOND, Player::O);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Player::X), "X");
        assert_eq!(format!("{}", Player::O), "O");
    }

    #[test]
    fn test_all_order() {
        let players: Vec<_> = Player::all().collect();
        assert_eq!(players, vec![Player::X, Player::O]);
    }

    #[test]
    fn test_player_serialization() {
        let json = serde_json::to_string(&Player::O).unwrap();
        assert_eq!(json, "\"O\"");
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Player::O);
    }
}
