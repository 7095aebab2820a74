//! Player identity.
//!
//! Players are identified by a sign: `+1` for the first player, `-1` for
//! the second. The sign convention is fixed for the lifetime of a session
//! and doubles as the stone value written into the grid, which makes
//! canonicalization an elementwise multiply.

use serde::{Deserialize, Serialize};

/// One of the two players, as a board sign.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player(i8);

impl Player {
    /// The first player (`+1`).
    pub const ONE: Player = Player(1);

    /// The second player (`-1`).
    pub const TWO: Player = Player(-1);

    /// Create a player from a raw sign.
    ///
    /// Returns `None` unless `sign` is exactly `+1` or `-1`.
    #[must_use]
    pub fn from_sign(sign: i8) -> Option<Player> {
        match sign {
            1 => Some(Player::ONE),
            -1 => Some(Player::TWO),
            _ => None,
        }
    }

    /// Get the sign value (`+1` or `-1`).
    ///
    /// This is also the stone value this player places on the board.
    #[must_use]
    pub const fn sign(self) -> i8 {
        self.0
    }

    /// Get the opposing player.
    #[must_use]
    pub const fn opponent(self) -> Player {
        Player(-self.0)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {:+}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_signs() {
        assert_eq!(Player::ONE.sign(), 1);
        assert_eq!(Player::TWO.sign(), -1);
    }

    #[test]
    fn test_player_opponent() {
        assert_eq!(Player::ONE.opponent(), Player::TWO);
        assert_eq!(Player::TWO.opponent(), Player::ONE);
        assert_eq!(Player::ONE.opponent().opponent(), Player::ONE);
    }

    #[test]
    fn test_player_from_sign() {
        assert_eq!(Player::from_sign(1), Some(Player::ONE));
        assert_eq!(Player::from_sign(-1), Some(Player::TWO));
        assert_eq!(Player::from_sign(0), None);
        assert_eq!(Player::from_sign(2), None);
    }

    #[test]
    fn test_player_display() {
        assert_eq!(format!("{}", Player::ONE), "Player +1");
        assert_eq!(format!("{}", Player::TWO), "Player -1");
    }

    #[test]
    fn test_player_serialization() {
        let json = serde_json::to_string(&Player::TWO).unwrap();
        let back: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Player::TWO);
    }
}
