//! Catalogue of Fire Emblem titles and the true-hit formula each one uses.

use crate::battle::Ruleset;
use crate::error::{ArenaError, ArenaResult};

/// A game title paired with its ruleset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Game {
    /// Title as commonly written in English.
    pub title: &'static str,
    /// True-hit formula used by the game.
    pub ruleset: Ruleset,
}

const fn game(title: &'static str, ruleset: Ruleset) -> Game {
    Game { title, ruleset }
}

/// Every known title, in release order.
pub static GAMES: &[Game] = &[
    game("Fire Emblem 1", Ruleset::OneRn),
    game("Gaiden", Ruleset::OneRn),
    game("Mystery of the Emblem", Ruleset::OneRn),
    game("Genealogy of the Holy War", Ruleset::OneRn),
    game("Thracia 776", Ruleset::OneRn),
    game("Binding Blade", Ruleset::TwoRn),
    game("Blazing Sword", Ruleset::TwoRn),
    game("Sacred Stones", Ruleset::TwoRn),
    game("Path of Radiance", Ruleset::TwoRn),
    game("Radiant Dawn", Ruleset::TwoRn),
    game("Shadow Dragon", Ruleset::TwoRn),
    game("New Mystery of the Emblem", Ruleset::TwoRn),
    game("Awakening", Ruleset::TwoRn),
    game("Fates", Ruleset::HybridTwoRn),
];

/// Look up a game by title, ignoring case and surrounding whitespace.
pub fn find_game(title: &str) -> ArenaResult<&'static Game> {
    let wanted = title.trim();
    GAMES
        .iter()
        .find(|g| g.title.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| ArenaError::UnknownGame(wanted.to_string()))
}

/// Titles that use `ruleset`.
pub fn games_using(ruleset: Ruleset) -> impl Iterator<Item = &'static Game> {
    GAMES.iter().filter(move |g| g.ruleset == ruleset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        let g = find_game("blazing sword").unwrap();
        assert_eq!(g.title, "Blazing Sword");
        assert_eq!(g.ruleset, Ruleset::TwoRn);
        assert_eq!(find_game("  FATES ").unwrap().ruleset, Ruleset::HybridTwoRn);
    }

    #[test]
    fn unknown_title() {
        let err = find_game("Three Houses").unwrap_err();
        assert_eq!(err.to_string(), "unknown game: Three Houses");
    }

    #[test]
    fn counts_per_ruleset() {
        assert_eq!(games_using(Ruleset::OneRn).count(), 5);
        assert_eq!(games_using(Ruleset::TwoRn).count(), 8);
        assert_eq!(games_using(Ruleset::HybridTwoRn).count(), 1);
        assert_eq!(GAMES.len(), 14);
    }
}
