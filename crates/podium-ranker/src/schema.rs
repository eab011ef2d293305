//! The canonical leaderboard schema and its header alias table.

/// Number of per-game score columns.
pub const GAME_COUNT: usize = 4;

/// The 7 recognized columns every input table is reconciled to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Game1,
    Game2,
    Game3,
    Game4,
    Bonus,
    Total,
}

impl Field {
    /// Fixed presentation order (rank is prepended by the scorer).
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::Game1,
        Field::Game2,
        Field::Game3,
        Field::Game4,
        Field::Bonus,
        Field::Total,
    ];

    pub const GAMES: [Field; GAME_COUNT] =
        [Field::Game1, Field::Game2, Field::Game3, Field::Game4];

    /// Column title as shown in the dashboard and emitted for canonical
    /// output. Titles resolve back to their own field through
    /// [`Field::from_header`], which is what makes normalisation idempotent.
    pub fn title(self) -> &'static str {
        match self {
            Field::Name => "Team Name",
            Field::Game1 => "Game 1",
            Field::Game2 => "Game 2",
            Field::Game3 => "Game 3",
            Field::Game4 => "Game 4",
            Field::Bonus => "Bonus",
            Field::Total => "Total Points",
        }
    }

    /// Resolve a raw header: trim, lower-case, then exact lookup in the
    /// alias table. No fuzzy or substring matching. Headers that resolve to
    /// nothing pass through verbatim and are dropped at final projection.
    pub fn from_header(header: &str) -> Option<Field> {
        let key = header.trim().to_lowercase();
        match key.as_str() {
            "team name" | "team_name" | "team" => Some(Field::Name),
            "game1" | "game 1" | "game_1" => Some(Field::Game1),
            "game2" | "game 2" | "game_2" => Some(Field::Game2),
            "game3" | "game 3" | "game_3" => Some(Field::Game3),
            "game4" | "game 4" | "game_4" => Some(Field::Game4),
            "bonus" | "column6" | "column 6" | "column_6" => Some(Field::Bonus),
            "total" | "total points" | "total_points" => Some(Field::Total),
            _ => None,
        }
    }

    /// 0-based game index for the four category columns.
    pub fn game_index(self) -> Option<usize> {
        match self {
            Field::Game1 => Some(0),
            Field::Game2 => Some(1),
            Field::Game3 => Some(2),
            Field::Game4 => Some(3),
            _ => None,
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_lookup() {
        assert_eq!(Field::from_header("Team Name"), Some(Field::Name));
        assert_eq!(Field::from_header("  team_name "), Some(Field::Name));
        assert_eq!(Field::from_header("TEAM"), Some(Field::Name));
        assert_eq!(Field::from_header("Game1"), Some(Field::Game1));
        assert_eq!(Field::from_header("game 4"), Some(Field::Game4));
        assert_eq!(Field::from_header("Column_6"), Some(Field::Bonus));
        assert_eq!(Field::from_header("bonus"), Some(Field::Bonus));
        assert_eq!(Field::from_header("Total points"), Some(Field::Total));
    }

    #[test]
    fn test_unrecognized_header_resolves_to_nothing() {
        assert_eq!(Field::from_header("Notes"), None);
        // Exact matching only, no substring shortcuts.
        assert_eq!(Field::from_header("team name (final)"), None);
        assert_eq!(Field::from_header("game"), None);
    }

    #[test]
    fn test_titles_resolve_to_their_own_field() {
        for field in Field::ALL {
            assert_eq!(Field::from_header(field.title()), Some(field));
        }
    }
}
