use super::Score;

pub const CENTER_PIECE_BONUS: Score = 4;

/// Value of a four-cell window holding `pieces` of one player and nothing of
/// the other. Windows shared by both players can never complete and are
/// worth nothing.
pub fn window_value(pieces: usize) -> Score {
    match pieces {
        4 => 10_000,
        3 => 1_000,
        2 => 5,
        1 => 1,
        _ => 0,
    }
}
