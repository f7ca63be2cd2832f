use crate::board::{Board, Player, WinningLine, CENTER_COLUMN, COLS, ROWS, WINNING_LENGTH};

use self::window_values::{window_value, CENTER_PIECE_BONUS};

mod window_values;

pub type Score = i32;

/// Base score of a decided position. Remaining search depth is added on top so
/// that faster wins (and slower losses) are preferred.
pub const WIN_SCORE: Score = 1000;

/// Starting steps of the four-cell windows scanned by the static evaluation:
/// right, down, down-right and up-right.
const WINDOW_DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEnding {
    Win { winner: Player, line: WinningLine },
    Draw,
}

/// Finds a completed line anywhere on the board, scanning cells row-major.
pub fn find_winning_line(board: &Board) -> Option<WinningLine> {
    board
        .pieces()
        .find_map(|(row, col, player)| board.check_win_at(row, col, player))
}

/// Returns the game ending state if the game has ended, otherwise returns None.
pub fn game_ending(board: &Board) -> Option<GameEnding> {
    if let Some(line) = find_winning_line(board) {
        return Some(GameEnding::Win {
            winner: line.player,
            line,
        });
    }

    if board.is_full() {
        return Some(GameEnding::Draw);
    }

    None
}

/// Score of a decided position from `ai`'s perspective, or `None` while
/// nobody has four in a row.
#[inline(always)]
pub fn terminal_score(board: &Board, ai: Player, remaining_depth: u8) -> Option<Score> {
    board
        .pieces()
        .find(|&(row, col, player)| board.has_win_at(row, col, player))
        .map(|(_, _, winner)| {
            if winner == ai {
                WIN_SCORE + remaining_depth as Score
            } else {
                -WIN_SCORE - remaining_depth as Score
            }
        })
}

/// Static evaluation of the board from `ai`'s perspective: a bonus for each
/// of `ai`'s pieces in the center column, plus the value of every four-cell
/// window that only one player occupies.
#[inline(always)]
pub fn score(board: &Board, ai: Player) -> Score {
    center_score(board, ai) + windows_score(board, ai)
}

fn center_score(board: &Board, ai: Player) -> Score {
    let center_pieces = (0..ROWS)
        .filter(|&row| board.get(row, CENTER_COLUMN) == Some(ai))
        .count();
    center_pieces as Score * CENTER_PIECE_BONUS
}

fn windows_score(board: &Board, ai: Player) -> Score {
    let mut score = 0;
    for row in 0..ROWS {
        for col in 0..COLS {
            for direction in WINDOW_DIRECTIONS {
                score += window_score(board, ai, row, col, direction);
            }
        }
    }
    score
}

/// Scores the window starting at (row, col) and stepping in `direction`; zero
/// when the window does not fit on the board.
fn window_score(
    board: &Board,
    ai: Player,
    row: usize,
    col: usize,
    (row_step, col_step): (isize, isize),
) -> Score {
    let last = WINNING_LENGTH as isize - 1;
    let (end_row, end_col) = (row as isize + row_step * last, col as isize + col_step * last);
    if !Board::is_valid_position(end_row, end_col) {
        return 0;
    }

    let mut ai_pieces = 0;
    let mut opponent_pieces = 0;
    for i in 0..WINNING_LENGTH as isize {
        let r = (row as isize + row_step * i) as usize;
        let c = (col as isize + col_step * i) as usize;
        match board.get(r, c) {
            Some(player) if player == ai => ai_pieces += 1,
            Some(_) => opponent_pieces += 1,
            None => (),
        }
    }

    match (ai_pieces, opponent_pieces) {
        (0, 0) => 0,
        (ai_pieces, 0) => window_value(ai_pieces),
        (0, opponent_pieces) => -window_value(opponent_pieces),
        _ => 0,
    }
}
