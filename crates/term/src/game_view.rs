//! Game view: maps a `GameStatus` into lines of terminal text.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameStatus;

/// Separator drawn between cells of a row
pub const CELL_SEPARATOR: char = '|';

/// Text for one board row, e.g. `"X| |O"`.
pub fn render_row(status: &GameStatus, row: usize) -> String {
    status
        .rows()
        .nth(row)
        .map(|marks| {
            let mut line = String::with_capacity(marks.len() * 2);
            for (i, mark) in marks.iter().enumerate() {
                if i > 0 {
                    line.push(CELL_SEPARATOR);
                }
                line.push(mark.as_char());
            }
            line
        })
        .unwrap_or_default()
}

/// The line under the board: whose turn it is, or how the game ended.
pub fn announcement(status: &GameStatus) -> String {
    if status.is_draw() {
        return "Game over! Draw".to_string();
    }
    match (&status.winner, status.is_game_over) {
        (Some(winner), true) => format!("Game over! {winner} wins"),
        _ => format!("{}'s turn", status.current_player),
    }
}

/// Full frame: three board rows, a blank line, then the announcement.
pub fn render_lines(status: &GameStatus) -> Vec<String> {
    let mut lines: Vec<String> = (0..status.rows().count())
        .map(|row| render_row(status, row))
        .collect();
    lines.push(String::new());
    lines.push(announcement(status));
    lines
}

/// `render_lines` joined with `\n`.
pub fn render_text(status: &GameStatus) -> String {
    render_lines(status).join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;

    fn status_with(cells: &[(usize, Mark)]) -> GameStatus {
        let mut status = GameStatus {
            current_player: "ada".to_string(),
            ..GameStatus::default()
        };
        for &(i, mark) in cells {
            status.moves[i] = mark;
        }
        status
    }

    #[test]
    fn empty_board_uses_spaces() {
        let status = status_with(&[]);
        assert_eq!(
            render_lines(&status),
            vec![" | | ", " | | ", " | | ", "", "ada's turn"]
        );
    }

    #[test]
    fn marks_are_placed_row_major() {
        let status = status_with(&[(0, Mark::X), (4, Mark::O), (5, Mark::X), (6, Mark::O)]);
        assert_eq!(render_row(&status, 0), "X| | ");
        assert_eq!(render_row(&status, 1), " |O|X");
        assert_eq!(render_row(&status, 2), "O| | ");
        assert_eq!(render_row(&status, 3), "");
    }

    #[test]
    fn announces_winner() {
        let mut status = status_with(&[(0, Mark::X), (1, Mark::X), (2, Mark::X)]);
        status.is_game_over = true;
        status.winner = Some("ada".to_string());
        assert_eq!(announcement(&status), "Game over! ada wins");
    }

    #[test]
    fn announces_draw() {
        let mut status = status_with(&[]);
        status.is_game_over = true;
        assert_eq!(announcement(&status), "Game over! Draw");
        assert!(render_text(&status).ends_with("\n\nGame over! Draw"));
    }
}
