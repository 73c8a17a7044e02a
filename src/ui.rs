//! Text rendering of boards for the terminal.

use core::fmt::Write;

use crate::board::Board;

/// Cell symbol keyed by (ship present, shot taken).
pub fn cell_symbol(ship: bool, shot: bool) -> char {
    match (ship, shot) {
        (true, true) => 'H',
        (true, false) => 'S',
        (false, true) => 'X',
        (false, false) => '.',
    }
}

/// Render a board with ships revealed: `.` water, `S` ship, `H` hit, `X` miss.
pub fn render_board(board: &Board) -> String {
    let n = board.size();
    let ships = board.ship_map();
    let shots = board.shots();
    let mut out = String::new();
    out.push_str("   ");
    for c in 0..n {
        let _ = write!(out, " {}", c);
    }
    out.push('\n');
    let _ = writeln!(out, "  +{}", "--".repeat(n));
    for r in 0..n {
        let _ = write!(out, "{:>2} |", r);
        for c in 0..n {
            let symbol = cell_symbol(
                ships.get(r, c).unwrap_or(false),
                shots.get(r, c).unwrap_or(false),
            );
            let _ = write!(out, " {}", symbol);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ship::Orientation;

    #[test]
    fn renders_all_four_symbols() {
        let mut board = Board::new();
        board.place_ship(1, 2, 0, 0, Orientation::Horizontal).unwrap();
        board.register_shot(0, 0, true).unwrap();
        board.register_shot(0, 2, false).unwrap();
        let text = render_board(&board);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], "    0 1 2 3 4 5 6 7 8 9");
        assert_eq!(lines[2], " 0 | H S X . . . . . . .");
        assert_eq!(lines[11], " 9 | . . . . . . . . . .");
    }
}
