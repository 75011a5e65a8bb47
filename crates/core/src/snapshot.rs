use crate::board::Row;
use crate::pieces::Piece;
use crate::types::{Cell, Phase, BOARD_COLS, BOARD_ROWS};

/// Read-only copy of everything a renderer needs.
///
/// Plain `Copy` data so drivers can keep one around and refill it each frame
/// with [`GameState::snapshot_into`](crate::GameState::snapshot_into).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [Row; BOARD_ROWS as usize],
    pub current: Option<Piece>,
    pub next: Option<Piece>,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub drop_interval_ms: u32,
    pub phase: Phase,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[None; BOARD_COLS as usize]; BOARD_ROWS as usize];
        self.current = None;
        self.next = None;
        self.score = 0;
        self.level = 0;
        self.lines = 0;
        self.drop_interval_ms = 0;
        self.phase = Phase::NotStarted;
    }

    pub fn playable(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Settled cell at (col, row), `None` when empty or off the board
    pub fn cell(&self, col: i8, row: i8) -> Cell {
        if col < 0 || row < 0 {
            return None;
        }
        self.board
            .get(row as usize)
            .and_then(|r| r.get(col as usize))
            .copied()
            .flatten()
    }

    /// On-board cells of the current piece
    pub fn piece_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.current.iter().flat_map(|piece| {
            piece.board_cells().filter(|&(col, row)| {
                col >= 0 && col < BOARD_COLS as i8 && row >= 0 && row < BOARD_ROWS as i8
            })
        })
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            board: [[None; BOARD_COLS as usize]; BOARD_ROWS as usize],
            current: None,
            next: None,
            score: 0,
            level: 0,
            lines: 0,
            drop_interval_ms: 0,
            phase: Phase::NotStarted,
        };
        s.clear();
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn default_is_empty_and_not_playable() {
        let s = GameSnapshot::default();
        assert!(!s.playable());
        assert!(s.board.iter().flatten().all(|c| c.is_none()));
        assert_eq!(s.piece_cells().count(), 0);
    }

    #[test]
    fn piece_cells_skip_rows_above_board() {
        let mut s = GameSnapshot::default();
        s.current = Some(Piece::spawn(PieceKind::O).shifted(0, -1));
        let cells: Vec<_> = s.piece_cells().collect();
        assert_eq!(cells, vec![(4, 0), (5, 0)]);
    }

    #[test]
    fn cell_lookup_is_bounds_checked() {
        let mut s = GameSnapshot::default();
        s.board[19][0] = Some(PieceKind::L);
        assert_eq!(s.cell(0, 19), Some(PieceKind::L));
        assert_eq!(s.cell(-1, 19), None);
        assert_eq!(s.cell(0, 20), None);
    }
}
