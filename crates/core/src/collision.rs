//! Collision checks for a piece against the board.
//!
//! Rows above the board (`row < 0`) are open space: a piece may spawn or
//! rotate partly above row 0 without colliding.

use crate::board::Board;
use crate::pieces::{Piece, Shape};
use crate::types::{BOARD_COLS, BOARD_ROWS};

/// Does `piece`, moved by (d_col, d_row) and optionally using `shape` in place
/// of its own, overlap a wall, the floor, or a settled cell?
///
/// A move whose position does not fit in `i8` is reported as a collision.
pub fn collides(
    piece: &Piece,
    board: &Board,
    d_col: i8,
    d_row: i8,
    shape: Option<&Shape>,
) -> bool {
    let (Some(col), Some(row)) = (piece.col.checked_add(d_col), piece.row.checked_add(d_row))
    else {
        return true;
    };
    let shape = shape.unwrap_or(&piece.shape);
    shape.cells().any(|(dc, dr)| {
        cell_blocked(
            board,
            i16::from(col) + i16::from(dc),
            i16::from(row) + i16::from(dr),
        )
    })
}

/// Whether a single absolute coordinate is unavailable to a piece
#[inline]
pub fn cell_blocked(board: &Board, col: i16, row: i16) -> bool {
    if col < 0 || col >= i16::from(BOARD_COLS) || row >= i16::from(BOARD_ROWS) {
        return true;
    }
    // In range for the board, so the narrowing casts are lossless.
    row >= 0 && board.is_occupied(col as i8, row as i8)
}

/// Does `piece` overlap anything where it stands?
pub fn overlaps(piece: &Piece, board: &Board) -> bool {
    collides(piece, board, 0, 0, None)
}
