//! Pieces module - shape geometry and live pieces
//!
//! Shapes are immutable occupancy matrices (at most 4x4). Rotation builds a
//! new matrix: transpose, then reverse each row. Seven shapes form the
//! catalog, one per [`PieceKind`], each with a fixed color.

use crate::types::{PieceKind, Rgb, BOARD_COLS};

/// Largest shape dimension
pub const MAX_SHAPE_DIM: usize = 4;

/// Offset of an occupied sub-cell from the shape's top-left corner (col, row)
pub type CellOffset = (i8, i8);

/// One orientation of a piece: an immutable rows x cols boolean matrix.
///
/// Cells outside `rows x cols` are always `false`, so derived equality is
/// geometric equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Build a shape from a 0/1 matrix
    pub const fn from_matrix<const R: usize, const C: usize>(matrix: [[u8; C]; R]) -> Self {
        assert!(R > 0 && R <= MAX_SHAPE_DIM && C > 0 && C <= MAX_SHAPE_DIM);
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        let mut r = 0;
        while r < R {
            let mut c = 0;
            while c < C {
                cells[r][c] = matrix[r][c] != 0;
                c += 1;
            }
            r += 1;
        }
        Self {
            rows: R as u8,
            cols: C as u8,
            cells,
        }
    }

    /// The catalog shape of a piece kind (spawn orientation)
    pub fn of(kind: PieceKind) -> Self {
        CATALOG[kind.index()].shape
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether the sub-cell at (col, row) is occupied
    pub fn is_filled(&self, col: usize, row: usize) -> bool {
        col < self.cols as usize && row < self.rows as usize && self.cells[row][col]
    }

    /// Occupied sub-cells, row-major
    pub fn cells(&self) -> impl Iterator<Item = CellOffset> + '_ {
        (0..self.rows as usize).flat_map(move |row| {
            (0..self.cols as usize)
                .filter(move |&col| self.cells[row][col])
                .map(move |col| (col as i8, row as i8))
        })
    }

    /// Rotate 90° clockwise: `out[i][j] = in[rows - 1 - j][i]`.
    ///
    /// The result is `cols x rows`.
    pub fn rotate_cw(&self) -> Self {
        let rows = self.rows as usize;
        let cols = self.cols as usize;
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (i, out_row) in cells.iter_mut().enumerate().take(cols) {
            for (j, out) in out_row.iter_mut().enumerate().take(rows) {
                *out = self.cells[rows - 1 - j][i];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }
}

/// Free-function form of [`Shape::rotate_cw`]
pub fn rotate_cw(shape: &Shape) -> Shape {
    shape.rotate_cw()
}

/// A catalog entry: kind, spawn shape and color token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeDef {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: Rgb,
}

const fn def(kind: PieceKind, shape: Shape) -> ShapeDef {
    ShapeDef {
        kind,
        shape,
        color: kind.color(),
    }
}

/// The seven canonical shapes, in [`PieceKind::ALL`] order
pub const CATALOG: [ShapeDef; PieceKind::COUNT] = [
    def(PieceKind::I, Shape::from_matrix([[1, 1, 1, 1]])),
    def(PieceKind::O, Shape::from_matrix([[1, 1], [1, 1]])),
    def(PieceKind::T, Shape::from_matrix([[0, 1, 0], [1, 1, 1]])),
    def(PieceKind::L, Shape::from_matrix([[1, 0, 0], [1, 1, 1]])),
    def(PieceKind::J, Shape::from_matrix([[0, 0, 1], [1, 1, 1]])),
    def(PieceKind::S, Shape::from_matrix([[0, 1, 1], [1, 1, 0]])),
    def(PieceKind::Z, Shape::from_matrix([[1, 1, 0], [0, 1, 1]])),
];

/// The seven immutable shape/color pairs
pub fn catalog() -> &'static [ShapeDef; PieceKind::COUNT] {
    &CATALOG
}

/// Spawn column for a shape: horizontally centred on the board
pub fn spawn_col(shape: &Shape) -> i8 {
    (BOARD_COLS / 2) as i8 - (shape.cols() / 2) as i8
}

/// A live piece: a shape in its current rotation, placed on the board.
///
/// `col`/`row` locate the shape's top-left corner; `row` may be negative
/// while the piece is partly above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub col: i8,
    pub row: i8,
}

impl Piece {
    /// Create a piece at its spawn position (centred, row 0)
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = Shape::of(kind);
        Self {
            kind,
            shape,
            col: spawn_col(&shape),
            row: 0,
        }
    }

    /// Color token of this piece
    pub fn color(&self) -> Rgb {
        self.kind.color()
    }

    /// The same piece moved by (d_col, d_row), saturating at the `i8` limits
    pub fn shifted(&self, d_col: i8, d_row: i8) -> Self {
        Self {
            col: self.col.saturating_add(d_col),
            row: self.row.saturating_add(d_row),
            ..*self
        }
    }

    /// Absolute board coordinates of the occupied sub-cells
    pub fn board_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .cells()
            .map(move |(dc, dr)| (self.col.saturating_add(dc), self.row.saturating_add(dr)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_matches_kind_index() {
        for (i, entry) in catalog().iter().enumerate() {
            assert_eq!(entry.kind.index(), i);
            assert_eq!(entry.color, entry.kind.color());
            assert_eq!(entry.shape.cells().count(), 4);
        }
    }

    #[test]
    fn test_rotate_t_shape() {
        // .#.      #.
        // ###  ->  ##
        //          #.
        let rotated = Shape::of(PieceKind::T).rotate_cw();
        assert_eq!(rotated, Shape::from_matrix([[1, 0], [1, 1], [1, 0]]));
    }

    #[test]
    fn test_rotate_l_shape() {
        // #..      ##
        // ###  ->  #.
        //          #.
        let rotated = rotate_cw(&Shape::of(PieceKind::L));
        assert_eq!(rotated, Shape::from_matrix([[1, 1], [1, 0], [1, 0]]));
    }

    #[test]
    fn test_rotate_i_alternates_footprint() {
        let i = Shape::of(PieceKind::I);
        let vertical = i.rotate_cw();
        assert_eq!((vertical.rows(), vertical.cols()), (4, 1));
        assert_eq!(vertical.rotate_cw(), i);
    }

    #[test]
    fn test_spawn_positions_are_centred() {
        assert_eq!(Piece::spawn(PieceKind::I).col, 3);
        assert_eq!(Piece::spawn(PieceKind::O).col, 4);
        assert_eq!(Piece::spawn(PieceKind::T).col, 4);
        assert!(PieceKind::ALL.iter().all(|&k| Piece::spawn(k).row == 0));
    }

    #[test]
    fn test_board_cells_are_offset_by_position() {
        let piece = Piece::spawn(PieceKind::O).shifted(1, 5);
        let cells: Vec<_> = piece.board_cells().collect();
        assert_eq!(cells, vec![(5, 5), (6, 5), (5, 6), (6, 6)]);
    }
}
