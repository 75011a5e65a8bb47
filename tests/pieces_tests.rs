//! Shape geometry tests - catalog, rotation and spawn placement

use blockfall::core::pieces::{spawn_col, MAX_SHAPE_DIM};
use blockfall::core::{catalog, rotate_cw, Piece, Shape};
use blockfall::types::{PieceKind, Rgb};

fn cells(shape: &Shape) -> Vec<(i8, i8)> {
    shape.cells().collect()
}

#[test]
fn test_catalog_has_seven_four_cell_shapes() {
    let catalog = catalog();
    assert_eq!(catalog.len(), 7);
    for def in catalog {
        assert_eq!(def.shape.cells().count(), 4, "{:?}", def.kind);
        assert!(def.shape.rows() as usize <= MAX_SHAPE_DIM);
        assert!(def.shape.cols() as usize <= MAX_SHAPE_DIM);
    }
}

#[test]
fn test_catalog_colors() {
    let expected = [
        (PieceKind::I, "#00f0f0"),
        (PieceKind::O, "#f0f000"),
        (PieceKind::T, "#a000f0"),
        (PieceKind::L, "#f0a000"),
        (PieceKind::J, "#0000f0"),
        (PieceKind::S, "#00f000"),
        (PieceKind::Z, "#f00000"),
    ];
    for (def, (kind, hex)) in catalog().iter().zip(expected) {
        assert_eq!(def.kind, kind);
        assert_eq!(Some(def.color), Rgb::from_hex(hex));
    }
}

#[test]
fn test_catalog_matrices() {
    assert_eq!(cells(&Shape::of(PieceKind::I)), vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
    assert_eq!(cells(&Shape::of(PieceKind::O)), vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    assert_eq!(cells(&Shape::of(PieceKind::T)), vec![(1, 0), (0, 1), (1, 1), (2, 1)]);
    assert_eq!(cells(&Shape::of(PieceKind::L)), vec![(0, 0), (0, 1), (1, 1), (2, 1)]);
    assert_eq!(cells(&Shape::of(PieceKind::J)), vec![(2, 0), (0, 1), (1, 1), (2, 1)]);
    assert_eq!(cells(&Shape::of(PieceKind::S)), vec![(1, 0), (2, 0), (0, 1), (1, 1)]);
    assert_eq!(cells(&Shape::of(PieceKind::Z)), vec![(0, 0), (1, 0), (1, 1), (2, 1)]);
}

#[test]
fn test_four_rotations_restore_every_shape() {
    for def in catalog() {
        let mut shape = def.shape;
        for _ in 0..4 {
            shape = rotate_cw(&shape);
        }
        assert_eq!(shape, def.shape, "{:?}", def.kind);
    }
}

#[test]
fn test_rotation_swaps_dimensions() {
    for def in catalog() {
        let rotated = def.shape.rotate_cw();
        assert_eq!(rotated.rows(), def.shape.cols());
        assert_eq!(rotated.cols(), def.shape.rows());
        assert_eq!(rotated.cells().count(), 4);
    }
}

#[test]
fn test_rotate_i_is_vertical() {
    let vertical = Shape::of(PieceKind::I).rotate_cw();
    assert_eq!(cells(&vertical), vec![(0, 0), (0, 1), (0, 2), (0, 3)]);
}

#[test]
fn test_rotate_l_clockwise() {
    // #..      ##
    // ###  ->  #.
    //          #.
    let rotated = Shape::of(PieceKind::L).rotate_cw();
    assert_eq!(cells(&rotated), vec![(0, 0), (1, 0), (0, 1), (0, 2)]);
}

#[test]
fn test_spawn_positions_are_centred() {
    // floor(10 / 2) - floor(cols / 2)
    assert_eq!(spawn_col(&Shape::of(PieceKind::I)), 3);
    assert_eq!(spawn_col(&Shape::of(PieceKind::O)), 4);
    for kind in [PieceKind::T, PieceKind::L, PieceKind::J, PieceKind::S, PieceKind::Z] {
        assert_eq!(spawn_col(&Shape::of(kind)), 4, "{:?}", kind);
    }

    let piece = Piece::spawn(PieceKind::T);
    assert_eq!(piece.row, 0);
    assert_eq!(piece.color(), PieceKind::T.color());
}
