//! Piece tests - shape data and the stage-based rotation protocol

use tui_blockfall::core::ActivePiece;
use tui_blockfall::types::{ColorTag, ShapeKind};

fn piece(kind: ShapeKind) -> ActivePiece {
    ActivePiece::new(kind, ColorTag::Red, 7, 5)
}

fn sorted_cells(p: &ActivePiece) -> Vec<(i8, i8)> {
    let mut cells: Vec<_> = p.cells().into_iter().collect();
    cells.sort();
    cells
}

#[test]
fn test_cell_counts() {
    for kind in ShapeKind::ALL {
        let expected = match kind {
            ShapeKind::L | ShapeKind::LMirrored => 5,
            _ => 4,
        };
        assert_eq!(
            piece(kind).cells().len(),
            expected,
            "{} cell count",
            kind.as_str()
        );
    }
}

#[test]
fn test_mirrored_shapes_differ() {
    assert_ne!(
        sorted_cells(&piece(ShapeKind::S)),
        sorted_cells(&piece(ShapeKind::SMirrored))
    );
    assert_ne!(
        sorted_cells(&piece(ShapeKind::L)),
        sorted_cells(&piece(ShapeKind::LMirrored))
    );
}

#[test]
fn test_four_rotations_restore_shape() {
    for kind in ShapeKind::ALL {
        let mut p = piece(kind);
        let original = sorted_cells(&p);
        for _ in 0..4 {
            p.rotate();
        }
        assert_eq!(p.stage(), 1, "{} stage", kind.as_str());
        assert_eq!(sorted_cells(&p), original, "{} cells", kind.as_str());
    }
}

#[test]
fn test_four_rotations_restore_shape_from_any_stage() {
    // The two mask transforms alternate, so the composition differs by
    // starting stage; the identity must hold from every one of them.
    for kind in ShapeKind::ALL {
        for pre in 0..4 {
            let mut p = piece(kind);
            for _ in 0..pre {
                p.rotate();
            }
            let stage = p.stage();
            let start = sorted_cells(&p);
            for _ in 0..4 {
                p.rotate();
            }
            assert_eq!(p.stage(), stage, "{} from stage {}", kind.as_str(), stage);
            assert_eq!(
                sorted_cells(&p),
                start,
                "{} from stage {}",
                kind.as_str(),
                stage
            );
        }
    }
}

#[test]
fn test_stage_cycle() {
    let mut p = piece(ShapeKind::T);
    for expected in [2, 3, 4, 1, 2] {
        p.rotate();
        assert_eq!(p.stage(), expected);
    }
}

#[test]
fn test_bar_turns_vertical() {
    let mut p = ActivePiece::new(ShapeKind::I, ColorTag::Blue, 7, 0);
    assert!(p.rotation_fits(|_, _| false));
    p.rotate();
    assert_eq!(sorted_cells(&p), vec![(7, 0), (7, 1), (7, 2), (7, 3)]);
}

#[test]
fn test_shift_translates_every_cell() {
    let mut p = piece(ShapeKind::T);
    let before = sorted_cells(&p);
    p.shift(2, 3);
    let after = sorted_cells(&p);
    for (a, b) in before.iter().zip(after.iter()) {
        assert_eq!((a.0 + 2, a.1 + 3), *b);
    }
}

#[test]
fn test_rotation_refused_against_stack() {
    // A vertical bar cannot swing horizontal through an occupied row.
    let mut p = ActivePiece::new(ShapeKind::I, ColorTag::Blue, 7, 5);
    p.rotate();
    assert!(p.rotation_fits(|_, _| false));
    assert!(!p.rotation_fits(|_, y| y == 8));
}

#[test]
fn test_rotation_refused_near_floor() {
    // Entering the bottom row by rotation is refused outright.
    let low = ActivePiece::new(ShapeKind::I, ColorTag::Blue, 5, 16);
    assert!(!low.rotation_fits(|_, _| false));

    let above = ActivePiece::new(ShapeKind::I, ColorTag::Blue, 5, 15);
    assert!(above.rotation_fits(|_, _| false));
}
