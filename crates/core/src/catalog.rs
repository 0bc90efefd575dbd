//! Catalog module - tetromino shapes, rotation tables and wall kick tables
//!
//! Every shape is described by four cell offsets around a pivot at `(0, 0)`.
//! The four rotation states are derived once from those base offsets by
//! repeatedly applying a 90° clockwise rotation:
//!
//! - I and O have an even-width bounding box, so they turn about the half-unit
//!   point `(0.5, 0.5)`; the rotated coordinates are rounded up (ceiling).
//! - J, L, S, T and Z turn about the integer cell `(0, 0)` exactly.
//!
//! Kick tables hold five candidate translations per row, with rows ordered
//! `0->1, 1->0, 1->2, 2->1, 2->3, 3->2, 3->0, 0->3`. See [`crate::kicks`] for
//! how a row is selected.

use std::sync::OnceLock;

use crate::types::{PieceKind, Rotation, RotationDirection};

/// Offset of a single mino relative to the piece anchor
pub type MinoOffset = (i32, i32);

/// Shape of a piece - 4 mino offsets from the piece anchor
pub type PieceShape = [MinoOffset; 4];

/// Number of rows in a kick table
pub const KICK_ROWS: usize = 8;

/// Candidates tried per kick row
pub const KICKS_PER_ROW: usize = 5;

/// Ordered kick translations, `[row][candidate]`
pub type KickTable = [[MinoOffset; KICKS_PER_ROW]; KICK_ROWS];

/// Immutable per-shape definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TetrominoData {
    pub kind: PieceKind,
    /// Offsets in the spawn orientation
    pub cells: PieceShape,
    /// Offsets for each rotation index
    pub rotations: [PieceShape; 4],
    pub wall_kicks: &'static KickTable,
}

impl TetrominoData {
    fn new(kind: PieceKind) -> Self {
        let cells = base_cells(kind);
        let mut rotations = [cells; 4];
        for i in 1..4 {
            rotations[i] = rotate_cells(kind, &rotations[i - 1], RotationDirection::Clockwise);
        }

        Self {
            kind,
            cells,
            rotations,
            wall_kicks: kick_table(kind),
        }
    }

    /// Offsets for the given rotation state.
    pub fn shape(&self, rotation: Rotation) -> &PieceShape {
        &self.rotations[rotation.index()]
    }
}

/// All seven shape definitions, built once.
#[derive(Debug)]
pub struct Catalog {
    tetrominos: [TetrominoData; 7],
}

impl Catalog {
    fn build() -> Self {
        Self {
            tetrominos: PieceKind::ALL.map(TetrominoData::new),
        }
    }

    pub fn get(&self, kind: PieceKind) -> &TetrominoData {
        &self.tetrominos[kind.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &TetrominoData> {
        self.tetrominos.iter()
    }
}

static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// The shared, read-only catalog.
pub fn catalog() -> &'static Catalog {
    CATALOG.get_or_init(Catalog::build)
}

/// Shorthand for `catalog().get(kind)`.
pub fn tetromino(kind: PieceKind) -> &'static TetrominoData {
    catalog().get(kind)
}

/// Get the shape (mino offsets) for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    *tetromino(kind).shape(rotation)
}

/// Spawn-orientation offsets
fn base_cells(kind: PieceKind) -> PieceShape {
    match kind {
        PieceKind::I => [(-1, 1), (0, 1), (1, 1), (2, 1)],
        PieceKind::O => [(0, 1), (1, 1), (0, 0), (1, 0)],
        PieceKind::T => [(0, 1), (-1, 0), (0, 0), (1, 0)],
        PieceKind::S => [(0, 1), (1, 1), (-1, 0), (0, 0)],
        PieceKind::Z => [(-1, 1), (0, 1), (0, 0), (1, 0)],
        PieceKind::J => [(-1, 1), (-1, 0), (0, 0), (1, 0)],
        PieceKind::L => [(1, 1), (-1, 0), (0, 0), (1, 0)],
    }
}

/// Rotate a footprint by 90° in `direction` about the shape's pivot.
///
/// Clockwise maps `(x, y)` to `(y, -x)`. Half-unit pivots are handled in
/// doubled coordinates so the ceiling is exact integer math: every doubled
/// coordinate is odd, and `ceil(v / 2) == (v + 1) / 2` for odd `v`.
pub fn rotate_cells(kind: PieceKind, cells: &PieceShape, direction: RotationDirection) -> PieceShape {
    let d = direction.sign();
    cells.map(|(x, y)| {
        if kind.has_half_unit_pivot() {
            let (px, py) = (2 * x - 1, 2 * y - 1);
            let (rx, ry) = (py * d, -px * d);
            ((rx + 1).div_euclid(2), (ry + 1).div_euclid(2))
        } else {
            (y * d, -x * d)
        }
    })
}

fn kick_table(kind: PieceKind) -> &'static KickTable {
    match kind {
        PieceKind::I => &I_KICKS,
        _ => &JLOSTZ_KICKS,
    }
}

/// Kick table shared by J, L, O, S, T and Z
static JLOSTZ_KICKS: KickTable = [
    // 0->1
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    // 1->0
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // 1->2
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // 2->1
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    // 2->3
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // 3->2
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // 3->0
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // 0->3
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
];

/// I piece kick table
static I_KICKS: KickTable = [
    // 0->1
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    // 1->0
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    // 1->2
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
    // 2->1
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
    // 2->3
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    // 3->2
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    // 3->0
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
    // 0->3
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
];
