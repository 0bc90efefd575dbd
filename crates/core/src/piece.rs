//! Piece module - the active piece's geometry and legal moves
//!
//! A [`Piece`] is an anchor position, a rotation index and the four cell
//! offsets for that rotation. It never owns the board: every move borrows the
//! board only long enough to validate, so the board can stay the single owner
//! of locked cells.

use crate::board::Board;
use crate::catalog::{tetromino, PieceShape};
use crate::kicks;
use crate::types::{MoveDirection, PieceKind, Rotation, RotationDirection};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    position: (i32, i32),
    rotation: Rotation,
    cells: PieceShape,
}

impl Piece {
    /// Create a piece in spawn orientation at `position`
    pub fn new(kind: PieceKind, position: (i32, i32)) -> Self {
        Self {
            kind,
            position,
            rotation: Rotation::Spawn,
            cells: tetromino(kind).cells,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn position(&self) -> (i32, i32) {
        self.position
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Offsets relative to the anchor for the current rotation
    pub fn cells(&self) -> &PieceShape {
        &self.cells
    }

    /// Absolute cells at the current position
    pub fn footprint(&self) -> [(i32, i32); 4] {
        self.footprint_at(self.position)
    }

    /// Absolute cells if the anchor were at `position`
    pub fn footprint_at(&self, position: (i32, i32)) -> [(i32, i32); 4] {
        let (px, py) = position;
        self.cells.map(|(dx, dy)| (px + dx, py + dy))
    }

    /// Translate by `(dx, dy)` if the result is a valid position.
    ///
    /// Returns false and leaves the piece untouched otherwise.
    pub fn try_translate(&mut self, board: &Board, dx: i32, dy: i32) -> bool {
        let target = (self.position.0 + dx, self.position.1 + dy);
        if board.is_valid_position(&self.footprint_at(target)) {
            self.position = target;
            true
        } else {
            false
        }
    }

    /// Move one cell left, right or down.
    pub fn try_move(&mut self, board: &Board, direction: MoveDirection) -> bool {
        let (dx, dy) = direction.offset();
        self.try_translate(board, dx, dy)
    }

    /// Rotate one step with wall kicks.
    ///
    /// On failure both the rotation index and the footprint are restored.
    pub fn try_rotate(&mut self, board: &Board, direction: RotationDirection) -> bool {
        let original = *self;

        self.rotation = original.rotation.rotate(direction);
        self.cells = *tetromino(self.kind).shape(self.rotation);

        if kicks::resolve(self, board, original.rotation, direction).is_some() {
            true
        } else {
            *self = original;
            false
        }
    }

    /// True when the piece cannot move down any further
    pub fn is_grounded(&self, board: &Board) -> bool {
        let (x, y) = self.position;
        !board.is_valid_position(&self.footprint_at((x, y - 1)))
    }

    /// How many rows the piece can fall from where it is
    pub fn drop_distance(&self, board: &Board) -> i32 {
        let (x, y) = self.position;
        let mut distance = 0;
        while board.is_valid_position(&self.footprint_at((x, y - distance - 1))) {
            distance += 1;
        }
        distance
    }

    /// Lowest row the footprint touches
    pub fn bottom(&self) -> i32 {
        self.footprint().iter().map(|&(_, y)| y).min().unwrap_or(self.position.1)
    }
}
