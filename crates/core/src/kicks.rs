//! Wall kick resolution
//!
//! After a piece's footprint has been swapped for its new rotation, the
//! candidates of one kick-table row are tried in order as plain translations.
//! The first that validates is kept.
//!
//! The row depends on the rotation the piece had *before* turning:
//! `2 * from - (counter-clockwise ? 1 : 0)`, wrapped into the table. With the
//! catalog's row order this lands on the `from -> to` row for both directions,
//! e.g. `0 -> 3` is row 7 and `2 -> 1` is row 3.

use tracing::trace;

use crate::board::Board;
use crate::catalog::{tetromino, MinoOffset, KICK_ROWS};
use crate::piece::Piece;
use crate::types::{Rotation, RotationDirection};

/// Kick-table row for a rotation starting at `from`.
pub fn wall_kick_row(from: Rotation, direction: RotationDirection) -> usize {
    let mut row = from.index() as i32 * 2;
    if direction.sign() < 0 {
        row -= 1;
    }
    row.rem_euclid(KICK_ROWS as i32) as usize
}

/// Try each kick of the row selected by `from` and `direction`.
///
/// `piece` must already carry its post-rotation footprint. Returns the
/// translation that succeeded, or `None` with the piece left where it was.
pub fn resolve(
    piece: &mut Piece,
    board: &Board,
    from: Rotation,
    direction: RotationDirection,
) -> Option<MinoOffset> {
    let row = wall_kick_row(from, direction);
    let kicks = &tetromino(piece.kind()).wall_kicks[row];

    let kick = kicks
        .iter()
        .copied()
        .find(|&(dx, dy)| piece.try_translate(board, dx, dy));

    if let Some(offset) = kick {
        if offset != (0, 0) {
            trace!(kind = ?piece.kind(), row, ?offset, "wall kick");
        }
    }
    kick
}
