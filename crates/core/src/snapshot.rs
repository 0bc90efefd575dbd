//! Read-only, serializable view of a session for drivers and renderers.

use serde::{Deserialize, Serialize};

use crate::game_state::Phase;
use crate::piece::Piece;
use crate::types::{Bounds, Cell, PieceKind, Rotation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i32,
    pub y: i32,
    /// Absolute cells
    pub cells: [(i32, i32); 4],
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        let (x, y) = value.position();
        Self {
            kind: value.kind(),
            rotation: value.rotation(),
            x,
            y,
            cells: value.footprint(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimersSnapshot {
    pub step_ms: u32,
    pub lock_ms: u32,
    pub lock_resets: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub bounds: Bounds,
    /// Rows from top to bottom
    pub board: Vec<Vec<Cell>>,
    pub active: Option<ActiveSnapshot>,
    /// Rows the active piece would fall on a hard drop
    pub drop_distance: Option<i32>,
    pub hold: Option<PieceKind>,
    pub can_hold: bool,
    pub next_queue: Vec<PieceKind>,
    pub phase: Phase,
    pub episode_id: u32,
    pub piece_id: u32,
    pub lines: u32,
    pub pieces_locked: u32,
    pub timers: TimersSnapshot,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.phase != Phase::GameOver
    }

    /// Render the board as text, `.` for empty cells and the active piece
    /// drawn over the stack.
    pub fn to_ascii(&self) -> String {
        let width = self.bounds.width as usize;
        let mut out = String::with_capacity((width + 1) * self.board.len());
        for (i, row) in self.board.iter().enumerate() {
            let y = self.bounds.y_max() - 1 - i as i32;
            for (j, cell) in row.iter().enumerate() {
                let x = self.bounds.x_min + j as i32;
                let is_active = self
                    .active
                    .is_some_and(|a| a.cells.contains(&(x, y)));
                let ch = if is_active {
                    '@'
                } else {
                    match cell {
                        Some(kind) => kind.as_str().chars().next().unwrap_or('#'),
                        None => '.',
                    }
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            bounds: Bounds::default(),
            board: Vec::new(),
            active: None,
            drop_distance: None,
            hold: None,
            can_hold: true,
            next_queue: Vec::new(),
            phase: Phase::Falling,
            episode_id: 0,
            piece_id: 0,
            lines: 0,
            pieces_locked: 0,
            timers: TimersSnapshot::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameState;

    #[test]
    fn test_ascii_marks_active_piece() {
        let state = GameState::new(3);
        let text = state.snapshot().to_ascii();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 22);
        assert!(lines.iter().all(|l| l.len() == 10));
        assert_eq!(text.matches('@').count(), 4);
    }

    #[test]
    fn test_snapshot_serializes_lowercase_kinds() {
        let snap = ActiveSnapshot::from(Piece::new(PieceKind::T, (0, 0)));
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("\"kind\":\"t\""));
        assert!(json.contains("\"rotation\":\"spawn\""));
    }
}
