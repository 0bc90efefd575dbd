//! Greedy placement bot for the headless driver.
//!
//! For every new piece the bot tries each rotation and column on a scratch
//! copy of the board, scores the result and then replays the winning
//! placement as ordinary actions, one per frame.

use blockstacker::core::{Board, GameState, Piece, RandomSource};
use blockstacker::types::{GameAction, RotationDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    rotations: u8,
    shift: i32,
}

impl Plan {
    /// Next action needed to carry out the plan, consuming one step of it
    fn next_action(&mut self) -> GameAction {
        if self.rotations > 0 {
            self.rotations -= 1;
            GameAction::RotateCw
        } else if self.shift < 0 {
            self.shift += 1;
            GameAction::MoveLeft
        } else if self.shift > 0 {
            self.shift -= 1;
            GameAction::MoveRight
        } else {
            GameAction::HardDrop
        }
    }
}

#[derive(Debug, Default)]
pub struct Bot {
    /// Plan for the piece identified by `(episode_id, piece_id)`
    plan: Option<((u32, u32), Plan)>,
}

impl Bot {
    /// Pick the action for this frame.
    pub fn act<R: RandomSource>(&mut self, game: &GameState<R>) -> Option<GameAction> {
        let piece = game.active()?;
        let key = (game.episode_id(), game.piece_id());

        let stale = !matches!(self.plan, Some((k, _)) if k == key);
        if stale {
            self.plan = Some((key, best_plan(game.board(), piece)));
        }
        let (_, plan) = self.plan.as_mut()?;
        Some(plan.next_action())
    }
}

fn best_plan(board: &Board, piece: Piece) -> Plan {
    let mut best = Plan { rotations: 0, shift: 0 };
    let mut best_score = i32::MIN;

    for rotations in 0..4u8 {
        let mut rotated = piece;
        if (0..rotations).any(|_| !rotated.try_rotate(board, RotationDirection::Clockwise)) {
            continue;
        }
        for shift in -(board.width())..=board.width() {
            let mut candidate = rotated;
            if !candidate.try_translate(board, shift, 0) {
                continue;
            }
            let score = score_landing(board, candidate);
            if score > best_score {
                best_score = score;
                best = Plan { rotations, shift };
            }
        }
    }
    best
}

/// Higher is better: cleared lines are rewarded, height and holes punished.
fn score_landing(board: &Board, mut piece: Piece) -> i32 {
    let drop = piece.drop_distance(board);
    piece.try_translate(board, 0, -drop);

    let mut scratch = board.clone();
    scratch.place(&piece.footprint(), piece.kind());
    let cleared = scratch.clear_lines() as i32;

    let bounds = scratch.bounds();
    let height = scratch
        .stack_top()
        .map_or(0, |top| top - bounds.y_min + 1);

    let mut holes = 0;
    for x in bounds.x_min..bounds.x_max() {
        let mut covered = false;
        for y in (bounds.y_min..bounds.y_max()).rev() {
            if scratch.is_occupied(x, y) {
                covered = true;
            } else if covered {
                holes += 1;
            }
        }
    }

    cleared * 8 - height * 3 - holes * 5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_ends_with_hard_drop() {
        let mut plan = Plan { rotations: 1, shift: -2 };
        assert_eq!(plan.next_action(), GameAction::RotateCw);
        assert_eq!(plan.next_action(), GameAction::MoveLeft);
        assert_eq!(plan.next_action(), GameAction::MoveLeft);
        assert_eq!(plan.next_action(), GameAction::HardDrop);
    }

    #[test]
    fn test_bot_locks_pieces() {
        let mut game = GameState::new(9);
        let mut bot = Bot::default();
        for _ in 0..200 {
            if let Some(action) = bot.act(&game) {
                game.apply_action(action);
            }
        }
        assert!(game.pieces_locked() > 10);
    }
}
