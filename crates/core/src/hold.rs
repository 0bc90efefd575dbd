//! Hold slot - one retained shape plus the once-per-lock guard

use crate::types::PieceKind;

/// What a successful [`HoldSlot::swap`] hands back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldSwap {
    /// The slot was empty; the next piece comes from the queue.
    FromQueue,
    /// The slot held this shape; it becomes the active piece.
    Swapped(PieceKind),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoldSlot {
    shape: Option<PieceKind>,
    locked: bool,
}

impl HoldSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shape(&self) -> Option<PieceKind> {
        self.shape
    }

    /// Whether a hold is still allowed for the current piece
    pub fn can_hold(&self) -> bool {
        !self.locked
    }

    /// Put `active` in the slot and report what should replace it.
    ///
    /// Returns `None` without touching anything if a hold already happened
    /// since the last lock.
    pub fn swap(&mut self, active: PieceKind) -> Option<HoldSwap> {
        if self.locked {
            return None;
        }
        self.locked = true;
        Some(match self.shape.replace(active) {
            Some(previous) => HoldSwap::Swapped(previous),
            None => HoldSwap::FromQueue,
        })
    }

    /// Re-arm the slot; called exactly once per lock.
    pub fn unlock(&mut self) {
        self.locked = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_hold_draws_from_queue() {
        let mut slot = HoldSlot::new();
        assert_eq!(slot.swap(PieceKind::T), Some(HoldSwap::FromQueue));
        assert_eq!(slot.shape(), Some(PieceKind::T));
        assert!(!slot.can_hold());
    }

    #[test]
    fn test_second_hold_before_unlock_is_ignored() {
        let mut slot = HoldSlot::new();
        slot.swap(PieceKind::T);
        assert_eq!(slot.swap(PieceKind::I), None);
        assert_eq!(slot.shape(), Some(PieceKind::T));
    }

    #[test]
    fn test_swap_after_unlock_returns_held_shape() {
        let mut slot = HoldSlot::new();
        slot.swap(PieceKind::T);
        slot.unlock();
        assert_eq!(slot.swap(PieceKind::L), Some(HoldSwap::Swapped(PieceKind::T)));
        assert_eq!(slot.shape(), Some(PieceKind::L));
    }
}
