//! Queue module - upcoming shapes, refilled one whole bag at a time
//!
//! The queue is a FIFO of pending shapes built by concatenating independently
//! shuffled bags. Callers consume from the front with [`PieceQueue::dequeue`]
//! and run [`PieceQueue::refill_if_needed`] once per discrete game step. The
//! refill appends at most one bag per call. Construction and [`PieceQueue::reset`]
//! fill until the length exceeds the preview window, so right after any
//! dequeue the length lies in `[preview_len, preview_len + BAG_SIZE)`.

use std::collections::VecDeque;

use arrayvec::ArrayVec;
use tracing::trace;

use crate::rng::{new_bag, RandomSource, SimpleRng};
use crate::types::{PieceKind, BAG_SIZE, MAX_PREVIEW_LEN, PREVIEW_LEN};

/// Lookahead window returned by [`PieceQueue::peek`]
pub type Preview = ArrayVec<PieceKind, MAX_PREVIEW_LEN>;

/// Backlog of upcoming shapes
#[derive(Debug, Clone)]
pub struct PieceQueue<R = SimpleRng> {
    pending: VecDeque<PieceKind>,
    preview_len: usize,
    rng: R,
}

impl PieceQueue<SimpleRng> {
    /// Create a queue driven by a [`SimpleRng`] with the given seed
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed), PREVIEW_LEN)
    }

    /// Current RNG state (for restarting a game with a continued sequence)
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl<R: RandomSource> PieceQueue<R> {
    /// Create a queue with an injected random source.
    ///
    /// `preview_len` is clamped to `1..=MAX_PREVIEW_LEN`. The queue starts
    /// with enough bags to cover the preview window.
    pub fn with_rng(rng: R, preview_len: usize) -> Self {
        let mut queue = Self {
            pending: VecDeque::with_capacity(MAX_PREVIEW_LEN + BAG_SIZE),
            preview_len: preview_len.clamp(1, MAX_PREVIEW_LEN),
            rng,
        };
        queue.fill();
        queue
    }

    /// Append bags until the length exceeds the preview window
    fn fill(&mut self) {
        while self.pending.len() <= self.preview_len {
            self.refill();
        }
    }

    /// Append one freshly shuffled bag to the back
    pub fn refill(&mut self) {
        let bag = new_bag(&mut self.rng);
        trace!(?bag, "queue refilled");
        self.pending.extend(bag);
    }

    /// Refill once if the lookahead has dropped to the preview window.
    ///
    /// Returns whether a bag was appended. Never appends more than one bag.
    pub fn refill_if_needed(&mut self) -> bool {
        if self.pending.len() <= self.preview_len {
            self.refill();
            true
        } else {
            false
        }
    }

    /// Drop every pending shape and start over from fresh bags.
    ///
    /// The random source keeps its state.
    pub fn reset(&mut self) {
        self.pending.clear();
        self.fill();
    }

    /// Remove and return the front shape
    pub fn dequeue(&mut self) -> Option<PieceKind> {
        self.pending.pop_front()
    }

    /// Next `n` shapes without removing them (`n` is capped at the preview length).
    ///
    /// Stack-only; does not allocate.
    pub fn peek(&self, n: usize) -> Preview {
        self.pending
            .iter()
            .take(n.min(self.preview_len))
            .copied()
            .collect()
    }

    /// The full preview window.
    pub fn preview(&self) -> Preview {
        self.peek(self.preview_len)
    }

    pub fn preview_len(&self) -> usize {
        self.preview_len
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Consume the queue, handing back its random source.
    pub fn into_rng(self) -> R {
        self.rng
    }
}

impl Default for PieceQueue<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}
