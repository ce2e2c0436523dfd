use std::time::{Duration, Instant};

use crate::game::WinningLine;

/// Delayed, purely visual reactions to a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Start spinning the winning pieces
    Highlight(WinningLine),
    /// Show the end-of-game message
    Announce(String),
}

#[derive(Debug, Clone)]
struct Scheduled {
    due: Instant,
    effect: Effect,
}

/// Effects waiting for their deadline. Drained by the UI loop on every tick.
#[derive(Debug, Clone, Default)]
pub struct EffectQueue {
    pending: Vec<Scheduled>,
}

impl EffectQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now: Instant, delay: Duration, effect: Effect) {
        self.pending.push(Scheduled {
            due: now + delay,
            effect,
        });
    }

    /// Remove and return every effect due at `now`, earliest first
    pub fn take_due(&mut self, now: Instant) -> Vec<Effect> {
        let (mut due, pending): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.pending)
                .into_iter()
                .partition(|s| s.due <= now);
        self.pending = pending;
        due.sort_by_key(|s| s.due);
        due.into_iter().map(|s| s.effect).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
