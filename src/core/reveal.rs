//! Once-only reveal state for blocks that animate in as they scroll into view.

use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, Instant};

use tracing::trace;

use crate::core::motion::ease_out;

pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(500);

/// Stable identifier of a tracked block, namespaced by screen
/// (`home/about/journey`, `uiux/card/2`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(String);

impl BlockId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Builds `scope/part/part...`.
    pub fn scoped<I, S>(scope: &str, parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: fmt::Display,
    {
        let mut id = scope.to_string();
        for part in parts {
            id.push('/');
            id.push_str(&part.to_string());
        }
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum RevealState {
    #[default]
    Hidden,
    Revealed(Instant),
}

/// Tracks, per block, whether it has entered the viewport at least once.
///
/// The flag is monotonic: after the first intersecting event a block
/// stays revealed no matter what later events say.
#[derive(Debug)]
pub struct RevealPresenter {
    blocks: HashMap<BlockId, RevealState>,
    transition: Duration,
}

impl Default for RevealPresenter {
    fn default() -> Self {
        Self::new(DEFAULT_TRANSITION)
    }
}

impl RevealPresenter {
    pub fn new(transition: Duration) -> Self {
        Self {
            blocks: HashMap::new(),
            transition,
        }
    }

    /// Registers the blocks of a freshly mounted screen. Blocks that are
    /// already known keep their state.
    pub fn mount<I>(&mut self, blocks: I)
    where
        I: IntoIterator<Item = BlockId>,
    {
        for block in blocks {
            self.blocks.entry(block).or_default();
        }
    }

    /// Feeds one intersection event. Returns `true` when this event is
    /// the one that revealed the block.
    pub fn observe(&mut self, block: BlockId, is_intersecting: bool, now: Instant) -> bool {
        let state = self.blocks.entry(block).or_default();
        match (*state, is_intersecting) {
            (RevealState::Hidden, true) => {
                *state = RevealState::Revealed(now);
                trace!("block revealed");
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(&self, block: &BlockId) -> bool {
        matches!(self.blocks.get(block), Some(RevealState::Revealed(_)))
    }

    /// Eased progress of the reveal transition, `0.0` while hidden and
    /// `1.0` once the transition has run its course.
    pub fn progress(&self, block: &BlockId, now: Instant) -> f32 {
        match self.blocks.get(block) {
            Some(RevealState::Revealed(at)) => {
                if self.transition.is_zero() {
                    return 1.0;
                }
                let elapsed = now.saturating_duration_since(*at);
                let t = elapsed.as_secs_f32() / self.transition.as_secs_f32();
                ease_out(t.min(1.0))
            }
            _ => 0.0,
        }
    }

    /// Whether any reveal transition is still running at `now`.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.blocks.values().any(|state| match state {
            RevealState::Revealed(at) => now.saturating_duration_since(*at) < self.transition,
            RevealState::Hidden => false,
        })
    }

    pub fn revealed_count(&self) -> usize {
        self.blocks
            .values()
            .filter(|state| matches!(state, RevealState::Revealed(_)))
            .count()
    }

    pub fn tracked_count(&self) -> usize {
        self.blocks.len()
    }
}
