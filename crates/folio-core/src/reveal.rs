//! Bookkeeping for reveal-on-scroll.
//!
//! The browser may report an element as intersecting many times; the tracker
//! makes sure each one is revealed at most once.

use fnv::FnvHashSet;
use smallvec::SmallVec;

/// Classes whose elements are observed for reveal.
pub const REVEAL_SELECTORS: [&str; 6] = [
    ".fade-in",
    ".slide-in-left",
    ".slide-in-right",
    ".scale-in",
    ".bounce-in",
    ".rotate-in",
];
pub const VISIBLE_CLASS: &str = "visible";
pub const STAGGER_ITEM_SELECTOR: &str = ".stagger-item";
pub const REVEAL_ID_ATTRIBUTE: &str = "data-reveal-id";

pub type RevealId = u32;

#[derive(Debug, Default)]
pub struct RevealTracker {
    next_id: RevealId,
    revealed: FnvHashSet<RevealId>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out an id for a newly observed element.
    pub fn register(&mut self) -> RevealId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Record an intersection. Returns `true` only the first time for `id`.
    pub fn mark_visible(&mut self, id: RevealId) -> bool {
        self.revealed.insert(id)
    }

    pub fn is_revealed(&self, id: RevealId) -> bool {
        self.revealed.contains(&id)
    }

    pub fn registered(&self) -> usize {
        self.next_id as usize
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}

/// Per-child delays for a staggered reveal: `index * step_ms`.
pub fn stagger_delays(count: usize, step_ms: u32) -> SmallVec<[u32; 8]> {
    (0..count as u32).map(|i| i * step_ms).collect()
}
