//! Hardware pointer slots are reused by the platform across unrelated
//! touches. Each slot maps to a session id that is replaced when its touch
//! ends, so a later touch on the same slot never lands on a committed stroke.

use crate::stroke::SessionId;
use fnv::FnvHashMap;

/// Platform pointer/touch identifier. May be reused across touches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SlotId(pub u64);

#[derive(Debug, Default)]
pub struct IdentityAllocator {
    sessions: FnvHashMap<SlotId, SessionId>,
    next: u64,
}

impl IdentityAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current session for `slot`, allocating one on first use.
    pub fn resolve(&mut self, slot: SlotId) -> SessionId {
        if let Some(id) = self.sessions.get(&slot) {
            return *id;
        }
        let id = self.allocate();
        self.sessions.insert(slot, id);
        id
    }

    /// Installs a fresh session for `slot`, discarding the current one.
    pub fn rotate(&mut self, slot: SlotId) -> SessionId {
        let id = self.allocate();
        self.sessions.insert(slot, id);
        id
    }

    pub fn current(&self, slot: SlotId) -> Option<SessionId> {
        self.sessions.get(&slot).copied()
    }

    fn allocate(&mut self) -> SessionId {
        let id = SessionId(self.next);
        self.next += 1;
        id
    }
}
