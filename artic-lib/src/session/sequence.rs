//! Request sequencing for page fetches.

/// Identifier attached to one outgoing fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    /// Returns the raw sequence number.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out increasing request ids and remembers the latest one.
///
/// Only the most recently issued id is current. A response tagged with any
/// older id belongs to a superseded request and must be dropped.
#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    latest: u64,
}

impl RequestSequencer {
    /// Creates a sequencer that has not issued anything yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next id, superseding every earlier one.
    pub fn issue(&mut self) -> RequestId {
        self.latest += 1;
        RequestId(self.latest)
    }

    /// Supersedes every issued id without issuing a new one.
    pub fn cancel(&mut self) {
        self.latest += 1;
    }

    /// Returns `true` if `id` is the most recently issued id.
    pub fn is_current(&self, id: RequestId) -> bool {
        id.0 == self.latest
    }
}
