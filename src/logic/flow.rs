//! Flow generation tracking
//!
//! Each flow (upload, ask, collection fetch, Zotero add) owns a tracker.
//! A request is tagged with the generation returned by `begin`; when its
//! response arrives, `finish` accepts it only if no newer request started.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowTracker {
    generation: u64,
    in_flight: bool,
}

impl FlowTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a request for this flow is awaiting its response
    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    /// Start a new request, superseding any in-flight one
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.in_flight = true;
        self.generation
    }

    /// Latest generation handed out
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Accept a response for `generation`; returns false for stale responses
    pub fn finish(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.in_flight {
            return false;
        }
        self.in_flight = false;
        true
    }
}
