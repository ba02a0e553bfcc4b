//! Append-only feed of committed operations for the transport layer.

use crate::types::Operation;

use super::wire::{encode_operations, WireError};

type Listener = Box<dyn Fn(&Operation) + Send + Sync>;

/// Operations committed to the history, in commit order, waiting to be sent.
///
/// Only the engine appends. A transport either drains pending operations or
/// registers a listener to forward each one as it is committed.
#[derive(Default)]
pub struct OutboundQueue {
    pending: Vec<Operation>,
    /// Everything ever appended, unaffected by drains
    committed: u64,
    listeners: Vec<Listener>,
}

impl std::fmt::Debug for OutboundQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutboundQueue")
            .field("pending", &self.pending.len())
            .field("committed", &self.committed)
            .field("listener_count", &self.listeners.len())
            .finish()
    }
}

impl OutboundQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an operation and notify listeners
    pub(crate) fn push(&mut self, op: Operation) {
        self.committed += 1;
        for listener in &self.listeners {
            listener(&op);
        }
        self.pending.push(op);
    }

    /// Operations not yet drained
    pub fn pending(&self) -> &[Operation] {
        &self.pending
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Total operations ever appended
    pub fn total_committed(&self) -> u64 {
        self.committed
    }

    /// Remove and return all pending operations
    pub fn drain(&mut self) -> Vec<Operation> {
        std::mem::take(&mut self.pending)
    }

    /// Drain pending operations as a JSON batch.
    ///
    /// On encoding failure the operations stay queued.
    pub fn drain_encoded(&mut self) -> Result<String, WireError> {
        let encoded = encode_operations(&self.pending)?;
        self.pending.clear();
        Ok(encoded)
    }

    /// Register a listener that receives every operation as it is appended
    pub fn add_listener<F>(&mut self, listener: F)
    where
        F: Fn(&Operation) + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(listener));
    }
}
