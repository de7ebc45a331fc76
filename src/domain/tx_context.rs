//! Per-transaction execution context.

use tracing::trace;

use super::{Address, ObjectId};
use crate::events::Event;

/// What the execution substrate provides to a single transaction.
///
/// - the sender, used as creator, provider and recipient in records;
/// - a stream of fresh [`ObjectId`]s;
/// - an append-only buffer of [`Event`]s.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{Address, TxContext};
///
/// let mut ctx = TxContext::new(Address::from_bytes([1u8; 32]), [0u8; 32]);
/// let a = ctx.fresh_id();
/// let b = ctx.fresh_id();
/// assert_ne!(a, b);
/// assert_eq!(ctx.ids_created(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct TxContext {
    sender: Address,
    digest: [u8; 32],
    ids_created: u64,
    events: Vec<Event>,
}

impl TxContext {
    /// A context for a transaction identified by `digest`.
    #[must_use]
    pub const fn new(sender: Address, digest: [u8; 32]) -> Self {
        Self {
            sender,
            digest,
            ids_created: 0,
            events: Vec::new(),
        }
    }

    /// Sender of the transaction.
    #[must_use]
    pub const fn sender(&self) -> Address {
        self.sender
    }

    /// Transaction digest.
    #[must_use]
    pub const fn digest(&self) -> [u8; 32] {
        self.digest
    }

    /// Number of ids handed out so far.
    #[must_use]
    pub const fn ids_created(&self) -> u64 {
        self.ids_created
    }

    /// Returns a new id, distinct from every id produced before.
    pub fn fresh_id(&mut self) -> ObjectId {
        let id = ObjectId::derive(&self.digest, self.ids_created);
        self.ids_created += 1;
        id
    }

    /// Appends a record.
    pub fn emit(&mut self, event: Event) {
        trace!(kind = event.kind(), "event emitted");
        self.events.push(event);
    }

    /// Records emitted so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Drains the record buffer.
    pub fn take_events(&mut self) -> Vec<Event> {
        core::mem::take(&mut self.events)
    }
}
