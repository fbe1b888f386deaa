//! The composite event record delivered to handlers.
//!
//! An [`Event`] pairs an input payload with its window-space position and a
//! [`Receiver`] descriptor naming the graphical object the event targets.
//!
//! # Master events
//!
//! Synthetic events (a click recognized from a down/up pair, a drag repeat,
//! an auto-repeat key) wrap the raw event that produced them. Callbacks are
//! always forwarded the *master* event — the canonical raw event at the root
//! of the chain — with the triggering event passed alongside it.

use crate::geometry::{Area, Point};
use crate::input::{EventClass, EventKind, InputEvent};

/// Unique identifier for a receiver within a window.
pub type ReceiverId = u64;

/// Generates a new unique receiver ID.
pub fn gen_receiver_id(next_id: &mut u64) -> ReceiverId {
    let id = *next_id;
    *next_id += 1;
    id
}

/// The graphical object an event targets.
///
/// Dispatch only needs two facts about the receiving object: its identity
/// and its window-space bounds. Everything else about the object (its
/// contents, its children, how it draws) stays with the embedder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Receiver {
    /// Unique identifier for this receiver
    pub id: ReceiverId,
    /// The receiver's bounds in window coordinates
    pub area: Area,
}

impl Receiver {
    /// Creates a new receiver descriptor.
    pub fn new(id: ReceiverId, area: Area) -> Self {
        Self { id, area }
    }
}

/// An input event targeted at a receiver.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// What happened
    pub input: InputEvent,
    /// Where it happened, in window coordinates
    pub position: Point,
    /// The graphical object the event targets
    pub receiver: Receiver,
    /// The raw event this event was derived from, if this event is synthetic
    pub master: Option<Box<Event>>,
}

impl Event {
    /// Creates a new raw event.
    pub fn new(input: InputEvent, position: Point, receiver: Receiver) -> Self {
        Self {
            input,
            position,
            receiver,
            master: None,
        }
    }

    /// Marks this event as derived from `master`.
    ///
    /// Use when constructing a synthetic event from a raw one, e.g. a click
    /// event recognized from a button release.
    pub fn with_master(mut self, master: Event) -> Self {
        self.master = Some(Box::new(master));
        self
    }

    /// Returns the canonical raw event underlying this one.
    ///
    /// Walks the master chain to its root. For a raw event this is the
    /// event itself. This is what gets forwarded to callbacks as their
    /// primary subject.
    pub fn master_event(&self) -> &Event {
        let mut event = self;
        while let Some(master) = &event.master {
            event = master;
        }
        event
    }

    /// Returns the precise identity of this event.
    pub fn kind(&self) -> EventKind {
        self.input.kind()
    }

    /// Returns the coarse family of this event.
    pub fn class(&self) -> EventClass {
        self.input.class()
    }
}
