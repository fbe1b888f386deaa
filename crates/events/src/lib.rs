//! evroute-events: event and geometry types for the evroute toolkit.
//!
//! This crate is the pure data layer shared by the dispatch core and
//! embedders: input payloads, event identification, the composite [`Event`]
//! record with master-event chaining, the [`Receiver`] descriptor, and the
//! geometry used by region tests.
//!
//! # Overview
//!
//! An [`Event`] carries three things dispatch cares about:
//! - an [`InputEvent`] payload (key, mouse, or scroll),
//! - a window-space [`Point`] position,
//! - the [`Receiver`] it targets (identity plus window-space [`Area`]).
//!
//! Handlers select events with an [`EventSelector`], which names an exact
//! [`EventKind`], a whole [`EventClass`], or every event. An optional
//! [`Region`] restricts a handler to part of the receiver, in the
//! receiver's local coordinate space.
//!
//! # Example
//!
//! ```
//! use evroute_events::{Area, Event, InputEvent, KeyEvent, Point, Receiver};
//!
//! let receiver = Receiver::new(7, Area::new(0.0, 0.0, 80.0, 24.0));
//! let event = Event::new(
//!     InputEvent::Key(KeyEvent::char('x')),
//!     Point::new(4.0, 2.0),
//!     receiver,
//! );
//!
//! // A raw event is its own master event.
//! assert_eq!(event.master_event(), &event);
//! ```

mod event;
mod geometry;
mod input;

pub use event::{gen_receiver_id, Event, Receiver, ReceiverId};
pub use geometry::{Area, Point, Region};
pub use input::{
    EventClass, EventKind, EventSelector, InputEvent, Key, KeyEvent, Modifiers, MouseButton,
    MouseEvent, MousePhase, ScrollDelta,
};
