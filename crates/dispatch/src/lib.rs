//! evroute-dispatch: event matching and forwarding for the evroute toolkit.
//!
//! This crate provides the dispatch core: a [`Handler`] matches incoming
//! events against an event selector and an optional receiver-local region,
//! and forwards matches to an optional bound callback. A [`HandlerChain`]
//! routes events across an ordered collection of handlers.
//!
//! # Overview
//!
//! Dispatch depends on three pieces of toolkit behavior through capability
//! traits ([`EventClassifier`], [`PositionResolver`], [`RegionTest`]),
//! bundled in a [`DispatchContext`]. The stock implementations cover flat
//! window coordinates and rectangular regions; embedders substitute their
//! own for nested coordinate systems or custom region shapes.
//!
//! Dispatch is synchronous and single-threaded: the callback runs on the
//! caller's stack and its outcome is the dispatch outcome. The only side
//! effect of a dispatch is the callback invocation.
//!
//! # Example
//!
//! ```
//! use evroute_dispatch::{DispatchContext, Handler};
//! use evroute_events::{
//!     Area, Event, EventClass, EventSelector, InputEvent, MouseButton, MouseEvent, Point,
//!     Receiver, Region,
//! };
//!
//! let ctx = DispatchContext::default_caps();
//!
//! // Match any mouse event in the top-left 20x20 corner of the receiver.
//! let mut handler = Handler::new(EventSelector::Class(EventClass::Mouse))
//!     .with_region(Region::rect(0.0, 0.0, 20.0, 20.0));
//!
//! let receiver = Receiver::new(1, Area::new(0.0, 0.0, 100.0, 100.0));
//! let event = Event::new(
//!     InputEvent::Mouse(MouseEvent::down(MouseButton::Left)),
//!     Point::new(5.0, 5.0),
//!     receiver,
//! );
//!
//! assert!(handler.try_handle(&event, &ctx).succeeded());
//! ```

pub mod capabilities;
pub mod chain;
pub mod error;
pub mod handler;
pub mod trace;

pub use capabilities::{
    ClipRegionTest, DispatchContext, EventClassifier, PositionResolver, RegionTest,
    SelectorClassifier, WindowResolver,
};
pub use chain::HandlerChain;
pub use error::{DispatchError, TraceError};
pub use handler::{EventCallback, Handler, MatchResult};
pub use trace::{
    default_trace_path, load_from, EventSummary, OutcomeSummary, TraceData, TraceEntry,
    TraceRecorder,
};
