//! The event matching and forwarding core.
//!
//! A [`Handler`] pairs an event selector with an optional bound callback and
//! an optional receiver-local region. Offering an event to a handler via
//! [`Handler::try_handle`] produces a [`MatchResult`]: the event either
//! fails to match (wrong type, or position outside the region), matches
//! with nothing to do, or matches and is forwarded to the callback.
//!
//! A handler with no callback is a valid, inert matcher: it still reports
//! match/no-match, which lets it act as a gate when composed with other
//! handlers in a chain.
//!
//! The `active` flag is owned by the routing layer. `try_handle` does not
//! consult it; [`HandlerChain`](crate::chain::HandlerChain) skips inactive
//! handlers before dispatch, so a handler dispatched directly behaves as if
//! active.

use std::fmt;

use evroute_events::{Event, EventSelector, Region};
use tracing::trace;

use crate::capabilities::DispatchContext;
use crate::error::DispatchError;

/// A bound action invoked when a handler matches an event.
///
/// The callback receives the event's master event as its primary subject
/// and the triggering event itself as the extra argument. For raw events
/// the two are the same object; for synthetic events the master is the raw
/// event at the root of the derivation chain.
///
/// Implemented for any `FnMut(&Event, &Event) -> Result<(), DispatchError>`
/// closure.
pub trait EventCallback {
    /// Executes the bound action.
    fn invoke(&mut self, master: &Event, event: &Event) -> Result<(), DispatchError>;
}

impl<F> EventCallback for F
where
    F: FnMut(&Event, &Event) -> Result<(), DispatchError>,
{
    fn invoke(&mut self, master: &Event, event: &Event) -> Result<(), DispatchError> {
        self(master, event)
    }
}

/// Outcome of offering an event to a handler.
#[derive(Debug)]
pub enum MatchResult {
    /// The event type did not match, or the position fell outside the
    /// handler's region. A region exclusion is terminal for the handler:
    /// callers must treat it identically to a type mismatch.
    NoMatch,
    /// The event matched and no callback is bound; nothing was done.
    MatchedNoAction,
    /// The event matched and the callback ran successfully.
    Handled,
    /// The event matched but the callback reported failure. The error is
    /// the callback's own, propagated verbatim.
    CallbackFailed(DispatchError),
}

impl MatchResult {
    /// Returns true if the dispatch succeeded.
    ///
    /// True for [`MatchedNoAction`](MatchResult::MatchedNoAction) and
    /// [`Handled`](MatchResult::Handled). A failed callback fails the
    /// dispatch the same way a mismatch does, which is what chain control
    /// flow keys on.
    pub fn succeeded(&self) -> bool {
        matches!(self, MatchResult::MatchedNoAction | MatchResult::Handled)
    }

    /// Returns true if the handler declined the event.
    pub fn is_no_match(&self) -> bool {
        matches!(self, MatchResult::NoMatch)
    }
}

/// An event-matching-and-forwarding record.
///
/// Constructed once with a selector and, optionally, a callback and a
/// region; immutable thereafter except for the `active` flag, which the
/// owning router toggles.
pub struct Handler {
    active: bool,
    selector: EventSelector,
    callback: Option<Box<dyn EventCallback>>,
    region: Option<Region>,
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("active", &self.active)
            .field("selector", &self.selector)
            .field("region", &self.region)
            .field("has_callback", &self.callback.is_some())
            .finish()
    }
}

impl Handler {
    /// Creates an active handler for the selected events, with no callback
    /// and no region restriction.
    pub fn new(selector: EventSelector) -> Self {
        Self {
            active: true,
            selector,
            callback: None,
            region: None,
        }
    }

    /// Binds a callback to invoke on match.
    pub fn with_callback(mut self, callback: impl EventCallback + 'static) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }

    /// Restricts matches to a region of the receiver.
    ///
    /// The region is interpreted in the coordinate space of the event's
    /// receiving object.
    pub fn with_region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    /// The selector this handler matches against.
    pub fn selector(&self) -> &EventSelector {
        &self.selector
    }

    /// The region restriction, if any.
    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    /// Returns true if a callback is bound.
    pub fn has_callback(&self) -> bool {
        self.callback.is_some()
    }

    /// Returns true if the routing layer should offer events to this
    /// handler.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Sets the active flag. Owned by the routing layer.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Offers an event to this handler.
    ///
    /// - If the event's type does not match the selector, returns
    ///   [`MatchResult::NoMatch`] with no side effects.
    /// - If a region is set, the event's position is resolved into the
    ///   receiver's local space and tested against the intersection of the
    ///   region and the receiver's bounds; an excluded position returns
    ///   [`MatchResult::NoMatch`].
    /// - On a full match the callback, if any, is invoked with
    ///   `(master_event, event)` and its outcome is propagated; without a
    ///   callback the result is [`MatchResult::MatchedNoAction`].
    ///
    /// The callback invocation is the only side effect; everything else is
    /// pure computation over the handler's fields and the event.
    pub fn try_handle(&mut self, event: &Event, ctx: &DispatchContext) -> MatchResult {
        if !ctx.classifier.is_a(event, &self.selector) {
            return MatchResult::NoMatch;
        }

        if let Some(region) = &self.region {
            let position = ctx.resolver.position_of(event, &event.receiver);
            if !ctx.region_test.inside(region, event.receiver.area, position) {
                trace!(
                    x = position.x,
                    y = position.y,
                    "type matched but position excluded by region"
                );
                return MatchResult::NoMatch;
            }
        }

        let result = match self.callback.as_mut() {
            None => MatchResult::MatchedNoAction,
            Some(callback) => match callback.invoke(event.master_event(), event) {
                Ok(()) => MatchResult::Handled,
                Err(err) => MatchResult::CallbackFailed(err),
            },
        };
        trace!(?result, "handler matched");
        result
    }
}
