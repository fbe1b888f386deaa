//! Ordered routing of events across a collection of handlers.
//!
//! [`HandlerChain`] is the routing seam the matching core is consumed by:
//! it owns handlers in insertion order, gates on each handler's `active`
//! flag, and offers an incoming event to each remaining handler until one
//! succeeds. Handlers without callbacks compose as gates — a succeeding
//! gate stops the chain without producing any action.
//!
//! The chain processes one event at a time on the caller's thread. Event
//! sources and the loop that drains them belong to the embedder.

use evroute_events::Event;
use tracing::debug;

use crate::capabilities::DispatchContext;
use crate::handler::{Handler, MatchResult};
use crate::trace::TraceRecorder;

/// An ordered collection of handlers sharing a dispatch entry point.
#[derive(Debug, Default)]
pub struct HandlerChain {
    handlers: Vec<Handler>,
    recorder: Option<TraceRecorder>,
}

impl HandlerChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a handler. Handlers are offered events in insertion order.
    pub fn push(&mut self, handler: Handler) {
        self.handlers.push(handler);
    }

    /// Removes and returns the handler at `index`.
    ///
    /// Returns `None` if the index is out of bounds.
    pub fn remove(&mut self, index: usize) -> Option<Handler> {
        if index >= self.handlers.len() {
            return None;
        }
        Some(self.handlers.remove(index))
    }

    /// Number of handlers in the chain, active or not.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns true if the chain holds no handlers.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// The handlers in insertion order.
    pub fn handlers(&self) -> &[Handler] {
        &self.handlers
    }

    /// Mutable access to the handlers, e.g. for toggling `active`.
    pub fn handlers_mut(&mut self) -> &mut [Handler] {
        &mut self.handlers
    }

    /// Starts recording dispatch outcomes into the given recorder.
    ///
    /// Recording is wired at the routing layer so the matching core stays
    /// unaware of it.
    pub fn record_into(&mut self, recorder: TraceRecorder) {
        self.recorder = Some(recorder);
    }

    /// Stops recording and returns the recorder, if one was installed.
    pub fn take_recorder(&mut self) -> Option<TraceRecorder> {
        self.recorder.take()
    }

    /// Offers an event to the chain.
    ///
    /// Inactive handlers are skipped. The remaining handlers are tried in
    /// insertion order; the first successful result
    /// ([`MatchResult::succeeded`]) is returned and the rest of the chain
    /// is not consulted. When no handler succeeds the result is
    /// [`MatchResult::NoMatch`], except that if at least one callback ran
    /// and failed, the last failure is returned so the caller can observe
    /// the error.
    pub fn dispatch(&mut self, event: &Event, ctx: &DispatchContext) -> MatchResult {
        let mut last_failure = None;
        let mut outcome = None;

        for handler in self.handlers.iter_mut().filter(|h| h.is_active()) {
            match handler.try_handle(event, ctx) {
                MatchResult::NoMatch => continue,
                MatchResult::CallbackFailed(err) => last_failure = Some(err),
                done => {
                    outcome = Some(done);
                    break;
                }
            }
        }

        let result = outcome.unwrap_or(match last_failure {
            Some(err) => MatchResult::CallbackFailed(err),
            None => MatchResult::NoMatch,
        });

        debug!(handled = result.succeeded(), kind = ?event.kind(), "chain dispatch complete");

        if let Some(recorder) = &mut self.recorder {
            recorder.record(event, &result);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DispatchError;
    use evroute_events::{
        Area, Event, EventClass, EventKind, EventSelector, InputEvent, MouseButton, MouseEvent,
        Point, Receiver, Region,
    };
    use std::cell::RefCell;
    use std::rc::Rc;

    fn receiver() -> Receiver {
        Receiver::new(1, Area::new(0.0, 0.0, 100.0, 100.0))
    }

    fn button_press_at(x: f64, y: f64) -> Event {
        Event::new(
            InputEvent::Mouse(MouseEvent::down(MouseButton::Left)),
            Point::new(x, y),
            receiver(),
        )
    }

    fn tagging_callback(
        log: Rc<RefCell<Vec<&'static str>>>,
        tag: &'static str,
    ) -> impl FnMut(&Event, &Event) -> Result<(), DispatchError> {
        move |_master, _event| {
            log.borrow_mut().push(tag);
            Ok(())
        }
    }

    #[test]
    fn empty_chain_is_no_match() {
        let ctx = DispatchContext::default_caps();
        let mut chain = HandlerChain::new();

        assert!(chain.dispatch(&button_press_at(5.0, 5.0), &ctx).is_no_match());
    }

    #[test]
    fn first_matching_handler_wins() {
        let ctx = DispatchContext::default_caps();
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut chain = HandlerChain::new();

        chain.push(
            Handler::new(EventSelector::Class(EventClass::Mouse))
                .with_callback(tagging_callback(log.clone(), "first")),
        );
        chain.push(
            Handler::new(EventSelector::Class(EventClass::Mouse))
                .with_callback(tagging_callback(log.clone(), "second")),
        );

        let result = chain.dispatch(&button_press_at(5.0, 5.0), &ctx);

        assert!(result.succeeded());
        assert_eq!(*log.borrow(), vec!["first"]);
    }

    #[test]
    fn inactive_handlers_are_skipped() {
        let ctx = DispatchContext::default_caps();
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut chain = HandlerChain::new();

        chain.push(
            Handler::new(EventSelector::Class(EventClass::Mouse))
                .with_callback(tagging_callback(log.clone(), "first")),
        );
        chain.push(
            Handler::new(EventSelector::Class(EventClass::Mouse))
                .with_callback(tagging_callback(log.clone(), "second")),
        );
        chain.handlers_mut()[0].set_active(false);

        let result = chain.dispatch(&button_press_at(5.0, 5.0), &ctx);

        assert!(result.succeeded());
        assert_eq!(*log.borrow(), vec!["second"]);
    }

    #[test]
    fn non_matching_handlers_fall_through() {
        let ctx = DispatchContext::default_caps();
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut chain = HandlerChain::new();

        chain.push(
            Handler::new(EventSelector::Kind(EventKind::KeyDown))
                .with_callback(tagging_callback(log.clone(), "keys")),
        );
        // Region excludes the event position: same fall-through as a type
        // mismatch.
        chain.push(
            Handler::new(EventSelector::Class(EventClass::Mouse))
                .with_region(Region::rect(90.0, 90.0, 10.0, 10.0))
                .with_callback(tagging_callback(log.clone(), "corner")),
        );
        chain.push(
            Handler::new(EventSelector::Class(EventClass::Mouse))
                .with_callback(tagging_callback(log.clone(), "anywhere")),
        );

        let result = chain.dispatch(&button_press_at(5.0, 5.0), &ctx);

        assert!(result.succeeded());
        assert_eq!(*log.borrow(), vec!["anywhere"]);
    }

    #[test]
    fn succeeding_gate_stops_the_chain() {
        let ctx = DispatchContext::default_caps();
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut chain = HandlerChain::new();

        // Callback-less gate over the whole receiver.
        chain.push(Handler::new(EventSelector::Class(EventClass::Mouse)));
        chain.push(
            Handler::new(EventSelector::Class(EventClass::Mouse))
                .with_callback(tagging_callback(log.clone(), "shadowed")),
        );

        let result = chain.dispatch(&button_press_at(5.0, 5.0), &ctx);

        assert!(matches!(result, MatchResult::MatchedNoAction));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn callback_failure_falls_through_and_is_reported_last() {
        let ctx = DispatchContext::default_caps();
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut chain = HandlerChain::new();

        chain.push(
            Handler::new(EventSelector::Class(EventClass::Mouse)).with_callback(
                |_: &Event, _: &Event| Err(DispatchError::callback("first failed")),
            ),
        );
        chain.push(
            Handler::new(EventSelector::Class(EventClass::Mouse))
                .with_callback(tagging_callback(log.clone(), "fallback")),
        );

        // A later handler can still succeed after an earlier failure.
        let result = chain.dispatch(&button_press_at(5.0, 5.0), &ctx);
        assert!(result.succeeded());
        assert_eq!(*log.borrow(), vec!["fallback"]);

        // With no successful handler, the last failure is surfaced.
        let mut failing_chain = HandlerChain::new();
        failing_chain.push(
            Handler::new(EventSelector::Class(EventClass::Mouse)).with_callback(
                |_: &Event, _: &Event| Err(DispatchError::callback("first failed")),
            ),
        );
        failing_chain.push(
            Handler::new(EventSelector::Class(EventClass::Mouse)).with_callback(
                |_: &Event, _: &Event| Err(DispatchError::callback("second failed")),
            ),
        );

        let result = failing_chain.dispatch(&button_press_at(5.0, 5.0), &ctx);
        match result {
            MatchResult::CallbackFailed(err) => {
                assert_eq!(err.to_string(), "callback failed: second failed");
            }
            other => panic!("expected CallbackFailed, got {:?}", other),
        }
    }

    #[test]
    fn remove_returns_the_handler() {
        let mut chain = HandlerChain::new();
        chain.push(Handler::new(EventSelector::Any));
        chain.push(Handler::new(EventSelector::Class(EventClass::Keyboard)));

        let removed = chain.remove(0).unwrap();
        assert_eq!(*removed.selector(), EventSelector::Any);
        assert_eq!(chain.len(), 1);
        assert!(chain.remove(5).is_none());
    }

    #[test]
    fn recorder_sees_every_dispatch() {
        use crate::trace::{OutcomeSummary, TraceRecorder};

        let ctx = DispatchContext::default_caps();
        let mut chain = HandlerChain::new();
        chain.push(Handler::new(EventSelector::Kind(EventKind::KeyDown)));
        chain.record_into(TraceRecorder::new());

        chain.dispatch(&button_press_at(5.0, 5.0), &ctx);
        let key = Event::new(
            InputEvent::Key(evroute_events::KeyEvent::char('z')),
            Point::new(0.0, 0.0),
            receiver(),
        );
        chain.dispatch(&key, &ctx);

        let recorder = chain.take_recorder().unwrap();
        let entries = recorder.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].outcome, OutcomeSummary::NoMatch);
        assert_eq!(entries[1].outcome, OutcomeSummary::MatchedNoAction);
    }
}
