//! Capability traits consumed by the dispatch core.
//!
//! The matcher depends on three pieces of toolkit behavior it does not own:
//! deciding whether an event is of a selected type, resolving an event's
//! position into a receiver's local space, and testing a position against a
//! region. Each is a trait with a stock implementation, so the core stays
//! testable with fakes and embedders can substitute toolkit-specific
//! behavior (nested coordinate systems, non-rectangular regions, foreign
//! event taxonomies) without touching the matcher itself.
//!
//! [`DispatchContext`] bundles the three capabilities and is threaded
//! through every dispatch call.

use evroute_events::{Area, Event, EventSelector, Point, Receiver, Region};

/// Decides whether an event is of the type a selector names.
pub trait EventClassifier {
    /// Returns true if `event` is of the type named by `selector`.
    fn is_a(&self, event: &Event, selector: &EventSelector) -> bool;
}

/// Stock classifier: interprets [`EventSelector`] directly.
///
/// `Any` matches everything, `Class` matches by event family, `Kind`
/// matches the exact event identity.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectorClassifier;

impl EventClassifier for SelectorClassifier {
    fn is_a(&self, event: &Event, selector: &EventSelector) -> bool {
        match selector {
            EventSelector::Any => true,
            EventSelector::Class(class) => event.class() == *class,
            EventSelector::Kind(kind) => event.kind() == *kind,
        }
    }
}

/// Resolves an event's position into a receiver's local coordinate space.
pub trait PositionResolver {
    /// Returns the event's position relative to the receiver's origin.
    fn position_of(&self, event: &Event, receiver: &Receiver) -> Point;
}

/// Stock resolver for flat window coordinates.
///
/// Subtracts the receiver's window-space origin from the event's
/// window-space position. Embedders with nested or transformed coordinate
/// systems substitute their own resolver.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowResolver;

impl PositionResolver for WindowResolver {
    fn position_of(&self, event: &Event, receiver: &Receiver) -> Point {
        event.position.relative_to(receiver.area.origin())
    }
}

/// Tests a receiver-local position against a handler's region.
pub trait RegionTest {
    /// Returns true if `point` lies within the intersection of `region` and
    /// the receiver's bounds.
    ///
    /// `area` is the receiver's window-space bounds; `point` and the region
    /// are in the receiver's local space.
    fn inside(&self, region: &Region, area: Area, point: Point) -> bool;
}

/// Stock region test for rectangular regions.
///
/// Clips the region rectangle to the receiver's local bounds and tests the
/// point against the clipped rectangle. A region that lies entirely outside
/// the receiver contains nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClipRegionTest;

impl RegionTest for ClipRegionTest {
    fn inside(&self, region: &Region, area: Area, point: Point) -> bool {
        match region {
            Region::Rect(rect) => match rect.intersect(&area.local()) {
                Some(clipped) => clipped.contains(point),
                None => false,
            },
        }
    }
}

// =============================================================================
// DispatchContext
// =============================================================================

/// The capability bundle threaded through dispatch.
///
/// Holds borrowed strategy objects so a single context can be shared across
/// many dispatch calls in an event loop iteration. [`DispatchContext::default_caps`]
/// supplies the stock implementations.
pub struct DispatchContext<'a> {
    pub classifier: &'a dyn EventClassifier,
    pub resolver: &'a dyn PositionResolver,
    pub region_test: &'a dyn RegionTest,
}

static SELECTOR_CLASSIFIER: SelectorClassifier = SelectorClassifier;
static WINDOW_RESOLVER: WindowResolver = WindowResolver;
static CLIP_REGION_TEST: ClipRegionTest = ClipRegionTest;

impl<'a> DispatchContext<'a> {
    /// Creates a context from explicit capabilities.
    pub fn new(
        classifier: &'a dyn EventClassifier,
        resolver: &'a dyn PositionResolver,
        region_test: &'a dyn RegionTest,
    ) -> Self {
        Self {
            classifier,
            resolver,
            region_test,
        }
    }
}

impl DispatchContext<'static> {
    /// Returns a context using the stock capabilities.
    pub fn default_caps() -> Self {
        Self {
            classifier: &SELECTOR_CLASSIFIER,
            resolver: &WINDOW_RESOLVER,
            region_test: &CLIP_REGION_TEST,
        }
    }
}

impl Default for DispatchContext<'static> {
    fn default() -> Self {
        Self::default_caps()
    }
}
