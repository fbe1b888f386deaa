//! Input event payloads and event identification.
//!
//! These types abstract over platform event details and provide a clean
//! Rust-native model for input handling. The payload types ([`KeyEvent`],
//! [`MouseEvent`], [`ScrollDelta`]) carry what happened; the identification
//! types ([`EventKind`], [`EventClass`], [`EventSelector`]) name *what kind*
//! of thing happened, which is what handlers match against.

/// Modifier keys that can be held during an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Shift key
    pub shift: bool,
    /// Control key (Ctrl/⌃)
    pub control: bool,
    /// Option key (Alt/⌥)
    pub option: bool,
    /// Command key (Cmd/⌘)
    pub command: bool,
}

impl Modifiers {
    /// Returns true if no modifier keys are held.
    pub fn is_empty(&self) -> bool {
        !self.shift && !self.control && !self.option && !self.command
    }

    /// Returns true if only shift is held (for uppercase letters).
    pub fn is_shift_only(&self) -> bool {
        self.shift && !self.control && !self.option && !self.command
    }
}

/// Keys that can be pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character (already accounts for shift state)
    Char(char),
    /// Backspace / Delete backward
    Backspace,
    /// Forward delete
    Delete,
    /// Return / Enter
    Return,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Home key
    Home,
    /// End key
    End,
    /// Tab key
    Tab,
    /// Escape key
    Escape,
    /// Page Up
    PageUp,
    /// Page Down
    PageDown,
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyEvent {
    /// The key that was pressed
    pub key: Key,
    /// Modifier keys held during the event
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Creates a new KeyEvent with the given key and modifiers.
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Creates a KeyEvent for a single character with no modifiers.
    pub fn char(ch: char) -> Self {
        Self {
            key: Key::Char(ch),
            modifiers: Modifiers::default(),
        }
    }
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// Phase of a mouse event within a press/drag/release sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MousePhase {
    /// Button pressed
    Down,
    /// Button released
    Up,
    /// Mouse moved with the button held (drag)
    Moved,
}

/// A mouse event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseEvent {
    /// Which button the event belongs to
    pub button: MouseButton,
    /// Where in the press/drag/release sequence this event sits
    pub phase: MousePhase,
    /// Number of consecutive clicks (1 for single, 2 for double, etc.)
    pub click_count: u32,
    /// Modifier keys held during the event
    pub modifiers: Modifiers,
}

impl MouseEvent {
    /// Creates a button-press event with no modifiers.
    pub fn down(button: MouseButton) -> Self {
        Self {
            button,
            phase: MousePhase::Down,
            click_count: 1,
            modifiers: Modifiers::default(),
        }
    }

    /// Creates a button-release event with no modifiers.
    pub fn up(button: MouseButton) -> Self {
        Self {
            button,
            phase: MousePhase::Up,
            click_count: 1,
            modifiers: Modifiers::default(),
        }
    }

    /// Creates a drag event with no modifiers.
    pub fn moved(button: MouseButton) -> Self {
        Self {
            button,
            phase: MousePhase::Moved,
            click_count: 0,
            modifiers: Modifiers::default(),
        }
    }
}

/// Scroll delta from trackpad or mouse wheel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollDelta {
    /// Horizontal scroll amount (positive = right)
    pub dx: f64,
    /// Vertical scroll amount (positive = down)
    pub dy: f64,
}

impl ScrollDelta {
    /// Creates a new ScrollDelta.
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

// =============================================================================
// Unified payload
// =============================================================================

/// Unified payload for all input events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A keyboard event (key down)
    Key(KeyEvent),
    /// A mouse event (press, release, drag)
    Mouse(MouseEvent),
    /// A scroll event (trackpad or mouse wheel)
    Scroll(ScrollDelta),
}

impl InputEvent {
    /// Returns the precise identity of this event.
    pub fn kind(&self) -> EventKind {
        match self {
            InputEvent::Key(_) => EventKind::KeyDown,
            InputEvent::Mouse(m) => match m.phase {
                MousePhase::Down => EventKind::MouseDown(m.button),
                MousePhase::Up => EventKind::MouseUp(m.button),
                MousePhase::Moved => EventKind::MouseMoved(m.button),
            },
            InputEvent::Scroll(_) => EventKind::Scroll,
        }
    }

    /// Returns the coarse family of this event.
    pub fn class(&self) -> EventClass {
        self.kind().class()
    }

    /// Returns true if this is a key event.
    pub fn is_key(&self) -> bool {
        matches!(self, InputEvent::Key(_))
    }

    /// Returns true if this is a mouse event.
    pub fn is_mouse(&self) -> bool {
        matches!(self, InputEvent::Mouse(_))
    }
}

// =============================================================================
// Event identification
// =============================================================================

/// Coarse event families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventClass {
    Keyboard,
    Mouse,
    Scroll,
}

/// The precise identity of an input event.
///
/// Derivable from any [`InputEvent`] via [`InputEvent::kind`]. This is the
/// finest granularity handlers can select on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// A key was pressed
    KeyDown,
    /// A mouse button was pressed
    MouseDown(MouseButton),
    /// A mouse button was released
    MouseUp(MouseButton),
    /// The mouse moved with a button held
    MouseMoved(MouseButton),
    /// The scroll wheel or trackpad scrolled
    Scroll,
}

impl EventKind {
    /// Returns the family this kind belongs to.
    pub fn class(self) -> EventClass {
        match self {
            EventKind::KeyDown => EventClass::Keyboard,
            EventKind::MouseDown(_) | EventKind::MouseUp(_) | EventKind::MouseMoved(_) => {
                EventClass::Mouse
            }
            EventKind::Scroll => EventClass::Scroll,
        }
    }
}

/// Names the set of events a handler is interested in.
///
/// A selector can name an exact [`EventKind`], a whole [`EventClass`], or
/// every event. How a selector is interpreted is a capability of the
/// dispatch layer (the `EventClassifier` trait); this type only carries the
/// data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventSelector {
    /// Matches every event.
    Any,
    /// Matches every event in a family (e.g. any mouse event).
    Class(EventClass),
    /// Matches one precise event identity.
    Kind(EventKind),
}
