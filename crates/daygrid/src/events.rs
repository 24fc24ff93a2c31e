//! Input events delivered by the host toolkit.
//!
//! The host translates its native events into [`WidgetEvent`]s and passes
//! them to [`CalendarWidget::handle_event`](crate::CalendarWidget::handle_event).
//! All positions are in widget-local coordinates.

use daygrid_render::{Font, Point, Size};

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (usually left).
    Left,
    /// Secondary button (usually right).
    Right,
    /// Middle button (scroll wheel click).
    Middle,
}

/// Common data for all widget events.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventBase {
    accepted: bool,
}

impl EventBase {
    /// Create a new, not yet accepted, event base.
    pub fn new() -> Self {
        Self { accepted: false }
    }

    /// Whether the widget handled the event.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Mark the event as handled.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Mark the event as not handled.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }
}

/// A mouse button was pressed (a click).
#[derive(Debug, Clone)]
pub struct MousePressEvent {
    pub base: EventBase,
    pub button: MouseButton,
    pub local_pos: Point,
}

impl MousePressEvent {
    /// Create a new mouse press event.
    pub fn new(button: MouseButton, local_pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            button,
            local_pos,
        }
    }
}

/// The pointer moved over the widget.
#[derive(Debug, Clone)]
pub struct MouseMoveEvent {
    pub base: EventBase,
    pub local_pos: Point,
}

impl MouseMoveEvent {
    /// Create a new mouse move event.
    pub fn new(local_pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            local_pos,
        }
    }
}

/// The pointer entered the widget.
#[derive(Debug, Clone)]
pub struct EnterEvent {
    pub base: EventBase,
    /// The position where the pointer entered.
    pub local_pos: Point,
}

impl EnterEvent {
    /// Create a new enter event.
    pub fn new(local_pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            local_pos,
        }
    }
}

/// The pointer left the widget.
#[derive(Debug, Clone, Default)]
pub struct LeaveEvent {
    pub base: EventBase,
}

impl LeaveEvent {
    /// Create a new leave event.
    pub fn new() -> Self {
        Self::default()
    }
}

/// The widget was resized.
#[derive(Debug, Clone)]
pub struct ResizeEvent {
    pub base: EventBase,
    pub old_size: Size,
    pub new_size: Size,
}

impl ResizeEvent {
    /// Create a new resize event.
    pub fn new(old_size: Size, new_size: Size) -> Self {
        Self {
            base: EventBase::new(),
            old_size,
            new_size,
        }
    }
}

/// The widget font changed.
#[derive(Debug, Clone)]
pub struct FontChangeEvent {
    pub base: EventBase,
    pub font: Font,
}

impl FontChangeEvent {
    /// Create a new font change event.
    pub fn new(font: Font) -> Self {
        Self {
            base: EventBase::new(),
            font,
        }
    }
}

/// An input event for the calendar.
#[derive(Debug, Clone)]
pub enum WidgetEvent {
    MousePress(MousePressEvent),
    MouseMove(MouseMoveEvent),
    Enter(EnterEvent),
    Leave(LeaveEvent),
    Resize(ResizeEvent),
    FontChange(FontChangeEvent),
}

impl WidgetEvent {
    fn base(&self) -> &EventBase {
        match self {
            Self::MousePress(e) => &e.base,
            Self::MouseMove(e) => &e.base,
            Self::Enter(e) => &e.base,
            Self::Leave(e) => &e.base,
            Self::Resize(e) => &e.base,
            Self::FontChange(e) => &e.base,
        }
    }

    fn base_mut(&mut self) -> &mut EventBase {
        match self {
            Self::MousePress(e) => &mut e.base,
            Self::MouseMove(e) => &mut e.base,
            Self::Enter(e) => &mut e.base,
            Self::Leave(e) => &mut e.base,
            Self::Resize(e) => &mut e.base,
            Self::FontChange(e) => &mut e.base,
        }
    }

    /// Whether the widget handled the event.
    pub fn is_accepted(&self) -> bool {
        self.base().is_accepted()
    }

    /// Mark the event as handled.
    pub fn accept(&mut self) {
        self.base_mut().accept();
    }

    /// Mark the event as not handled.
    pub fn ignore(&mut self) {
        self.base_mut().ignore();
    }
}

impl From<MousePressEvent> for WidgetEvent {
    fn from(event: MousePressEvent) -> Self {
        Self::MousePress(event)
    }
}

impl From<MouseMoveEvent> for WidgetEvent {
    fn from(event: MouseMoveEvent) -> Self {
        Self::MouseMove(event)
    }
}

impl From<EnterEvent> for WidgetEvent {
    fn from(event: EnterEvent) -> Self {
        Self::Enter(event)
    }
}

impl From<LeaveEvent> for WidgetEvent {
    fn from(event: LeaveEvent) -> Self {
        Self::Leave(event)
    }
}

impl From<ResizeEvent> for WidgetEvent {
    fn from(event: ResizeEvent) -> Self {
        Self::Resize(event)
    }
}

impl From<FontChangeEvent> for WidgetEvent {
    fn from(event: FontChangeEvent) -> Self {
        Self::FontChange(event)
    }
}
