//! Date tooltip capability.

use std::sync::Arc;

use daygrid_render::Point;
use parking_lot::Mutex;

/// A tooltip the host shows on behalf of the calendar.
///
/// The calendar only ever asks for one tooltip at a time: a new `show`
/// replaces whatever was shown before.
pub trait ToolTip: Send + Sync {
    /// Show `text` with its top-left corner at `anchor` (widget coordinates).
    fn show(&mut self, text: &str, anchor: Point);

    /// Hide the tooltip. Hiding an already hidden tooltip is harmless.
    fn hide(&mut self);
}

/// A request recorded by [`RecordingToolTip`].
#[derive(Debug, Clone, PartialEq)]
pub enum ToolTipRequest {
    Show { text: String, anchor: Point },
    Hide,
}

/// A [`ToolTip`] that records requests into a shared log.
///
/// Clones share the same log, so a host can hand one clone to the widget and
/// poll another.
#[derive(Debug, Clone, Default)]
pub struct RecordingToolTip {
    requests: Arc<Mutex<Vec<ToolTipRequest>>>,
}

impl RecordingToolTip {
    /// Create a tooltip with an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// All requests so far.
    pub fn requests(&self) -> Vec<ToolTipRequest> {
        self.requests.lock().clone()
    }

    /// The most recent request.
    pub fn last(&self) -> Option<ToolTipRequest> {
        self.requests.lock().last().cloned()
    }

    /// Text currently shown, if the last request was a `show`.
    pub fn visible_text(&self) -> Option<String> {
        match self.last()? {
            ToolTipRequest::Show { text, .. } => Some(text),
            ToolTipRequest::Hide => None,
        }
    }

    /// Discard the log.
    pub fn clear(&self) {
        self.requests.lock().clear();
    }
}

impl ToolTip for RecordingToolTip {
    fn show(&mut self, text: &str, anchor: Point) {
        self.requests.lock().push(ToolTipRequest::Show {
            text: text.to_string(),
            anchor,
        });
    }

    fn hide(&mut self) {
        self.requests.lock().push(ToolTipRequest::Hide);
    }
}
