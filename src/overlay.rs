use tracing::trace;

/// Visibility of a modal overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Closed,
    Open,
}

/// What happened to an overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayEvent {
    /// The action that shows the overlay ("watch trailer", "add movie", ...).
    Open,
    /// The overlay's own close control.
    CloseControl,
    /// A click landing outside the overlay content.
    OutsideClick,
}

impl OverlayState {
    pub fn next(self, event: OverlayEvent) -> Self {
        match (self, event) {
            (Self::Closed, OverlayEvent::Open) => Self::Open,
            (Self::Open, OverlayEvent::CloseControl | OverlayEvent::OutsideClick) => Self::Closed,
            (state, _) => state,
        }
    }
}

/// A named overlay and its current state.
#[derive(Debug, Clone)]
pub struct Overlay {
    name: &'static str,
    state: OverlayState,
}

impl Overlay {
    pub fn new(name: &'static str) -> Self {
        Self { name, state: OverlayState::Closed }
    }

    /// Apply `event`, returning whether the state changed.
    pub fn handle(&mut self, event: OverlayEvent) -> bool {
        let next = self.state.next(event);
        let changed = next != self.state;
        if changed {
            trace!(overlay = self.name, ?event, from = ?self.state, to = ?next, "overlay transition");
        }
        self.state = next;
        changed
    }

    pub fn open(&mut self) -> bool {
        self.handle(OverlayEvent::Open)
    }

    pub fn close(&mut self) -> bool {
        self.handle(OverlayEvent::CloseControl)
    }

    pub fn is_open(&self) -> bool {
        self.state == OverlayState::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_table() {
        use OverlayEvent::{CloseControl, OutsideClick};
        use OverlayState::Closed;

        assert_eq!(Closed.next(OverlayEvent::Open), OverlayState::Open);
        assert_eq!(Closed.next(CloseControl), Closed);
        assert_eq!(Closed.next(OutsideClick), Closed);
        assert_eq!(OverlayState::Open.next(OverlayEvent::Open), OverlayState::Open);
        assert_eq!(OverlayState::Open.next(CloseControl), Closed);
        assert_eq!(OverlayState::Open.next(OutsideClick), Closed);
    }

    #[test]
    fn test_overlay_starts_closed() {
        let overlay = Overlay::new("trailer");
        assert!(!overlay.is_open());
        assert_eq!(overlay.state, OverlayState::Closed);
    }

    #[test]
    fn test_overlay_reports_changes() {
        let mut overlay = Overlay::new("trailer");
        assert!(overlay.open());
        assert!(!overlay.open());
        assert!(overlay.is_open());
        assert!(overlay.handle(OverlayEvent::OutsideClick));
        assert!(!overlay.close());
    }
}
