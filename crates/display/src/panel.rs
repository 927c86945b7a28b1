//! Slide-out cart panel visibility.

/// Whether the cart panel is showing.
///
/// Purely presentational: opening or closing it never touches the ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CartPanel {
    open: bool,
}

impl CartPanel {
    /// Closed panel (initial state).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Flip visibility; returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }
}
