use std::fmt;

/// Whether the menu bar and Dock are currently shown or hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisibilityState {
    /// Menu bar always shown, Dock auto-hide off.
    #[default]
    BarsVisible,
    /// Menu bar hidden, Dock auto-hide on.
    BarsHidden,
}

impl VisibilityState {
    /// Map the persisted `_HIHideMenuBar` flag to a state.
    pub fn from_hidden(hidden: bool) -> Self {
        if hidden {
            VisibilityState::BarsHidden
        } else {
            VisibilityState::BarsVisible
        }
    }

    /// Value written to both preference keys for this state.
    pub fn hides_bars(self) -> bool {
        matches!(self, VisibilityState::BarsHidden)
    }

    /// The opposite state.
    pub fn toggled(self) -> Self {
        match self {
            VisibilityState::BarsVisible => VisibilityState::BarsHidden,
            VisibilityState::BarsHidden => VisibilityState::BarsVisible,
        }
    }
}

impl fmt::Display for VisibilityState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisibilityState::BarsVisible => f.write_str("bars visible"),
            VisibilityState::BarsHidden => f.write_str("bars hidden"),
        }
    }
}
