use crate::VisibilityState;

/// Mouse button that produced a status item click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickButton {
    /// Left button (or single-button trackpad click).
    Primary,
    /// Right button (or two-finger click).
    Secondary,
}

/// Whether the button went down or came back up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonPhase {
    /// Button pressed.
    Pressed,
    /// Button released.
    Released,
}

/// A click delivered to the status item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickEvent {
    /// Button involved.
    pub button: ClickButton,
    /// Press or release.
    pub phase: ButtonPhase,
    /// Control modifier held while clicking.
    pub control_held: bool,
}

/// What the controller does with a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// Flip the bars.
    Toggle,
    /// Leave state alone and open the context menu.
    ShowContextMenu,
    /// Nothing to do (button presses; only releases act).
    Ignore,
}

impl ClickEvent {
    /// Classify this click.
    ///
    /// Secondary actions (right release, or left release with Control) must
    /// be recognised before any toggle logic runs.
    pub fn action(&self) -> ClickAction {
        match (self.phase, self.button) {
            (ButtonPhase::Pressed, _) => ClickAction::Ignore,
            (ButtonPhase::Released, ClickButton::Secondary) => ClickAction::ShowContextMenu,
            (ButtonPhase::Released, ClickButton::Primary) if self.control_held => {
                ClickAction::ShowContextMenu
            }
            (ButtonPhase::Released, ClickButton::Primary) => ClickAction::Toggle,
        }
    }
}

/// Result of routing a click through the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Bars were toggled into this state.
    Toggled(VisibilityState),
    /// The presentation layer should show the context menu.
    ContextMenuRequested,
    /// The click had no effect.
    Ignored,
}
