use crate::{
    ClickAction, ClickEvent, ClickOutcome, CoreResult, NotificationBus, PreferenceDomain,
    PreferenceStore, SystemNotification, ToggleError, VisibilityState,
    preferences::{DOCK_AUTOHIDE, MENU_BAR_HIDING},
};

use tracing::{debug, error, info, instrument, warn};

/// Two-state toggle that drives the menu-bar and Dock preferences in lockstep.
///
/// # Write ordering
///
/// A toggle first checks that both domains load, then writes the Dock key,
/// then the menu-bar key. A failed menu-bar write leaves the Dock already
/// changed; that window is not rolled back. In-memory state only moves once
/// both writes confirm, and notifications are only posted after that.
///
/// # Thread Safety
///
/// Meant to be owned by the UI thread. Nothing here locks; the store is
/// assumed to have a single writer.
pub struct BarVisibilityController<S, N> {
    store: S,
    bus: N,
    state: VisibilityState,
}

impl<S, N> BarVisibilityController<S, N>
where
    S: PreferenceStore,
    N: NotificationBus,
{
    /// Build the controller, seeding its state from the store.
    #[instrument(skip_all)]
    pub fn new(store: S, bus: N) -> Self {
        let state = current_state(&store);
        info!(state = %state, "Bar visibility controller initialized");
        Self { store, bus, state }
    }

    /// In-memory state.
    pub fn state(&self) -> VisibilityState {
        self.state
    }

    /// Read the persisted state. Unreadable or missing preferences read as
    /// [`VisibilityState::BarsVisible`].
    pub fn read_current_state(&self) -> VisibilityState {
        current_state(&self.store)
    }

    /// Flip the bars.
    ///
    /// # Errors
    ///
    /// [`ToggleError::PreferenceRead`] if either domain cannot be loaded,
    /// [`ToggleError::PreferenceWrite`] if either write is unconfirmed. State
    /// is unchanged and nothing is posted in both cases.
    #[instrument(skip(self), fields(from = %self.state))]
    pub fn toggle(&mut self) -> CoreResult<VisibilityState> {
        let target = self.state.toggled();

        if let Err(e) = self.apply(target) {
            warn!(state = %self.state, error = %e, "Toggle aborted, state unchanged");
            return Err(e);
        }

        self.state = target;
        info!(state = %target, "Bars toggled");

        // State is committed; a lost notification only delays the shell.
        for notification in SystemNotification::ALL {
            if let Err(e) = self.bus.post(notification) {
                error!(name = notification.name(), error = %e, "Failed to post notification");
            }
        }

        Ok(target)
    }

    /// Route a status item click.
    ///
    /// Secondary actions never reach the toggle path.
    #[instrument(skip(self))]
    pub fn handle_click(&mut self, click: ClickEvent) -> CoreResult<ClickOutcome> {
        match click.action() {
            ClickAction::ShowContextMenu => {
                debug!("Secondary click, requesting context menu");
                Ok(ClickOutcome::ContextMenuRequested)
            }
            ClickAction::Toggle => self.toggle().map(ClickOutcome::Toggled),
            ClickAction::Ignore => Ok(ClickOutcome::Ignored),
        }
    }

    /// The preference store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The notification bus.
    pub fn bus(&self) -> &N {
        &self.bus
    }

    fn apply(&mut self, target: VisibilityState) -> CoreResult<()> {
        self.store.load_domain(PreferenceDomain::Dock)?;
        self.store.load_domain(PreferenceDomain::Global)?;

        let hidden = target.hides_bars();
        self.store.write_bool(DOCK_AUTOHIDE, hidden)?;
        self.store.write_bool(MENU_BAR_HIDING, hidden)?;

        Ok(())
    }
}

fn current_state<S: PreferenceStore>(store: &S) -> VisibilityState {
    match store.read_bool(MENU_BAR_HIDING) {
        Ok(Some(hidden)) => VisibilityState::from_hidden(hidden),
        Ok(None) => {
            debug!(key = MENU_BAR_HIDING.name, "Menu bar key absent, assuming visible");
            VisibilityState::BarsVisible
        }
        Err(e @ ToggleError::PreferenceRead { .. }) => {
            warn!(error = %e, "Global preferences unreadable, assuming visible");
            VisibilityState::BarsVisible
        }
        Err(e) => {
            warn!(error = %e, "Failed to read menu bar key, assuming visible");
            VisibilityState::BarsVisible
        }
    }
}
