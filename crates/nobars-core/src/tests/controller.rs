use crate::{
    BarVisibilityController, ButtonPhase, ClickButton, ClickEvent, ClickOutcome, DOCK_AUTOHIDE,
    MENU_BAR_HIDING, MemoryPreferenceStore, PreferenceDomain, SystemNotification, ToggleError,
    VisibilityState, tests::RecordingBus,
};

fn controller(
    store: MemoryPreferenceStore,
) -> BarVisibilityController<MemoryPreferenceStore, RecordingBus> {
    BarVisibilityController::new(store, RecordingBus::default())
}

fn release(button: ClickButton, control_held: bool) -> ClickEvent {
    ClickEvent {
        button,
        phase: ButtonPhase::Released,
        control_held,
    }
}

/// WHAT: Initial state follows the persisted menu bar key
/// WHY: In-memory state must match the store at startup
#[test]
fn given_menu_bar_key_true_when_creating_controller_then_bars_hidden() {
    // Given: A store with _HIHideMenuBar = true
    let store = MemoryPreferenceStore::new().with_value(MENU_BAR_HIDING, true);

    // When: Creating the controller
    let controller = controller(store);

    // Then: State is BarsHidden
    assert_eq!(controller.state(), VisibilityState::BarsHidden);
}

/// WHAT: Missing key reads as visible
/// WHY: Absence of _HIHideMenuBar is the OS default
#[test]
fn given_missing_key_when_creating_controller_then_bars_visible() {
    // Given: An empty store
    let store = MemoryPreferenceStore::new();

    // When: Creating the controller
    let controller = controller(store);

    // Then: State is BarsVisible
    assert_eq!(controller.state(), VisibilityState::BarsVisible);
}

/// WHAT: Unreadable global domain at startup defaults to visible
/// WHY: Startup must never fail on a preference read
#[test]
fn given_unreadable_global_domain_when_creating_controller_then_bars_visible() {
    // Given: A store whose global domain cannot be loaded, even with the key set
    let store = MemoryPreferenceStore::new()
        .with_value(MENU_BAR_HIDING, true)
        .with_unreadable_domain(PreferenceDomain::Global);

    // When: Creating the controller
    let controller = controller(store);

    // Then: State is BarsVisible
    assert_eq!(controller.state(), VisibilityState::BarsVisible);
}

/// WHAT: Reading current state is idempotent
/// WHY: Reads must not have side effects
#[test]
fn given_no_writes_when_reading_state_repeatedly_then_same_value() {
    // Given: A controller over a hidden store
    let controller = controller(MemoryPreferenceStore::new().with_value(MENU_BAR_HIDING, true));

    // When: Reading several times
    let reads: Vec<_> = (0..5).map(|_| controller.read_current_state()).collect();

    // Then: Every read agrees and nothing was written
    assert!(reads.iter().all(|s| *s == VisibilityState::BarsHidden));
    assert!(controller.store().writes().is_empty());
}

/// WHAT: Toggle from visible hides both bars and posts both notifications
/// WHY: End-to-end happy path
#[test]
#[allow(clippy::unwrap_used)]
fn given_bars_visible_when_toggling_then_both_keys_true_and_notifications_posted() {
    // Given: A visible controller
    let mut controller = controller(MemoryPreferenceStore::new());

    // When: Toggling
    let state = controller.toggle().unwrap();

    // Then: State is hidden, both keys are true, both notifications posted
    assert_eq!(state, VisibilityState::BarsHidden);
    assert_eq!(controller.state(), VisibilityState::BarsHidden);
    assert_eq!(controller.store().value(MENU_BAR_HIDING), Some(true));
    assert_eq!(controller.store().value(DOCK_AUTOHIDE), Some(true));

    let posted = controller.bus().posted();
    assert_eq!(posted.len(), 2);
    assert!(posted.contains(&SystemNotification::MenuBarHidingChanged));
    assert!(posted.contains(&SystemNotification::DockPreferencesChanged));
}

/// WHAT: Dock key is written before the menu bar key
/// WHY: Keeps a failed toggle from hiding the menu bar alone
#[test]
#[allow(clippy::unwrap_used)]
fn given_bars_visible_when_toggling_then_dock_written_first() {
    // Given: A visible controller
    let mut controller = controller(MemoryPreferenceStore::new());

    // When: Toggling
    controller.toggle().unwrap();

    // Then: Writes happened Dock first
    assert_eq!(
        controller.store().writes(),
        &[(DOCK_AUTOHIDE, true), (MENU_BAR_HIDING, true)]
    );
}

/// WHAT: Successful toggles alternate and two toggles return to the start
/// WHY: Toggle is an involution
#[test]
#[allow(clippy::unwrap_used)]
fn given_repeated_toggles_when_all_succeed_then_state_alternates() {
    // Given: A visible controller
    let mut controller = controller(MemoryPreferenceStore::new());

    // When: Toggling four times
    let states: Vec<_> = (0..4).map(|_| controller.toggle().unwrap()).collect();

    // Then: Hidden, visible, hidden, visible
    assert_eq!(
        states,
        vec![
            VisibilityState::BarsHidden,
            VisibilityState::BarsVisible,
            VisibilityState::BarsHidden,
            VisibilityState::BarsVisible,
        ]
    );
    assert_eq!(controller.read_current_state(), VisibilityState::BarsVisible);
    assert_eq!(controller.store().value(DOCK_AUTOHIDE), Some(false));
}

/// WHAT: Dock write failure while hidden leaves state and menu bar key alone
/// WHY: State must only change when both writes confirm
#[test]
fn given_bars_hidden_when_dock_write_fails_then_state_unchanged() {
    // Given: A hidden controller whose Dock key rejects writes
    let store = MemoryPreferenceStore::new()
        .with_value(MENU_BAR_HIDING, true)
        .with_value(DOCK_AUTOHIDE, true)
        .with_unwritable_key(DOCK_AUTOHIDE);
    let mut controller = controller(store);

    // When: Toggling
    let result = controller.toggle();

    // Then: Write error, still hidden, menu bar untouched, nothing posted
    assert!(matches!(result, Err(ToggleError::PreferenceWrite { key: "autohide", .. })));
    assert_eq!(controller.state(), VisibilityState::BarsHidden);
    assert_eq!(controller.store().value(MENU_BAR_HIDING), Some(true));
    assert!(controller.store().writes().is_empty());
    assert!(controller.bus().posted().is_empty());
}

/// WHAT: Menu bar write failure keeps the in-memory state
/// WHY: A partially applied toggle is not reported as success
#[test]
fn given_bars_visible_when_menu_bar_write_fails_then_state_unchanged() {
    // Given: A visible controller whose menu bar key rejects writes
    let store = MemoryPreferenceStore::new().with_unwritable_key(MENU_BAR_HIDING);
    let mut controller = controller(store);

    // When: Toggling
    let result = controller.toggle();

    // Then: Write error, still visible, the Dock write is not rolled back
    assert!(matches!(result, Err(ToggleError::PreferenceWrite { .. })));
    assert_eq!(controller.state(), VisibilityState::BarsVisible);
    assert_eq!(controller.store().value(DOCK_AUTOHIDE), Some(true));
    assert!(controller.bus().posted().is_empty());
}

/// WHAT: Unreadable Dock domain aborts before any write
/// WHY: Both domains are checked before mutation
#[test]
fn given_unreadable_dock_domain_when_toggling_then_read_error_and_no_writes() {
    // Given: A controller whose Dock domain cannot be loaded
    let store = MemoryPreferenceStore::new().with_unreadable_domain(PreferenceDomain::Dock);
    let mut controller = controller(store);

    // When: Toggling
    let result = controller.toggle();

    // Then: Read error, no writes, no state change
    assert!(matches!(
        result,
        Err(ToggleError::PreferenceRead {
            domain: PreferenceDomain::Dock,
            ..
        })
    ));
    assert!(controller.store().writes().is_empty());
    assert_eq!(controller.state(), VisibilityState::BarsVisible);
}

/// WHAT: A failing notification bus does not undo a committed toggle
/// WHY: Preferences are already written when notifications go out
#[test]
#[allow(clippy::unwrap_used)]
fn given_failing_bus_when_toggling_then_toggle_still_succeeds() {
    // Given: A controller with a bus that rejects posts
    let mut controller =
        BarVisibilityController::new(MemoryPreferenceStore::new(), RecordingBus::failing());

    // When: Toggling
    let state = controller.toggle().unwrap();

    // Then: State moved anyway
    assert_eq!(state, VisibilityState::BarsHidden);
    assert_eq!(controller.state(), VisibilityState::BarsHidden);
}

/// WHAT: Right click while visible only requests the context menu
/// WHY: Secondary clicks must never toggle
#[test]
#[allow(clippy::unwrap_used)]
fn given_bars_visible_when_right_click_then_context_menu_and_no_writes() {
    // Given: A visible controller
    let mut controller = controller(MemoryPreferenceStore::new());

    // When: Right button released
    let outcome = controller
        .handle_click(release(ClickButton::Secondary, false))
        .unwrap();

    // Then: One context menu request, no writes, no state change, nothing posted
    assert_eq!(outcome, ClickOutcome::ContextMenuRequested);
    assert!(controller.store().writes().is_empty());
    assert_eq!(controller.state(), VisibilityState::BarsVisible);
    assert!(controller.bus().posted().is_empty());
}

/// WHAT: Control-click never changes state in either state
/// WHY: Control+primary is the one-button secondary action
#[test]
#[allow(clippy::unwrap_used)]
fn given_any_state_when_control_click_then_state_unchanged() {
    for hidden in [false, true] {
        // Given: A controller in either state
        let mut controller =
            controller(MemoryPreferenceStore::new().with_value(MENU_BAR_HIDING, hidden));
        let before = controller.state();

        // When: Primary released with Control held
        let outcome = controller
            .handle_click(release(ClickButton::Primary, true))
            .unwrap();

        // Then: Context menu requested, state unchanged
        assert_eq!(outcome, ClickOutcome::ContextMenuRequested);
        assert_eq!(controller.state(), before);
        assert!(controller.store().writes().is_empty());
    }
}

/// WHAT: Primary release toggles
/// WHY: Left click is the main interaction
#[test]
#[allow(clippy::unwrap_used)]
fn given_bars_visible_when_left_click_then_toggled() {
    // Given: A visible controller
    let mut controller = controller(MemoryPreferenceStore::new());

    // When: Primary released without modifiers
    let outcome = controller
        .handle_click(release(ClickButton::Primary, false))
        .unwrap();

    // Then: Bars hidden
    assert_eq!(outcome, ClickOutcome::Toggled(VisibilityState::BarsHidden));
}

/// WHAT: Button presses are ignored
/// WHY: Only releases act, so press+release does not toggle twice
#[test]
#[allow(clippy::unwrap_used)]
fn given_button_press_when_handling_click_then_ignored() {
    // Given: A visible controller
    let mut controller = controller(MemoryPreferenceStore::new());

    // When: Primary pressed
    let outcome = controller
        .handle_click(ClickEvent {
            button: ClickButton::Primary,
            phase: ButtonPhase::Pressed,
            control_held: false,
        })
        .unwrap();

    // Then: Nothing happens
    assert_eq!(outcome, ClickOutcome::Ignored);
    assert!(controller.store().writes().is_empty());
}

/// WHAT: Failed toggle through a click surfaces the error
/// WHY: The shell logs the failure and keeps the old icon
#[test]
fn given_unwritable_store_when_left_click_then_error_returned() {
    // Given: A store that rejects Dock writes
    let mut controller =
        controller(MemoryPreferenceStore::new().with_unwritable_key(DOCK_AUTOHIDE));

    // When: Primary released
    let result = controller.handle_click(release(ClickButton::Primary, false));

    // Then: Error and unchanged state
    assert!(result.is_err());
    assert_eq!(controller.state(), VisibilityState::BarsVisible);
}
