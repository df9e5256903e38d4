use crate::app::{click_event, menu_opens_natively};

use nobars_core::{ButtonPhase, ClickAction, ClickButton};

use tray_icon::{MouseButton, MouseButtonState};

/// WHAT: Left and right buttons map to primary and secondary
/// WHY: The controller only knows primary/secondary
#[test]
#[allow(clippy::unwrap_used)]
fn given_left_and_right_release_when_mapping_then_primary_and_secondary() {
    // Given/When: Mapping both releases
    let left = click_event(MouseButton::Left, MouseButtonState::Up, false).unwrap();
    let right = click_event(MouseButton::Right, MouseButtonState::Up, false).unwrap();

    // Then: Buttons and phase carried over
    assert_eq!(left.button, ClickButton::Primary);
    assert_eq!(left.phase, ButtonPhase::Released);
    assert_eq!(right.button, ClickButton::Secondary);
    assert_eq!(right.action(), ClickAction::ShowContextMenu);
}

/// WHAT: Control-held left release maps to a context menu request
/// WHY: Control-click must not toggle
#[test]
#[allow(clippy::unwrap_used)]
fn given_control_left_release_when_mapping_then_show_context_menu() {
    // Given/When: Left release with Control
    let click = click_event(MouseButton::Left, MouseButtonState::Up, true).unwrap();

    // Then: Context menu
    assert_eq!(click.action(), ClickAction::ShowContextMenu);
}

/// WHAT: Presses map to ignored clicks
/// WHY: tray-icon reports both edges; only releases act
#[test]
#[allow(clippy::unwrap_used)]
fn given_left_press_when_mapping_then_ignored() {
    // Given/When: Left press
    let click = click_event(MouseButton::Left, MouseButtonState::Down, false).unwrap();

    // Then: Ignored
    assert_eq!(click.action(), ClickAction::Ignore);
}

/// WHAT: Middle clicks are dropped
/// WHY: Only primary and secondary actions exist
#[test]
fn given_middle_click_when_mapping_then_none() {
    // Given/When/Then: No click event
    assert!(click_event(MouseButton::Middle, MouseButtonState::Up, false).is_none());
}

/// WHAT: Control-click needs the menu presented by hand, right click does not
/// WHY: Control-click arrives as a left click, which the status item never answers with its menu
#[test]
#[allow(clippy::unwrap_used)]
fn given_control_left_release_when_checking_native_menu_then_presented_by_hand() {
    // Given: A control-click and a plain right click
    let control_click = click_event(MouseButton::Left, MouseButtonState::Up, true).unwrap();
    let right_click = click_event(MouseButton::Right, MouseButtonState::Up, false).unwrap();

    // When/Then: Only the right click opens the menu on its own
    assert!(!menu_opens_natively(&control_click));
    assert!(menu_opens_natively(&right_click));
}
