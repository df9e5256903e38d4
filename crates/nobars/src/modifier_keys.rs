//! Keyboard modifier state at the time of a status item click.

/// `kCGEventSourceStateCombinedSessionState`.
const COMBINED_SESSION_STATE: i32 = 0;

/// `kCGEventFlagMaskControl`.
const CONTROL_MASK: u64 = 0x0004_0000;

#[link(name = "CoreGraphics", kind = "framework")]
unsafe extern "C" {
    fn CGEventSourceFlagsState(state_id: i32) -> u64;
}

/// Whether Control is currently held.
///
/// tray-icon reports the button but not the modifiers, so the flags are
/// sampled when the click event is handled.
pub fn control_key_held() -> bool {
    // SAFETY: pure query of the session's modifier state.
    let flags = unsafe { CGEventSourceFlagsState(COMBINED_SESSION_STATE) };
    flags & CONTROL_MASK != 0
}
