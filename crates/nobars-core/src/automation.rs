//! Finder automation that re-lays out desktop icons after the usable screen
//! area changes.

use crate::{CoreResult, ToggleError};

use std::{panic::Location, process::Command};

use error_location::ErrorLocation;
use tracing::{info, instrument};

/// Focuses the desktop by cycling Finder windows, then runs View > Clean Up.
///
/// Needs Accessibility permission for System Events.
pub const CLEAN_UP_DESKTOP_SCRIPT: &str = r#"tell application "System Events"
tell application "Finder" to activate
repeat while (value of attribute "AXfocused" of group 1 of scroll area of process "Finder" is {false})
tell process "Finder" to click menu item "Cycle Through Windows" of menu "Window" of menu bar item "Window" of front menu bar
end repeat
tell process "Finder" to click menu item "Clean Up" of menu "View" of menu bar item "View" of front menu bar
end tell"#;

/// Runs an AppleScript through `osascript`.
#[derive(Debug, Clone)]
pub struct DesktopCleanup {
    interpreter: String,
    script: &'static str,
}

impl Default for DesktopCleanup {
    fn default() -> Self {
        Self {
            interpreter: "osascript".to_string(),
            script: CLEAN_UP_DESKTOP_SCRIPT,
        }
    }
}

impl DesktopCleanup {
    /// Clean-up using the system `osascript`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different interpreter binary.
    pub fn with_interpreter(mut self, interpreter: impl Into<String>) -> Self {
        self.interpreter = interpreter.into();
        self
    }

    /// The command that [`run`](Self::run) spawns.
    pub fn command(&self) -> Command {
        let mut command = Command::new(&self.interpreter);
        command.arg("-e").arg(self.script);
        command
    }

    /// Run the script and wait for it to finish.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn run(&self) -> CoreResult<()> {
        let output = self
            .command()
            .output()
            .map_err(|e| ToggleError::Automation {
                reason: format!("Failed to launch {}: {}", self.interpreter, e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        if !output.status.success() {
            return Err(ToggleError::Automation {
                reason: format!(
                    "{} exited with {}: {}",
                    self.interpreter,
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        info!("Desktop cleaned up");
        Ok(())
    }
}
