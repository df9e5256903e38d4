use crate::config::default_clean_up_desktop;

use serde::{Deserialize, Serialize};

/// Application behavior configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviourConfig {
    /// Run Finder's "Clean Up" on the desktop after each toggle.
    ///
    /// Requires Accessibility permission and briefly activates Finder.
    #[serde(default = "default_clean_up_desktop")]
    pub clean_up_desktop: bool,
}

impl Default for BehaviourConfig {
    fn default() -> Self {
        Self {
            clean_up_desktop: default_clean_up_desktop(),
        }
    }
}
