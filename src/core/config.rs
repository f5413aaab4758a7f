//! Widget configuration.
//!
//! Hosts deserialize this from whatever settings blob they persist; every field
//! has a default so an empty object configures a working widget.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SwitchConfig {
    /// Cap on the Recents view.
    pub recents_limit: usize,
    /// Command text fired by the auxiliary (random story) button.
    pub auxiliary_command: String,
    /// Delay before the legacy command injector restores the input text.
    pub restore_delay_ms: u64,
    /// Fixed backoff between trigger-button registration attempts while the
    /// host button API is not yet available.
    pub register_backoff_ms: u64,
    /// Registration attempts before giving up (the app-ready signal still gets
    /// one more try).
    pub register_max_attempts: u32,
}

impl Default for SwitchConfig {
    fn default() -> Self {
        Self {
            recents_limit: 50,
            auxiliary_command: "/reminisce".to_string(),
            restore_delay_ms: 100,
            register_backoff_ms: 1000,
            register_max_attempts: 10,
        }
    }
}
