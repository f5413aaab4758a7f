//! Trigger-button registration with the host's button API.
//!
//! The button API may not exist yet when the widget loads (the host injects it
//! late), so registration retries on a fixed backoff and re-attempts once more
//! when the host signals application-ready.

use std::time::Duration;

use tokio::sync::oneshot;
use tracing::{debug, warn};

use crate::core::config::SwitchConfig;

/// Descriptor for the trigger button the widget contributes to the host UI.
#[derive(Debug, Clone)]
pub struct ButtonSpec {
    /// Element id; doubles as the positioning anchor for the popup.
    pub id: String,
    pub icon: String,
    pub title: String,
}

impl ButtonSpec {
    /// The switcher's own trigger button.
    pub fn switcher() -> Self {
        Self {
            id: "quickswitch-trigger".to_string(),
            icon: "⚡".to_string(),
            title: "Quick Entity Switch".to_string(),
        }
    }
}

/// Host button-registration API. Registration fails while the API has not been
/// injected yet.
pub trait ButtonHost: Send {
    fn register_button(&mut self, spec: &ButtonSpec) -> Result<(), String>;
}

/// Registers the button, retrying on a fixed backoff until the host API
/// appears or attempts run out. Returns whether registration succeeded.
pub async fn register_with_backoff(
    host: &mut dyn ButtonHost,
    spec: &ButtonSpec,
    config: &SwitchConfig,
) -> bool {
    let backoff = Duration::from_millis(config.register_backoff_ms);
    for attempt in 1..=config.register_max_attempts {
        match host.register_button(spec) {
            Ok(()) => {
                debug!("registered trigger button {} on attempt {attempt}", spec.id);
                return true;
            }
            Err(reason) => {
                debug!("button registration attempt {attempt} failed: {reason}");
            }
        }
        if attempt < config.register_max_attempts {
            tokio::time::sleep(backoff).await;
        }
    }
    warn!(
        "trigger button {} not registered after {} attempts",
        spec.id, config.register_max_attempts
    );
    false
}

/// Waits for the host's application-ready signal and re-attempts registration
/// once. Covers hosts that inject the button API only after startup completes.
pub async fn register_on_ready(
    host: &mut dyn ButtonHost,
    spec: &ButtonSpec,
    ready: oneshot::Receiver<()>,
) -> bool {
    if ready.await.is_err() {
        debug!("application-ready signal dropped; skipping late registration");
        return false;
    }
    match host.register_button(spec) {
        Ok(()) => {
            debug!("registered trigger button {} on app-ready", spec.id);
            true
        }
        Err(reason) => {
            warn!("button registration on app-ready failed: {reason}");
            false
        }
    }
}
