//! Command injector seam and the legacy input-surface implementation.
//!
//! The injector runs an arbitrary textual command against the host's input
//! surface. The contract is fire-and-forget: the dropdown closes regardless of
//! the outcome, and the result only feeds diagnostics.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::error;

/// Executes a textual command against the host.
#[async_trait]
pub trait CommandInjector: Send {
    async fn run_command(&self, command: &str) -> Result<(), String>;
}

/// The host's chat input surface, as much of it as the legacy injector needs.
pub trait InputSurface: Send {
    /// Current input text, or `None` when the input element is missing.
    fn current_text(&self) -> Option<String>;

    fn set_text(&mut self, text: &str);

    /// Simulates pressing the send button.
    fn submit(&mut self);
}

/// Legacy injector: write the command into the input, submit, then restore the
/// user's previous text after a fixed delay.
///
/// The delay is a heuristic, not a synchronization guarantee; it assumes no
/// real typing interleaves within the window. A host that can signal command
/// completion should implement [`CommandInjector`] directly instead.
pub struct LegacyInputInjector<S: InputSurface> {
    surface: Mutex<S>,
    restore_delay: Duration,
}

impl<S: InputSurface> LegacyInputInjector<S> {
    pub fn new(surface: S, restore_delay: Duration) -> Self {
        Self {
            surface: Mutex::new(surface),
            restore_delay,
        }
    }

    pub fn into_inner(self) -> S {
        self.surface.into_inner()
    }
}

#[async_trait]
impl<S: InputSurface> CommandInjector for LegacyInputInjector<S> {
    async fn run_command(&self, command: &str) -> Result<(), String> {
        let previous = {
            let mut surface = self.surface.lock().await;
            let Some(previous) = surface.current_text() else {
                error!("chat input surface missing; cannot run command {command}");
                return Err("chat input surface not found".to_string());
            };
            surface.set_text(command);
            surface.submit();
            previous
        };

        // One-shot deferred restore, no cancellation.
        tokio::time::sleep(self.restore_delay).await;
        self.surface.lock().await.set_text(&previous);
        Ok(())
    }
}
