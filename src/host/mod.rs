//! Collaborator seams to the embedding application.
//!
//! The engine never reaches into the host directly; every outward effect goes
//! through one of these traits. Implementations normalize host differences so
//! the dropdown controller can preserve its state invariants regardless of
//! which host it is embedded in.

pub mod button;
pub mod command;
pub mod listeners;
pub mod navigation;
pub mod positioning;
pub mod source;

pub use button::{ButtonHost, ButtonSpec};
pub use command::CommandInjector;
pub use listeners::DismissListeners;
pub use navigation::NavigationSink;
pub use positioning::{PlacementHints, PositionHandle, Positioning};
pub use source::{EntityListing, EntitySource, ListOptions};

/// Errors crossing the host boundary.
#[derive(Debug)]
pub enum SwitchError {
    /// The trigger/anchor element was not present when attaching positioning;
    /// the open attempt aborts back to the closed state.
    MissingAnchor,

    /// The navigation sink failed while switching entities. Recovered locally:
    /// the dropdown stays open so the user can retry.
    Navigation(String),

    /// The entity listing collaborator failed to produce a list.
    Listing(String),
}

impl std::fmt::Display for SwitchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SwitchError::MissingAnchor => {
                write!(f, "anchor element not found; cannot position the dropdown")
            }
            SwitchError::Navigation(msg) => write!(f, "entity switch failed: {msg}"),
            SwitchError::Listing(msg) => write!(f, "entity listing failed: {msg}"),
        }
    }
}

impl std::error::Error for SwitchError {}
