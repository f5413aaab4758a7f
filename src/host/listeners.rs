//! Global dismissal listeners.
//!
//! While the dropdown is open, the host listens for pointer-downs outside the
//! popup and for the Escape key, and calls back into
//! [`crate::core::dropdown::DropdownController::close`] when either fires. The
//! listeners are registered under a dedicated namespace and must be fully
//! removed on detach: whenever the dropdown is closed, the listener count
//! attributable to the widget is zero.

/// Event namespace the host registers the dismissal handlers under, so a
/// single detach call can remove them all.
pub const DISMISS_NAMESPACE: &str = "quickswitch.dismiss";

pub trait DismissListeners: Send {
    /// Registers the outside-pointer-down and Escape handlers under
    /// `namespace`. Attaching an already-attached namespace must not
    /// double-register.
    fn attach(&mut self, namespace: &str);

    /// Removes every handler registered under `namespace`. Safe to call when
    /// nothing is attached.
    fn detach(&mut self, namespace: &str);
}
