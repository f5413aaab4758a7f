//! Quickswitch is the engine behind an in-page entity quick-switcher: a popup
//! list that jumps between chat characters and chat groups without leaving the
//! current view.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns the entity model, the three named views (Recents, Favorites,
//!   All), the search filter, the seek-bucket index, and the dropdown
//!   controller that holds the only mutable state in the system.
//! - [`host`] defines the seams to the embedding application: entity source,
//!   navigation sink, command injector, popup positioning, dismissal listeners,
//!   and trigger-button registration. The engine never touches the host
//!   directly; everything flows through these traits.
//! - [`ui`] holds render-model types only. The engine produces an ordered,
//!   filtered list plus an open/closed state; drawing pixels is the host view
//!   layer's job.
//!
//! A host wires its implementations into a
//! [`core::dropdown::DropdownController`], forwards user interactions to the
//! controller's transition methods, and renders whatever
//! [`core::dropdown::DropdownController::content`] currently holds.

pub mod core;
pub mod host;
pub mod ui;
