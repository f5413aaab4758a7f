//! Popup positioning seam.
//!
//! The host computes screen placement relative to the trigger button; the
//! engine only asks it to attach on open and detach on close, holding the
//! returned handle in between.

use crate::host::SwitchError;

/// Placement preferences for the popup relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementHints {
    /// Vertical gap below the anchor, in pixels.
    pub offset_y: i32,
    /// Align the popup's right edge with the anchor's right edge.
    pub align_right: bool,
}

impl Default for PlacementHints {
    fn default() -> Self {
        Self {
            offset_y: 5,
            align_right: true,
        }
    }
}

/// Opaque token for an active attachment, returned by
/// [`Positioning::attach`] and consumed by [`Positioning::detach`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionHandle(pub u64);

/// Host positioning/anchoring service.
pub trait Positioning: Send {
    /// Attaches the popup to the element identified by `anchor`. Returns
    /// [`SwitchError::MissingAnchor`] when the element does not exist.
    fn attach(
        &mut self,
        anchor: &str,
        placement: PlacementHints,
    ) -> Result<PositionHandle, SwitchError>;

    fn detach(&mut self, handle: PositionHandle);
}
