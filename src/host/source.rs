//! Entity source seam and the rich/fallback listing capability.
//!
//! Hosts that expose a unified entity listing get the rich path, which lets
//! them apply their own entity-level filters (hidden entities, tag filters).
//! Hosts that only expose the raw character and group collections get the
//! manual merge. The capability is selected once at construction, not probed
//! per call, and the degraded path is logged so operators know host-side
//! filtering was skipped.

use async_trait::async_trait;
use tracing::warn;

use crate::core::entity::{self, Entity, EntityId, EntityKey, RawCharacter, RawGroup};
use crate::host::SwitchError;

/// Options for the host's unified listing call.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListOptions {
    /// Whether the host should apply its own entity-level filters. The
    /// switcher always asks for the unfiltered list so every entity stays
    /// reachable.
    pub apply_host_filter: bool,
}

/// Everything the engine consumes from the host's data layer.
#[async_trait]
pub trait EntitySource: Send + Sync {
    /// Raw character collection, in host order.
    fn characters(&self) -> Vec<RawCharacter>;

    /// Raw group collection, in host order.
    fn groups(&self) -> Vec<RawGroup>;

    /// Id of the currently open character, if a character chat is open.
    fn active_character(&self) -> Option<EntityId>;

    /// Id of the currently selected group, if a group chat is open.
    fn active_group(&self) -> Option<EntityId>;

    /// Whether the host exposes the unified listing API.
    fn supports_unified_listing(&self) -> bool {
        false
    }

    /// The host's unified entity listing. Only called when
    /// [`EntitySource::supports_unified_listing`] returns true.
    async fn list_entities(&self, _options: ListOptions) -> Result<Vec<Entity>, String> {
        Err("unified listing not supported by this host".to_string())
    }
}

/// Listing capability, fixed at construction time.
pub enum EntityListing {
    /// The host's own unified listing (may apply host-side filtering rules).
    Rich(Box<dyn EntitySource>),
    /// Manual merge of the raw collections; a degraded mode that skips any
    /// host-side entity filters.
    Fallback(Box<dyn EntitySource>),
}

impl EntityListing {
    /// Picks the rich path when the host offers it, the fallback otherwise.
    pub fn select(source: Box<dyn EntitySource>) -> Self {
        if source.supports_unified_listing() {
            EntityListing::Rich(source)
        } else {
            EntityListing::Fallback(source)
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, EntityListing::Fallback(_))
    }

    fn source(&self) -> &dyn EntitySource {
        match self {
            EntityListing::Rich(source) | EntityListing::Fallback(source) => source.as_ref(),
        }
    }

    /// Produces the normalized entity list. The fallback logs each use so the
    /// reduced fidelity stays visible to operators.
    pub async fn entities(&self) -> Result<Vec<Entity>, SwitchError> {
        match self {
            EntityListing::Rich(source) => source
                .list_entities(ListOptions {
                    apply_host_filter: false,
                })
                .await
                .map_err(SwitchError::Listing),
            EntityListing::Fallback(source) => {
                warn!("unified listing unavailable; using raw collection merge (host entity filters skipped)");
                Ok(entity::normalize(&source.characters(), &source.groups()))
            }
        }
    }

    /// Snapshot of the currently active entity's key. An open character chat
    /// takes precedence over a selected group, matching host behavior.
    pub fn active_key(&self) -> Option<EntityKey> {
        let source = self.source();
        if let Some(id) = source.active_character() {
            return Some(EntityKey::character(id));
        }
        source.active_group().map(EntityKey::group)
    }
}
