//! Render-model types for the dropdown list.
//!
//! The engine computes these; the host view layer turns them into DOM or
//! whatever it draws with. Nothing here touches pixels.

use crate::core::entity::{AvatarRef, Entity, EntityKey, EntityKind};
use crate::core::seek::SeekBucket;
use crate::core::views::EntityView;

/// Placeholder thumbnail for entities with no resolvable avatar.
pub const DEFAULT_AVATAR_URL: &str = "/img/five.png";

/// One row of the rendered dropdown list.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityListItem {
    pub key: EntityKey,
    pub name: String,
    pub favorite: bool,
    /// Seek bucket the row belongs to; seek clicks scroll to the first row of
    /// the clicked bucket.
    pub bucket: SeekBucket,
    pub thumbnail_url: String,
}

impl EntityListItem {
    pub fn from_entity(entity: &Entity) -> Self {
        Self {
            key: entity.key.clone(),
            name: entity.name.clone(),
            favorite: entity.is_favorite,
            bucket: SeekBucket::of(entity),
            thumbnail_url: thumbnail_url(entity),
        }
    }
}

/// What the dropdown list area currently shows. `Loading` bridges the await on
/// an asynchronous host listing; it is always replaced atomically by `Items`
/// or `Empty`, never left behind.
#[derive(Debug, Clone, PartialEq)]
pub enum ListContent {
    Loading,
    Empty(&'static str),
    Items(Vec<EntityListItem>),
}

impl ListContent {
    pub fn items(&self) -> &[EntityListItem] {
        match self {
            ListContent::Items(items) => items,
            _ => &[],
        }
    }
}

/// Context-specific empty-state message. A live search term always yields the
/// generic no-matches text; otherwise the message names the empty view.
pub fn empty_message(view: EntityView, search_active: bool) -> &'static str {
    if search_active {
        return "No matches found.";
    }
    match view {
        EntityView::Recents => "No recent chats found.",
        EntityView::Favorites => "No favorite characters. Add some!",
        EntityView::All => "No characters found.",
    }
}

/// Thumbnail URL for an entity's avatar.
///
/// Entities with their own avatar ref use the host thumbnail endpoint. Groups
/// without one borrow the first member avatar; anything else falls back to the
/// placeholder image.
pub fn thumbnail_url(entity: &Entity) -> String {
    if let AvatarRef::Image(file) = &entity.avatar {
        return avatar_endpoint(file);
    }
    if entity.kind() == EntityKind::Group {
        if let Some(member) = entity.members.first() {
            return avatar_endpoint(member);
        }
    }
    DEFAULT_AVATAR_URL.to_string()
}

fn avatar_endpoint(file: &str) -> String {
    format!("/thumbnail?type=avatar&file={}", urlencoding::encode(file))
}
