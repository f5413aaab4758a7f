//! Normalized entity model.
//!
//! The host exposes two heterogeneous collections (characters and groups); this
//! module merges them into one uniform record shape. Characters and groups keep
//! separate id spaces, so identity is always the ([`EntityKind`], id) pair,
//! never the raw id alone.

use serde::{Deserialize, Deserializer};

/// Host-side entity identifier. Character ids are their position in the host's
/// character collection; group ids are host-assigned strings. Both normalize to
/// strings so a single key type covers them.
pub type EntityId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Character,
    Group,
}

/// Identity key for an entity. A character and a group may collide on the raw
/// id, so every "is this the active entity" comparison goes through this pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityKey {
    pub kind: EntityKind,
    pub id: EntityId,
}

impl EntityKey {
    pub fn character<T: Into<EntityId>>(id: T) -> Self {
        Self {
            kind: EntityKind::Character,
            id: id.into(),
        }
    }

    pub fn group<T: Into<EntityId>>(id: T) -> Self {
        Self {
            kind: EntityKind::Group,
            id: id.into(),
        }
    }
}

/// Opaque avatar reference supplied by the host. The engine never loads image
/// data; it only builds thumbnail URLs from the file ref.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarRef {
    Image(String),
    None,
}

/// One switchable entity in the unified list.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub key: EntityKey,
    pub name: String,
    pub is_favorite: bool,
    /// Epoch milliseconds of the last chat activity; absent when the entity has
    /// never been opened.
    pub last_activity: Option<i64>,
    pub avatar: AvatarRef,
    /// Group member avatar refs, enabled members first, then disabled members,
    /// deduplicated in order. Always empty for characters.
    pub members: Vec<EntityId>,
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        self.key.kind
    }
}

/// Raw character record as the host hands it over. Hosts store the favorite
/// flag inconsistently (`true` or the string `"true"`), so parsing is
/// permissive.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCharacter {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default, deserialize_with = "deserialize_favorite")]
    pub fav: bool,
    #[serde(default)]
    pub date_last_chat: Option<i64>,
}

/// Raw group record as the host hands it over.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawGroup {
    pub id: EntityId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default, deserialize_with = "deserialize_favorite")]
    pub fav: bool,
    #[serde(default)]
    pub date_last_chat: Option<i64>,
    #[serde(default)]
    pub members: Vec<EntityId>,
    #[serde(default)]
    pub disabled_members: Vec<EntityId>,
}

fn deserialize_favorite<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Favorite {
        Flag(bool),
        Text(String),
    }

    match Option::<Favorite>::deserialize(deserializer)? {
        Some(Favorite::Flag(flag)) => Ok(flag),
        Some(Favorite::Text(text)) => Ok(text == "true"),
        None => Ok(false),
    }
}

/// Merges the two raw collections into the unified entity list.
///
/// Characters come first (tagged with their source index as id), then groups,
/// preserving original order within each kind. The inputs are borrowed and
/// never mutated. This is the degraded-mode merge; when the host offers a
/// richer unified listing the [`crate::host::source::EntityListing`] seam
/// prefers that instead.
pub fn normalize(characters: &[RawCharacter], groups: &[RawGroup]) -> Vec<Entity> {
    let mut entities = Vec::with_capacity(characters.len() + groups.len());

    for (index, character) in characters.iter().enumerate() {
        entities.push(Entity {
            key: EntityKey::character(index.to_string()),
            name: character.name.clone(),
            is_favorite: character.fav,
            last_activity: character.date_last_chat,
            avatar: match &character.avatar {
                Some(file) if !file.is_empty() => AvatarRef::Image(file.clone()),
                _ => AvatarRef::None,
            },
            members: Vec::new(),
        });
    }

    for group in groups {
        let mut members: Vec<EntityId> = Vec::new();
        for member in group.members.iter().chain(group.disabled_members.iter()) {
            if !members.contains(member) {
                members.push(member.clone());
            }
        }
        entities.push(Entity {
            key: EntityKey::group(group.id.clone()),
            name: group.name.clone(),
            is_favorite: group.fav,
            last_activity: group.date_last_chat,
            avatar: match &group.avatar {
                Some(file) if !file.is_empty() => AvatarRef::Image(file.clone()),
                _ => AvatarRef::None,
            },
            members,
        });
    }

    entities
}

#[cfg(test)]
mod tests {
    use super::*;

    fn character(name: &str) -> RawCharacter {
        RawCharacter {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_normalize_tags_kinds_and_preserves_order() {
        let characters = vec![character("Bob"), character("Alice")];
        let groups = vec![RawGroup {
            id: "g1".to_string(),
            name: "Adventurers".to_string(),
            ..Default::default()
        }];

        let entities = normalize(&characters, &groups);

        assert_eq!(entities.len(), 3);
        assert_eq!(entities[0].key, EntityKey::character("0"));
        assert_eq!(entities[0].name, "Bob");
        assert_eq!(entities[1].key, EntityKey::character("1"));
        assert_eq!(entities[2].key, EntityKey::group("g1"));
        assert_eq!(entities[2].name, "Adventurers");
    }

    #[test]
    fn test_keys_distinguish_kinds_on_colliding_ids() {
        let char_key = EntityKey::character("5");
        let group_key = EntityKey::group("5");
        assert_ne!(char_key, group_key);
    }

    #[test]
    fn test_group_members_merge_and_dedup() {
        let groups = vec![RawGroup {
            id: "g".to_string(),
            members: vec!["a.png".to_string(), "b.png".to_string()],
            disabled_members: vec!["b.png".to_string(), "c.png".to_string()],
            ..Default::default()
        }];

        let entities = normalize(&[], &groups);
        assert_eq!(entities[0].members, vec!["a.png", "b.png", "c.png"]);
    }

    #[test]
    fn test_favorite_accepts_bool_and_string() {
        let flagged: RawCharacter =
            serde_json::from_value(serde_json::json!({ "name": "A", "fav": true })).unwrap();
        let text: RawCharacter =
            serde_json::from_value(serde_json::json!({ "name": "B", "fav": "true" })).unwrap();
        let off: RawCharacter =
            serde_json::from_value(serde_json::json!({ "name": "C", "fav": "false" })).unwrap();
        let absent: RawCharacter =
            serde_json::from_value(serde_json::json!({ "name": "D" })).unwrap();

        assert!(flagged.fav);
        assert!(text.fav);
        assert!(!off.fav);
        assert!(!absent.fav);
    }

    #[test]
    fn test_empty_avatar_normalizes_to_none() {
        let characters = vec![RawCharacter {
            name: "A".to_string(),
            avatar: Some(String::new()),
            ..Default::default()
        }];

        let entities = normalize(&characters, &[]);
        assert_eq!(entities[0].avatar, AvatarRef::None);
    }
}
