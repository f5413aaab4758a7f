//! View selection and search filtering.
//!
//! The three named views (Recents, Favorites, All) are pure functions over the
//! normalized entity list. All of them exclude the active entity through the
//! kind-aware key comparison; the search filter is always reapplied to the
//! fresh view output, never composed incrementally.

use crate::core::entity::{Entity, EntityKey};

/// The three named base filters over the unified entity list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityView {
    Recents,
    Favorites,
    All,
}

fn is_active(entity: &Entity, active: Option<&EntityKey>) -> bool {
    // Kind and id must both match; a group is never excluded because a
    // character shares its numeric id.
    active.map(|key| entity.key == *key).unwrap_or(false)
}

fn sort_key(entity: &Entity) -> String {
    entity.name.to_lowercase()
}

/// Entities with the most recent chat activity, newest first, capped at
/// `limit`. Entities that never had a chat sort as timestamp 0; ties keep the
/// normalized order (the sort is stable).
pub fn recent_entities(
    entities: &[Entity],
    active: Option<&EntityKey>,
    limit: usize,
) -> Vec<Entity> {
    let mut recents: Vec<Entity> = entities
        .iter()
        .filter(|entity| !is_active(entity, active))
        .cloned()
        .collect();
    recents.sort_by_key(|entity| std::cmp::Reverse(entity.last_activity.unwrap_or(0)));
    recents.truncate(limit);
    recents
}

/// Favorited entities sorted ascending by case-folded name.
pub fn favorite_entities(entities: &[Entity], active: Option<&EntityKey>) -> Vec<Entity> {
    let mut favorites: Vec<Entity> = entities
        .iter()
        .filter(|entity| entity.is_favorite && !is_active(entity, active))
        .cloned()
        .collect();
    favorites.sort_by_key(sort_key);
    favorites
}

/// Every non-active entity sorted ascending by case-folded name.
pub fn all_entities(entities: &[Entity], active: Option<&EntityKey>) -> Vec<Entity> {
    let mut all: Vec<Entity> = entities
        .iter()
        .filter(|entity| !is_active(entity, active))
        .cloned()
        .collect();
    all.sort_by_key(sort_key);
    all
}

/// Computes the base set for `view`.
pub fn base_entities(
    view: EntityView,
    entities: &[Entity],
    active: Option<&EntityKey>,
    recents_limit: usize,
) -> Vec<Entity> {
    match view {
        EntityView::Recents => recent_entities(entities, active, recents_limit),
        EntityView::Favorites => favorite_entities(entities, active),
        EntityView::All => all_entities(entities, active),
    }
}

/// Case-insensitive substring filter on the entity name.
///
/// An empty term is the identity; an entity with an empty name never matches a
/// non-empty term. The term is expected pre-normalized (lowercased, trimmed) by
/// the dropdown controller.
pub fn filter_by_term(entities: &[Entity], term: &str) -> Vec<Entity> {
    if term.is_empty() {
        return entities.to_vec();
    }
    entities
        .iter()
        .filter(|entity| entity.name.to_lowercase().contains(term))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entity::{AvatarRef, EntityKind};

    fn entity(kind: EntityKind, id: &str, name: &str, fav: bool, last: Option<i64>) -> Entity {
        Entity {
            key: EntityKey {
                kind,
                id: id.to_string(),
            },
            name: name.to_string(),
            is_favorite: fav,
            last_activity: last,
            avatar: AvatarRef::None,
            members: Vec::new(),
        }
    }

    fn sample() -> Vec<Entity> {
        vec![
            entity(EntityKind::Character, "0", "Bob", true, Some(100)),
            entity(EntityKind::Group, "2", "Adv", false, Some(200)),
        ]
    }

    #[test]
    fn test_recents_orders_by_activity_descending() {
        let entities = sample();
        let recents = recent_entities(&entities, None, 50);
        assert_eq!(recents[0].name, "Adv");
        assert_eq!(recents[1].name, "Bob");
    }

    #[test]
    fn test_recents_ties_keep_normalized_order() {
        let entities = vec![
            entity(EntityKind::Character, "0", "First", false, Some(10)),
            entity(EntityKind::Character, "1", "Second", false, Some(10)),
            entity(EntityKind::Character, "2", "Never", false, None),
        ];
        let recents = recent_entities(&entities, None, 50);
        assert_eq!(recents[0].name, "First");
        assert_eq!(recents[1].name, "Second");
        assert_eq!(recents[2].name, "Never");
    }

    #[test]
    fn test_recents_respects_limit() {
        let entities: Vec<Entity> = (0..60)
            .map(|i| {
                entity(
                    EntityKind::Character,
                    &i.to_string(),
                    &format!("c{i}"),
                    false,
                    Some(i),
                )
            })
            .collect();
        let recents = recent_entities(&entities, None, 50);
        assert_eq!(recents.len(), 50);
        assert_eq!(recents[0].name, "c59");
    }

    #[test]
    fn test_favorites_filters_and_sorts_by_name() {
        let entities = sample();
        let favorites = favorite_entities(&entities, None);
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].name, "Bob");
    }

    #[test]
    fn test_all_sorts_case_insensitively() {
        let entities = vec![
            entity(EntityKind::Character, "0", "bob", false, None),
            entity(EntityKind::Character, "1", "Adv", false, None),
        ];
        let all = all_entities(&entities, None);
        assert_eq!(all[0].name, "Adv");
        assert_eq!(all[1].name, "bob");
    }

    #[test]
    fn test_all_sorts_empty_names_first() {
        let entities = vec![
            entity(EntityKind::Character, "0", "Zed", false, None),
            entity(EntityKind::Character, "1", "", false, None),
        ];
        let all = all_entities(&entities, None);
        assert_eq!(all[0].name, "");
    }

    #[test]
    fn test_exclusion_is_kind_aware() {
        let entities = vec![
            entity(EntityKind::Character, "5", "Char Five", true, Some(1)),
            entity(EntityKind::Group, "5", "Group Five", true, Some(2)),
        ];
        let active = EntityKey::character("5");

        let all = all_entities(&entities, Some(&active));
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Group Five");

        let favorites = favorite_entities(&entities, Some(&active));
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].name, "Group Five");

        let recents = recent_entities(&entities, Some(&active), 50);
        assert_eq!(recents.len(), 1);
        assert_eq!(recents[0].name, "Group Five");
    }

    #[test]
    fn test_filter_empty_term_is_identity() {
        let entities = sample();
        let base = all_entities(&entities, None);
        assert_eq!(filter_by_term(&base, ""), base);
    }

    #[test]
    fn test_filter_matches_substring_case_insensitively() {
        let entities = sample();
        let base = all_entities(&entities, None);
        let hits = filter_by_term(&base, "bo");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Bob");
    }

    #[test]
    fn test_filter_empty_name_never_matches() {
        let entities = vec![entity(EntityKind::Character, "0", "", false, None)];
        assert!(filter_by_term(&entities, "a").is_empty());
    }

    #[test]
    fn test_filter_recomputes_from_base_not_composed() {
        let entities = vec![
            entity(EntityKind::Character, "0", "Alpha", false, None),
            entity(EntityKind::Character, "1", "Beta", false, None),
        ];
        let base = all_entities(&entities, None);
        // A new term always filters the base set, not the previous narrow.
        let narrowed = filter_by_term(&base, "alp");
        assert_eq!(narrowed.len(), 1);
        let switched = filter_by_term(&base, "bet");
        assert_eq!(switched.len(), 1);
        assert_eq!(switched[0].name, "Beta");
        assert_eq!(filter_by_term(&base, ""), base);
    }

    #[test]
    fn test_favorites_subset_of_all() {
        let entities = sample();
        let active = EntityKey::group("2");
        let favorites = favorite_entities(&entities, Some(&active));
        let all = all_entities(&entities, Some(&active));
        for favorite in &favorites {
            assert!(all.contains(favorite));
        }
        assert!(!all.iter().any(|e| e.key == active));
    }
}
