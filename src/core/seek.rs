//! Seek-bucket index for jump navigation.
//!
//! Every entity maps to exactly one of 27 buckets: `'a'..'z'` from the first
//! character of its lowercased, trimmed name, or the `'#'` catch-all for
//! anything else (digits, punctuation, accented or non-Latin letters, empty
//! names). The seek bar always renders all 27 buckets in fixed order; buckets
//! with no entities are inert rather than hidden.

use crate::core::entity::Entity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeekBucket(char);

impl SeekBucket {
    /// Bucket for names that do not start with an ASCII letter.
    pub const CATCH_ALL: SeekBucket = SeekBucket('#');

    /// Bucket assignment for an entity name.
    pub fn of(entity: &Entity) -> Self {
        let name = entity.name.trim().to_lowercase();
        match name.chars().next() {
            Some(first @ 'a'..='z') => SeekBucket(first),
            _ => Self::CATCH_ALL,
        }
    }

    pub fn as_char(&self) -> char {
        self.0
    }

    /// All 27 buckets in the fixed render order `['#', 'a', ..., 'z']`.
    pub fn order() -> impl Iterator<Item = SeekBucket> {
        std::iter::once('#').chain('a'..='z').map(SeekBucket)
    }
}

impl std::fmt::Display for SeekBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Index of the first entity in `entities` that belongs to `bucket`, the
/// position a seek click scrolls to. `None` when the bucket is unoccupied.
pub fn seek_target(entities: &[Entity], bucket: SeekBucket) -> Option<usize> {
    entities
        .iter()
        .position(|entity| SeekBucket::of(entity) == bucket)
}
