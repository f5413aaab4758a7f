//! Navigation sink: the host-side switch to another entity.

use async_trait::async_trait;

use crate::core::entity::EntityId;

/// Application-level entity switching. Character and group activation are
/// separate calls because hosts track them in separate slots; the controller
/// clears the slot of the other kind once activation has succeeded.
#[async_trait]
pub trait NavigationSink: Send {
    async fn activate_character(&mut self, id: &EntityId) -> Result<(), String>;

    async fn activate_group(&mut self, id: &EntityId) -> Result<(), String>;

    /// Opens the chat for an already-activated character.
    async fn open_character_chat(&mut self, id: &EntityId) -> Result<(), String>;

    /// Opens the chat for an already-activated group.
    async fn open_group_chat(&mut self, id: &EntityId) -> Result<(), String>;

    fn clear_active_character(&mut self);

    fn clear_active_group(&mut self);

    /// Asks the host to persist the new active selection.
    fn persist_settings(&mut self);
}
