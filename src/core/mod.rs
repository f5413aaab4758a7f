pub mod config;
pub mod dropdown;
pub mod entity;
pub mod seek;
pub mod views;

pub use config::SwitchConfig;
pub use dropdown::DropdownController;
pub use entity::{Entity, EntityKey, EntityKind};
pub use views::EntityView;
