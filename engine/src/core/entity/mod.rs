//! Entity-Component System (ECS) functionality
//!
//! Thin facade over `hecs` together with the component records the
//! inspector panels know how to edit.

pub mod components;
pub mod world;

// Re-export commonly used types
pub use components::{CameraComponent, Tag, Transform};
pub use world::World;

// Re-export hecs types that users will need
pub use hecs::Entity;
