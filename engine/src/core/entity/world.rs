//! World wrapper providing helper methods for entity management

use super::components::{Tag, Transform};
use hecs::Entity;
use tracing::debug;

/// Wrapper around hecs::World providing additional helper methods
pub struct World {
    inner: hecs::World,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// Create a new empty world
    pub fn new() -> Self {
        Self {
            inner: hecs::World::new(),
        }
    }

    /// Spawn a new entity with the given components
    pub fn spawn(&mut self, components: impl hecs::DynamicBundle) -> Entity {
        self.inner.spawn(components)
    }

    /// Spawn an entity with a display tag and an identity transform
    pub fn spawn_named(&mut self, name: impl Into<String>) -> Entity {
        let entity = self.inner.spawn((Tag::new(name), Transform::default()));
        debug!(entity = ?entity, "Spawned named entity");
        entity
    }

    /// Get a reference to a component on an entity
    pub fn get<T: hecs::Component>(
        &self,
        entity: Entity,
    ) -> Result<hecs::Ref<T>, hecs::ComponentError> {
        self.inner.get::<&T>(entity)
    }

    /// Get a mutable reference to a component on an entity
    pub fn get_mut<T: hecs::Component>(
        &mut self,
        entity: Entity,
    ) -> Result<hecs::RefMut<T>, hecs::ComponentError> {
        self.inner.get::<&mut T>(entity)
    }

    /// Whether `entity` currently holds a component of type `T`
    pub fn has<T: hecs::Component>(&self, entity: Entity) -> bool {
        self.inner.satisfies::<&T>(entity).unwrap_or(false)
    }

    /// Insert a component into an entity
    pub fn insert_one(
        &mut self,
        entity: Entity,
        component: impl hecs::Component,
    ) -> Result<(), hecs::NoSuchEntity> {
        self.inner.insert_one(entity, component)
    }

    /// Query entities with specific components
    pub fn query<Q: hecs::Query>(&self) -> hecs::QueryBorrow<Q> {
        self.inner.query()
    }

    /// Query entities with specific components (mutable)
    pub fn query_mut<Q: hecs::Query>(&mut self) -> hecs::QueryMut<Q> {
        self.inner.query_mut()
    }

    /// Despawn an entity and all its components
    pub fn despawn(&mut self, entity: Entity) -> Result<(), hecs::NoSuchEntity> {
        debug!(entity = ?entity, "Despawning entity");
        self.inner.despawn(entity)
    }

    /// Check if an entity exists
    pub fn contains(&self, entity: Entity) -> bool {
        self.inner.contains(entity)
    }

    /// Get access to the inner hecs::World for advanced operations
    pub fn inner(&self) -> &hecs::World {
        &self.inner
    }

    /// Get mutable access to the inner hecs::World for advanced operations
    pub fn inner_mut(&mut self) -> &mut hecs::World {
        &mut self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entity::components::CameraComponent;
    use glam::Vec3;

    #[test]
    fn test_world_spawn() {
        let mut world = World::new();
        let entity = world.spawn((Transform::default(),));
        assert!(world.contains(entity));
    }

    #[test]
    fn test_spawn_named_attaches_tag_and_transform() {
        let mut world = World::new();
        let entity = world.spawn_named("Player");

        assert_eq!(world.get::<Tag>(entity).unwrap().0, "Player");
        assert!(world.has::<Transform>(entity));
        assert!(!world.has::<CameraComponent>(entity));
    }

    #[test]
    fn test_get_mut_round_trip() {
        let mut world = World::new();
        let entity = world.spawn_named("Mover");

        world
            .get_mut::<Transform>(entity)
            .unwrap()
            .set_translation(Vec3::new(1.0, 2.0, 3.0));

        let transform = world.get::<Transform>(entity).unwrap();
        assert_eq!(transform.translation(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_insert_one() {
        let mut world = World::new();
        let entity = world.spawn_named("Camera");

        world.insert_one(entity, CameraComponent::default()).unwrap();
        assert!(world.has::<CameraComponent>(entity));
    }

    #[test]
    fn test_despawn() {
        let mut world = World::new();
        let entity = world.spawn_named("Short-lived");

        world.despawn(entity).unwrap();
        assert!(!world.contains(entity));
        assert!(world.despawn(entity).is_err());
    }

    #[test]
    fn test_has_on_missing_entity() {
        let mut world = World::new();
        let entity = world.spawn_named("Gone");
        world.despawn(entity).unwrap();

        assert!(!world.has::<Tag>(entity));
    }
}
