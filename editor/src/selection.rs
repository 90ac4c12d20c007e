//! Selected-entity state shared by the editor panels

use hecs::Entity;
use tracing::debug;

/// The entity currently targeted by the component inspector
///
/// Owned by the panel pair and passed by reference into whatever needs it.
/// Selection is per-session UI state; it is never persisted.
#[derive(Debug, Default)]
pub struct SelectionContext {
    entity: Option<Entity>,
}

impl SelectionContext {
    /// Create an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected entity, if any
    pub fn entity(&self) -> Option<Entity> {
        self.entity
    }

    /// Whether `entity` is the current selection
    pub fn is_selected(&self, entity: Entity) -> bool {
        self.entity == Some(entity)
    }

    /// Select an entity
    pub fn select(&mut self, entity: Entity) {
        if self.entity != Some(entity) {
            debug!(entity = ?entity, "Selected entity");
            self.entity = Some(entity);
        }
    }

    /// Clear the selection; clearing an already empty selection is a no-op
    pub fn clear(&mut self) {
        if self.entity.is_some() {
            debug!("Selection cleared");
            self.entity = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some_entity() -> Entity {
        let mut world = hecs::World::new();
        world.spawn(())
    }

    #[test]
    fn test_select_and_clear() {
        let entity = some_entity();
        let mut selection = SelectionContext::new();
        assert_eq!(selection.entity(), None);

        selection.select(entity);
        assert!(selection.is_selected(entity));

        selection.clear();
        assert_eq!(selection.entity(), None);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut selection = SelectionContext::new();
        selection.clear();
        assert_eq!(selection.entity(), None);

        selection.clear();
        assert_eq!(selection.entity(), None);
    }

    #[test]
    fn test_reselect_replaces_previous() {
        let mut world = hecs::World::new();
        let first = world.spawn(());
        let second = world.spawn(());

        let mut selection = SelectionContext::new();
        selection.select(first);
        selection.select(second);

        assert!(selection.is_selected(second));
        assert!(!selection.is_selected(first));
    }
}
