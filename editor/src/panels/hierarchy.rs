//! Scene hierarchy panel
//!
//! Lists every live entity in the scene as a tree node and tracks which
//! one is selected. The panel is read-only over entity existence: it never
//! creates, removes, or reorders entities.

use crate::selection::SelectionContext;
use ember_engine::prelude::{Entity, Tag, World};
use imgui::{MouseButton, TreeNodeFlags, Ui};
use tracing::debug;

/// Render the scene hierarchy panel
pub fn render_hierarchy_panel(ui: &Ui, world: &World, selection: &mut SelectionContext) {
    // A selection can outlive its entity when the host despawns it
    if let Some(entity) = selection.entity() {
        if !world.contains(entity) {
            debug!(entity = ?entity, "Selected entity no longer alive");
            selection.clear();
        }
    }

    ui.window("Scene Hierarchy").resizable(true).build(|| {
        for (entity, ()) in world.query::<()>().iter() {
            draw_entity_node(ui, world, entity, selection);
        }

        // A press on empty window background clears the selection. Pressing
        // an item makes that item active, which defeats the window-hover
        // test, so node clicks never land here.
        if ui.is_window_hovered() && ui.is_mouse_down(MouseButton::Left) {
            selection.clear();
        }
    });
}

/// Draw a single entity as a selectable tree node labeled with its tag
fn draw_entity_node(ui: &Ui, world: &World, entity: Entity, selection: &mut SelectionContext) {
    // The "##" suffix keeps widget ids unique even with duplicate tags
    let label = format!("{}##{:?}", entity_label(world, entity), entity);

    let mut flags = TreeNodeFlags::OPEN_ON_ARROW | TreeNodeFlags::SPAN_AVAIL_WIDTH;
    if selection.is_selected(entity) {
        flags |= TreeNodeFlags::SELECTED;
    }

    let node = ui.tree_node_config(&label).flags(flags).push();

    if ui.is_item_clicked() {
        selection.select(entity);
    }

    if let Some(_open) = node {
        // Entities are flat in the scene; there is nothing nested to draw
    }
}

/// Display name for an entity: its tag text, or the entity id when untagged
fn entity_label(world: &World, entity: Entity) -> String {
    match world.get::<Tag>(entity) {
        Ok(tag) if !tag.0.is_empty() => tag.0.clone(),
        _ => format!("Entity {entity:?}"),
    }
}
