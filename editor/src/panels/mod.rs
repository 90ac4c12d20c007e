//! Editor UI panels
//!
//! The individual panels that make up the scene editor: the entity
//! hierarchy and the component inspector.

pub mod hierarchy;
pub mod inspector;

pub use hierarchy::render_hierarchy_panel;
pub use inspector::{present_kinds, render_inspector_panel, ComponentKind};

use crate::selection::SelectionContext;
use ember_engine::prelude::World;
use imgui::Ui;

/// The hierarchy/inspector panel pair together with its selection state
#[derive(Debug, Default)]
pub struct ScenePanels {
    /// Entity currently targeted by the inspector
    pub selection: SelectionContext,
}

impl ScenePanels {
    /// Create the panel pair with nothing selected
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw both panels for one UI frame
    pub fn render(&mut self, ui: &Ui, world: &mut World) {
        render_hierarchy_panel(ui, world, &mut self.selection);
        render_inspector_panel(ui, world, &self.selection);
    }
}
