//! ImGui-based scene editor panels
//!
//! Hierarchy and component-inspector panels over an `ember_engine` scene,
//! drawn immediate-mode inside a UI frame owned by the host render loop.
//! The panels hold no retained widget state; the only thing that survives
//! a frame is the selection context.

pub mod panels;
pub mod selection;
pub mod widgets;

pub use panels::{render_hierarchy_panel, render_inspector_panel, ComponentKind, ScenePanels};
pub use selection::SelectionContext;
