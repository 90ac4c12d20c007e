//! Component inspector panel
//!
//! Probes the selected entity for a closed set of component kinds and
//! draws an editing section for each one present. Edits write straight
//! back into the component record; there is no staging and no undo.

use crate::selection::SelectionContext;
use crate::widgets::{drag_f32, drag_vec3, enum_combo, field_row, two_columns, POSITION_DRAG_SPEED};
use ember_engine::prelude::{CameraComponent, Entity, ProjectionKind, Tag, Transform, World};
use imgui::{TreeNodeFlags, Ui};
use tracing::debug;

/// The component kinds the inspector can edit, dispatched as a closed set
///
/// Adding a kind means adding a variant and its arms below; nothing is
/// discovered at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Tag,
    Transform,
    Camera,
}

impl ComponentKind {
    /// Every kind, in the fixed order their sections are drawn
    pub const ALL: [ComponentKind; 3] = [
        ComponentKind::Tag,
        ComponentKind::Transform,
        ComponentKind::Camera,
    ];

    /// Section heading shown for this kind
    pub fn display_name(self) -> &'static str {
        match self {
            ComponentKind::Tag => "Tag",
            ComponentKind::Transform => "Transform",
            ComponentKind::Camera => "Camera",
        }
    }

    /// Whether `entity` currently holds a component of this kind
    pub fn is_present(self, world: &World, entity: Entity) -> bool {
        match self {
            ComponentKind::Tag => world.has::<Tag>(entity),
            ComponentKind::Transform => world.has::<Transform>(entity),
            ComponentKind::Camera => world.has::<CameraComponent>(entity),
        }
    }

    /// Draw the editing widgets for this kind; true when a field changed
    fn draw(self, ui: &Ui, world: &mut World, entity: Entity) -> bool {
        match self {
            ComponentKind::Tag => draw_tag(ui, world, entity),
            ComponentKind::Transform => draw_transform(ui, world, entity),
            ComponentKind::Camera => draw_camera(ui, world, entity),
        }
    }
}

/// Component kinds present on `entity`, in draw order
pub fn present_kinds(world: &World, entity: Entity) -> Vec<ComponentKind> {
    ComponentKind::ALL
        .into_iter()
        .filter(|kind| kind.is_present(world, entity))
        .collect()
}

/// Render the component inspector panel
pub fn render_inspector_panel(ui: &Ui, world: &mut World, selection: &SelectionContext) {
    ui.window("Properties").resizable(true).build(|| {
        let Some(entity) = selection.entity() else {
            return;
        };

        for kind in ComponentKind::ALL {
            if !kind.is_present(world, entity) {
                continue;
            }
            if ui.collapsing_header(kind.display_name(), TreeNodeFlags::DEFAULT_OPEN)
                && kind.draw(ui, world, entity)
            {
                debug!(entity = ?entity, kind = kind.display_name(), "Component edited");
            }
        }
    });
}

fn draw_tag(ui: &Ui, world: &mut World, entity: Entity) -> bool {
    let Ok(mut tag) = world.get_mut::<Tag>(entity) else {
        return false;
    };

    two_columns(ui, "tag_columns", || {
        field_row(ui, "Tag", || {
            let mut text = tag.0.clone();
            ui.set_next_item_width(-1.0);
            if ui.input_text("##Tag", &mut text).build() {
                tag.set(&text);
                true
            } else {
                false
            }
        })
    })
}

fn draw_transform(ui: &Ui, world: &mut World, entity: Entity) -> bool {
    let Ok(mut transform) = world.get_mut::<Transform>(entity) else {
        return false;
    };

    two_columns(ui, "transform_columns", || {
        field_row(ui, "Position", || {
            let mut translation = transform.translation();
            if drag_vec3(ui, "##Position", &mut translation, POSITION_DRAG_SPEED) {
                transform.set_translation(translation);
                true
            } else {
                false
            }
        })
    })
}

fn draw_camera(ui: &Ui, world: &mut World, entity: Entity) -> bool {
    let Ok(mut component) = world.get_mut::<CameraComponent>(entity) else {
        return false;
    };
    let mut changed = false;

    two_columns(ui, "camera_columns", || {
        changed |= field_row(ui, "Primary", || {
            ui.checkbox("##Primary", &mut component.primary)
        });

        let projection_options = ProjectionKind::ALL.map(|kind| (kind, kind.label()));
        changed |= field_row(ui, "Projection", || {
            match enum_combo(
                ui,
                "##Projection",
                component.camera.projection_kind(),
                &projection_options,
            ) {
                Some(kind) => {
                    component.camera.set_projection_kind(kind);
                    true
                }
                None => false,
            }
        });

        // Only the active projection's fields are shown; the other set
        // keeps its values for when the user switches back.
        match component.camera.projection_kind() {
            ProjectionKind::Perspective => {
                changed |= field_row(ui, "Vertical FOV", || {
                    let mut fov_degrees = component.camera.perspective_vertical_fov().to_degrees();
                    if drag_f32(ui, "##Vertical FOV", &mut fov_degrees) {
                        component
                            .camera
                            .set_perspective_vertical_fov(fov_degrees.to_radians());
                        true
                    } else {
                        false
                    }
                });

                changed |= field_row(ui, "Near", || {
                    let mut near = component.camera.perspective_near_clip();
                    if drag_f32(ui, "##Near", &mut near) {
                        component.camera.set_perspective_near_clip(near);
                        true
                    } else {
                        false
                    }
                });

                changed |= field_row(ui, "Far", || {
                    let mut far = component.camera.perspective_far_clip();
                    if drag_f32(ui, "##Far", &mut far) {
                        component.camera.set_perspective_far_clip(far);
                        true
                    } else {
                        false
                    }
                });
            }
            ProjectionKind::Orthographic => {
                changed |= field_row(ui, "Size", || {
                    let mut size = component.camera.orthographic_size();
                    if drag_f32(ui, "##Size", &mut size) {
                        component.camera.set_orthographic_size(size);
                        true
                    } else {
                        false
                    }
                });

                changed |= field_row(ui, "Near", || {
                    let mut near = component.camera.orthographic_near_clip();
                    if drag_f32(ui, "##Near", &mut near) {
                        component.camera.set_orthographic_near_clip(near);
                        true
                    } else {
                        false
                    }
                });

                changed |= field_row(ui, "Far", || {
                    let mut far = component.camera.orthographic_far_clip();
                    if drag_f32(ui, "##Far", &mut far) {
                        component.camera.set_orthographic_far_clip(far);
                        true
                    } else {
                        false
                    }
                });

                changed |= field_row(ui, "Fixed Aspect Ratio", || {
                    ui.checkbox("##Fixed Aspect Ratio", &mut component.fixed_aspect_ratio)
                });
            }
        }
    });

    changed
}
