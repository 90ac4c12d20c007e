//! Shared widget helpers for the editor panels
//!
//! Field editing follows one layout: a two-column grid with the field label
//! on the left and a full-width widget on the right.

use glam::Vec3;
use imgui::{Drag, Ui};

/// Drag speed for position fields
pub const POSITION_DRAG_SPEED: f32 = 0.1;

/// Run `body` inside a two-column label/widget layout
pub fn two_columns<R>(ui: &Ui, id: &str, body: impl FnOnce() -> R) -> R {
    ui.columns(2, id, false);
    let value = body();
    ui.columns(1, id, false);
    value
}

/// One label/widget row inside a [`two_columns`] layout
pub fn field_row<R>(ui: &Ui, label: &str, widget: impl FnOnce() -> R) -> R {
    ui.text(label);
    ui.next_column();
    let value = widget();
    ui.next_column();
    value
}

/// Column-filling drag field for a single float
pub fn drag_f32(ui: &Ui, id: &str, value: &mut f32) -> bool {
    ui.set_next_item_width(-1.0);
    Drag::new(id).build(ui, value)
}

/// Three-wide drag field editing a Vec3 in place
pub fn drag_vec3(ui: &Ui, id: &str, value: &mut Vec3, speed: f32) -> bool {
    let mut array = value.to_array();
    ui.set_next_item_width(-1.0);
    if Drag::new(id).speed(speed).build_array(ui, &mut array) {
        *value = Vec3::from_array(array);
        true
    } else {
        false
    }
}

/// Bounded selector over a closed set of values with display labels
///
/// Shows the current value's label, offers every label in the list, and
/// returns the newly chosen value when the user picks a different entry.
/// The index never leaves the label list, so no out-of-range value can be
/// produced.
pub fn enum_combo<T: Copy + PartialEq>(
    ui: &Ui,
    id: &str,
    current: T,
    options: &[(T, &'static str)],
) -> Option<T> {
    let labels: Vec<&str> = options.iter().map(|(_, label)| *label).collect();
    let mut index = options
        .iter()
        .position(|(value, _)| *value == current)
        .unwrap_or(0);

    ui.set_next_item_width(-1.0);
    if ui.combo_simple_string(id, &mut index, &labels) {
        Some(options[index].0)
    } else {
        None
    }
}
