//! Core components for the entity system

use crate::core::camera::SceneCamera;
use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Display name of an entity, shown by the hierarchy panel
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag(pub String);

impl Tag {
    /// Longest text in bytes a commit will keep
    pub const CAPACITY: usize = 256;

    /// Create a new tag component; text beyond [`Tag::CAPACITY`] is dropped
    pub fn new(text: impl Into<String>) -> Self {
        let mut tag = Self::default();
        tag.set(&text.into());
        tag
    }

    /// Commit new tag text, truncating to [`Tag::CAPACITY`] on a character
    /// boundary rather than rejecting the edit
    pub fn set(&mut self, text: &str) {
        let mut end = text.len().min(Self::CAPACITY);
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        if end < text.len() {
            debug!(
                kept = end,
                dropped = text.len() - end,
                "Tag text truncated to capacity"
            );
        }
        self.0 = text[..end].to_owned();
    }
}

/// Local-to-world transform of an entity as a 4x4 matrix
///
/// The editor only edits the translation column; whatever rotation and
/// scale the host baked into the matrix stay untouched.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Transform {
    /// Column-major transformation matrix
    pub matrix: Mat4,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            matrix: Mat4::IDENTITY,
        }
    }
}

impl Transform {
    /// Create a transform from a matrix
    pub fn from_matrix(matrix: Mat4) -> Self {
        Self { matrix }
    }

    /// Create a transform translated to `translation` with identity
    /// rotation and scale
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            matrix: Mat4::from_translation(translation),
        }
    }

    /// Translation column of the matrix
    pub fn translation(&self) -> Vec3 {
        self.matrix.w_axis.truncate()
    }

    /// Replace the translation column, leaving the rest of the matrix alone
    pub fn set_translation(&mut self, translation: Vec3) {
        self.matrix.w_axis = translation.extend(self.matrix.w_axis.w);
    }
}

/// Camera attached to an entity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CameraComponent {
    /// Projection state
    pub camera: SceneCamera,
    /// Whether the host renders through this camera
    pub primary: bool,
    /// Keep the aspect ratio fixed when the viewport resizes
    pub fixed_aspect_ratio: bool,
}

impl Default for CameraComponent {
    fn default() -> Self {
        Self {
            camera: SceneCamera::default(),
            primary: true,
            fixed_aspect_ratio: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_default() {
        let transform = Transform::default();
        assert_eq!(transform.matrix, Mat4::IDENTITY);
        assert_eq!(transform.translation(), Vec3::ZERO);
    }

    #[test]
    fn test_transform_translation_round_trip() {
        let mut transform = Transform::from_translation(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(transform.translation(), Vec3::new(1.0, 2.0, 3.0));

        transform.set_translation(Vec3::new(-4.0, 0.5, 9.0));
        assert_eq!(transform.translation(), Vec3::new(-4.0, 0.5, 9.0));
    }

    #[test]
    fn test_set_translation_keeps_rotation_and_scale() {
        let rotated = Mat4::from_rotation_y(std::f32::consts::FRAC_PI_2)
            * Mat4::from_scale(Vec3::splat(2.0));
        let mut transform = Transform::from_matrix(rotated);

        transform.set_translation(Vec3::X);

        assert_eq!(transform.translation(), Vec3::X);
        assert_eq!(transform.matrix.x_axis, rotated.x_axis);
        assert_eq!(transform.matrix.y_axis, rotated.y_axis);
        assert_eq!(transform.matrix.z_axis, rotated.z_axis);
    }

    #[test]
    fn test_tag_component() {
        let tag = Tag::new("Test Entity");
        assert_eq!(tag.0, "Test Entity");

        // Test default
        let default_tag = Tag::default();
        assert_eq!(default_tag.0, "");

        // Test serialization
        let json = serde_json::to_string(&tag).unwrap();
        let deserialized: Tag = serde_json::from_str(&json).unwrap();
        assert_eq!(tag, deserialized);
    }

    #[test]
    fn test_tag_commit_truncates_to_capacity() {
        let mut tag = Tag::default();
        tag.set(&"x".repeat(300));
        assert_eq!(tag.0.len(), Tag::CAPACITY);
    }

    #[test]
    fn test_tag_truncation_respects_char_boundaries() {
        // 'é' is two bytes; 200 of them straddle the capacity limit
        let text = "é".repeat(200);
        let mut tag = Tag::default();
        tag.set(&text);

        assert!(tag.0.len() <= Tag::CAPACITY);
        assert!(tag.0.chars().all(|c| c == 'é'));
    }

    #[test]
    fn test_camera_component_default() {
        let camera = CameraComponent::default();
        assert!(camera.primary);
        assert!(!camera.fixed_aspect_ratio);
    }

    #[test]
    fn test_camera_component_serde_round_trip() {
        let camera = CameraComponent::default();
        let json = serde_json::to_string(&camera).unwrap();
        let deserialized: CameraComponent = serde_json::from_str(&json).unwrap();
        assert_eq!(camera, deserialized);
    }
}
