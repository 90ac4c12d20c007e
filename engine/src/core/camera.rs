//! Camera projection model for scene entities
//!
//! Stores the parameters for both perspective and orthographic projections,
//! so the editor can switch a camera between them without losing either
//! parameter set.

use glam::Mat4;
use serde::{Deserialize, Serialize};

/// Projection kind of a [`SceneCamera`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProjectionKind {
    /// Perspective projection with depth
    Perspective,
    /// Orthographic projection (parallel)
    Orthographic,
}

impl ProjectionKind {
    /// Every projection kind, in the order selector widgets list them
    pub const ALL: [ProjectionKind; 2] =
        [ProjectionKind::Perspective, ProjectionKind::Orthographic];

    /// Display label for selector widgets
    pub fn label(self) -> &'static str {
        match self {
            ProjectionKind::Perspective => "Perspective",
            ProjectionKind::Orthographic => "Orthographic",
        }
    }
}

/// Projection state of a camera entity
///
/// Both parameter sets are kept at all times; only `projection_kind`
/// decides which one [`SceneCamera::projection_matrix`] uses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SceneCamera {
    projection_kind: ProjectionKind,
    /// Vertical field of view in radians
    perspective_fov_y: f32,
    perspective_near: f32,
    perspective_far: f32,
    /// Height of the orthographic view volume
    orthographic_size: f32,
    orthographic_near: f32,
    orthographic_far: f32,
    /// Width divided by height
    aspect_ratio: f32,
}

impl Default for SceneCamera {
    fn default() -> Self {
        Self {
            projection_kind: ProjectionKind::Perspective,
            perspective_fov_y: 45.0_f32.to_radians(),
            perspective_near: 0.01,
            perspective_far: 1000.0,
            orthographic_size: 10.0,
            orthographic_near: -1.0,
            orthographic_far: 1.0,
            aspect_ratio: 16.0 / 9.0,
        }
    }
}

impl SceneCamera {
    /// Create a perspective camera
    ///
    /// # Arguments
    /// * `fov_y_degrees` - Vertical field of view in degrees
    /// * `z_near` - Near clipping plane distance
    /// * `z_far` - Far clipping plane distance
    pub fn perspective(fov_y_degrees: f32, z_near: f32, z_far: f32) -> Self {
        Self {
            projection_kind: ProjectionKind::Perspective,
            perspective_fov_y: fov_y_degrees.to_radians(),
            perspective_near: z_near,
            perspective_far: z_far,
            ..Default::default()
        }
    }

    /// Create an orthographic camera
    ///
    /// # Arguments
    /// * `size` - Height of the orthographic view volume
    /// * `z_near` - Near clipping plane distance
    /// * `z_far` - Far clipping plane distance
    pub fn orthographic(size: f32, z_near: f32, z_far: f32) -> Self {
        Self {
            projection_kind: ProjectionKind::Orthographic,
            orthographic_size: size,
            orthographic_near: z_near,
            orthographic_far: z_far,
            ..Default::default()
        }
    }

    /// Active projection kind
    pub fn projection_kind(&self) -> ProjectionKind {
        self.projection_kind
    }

    /// Switch the active projection kind, keeping both parameter sets
    pub fn set_projection_kind(&mut self, kind: ProjectionKind) {
        self.projection_kind = kind;
    }

    /// Vertical field of view in radians
    pub fn perspective_vertical_fov(&self) -> f32 {
        self.perspective_fov_y
    }

    pub fn set_perspective_vertical_fov(&mut self, fov_y_radians: f32) {
        self.perspective_fov_y = fov_y_radians;
    }

    pub fn perspective_near_clip(&self) -> f32 {
        self.perspective_near
    }

    pub fn set_perspective_near_clip(&mut self, z_near: f32) {
        self.perspective_near = z_near;
    }

    pub fn perspective_far_clip(&self) -> f32 {
        self.perspective_far
    }

    pub fn set_perspective_far_clip(&mut self, z_far: f32) {
        self.perspective_far = z_far;
    }

    /// Height of the orthographic view volume
    pub fn orthographic_size(&self) -> f32 {
        self.orthographic_size
    }

    pub fn set_orthographic_size(&mut self, size: f32) {
        self.orthographic_size = size;
    }

    pub fn orthographic_near_clip(&self) -> f32 {
        self.orthographic_near
    }

    pub fn set_orthographic_near_clip(&mut self, z_near: f32) {
        self.orthographic_near = z_near;
    }

    pub fn orthographic_far_clip(&self) -> f32 {
        self.orthographic_far
    }

    pub fn set_orthographic_far_clip(&mut self, z_far: f32) {
        self.orthographic_far = z_far;
    }

    /// Current aspect ratio (width / height)
    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    /// Update the aspect ratio (useful when the viewport resizes)
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
    }

    /// Calculate the projection matrix for the active projection kind
    pub fn projection_matrix(&self) -> Mat4 {
        match self.projection_kind {
            ProjectionKind::Perspective => Mat4::perspective_rh(
                self.perspective_fov_y,
                self.aspect_ratio,
                self.perspective_near,
                self.perspective_far,
            ),
            ProjectionKind::Orthographic => {
                let half_height = self.orthographic_size * 0.5;
                let half_width = half_height * self.aspect_ratio;
                Mat4::orthographic_rh(
                    -half_width,
                    half_width,
                    -half_height,
                    half_height,
                    self.orthographic_near,
                    self.orthographic_far,
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_default() {
        let camera = SceneCamera::default();
        assert_eq!(camera.projection_kind(), ProjectionKind::Perspective);
        assert!((camera.perspective_vertical_fov().to_degrees() - 45.0).abs() < 1e-4);
        assert_eq!(camera.aspect_ratio(), 16.0 / 9.0);
    }

    #[test]
    fn test_perspective_projection() {
        let camera = SceneCamera::perspective(60.0, 0.1, 1000.0);
        let proj = camera.projection_matrix();

        // Perspective projection has w=0 in the last row
        assert_eq!(proj.w_axis.w, 0.0);

        // Near/far planes should affect the matrix
        assert!(proj.z_axis.z < 0.0);
    }

    #[test]
    fn test_orthographic_projection() {
        let camera = SceneCamera::orthographic(10.0, -1.0, 1.0);
        let proj = camera.projection_matrix();

        // Orthographic projection has w=1 in the last row
        assert_eq!(proj.w_axis.w, 1.0);
    }

    #[test]
    fn test_switching_kind_preserves_both_parameter_sets() {
        let mut camera = SceneCamera::default();
        camera.set_perspective_vertical_fov(90.0_f32.to_radians());
        camera.set_orthographic_size(25.0);

        camera.set_projection_kind(ProjectionKind::Orthographic);
        assert_eq!(camera.orthographic_size(), 25.0);

        camera.set_projection_kind(ProjectionKind::Perspective);
        assert!((camera.perspective_vertical_fov().to_degrees() - 90.0).abs() < 1e-3);
    }

    #[test]
    fn test_clip_plane_setters_round_trip() {
        let mut camera = SceneCamera::default();

        camera.set_perspective_near_clip(0.5);
        camera.set_perspective_far_clip(500.0);
        assert_eq!(camera.perspective_near_clip(), 0.5);
        assert_eq!(camera.perspective_far_clip(), 500.0);

        camera.set_orthographic_near_clip(-10.0);
        camera.set_orthographic_far_clip(10.0);
        assert_eq!(camera.orthographic_near_clip(), -10.0);
        assert_eq!(camera.orthographic_far_clip(), 10.0);
    }

    #[test]
    fn test_kind_labels_cover_every_variant() {
        let labels: Vec<&str> = ProjectionKind::ALL.iter().map(|kind| kind.label()).collect();
        assert_eq!(labels, vec!["Perspective", "Orthographic"]);
    }
}
