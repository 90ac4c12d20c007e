//! Scene-side interface for the ember editor panels
//!
//! This crate provides the world facade the panels draw from, the component
//! records the inspector knows how to edit, and the camera projection model.

pub mod core;

// Re-export commonly used types
pub mod prelude {
    // Entity system types
    pub use crate::core::entity::{CameraComponent, Entity, Tag, Transform, World};

    // Camera types
    pub use crate::core::camera::{ProjectionKind, SceneCamera};

    // Math types
    pub use glam::{Mat4, Quat, Vec2, Vec3, Vec4};
}

/// Initialize logging for the engine
pub fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
