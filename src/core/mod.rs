pub mod camera;
pub mod constants;
pub mod controls;
pub mod geometry;
pub mod placement;
pub mod scene;
pub mod text;
pub mod tween;

pub use camera::*;
pub use constants::*;
pub use controls::*;
pub use geometry::*;
pub use placement::*;
pub use scene::*;
pub use text::*;
pub use tween::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
