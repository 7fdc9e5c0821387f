/// Rendering, camera and asset constants for the web frontend.
///
/// Population and animation tuning lives in `core::constants`.
// Camera
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
pub const CAMERA_EYE: [f32; 3] = [1.0, 1.0, 4.0];
pub const CAMERA_TARGET: [f32; 3] = [0.0, -0.8, 0.0];

// Orbit controls
pub const CONTROLS_MIN_DISTANCE: f32 = 1.5;
pub const CONTROLS_MAX_DISTANCE: f32 = 30.0;

// Lighting
pub const AMBIENT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const AMBIENT_INTENSITY: f32 = 0.5;
pub const SUN_DIRECTION: [f32; 3] = [-0.5, -1.0, -0.6]; // direction the light travels
pub const SUN_INTENSITY: f32 = 0.8;
pub const POINT_LIGHT_POSITION: [f32; 3] = [2.0, 3.0, 4.0];
pub const POINT_LIGHT_INTENSITY: f32 = 0.9;

// Materials
pub const TEXT_COLOR: [f32; 4] = [0.93, 0.93, 0.96, 1.0];
pub const TORUS_COLOR: [f32; 4] = [0.55, 0.62, 0.95, 1.0];
pub const BOX_COLOR: [f32; 4] = [0.95, 0.62, 0.55, 1.0];
pub const NORMAL_MAP_STRENGTH: f32 = 1.0;
pub const SPECULAR_SHININESS: f32 = 48.0;

// Frame
pub const CLEAR_COLOR: [f64; 3] = [0.02, 0.02, 0.04];
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // clamp after tab switches

// Assets (relative to the page)
pub const FONT_URL: &str = "assets/fonts/display.ttf";
pub const NORMAL_MAP_URL: &str = "assets/textures/normal.png";

// DOM
pub const CANVAS_ID: &str = "app-canvas";
pub const PANEL_ID: &str = "debug-panel";
