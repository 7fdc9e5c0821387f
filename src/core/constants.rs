use glam::Vec3;

// Scene population tuning shared by the loader and the host tests.

// Placement (rejection sampling)
pub const PRIMITIVE_ATTEMPTS: usize = 150; // attempt budget per primitive kind
pub const BOUND_HALF_EXTENT: f32 = 10.0; // candidates are drawn from [-E, E]^3
pub const CLEARANCE: f32 = 4.0; // minimum distance from the text anchor
pub const TEXT_ANCHOR: Vec3 = Vec3::new(0.0, -0.8, 0.0);
pub const PRIMITIVE_SCALE_MIN: f32 = 0.1;
pub const PRIMITIVE_SCALE_MAX: f32 = 0.5;

// Primitive shapes (unit sizes before the sampled scale)
pub const BOX_SIZE: f32 = 1.0;
pub const TORUS_RADIUS: f32 = 0.6;
pub const TORUS_TUBE: f32 = 0.25;
pub const TORUS_RADIAL_SEGMENTS: u32 = 20;
pub const TORUS_TUBULAR_SEGMENTS: u32 = 45;

// Extruded text
pub const TEXT_LINES: [&str; 3] = ["Creative", "Developer", "Portfolio"];
pub const TEXT_SIZE: f32 = 0.5; // em height in world units
pub const TEXT_DEPTH: f32 = 0.2;
pub const TEXT_BEVEL: f32 = 0.02;
pub const TEXT_BEVEL_SEGMENTS: u32 = 3;
pub const TEXT_CURVE_TOLERANCE: f32 = 0.005;
pub const TEXT_LINE_SPACING: f32 = 0.8; // baseline-to-baseline distance

// Looping rotations
pub const TEXT_SWING_RADIANS: f32 = 0.25;
pub const TEXT_SWING_SECS: f32 = 6.0;
pub const TORUS_TURN_SECS: f32 = 60.0;
pub const BOX_TURN_SECS: f32 = 80.0;
