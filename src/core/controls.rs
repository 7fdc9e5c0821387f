use glam::Vec3;
use std::f32::consts::PI;

// Damped orbit camera around a fixed target. Pointer and wheel input only
// accumulate deltas; `update` applies a fraction of them every frame.

pub const DEFAULT_DAMPING: f32 = 0.05;
pub const DEFAULT_ROTATE_SPEED: f32 = 1.0;
pub const DEFAULT_ZOOM_SPEED: f32 = 1.0;
const POLAR_EPS: f32 = 1e-3;

#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub target: Vec3,
    pub damping: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    radius: f32,
    /// Angle from +Y.
    polar: f32,
    /// Angle about +Y, measured from +Z towards +X.
    azimuth: f32,
    delta_polar: f32,
    delta_azimuth: f32,
    zoom_scale: f32,
}

impl OrbitControls {
    pub fn new(eye: Vec3, target: Vec3, min_distance: f32, max_distance: f32) -> Self {
        let offset = eye - target;
        let radius = offset.length().max(1e-4);
        let polar = (offset.y / radius).clamp(-1.0, 1.0).acos();
        let azimuth = offset.x.atan2(offset.z);
        let lo = min_distance.max(1e-4);
        Self {
            target,
            damping: DEFAULT_DAMPING,
            rotate_speed: DEFAULT_ROTATE_SPEED,
            zoom_speed: DEFAULT_ZOOM_SPEED,
            min_distance: lo,
            max_distance: max_distance.max(lo),
            radius,
            polar: polar.clamp(POLAR_EPS, PI - POLAR_EPS),
            azimuth,
            delta_polar: 0.0,
            delta_azimuth: 0.0,
            zoom_scale: 1.0,
        }
    }

    pub fn distance(&self) -> f32 {
        self.radius
    }

    pub fn polar(&self) -> f32 {
        self.polar
    }

    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    /// Queue a rotation from a pointer drag of `(dx_px, dy_px)`; a drag
    /// across the full viewport height turns the camera once around.
    pub fn rotate(&mut self, dx_px: f32, dy_px: f32, viewport_height_px: f32) {
        let h = viewport_height_px.max(1.0);
        self.delta_azimuth -= 2.0 * PI * dx_px / h * self.rotate_speed;
        self.delta_polar -= 2.0 * PI * dy_px / h * self.rotate_speed;
    }

    /// Queue a dolly from a wheel delta; positive values move away.
    pub fn zoom(&mut self, wheel_delta: f32) {
        if wheel_delta == 0.0 {
            return;
        }
        let step = 0.95f32.powf(self.zoom_speed);
        if wheel_delta > 0.0 {
            self.zoom_scale /= step;
        } else {
            self.zoom_scale *= step;
        }
    }

    /// Apply damped motion and return the new eye position.
    pub fn update(&mut self) -> Vec3 {
        let k = self.damping.clamp(1e-3, 1.0);
        self.azimuth += self.delta_azimuth * k;
        self.polar = (self.polar + self.delta_polar * k).clamp(POLAR_EPS, PI - POLAR_EPS);
        self.delta_azimuth *= 1.0 - k;
        self.delta_polar *= 1.0 - k;

        self.radius = (self.radius * self.zoom_scale).clamp(self.min_distance, self.max_distance);
        self.zoom_scale = 1.0;

        self.eye()
    }

    pub fn eye(&self) -> Vec3 {
        let (sp, cp) = self.polar.sin_cos();
        let (sa, ca) = self.azimuth.sin_cos();
        self.target + Vec3::new(self.radius * sp * sa, self.radius * cp, self.radius * sp * ca)
    }
}
