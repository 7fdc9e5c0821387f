use super::constants::{
    BOUND_HALF_EXTENT, CLEARANCE, PRIMITIVE_ATTEMPTS, PRIMITIVE_SCALE_MAX, PRIMITIVE_SCALE_MIN,
    TEXT_ANCHOR,
};
use glam::{Mat4, Quat, Vec3};
use rand::Rng;
use std::f32::consts::PI;

/// Parameters of one scatter pass.
///
/// - `count`: attempt budget; every attempt draws exactly one candidate
/// - `half_extent`: positions are drawn from `[-half_extent, half_extent]` per axis
/// - `clearance`: candidates at or within this distance of `anchor` are dropped
/// - `scale_min`/`scale_max`: closed range of the uniform scale
#[derive(Clone, Debug)]
pub struct PlacementRequest {
    pub count: usize,
    pub half_extent: f32,
    pub clearance: f32,
    pub anchor: Vec3,
    pub scale_min: f32,
    pub scale_max: f32,
}

impl Default for PlacementRequest {
    fn default() -> Self {
        Self {
            count: PRIMITIVE_ATTEMPTS,
            half_extent: BOUND_HALF_EXTENT,
            clearance: CLEARANCE,
            anchor: TEXT_ANCHOR,
            scale_min: PRIMITIVE_SCALE_MIN,
            scale_max: PRIMITIVE_SCALE_MAX,
        }
    }
}

/// Local transform of one decorative primitive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub position: Vec3,
    /// Euler angles about X then Y, each in `[0, π]`.
    pub rotation: [f32; 2],
    pub scale: f32,
}

impl Placement {
    pub const IDENTITY: Placement = Placement {
        position: Vec3::ZERO,
        rotation: [0.0, 0.0],
        scale: 1.0,
    };

    pub fn model_matrix(&self) -> Mat4 {
        let rot = Quat::from_rotation_x(self.rotation[0]) * Quat::from_rotation_y(self.rotation[1]);
        Mat4::from_scale_rotation_translation(Vec3::splat(self.scale), rot, self.position)
    }

    #[inline]
    pub fn distance_to(&self, point: Vec3) -> f32 {
        self.position.distance(point)
    }
}

/// Draw one candidate uniformly from the request's bounds.
pub fn sample_placement<R: Rng + ?Sized>(rng: &mut R, req: &PlacementRequest) -> Placement {
    let e = req.half_extent.abs();
    let position = Vec3::new(
        rng.gen_range(-e..=e),
        rng.gen_range(-e..=e),
        rng.gen_range(-e..=e),
    );
    let rotation = [rng.gen_range(0.0..=PI), rng.gen_range(0.0..=PI)];
    let (lo, hi) = if req.scale_min <= req.scale_max {
        (req.scale_min, req.scale_max)
    } else {
        (req.scale_max, req.scale_min)
    };
    let scale = rng.gen_range(lo..=hi);
    Placement {
        position,
        rotation,
        scale,
    }
}

/// Clearance filter: strictly farther than `clearance` from the anchor.
#[inline]
pub fn accepts(req: &PlacementRequest, placement: &Placement) -> bool {
    placement.distance_to(req.anchor) > req.clearance
}

/// Rejection-sample `req.count` candidates and keep the ones that pass the
/// clearance filter. Rejected draws are not retried, so the result may hold
/// fewer than `req.count` placements.
pub fn populate<R: Rng + ?Sized>(rng: &mut R, req: &PlacementRequest) -> Vec<Placement> {
    let mut accepted = Vec::with_capacity(req.count);
    for _ in 0..req.count {
        let candidate = sample_placement(rng, req);
        if accepts(req, &candidate) {
            accepted.push(candidate);
        }
    }
    accepted
}
