use glam::Vec3;
use std::f32::consts::TAU;

/// CPU-side indexed triangle mesh.
#[derive(Clone, Debug, Default)]
pub struct MeshBuffers {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    pub fn with_capacity(vertices: usize, indices: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices),
            normals: Vec::with_capacity(vertices),
            uvs: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(indices),
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() || self.indices.is_empty()
    }

    pub fn push_vertex(&mut self, position: Vec3, normal: Vec3, uv: [f32; 2]) -> u32 {
        let i = self.positions.len() as u32;
        self.positions.push(position.to_array());
        self.normals.push(normal.to_array());
        self.uvs.push(uv);
        i
    }

    /// Merge `other` into `self`, rebasing its indices.
    pub fn append(&mut self, other: &MeshBuffers) {
        let base = self.positions.len() as u32;
        self.positions.extend_from_slice(&other.positions);
        self.normals.extend_from_slice(&other.normals);
        self.uvs.extend_from_slice(&other.uvs);
        self.indices.extend(other.indices.iter().map(|i| base + i));
    }

    pub fn translate(&mut self, offset: Vec3) {
        for p in &mut self.positions {
            *p = (Vec3::from_array(*p) + offset).to_array();
        }
    }

    /// Axis-aligned bounds, or `None` for an empty mesh.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut iter = self.positions.iter().map(|p| Vec3::from_array(*p));
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
    }

    /// Move the mesh so its bounding box is centered on the origin and
    /// return the offset that was applied.
    pub fn center(&mut self) -> Vec3 {
        match self.bounds() {
            Some((lo, hi)) => {
                let offset = -(lo + hi) * 0.5;
                self.translate(offset);
                offset
            }
            None => Vec3::ZERO,
        }
    }
}

/// Axis-aligned box centered at the origin with per-face normals and UVs.
pub fn generate_box(width: f32, height: f32, depth: f32) -> MeshBuffers {
    let mut mesh = MeshBuffers::with_capacity(24, 36);
    let half = Vec3::new(width, height, depth) * 0.5;

    // (normal, u axis, v axis) per face; u x v == normal keeps CCW winding
    let faces = [
        (Vec3::X, -Vec3::Z, Vec3::Y),
        (-Vec3::X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, -Vec3::Z),
        (-Vec3::Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (-Vec3::Z, -Vec3::X, Vec3::Y),
    ];

    for &(normal, u_axis, v_axis) in &faces {
        let center = normal * half;
        let u = u_axis * half;
        let v = v_axis * half;
        let corners = [center - u - v, center + u - v, center + u + v, center - u + v];
        let uv = [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];
        let base = mesh.vertex_count() as u32;
        for (corner, uv) in corners.iter().zip(uv.iter()) {
            mesh.push_vertex(*corner, normal, *uv);
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    mesh
}

/// Torus in the XY plane centered at the origin.
///
/// `radius` is the distance from the center to the middle of the tube.
pub fn generate_torus(
    radius: f32,
    tube: f32,
    radial_segments: u32,
    tubular_segments: u32,
) -> MeshBuffers {
    let radial = radial_segments.max(3);
    let tubular = tubular_segments.max(3);
    let mut mesh = MeshBuffers::with_capacity(
        ((radial + 1) * (tubular + 1)) as usize,
        (radial * tubular * 6) as usize,
    );

    for j in 0..=radial {
        let v = j as f32 / radial as f32;
        let theta = v * TAU;
        let (sin_t, cos_t) = theta.sin_cos();
        for i in 0..=tubular {
            let u = i as f32 / tubular as f32;
            let phi = u * TAU;
            let (sin_p, cos_p) = phi.sin_cos();
            let ring_center = Vec3::new(radius * cos_p, radius * sin_p, 0.0);
            let pos = Vec3::new(
                (radius + tube * cos_t) * cos_p,
                (radius + tube * cos_t) * sin_p,
                tube * sin_t,
            );
            let normal = (pos - ring_center).normalize_or_zero();
            mesh.push_vertex(pos, normal, [u, v]);
        }
    }

    let stride = tubular + 1;
    for j in 1..=radial {
        for i in 1..=tubular {
            let a = stride * j + i - 1;
            let b = stride * (j - 1) + i - 1;
            let c = stride * (j - 1) + i;
            let d = stride * j + i;
            mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    mesh
}
