// Extruded text meshes built from a TrueType/OpenType face.
//
// Glyph outlines come from `ttf-parser`, the front cap is tessellated with
// lyon, the back cap mirrors it, and the side walls are built from the
// flattened outline with an optional bevel.

use super::constants::{
    TEXT_BEVEL, TEXT_BEVEL_SEGMENTS, TEXT_CURVE_TOLERANCE, TEXT_DEPTH, TEXT_SIZE,
};
use super::geometry::MeshBuffers;
use glam::{Vec2, Vec3};
use lyon_path::{math, Event, Path};
use lyon_tessellation::{
    BuffersBuilder, FillOptions, FillRule, FillTessellator, FillVertex, VertexBuffers,
};
use ttf_parser::{Face, OutlineBuilder};

#[derive(Clone, Copy, Debug)]
pub struct TextStyle {
    /// Height of one em in world units.
    pub size: f32,
    pub depth: f32,
    pub bevel: f32,
    pub bevel_segments: u32,
    /// Max deviation when flattening curves, in world units.
    pub tolerance: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: TEXT_SIZE,
            depth: TEXT_DEPTH,
            bevel: TEXT_BEVEL,
            bevel_segments: TEXT_BEVEL_SEGMENTS,
            tolerance: TEXT_CURVE_TOLERANCE,
        }
    }
}

struct PathSink<'a> {
    builder: &'a mut lyon_path::path::Builder,
    scale: f32,
    offset: Vec2,
    open: bool,
}

impl PathSink<'_> {
    #[inline]
    fn pt(&self, x: f32, y: f32) -> math::Point {
        math::point(self.offset.x + x * self.scale, self.offset.y + y * self.scale)
    }

    fn finish(&mut self) {
        if self.open {
            self.builder.end(true);
            self.open = false;
        }
    }
}

impl OutlineBuilder for PathSink<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        self.finish();
        let p = self.pt(x, y);
        self.builder.begin(p);
        self.open = true;
    }
    fn line_to(&mut self, x: f32, y: f32) {
        let p = self.pt(x, y);
        self.builder.line_to(p);
    }
    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let (c, p) = (self.pt(x1, y1), self.pt(x, y));
        self.builder.quadratic_bezier_to(c, p);
    }
    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (c1, c2, p) = (self.pt(x1, y1), self.pt(x2, y2), self.pt(x, y));
        self.builder.cubic_bezier_to(c1, c2, p);
    }
    fn close(&mut self) {
        self.finish();
    }
}

/// Build a single line of extruded text, baseline at y = 0, starting at x = 0.
/// The front cap faces +Z at `z = depth`, the back cap faces -Z at `z = 0`.
pub fn build_text_line(
    font_bytes: &[u8],
    text: &str,
    style: &TextStyle,
) -> anyhow::Result<MeshBuffers> {
    let face = Face::parse(font_bytes, 0).map_err(|e| anyhow::anyhow!("invalid font data: {e}"))?;
    let units = face.units_per_em() as f32;
    let scale = (style.size / units.max(1.0)).max(1e-6);

    let mut path_builder = Path::builder();
    let mut x_cursor = 0.0f32;
    for ch in text.chars() {
        let Some(gid) = face.glyph_index(ch) else {
            continue;
        };
        let mut sink = PathSink {
            builder: &mut path_builder,
            scale,
            offset: Vec2::new(x_cursor, 0.0),
            open: false,
        };
        // whitespace has no outline; only the advance matters
        _ = face.outline_glyph(gid, &mut sink);
        sink.finish();
        x_cursor += face.glyph_hor_advance(gid).unwrap_or(0) as f32 * scale;
    }
    let path = path_builder.build();

    extrude_path(&path, style)
}

/// Build every line, center each on its own bounds, and stack them top to
/// bottom `line_spacing` apart around y = 0.
pub fn build_text_block(
    font_bytes: &[u8],
    lines: &[&str],
    style: &TextStyle,
    line_spacing: f32,
) -> anyhow::Result<MeshBuffers> {
    let mut block = MeshBuffers::default();
    for (i, line) in lines.iter().enumerate() {
        let mut mesh = build_text_line(font_bytes, line, style)?;
        mesh.center();
        mesh.translate(Vec3::new(0.0, line_offset_y(lines.len(), i, line_spacing), 0.0));
        block.append(&mesh);
    }
    Ok(block)
}

/// Vertical offset of line `index` in a block of `count` lines centered on 0.
#[inline]
pub fn line_offset_y(count: usize, index: usize, line_spacing: f32) -> f32 {
    let mid = (count.max(1) - 1) as f32 * 0.5;
    (mid - index as f32) * line_spacing
}

fn extrude_path(path: &Path, style: &TextStyle) -> anyhow::Result<MeshBuffers> {
    let depth = style.depth.max(0.0);
    let tol = style.tolerance.max(1e-5);

    let mut caps: VertexBuffers<Vec2, u32> = VertexBuffers::new();
    let mut tess = FillTessellator::new();
    tess.tessellate_path(
        path,
        &FillOptions::tolerance(tol).with_fill_rule(FillRule::NonZero),
        &mut BuffersBuilder::new(&mut caps, |v: FillVertex| {
            Vec2::new(v.position().x, v.position().y)
        }),
    )
    .map_err(|e| anyhow::anyhow!("tessellation failed: {:?}", e))?;

    let mut mesh = MeshBuffers::with_capacity(caps.vertices.len() * 2, caps.indices.len() * 2);

    // front cap
    for p in &caps.vertices {
        mesh.push_vertex(Vec3::new(p.x, p.y, depth), Vec3::Z, planar_uv(*p, style.size));
    }
    mesh.indices.extend_from_slice(&caps.indices);

    // back cap (reverse winding)
    let back = mesh.vertex_count() as u32;
    for p in &caps.vertices {
        mesh.push_vertex(Vec3::new(p.x, p.y, 0.0), -Vec3::Z, planar_uv(*p, style.size));
    }
    for tri in caps.indices.chunks_exact(3) {
        mesh.indices
            .extend_from_slice(&[back + tri[0], back + tri[2], back + tri[1]]);
    }

    let contours = flatten_contours(path, tol);
    // TrueType outlines keep the filled area on the right of travel, CFF on the left
    let total_area: f32 = contours.iter().map(|c| signed_area(c)).sum();
    let outward_left = total_area < 0.0;
    for contour in &contours {
        let n = contour.len();
        for i in 0..n {
            let (p0, p1) = (contour[i], contour[(i + 1) % n]);
            add_side_wall(&mut mesh, p0, p1, outward_left, depth, style);
        }
    }

    Ok(mesh)
}

fn flatten_contours(path: &Path, tol: f32) -> Vec<Vec<Vec2>> {
    let mut contours: Vec<Vec<Vec2>> = Vec::new();
    let mut current: Vec<Vec2> = Vec::new();
    let v = |p: math::Point| Vec2::new(p.x, p.y);
    for e in path.iter() {
        match e {
            Event::Begin { at } => {
                current.clear();
                current.push(v(at));
            }
            Event::Line { to, .. } => current.push(v(to)),
            Event::Quadratic { from, ctrl, to } => {
                let seg = lyon_geom::QuadraticBezierSegment { from, ctrl, to };
                seg.for_each_flattened(tol, &mut |ls: &lyon_geom::LineSegment<f32>| {
                    current.push(v(ls.to));
                });
            }
            Event::Cubic {
                from,
                ctrl1,
                ctrl2,
                to,
            } => {
                let seg = lyon_geom::CubicBezierSegment {
                    from,
                    ctrl1,
                    ctrl2,
                    to,
                };
                seg.for_each_flattened(tol, &mut |ls: &lyon_geom::LineSegment<f32>| {
                    current.push(v(ls.to));
                });
            }
            Event::End { .. } => {
                if current.len() > 1 && current.first() == current.last() {
                    current.pop();
                }
                if current.len() >= 3 {
                    contours.push(std::mem::take(&mut current));
                } else {
                    current.clear();
                }
            }
        }
    }
    contours
}

fn signed_area(ring: &[Vec2]) -> f32 {
    let n = ring.len();
    (0..n)
        .map(|i| {
            let (a, b) = (ring[i], ring[(i + 1) % n]);
            a.x * b.y - b.x * a.y
        })
        .sum::<f32>()
        * 0.5
}

#[inline]
fn planar_uv(p: Vec2, size: f32) -> [f32; 2] {
    let s = size.max(1e-6);
    [p.x / s, -p.y / s]
}

fn add_side_wall(
    mesh: &mut MeshBuffers,
    p0: Vec2,
    p1: Vec2,
    outward_left: bool,
    depth: f32,
    style: &TextStyle,
) {
    let edge = p1 - p0;
    let len = edge.length();
    if len < 1e-6 {
        return;
    }
    let n = if outward_left {
        Vec2::new(-edge.y, edge.x) / len
    } else {
        Vec2::new(edge.y, -edge.x) / len
    };

    let bw = style.bevel.max(0.0).min(depth * 0.5);
    let segs = style.bevel_segments.max(1);

    // rings of (z, outward offset) from the back cap to the front cap
    let mut rings: Vec<(f32, f32)> = Vec::with_capacity(2 * segs as usize + 2);
    if bw > 0.0 {
        for k in 0..=segs {
            let a = k as f32 / segs as f32 * std::f32::consts::FRAC_PI_2;
            rings.push((bw * (1.0 - a.cos()), bw * a.sin()));
        }
        for k in (0..=segs).rev() {
            let a = k as f32 / segs as f32 * std::f32::consts::FRAC_PI_2;
            rings.push((depth - bw * (1.0 - a.cos()), bw * a.sin()));
        }
    } else {
        rings.push((0.0, 0.0));
        rings.push((depth, 0.0));
    }

    let n3 = Vec3::new(n.x, n.y, 0.0);
    for pair in rings.windows(2) {
        let (z0, o0) = pair[0];
        let (z1, o1) = pair[1];
        if (z1 - z0).abs() < 1e-7 && (o1 - o0).abs() < 1e-7 {
            continue;
        }
        let a0 = p0 + n * o0;
        let b0 = p1 + n * o0;
        let a1 = p0 + n * o1;
        let b1 = p1 + n * o1;
        let base = mesh.vertex_count() as u32;
        mesh.push_vertex(Vec3::new(a0.x, a0.y, z0), n3, [0.0, z0]);
        mesh.push_vertex(Vec3::new(b0.x, b0.y, z0), n3, [len, z0]);
        mesh.push_vertex(Vec3::new(b1.x, b1.y, z1), n3, [len, z1]);
        mesh.push_vertex(Vec3::new(a1.x, a1.y, z1), n3, [0.0, z1]);
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
}
