// Host-side tests for mesh generators and the extruded text builder.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod geometry {
    include!("../src/core/geometry.rs");
}
mod text {
    include!("../src/core/text.rs");
}

use geometry::*;
use glam::Vec3;
use text::*;

#[test]
fn box_has_expected_counts_and_extent() {
    let mesh = generate_box(2.0, 1.0, 0.5);
    assert_eq!(mesh.vertex_count(), 24);
    assert_eq!(mesh.indices.len(), 36);
    let (lo, hi) = mesh.bounds().expect("box has bounds");
    assert!((lo - Vec3::new(-1.0, -0.5, -0.25)).length() < 1e-6);
    assert!((hi - Vec3::new(1.0, 0.5, 0.25)).length() < 1e-6);
}

#[test]
fn box_faces_wind_towards_their_normals() {
    let mesh = generate_box(1.0, 1.0, 1.0);
    for tri in mesh.indices.chunks_exact(3) {
        let p = |i: u32| Vec3::from_array(mesh.positions[i as usize]);
        let face_n = (p(tri[1]) - p(tri[0])).cross(p(tri[2]) - p(tri[0]));
        let n = Vec3::from_array(mesh.normals[tri[0] as usize]);
        assert!(face_n.dot(n) > 0.0);
    }
}

#[test]
fn torus_counts_and_radius() {
    let mesh = generate_torus(0.6, 0.25, 20, 45);
    assert_eq!(mesh.vertex_count(), 21 * 46);
    assert_eq!(mesh.triangle_count(), 20 * 45 * 2);
    for p in &mesh.positions {
        let p = Vec3::from_array(*p);
        let ring = Vec3::new(p.x, p.y, 0.0).length();
        let d = ((ring - 0.6).powi(2) + p.z * p.z).sqrt();
        assert!((d - 0.25).abs() < 1e-4);
    }
    assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertex_count()));
}

#[test]
fn torus_clamps_degenerate_segments() {
    let mesh = generate_torus(1.0, 0.1, 0, 1);
    assert!(!mesh.is_empty());
}

#[test]
fn center_moves_bounds_to_origin() {
    let mut mesh = generate_box(1.0, 1.0, 1.0);
    mesh.translate(Vec3::new(3.0, -2.0, 1.0));
    let offset = mesh.center();
    assert!((offset - Vec3::new(-3.0, 2.0, -1.0)).length() < 1e-5);
    let (lo, hi) = mesh.bounds().expect("bounds");
    assert!(((lo + hi) * 0.5).length() < 1e-5);
}

#[test]
fn center_of_empty_mesh_is_noop() {
    let mut mesh = MeshBuffers::default();
    assert_eq!(mesh.center(), Vec3::ZERO);
    assert!(mesh.bounds().is_none());
}

#[test]
fn append_rebases_indices() {
    let mut a = generate_box(1.0, 1.0, 1.0);
    let b = generate_box(1.0, 1.0, 1.0);
    a.append(&b);
    assert_eq!(a.vertex_count(), 48);
    assert_eq!(a.indices.len(), 72);
    assert_eq!(*a.indices.iter().max().unwrap_or(&0), 47);
}

#[test]
fn text_rejects_invalid_font_data() {
    let err = build_text_line(b"not a font", "Hello", &TextStyle::default());
    assert!(err.is_err());
    let err = build_text_block(&[], &["a", "b", "c"], &TextStyle::default(), 0.8);
    assert!(err.is_err());
}

#[test]
fn line_offsets_stack_top_to_bottom_around_zero() {
    let ys: Vec<f32> = (0..3).map(|i| line_offset_y(3, i, 0.8)).collect();
    assert!((ys[0] - 0.8).abs() < 1e-6);
    assert!(ys[1].abs() < 1e-6);
    assert!((ys[2] + 0.8).abs() < 1e-6);
    assert_eq!(line_offset_y(1, 0, 0.8), 0.0);
}

#[test]
fn default_text_style_is_buildable() {
    let s = TextStyle::default();
    assert!(s.size > 0.0 && s.depth > 0.0);
    assert!(s.bevel * 2.0 <= s.depth);
    assert!(s.tolerance > 0.0);
}

// DejaVu Sans Bold, redistributed under the DejaVu/Bitstream Vera font license
// (see fixtures/DejaVuSans-LICENSE.txt).
static FONT: &[u8] = include_bytes!("fixtures/DejaVuSans-Bold.ttf");

#[test]
fn text_line_builds_indexed_mesh() {
    let mesh = build_text_line(FONT, "Creative", &TextStyle::default()).expect("valid font");
    assert!(!mesh.is_empty());
    assert_eq!(mesh.indices.len() % 3, 0);
    assert_eq!(mesh.normals.len(), mesh.vertex_count());
    assert_eq!(mesh.uvs.len(), mesh.vertex_count());
    assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertex_count()));
    let (lo, hi) = mesh.bounds().expect("bounds");
    // glyphs advance to the right of the origin
    assert!(lo.x > -0.1 && hi.x > 1.0);
}

#[test]
fn centered_text_lines_sit_on_origin() {
    for line in constants::TEXT_LINES {
        let mut mesh = build_text_line(FONT, line, &TextStyle::default()).expect("valid font");
        mesh.center();
        let (lo, hi) = mesh.bounds().expect("bounds");
        let c = (lo + hi) * 0.5;
        assert!(c.length() < 1e-4, "{line}: {c:?}");
    }
}

#[test]
fn text_block_spans_depth_and_stacks_lines() {
    let style = TextStyle::default();
    let block = build_text_block(FONT, &constants::TEXT_LINES, &style, 0.8).expect("valid font");
    let (lo, hi) = block.bounds().expect("bounds");
    assert!(((hi.z - lo.z) - style.depth).abs() < 1e-5);
    // three lines 0.8 apart span more than two line spacings
    assert!(hi.y - lo.y > 1.6);
    assert!(((lo.x + hi.x) * 0.5).abs() < 1e-3);

    let per_line: usize = constants::TEXT_LINES
        .iter()
        .map(|l| build_text_line(FONT, l, &style).map(|m| m.vertex_count()).unwrap_or(0))
        .sum();
    assert_eq!(block.vertex_count(), per_line);
}

#[test]
fn blank_text_gives_empty_mesh() {
    for text in ["", "   "] {
        let mesh = build_text_line(FONT, text, &TextStyle::default()).expect("valid font");
        assert!(mesh.is_empty(), "{text:?}");
        assert!(mesh.bounds().is_none());
    }
}
