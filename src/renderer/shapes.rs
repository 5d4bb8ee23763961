//! Shape generation for 2D primitives
//!
//! Every function emits triangle-list vertices in screen coordinates;
//! the pipeline maps them to NDC at upload time.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a ring (hollow circle)
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        let inner1 = center + Vec2::from_angle(theta1) * inner_radius;
        let outer1 = center + Vec2::from_angle(theta1) * outer_radius;
        let inner2 = center + Vec2::from_angle(theta2) * inner_radius;
        let outer2 = center + Vec2::from_angle(theta2) * outer_radius;

        // Two triangles per segment
        vertices.push(Vertex::new(inner1.x, inner1.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(inner2.x, inner2.y, color));

        vertices.push(Vertex::new(inner2.x, inner2.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(outer2.x, outer2.y, color));
    }

    vertices
}

/// Stroked circle: a ring whose band straddles `radius` with the given
/// stroke width, matching how an outlined circle is drawn
pub fn stroke_circle(
    center: Vec2,
    radius: f32,
    stroke_width: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let half = stroke_width / 2.0;
    let inner = (radius - half).max(0.0);
    ring(center, inner, radius + half, color, segments)
}

/// Thick line as a single quad
pub fn line(from: Vec2, to: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let a = from + perp;
    let b = from - perp;
    let c = to + perp;
    let d = to - perp;

    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(d.x, d.y, color),
    ]
}

/// Axis-aligned filled rectangle
pub fn rect(top_left: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let a = top_left;
    let b = top_left + Vec2::new(size.x, 0.0);
    let c = top_left + Vec2::new(0.0, size.y);
    let d = top_left + size;

    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(d.x, d.y, color),
    ]
}

/// Filled rectangle with rounded corners, built as a fan around the
/// rect center over the rounded outline
pub fn rounded_rect(top_left: Vec2, size: Vec2, corner: f32, color: [f32; 4]) -> Vec<Vertex> {
    let corner = corner.min(size.x / 2.0).min(size.y / 2.0);
    let center = top_left + size / 2.0;

    // Arc centers in corner order, each covering a quarter turn
    let arcs = [
        (
            top_left + size - Vec2::splat(corner), // bottom-right
            0.0,
        ),
        (
            top_left + Vec2::new(corner, size.y - corner), // bottom-left
            PI / 2.0,
        ),
        (
            top_left + Vec2::splat(corner), // top-left
            PI,
        ),
        (
            top_left + Vec2::new(size.x - corner, corner), // top-right
            3.0 * PI / 2.0,
        ),
    ];

    const ARC_STEPS: u32 = 4;
    let mut outline = Vec::with_capacity((arcs.len() as u32 * (ARC_STEPS + 1)) as usize);
    for (arc_center, start) in arcs {
        for i in 0..=ARC_STEPS {
            let theta = start + (i as f32 / ARC_STEPS as f32) * (PI / 2.0);
            outline.push(arc_center + Vec2::from_angle(theta) * corner);
        }
    }

    let mut vertices = Vec::with_capacity(outline.len() * 3);
    for i in 0..outline.len() {
        let p1 = outline[i];
        let p2 = outline[(i + 1) % outline.len()];
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(p1.x, p1.y, color));
        vertices.push(Vertex::new(p2.x, p2.y, color));
    }

    vertices
}

/// Fan triangulation of a convex (or star-shaped) polygon from its centroid
pub fn polygon(points: &[Vec2], color: [f32; 4]) -> Vec<Vertex> {
    if points.len() < 3 {
        return Vec::new();
    }
    let centroid = points.iter().copied().sum::<Vec2>() / points.len() as f32;

    let mut vertices = Vec::with_capacity(points.len() * 3);
    for i in 0..points.len() {
        let p1 = points[i];
        let p2 = points[(i + 1) % points.len()];
        vertices.push(Vertex::new(centroid.x, centroid.y, color));
        vertices.push(Vertex::new(p1.x, p1.y, color));
        vertices.push(Vertex::new(p2.x, p2.y, color));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

    #[test]
    fn test_circle_vertex_count() {
        assert_eq!(circle(Vec2::ZERO, 10.0, WHITE, 24).len(), 24 * 3);
    }

    #[test]
    fn test_ring_stays_in_band() {
        let verts = ring(Vec2::ZERO, 8.0, 10.0, WHITE, 32);
        assert_eq!(verts.len(), 32 * 6);
        for v in &verts {
            let r = Vec2::from_slice(&v.position).length();
            assert!(r >= 8.0 - 1e-3 && r <= 10.0 + 1e-3);
        }
    }

    #[test]
    fn test_stroke_circle_clamps_inner_radius() {
        // Stroke wider than the radius must not produce a negative inner edge
        let verts = stroke_circle(Vec2::ZERO, 2.0, 6.0, WHITE, 16);
        for v in &verts {
            let r = Vec2::from_slice(&v.position).length();
            assert!(r <= 5.0 + 1e-3);
        }
    }

    #[test]
    fn test_line_is_one_quad() {
        let verts = line(Vec2::ZERO, Vec2::new(10.0, 0.0), 2.0, WHITE);
        assert_eq!(verts.len(), 6);
        // Width is symmetric around the segment
        assert!(verts.iter().any(|v| (v.position[1] - 1.0).abs() < 1e-5));
        assert!(verts.iter().any(|v| (v.position[1] + 1.0).abs() < 1e-5));
    }

    #[test]
    fn test_rounded_rect_stays_inside_bounds() {
        let verts = rounded_rect(Vec2::new(20.0, 20.0), Vec2::splat(40.0), 8.0, WHITE);
        for v in &verts {
            assert!(v.position[0] >= 20.0 - 1e-3 && v.position[0] <= 60.0 + 1e-3);
            assert!(v.position[1] >= 20.0 - 1e-3 && v.position[1] <= 60.0 + 1e-3);
        }
    }

    #[test]
    fn test_polygon_needs_three_points() {
        assert!(polygon(&[Vec2::ZERO, Vec2::ONE], WHITE).is_empty());
        assert_eq!(
            polygon(
                &[Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(0.0, 10.0)],
                WHITE
            )
            .len(),
            9
        );
    }
}
