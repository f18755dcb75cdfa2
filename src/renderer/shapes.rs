//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::Vertex;
use crate::sim::Polygon;

/// World to screen: origin moves to the window centre and y points down
pub fn to_screen(p: Vec2, screen: Vec2) -> Vec2 {
    Vec2::new(p.x + screen.x / 2.0, screen.y / 2.0 - p.y)
}

/// Triangle list for a filled convex polygon, fanned from its first vertex
pub fn polygon_fill(poly: &Polygon, color: [f32; 4], screen: Vec2) -> Vec<Vertex> {
    let pts = poly.points();
    if pts.len() < 3 {
        return Vec::new();
    }

    let mut vertices = Vec::with_capacity((pts.len() - 2) * 3);
    let anchor = to_screen(pts[0], screen);

    for pair in pts[1..].windows(2) {
        let p1 = to_screen(pair[0], screen);
        let p2 = to_screen(pair[1], screen);
        vertices.push(Vertex::new(anchor.x, anchor.y, color));
        vertices.push(Vertex::new(p1.x, p1.y, color));
        vertices.push(Vertex::new(p2.x, p2.y, color));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Vec2 = Vec2::new(1024.0, 768.0);

    #[test]
    fn test_origin_is_screen_centre() {
        assert_eq!(to_screen(Vec2::ZERO, SCREEN), Vec2::new(512.0, 384.0));
        assert_eq!(to_screen(Vec2::new(10.0, 20.0), SCREEN), Vec2::new(522.0, 364.0));
        // y grows downward on screen
        assert!(to_screen(Vec2::new(0.0, 100.0), SCREEN).y < to_screen(Vec2::ZERO, SCREEN).y);
    }

    #[test]
    fn test_fan_triangle_count() {
        let hex = Polygon::regular(6, 10.0);
        let verts = polygon_fill(&hex, [0.0; 4], SCREEN);
        assert_eq!(verts.len(), 4 * 3);
        // Every triangle shares the first vertex
        for tri in verts.chunks(3) {
            assert_eq!(tri[0], verts[0]);
        }
    }
}
