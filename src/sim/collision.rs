//! Collision detection
//!
//! Everything that can kill the bird is a rectangle (pipe halves, the ground),
//! and the bird is a circle, so a single circle-vs-rect test covers it all.

use glam::Vec2;

use crate::consts::*;

/// An axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// The ground strip along the bottom of the playfield
    pub fn ground() -> Self {
        Self::new(0.0, GROUND_TOP, WIDTH, GROUND_HEIGHT)
    }
}

/// Check whether a circle overlaps an axis-aligned rectangle
///
/// Clamps the circle center into the rect to find the nearest point, then
/// compares squared distance against the squared radius. Exact - no epsilon.
/// Degenerate rects (zero width/height) reduce to a point/segment distance
/// test, which is still correct.
#[inline]
pub fn circle_intersects_rect(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let min = Vec2::new(rect.x, rect.y);
    let max = Vec2::new(rect.x + rect.w, rect.y + rect.h);
    let closest = center.clamp(min, max);
    center.distance_squared(closest) <= radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_inside_rect() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(circle_intersects_rect(Vec2::new(50.0, 50.0), 5.0, &rect));
    }

    #[test]
    fn test_circle_touching_edge() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        // Center 10 to the right of the rect's right edge, radius exactly 10
        assert!(circle_intersects_rect(Vec2::new(110.0, 50.0), 10.0, &rect));
        // Just out of reach
        assert!(!circle_intersects_rect(Vec2::new(110.1, 50.0), 10.0, &rect));
    }

    #[test]
    fn test_circle_near_corner() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        // Diagonal distance from (105, 105) to corner (100, 100) is ~7.07
        assert!(circle_intersects_rect(Vec2::new(105.0, 105.0), 8.0, &rect));
        assert!(!circle_intersects_rect(Vec2::new(105.0, 105.0), 7.0, &rect));
    }

    #[test]
    fn test_degenerate_rect_is_point_test() {
        let point = Rect::new(40.0, 40.0, 0.0, 0.0);
        assert!(circle_intersects_rect(Vec2::new(43.0, 44.0), 5.0, &point));
        assert!(!circle_intersects_rect(Vec2::new(43.0, 44.0), 4.9, &point));

        // Zero height: horizontal segment
        let segment = Rect::new(0.0, 10.0, 100.0, 0.0);
        assert!(circle_intersects_rect(Vec2::new(50.0, 13.0), 3.0, &segment));
        assert!(!circle_intersects_rect(Vec2::new(50.0, 13.5), 3.0, &segment));
    }

    #[test]
    fn test_ground_rect_spans_bottom_strip() {
        let ground = Rect::ground();
        assert_eq!(ground.y, GROUND_TOP);
        assert_eq!(ground.h, GROUND_HEIGHT);
        // Bird resting just above the ground does not collide
        let above = Vec2::new(BIRD_X, GROUND_TOP - BIRD_RADIUS - 0.1);
        assert!(!circle_intersects_rect(above, BIRD_RADIUS, &ground));
        // Bird overlapping the strip does
        let touching = Vec2::new(BIRD_X, GROUND_TOP - BIRD_RADIUS + 0.1);
        assert!(circle_intersects_rect(touching, BIRD_RADIUS, &ground));
    }
}
