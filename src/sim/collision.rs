//! Axis-aligned bounding-box collision
//!
//! Every entity is a square sprite, so a box is just a top-left corner plus a
//! size. Overlap is strict: boxes that only share an edge do not collide.

use glam::Vec2;

/// An axis-aligned box (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Square box with edge length `size`
    pub fn square(min: Vec2, size: f32) -> Self {
        Self::new(min, Vec2::splat(size))
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size / 2.0
    }

    /// Grow the box by `margin` on every side
    pub fn expand(&self, margin: f32) -> Self {
        Self::new(
            self.min - Vec2::splat(margin),
            self.size + Vec2::splat(2.0 * margin),
        )
    }

    /// Strict overlap test (touching edges do not count)
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        self.min.x < b_max.x
            && a_max.x > other.min.x
            && self.min.y < b_max.y
            && a_max.y > other.min.y
    }
}

/// Anything with a collision box
pub trait Bounded {
    fn bounds(&self) -> Aabb;
}

/// Check whether two entities overlap
#[inline]
pub fn collides<A: Bounded + ?Sized, B: Bounded + ?Sized>(a: &A, b: &B) -> bool {
    a.bounds().overlaps(&b.bounds())
}

/// Clamp a top-left position so a box of `size` stays inside `arena`
///
/// When the arena is smaller than the box, the lower bound (0) wins.
#[inline]
pub fn clamp_to_arena(pos: Vec2, size: f32, arena: Vec2) -> Vec2 {
    let max = arena - Vec2::splat(size);
    Vec2::new(pos.x.min(max.x).max(0.0), pos.y.min(max.y).max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap() {
        let a = Aabb::square(Vec2::new(0.0, 0.0), 100.0);
        let b = Aabb::square(Vec2::new(50.0, 50.0), 80.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_edge_is_not_overlap() {
        // player.x + player.size == shark.x
        let player = Aabb::square(Vec2::new(100.0, 200.0), 100.0);
        let shark = Aabb::square(Vec2::new(200.0, 200.0), 80.0);
        assert!(!player.overlaps(&shark));
        assert!(!shark.overlaps(&player));

        // Same along y
        let below = Aabb::square(Vec2::new(100.0, 300.0), 80.0);
        assert!(!player.overlaps(&below));
    }

    #[test]
    fn test_one_pixel_into_edge_overlaps() {
        let player = Aabb::square(Vec2::new(100.0, 200.0), 100.0);
        let shark = Aabb::square(Vec2::new(199.0, 200.0), 80.0);
        assert!(player.overlaps(&shark));
    }

    #[test]
    fn test_separated_on_one_axis() {
        let a = Aabb::square(Vec2::new(0.0, 0.0), 50.0);
        let b = Aabb::square(Vec2::new(10.0, 500.0), 50.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_contained_box_overlaps() {
        let outer = Aabb::square(Vec2::ZERO, 100.0);
        let inner = Aabb::square(Vec2::new(25.0, 25.0), 10.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_expand() {
        let a = Aabb::square(Vec2::new(10.0, 10.0), 20.0).expand(5.0);
        assert_eq!(a.min, Vec2::new(5.0, 5.0));
        assert_eq!(a.max(), Vec2::new(35.0, 35.0));
        assert_eq!(a.center(), Vec2::new(20.0, 20.0));
    }

    #[test]
    fn test_clamp_to_arena() {
        let arena = Vec2::new(800.0, 600.0);
        assert_eq!(
            clamp_to_arena(Vec2::new(-5.0, 10.0), 100.0, arena),
            Vec2::new(0.0, 10.0)
        );
        assert_eq!(
            clamp_to_arena(Vec2::new(750.0, 590.0), 100.0, arena),
            Vec2::new(700.0, 500.0)
        );
    }

    #[test]
    fn test_clamp_in_tiny_arena() {
        let arena = Vec2::new(50.0, 50.0);
        assert_eq!(clamp_to_arena(Vec2::new(30.0, 30.0), 100.0, arena), Vec2::ZERO);
    }
}
