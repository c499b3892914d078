//! Axis-aligned rectangle geometry
//!
//! Every entity and projectile collides as an axis-aligned rectangle,
//! stored as a center position plus a size. The playfield itself is a
//! `Rect` anchored at the origin.

use glam::Vec2;

/// An axis-aligned rectangle (center + size)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Center position
    pub center: Vec2,
    /// Full width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    /// Build from a top-left corner and a size
    pub fn from_top_left(top_left: Vec2, size: Vec2) -> Self {
        Self {
            center: top_left + size / 2.0,
            size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.center.x - self.size.x / 2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.center.x + self.size.x / 2.0
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y - self.size.y / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y + self.size.y / 2.0
    }

    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.left(), self.top())
    }

    /// AABB overlap test (touching edges do not count as overlap)
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// True once the rect lies entirely outside `bounds` on any one axis
    pub fn fully_outside(&self, bounds: &Rect) -> bool {
        self.right() < bounds.left()
            || self.left() > bounds.right()
            || self.bottom() < bounds.top()
            || self.top() > bounds.bottom()
    }

    /// Clamp the rect's center so it lies entirely within `bounds`
    ///
    /// If the rect is wider/taller than the bounds the center is pinned to
    /// the bounds center on that axis.
    pub fn clamp_within(&mut self, bounds: &Rect) {
        let half = self.size / 2.0;
        let min = Vec2::new(bounds.left() + half.x, bounds.top() + half.y);
        let max = Vec2::new(bounds.right() - half.x, bounds.bottom() - half.y);
        self.center.x = if min.x <= max.x {
            self.center.x.clamp(min.x, max.x)
        } else {
            bounds.center.x
        };
        self.center.y = if min.y <= max.y {
            self.center.y.clamp(min.y, max.y)
        } else {
            bounds.center.y
        };
    }
}

/// The playfield rectangle, anchored at the origin
pub fn playfield() -> Rect {
    use crate::consts::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
    Rect::from_top_left(
        Vec2::ZERO,
        Vec2::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT),
    )
}
