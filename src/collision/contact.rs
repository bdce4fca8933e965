use crate::math::Vec2;

/// A single contact point between two bodies, identified by their indices
/// in the world's body list.
///
/// `start` lies on body B's surface, `end` on body A's surface, and
/// `normal` points from A toward B. `depth` is the penetration distance,
/// `|end - start|`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub a: usize,
    pub b: usize,
    pub start: Vec2,
    pub end: Vec2,
    pub normal: Vec2,
    pub depth: f64,
}
