//! Collision shapes: circles and convex polygons (boxes included).

pub mod circle;
pub mod polygon;

pub use circle::Circle;
pub use polygon::{BoxShape, Polygon};

use crate::math::Vec2;

/// Moment-of-inertia factor for arbitrary polygons. Computing the exact
/// second moment of a polygon is not implemented; this constant is a
/// deliberate stand-in that keeps generic polygons rotationally sluggish.
const POLYGON_INERTIA_FACTOR: f64 = 5000.0;

/// The shape attached to a rigid body.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Polygon(Polygon),
    Box(BoxShape),
}

impl Shape {
    /// Moment of inertia per unit mass, about the shape's centroid.
    /// Multiply by the body's mass to get the actual moment of inertia.
    pub fn moment_of_inertia_factor(&self) -> f64 {
        match self {
            Shape::Circle(c) => 0.5 * c.radius * c.radius,
            Shape::Box(b) => (b.width * b.width + b.height * b.height) / 12.0,
            Shape::Polygon(_) => POLYGON_INERTIA_FACTOR,
        }
    }

    /// Refreshes world-space vertices from a body transform. No-op for
    /// circles.
    pub fn update_vertices(&mut self, rotation: f64, position: Vec2) {
        match self {
            Shape::Circle(_) => {}
            Shape::Polygon(p) => p.update_vertices(rotation, position),
            Shape::Box(b) => b.polygon.update_vertices(rotation, position),
        }
    }

    /// The underlying polygon, if this shape has one.
    pub fn polygon(&self) -> Option<&Polygon> {
        match self {
            Shape::Circle(_) => None,
            Shape::Polygon(p) => Some(p),
            Shape::Box(b) => Some(&b.polygon),
        }
    }

    /// The underlying circle, if this shape is one.
    pub fn circle(&self) -> Option<&Circle> {
        match self {
            Shape::Circle(c) => Some(c),
            _ => None,
        }
    }

    pub fn is_circle(&self) -> bool {
        matches!(self, Shape::Circle(_))
    }

    pub fn is_polygon(&self) -> bool {
        !self.is_circle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_moment_of_inertia_factors() {
        let circle = Shape::Circle(Circle::new(4.0).unwrap());
        assert_relative_eq!(circle.moment_of_inertia_factor(), 8.0);

        let boxy = Shape::Box(BoxShape::new(2.0, 4.0).unwrap());
        assert_relative_eq!(boxy.moment_of_inertia_factor(), 20.0 / 12.0);

        let tri = Shape::Polygon(
            Polygon::new(vec![
                Vec2::new(0.0, -1.0),
                Vec2::new(1.0, 1.0),
                Vec2::new(-1.0, 1.0),
            ])
            .unwrap(),
        );
        assert_relative_eq!(tri.moment_of_inertia_factor(), POLYGON_INERTIA_FACTOR);
    }

    #[test]
    fn test_shape_accessors() {
        let circle = Shape::Circle(Circle::new(1.0).unwrap());
        assert!(circle.is_circle());
        assert!(circle.circle().is_some());
        assert!(circle.polygon().is_none());

        let boxy = Shape::Box(BoxShape::new(1.0, 1.0).unwrap());
        assert!(boxy.is_polygon());
        assert!(boxy.polygon().is_some());
        assert!(boxy.circle().is_none());
    }
}
