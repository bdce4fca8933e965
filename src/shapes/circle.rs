use crate::error::ShapeError;

/// A circle shape, defined only by its radius. Its center follows the
/// owning body's position.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    /// Creates a circle. The radius must be strictly positive.
    pub fn new(radius: f64) -> Result<Self, ShapeError> {
        if radius <= 0.0 {
            return Err(ShapeError::InvalidRadius(radius));
        }
        Ok(Self { radius })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_new() {
        let c = Circle::new(5.0).unwrap();
        assert_eq!(c.radius, 5.0);
    }

    #[test]
    fn test_circle_rejects_non_positive_radius() {
        assert_eq!(Circle::new(0.0), Err(ShapeError::InvalidRadius(0.0)));
        assert_eq!(Circle::new(-1.0), Err(ShapeError::InvalidRadius(-1.0)));
    }
}
