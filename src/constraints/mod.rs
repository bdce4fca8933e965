//! Sequential-impulse constraints.
//!
//! Each constraint stores body indices rather than references and is
//! handed the world's body slice at solve time. A constraint lives
//! through three phases per step: `pre_solve` (build the Jacobian, warm
//! start from the cached impulse, compute the bias), `solve` (one
//! Gauss-Seidel pass over `J M^-1 J^T`, run several times by the world),
//! and `post_solve`.

pub mod joint;
pub mod penetration;

pub use joint::JointConstraint;
pub use penetration::PenetrationConstraint;

use crate::math::{MatMN, Vec2, VecN};
use crate::objects::Body;

pub trait Constraint {
    fn pre_solve(&mut self, bodies: &mut [Body], dt: f64);
    fn solve(&mut self, bodies: &mut [Body]);
    fn post_solve(&mut self, bodies: &mut [Body]);
}

/// Splits the body slice into disjoint mutable references to two bodies.
/// Panics if the indices are equal or out of bounds.
pub(crate) fn body_pair_mut(bodies: &mut [Body], a: usize, b: usize) -> (&mut Body, &mut Body) {
    assert_ne!(a, b, "constraint must reference two distinct bodies");
    if a < b {
        let (left, right) = bodies.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = bodies.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}

/// Generalized velocity vector [va.x, va.y, wa, vb.x, vb.y, wb].
pub(crate) fn velocities(a: &Body, b: &Body) -> VecN {
    let mut v = VecN::new(6);
    v[0] = a.velocity.x;
    v[1] = a.velocity.y;
    v[2] = a.angular_velocity;
    v[3] = b.velocity.x;
    v[4] = b.velocity.y;
    v[5] = b.angular_velocity;
    v
}

/// Diagonal 6x6 inverse mass matrix for the body pair. Static bodies
/// contribute zeros, which is what makes them immovable in the solve.
pub(crate) fn inv_mass_matrix(a: &Body, b: &Body) -> MatMN {
    let mut m = MatMN::new(6, 6);
    m[(0, 0)] = a.inv_mass;
    m[(1, 1)] = a.inv_mass;
    m[(2, 2)] = a.inv_i;
    m[(3, 3)] = b.inv_mass;
    m[(4, 4)] = b.inv_mass;
    m[(5, 5)] = b.inv_i;
    m
}

/// Applies a 6-dim generalized impulse [jx, jy, jw per body] to the pair.
pub(crate) fn apply_impulses(bodies: &mut [Body], a: usize, b: usize, impulses: &VecN) {
    let (body_a, body_b) = body_pair_mut(bodies, a, b);
    body_a.apply_impulse_linear(Vec2::new(impulses[0], impulses[1]));
    body_a.apply_impulse_angular(impulses[2]);
    body_b.apply_impulse_linear(Vec2::new(impulses[3], impulses[4]));
    body_b.apply_impulse_angular(impulses[5]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Circle, Shape};

    fn circle_body(mass: f64) -> Body {
        Body::new(Shape::Circle(Circle::new(1.0).unwrap()), 0.0, 0.0, mass)
    }

    #[test]
    fn test_body_pair_mut_either_order() {
        let mut bodies = vec![circle_body(1.0), circle_body(2.0), circle_body(3.0)];

        let (a, b) = body_pair_mut(&mut bodies, 0, 2);
        assert_eq!(a.mass, 1.0);
        assert_eq!(b.mass, 3.0);

        let (a, b) = body_pair_mut(&mut bodies, 2, 0);
        assert_eq!(a.mass, 3.0);
        assert_eq!(b.mass, 1.0);
    }

    #[test]
    #[should_panic]
    fn test_body_pair_mut_same_index_panics() {
        let mut bodies = vec![circle_body(1.0)];
        body_pair_mut(&mut bodies, 0, 0);
    }

    #[test]
    fn test_inv_mass_matrix_static_body_rows_are_zero() {
        let dynamic = circle_body(2.0);
        let fixed = circle_body(0.0);
        let m = inv_mass_matrix(&dynamic, &fixed);
        assert_eq!(m[(0, 0)], 0.5);
        assert_eq!(m[(3, 3)], 0.0);
        assert_eq!(m[(5, 5)], 0.0);
    }
}
