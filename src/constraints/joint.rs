use crate::constraints::{apply_impulses, inv_mass_matrix, velocities, Constraint};
use crate::math::{MatMN, Vec2, VecN};
use crate::objects::Body;

/// A distance joint pinning two bodies together at a shared anchor point.
///
/// The position constraint is C = |pb - pa|^2 = 0, where pa and pb are
/// the anchor expressed in each body's local space and mapped back to
/// world space. Drift is corrected softly through a Baumgarte bias with a
/// small slop so resting joints do not jitter.
#[derive(Debug, Clone)]
pub struct JointConstraint {
    pub a: usize,
    pub b: usize,
    /// Anchor point in body A's local space.
    a_point: Vec2,
    /// Anchor point in body B's local space.
    b_point: Vec2,
    jacobian: MatMN,
    cached_lambda: VecN,
    bias: f64,
}

const JOINT_BETA: f64 = 0.1;
const JOINT_SLOP: f64 = 0.01;

impl JointConstraint {
    /// Creates a joint between bodies `a` and `b`, anchored at a world
    /// point (typically one body's center).
    pub fn new(bodies: &[Body], a: usize, b: usize, anchor_world: Vec2) -> Self {
        Self {
            a,
            b,
            a_point: bodies[a].world_to_local_space(anchor_world),
            b_point: bodies[b].world_to_local_space(anchor_world),
            jacobian: MatMN::new(1, 6),
            cached_lambda: VecN::new(1),
            bias: 0.0,
        }
    }
}

impl Constraint for JointConstraint {
    fn pre_solve(&mut self, bodies: &mut [Body], dt: f64) {
        let pa = bodies[self.a].local_to_world_space(self.a_point);
        let pb = bodies[self.b].local_to_world_space(self.b_point);
        let ra = pa - bodies[self.a].position;
        let rb = pb - bodies[self.b].position;

        self.jacobian.zero();
        let j1 = (pa - pb) * 2.0;
        self.jacobian[(0, 0)] = j1.x;
        self.jacobian[(0, 1)] = j1.y;
        self.jacobian[(0, 2)] = ra.cross(pa - pb) * 2.0;
        let j3 = (pb - pa) * 2.0;
        self.jacobian[(0, 3)] = j3.x;
        self.jacobian[(0, 4)] = j3.y;
        self.jacobian[(0, 5)] = rb.cross(pb - pa) * 2.0;

        // Warm start with last frame's accumulated impulse
        let impulses = &self.jacobian.transpose() * &self.cached_lambda;
        apply_impulses(bodies, self.a, self.b, &impulses);

        let c = ((pb - pa).dot(pb - pa) - JOINT_SLOP).max(0.0);
        self.bias = (JOINT_BETA / dt) * c;
    }

    fn solve(&mut self, bodies: &mut [Body]) {
        let v = velocities(&bodies[self.a], &bodies[self.b]);
        let inv_m = inv_mass_matrix(&bodies[self.a], &bodies[self.b]);

        let j_t = self.jacobian.transpose();
        let lhs = &(&self.jacobian * &inv_m) * &j_t;
        let mut rhs = &(&self.jacobian * &v) * -1.0;
        rhs[0] -= self.bias;

        let lambda = MatMN::solve_gauss_seidel(&lhs, &rhs);
        self.cached_lambda += &lambda;

        let impulses = &j_t * &lambda;
        apply_impulses(bodies, self.a, self.b, &impulses);
    }

    fn post_solve(&mut self, _bodies: &mut [Body]) {}
}
