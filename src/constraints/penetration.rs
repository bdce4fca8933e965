use crate::collision::Contact;
use crate::constraints::{apply_impulses, inv_mass_matrix, velocities, Constraint};
use crate::math::{MatMN, Vec2, VecN};
use crate::objects::Body;

/// A non-penetration constraint built from one contact point, with an
/// optional Coulomb friction row.
///
/// Row 0 keeps the bodies from approaching along the contact normal; its
/// impulse is clamped to be non-negative so the constraint can only push.
/// Row 1, present when either body has friction, opposes relative tangent
/// motion and is clamped to the friction cone `|lambda_t| <= mu * lambda_n`
/// using the accumulated normal impulse. Restitution enters through the
/// bias as a target separating velocity.
#[derive(Debug, Clone)]
pub struct PenetrationConstraint {
    pub a: usize,
    pub b: usize,
    /// Contact point on A's side, in A's local space.
    a_point: Vec2,
    /// Contact point on B's side, in B's local space.
    b_point: Vec2,
    /// Contact normal in A's local space.
    normal: Vec2,
    jacobian: MatMN,
    cached_lambda: VecN,
    bias: f64,
    friction: f64,
}

const PENETRATION_BETA: f64 = 0.2;
const PENETRATION_SLOP: f64 = 0.01;

impl PenetrationConstraint {
    /// Builds a constraint from a contact produced this frame. The contact
    /// geometry is stored in local space so it stays attached to the
    /// bodies while the solver nudges their velocities.
    pub fn from_contact(bodies: &[Body], contact: &Contact) -> Self {
        let body_a = &bodies[contact.a];
        let body_b = &bodies[contact.b];
        Self {
            a: contact.a,
            b: contact.b,
            a_point: body_a.world_to_local_space(contact.start),
            b_point: body_b.world_to_local_space(contact.end),
            normal: body_a.world_to_local_space(contact.normal),
            jacobian: MatMN::new(2, 6),
            cached_lambda: VecN::new(2),
            bias: 0.0,
            friction: 0.0,
        }
    }
}

impl Constraint for PenetrationConstraint {
    fn pre_solve(&mut self, bodies: &mut [Body], dt: f64) {
        let body_a = &bodies[self.a];
        let body_b = &bodies[self.b];

        let pa = body_a.local_to_world_space(self.a_point);
        let pb = body_b.local_to_world_space(self.b_point);
        let n = body_a.local_to_world_space(self.normal);
        let ra = pa - body_a.position;
        let rb = pb - body_b.position;

        self.jacobian.zero();
        self.jacobian[(0, 0)] = -n.x;
        self.jacobian[(0, 1)] = -n.y;
        self.jacobian[(0, 2)] = -ra.cross(n);
        self.jacobian[(0, 3)] = n.x;
        self.jacobian[(0, 4)] = n.y;
        self.jacobian[(0, 5)] = rb.cross(n);

        self.friction = body_a.friction.max(body_b.friction);
        if self.friction > 0.0 {
            let t = n.right_unit_normal();
            self.jacobian[(1, 0)] = -t.x;
            self.jacobian[(1, 1)] = -t.y;
            self.jacobian[(1, 2)] = -ra.cross(t);
            self.jacobian[(1, 3)] = t.x;
            self.jacobian[(1, 4)] = t.y;
            self.jacobian[(1, 5)] = rb.cross(t);
        }

        // Warm start with last frame's accumulated impulse
        let impulses = &self.jacobian.transpose() * &self.cached_lambda;
        apply_impulses(bodies, self.a, self.b, &impulses);

        let body_a = &bodies[self.a];
        let body_b = &bodies[self.b];
        let va = body_a.velocity
            + Vec2::new(
                -body_a.angular_velocity * ra.y,
                body_a.angular_velocity * ra.x,
            );
        let vb = body_b.velocity
            + Vec2::new(
                -body_b.angular_velocity * rb.y,
                body_b.angular_velocity * rb.x,
            );
        let vrel_dot_normal = (va - vb).dot(n);
        let e = body_a.restitution.min(body_b.restitution);

        let c = ((pb - pa).dot(-n) + PENETRATION_SLOP).min(0.0);
        self.bias = (PENETRATION_BETA / dt) * c + e * vrel_dot_normal;
    }

    fn solve(&mut self, bodies: &mut [Body]) {
        let v = velocities(&bodies[self.a], &bodies[self.b]);
        let inv_m = inv_mass_matrix(&bodies[self.a], &bodies[self.b]);

        let j_t = self.jacobian.transpose();
        let lhs = &(&self.jacobian * &inv_m) * &j_t;
        let mut rhs = &(&self.jacobian * &v) * -1.0;
        rhs[0] -= self.bias;

        let lambda = MatMN::solve_gauss_seidel(&lhs, &rhs);

        // Accumulate, then clamp the running totals: the normal impulse
        // can only push, the friction impulse stays inside the cone
        let old_lambda = self.cached_lambda.clone();
        self.cached_lambda += &lambda;
        self.cached_lambda[0] = self.cached_lambda[0].max(0.0);
        if self.friction > 0.0 {
            let max_friction = self.friction * self.cached_lambda[0];
            self.cached_lambda[1] = self.cached_lambda[1].clamp(-max_friction, max_friction);
        }

        let delta = &self.cached_lambda - &old_lambda;
        let impulses = &j_t * &delta;
        apply_impulses(bodies, self.a, self.b, &impulses);
    }

    fn post_solve(&mut self, _bodies: &mut [Body]) {}
}
