use std::f64::consts::TAU;

use crate::math::Vec2;
use crate::shapes::Shape;

/// A 2D rigid body: a shape plus linear and angular state.
///
/// A body with mass <= 0 is static: it has zero inverse mass and inverse
/// moment of inertia, never integrates, and silently ignores impulses.
#[derive(Debug, Clone)]
pub struct Body {
    pub shape: Shape,

    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,

    /// Orientation in radians, kept in [0, 2*pi).
    pub rotation: f64,
    pub angular_velocity: f64,
    pub angular_acceleration: f64,

    pub sum_forces: Vec2,
    pub sum_torque: f64,

    pub mass: f64,
    pub inv_mass: f64,
    /// Moment of inertia about the centroid.
    pub i: f64,
    pub inv_i: f64,

    /// Coefficient of restitution, in [0, 1].
    pub restitution: f64,
    /// Coefficient of friction.
    pub friction: f64,

    /// Set by the world each step when this body participates in a contact.
    pub is_colliding: bool,
}

impl Body {
    /// Creates a body at (x, y). A mass of zero (or less) makes the body
    /// static. World vertices of polygon shapes are brought in sync with
    /// the initial transform.
    pub fn new(shape: Shape, x: f64, y: f64, mass: f64) -> Self {
        let inv_mass = if mass > 0.0 { 1.0 / mass } else { 0.0 };
        let i = shape.moment_of_inertia_factor() * mass;
        let inv_i = if i > 0.0 { 1.0 / i } else { 0.0 };

        let mut body = Self {
            shape,
            position: Vec2::new(x, y),
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            rotation: 0.0,
            angular_velocity: 0.0,
            angular_acceleration: 0.0,
            sum_forces: Vec2::ZERO,
            sum_torque: 0.0,
            mass,
            inv_mass,
            i,
            inv_i,
            restitution: 1.0,
            friction: 0.7,
            is_colliding: false,
        };
        body.shape.update_vertices(body.rotation, body.position);
        body
    }

    pub fn is_static(&self) -> bool {
        self.inv_mass == 0.0
    }

    /// Transforms a point from body-local space to world space.
    pub fn local_to_world_space(&self, point: Vec2) -> Vec2 {
        point.rotate(self.rotation) + self.position
    }

    /// Transforms a point from world space to body-local space.
    pub fn world_to_local_space(&self, point: Vec2) -> Vec2 {
        (point - self.position).rotate(-self.rotation)
    }

    pub fn add_force(&mut self, force: Vec2) {
        self.sum_forces += force;
    }

    pub fn add_torque(&mut self, torque: f64) {
        self.sum_torque += torque;
    }

    pub fn clear_forces(&mut self) {
        self.sum_forces = Vec2::ZERO;
    }

    pub fn clear_torque(&mut self) {
        self.sum_torque = 0.0;
    }

    /// Applies an instantaneous linear impulse at the center of mass.
    /// Static bodies are unaffected.
    pub fn apply_impulse_linear(&mut self, j: Vec2) {
        if self.is_static() {
            return;
        }
        self.velocity += j * self.inv_mass;
    }

    /// Applies an instantaneous angular impulse. Static bodies are
    /// unaffected.
    pub fn apply_impulse_angular(&mut self, j: f64) {
        if self.is_static() {
            return;
        }
        self.angular_velocity += j * self.inv_i;
    }

    /// Applies an impulse at a point given by its offset `r` from the
    /// center of mass, affecting both linear and angular velocity.
    pub fn apply_impulse_at_point(&mut self, j: Vec2, r: Vec2) {
        if self.is_static() {
            return;
        }
        self.velocity += j * self.inv_mass;
        self.angular_velocity += r.cross(j) * self.inv_i;
    }

    /// Semi-implicit Euler, force stage: accumulated forces and torque
    /// become accelerations, accelerations update velocities, then the
    /// accumulators are cleared.
    pub fn integrate_forces(&mut self, dt: f64) {
        if self.is_static() {
            return;
        }

        self.acceleration = self.sum_forces * self.inv_mass;
        self.velocity += self.acceleration * dt;

        self.angular_acceleration = self.sum_torque * self.inv_i;
        self.angular_velocity += self.angular_acceleration * dt;

        self.clear_forces();
        self.clear_torque();
    }

    /// Semi-implicit Euler, velocity stage: velocities update the
    /// transform, rotation is wrapped back into [0, 2*pi), and polygon
    /// world vertices are refreshed.
    pub fn integrate_velocities(&mut self, dt: f64) {
        if !self.is_static() {
            self.position += self.velocity * dt;
            self.rotation += self.angular_velocity * dt;

            if self.rotation >= TAU {
                self.rotation -= TAU;
            } else if self.rotation < 0.0 {
                self.rotation += TAU;
            }
        }
        self.shape.update_vertices(self.rotation, self.position);
    }
}
