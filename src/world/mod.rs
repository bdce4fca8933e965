//! The simulation world and its step pipeline.

use log::{debug, trace};

use crate::collision::detection::check_collision;
use crate::collision::Contact;
use crate::constants::PIXELS_PER_METER;
use crate::constraints::{Constraint, JointConstraint, PenetrationConstraint};
use crate::math::Vec2;
use crate::objects::Body;

/// A 2D physics world: bodies, persistent joints, registered external
/// forces, and the per-step solver pipeline.
///
/// Gravity is a scalar acceleration in m/s^2 along +y (screen-down);
/// it is scaled by [`PIXELS_PER_METER`] when applied, since positions
/// live in pixel space.
pub struct World {
    pub bodies: Vec<Body>,
    joints: Vec<JointConstraint>,
    forces: Vec<Vec2>,
    torques: Vec<f64>,
    /// Contacts found during the most recent step, for the whole frame.
    pub contacts: Vec<Contact>,
    pub gravity: f64,
    /// Number of solver passes over all constraints per step.
    pub solver_iterations: usize,
    frame: u64,
}

impl World {
    pub fn new(gravity: f64) -> Self {
        Self {
            bodies: Vec::new(),
            joints: Vec::new(),
            forces: Vec::new(),
            torques: Vec::new(),
            contacts: Vec::new(),
            gravity,
            solver_iterations: 5,
            frame: 0,
        }
    }

    /// Adds a body and returns its index, used to identify it in contacts
    /// and joints.
    pub fn add_body(&mut self, body: Body) -> usize {
        self.bodies.push(body);
        self.bodies.len() - 1
    }

    pub fn add_joint(&mut self, joint: JointConstraint) {
        self.joints.push(joint);
    }

    /// Registers a constant force applied to every body each step.
    pub fn add_force(&mut self, force: Vec2) {
        self.forces.push(force);
    }

    /// Registers a constant torque applied to every body each step.
    pub fn add_torque(&mut self, torque: f64) {
        self.torques.push(torque);
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Advances the simulation by `dt` seconds.
    ///
    /// A `dt` of zero or less is a pause: nothing moves and the frame
    /// counter does not advance.
    pub fn step(&mut self, dt: f64) {
        if dt <= 0.0 {
            return;
        }
        self.frame += 1;

        // Weight plus registered external forces and torques
        for body in &mut self.bodies {
            let weight = Vec2::new(0.0, self.gravity * body.mass * PIXELS_PER_METER);
            body.add_force(weight);
            for &force in &self.forces {
                body.add_force(force);
            }
            for &torque in &self.torques {
                body.add_torque(torque);
            }
        }

        for body in &mut self.bodies {
            body.integrate_forces(dt);
        }

        // Narrow phase over every body pair; contacts are kept for the
        // whole frame and each becomes an ephemeral constraint
        self.contacts.clear();
        for body in &mut self.bodies {
            body.is_colliding = false;
        }

        let mut penetrations: Vec<PenetrationConstraint> = Vec::new();
        for i in 0..self.bodies.len() {
            for j in (i + 1)..self.bodies.len() {
                let found = check_collision(&self.bodies[i], i, &self.bodies[j], j);
                for contact in found {
                    trace!(
                        "frame {}: contact {}-{} depth {:.4} normal ({:.3}, {:.3})",
                        self.frame,
                        contact.a,
                        contact.b,
                        contact.depth,
                        contact.normal.x,
                        contact.normal.y
                    );
                    penetrations.push(PenetrationConstraint::from_contact(&self.bodies, &contact));
                    self.bodies[contact.a].is_colliding = true;
                    self.bodies[contact.b].is_colliding = true;
                    self.contacts.push(contact);
                }
            }
        }

        // Sequential impulse solve: joints first, then penetrations
        for joint in &mut self.joints {
            joint.pre_solve(&mut self.bodies, dt);
        }
        for penetration in &mut penetrations {
            penetration.pre_solve(&mut self.bodies, dt);
        }
        for _ in 0..self.solver_iterations {
            for joint in &mut self.joints {
                joint.solve(&mut self.bodies);
            }
            for penetration in &mut penetrations {
                penetration.solve(&mut self.bodies);
            }
        }
        for joint in &mut self.joints {
            joint.post_solve(&mut self.bodies);
        }
        for penetration in &mut penetrations {
            penetration.post_solve(&mut self.bodies);
        }

        for body in &mut self.bodies {
            body.integrate_velocities(dt);
        }

        debug!(
            "frame {}: {} bodies, {} joints, {} contacts",
            self.frame,
            self.bodies.len(),
            self.joints.len(),
            self.contacts.len()
        );
    }
}
