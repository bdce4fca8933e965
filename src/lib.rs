//! A 2D rigid-body physics engine built around narrow-phase collision
//! detection (SAT + clipping, circle region classification) and a
//! warm-started sequential-impulse constraint solver with Baumgarte
//! stabilization.
//!
//! The engine is single-threaded and step-driven: a [`World`] owns the
//! bodies and persistent joints, and one call to [`World::step`] runs the
//! whole pipeline (force application, force integration, collision
//! detection, constraint solving, velocity integration).

pub mod collision;
pub mod constants;
pub mod constraints;
pub mod error;
pub mod math;
pub mod objects;
pub mod shapes;
pub mod world;

// Re-export key types for easier use
pub use collision::{check_collision, CircleRegion, Contact, DetectionStep};
pub use constraints::{Constraint, JointConstraint, PenetrationConstraint};
pub use error::ShapeError;
pub use math::matmn::MatMN;
pub use math::vec2::Vec2;
pub use math::vecn::VecN;
pub use objects::body::Body;
pub use shapes::{BoxShape, Circle, Polygon, Shape};
pub use world::World;
