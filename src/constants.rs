//! Simulation-wide constants.

/// Target frames per second for a hosting loop.
pub const FPS: f64 = 60.0;

/// Duration of one fixed frame, in seconds. Callers are expected to clamp
/// `dt` to at most this value before stepping the world.
pub const SECS_PER_FRAME: f64 = 1.0 / FPS;

/// Conversion factor from meters to pixels. Gravity is specified in
/// m/s² and scaled by this factor when applied as a force, since body
/// positions live in pixel space.
pub const PIXELS_PER_METER: f64 = 50.0;
