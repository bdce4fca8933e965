//! Narrow-phase collision detection.

pub mod contact;
pub mod detection;
pub mod narration;

pub use contact::Contact;
pub use detection::{check_collision, CircleRegion};
pub use narration::DetectionStep;
