pub mod matmn;
pub mod vec2;
pub mod vecn;

pub use matmn::MatMN;
pub use vec2::Vec2;
pub use vecn::VecN;
