pub mod color;
pub mod constants;
pub mod firework;
pub mod paint;
pub mod particle;
pub mod scene;

pub use color::*;
pub use firework::*;
pub use paint::*;
pub use particle::*;
pub use scene::*;
