pub mod allocate;
pub mod engine;
pub mod error;
pub mod field;
pub mod params;
pub mod particle;
pub mod schedule;
pub mod shape;
pub mod style;

pub use allocate::*;
pub use engine::*;
pub use error::*;
pub use field::*;
pub use params::*;
pub use particle::*;
pub use schedule::*;
pub use shape::*;
pub use style::*;
