pub mod clock;
pub mod constants;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod identity;
pub mod pitch;
pub mod pointer;
pub mod render;
pub mod stroke;
pub static STROKES_WGSL: &str = include_str!("../shaders/strokes.wgsl");

pub use clock::*;
pub use constants::*;
pub use engine::*;
pub use error::*;
pub use geometry::*;
pub use identity::*;
pub use pitch::*;
pub use pointer::*;
pub use stroke::*;
