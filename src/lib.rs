//! Sparse simulation of Conway's Game of Life.

pub mod dec;
pub mod engine;
pub mod pos;
pub mod render;
pub mod world;

pub use dec::{DecodeError, PlainGrid, RunLengthEncoded, WorldDecoder};
pub use pos::Pos2;
pub use world::World;
