pub mod advance;
pub mod ball;
pub mod bounds;
pub mod config;
pub mod error;
pub mod logging;
#[cfg(feature = "window")]
pub mod render;
pub mod simulation;
pub mod world_gen;
