//! WebGPU client for the endless runner
//!
//! The simulation lives in `game_core`; this crate wires the browser clock and
//! keyboard into it and draws each snapshot as instanced rectangles.
//! Canvas surfaces only exist on wasm32, so the GPU and runtime modules are gated.

pub mod camera;
pub mod input;
pub mod mesh;
pub mod scene;
pub mod simulation;
pub mod state;

#[cfg(target_arch = "wasm32")]
pub mod renderer;

#[cfg(target_arch = "wasm32")]
mod app;

#[cfg(target_arch = "wasm32")]
pub use app::*;
