//! Decorative particle background for a web page: a drifting field of
//! particles attracted to the mouse and joined by proximity lines, plus a
//! one-shot burst triggered by the Konami code.
//!
//! The simulation (`field`, `explosion`) is plain Rust producing
//! [`DrawCommand`]s; `canvas` wires it to the DOM through `wasm-bindgen`.

mod utils;

pub mod canvas;
pub mod color;
pub mod draw;
pub mod explosion;
pub mod field;
pub mod frame_loop;
pub mod input;
pub mod konami;
pub mod particle;
pub mod renderer;

use wasm_bindgen::prelude::*;

pub use canvas::ParticleCanvas;
pub use color::Color;
pub use draw::DrawCommand;
pub use explosion::{Explosion, ExplosionConfig, Spark};
pub use field::{Edge, FieldConfig, ParticleField};
pub use input::{InputSnapshot, PointerTracker};
pub use konami::{KeySequence, KONAMI_CODE};
pub use particle::Particle;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

/// Mounts the field on `canvas_id` and starts animating. A page without the
/// canvas gets nothing back and nothing runs.
#[wasm_bindgen]
pub fn run(canvas_id: &str) -> Option<ParticleCanvas> {
    initialize();
    let particle_canvas = ParticleCanvas::mount(canvas_id)?;
    particle_canvas.start();
    Some(particle_canvas)
}
