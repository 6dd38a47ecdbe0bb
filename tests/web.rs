//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use particle_field::frame_loop::FrameLoop;
use particle_field::ParticleCanvas;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

wasm_bindgen_test_configure!(run_in_browser);

fn add_canvas(id: &str) -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    canvas.set_id(id);
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

async fn next_frames(count: u32) {
    for _ in 0..count {
        let promise = js_sys::Promise::new(&mut |resolve, _reject| {
            web_sys::window()
                .unwrap()
                .request_animation_frame(&resolve)
                .unwrap();
        });
        JsFuture::from(promise).await.unwrap();
    }
}

fn painted_pixels(canvas: &HtmlCanvasElement, x: f64, y: f64, w: f64, h: f64) -> usize {
    let ctx = canvas
        .get_context("2d")
        .unwrap()
        .unwrap()
        .dyn_into::<CanvasRenderingContext2d>()
        .unwrap();
    let data = ctx.get_image_data(x, y, w, h).unwrap().data();
    data.0.chunks(4).filter(|px| px[3] > 0).count()
}

#[wasm_bindgen_test]
fn mount_without_canvas_is_a_no_op() {
    assert!(ParticleCanvas::mount("no-such-canvas").is_none());
    assert!(particle_field::run("no-such-canvas").is_none());
}

#[wasm_bindgen_test]
fn mount_sizes_canvas_and_seeds_field() {
    let canvas = add_canvas("particle-canvas-mount");
    let field = ParticleCanvas::mount("particle-canvas-mount").unwrap();
    assert_eq!(field.particle_count(), 50);
    let window = web_sys::window().unwrap();
    let width = window.inner_width().unwrap().as_f64().unwrap() as u32;
    assert_eq!(canvas.width(), width);
    assert!(!field.is_running());
    assert_eq!(field.frame_count(), 0);
}

#[wasm_bindgen_test]
fn single_step_draws_one_frame() {
    add_canvas("particle-canvas-step");
    let field = ParticleCanvas::mount("particle-canvas-step").unwrap();
    field.set_pointer(10.0, 10.0);
    field.step();
    field.step();
    assert_eq!(field.frame_count(), 2);
    assert!(!field.is_running());
}

#[wasm_bindgen_test]
async fn running_loop_advances_until_stopped() {
    add_canvas("particle-canvas-lifecycle");
    let field = ParticleCanvas::mount("particle-canvas-lifecycle").unwrap();
    field.start();
    field.start();
    assert!(field.is_running());
    next_frames(3).await;
    let frames = field.frame_count();
    assert!(frames >= 2, "only {} frames ran", frames);

    field.stop();
    assert!(!field.is_running());
    let stopped_at = field.frame_count();
    next_frames(3).await;
    assert_eq!(field.frame_count(), stopped_at);
}

#[wasm_bindgen_test]
async fn dropped_loop_releases_its_tick() {
    let ticks = Rc::new(Cell::new(0u32));
    let frame_loop = {
        let ticks = Rc::clone(&ticks);
        FrameLoop::new(move || {
            ticks.set(ticks.get() + 1);
            true
        })
    };
    frame_loop.start();
    next_frames(2).await;
    frame_loop.stop();
    frame_loop.start();
    drop(frame_loop);

    let seen = ticks.get();
    next_frames(3).await;
    assert_eq!(ticks.get(), seen);
    // the tick closure, and its clone of the counter, are gone
    assert_eq!(Rc::strong_count(&ticks), 1);
}

#[wasm_bindgen_test]
fn resize_resets_canvas_but_keeps_particles() {
    let canvas = add_canvas("particle-canvas-resize");
    let field = ParticleCanvas::mount("particle-canvas-resize").unwrap();
    field.resize(120, 80);
    assert_eq!(canvas.width(), 120);
    assert_eq!(canvas.height(), 80);
    field.step();
    assert_eq!(field.particle_count(), 50);
}

#[wasm_bindgen_test]
async fn explosion_draws_then_finishes_on_its_own() {
    let canvas = add_canvas("particle-canvas-explode");
    let field = ParticleCanvas::mount("particle-canvas-explode").unwrap();
    field.resize(200, 150);
    field.explode();
    assert_eq!(field.active_bursts(), 1);

    next_frames(1).await;
    // sparks move at most 10px per axis in the first frame
    assert!(painted_pixels(&canvas, 80.0, 55.0, 40.0, 40.0) > 0);

    let mut waited = 1;
    while field.active_bursts() > 0 {
        assert!(waited < 150, "burst still running after {} frames", waited);
        next_frames(1).await;
        waited += 1;
    }
    assert_eq!(field.particle_count(), 50);
}
