// JS-facing particle canvas. Owns the ambient field, the pointer state and the
// DOM listeners; bursts run on their own loops and draw onto the same canvas.

use crate::explosion::Explosion;
use crate::field::ParticleField;
use crate::frame_loop::FrameLoop;
use crate::input::{InputSnapshot, PointerTracker};
use crate::konami::KeySequence;
use crate::renderer::Renderer;
use crate::utils::{self, Timer};
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlCanvasElement, KeyboardEvent, MouseEvent, Window};

struct Scene {
    canvas: HtmlCanvasElement,
    field: ParticleField,
    renderer: Renderer,
    profiling: bool,
    frames: u32,
    active_bursts: u32,
}

impl Scene {
    fn frame(&mut self, input: &InputSnapshot) {
        let _timer = Timer::when(self.profiling, "ParticleField::frame");
        self.frames = self.frames.wrapping_add(1);
        let commands = {
            let _timer = Timer::when(self.profiling, "update");
            self.field.step(input)
        };
        let _timer = Timer::when(self.profiling, "draw");
        if let Err(err) = self.renderer.draw(&commands) {
            web_sys::console::error_2(&"particle field draw failed".into(), &err);
        }
    }

    // Assigning the canvas size also wipes its pixel buffer
    fn fit_to(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.field.resize(width as f64, height as f64);
    }
}

#[wasm_bindgen]
pub struct ParticleCanvas {
    scene: Rc<RefCell<Scene>>,
    pointer: Rc<PointerTracker>,
    ambient: FrameLoop,
    _listeners: Vec<EventListener>,
}

#[wasm_bindgen]
impl ParticleCanvas {
    /// Attaches to the canvas with the given id. Returns nothing, silently,
    /// when the page has no such canvas.
    pub fn mount(canvas_id: &str) -> Option<ParticleCanvas> {
        match ParticleCanvas::try_mount(canvas_id) {
            Ok(mounted) => mounted,
            Err(err) => {
                web_sys::console::error_2(&"failed to mount particle canvas".into(), &err);
                None
            }
        }
    }

    pub fn start(&self) {
        self.ambient.start();
    }

    pub fn stop(&self) {
        self.ambient.stop();
    }

    pub fn step(&self) {
        self.ambient.step();
    }

    pub fn is_running(&self) -> bool {
        self.ambient.is_running()
    }

    /// Fires a one-shot burst from the canvas center; it stops on its own.
    pub fn explode(&self) {
        launch_explosion(&self.scene);
    }

    pub fn particle_count(&self) -> usize {
        self.scene.borrow().field.particles().len()
    }

    /// Ambient frames drawn so far, stepped or scheduled.
    pub fn frame_count(&self) -> u32 {
        self.scene.borrow().frames
    }

    /// Bursts still animating on this canvas.
    pub fn active_bursts(&self) -> u32 {
        self.scene.borrow().active_bursts
    }

    pub fn set_pointer(&self, x: f64, y: f64) {
        self.pointer.move_to(x, y);
    }

    pub fn resize(&self, width: u32, height: u32) {
        self.scene.borrow_mut().fit_to(width, height);
    }

    pub fn set_max_speed(&self, max_speed: Option<f64>) {
        self.scene.borrow_mut().field.set_max_speed(max_speed);
    }

    pub fn set_profiling(&self, profiling: bool) {
        self.scene.borrow_mut().profiling = profiling;
    }
}

impl ParticleCanvas {
    fn try_mount(canvas_id: &str) -> Result<Option<ParticleCanvas>, JsValue> {
        let window = match web_sys::window() {
            Some(window) => window,
            None => return Ok(None),
        };
        let document = match window.document() {
            Some(document) => document,
            None => return Ok(None),
        };
        let canvas = match document
            .get_element_by_id(canvas_id)
            .and_then(|element| element.dyn_into::<HtmlCanvasElement>().ok())
        {
            Some(canvas) => canvas,
            None => return Ok(None),
        };
        let renderer = match Renderer::new(&canvas) {
            Ok(renderer) => renderer,
            Err(_) => return Ok(None),
        };

        let (width, height) = viewport_size(&window)?;
        canvas.set_width(width);
        canvas.set_height(height);
        let field = ParticleField::new(width as f64, height as f64, &mut rand::thread_rng());
        let scene = Rc::new(RefCell::new(Scene {
            canvas,
            field,
            renderer,
            profiling: false,
            frames: 0,
            active_bursts: 0,
        }));
        let pointer = Rc::new(PointerTracker::new());

        let ambient = {
            let scene = Rc::clone(&scene);
            let pointer = Rc::clone(&pointer);
            FrameLoop::new(move || {
                scene.borrow_mut().frame(&pointer.snapshot());
                true
            })
        };

        let mut listeners = Vec::with_capacity(3);
        {
            let scene = Rc::clone(&scene);
            let viewport = window.clone();
            listeners.push(EventListener::new(&window, "resize", move |_event: &Event| {
                match viewport_size(&viewport) {
                    Ok((width, height)) => scene.borrow_mut().fit_to(width, height),
                    Err(err) => web_sys::console::error_1(&err),
                }
            }));
        }
        {
            let pointer = Rc::clone(&pointer);
            listeners.push(EventListener::new(&document, "mousemove", move |event: &Event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    pointer.move_to(event.client_x() as f64, event.client_y() as f64);
                }
            }));
        }
        {
            let scene = Rc::clone(&scene);
            let mut konami = KeySequence::konami();
            listeners.push(EventListener::new(&document, "keydown", move |event: &Event| {
                let event = match event.dyn_ref::<KeyboardEvent>() {
                    Some(event) => event,
                    None => return,
                };
                if konami.push(&event.code()) {
                    utils::log("konami code entered");
                    launch_explosion(&scene);
                }
            }));
        }

        Ok(Some(ParticleCanvas {
            scene,
            pointer,
            ambient,
            _listeners: listeners,
        }))
    }
}

fn launch_explosion(scene: &Rc<RefCell<Scene>>) {
    let (width, height) = scene.borrow().field.size();
    let mut burst = Explosion::new(width, height, &mut rand::thread_rng());
    scene.borrow_mut().active_bursts += 1;
    let scene = Rc::clone(scene);
    FrameLoop::spawn(move || {
        let frame = burst.step();
        let mut scene = scene.borrow_mut();
        if let Err(err) = scene.renderer.draw(&frame) {
            web_sys::console::error_2(&"explosion draw failed".into(), &err);
        }
        if burst.is_finished() {
            scene.active_bursts -= 1;
            return false;
        }
        true
    });
}

fn viewport_size(window: &Window) -> Result<(u32, u32), JsValue> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((width as u32, height as u32))
}
