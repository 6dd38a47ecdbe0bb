// requestAnimationFrame loop with an explicit lifecycle. The pending frame is
// an `AnimationFrame` handle kept in the loop state; dropping it cancels the
// frame and frees its callback, which breaks the state <-> callback cycle.

use gloo::render::{request_animation_frame, AnimationFrame};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Tick = Box<dyn FnMut() -> bool>;

struct LoopState {
    running: Cell<bool>,
    pending: RefCell<Option<AnimationFrame>>,
    tick: RefCell<Tick>,
}

impl LoopState {
    fn new(tick: Tick) -> Rc<LoopState> {
        Rc::new(LoopState {
            running: Cell::new(false),
            pending: RefCell::new(None),
            tick: RefCell::new(tick),
        })
    }

    fn frame(self: Rc<Self>) {
        self.pending.borrow_mut().take();
        if !self.running.get() {
            return;
        }
        let keep_going = {
            let mut tick = self.tick.borrow_mut();
            (&mut *tick)()
        };
        if keep_going && self.running.get() {
            LoopState::schedule(&self);
        } else {
            self.running.set(false);
        }
    }

    fn schedule(state: &Rc<LoopState>) {
        let next = Rc::clone(state);
        let handle = request_animation_frame(move |_| next.frame());
        *state.pending.borrow_mut() = Some(handle);
    }

    fn cancel(&self) {
        self.running.set(false);
        self.pending.borrow_mut().take();
    }
}

pub struct FrameLoop {
    state: Rc<LoopState>,
}

impl FrameLoop {
    /// Wraps `tick` without scheduling anything. `tick` returns false to end the loop.
    pub fn new<F>(tick: F) -> FrameLoop
    where
        F: FnMut() -> bool + 'static,
    {
        FrameLoop {
            state: LoopState::new(Box::new(tick)),
        }
    }

    /// Starts a detached loop that lives until `tick` returns false.
    pub fn spawn<F>(tick: F)
    where
        F: FnMut() -> bool + 'static,
    {
        let state = LoopState::new(Box::new(tick));
        state.running.set(true);
        // the pending frame owns the state from here on
        LoopState::schedule(&state);
    }

    pub fn start(&self) {
        if self.state.running.get() {
            return;
        }
        self.state.running.set(true);
        LoopState::schedule(&self.state);
    }

    pub fn stop(&self) {
        self.state.cancel();
    }

    /// Runs one frame synchronously, whether or not the loop is running.
    pub fn step(&self) -> bool {
        let mut tick = self.state.tick.borrow_mut();
        (&mut *tick)()
    }

    pub fn is_running(&self) -> bool {
        self.state.running.get()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.state.cancel();
    }
}
