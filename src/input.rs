// Pointer state shared between the mousemove listener and the frame loop.
// The field never reads it directly; each step gets an InputSnapshot.

use std::cell::Cell;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct InputSnapshot {
    pub mouse: [f64; 2],
}

impl InputSnapshot {
    pub fn at(x: f64, y: f64) -> InputSnapshot {
        InputSnapshot { mouse: [x, y] }
    }
}

/// Last known pointer position, starting at the origin and never reset.
#[derive(Debug, Default)]
pub struct PointerTracker {
    pos: Cell<[f64; 2]>,
}

impl PointerTracker {
    pub fn new() -> Self {
        PointerTracker::default()
    }

    pub fn move_to(&self, x: f64, y: f64) {
        self.pos.set([x, y]);
    }

    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            mouse: self.pos.get(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracker_starts_at_origin() {
        assert_eq!(PointerTracker::new().snapshot(), InputSnapshot::at(0.0, 0.0));
    }

    #[test]
    fn snapshot_is_a_copy() {
        let tracker = PointerTracker::new();
        tracker.move_to(10.0, 20.0);
        let before = tracker.snapshot();
        tracker.move_to(30.0, 40.0);
        assert_eq!(before.mouse, [10.0, 20.0]);
        assert_eq!(tracker.snapshot().mouse, [30.0, 40.0]);
    }
}
