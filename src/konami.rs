// Sliding-window matcher for a fixed sequence of keyboard codes

use std::collections::VecDeque;

pub const KONAMI_CODE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "KeyB",
    "KeyA",
];

pub struct KeySequence {
    sequence: Vec<String>,
    recent: VecDeque<String>,
}

impl KeySequence {
    pub fn new<S: AsRef<str>>(sequence: &[S]) -> Self {
        KeySequence {
            sequence: sequence.iter().map(|s| s.as_ref().to_owned()).collect(),
            recent: VecDeque::with_capacity(sequence.len() + 1),
        }
    }

    pub fn konami() -> Self {
        KeySequence::new(&KONAMI_CODE[..])
    }

    /// Records a key code. Returns true when the last keys spell out the
    /// sequence; the window is then cleared.
    pub fn push(&mut self, code: &str) -> bool {
        if self.sequence.is_empty() {
            return false;
        }
        self.recent.push_back(code.to_owned());
        if self.recent.len() > self.sequence.len() {
            self.recent.pop_front();
        }
        if self.recent.iter().eq(self.sequence.iter()) {
            self.recent.clear();
            true
        } else {
            false
        }
    }
}
