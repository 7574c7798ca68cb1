// Shared fakes for host-side tests.
#![allow(dead_code)]

use holobox_core::{Clock, PerspectiveOrigin, Stage, Surface};
use instant::Instant;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

#[derive(Default)]
pub struct RecordingStage {
    pub origins: Vec<PerspectiveOrigin>,
    pub z_writes: Vec<(Surface, usize)>,
    pub z: [usize; 6],
}

impl Stage for RecordingStage {
    fn set_perspective_origin(&mut self, origin: PerspectiveOrigin) {
        self.origins.push(origin);
    }

    fn set_z_index(&mut self, surface: Surface, z: usize) {
        self.z_writes.push((surface, z));
        self.z[surface.index()] = z;
    }
}

#[derive(Clone)]
pub struct FakeClock {
    now: Rc<Cell<Instant>>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    pub fn advance(&self, d: Duration) {
        self.now.set(self.now.get() + d);
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
