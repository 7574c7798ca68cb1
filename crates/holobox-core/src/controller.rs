//! The perspective controller: input handlers plus the per-tick update.
//!
//! The controller owns no platform handles. Output goes through a [`Stage`]
//! and time comes from a [`Clock`], so it can run headless in tests.

use crate::config::HoloboxConfig;
use crate::constants::STATS_LOG_EVERY_TICKS;
use crate::error::Result;
use crate::orientation::OrientationMode;
use crate::perspective::{motion_target, pointer_target, PerspectiveOrigin, PerspectiveState};
use crate::stack::{RenderStack, Surface};
use glam::DVec3;
use instant::Instant;

/// Receiver of the controller's per-tick output.
pub trait Stage {
    fn set_perspective_origin(&mut self, origin: PerspectiveOrigin);
    fn set_z_index(&mut self, surface: Surface, z: usize);
}

pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TickStats {
    pub ticks: u64,
    pub first_tick: Option<Instant>,
    pub last_tick: Option<Instant>,
}

impl TickStats {
    fn record(&mut self, now: Instant) {
        self.ticks += 1;
        self.first_tick.get_or_insert(now);
        self.last_tick = Some(now);
    }

    /// Observed tick rate since the first tick, `None` until two ticks are spread over time.
    pub fn rate_hz(&self) -> Option<f64> {
        let (first, last) = (self.first_tick?, self.last_tick?);
        let secs = last.duration_since(first).as_secs_f64();
        (self.ticks > 1 && secs > 0.0).then(|| (self.ticks - 1) as f64 / secs)
    }
}

pub struct PerspectiveController<S: Stage, C: Clock = SystemClock> {
    config: HoloboxConfig,
    state: PerspectiveState,
    mode: OrientationMode,
    stack: RenderStack,
    stage: S,
    clock: C,
    stats: TickStats,
}

impl<S: Stage, C: Clock> PerspectiveController<S, C> {
    pub fn new(stage: S, clock: C, config: HoloboxConfig) -> Result<Self> {
        config.validate()?;
        let state = PerspectiveState::default();
        let stack = RenderStack::compute(state.current.x, config.thresholds());
        Ok(Self {
            config,
            state,
            mode: OrientationMode::default(),
            stack,
            stage,
            clock,
            stats: TickStats::default(),
        })
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64, viewport_w: f64, viewport_h: f64) {
        match pointer_target(x, y, viewport_w, viewport_h) {
            Some(t) => self.state.set_target(t),
            None => log::debug!(
                "[input] ignoring pointer sample at ({}, {}) in {}x{} viewport",
                x,
                y,
                viewport_w,
                viewport_h
            ),
        }
    }

    pub fn on_orientation_change(&mut self, rotation_deg: f64) {
        let mode = OrientationMode::from_rotation(rotation_deg);
        if mode != self.mode {
            log::info!("[orientation] {:?} -> {:?} ({}°)", self.mode, mode, rotation_deg);
        }
        self.mode = mode;
    }

    pub fn on_motion_sample(&mut self, ax: f64, ay: f64, az: f64) {
        match motion_target(DVec3::new(ax, ay, az), self.mode, self.config.gravity_span) {
            Some(t) => self.state.set_target(t),
            None => log::debug!("[input] ignoring motion sample ({}, {}, {})", ax, ay, az),
        }
    }

    /// One update: smooth, publish the origin, restack the surfaces.
    pub fn tick(&mut self) {
        self.state.step(self.config.smoothing);
        self.stage.set_perspective_origin(self.state.origin());

        self.stack = RenderStack::compute(self.state.current.x, self.config.thresholds());
        for (z, surface) in self.stack.slots() {
            self.stage.set_z_index(surface, z);
        }

        self.stats.record(self.clock.now());
        if self.stats.ticks % STATS_LOG_EVERY_TICKS == 0 {
            log::debug!(
                "[tick] {} ticks, {:.1} Hz, origin {}",
                self.stats.ticks,
                self.stats.rate_hz().unwrap_or(0.0),
                self.state.origin()
            );
        }
    }

    pub fn state(&self) -> &PerspectiveState {
        &self.state
    }

    pub fn mode(&self) -> OrientationMode {
        self.mode
    }

    pub fn stack(&self) -> &RenderStack {
        &self.stack
    }

    pub fn config(&self) -> &HoloboxConfig {
        &self.config
    }

    pub fn stage(&self) -> &S {
        &self.stage
    }

    pub fn stats(&self) -> &TickStats {
        &self.stats
    }
}
