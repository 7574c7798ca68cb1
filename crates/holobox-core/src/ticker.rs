//! Repeating-task seam and the animator that owns the update loop.

use crate::controller::{Clock, PerspectiveController, Stage};
use crate::error::{HoloboxError, Result};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

/// A fixed-period repeating task source (setInterval, a test harness, ...).
pub trait Ticker {
    fn start(&mut self, period: Duration, on_tick: Box<dyn FnMut()>) -> Result<()>;
    /// Stop firing. Calling this when not running is a no-op.
    fn stop(&mut self);
    fn is_running(&self) -> bool;
}

#[derive(Default)]
struct ManualInner {
    callback: RefCell<Option<Box<dyn FnMut()>>>,
    period: Cell<Option<Duration>>,
    // bumped by every start/stop
    generation: Cell<u64>,
}

/// Ticker fired by hand. Clones share the same registration.
#[derive(Clone, Default)]
pub struct ManualTicker {
    inner: Rc<ManualInner>,
}

impl ManualTicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn period(&self) -> Option<Duration> {
        self.inner.period.get()
    }

    /// Run one tick. Returns false if nothing is registered.
    pub fn fire(&self) -> bool {
        let taken = self.inner.callback.borrow_mut().take();
        let Some(mut cb) = taken else {
            return false;
        };
        let generation = self.inner.generation.get();
        cb();
        // the callback may have stopped or re-registered us
        if self.inner.generation.get() == generation {
            *self.inner.callback.borrow_mut() = Some(cb);
        }
        true
    }

    pub fn fire_n(&self, n: usize) -> usize {
        (0..n).take_while(|_| self.fire()).count()
    }
}

impl Ticker for ManualTicker {
    fn start(&mut self, period: Duration, on_tick: Box<dyn FnMut()>) -> Result<()> {
        if self.is_running() {
            return Err(HoloboxError::AlreadyRunning);
        }
        self.inner.generation.set(self.inner.generation.get() + 1);
        self.inner.period.set(Some(period));
        *self.inner.callback.borrow_mut() = Some(on_tick);
        Ok(())
    }

    fn stop(&mut self) {
        self.inner.generation.set(self.inner.generation.get() + 1);
        self.inner.period.set(None);
        self.inner.callback.borrow_mut().take();
    }

    fn is_running(&self) -> bool {
        self.inner.period.get().is_some()
    }
}

/// Owns a shared controller and the ticker that drives it.
pub struct Animator<S, C, T>
where
    S: Stage + 'static,
    C: Clock + 'static,
    T: Ticker,
{
    controller: Rc<RefCell<PerspectiveController<S, C>>>,
    ticker: T,
}

impl<S, C, T> Animator<S, C, T>
where
    S: Stage + 'static,
    C: Clock + 'static,
    T: Ticker,
{
    pub fn new(controller: PerspectiveController<S, C>, ticker: T) -> Self {
        Self {
            controller: Rc::new(RefCell::new(controller)),
            ticker,
        }
    }

    /// Shared handle for input handlers.
    pub fn controller(&self) -> Rc<RefCell<PerspectiveController<S, C>>> {
        self.controller.clone()
    }

    /// Publish one frame right away, then tick at the configured period.
    pub fn start(&mut self) -> Result<()> {
        if self.ticker.is_running() {
            return Err(HoloboxError::AlreadyRunning);
        }
        self.controller.borrow_mut().tick();
        let period = self.controller.borrow().config().tick_period();
        let controller = self.controller.clone();
        self.ticker.start(
            period,
            Box::new(move || match controller.try_borrow_mut() {
                Ok(mut c) => c.tick(),
                Err(_) => log::warn!("[tick] controller busy, skipping tick"),
            }),
        )?;
        log::info!("[tick] loop started, period {:?}", period);
        Ok(())
    }

    pub fn stop(&mut self) {
        if self.ticker.is_running() {
            self.ticker.stop();
            log::info!(
                "[tick] loop stopped after {} ticks",
                self.controller.borrow().stats().ticks
            );
        }
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_running()
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }
}

impl<S, C, T> Drop for Animator<S, C, T>
where
    S: Stage + 'static,
    C: Clock + 'static,
    T: Ticker,
{
    fn drop(&mut self) {
        self.ticker.stop();
    }
}
