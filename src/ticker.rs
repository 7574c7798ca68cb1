use holobox_core::{HoloboxError, Ticker};
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `setInterval`-backed ticker. Dropping the closure after `clearInterval`
/// releases the controller handle it captured.
pub struct IntervalTicker {
    window: web::Window,
    handle: Option<i32>,
    closure: Option<Closure<dyn FnMut()>>,
}

impl IntervalTicker {
    pub fn new(window: web::Window) -> Self {
        Self {
            window,
            handle: None,
            closure: None,
        }
    }
}

impl Ticker for IntervalTicker {
    fn start(
        &mut self,
        period: Duration,
        on_tick: Box<dyn FnMut()>,
    ) -> Result<(), HoloboxError> {
        if self.is_running() {
            return Err(HoloboxError::AlreadyRunning);
        }
        let closure = Closure::wrap(on_tick);
        // setInterval truncates fractional milliseconds, 1000/30 -> 33
        let ms = (period.as_secs_f64() * 1000.0).max(1.0) as i32;
        let handle = self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                ms,
            )
            .map_err(|e| HoloboxError::Scheduler(format!("{:?}", e)))?;
        self.handle = Some(handle);
        self.closure = Some(closure);
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.window.clear_interval_with_handle(handle);
        }
        self.closure = None;
    }

    fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}
