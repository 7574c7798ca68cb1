#![cfg(target_arch = "wasm32")]
use holobox_core::{Animator, PerspectiveController, SystemClock};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod config;
mod constants;
mod dom;
mod events;
mod stage;
mod ticker;

pub(crate) type WebController = PerspectiveController<stage::DomStage, SystemClock>;
pub(crate) type SharedController = Rc<RefCell<WebController>>;
type WebAnimator = Animator<stage::DomStage, SystemClock, ticker::IntervalTicker>;

thread_local! {
    static ANIMATOR: RefCell<Option<WebAnimator>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("holobox starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let stage = stage::DomStage::bind(&document)?;
    let config = config::read_overrides(stage.world());
    log::info!("[config] {:?}", config);

    let mut controller = PerspectiveController::new(stage, SystemClock, config)?;
    controller.on_orientation_change(events::current_rotation(&window));

    let mut animator = Animator::new(controller, ticker::IntervalTicker::new(window.clone()));
    events::wire_pointermove(&window, animator.controller());
    events::wire_orientationchange(&window, animator.controller());
    events::wire_devicemotion(&window, animator.controller());

    animator.start()?;
    ANIMATOR.with(|a| *a.borrow_mut() = Some(animator));
    Ok(())
}

/// Stop the update loop. The box keeps its last perspective.
#[wasm_bindgen(js_name = holoboxStop)]
pub fn holobox_stop() {
    ANIMATOR.with(|a| {
        if let Some(animator) = a.borrow_mut().as_mut() {
            animator.stop();
        }
    });
}

/// Restart the update loop after `holoboxStop`.
#[wasm_bindgen(js_name = holoboxResume)]
pub fn holobox_resume() -> Result<(), JsValue> {
    ANIMATOR.with(|a| match a.borrow_mut().as_mut() {
        Some(animator) if !animator.is_running() => animator
            .start()
            .map_err(|e| JsValue::from_str(&e.to_string())),
        Some(_) => Ok(()),
        None => Err(JsValue::from_str("holobox is not initialised")),
    })
}
