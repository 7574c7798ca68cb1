use crate::constants::{DEVICE_MOTION_EVENT, ORIENTATION_CHANGE_EVENT};
use crate::SharedController;
use holobox_core::{gravity_vector, rotation_from_screen_angle};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Device rotation in degrees: `window.orientation` where the browser still
/// has it, otherwise `screen.orientation.angle`.
pub fn current_rotation(window: &web::Window) -> f64 {
    js_sys::Reflect::get(window, &JsValue::from_str("orientation"))
        .ok()
        .and_then(|v| v.as_f64())
        .or_else(|| {
            let angle = window.screen().ok()?.orientation().angle().ok()?;
            Some(rotation_from_screen_angle(angle))
        })
        .unwrap_or(0.0)
}

pub fn wire_orientationchange(window: &web::Window, controller: SharedController) {
    let wnd = window.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        let rotation = current_rotation(&wnd);
        match controller.try_borrow_mut() {
            Ok(mut c) => c.on_orientation_change(rotation),
            Err(_) => log::debug!("[orientation] controller busy, dropping {}°", rotation),
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);

    _ = window.add_event_listener_with_callback(
        ORIENTATION_CHANGE_EVENT,
        closure.as_ref().unchecked_ref(),
    );
    closure.forget();
}

pub fn wire_devicemotion(window: &web::Window, controller: SharedController) {
    let closure = Closure::wrap(Box::new(move |ev: web::DeviceMotionEvent| {
        let sample = ev
            .acceleration_including_gravity()
            .and_then(|a| gravity_vector(a.x(), a.y(), a.z()));
        match (sample, controller.try_borrow_mut()) {
            (Some(g), Ok(mut c)) => c.on_motion_sample(g.x, g.y, g.z),
            (Some(_), Err(_)) => log::debug!("[input] controller busy, dropping motion sample"),
            (None, _) => log::debug!("[input] motion event without a full gravity vector"),
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);

    _ = window
        .add_event_listener_with_callback(DEVICE_MOTION_EVENT, closure.as_ref().unchecked_ref());
    closure.forget();
}
