use crate::constants::POINTER_MOVE_EVENT;
use crate::dom;
use crate::SharedController;
use holobox_core::tracks_pointer;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointermove(window: &web::Window, controller: SharedController) {
    let wnd = window.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !tracks_pointer(&ev.pointer_type()) {
            return;
        }
        let (w, h) = dom::viewport_size(&wnd);
        match controller.try_borrow_mut() {
            Ok(mut c) => c.on_pointer_move(ev.client_x() as f64, ev.client_y() as f64, w, h),
            Err(_) => log::debug!("[input] controller busy, dropping pointer sample"),
        }
    }) as Box<dyn FnMut(_)>);

    _ = window
        .add_event_listener_with_callback(POINTER_MOVE_EVENT, closure.as_ref().unchecked_ref());
    closure.forget();
}
