use wasm_bindgen::JsValue;
use web_sys::{window, CustomEvent, CustomEventInit};

/// Progress (stats, history, achievements) changed in localStorage.
pub const PROGRESS_UPDATE_EVENT: &str = "wheelProgressUpdate";
/// Pointer entered a new wedge; detail is the segment index. Feeds audio/haptics.
pub const WHEEL_TICK_EVENT: &str = "wheelTick";
/// Toast text for the layout's notification banner.
pub const NOTIFICATION_EVENT: &str = "notification";

fn dispatch(name: &str, detail: &JsValue) {
    let Some(window) = window() else {
        return;
    };
    let event_init = CustomEventInit::new();
    event_init.set_detail(detail);
    match CustomEvent::new_with_event_init_dict(name, &event_init) {
        Ok(event) => {
            let _ = window.dispatch_event(&event);
        }
        Err(e) => log::warn!("could not create {} event: {:?}", name, e),
    }
}

pub fn dispatch_progress_update() {
    dispatch(PROGRESS_UPDATE_EVENT, &JsValue::NULL);
}

pub fn dispatch_tick(segment_index: usize) {
    dispatch(WHEEL_TICK_EVENT, &JsValue::from_f64(segment_index as f64));
}

pub fn dispatch_notification(message: &str) {
    dispatch(NOTIFICATION_EVENT, &JsValue::from_str(message));
}
