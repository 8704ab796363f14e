use shared::scheduler::{FrameCallback, Scheduler};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

/// Frames from `requestAnimationFrame`; the callback receives the frame timestamp.
#[derive(Debug, Clone, Copy, Default)]
pub struct RafScheduler;

impl Scheduler for RafScheduler {
    type Handle = Option<i32>;

    fn schedule_frame(&self, callback: FrameCallback) -> Option<i32> {
        let window = window()?;
        // freed by wasm-bindgen after it runs; a cancelled frame leaks this one closure
        let closure = Closure::once_into_js(move |timestamp: f64| callback(timestamp));
        match window.request_animation_frame(closure.unchecked_ref()) {
            Ok(id) => Some(id),
            Err(e) => {
                log::error!("requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel(&self, handle: Option<i32>) {
        if let (Some(id), Some(window)) = (handle, window()) {
            let _ = window.cancel_animation_frame(id);
        }
    }
}
