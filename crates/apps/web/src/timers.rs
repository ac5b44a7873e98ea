//! `setInterval`-backed timer host for autoplay.

use navigation::TimerHost;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// A live interval registration. The closure must outlive the registration,
/// so the handle owns it; cancelling clears the interval and drops both.
pub struct IntervalHandle {
    id: Option<i32>,
    _callback: Closure<dyn FnMut()>,
}

pub struct WindowTimers {
    tick: fn(),
}

impl WindowTimers {
    /// `tick` re-enters the app on every interval firing.
    pub fn new(tick: fn()) -> Self {
        Self { tick }
    }
}

impl TimerHost for WindowTimers {
    type Handle = IntervalHandle;

    fn start_repeating(&mut self, period_ms: u32) -> IntervalHandle {
        let tick = self.tick;
        let callback = Closure::<dyn FnMut()>::new(move || tick());
        let id = web_sys::window().and_then(|w| {
            w.set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                period_ms as i32,
            )
            .ok()
        });
        IntervalHandle {
            id,
            _callback: callback,
        }
    }

    fn cancel(&mut self, handle: IntervalHandle) {
        if let (Some(id), Some(window)) = (handle.id, web_sys::window()) {
            window.clear_interval_with_handle(id);
        }
    }
}
