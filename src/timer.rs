use endgame_core::PhaseTimer;
use futures::future::LocalBoxFuture;
use std::time::Duration;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Phase holds backed by `setTimeout`.
pub struct TimeoutTimer;

impl PhaseTimer for TimeoutTimer {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        let ms = duration.as_millis().min(i32::MAX as u128) as i32;
        let promise = js_sys::Promise::new(&mut |resolve, _reject| {
            let scheduled = web::window()
                .map(|w| {
                    w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
                        .is_ok()
                })
                .unwrap_or(false);
            if !scheduled {
                // Resolve at once rather than stalling the sequence forever
                _ = resolve.call0(&JsValue::NULL);
            }
        });
        Box::pin(async move {
            _ = JsFuture::from(promise).await;
        })
    }
}
