//! Timers that suspend the current task.

use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
use leptos::task;

/// Resolve after `delay` via `setTimeout`.
#[cfg(target_arch = "wasm32")]
pub(crate) async fn wait_for(delay: Duration) {
    use js_sys::{Function, Promise};
    use wasm_bindgen::{JsCast, JsValue, closure::Closure};
    use wasm_bindgen_futures::JsFuture;

    let delay_ms = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);

    let mut executor = move |resolve: Function, _reject: Function| {
        let Some(window) = web_sys::window() else {
            let _ = resolve.call0(&JsValue::NULL);
            return;
        };

        let callback = Closure::once_into_js(move || {
            let _ = resolve.call0(&JsValue::NULL);
        });

        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay_ms,
        );
    };

    let promise = Promise::new(&mut executor);
    let _ = JsFuture::from(promise).await;
}

/// Yield one executor tick; native builds only run tests.
#[cfg(not(target_arch = "wasm32"))]
pub(crate) async fn wait_for(_delay: Duration) {
    task::tick().await;
}
