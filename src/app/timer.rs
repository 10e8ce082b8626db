//! Delay helper for short-lived UI feedback.

/// Resolve after `ms` milliseconds using `setTimeout`.
#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u32) {
    let delay = i32::try_from(ms).unwrap_or(i32::MAX);
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            if window
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, delay)
                .is_err()
            {
                tracing::warn!("Failed to schedule timer, resolving now");
                let _ = resolve.call0(&js_sys::global());
            }
        } else {
            let _ = resolve.call0(&js_sys::global());
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

/// Native builds have no event loop timer; feedback reverts immediately.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(_ms: u32) {}
