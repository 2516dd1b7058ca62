// Small browser helpers shared by the components.
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// Uniform sample in `[0, 1)` from the browser's PRNG.
pub fn random_unit() -> f64 {
    js_sys::Math::random()
}

/// Runs `f` once after `ms` milliseconds. Silently skipped outside a window.
pub fn set_timeout(ms: i32, f: impl FnOnce() + 'static) {
    let Some(win) = web_sys::window() else {
        log::warn!("no window; dropping {}ms timer", ms);
        return;
    };
    let cb = Closure::once_into_js(f);
    if win
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms)
        .is_err()
    {
        log::warn!("failed to schedule {}ms timer", ms);
    }
}

/// Element that currently holds keyboard focus, if it is an `HtmlElement`.
pub fn focused_element() -> Option<web_sys::HtmlElement> {
    web_sys::window()?
        .document()?
        .active_element()?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
}
