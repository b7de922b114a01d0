#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

mod app;
mod constants;
pub mod dom;
mod events;
mod frame;
mod hover;
mod ids;
mod input;
mod render;
mod style;

thread_local! {
    // Single-threaded page: one mounted app at a time.
    static APP: RefCell<Option<app::App>> = const { RefCell::new(None) };
}

/// Run `f` against the mounted app. No-op after unmount or when the app is
/// already borrowed further up the stack.
pub(crate) fn with_app<R>(f: impl FnOnce(&mut app::App) -> R) -> Option<R> {
    APP.with(|cell| {
        let mut guard = cell.try_borrow_mut().ok()?;
        guard.as_mut().map(f)
    })
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");
    mount()
}

/// Mount every motion component found on the page. Calling it again while
/// mounted does nothing.
#[wasm_bindgen]
pub fn mount() -> Result<(), JsValue> {
    let already = APP.with(|cell| cell.borrow().is_some());
    if already {
        log::info!("[mount] already mounted");
        return Ok(());
    }
    let app = app::App::mount().map_err(|e| {
        log::error!("mount error: {:?}", e);
        JsValue::from_str(&e.to_string())
    })?;
    APP.with(|cell| *cell.borrow_mut() = Some(app));
    Ok(())
}

/// Tear down: cancel the frame loop, detach listeners, reset all state.
#[wasm_bindgen]
pub fn unmount() {
    let app = APP.with(|cell| cell.borrow_mut().take());
    if let Some(mut app) = app {
        app.teardown();
    }
}

/// Call after the set of `.cursor-hover-target` or `[data-magnetic]`
/// elements changed (menu opened, section swapped).
#[wasm_bindgen]
pub fn resync_hover_targets() {
    with_app(|app| app.resync());
}

/// Call after a client-side route change that did not fire `popstate`.
#[wasm_bindgen]
pub fn notify_navigation() {
    with_app(|app| app.on_navigate());
}
