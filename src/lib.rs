pub mod api;
pub mod desktop;
pub mod search;
pub mod terminal;
pub mod tests;

use std::cell::RefCell;

use anyhow::anyhow;
use desktop::Desktop;
use mominos_assistant::backend::FetchBackend;
use mominos_session::storage::{KeyValueStore, LocalStore, MemoryStore};
use wasm_bindgen::prelude::*;

/// The live desktop and the store it is saved into
struct Runtime {
    desktop: Desktop,
    store: Box<dyn KeyValueStore>,
}

thread_local! {
    static RUNTIME: RefCell<Option<Runtime>> = const { RefCell::new(None) };
}

/// The desktop entrypoint
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_log::init_with_level(log::Level::Info)
        .map_err(|e| JsValue::from_str(&format!("Failed to start the logger: {}", e)))?;
    set_panic_hook();

    let store: Box<dyn KeyValueStore> = match LocalStore::open() {
        Ok(store) => Box::new(store),
        Err(e) => {
            log::warn!("{}, this session will not be saved", e);
            Box::new(MemoryStore::new())
        }
    };
    let desktop = Desktop::boot(store.as_ref(), FetchBackend::default());
    RUNTIME.with(|runtime| runtime.replace(Some(Runtime { desktop, store })));

    log::info!("MominOS is ready");
    Ok(())
}

/// Read from the desktop
pub(crate) fn with_desktop<R>(f: impl FnOnce(&Desktop) -> R) -> anyhow::Result<R> {
    RUNTIME.with(|runtime| {
        let runtime = runtime
            .try_borrow()
            .map_err(|_| anyhow!("The desktop is busy"))?;
        let runtime = runtime
            .as_ref()
            .ok_or(anyhow!("The desktop has not booted"))?;
        Ok(f(&runtime.desktop))
    })
}

/// Change the desktop and save the session afterwards
pub(crate) fn mutate_desktop<R>(f: impl FnOnce(&mut Desktop) -> R) -> anyhow::Result<R> {
    RUNTIME.with(|runtime| {
        let mut runtime = runtime
            .try_borrow_mut()
            .map_err(|_| anyhow!("The desktop is busy"))?;
        let Runtime { desktop, store } = runtime
            .as_mut()
            .ok_or(anyhow!("The desktop has not booted"))?;
        let result = f(desktop);
        desktop.persist(store.as_mut());
        Ok(result)
    })
}

/// The panic hook for the WASM module
fn set_panic_hook() {
    static SET_HOOK: std::sync::Once = std::sync::Once::new();
    SET_HOOK.call_once(|| {
        std::panic::set_hook(Box::new(|panic_info| {
            log::error!("Desktop panic: {}", panic_info);
            console_error_panic_hook::hook(panic_info);
        }));
    });
}
