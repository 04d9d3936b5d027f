use leptos::task::Executor;

/// Installs the executor behind `leptos::task::spawn_local`. Listeners spawn
/// their server calls and confirmations there, so this has to run before any
/// of them fire; without it spawned futures are dropped. Returns `false` when
/// an executor was already installed, which is harmless.
pub fn init_executor() -> bool {
    #[cfg(target_arch = "wasm32")]
    let installed = Executor::init_wasm_bindgen();
    #[cfg(not(target_arch = "wasm32"))]
    let installed = Executor::init_futures_executor();

    match installed {
        Ok(()) => true,
        Err(_) => {
            log::debug!("async executor already installed");
            false
        }
    }
}
