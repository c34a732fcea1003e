//! Task spawning on the browser event loop.

use futures::future::LocalBoxFuture;
use pdfchat_core::ports::SpawnPort;

/// Spawns onto the JS microtask queue via `wasm_bindgen_futures::spawn_local`.
pub struct LocalSpawner;

impl SpawnPort for LocalSpawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }
}
