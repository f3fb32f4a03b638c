//! WASM bindings for sound-director
//!
//! Backs the platform traits with the browser DOM (`HtmlAudioElement`,
//! document listeners, `setInterval`/`setTimeout`) and exposes a
//! JavaScript-friendly wrapper.

pub mod director;
pub mod dom;
pub mod logging;
pub mod timers;

pub use director::WasmSoundDirector;
pub use dom::{DocumentEvents, ElementFeed, HtmlAudioFactory};
pub use timers::BrowserScheduler;
