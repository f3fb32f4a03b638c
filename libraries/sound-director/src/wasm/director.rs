//! WASM-compatible SoundDirector wrapper

use super::dom::{DocumentEvents, ElementFeed, HtmlAudioFactory};
use super::timers::BrowserScheduler;
use crate::{DirectorConfig, DirectorError, Session, SoundDirector, Volume};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

type BrowserSession = Session<HtmlAudioFactory, DocumentEvents, BrowserScheduler>;

/// WASM-compatible sound director
///
/// Construct once per page, then call `start()`. The played set and audio
/// cache survive `stop()`/`start()` cycles.
#[wasm_bindgen]
pub struct WasmSoundDirector {
    director: Rc<RefCell<SoundDirector<HtmlAudioFactory>>>,
    session: Option<BrowserSession>,
}

#[wasm_bindgen]
impl WasmSoundDirector {
    /// Create a director
    ///
    /// `config` is an optional object with any `DirectorConfig` fields
    /// (snake_case); missing fields take their defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<WasmSoundDirector, JsValue> {
        // Enable panic hooks for better error messages in console
        console_error_panic_hook::set_once();
        super::logging::init();

        let config: DirectorConfig = if config.is_undefined() || config.is_null() {
            DirectorConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))?
        };

        let director = SoundDirector::new(HtmlAudioFactory, config).map_err(to_js)?;

        Ok(Self {
            director: Rc::new(RefCell::new(director)),
            session: None,
        })
    }

    /// Register page listeners and start polling the directive feed
    pub fn start(&mut self) -> Result<(), JsValue> {
        if self.session.is_some() {
            return Ok(());
        }

        let window = web_sys::window()
            .ok_or_else(|| to_js(DirectorError::Platform("No window available".to_string())))?;
        let document = window
            .document()
            .ok_or_else(|| to_js(DirectorError::Platform("No document available".to_string())))?;

        let feed_id = self.director.borrow().config().feed_element_id.clone();
        let session = Session::start(
            Rc::clone(&self.director),
            DocumentEvents::new(document.clone()),
            ElementFeed::new(document, feed_id),
            &BrowserScheduler,
        );

        self.session = Some(session);
        Ok(())
    }

    /// Stop polling and remove page listeners
    pub fn stop(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.stop();
        }
    }

    /// Check if the director is running
    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.is_running())
    }

    /// Play a sound immediately (volume 0.0-1.0, default 1.0)
    pub fn play(&self, name: &str, volume: Option<f32>) -> bool {
        self.director
            .borrow_mut()
            .play(name, volume.map_or(Volume::FULL, Volume::new))
    }

    /// Process feed text immediately; returns number of sounds played
    #[wasm_bindgen(js_name = pollText)]
    pub fn poll_text(&self, text: &str) -> usize {
        self.director.borrow_mut().poll_text(text).played
    }

    /// Number of directives dispatched this session
    #[wasm_bindgen(js_name = playedCount)]
    pub fn played_count(&self) -> usize {
        self.director.borrow().played().len()
    }

    /// Number of cached audio handles
    #[wasm_bindgen(js_name = cachedCount)]
    pub fn cached_count(&self) -> usize {
        self.director.borrow().sounds().len()
    }
}

fn to_js(error: DirectorError) -> JsValue {
    JsValue::from_str(&error.to_string())
}
