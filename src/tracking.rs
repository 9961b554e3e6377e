use std::rc::Rc;

use log::{debug, info};
use serde::Serialize;
use serde_json::{json, Value};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = window, js_name = fbq, catch)]
    fn fbq_init(command: &str, pixel_id: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(js_namespace = window, js_name = fbq, catch)]
    fn fbq_track(command: &str, event: &str, options: &JsValue) -> Result<(), JsValue>;
}

/// Receives analytics events. Implementations must never fail loudly:
/// a missing or blocked tracker is not the visitor's problem.
pub trait TrackingSink {
    fn track(&self, event: &str, options: &Value);
}

/// Forwards events to the Meta pixel loaded by `index.html`.
pub struct PixelSink;

impl PixelSink {
    pub fn init(pixel_id: &str) -> Result<Self, JsValue> {
        fbq_init("init", pixel_id)?;
        info!("Pixel {} initialized", pixel_id);
        Ok(PixelSink)
    }
}

impl TrackingSink for PixelSink {
    fn track(&self, event: &str, options: &Value) {
        // Plain objects, not Maps, or fbq ignores the parameters
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let options = match options.serialize(&serializer) {
            Ok(options) => options,
            Err(e) => {
                debug!("Could not convert options for {}: {}", event, e);
                return;
            }
        };
        if let Err(e) = fbq_track("track", event, &options) {
            debug!("Dropped tracking event {}: {:?}", event, e);
        }
    }
}

pub struct NoopSink;

impl TrackingSink for NoopSink {
    fn track(&self, _event: &str, _options: &Value) {}
}

/// Shared handle to the page's tracking sink, cheap to pass as a prop.
#[derive(Clone)]
pub struct Tracker(Rc<dyn TrackingSink>);

impl PartialEq for Tracker {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Tracker {
    pub fn new(sink: impl TrackingSink + 'static) -> Self {
        Tracker(Rc::new(sink))
    }

    pub fn noop() -> Self {
        Tracker::new(NoopSink)
    }

    /// Pixel-backed tracker, or a no-op one when the pixel script is missing.
    pub fn pixel(pixel_id: &str) -> Self {
        match PixelSink::init(pixel_id) {
            Ok(sink) => Tracker::new(sink),
            Err(e) => {
                debug!("Pixel unavailable, events will be dropped: {:?}", e);
                Tracker::noop()
            }
        }
    }

    pub fn track(&self, event: &str, options: Value) {
        debug!("track {} {}", event, options);
        self.0.track(event, &options);
    }

    pub fn page_view(&self) {
        self.track("PageView", json!({}));
    }

    pub fn lead(&self) {
        self.track("Lead", json!({ "content_name": "early_access" }));
    }
}
