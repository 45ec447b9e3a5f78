use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Future returned by a beacon send. Boxed and non-`Send`: everything here
/// runs on the browser's single thread.
pub type BeaconFuture = Pin<Box<dyn Future<Output = Result<(), BeaconError>>>>;

#[derive(Debug, Error)]
pub enum BeaconError {
    #[error("failed to serialize event: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("network request failed: {0}")]
    Network(String),
}

/// How a serialized event body leaves the page.
///
/// The reporter never talks to the network directly; it hands the finished
/// JSON body to whatever transport it was constructed with. In the browser
/// that is [`FetchTransport`]; tests inject recording or failing stand-ins.
pub trait BeaconTransport {
    /// POST one JSON body to `endpoint`. Resolves `Ok` once the request
    /// completed with any HTTP status at all; `Err` only for transport-level
    /// failures (unreachable host, aborted request, ...).
    fn send(&self, endpoint: &str, body: String) -> BeaconFuture;
}

/// Browser transport backed by `fetch`.
#[cfg(target_arch = "wasm32")]
pub struct FetchTransport;

#[cfg(target_arch = "wasm32")]
impl BeaconTransport for FetchTransport {
    fn send(&self, endpoint: &str, body: String) -> BeaconFuture {
        let endpoint = endpoint.to_string();
        Box::pin(async move {
            use wasm_bindgen::JsValue;
            use wasm_bindgen_futures::JsFuture;
            use web_sys::{Request, RequestInit};

            let opts = RequestInit::new();
            opts.set_method("POST");
            opts.set_body(&JsValue::from_str(&body));

            let request =
                Request::new_with_str_and_init(&endpoint, &opts).map_err(js_error)?;
            request
                .headers()
                .set("Content-Type", "application/json")
                .map_err(js_error)?;

            let window = web_sys::window()
                .ok_or_else(|| BeaconError::Network("no window object".to_string()))?;

            // Any resolved response counts as delivered; the status code and
            // body are the collector's business, not ours.
            JsFuture::from(window.fetch_with_request(&request))
                .await
                .map_err(js_error)?;
            Ok(())
        })
    }
}

#[cfg(target_arch = "wasm32")]
fn js_error(value: wasm_bindgen::JsValue) -> BeaconError {
    BeaconError::Network(
        value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value)),
    )
}
