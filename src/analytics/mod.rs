//! Analytics tracking for revenue-relevant interactions: tutorial-video
//! clicks, affiliate-product clicks, and diagnostic page views.
//!
//! Everything here is strictly fire-and-forget. Telemetry must never block,
//! delay, or fail a user-visible action, so every report call returns
//! immediately and any failure is only logged to the console
//! (same policy as losing a beacon to an adblocker: acceptable, invisible).

mod event;
mod transport;

pub use event::{AnalyticsEvent, AFFILIATE_CLICK, PAGE_VIEW, VIDEO_CLICK};
#[cfg(target_arch = "wasm32")]
pub use transport::FetchTransport;
pub use transport::{BeaconError, BeaconFuture, BeaconTransport};

use crate::page_context::PageContext;
use std::future::Future;
use std::rc::Rc;

/// Where the collector listens. The path is same-origin; session identity
/// rides on whatever cookies the page already carries.
pub const ANALYTICS_ENDPOINT: &str = "/api/analytics/event";

/// Hands structured events to the collector, one POST per call.
///
/// The reporter is stateless apart from its transport handle: calls are
/// independent, nothing is queued, retried, deduplicated, or ordered.
/// Cloning is cheap and clones share the same transport, so it can be
/// passed around through Leptos context.
#[derive(Clone)]
pub struct AnalyticsReporter {
    transport: Rc<dyn BeaconTransport>,
}

impl AnalyticsReporter {
    /// Reporter wired to the browser `fetch` API.
    #[cfg(target_arch = "wasm32")]
    pub fn new() -> Self {
        Self::with_transport(Rc::new(FetchTransport))
    }

    /// Reporter with an injected transport. This is how tests observe
    /// outgoing requests without a network.
    pub fn with_transport(transport: Rc<dyn BeaconTransport>) -> Self {
        Self { transport }
    }

    /// Track a "Watch Tutorial" click.
    pub fn report_video_click(&self, issue_type: &str, video_id: &str) {
        self.dispatch(AnalyticsEvent::video_click(issue_type, video_id));
    }

    /// Track a "Buy on Amazon" click.
    pub fn report_affiliate_click(&self, product_name: &str, issue_type: &str) {
        self.dispatch(AnalyticsEvent::affiliate_click(product_name, issue_type));
    }

    /// Track a page view.
    pub fn report_page_view(&self, page_type: &str, submission_id: &str) {
        self.dispatch(AnalyticsEvent::page_view(page_type, submission_id));
    }

    /// Fire the automatic page-view for a marked diagnostics page, if the
    /// context says we are on one. Call sites own the once-per-load
    /// guarantee by invoking this a single time at startup.
    pub fn track_page_context(&self, context: &PageContext) {
        if let Some(event) = context.auto_page_view() {
            self.dispatch(event);
        }
    }

    /// Submit any event, known tag or not. Serializes, POSTs, and forgets;
    /// the caller gets nothing back, success or otherwise.
    pub fn dispatch(&self, event: AnalyticsEvent) {
        let body = match serde_json::to_string(&event) {
            Ok(body) => body,
            Err(e) => {
                log::warn!("analytics: dropping {} event: {}", event.event_type, e);
                return;
            }
        };
        let pending = self.transport.send(ANALYTICS_ENDPOINT, body);
        spawn(async move {
            if let Err(e) = pending.await {
                log::warn!("analytics: event not delivered: {}", e);
            }
        });
    }
}

/// Run the send future without making the caller wait for it.
///
/// In the browser the future is parked on the microtask queue and the UI
/// handler returns immediately. Outside the browser there is no event loop
/// to park it on, so it resolves inline; mock transports complete instantly,
/// which keeps the native tests synchronous.
#[cfg(target_arch = "wasm32")]
fn spawn(fut: impl Future<Output = ()> + 'static) {
    wasm_bindgen_futures::spawn_local(fut);
}

#[cfg(not(target_arch = "wasm32"))]
fn spawn(fut: impl Future<Output = ()> + 'static) {
    futures::executor::block_on(fut);
}
