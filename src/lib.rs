pub mod analytics;
pub mod components;
pub mod page_context;
pub mod pages;
pub mod report;

use analytics::AnalyticsReporter;
use components::NavBar;
use leptos::*;
use leptos_router::*;
use pages::{DiagnosticsPage, HomePage, NotFoundPage};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::wasm_bindgen;

/// Root component: makes the analytics reporter available to every route
/// through context and sets up routing.
///
/// The reporter arrives as a prop rather than being constructed here, so
/// the whole tree runs against whatever transport the caller wired up.
#[component]
fn Root(reporter: AnalyticsReporter) -> impl IntoView {
    provide_context(reporter);

    view! {
        <Router>
            <NavBar/>
            <Routes>
                <Route path="/" view=HomePage/>
                <Route path="/submission/:id/diagnostics" view=DiagnosticsPage/>
                <Route path="/*" view=NotFoundPage/>
            </Routes>
        </Router>
    }
}

/// Mount the application to the DOM.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let reporter = AnalyticsReporter::new();

    // The server marks diagnostics pages on the rendered document. Read
    // the marker once, before mounting, and fire the automatic page-view
    // beacon for it; this single call site is what makes the beacon
    // once-per-load.
    reporter.track_page_context(&page_context::PageContext::from_document());

    mount_to_body(move || view! { <Root reporter=reporter.clone()/> });
}
