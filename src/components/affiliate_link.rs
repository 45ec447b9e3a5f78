use crate::analytics::AnalyticsReporter;
use crate::report::Product;
use leptos::*;

/// "Buy on Amazon" call-to-action for a recommended product.
///
/// Clicking tracks an `affiliate_click` event; navigation proceeds
/// regardless of whether the beacon lands.
#[component]
pub fn AffiliateLink(product: Product, issue_type: &'static str) -> impl IntoView {
    let reporter = expect_context::<AnalyticsReporter>();
    let product_name = product.name;
    let track = move |_| {
        reporter.report_affiliate_click(product_name, issue_type);
    };

    view! {
        <a
            class="btn btn-affiliate"
            href=product.url
            target="_blank"
            rel="noopener sponsored"
            on:click=track
        >
            "\u{1f6d2} " {product.name} " \u{2014} " {product.price}
        </a>
    }
}
