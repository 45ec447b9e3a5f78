use crate::components::IssueCard;
use crate::report::issue_catalog;
use leptos::*;
use leptos_router::{use_params_map, A};

/// Diagnostic results for one submission.
///
/// The page root carries the `data-page` / `data-submission-id` marker that
/// identifies diagnostics pages to the analytics layer. The automatic
/// page-view beacon itself fires once at startup from `main()`, off the
/// marker in the server-rendered host document, never from re-renders of
/// this component.
#[component]
pub fn DiagnosticsPage() -> impl IntoView {
    let params = use_params_map();
    let submission_id =
        move || params.with(|p| p.get("id").cloned().unwrap_or_default());

    let issues = issue_catalog();
    let issue_count = issues.len();

    view! {
        <main
            class="container diagnostics-page"
            data-page="diagnostics"
            data-submission-id=submission_id
        >
            <header>
                <h1>"Diagnostic Results"</h1>
                <p class="tagline">
                    "Submission #" {submission_id} " \u{2014} "
                    {issue_count} " issue" {if issue_count == 1 { "" } else { "s" }}
                    " detected"
                </p>
            </header>

            <nav class="back-nav">
                <A href="/">"< Back to the leaderboard"</A>
            </nav>

            <section class="issues">
                {issues
                    .into_iter()
                    .map(|issue| view! { <IssueCard issue=issue/> })
                    .collect_view()}
            </section>

            <section class="disclosure">
                <p class="fine-print">
                    "Product links are affiliate links. Buying through them "
                    "supports the leaderboard at no extra cost to you."
                </p>
            </section>
        </main>
    }
}
