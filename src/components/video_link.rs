use crate::analytics::AnalyticsReporter;
use leptos::*;

/// "Watch Tutorial" call-to-action for a detected issue.
///
/// Clicking tracks a `video_click` event and then lets the browser follow
/// the link as normal; the beacon never delays navigation.
#[component]
pub fn VideoLink(
    issue_type: &'static str,
    video_id: &'static str,
    video_title: &'static str,
) -> impl IntoView {
    let reporter = expect_context::<AnalyticsReporter>();
    let track = move |_| {
        reporter.report_video_click(issue_type, video_id);
    };

    view! {
        <a
            class="btn btn-video"
            href=format!("https://www.youtube.com/watch?v={}", video_id)
            target="_blank"
            rel="noopener"
            on:click=track
        >
            "\u{25b6} Watch Tutorial: " {video_title}
        </a>
    }
}
