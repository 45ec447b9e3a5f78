use crate::components::{AffiliateLink, VideoLink};
use crate::report::DiagnosticIssue;
use leptos::*;

/// One detected issue: severity badge, explanation, estimated gain, and the
/// revenue CTAs (tutorial video, recommended products).
#[component]
pub fn IssueCard(issue: DiagnosticIssue) -> impl IntoView {
    let severity = issue.severity;
    let issue_type = issue.issue_type;
    let products = issue.products.clone();

    view! {
        <article class=format!("issue-card {}", severity.css_class())>
            <header class="issue-header">
                <h3>{issue.title}</h3>
                <span class=format!("severity-badge {}", severity.css_class())>
                    {severity.label()}
                </span>
            </header>

            <p class="issue-description">{issue.description}</p>
            <p class="issue-impact">{issue.impact}</p>

            <dl class="fix-facts">
                <dt>"Potential gain"</dt>
                <dd>{issue.potential_fps_gain}</dd>
                <dt>"Difficulty"</dt>
                <dd>{issue.fix_difficulty}</dd>
                <dt>"Time"</dt>
                <dd>{issue.fix_time}</dd>
                <dt>"Cost"</dt>
                <dd>{issue.fix_cost}</dd>
            </dl>

            <div class="issue-actions">
                <VideoLink
                    issue_type=issue_type
                    video_id=issue.video_id
                    video_title=issue.video_title
                />
                {products
                    .into_iter()
                    .map(|product| {
                        view! {
                            <AffiliateLink product=product issue_type=issue_type/>
                        }
                    })
                    .collect_view()}
            </div>
        </article>
    }
}
