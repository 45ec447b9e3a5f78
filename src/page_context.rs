//! Which page is the document showing? The server answers out-of-band by
//! stamping the rendered page root with `data-page` (and, for diagnostic
//! result pages, `data-submission-id`). Reading that marker once at startup
//! and passing the result around keeps the analytics layer free of DOM
//! lookups, so it can be exercised in plain native tests.

use crate::analytics::{AnalyticsEvent, PAGE_VIEW};

/// `data-page` value that identifies a diagnostic results page.
pub const DIAGNOSTICS_PAGE: &str = "diagnostics";

const PAGE_ATTR: &str = "data-page";
const SUBMISSION_ATTR: &str = "data-submission-id";

/// Snapshot of the page marker taken at load time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContext {
    pub page_type: Option<String>,
    pub submission_id: Option<String>,
}

impl PageContext {
    /// Read the marker from the live document. An unmarked document yields
    /// an empty context, which suppresses all automatic tracking.
    pub fn from_document() -> Self {
        let marker = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.query_selector(&format!("[{}]", PAGE_ATTR)).ok())
            .flatten();

        match marker {
            Some(element) => Self {
                page_type: element.get_attribute(PAGE_ATTR),
                submission_id: element.get_attribute(SUBMISSION_ATTR),
            },
            None => Self::default(),
        }
    }

    /// Build a context directly from marker values.
    pub fn from_marker(page_type: Option<&str>, submission_id: Option<&str>) -> Self {
        Self {
            page_type: page_type.map(str::to_string),
            submission_id: submission_id.map(str::to_string),
        }
    }

    /// The automatic page-view event for this context, if one is due.
    ///
    /// Only diagnostics pages auto-track. A marker without a submission id
    /// still tracks, with the field simply left out of the payload rather
    /// than sent as an empty string.
    pub fn auto_page_view(&self) -> Option<AnalyticsEvent> {
        if self.page_type.as_deref() != Some(DIAGNOSTICS_PAGE) {
            return None;
        }
        let event = match self.submission_id.as_deref() {
            Some(submission_id) => AnalyticsEvent::page_view(DIAGNOSTICS_PAGE, submission_id),
            None => AnalyticsEvent::with_fields(PAGE_VIEW, [("page_type", DIAGNOSTICS_PAGE)]),
        };
        Some(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::RecordingTransport;
    use crate::analytics::AnalyticsReporter;

    #[test]
    fn test_marked_diagnostics_page_emits_exactly_one_page_view() {
        let context = PageContext::from_marker(Some("diagnostics"), Some("abc123"));
        let (transport, requests) = RecordingTransport::new();
        let reporter = AnalyticsReporter::with_transport(transport);

        reporter.track_page_context(&context);

        let requests = requests.borrow();
        assert_eq!(requests.len(), 1);
        let json: serde_json::Value = serde_json::from_str(&requests[0].1).unwrap();
        assert_eq!(json["event_type"], "page_view");
        assert_eq!(json["event_data"]["page_type"], "diagnostics");
        assert_eq!(json["event_data"]["submission_id"], "abc123");
    }

    #[test]
    fn test_unmarked_page_emits_nothing() {
        let context = PageContext::default();
        let (transport, requests) = RecordingTransport::new();
        let reporter = AnalyticsReporter::with_transport(transport);

        reporter.track_page_context(&context);

        assert!(requests.borrow().is_empty());
    }

    #[test]
    fn test_non_diagnostics_marker_emits_nothing() {
        let context = PageContext::from_marker(Some("leaderboard"), None);
        assert_eq!(context.auto_page_view(), None);
    }

    #[test]
    fn test_missing_submission_id_is_omitted_not_empty() {
        let context = PageContext::from_marker(Some("diagnostics"), None);
        let event = context.auto_page_view().expect("diagnostics page tracks");
        assert_eq!(event.event_data.get("page_type").unwrap(), "diagnostics");
        assert!(
            !event.event_data.contains_key("submission_id"),
            "absent marker data must be dropped from the payload"
        );
    }
}
