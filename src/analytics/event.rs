use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Event tag for a "Watch Tutorial" click.
pub const VIDEO_CLICK: &str = "video_click";
/// Event tag for a "Buy on Amazon" click.
pub const AFFILIATE_CLICK: &str = "affiliate_click";
/// Event tag for a page view.
pub const PAGE_VIEW: &str = "page_view";

/// One telemetry record, shaped exactly as the collector expects it:
///
/// ```json
/// {
///   "event_type": "video_click",
///   "event_data": { "issue_type": "...", "video_id": "...", "timestamp": "..." }
/// }
/// ```
///
/// `event_data` is a flat string-to-string map. A `BTreeMap` keeps the
/// serialized key order stable, which makes request bodies easy to assert on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub event_type: String,
    pub event_data: BTreeMap<String, String>,
}

impl AnalyticsEvent {
    /// Build an event with an arbitrary tag and fields, plus a fresh
    /// ISO-8601 `timestamp` captured right now (not at send time).
    ///
    /// This is the extension point for event types the collector learns
    /// about later; the named constructors below all go through it.
    pub fn with_fields<'a>(
        event_type: &str,
        fields: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        let mut event_data: BTreeMap<String, String> = fields
            .into_iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        event_data.insert("timestamp".to_string(), now_iso8601());
        Self {
            event_type: event_type.to_string(),
            event_data,
        }
    }

    /// A click on a tutorial video link for a detected issue.
    pub fn video_click(issue_type: &str, video_id: &str) -> Self {
        Self::with_fields(
            VIDEO_CLICK,
            [("issue_type", issue_type), ("video_id", video_id)],
        )
    }

    /// A click on an affiliate product link.
    pub fn affiliate_click(product_name: &str, issue_type: &str) -> Self {
        Self::with_fields(
            AFFILIATE_CLICK,
            [("product", product_name), ("issue_type", issue_type)],
        )
    }

    /// A page view, for engagement metrics.
    pub fn page_view(page_type: &str, submission_id: &str) -> Self {
        Self::with_fields(
            PAGE_VIEW,
            [("page_type", page_type), ("submission_id", submission_id)],
        )
    }
}

/// Current time as an ISO-8601 string, e.g. `2026-02-08T14:03:07.512Z`.
///
/// Millisecond precision with a `Z` suffix matches what
/// `new Date().toISOString()` produces in the browser, so the collector
/// sees the same format it always has. `chrono`'s `wasmbind` feature
/// routes this through `js_sys::Date` when running in the browser.
pub fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_video_click_shape() {
        let event = AnalyticsEvent::video_click("thermal_throttling", "dQw4w9WgXcQ");
        assert_eq!(event.event_type, "video_click");
        assert_eq!(
            event.event_data.get("issue_type").map(String::as_str),
            Some("thermal_throttling")
        );
        assert_eq!(
            event.event_data.get("video_id").map(String::as_str),
            Some("dQw4w9WgXcQ")
        );
        assert!(event.event_data.contains_key("timestamp"));
        // Exactly the three expected keys, nothing else
        assert_eq!(event.event_data.len(), 3);
    }

    #[test]
    fn test_affiliate_click_shape() {
        let event = AnalyticsEvent::affiliate_click("Arctic MX-5", "thermal_throttling");
        assert_eq!(event.event_type, "affiliate_click");
        assert_eq!(
            event.event_data.get("product").map(String::as_str),
            Some("Arctic MX-5")
        );
        assert_eq!(
            event.event_data.get("issue_type").map(String::as_str),
            Some("thermal_throttling")
        );
        assert_eq!(event.event_data.len(), 3);
    }

    #[test]
    fn test_page_view_shape() {
        let event = AnalyticsEvent::page_view("diagnostics", "abc123");
        assert_eq!(event.event_type, "page_view");
        assert_eq!(
            event.event_data.get("page_type").map(String::as_str),
            Some("diagnostics")
        );
        assert_eq!(
            event.event_data.get("submission_id").map(String::as_str),
            Some("abc123")
        );
    }

    #[test]
    fn test_timestamp_is_parseable_iso8601() {
        let event = AnalyticsEvent::page_view("diagnostics", "42");
        let stamp = event.event_data.get("timestamp").expect("timestamp present");
        assert!(
            DateTime::parse_from_rfc3339(stamp).is_ok(),
            "not ISO-8601: {}",
            stamp
        );
        assert!(stamp.ends_with('Z'), "expected UTC suffix: {}", stamp);
    }

    #[test]
    fn test_timestamp_is_fresh_per_event() {
        // Two events built back to back must each capture their own
        // timestamp, never share a cached one. With millisecond precision
        // they may still collide on a fast machine, so compare against a
        // bracketing pair of clock reads instead of against each other.
        let before = now_iso8601();
        let event = AnalyticsEvent::video_click("cpu_bottleneck", "xyz");
        let after = now_iso8601();
        let stamp = event.event_data.get("timestamp").unwrap();
        assert!(*stamp >= before && *stamp <= after);
    }

    #[test]
    fn test_serialized_wire_shape() {
        let event = AnalyticsEvent::with_fields("page_view", [("page_type", "diagnostics")]);
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event_type"], "page_view");
        assert_eq!(json["event_data"]["page_type"], "diagnostics");
        assert!(json["event_data"]["timestamp"].is_string());
        // Only the two top-level keys the collector knows about
        assert_eq!(json.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_with_fields_accepts_unknown_event_types() {
        // The collector's event taxonomy is open; a new tag must not
        // require reporter changes.
        let event = AnalyticsEvent::with_fields("share_click", [("target", "reddit")]);
        assert_eq!(event.event_type, "share_click");
        assert_eq!(
            event.event_data.get("target").map(String::as_str),
            Some("reddit")
        );
    }
}
