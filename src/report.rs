//! Presentation model for diagnostic results: the detected issues the
//! server attaches to a submission, each with a tutorial video and the
//! affiliate products that fix it.

/// How urgent a detected issue is. Ordering is display order: high
/// severity issues render first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }

    /// CSS class suffix for the severity badge.
    pub fn css_class(self) -> &'static str {
        match self {
            Severity::High => "severity-high",
            Severity::Medium => "severity-medium",
            Severity::Low => "severity-low",
        }
    }
}

/// An affiliate product recommended as part of a fix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub name: &'static str,
    pub price: &'static str,
    pub url: &'static str,
}

/// One detected issue, as rendered on the diagnostics page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticIssue {
    /// Stable tag used in analytics events (`thermal_throttling`, ...).
    pub issue_type: &'static str,
    pub severity: Severity,
    pub title: &'static str,
    pub description: &'static str,
    pub impact: &'static str,
    pub potential_fps_gain: &'static str,
    pub fix_difficulty: &'static str,
    pub fix_time: &'static str,
    pub fix_cost: &'static str,
    pub video_id: &'static str,
    pub video_title: &'static str,
    pub products: Vec<Product>,
}

/// The issue catalog, in display order (severity high to low).
///
/// The detection itself happens server-side against the submitted benchmark
/// data; this is the client-side copy of what each issue looks like.
pub fn issue_catalog() -> Vec<DiagnosticIssue> {
    vec![
        DiagnosticIssue {
            issue_type: "thermal_throttling",
            severity: Severity::High,
            title: "Thermal Throttling Detected!",
            description: "Your GPU is running hot enough to throttle performance \
                          to protect itself. A repaste and fresh thermal pads \
                          usually bring temperatures down 10-15\u{b0}C.",
            impact: "You're losing a significant slice of your GPU's potential.",
            potential_fps_gain: "+15-25%",
            fix_difficulty: "Easy",
            fix_time: "30-45 minutes",
            fix_cost: "\u{a3}15-25",
            video_id: "rV75MS2fqAM",
            video_title: "How to Repaste Your GPU - Complete Guide",
            products: vec![
                Product {
                    name: "Noctua NT-H1 3.5g",
                    price: "\u{a3}8",
                    url: "https://amzn.to/4nj7P1z",
                },
                Product {
                    name: "Thermal Pads 13W",
                    price: "\u{a3}12",
                    url: "https://amzn.to/4ht4USI",
                },
            ],
        },
        DiagnosticIssue {
            issue_type: "cpu_bottleneck",
            severity: Severity::Medium,
            title: "CPU Bottleneck Detected",
            description: "Your GPU sits well below full utilization during \
                          gaming; the CPU can't feed it frames fast enough. \
                          Check the used market for a faster chip on your \
                          platform.",
            impact: "Your GPU idles while your CPU struggles to keep up.",
            potential_fps_gain: "+10-20%",
            fix_difficulty: "Medium",
            fix_time: "1-2 hours",
            fix_cost: "\u{a3}40-150 (used market)",
            video_id: "L3m6YsacsUY",
            video_title: "Is Your CPU Bottlenecking Your GPU? How to Tell",
            // No affiliate program for CPUs; the advice points at the used
            // market instead.
            products: vec![],
        },
        DiagnosticIssue {
            issue_type: "low_ram",
            severity: Severity::Low,
            title: "More RAM Recommended",
            description: "Modern games benefit from 16GB+ for smoother frame \
                          pacing and shorter load times.",
            impact: "May stutter in memory-heavy games.",
            potential_fps_gain: "+5-15 FPS in some games",
            fix_difficulty: "Easy",
            fix_time: "10 minutes",
            fix_cost: "\u{a3}18-25",
            video_id: "9nrkJafBSdk",
            video_title: "RAM Upgrade Guide - Does More RAM = More FPS?",
            products: vec![
                Product {
                    name: "16GB DDR4 Kit",
                    price: "\u{a3}25",
                    url: "https://amzn.to/ram-ddr4",
                },
                Product {
                    name: "16GB DDR3 Kit",
                    price: "\u{a3}18",
                    url: "https://amzn.to/ram-ddr3",
                },
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_display_order() {
        assert!(Severity::High < Severity::Medium);
        assert!(Severity::Medium < Severity::Low);
    }

    #[test]
    fn test_catalog_is_sorted_by_severity() {
        let catalog = issue_catalog();
        let severities: Vec<_> = catalog.iter().map(|issue| issue.severity).collect();
        let mut sorted = severities.clone();
        sorted.sort();
        assert_eq!(severities, sorted);
    }

    #[test]
    fn test_every_issue_has_a_tutorial_video() {
        for issue in issue_catalog() {
            assert!(!issue.video_id.is_empty(), "{} lacks a video", issue.issue_type);
            assert!(
                !issue.video_title.is_empty(),
                "{} lacks a video title",
                issue.issue_type
            );
        }
    }

    #[test]
    fn test_issue_tags_are_unique_snake_case() {
        let catalog = issue_catalog();
        let mut tags: Vec<_> = catalog.iter().map(|issue| issue.issue_type).collect();
        tags.sort_unstable();
        tags.dedup();
        assert_eq!(tags.len(), catalog.len(), "duplicate issue tags");
        for tag in tags {
            assert!(
                tag.chars().all(|c| c.is_ascii_lowercase() || c == '_'),
                "tag {} is not snake_case",
                tag
            );
        }
    }

    #[test]
    fn test_cpu_bottleneck_has_no_affiliate_products() {
        let catalog = issue_catalog();
        let cpu = catalog
            .iter()
            .find(|issue| issue.issue_type == "cpu_bottleneck")
            .unwrap();
        assert!(cpu.products.is_empty());
    }
}
