use dioxus::prelude::*;
use ui_kit::{Badge, EmptyState, List, ListItem, Size, Stat, ThemeFamily, Tone};

use crate::severity::Severity;
use crate::summary::{group_by_severity, Finding, Summary, PLACEHOLDER};

const REPORT_CSS: &str = include_str!("report.css");

/// What the HTML document is built from.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportView {
    pub heading: String,
    pub findings: Vec<Finding>,
    pub scans: usize,
    pub show_empty_sections: bool,
}

/// Renders a standalone HTML document with inline styles.
pub fn render_document(view: &ReportView) -> String {
    let body = dioxus_ssr::render_element(rsx! { ReportPage { view: view.clone() } });
    format!("<!DOCTYPE html>\n{body}")
}

#[component]
fn ReportPage(view: ReportView) -> Element {
    let summary = Summary::from_findings(&view.findings);
    let groups = group_by_severity(&view.findings);
    let total = summary.total();
    let scans = view.scans;
    let styles = format!("{}\n{REPORT_CSS}", ui_kit::inline_stylesheet());
    let theme = ThemeFamily::Standard.resolve(false);

    let sections: Vec<(Severity, Vec<Finding>)> = Severity::ALL
        .iter()
        .map(|severity| (*severity, groups.get(severity).cloned().unwrap_or_default()))
        .filter(|(_, found)| view.show_empty_sections || !found.is_empty())
        .collect();
    let stats: Vec<(Severity, String)> = Severity::ALL
        .iter()
        .map(|severity| (*severity, summary.count(*severity).to_string()))
        .collect();
    let total_text = total.to_string();

    rsx! {
        html { lang: "en", "data-theme": theme,
            head {
                meta { charset: "utf-8" }
                meta { name: "viewport", content: "width=device-width, initial-scale=1" }
                title { "{view.heading}" }
                style { dangerous_inner_html: "{styles}" }
            }
            body { class: "report",
                header { class: "report-header",
                    h1 { "{view.heading}" }
                    p { class: "report-subtitle", "{total} findings across {scans} scans" }
                }
                section { class: "report-stats", "aria-label": "Summary",
                    for (severity, count) in stats {
                        Stat {
                            key: "{severity}",
                            label: severity.label().to_string(),
                            value: count,
                            tone: severity.tone(),
                            size: Size::Sm,
                        }
                    }
                    Stat { label: "Total", value: total_text, tone: Tone::Primary, size: Size::Sm }
                }
                if total == 0 {
                    EmptyState {
                        title: "No vulnerabilities found",
                        description: "The scan reported no known vulnerabilities.",
                    }
                } else {
                    for (severity, found) in sections {
                        SeveritySection { key: "{severity}", severity, findings: found }
                    }
                }
            }
        }
    }
}

#[component]
fn SeveritySection(severity: Severity, findings: Vec<Finding>) -> Element {
    let count = findings.len();
    let name = severity.label();
    rsx! {
        section { class: "report-section", "data-severity": severity.key(),
            h2 { class: "report-section-title",
                Badge { tone: severity.tone(), "{name}" }
                span { class: "report-section-count", "{count}" }
            }
            if findings.is_empty() {
                p { class: "report-section-empty", "No findings" }
            } else {
                List { dividers: true,
                    for (index, finding) in findings.into_iter().enumerate() {
                        ListItem {
                            key: "{index}",
                            title: finding.title.clone(),
                            description: describe(&finding),
                            badge: finding.id.clone(),
                            badge_tone: severity.tone(),
                        }
                    }
                }
            }
        }
    }
}

fn describe(finding: &Finding) -> String {
    let fixed = finding.fixed_in.as_deref().unwrap_or(PLACEHOLDER);
    let mut text = format!("{} · fixed in {fixed}", finding.coordinate());
    if let Some(project) = &finding.project {
        text = format!("{project} · {text}");
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Vulnerability;

    fn finding(id: &str, severity: &str) -> Finding {
        Finding::from_vulnerability(
            &Vulnerability {
                id: Some(id.into()),
                title: Some(format!("Issue {id}")),
                severity: Some(severity.into()),
                package_name: Some("lodash".into()),
                version: Some("4.17.4".into()),
                fixed_in: Some("4.17.21".into()),
            },
            None,
        )
    }

    fn view(findings: Vec<Finding>) -> ReportView {
        ReportView {
            heading: "Weekly scan".into(),
            findings,
            scans: 1,
            show_empty_sections: false,
        }
    }

    #[test]
    fn document_is_standalone_html() {
        let html = render_document(&view(vec![finding("X-1", "high")]));
        assert!(html.starts_with("<!DOCTYPE html>"), "{html}");
        assert!(html.contains("<title>Weekly scan</title>"), "{html}");
        assert!(html.contains("<style>"), "{html}");
        assert!(html.contains("--ui-primary"), "{html}");
    }

    #[test]
    fn sections_run_highest_first() {
        let html = render_document(&view(vec![
            finding("L-1", "low"),
            finding("C-1", "critical"),
            finding("M-1", "moderate"),
        ]));
        let critical = html.find(r#"data-severity="critical""#).unwrap();
        let medium = html.find(r#"data-severity="medium""#).unwrap();
        let low = html.find(r#"data-severity="low""#).unwrap();
        assert!(critical < medium && medium < low, "{html}");
        assert!(!html.contains(r#"data-severity="high""#), "{html}");
        assert!(html.contains("lodash@4.17.4 · fixed in 4.17.21"), "{html}");
    }

    #[test]
    fn empty_report_shows_empty_state() {
        let html = render_document(&view(vec![]));
        assert!(html.contains("No vulnerabilities found"), "{html}");
        assert!(!html.contains("report-section"), "{html}");
    }

    #[test]
    fn empty_sections_on_request() {
        let mut v = view(vec![finding("C-1", "critical")]);
        v.show_empty_sections = true;
        let html = render_document(&v);
        assert_eq!(html.matches("No findings").count(), 5, "{html}");
    }
}
