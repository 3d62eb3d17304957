use dioxus::prelude::*;

use crate::components::glyphs;
use crate::variant::{Size, Tone};

/// Direction of change shown next to a stat value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    pub const ALL: &'static [Trend] = &[Trend::Up, Trend::Down, Trend::Flat];

    pub fn from_delta(delta: f64) -> Self {
        if delta > 0.0 {
            Trend::Up
        } else if delta < 0.0 {
            Trend::Down
        } else {
            Trend::Flat
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Flat => "flat",
        }
    }

    /// Tone of the change; `inverted` is for metrics where lower is better.
    pub fn tone(&self, inverted: bool) -> Tone {
        match (self, inverted) {
            (Trend::Flat, _) => Tone::Neutral,
            (Trend::Up, false) | (Trend::Down, true) => Tone::Success,
            (Trend::Up, true) | (Trend::Down, false) => Tone::Danger,
        }
    }
}

/// Format a delta as a signed percentage with one decimal.
pub fn format_delta(delta: f64) -> String {
    if delta > 0.0 {
        format!("+{delta:.1}%")
    } else {
        format!("{delta:.1}%")
    }
}

/// A labelled headline number with an optional change indicator.
#[component]
pub fn Stat(
    label: String,
    value: String,
    /// Percentage change; drives the trend when `trend` is not set.
    delta: Option<f64>,
    /// Replaces the formatted delta text.
    delta_label: Option<String>,
    trend: Option<Trend>,
    #[props(default = false)] invert_trend: bool,
    help: Option<String>,
    icon: Option<Element>,
    #[props(default)] tone: Tone,
    #[props(default)] size: Size,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![
        Attribute::new("class", "ui-stat", None, false),
        Attribute::new("data-tone", tone.class(), None, false),
        Attribute::new("data-size", size.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    let trend = trend.or(delta.map(Trend::from_delta));
    let change = delta_label.or(delta.map(format_delta));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            div { class: "ui-stat-header",
                if let Some(icon) = icon {
                    span { class: "ui-stat-icon", "aria-hidden": "true", {icon} }
                }
                span { class: "ui-stat-label", "{label}" }
            }
            span { class: "ui-stat-value", "{value}" }
            if let (Some(trend), Some(change)) = (trend, change) {
                span {
                    class: "ui-stat-change",
                    "data-trend": trend.class(),
                    "data-tone": trend.tone(invert_trend).class(),
                    span { "aria-hidden": "true",
                        {match trend {
                            Trend::Up => glyphs::trend_up(12),
                            Trend::Down => glyphs::trend_down(12),
                            Trend::Flat => glyphs::trend_flat(12),
                        }}
                    }
                    "{change}"
                }
            }
            if let Some(help) = help {
                span { class: "ui-stat-help", "{help}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn trend_follows_delta_sign() {
        assert_eq!(Trend::from_delta(2.5), Trend::Up);
        assert_eq!(Trend::from_delta(-0.1), Trend::Down);
        assert_eq!(Trend::from_delta(0.0), Trend::Flat);
    }

    #[test]
    fn inverted_metrics_swap_tones() {
        assert_eq!(Trend::Up.tone(false), Tone::Success);
        assert_eq!(Trend::Up.tone(true), Tone::Danger);
        assert_eq!(Trend::Flat.tone(true), Tone::Neutral);
    }

    #[test]
    fn delta_formatting() {
        assert_eq!(format_delta(12.34), "+12.3%");
        assert_eq!(format_delta(-4.0), "-4.0%");
        assert_eq!(format_delta(0.0), "0.0%");
    }

    #[test]
    fn renders_value_and_change() {
        let html = dioxus_ssr::render_element(rsx! {
            Stat { label: "Revenue", value: "$1,200", delta: -3.0 }
        });
        assert!(html.contains("$1,200"), "{html}");
        assert!(html.contains(r#"data-trend="down""#), "{html}");
        assert!(html.contains("-3.0%"), "{html}");
    }

    #[test]
    fn no_change_row_without_delta() {
        let html = dioxus_ssr::render_element(rsx! {
            Stat { label: "Users", value: "42", help: "last 30 days" }
        });
        assert!(!html.contains("ui-stat-change"), "{html}");
        assert!(html.contains("last 30 days"), "{html}");
    }
}
