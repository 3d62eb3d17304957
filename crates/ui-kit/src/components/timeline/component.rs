use dioxus::prelude::*;

use crate::ids::item_key;
use crate::status::StepStatus;
use crate::variant::{Orientation, Tone};

/// One event on a [`Timeline`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimelineEntry {
    pub id: Option<String>,
    pub title: String,
    pub time: Option<String>,
    pub description: Option<String>,
    pub tone: Tone,
    pub icon: Option<Element>,
}

impl TimelineEntry {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn with_icon(mut self, icon: Element) -> Self {
        self.icon = Some(icon);
        self
    }
}

/// Chronological sequence of entries.
///
/// Entries before `current` render as past, the entry at `current` as
/// current and later ones as future. Without `current` every entry is past.
#[component]
pub fn Timeline(
    entries: Vec<TimelineEntry>,
    current: Option<usize>,
    #[props(default = Orientation::Vertical)] orientation: Orientation,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![
        Attribute::new("class", "ui-timeline", None, false),
        Attribute::new("data-orientation", orientation.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    let pointer = current.unwrap_or(entries.len());
    let statuses = StepStatus::derive_all(entries.len(), pointer);
    let last = entries.len().saturating_sub(1);
    let rows = entries
        .into_iter()
        .zip(statuses)
        .enumerate()
        .map(|(index, (entry, status))| {
            let key = item_key(entry.id.as_deref(), index);
            (key, index, entry, status)
        });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        ol {
            ..merged,
            for (key, index, entry, status) in rows {
                TimelineItem { key: "{key}", entry, status, connector: index < last }
            }
        }
    }
}

/// One row of a [`Timeline`]. `connector` draws the line to the next row.
#[component]
pub fn TimelineItem(
    entry: TimelineEntry,
    #[props(default = StepStatus::Completed)] status: StepStatus,
    #[props(default = false)] connector: bool,
) -> Element {
    rsx! {
        li {
            class: "ui-timeline-item",
            "data-status": status.timeline_class(),
            "data-tone": entry.tone.class(),
            "aria-current": if status == StepStatus::Current { "step" },
            div { class: "ui-timeline-marker", "aria-hidden": "true",
                if let Some(icon) = entry.icon {
                    {icon}
                } else {
                    span { class: "ui-timeline-dot" }
                }
            }
            if connector {
                div { class: "ui-timeline-connector", "aria-hidden": "true" }
            }
            div { class: "ui-timeline-content",
                div { class: "ui-timeline-heading",
                    span { class: "ui-timeline-title", "{entry.title}" }
                    if let Some(at) = entry.time {
                        time { class: "ui-timeline-time", "{at}" }
                    }
                }
                if let Some(description) = entry.description {
                    p { class: "ui-timeline-description", "{description}" }
                }
            }
        }
    }
}
