use dioxus::prelude::*;

use crate::components::glyphs;
use crate::ids::item_key;
use crate::status::StepStatus;
use crate::variant::{Orientation, Size};

/// One step of a [`StepIndicator`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StepItem {
    pub id: Option<String>,
    pub title: String,
    pub description: Option<String>,
}

impl StepItem {
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

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Progress through a fixed sequence of steps.
///
/// Steps before `current` are completed and, when `on_step_click` is set,
/// clickable so the user can go back. The current and upcoming steps never
/// are.
#[component]
pub fn StepIndicator(
    steps: Vec<StepItem>,
    #[props(default)] current: usize,
    #[props(default)] orientation: Orientation,
    #[props(default)] size: Size,
    on_step_click: Option<EventHandler<usize>>,
    #[props(default = "Progress".to_string())] aria_label: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![
        Attribute::new("class", "ui-steps", None, false),
        Attribute::new("data-orientation", orientation.class(), None, false),
        Attribute::new("data-size", size.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    let statuses = StepStatus::derive_all(steps.len(), current);
    let last = steps.len().saturating_sub(1);
    let rows = steps
        .into_iter()
        .zip(statuses)
        .enumerate()
        .map(|(index, (step, status))| {
            let key = item_key(step.id.as_deref(), index);
            let clickable = status == StepStatus::Completed && on_step_click.is_some();
            (key, index, step, status, clickable)
        });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav { "aria-label": "{aria_label}", ..merged,
            ol { class: "ui-steps-list",
                for (key, index, step, status, clickable) in rows {
                    li {
                        key: "{key}",
                        class: "ui-step",
                        "data-status": status.class(),
                        "aria-current": if status == StepStatus::Current { "step" },
                        if clickable {
                            button {
                                class: "ui-step-trigger",
                                r#type: "button",
                                onclick: move |_| {
                                    if let Some(handler) = on_step_click {
                                        handler.call(index);
                                    }
                                },
                                StepMarker { index, status }
                                StepText { step: step.clone() }
                            }
                        } else {
                            div { class: "ui-step-trigger",
                                StepMarker { index, status }
                                StepText { step: step.clone() }
                            }
                        }
                        if index < last {
                            div { class: "ui-step-connector", "aria-hidden": "true" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StepMarker(index: usize, status: StepStatus) -> Element {
    let number = index + 1;
    rsx! {
        span { class: "ui-step-marker", "aria-hidden": "true",
            if status == StepStatus::Completed {
                {glyphs::check(12)}
            } else {
                "{number}"
            }
        }
    }
}

#[component]
fn StepText(step: StepItem) -> Element {
    rsx! {
        span { class: "ui-step-text",
            span { class: "ui-step-title", "{step.title}" }
            if let Some(description) = step.description {
                span { class: "ui-step-description", "{description}" }
            }
        }
    }
}
