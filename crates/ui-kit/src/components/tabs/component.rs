use std::collections::HashMap;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::class::class_names;
use crate::components::badge::Badge;
use crate::controlled::use_controllable;
use crate::ids::use_stable_id;
use crate::variant::{Orientation, Size};

/// One tab.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TabItem {
    pub value: String,
    pub label: String,
    pub icon: Option<Element>,
    pub badge: Option<String>,
    pub disabled: bool,
}

impl TabItem {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    pub fn with_icon(mut self, icon: Element) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Index of the next enabled tab from `from`, moving by `step` and
/// wrapping around. `None` when every tab is disabled.
pub fn next_enabled(disabled: &[bool], from: usize, step: isize) -> Option<usize> {
    let len = disabled.len() as isize;
    if len == 0 {
        return None;
    }
    let mut index = from as isize;
    for _ in 0..len {
        index = (index + step).rem_euclid(len);
        if !disabled[index as usize] {
            return Some(index as usize);
        }
    }
    None
}

/// Tab that takes part in the page's tab order: the active one when it can
/// take focus, otherwise the first enabled tab.
pub fn tab_stop(disabled: &[bool], active: Option<usize>) -> Option<usize> {
    active
        .filter(|&i| disabled.get(i) == Some(&false))
        .or_else(|| disabled.iter().position(|d| !d))
}

/// Value the tab strip starts on: `default_value`, else the first enabled tab.
pub fn initial_value(items: &[TabItem], default_value: Option<&str>) -> String {
    default_value
        .map(str::to_string)
        .or_else(|| items.iter().find(|t| !t.disabled).map(|t| t.value.clone()))
        .unwrap_or_default()
}

/// Tab strip with a single panel.
///
/// Controlled through `value`/`on_change`, or uncontrolled from
/// `default_value`. The panel shows `render_panel(active)` when given,
/// otherwise `children`. Arrow keys, Home and End move between enabled tabs.
#[component]
pub fn Tabs(
    items: Vec<TabItem>,
    value: Option<String>,
    default_value: Option<String>,
    on_change: Option<EventHandler<String>>,
    render_panel: Option<Callback<String, Element>>,
    #[props(default)] orientation: Orientation,
    #[props(default)] size: Size,
    #[props(default = false)] fill: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let seed = initial_value(&items, default_value.as_deref());
    let (active, select) = use_controllable(value, move || seed, on_change);
    let base_id = use_stable_id(None, "tabs");
    let mut mounted = use_signal(HashMap::<usize, Rc<MountedData>>::new);

    let disabled: Vec<bool> = items.iter().map(|t| t.disabled).collect();
    let active_index = items.iter().position(|t| t.value == active);
    let focus_stop = tab_stop(&disabled, active_index);
    let panel_id = format!("{base_id}-panel");
    let vertical = orientation == Orientation::Vertical;

    let base = vec![
        Attribute::new("class", "ui-tabs", None, false),
        Attribute::new("data-orientation", orientation.class(), None, false),
        Attribute::new("data-size", size.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    let values: Vec<String> = items.iter().map(|t| t.value.clone()).collect();
    let on_key = move |evt: KeyboardEvent, index: usize| {
        let target = match (evt.key(), vertical) {
            (Key::ArrowRight, false) | (Key::ArrowDown, true) => next_enabled(&disabled, index, 1),
            (Key::ArrowLeft, false) | (Key::ArrowUp, true) => next_enabled(&disabled, index, -1),
            (Key::Home, _) => next_enabled(&disabled, disabled.len().saturating_sub(1), 1),
            (Key::End, _) => next_enabled(&disabled, 0, -1),
            _ => None,
        };
        if let Some(target) = target {
            evt.prevent_default();
            select.call(values[target].clone());
            if let Some(node) = mounted.peek().get(&target).cloned() {
                spawn(async move {
                    let _ = node.set_focus(true).await;
                });
            }
        }
    };

    let tabs = items.into_iter().enumerate().map(|(index, item)| {
        let selected = active_index == Some(index);
        let tab_id = format!("{base_id}-tab-{index}");
        let class = class_names([
            Some("ui-tab"),
            selected.then_some("is-active"),
            item.disabled.then_some("is-disabled"),
        ]);
        let value = item.value.clone();
        let on_key = on_key.clone();
        rsx! {
            button {
                key: "{item.value}",
                id: "{tab_id}",
                class: "{class}",
                r#type: "button",
                role: "tab",
                "aria-selected": if selected { "true" } else { "false" },
                "aria-controls": if selected { "{panel_id}" },
                tabindex: if focus_stop == Some(index) { "0" } else { "-1" },
                disabled: item.disabled,
                onmounted: move |evt: MountedEvent| {
                    mounted.write().insert(index, evt.data());
                },
                onclick: move |_| select.call(value.clone()),
                onkeydown: move |evt| on_key(evt, index),
                if let Some(icon) = item.icon {
                    span { class: "ui-tab-icon", "aria-hidden": "true", {icon} }
                }
                span { class: "ui-tab-label", "{item.label}" }
                if let Some(badge) = item.badge {
                    Badge { "{badge}" }
                }
            }
        }
    });

    let active_tab_id = active_index.map(|i| format!("{base_id}-tab-{i}"));
    let panel = match render_panel {
        Some(render) => render.call(active.clone()),
        None => children,
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { ..merged,
            div {
                class: "ui-tab-list",
                role: "tablist",
                "aria-orientation": orientation.class(),
                "data-fill": if fill { "true" },
                {tabs}
            }
            div {
                id: "{panel_id}",
                class: "ui-tab-panel",
                role: "tabpanel",
                tabindex: "0",
                "aria-labelledby": active_tab_id,
                {panel}
            }
        }
    }
}
