use dioxus::prelude::*;

use crate::components::glyphs;
use crate::ids::item_key;
use crate::overflow::{truncate, Slot};

/// One level of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BreadcrumbItem {
    pub id: Option<String>,
    pub label: String,
    pub href: Option<String>,
    pub icon: Option<Element>,
}

impl BreadcrumbItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_icon(mut self, icon: Element) -> Self {
        self.icon = Some(icon);
        self
    }
}

/// Trail of links to the current page, which is the last item.
///
/// With `max_items` the middle of a long trail collapses into a single
/// inert ellipsis; the first item and the current page always stay.
/// `on_navigate` receives the index of the clicked item and suppresses the
/// link's default navigation.
#[component]
pub fn Breadcrumb(
    items: Vec<BreadcrumbItem>,
    max_items: Option<usize>,
    separator: Option<Element>,
    on_navigate: Option<EventHandler<usize>>,
    #[props(default = "Breadcrumb".to_string())] aria_label: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "ui-breadcrumb", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    let len = items.len();
    let slots = match max_items {
        Some(max) => truncate(len, max, None),
        None => (0..len).map(Slot::Item).collect(),
    };
    let separator = separator.unwrap_or_else(|| glyphs::chevron(10));
    let ids: Vec<Option<&str>> = items.iter().map(|item| item.id.as_deref()).collect();

    let nodes = trail_nodes(&ids, slots).into_iter().map(|node| match node.kind {
        NodeKind::Gap => rsx! {
            li {
                key: "{node.key}",
                class: "ui-breadcrumb-ellipsis",
                "aria-hidden": "true",
                "\u{2026}"
            }
        },
        NodeKind::Separator => rsx! {
            li {
                key: "{node.key}",
                class: "ui-breadcrumb-separator",
                role: "presentation",
                "aria-hidden": "true",
                {separator.clone()}
            }
        },
        NodeKind::Item(index) => {
            let item = items[index].clone();
            let is_current = index + 1 == len;
            rsx! {
                li { key: "{node.key}", class: "ui-breadcrumb-item",
                    BreadcrumbCrumb { item, index, is_current, on_navigate }
                }
            }
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav { "aria-label": "{aria_label}", ..merged,
            ol { class: "ui-breadcrumb-list", {nodes.into_iter()} }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeKind {
    Item(usize),
    Gap,
    Separator,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct TrailNode {
    key: String,
    kind: NodeKind,
}

/// Visible slots interleaved with separators. Each kind keys under its own
/// prefix so a caller id can never collide with a placeholder or separator.
fn trail_nodes(ids: &[Option<&str>], slots: Vec<Slot>) -> Vec<TrailNode> {
    let last = slots.len().saturating_sub(1);
    let mut nodes = Vec::with_capacity(slots.len() * 2);
    for (position, slot) in slots.into_iter().enumerate() {
        nodes.push(match slot {
            Slot::Ellipsis => TrailNode {
                key: format!("gap:{position}"),
                kind: NodeKind::Gap,
            },
            Slot::Item(index) => TrailNode {
                key: format!("item:{}", item_key(ids.get(index).copied().flatten(), index)),
                kind: NodeKind::Item(index),
            },
        });
        if position < last {
            nodes.push(TrailNode {
                key: format!("sep:{position}"),
                kind: NodeKind::Separator,
            });
        }
    }
    nodes
}

#[component]
fn BreadcrumbCrumb(
    item: BreadcrumbItem,
    index: usize,
    is_current: bool,
    on_navigate: Option<EventHandler<usize>>,
) -> Element {
    if is_current {
        return rsx! {
            span { class: "ui-breadcrumb-current", "aria-current": "page",
                if let Some(icon) = item.icon {
                    span { class: "ui-breadcrumb-icon", "aria-hidden": "true", {icon} }
                }
                "{item.label}"
            }
        };
    }

    let navigate = move |evt: MouseEvent| {
        if let Some(handler) = on_navigate {
            evt.prevent_default();
            handler.call(index);
        }
    };

    match item.href {
        Some(href) => rsx! {
            a { class: "ui-breadcrumb-link", href: "{href}", onclick: navigate,
                if let Some(icon) = item.icon {
                    span { class: "ui-breadcrumb-icon", "aria-hidden": "true", {icon} }
                }
                "{item.label}"
            }
        },
        None if on_navigate.is_some() => rsx! {
            button { class: "ui-breadcrumb-link", r#type: "button", onclick: navigate,
                if let Some(icon) = item.icon {
                    span { class: "ui-breadcrumb-icon", "aria-hidden": "true", {icon} }
                }
                "{item.label}"
            }
        },
        None => rsx! {
            span { class: "ui-breadcrumb-text",
                if let Some(icon) = item.icon {
                    span { class: "ui-breadcrumb-icon", "aria-hidden": "true", {icon} }
                }
                "{item.label}"
            }
        },
    }
}
