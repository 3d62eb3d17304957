use dioxus::prelude::*;

use crate::class::class_names;
use crate::components::badge::Badge;
use crate::ids::item_key;
use crate::variant::{Size, Tone};

/// Vertical list container.
#[component]
pub fn List(
    #[props(default = false)] dividers: bool,
    #[props(default)] size: Size,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "ui-list", None, false),
        Attribute::new("data-size", size.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        ul {
            role: "list",
            "data-dividers": if dividers { "true" },
            ..merged,
            {children}
        }
    }
}

/// One row of a [`List`].
///
/// With `on_click` the row acts as a button: it takes the button role, joins
/// the tab order and answers Enter and Space. `disabled` removes all three
/// and greys the row out.
#[component]
pub fn ListItem(
    title: String,
    description: Option<String>,
    icon: Option<Element>,
    badge: Option<String>,
    #[props(default)] badge_tone: Tone,
    meta: Option<Element>,
    #[props(default = false)] selected: bool,
    #[props(default = false)] disabled: bool,
    on_click: Option<EventHandler<()>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let interactive = on_click.is_some() && !disabled;
    let class = class_names([
        Some("ui-list-item"),
        interactive.then_some("is-interactive"),
        disabled.then_some("is-disabled"),
        selected.then_some("is-selected"),
    ]);
    let base = vec![Attribute::new("class", class, None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    let activate = move || {
        if let (true, Some(handler)) = (interactive, on_click) {
            handler.call(());
        }
    };

    rsx! {
        li {
            role: if interactive { "button" },
            tabindex: if interactive { "0" },
            "aria-disabled": if disabled { "true" },
            "aria-current": if selected { "true" },
            onclick: move |_| activate(),
            onkeydown: move |evt: KeyboardEvent| {
                let pressed = match evt.key() {
                    Key::Enter => true,
                    Key::Character(c) => c == " ",
                    _ => false,
                };
                if pressed && interactive {
                    evt.prevent_default();
                    activate();
                }
            },
            ..merged,
            if let Some(icon) = icon {
                span { class: "ui-list-item-icon", "aria-hidden": "true", {icon} }
            }
            div { class: "ui-list-item-body",
                span { class: "ui-list-item-title", "{title}" }
                if let Some(description) = description {
                    span { class: "ui-list-item-description", "{description}" }
                }
            }
            if let Some(badge) = badge {
                Badge { tone: badge_tone, "{badge}" }
            }
            if let Some(meta) = meta {
                span { class: "ui-list-item-meta", {meta} }
            }
        }
    }
}

/// Data-driven list entry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListEntry {
    pub id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub badge: Option<String>,
    pub disabled: bool,
}

impl ListEntry {
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

    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }
}

/// Render `entries` as a [`List`], keyed by id (or position when absent).
/// `on_select` receives the entry's key.
#[component]
pub fn ListItems(
    entries: Vec<ListEntry>,
    #[props(default = false)] dividers: bool,
    selected: Option<String>,
    on_select: Option<EventHandler<String>>,
) -> Element {
    let rows = entries.into_iter().enumerate().map(|(index, entry)| {
        let key = item_key(entry.id.as_deref(), index);
        let is_selected = selected.as_deref() == Some(key.as_str());
        let on_click = on_select.map(|handler| {
            let key = key.clone();
            EventHandler::new(move |_: ()| handler.call(key.clone()))
        });
        rsx! {
            ListItem {
                key: "{key}",
                title: entry.title,
                description: entry.description,
                badge: entry.badge,
                disabled: entry.disabled,
                selected: is_selected,
                on_click,
            }
        }
    });

    rsx! {
        List { dividers, {rows} }
    }
}
