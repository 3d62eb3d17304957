use dioxus::prelude::*;

use crate::components::glyphs;
use crate::variant::Size;

/// Placeholder for a view with nothing to show yet.
///
/// `icon` replaces the default inbox glyph; `action` holds buttons or links.
#[component]
pub fn EmptyState(
    title: String,
    description: Option<String>,
    icon: Option<Element>,
    action: Option<Element>,
    #[props(default)] size: Size,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![
        Attribute::new("class", "ui-empty-state", None, false),
        Attribute::new("data-size", size.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let glyph = icon.unwrap_or_else(|| glyphs::inbox(size.icon_px() * 2));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            role: "status",
            ..merged,
            div { class: "ui-empty-state-icon", "aria-hidden": "true", {glyph} }
            h3 { class: "ui-empty-state-title", "{title}" }
            if let Some(description) = description {
                p { class: "ui-empty-state-description", "{description}" }
            }
            if let Some(action) = action {
                div { class: "ui-empty-state-action", {action} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_title_description_and_action() {
        let html = dioxus_ssr::render_element(rsx! {
            EmptyState {
                title: "No results",
                description: "Try another search",
                action: rsx! { button { "Reset" } },
            }
        });
        assert!(html.contains("No results"), "{html}");
        assert!(html.contains("Try another search"), "{html}");
        assert!(html.contains("<button>Reset</button>"), "{html}");
        assert!(html.contains("<svg"), "{html}");
    }

    #[test]
    fn caller_icon_replaces_default() {
        let html = dioxus_ssr::render_element(rsx! {
            EmptyState { title: "Empty", icon: rsx! { span { class: "mine" } } }
        });
        assert!(html.contains(r#"class="mine""#), "{html}");
        assert!(!html.contains("<svg"), "{html}");
    }
}
