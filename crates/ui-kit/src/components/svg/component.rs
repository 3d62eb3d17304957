use dioxus::prelude::*;

use crate::variant::Size;

/// Inline SVG drawing. Children are the shapes (`path`, `circle`, ...).
///
/// A `title` gives the drawing an accessible name; untitled drawings are
/// treated as decoration.
#[component]
pub fn Svg(
    #[props(default = "0 0 24 24".to_string())] view_box: String,
    #[props(default)] size: Size,
    title: Option<String>,
    #[props(default = "currentColor".to_string())] fill: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let px = size.icon_px();
    let base = vec![Attribute::new("class", "ui-svg", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let titled = title.is_some();

    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "{view_box}",
            width: "{px}",
            height: "{px}",
            fill: "{fill}",
            "role": if titled { "img" },
            "aria-hidden": if !titled { "true" },
            ..merged,
            if let Some(text) = title {
                title { "{text}" }
            }
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_view_box_and_size() {
        let html = dioxus_ssr::render_element(rsx! {
            Svg { size: Size::Lg, path { d: "M0 0h24v24H0z" } }
        });
        assert!(html.contains(r#"viewBox="0 0 24 24""#), "{html}");
        assert!(html.contains(r#"width="24""#), "{html}");
        assert!(html.contains(r#"aria-hidden="true""#), "{html}");
    }

    #[test]
    fn title_names_the_drawing() {
        let html = dioxus_ssr::render_element(rsx! {
            Svg { title: "Logo", circle { r: "4" } }
        });
        assert!(html.contains("<title>Logo</title>"), "{html}");
        assert!(html.contains(r#"role="img""#), "{html}");
    }
}
