use dioxus::prelude::*;

use crate::class::class_names;
use crate::components::form_field::{use_field_context, FieldIds};
use crate::components::glyphs;
use crate::components::label::Label;
use crate::controlled::use_controllable;
use crate::ids::use_stable_id;
use crate::variant::Size;

/// Single-line text input.
///
/// Pass `value` (with `on_change`) to control it; otherwise it keeps its own
/// value starting from `default_value`. Inside a `FormField` it takes the
/// field's id and description links instead of rendering its own label.
#[component]
pub fn TextField(
    value: Option<String>,
    #[props(default)] default_value: String,
    on_change: Option<EventHandler<String>>,
    label: Option<String>,
    help: Option<String>,
    error: Option<String>,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    id: Option<String>,
    name: Option<String>,
    #[props(default = false)] clearable: bool,
    #[props(default = false)] required: bool,
    #[props(default = false)] disabled: bool,
    #[props(default = false)] read_only: bool,
    prefix: Option<Element>,
    suffix: Option<Element>,
    #[props(default)] size: Size,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let field = use_field_context();
    let own_id = use_stable_id(id.clone(), "text-field");
    let (current, set_value) = use_controllable(value, move || default_value, on_change);
    let mut revealed = use_signal(|| false);

    let error = error.filter(|e| !e.is_empty());
    let disabled = disabled || field.as_ref().is_some_and(|f| f.disabled);
    let required = required || field.as_ref().is_some_and(|f| f.required);
    let invalid = error.is_some() || field.as_ref().is_some_and(|f| f.has_error);

    // An explicit id beats the enclosing field's.
    let (ids, described_by) = match (&field, &id) {
        (Some(field), None) => (field.ids.clone(), field.described_by()),
        _ => {
            let ids = FieldIds::new(own_id);
            let described = ids.described_by(help.is_some(), error.is_some());
            (ids, described)
        }
    };
    let standalone = field.is_none() || id.is_some();

    let is_password = input_type == "password";
    let shown_type = if is_password && revealed() {
        "text".to_string()
    } else {
        input_type.clone()
    };
    let show_clear = clearable && !current.is_empty() && !disabled && !read_only;

    let class = class_names([
        Some("ui-text-field"),
        invalid.then_some("is-invalid"),
        disabled.then_some("is-disabled"),
    ]);
    let base = vec![Attribute::new("class", "ui-text-field-input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "{class}", "data-size": size.class(),
            if standalone {
                if let Some(label) = label {
                    Label { html_for: ids.control.clone(), required, disabled, size, "{label}" }
                }
            }
            div { class: "ui-text-field-frame",
                if let Some(prefix) = prefix {
                    span { class: "ui-text-field-affix", {prefix} }
                }
                input {
                    id: "{ids.control}",
                    name,
                    r#type: "{shown_type}",
                    value: "{current}",
                    placeholder: "{placeholder}",
                    disabled,
                    readonly: read_only,
                    required,
                    "aria-invalid": if invalid { "true" },
                    "aria-describedby": described_by,
                    oninput: move |evt: FormEvent| set_value.call(evt.value()),
                    ..merged,
                }
                if show_clear {
                    button {
                        r#type: "button",
                        class: "ui-text-field-action",
                        "aria-label": "Clear",
                        onclick: move |_| set_value.call(String::new()),
                        {glyphs::close(12)}
                    }
                }
                if is_password && !disabled {
                    button {
                        r#type: "button",
                        class: "ui-text-field-action",
                        "aria-label": if revealed() { "Hide password" } else { "Show password" },
                        "aria-pressed": if revealed() { "true" } else { "false" },
                        onclick: move |_| revealed.toggle(),
                        {glyphs::eye(14, !revealed())}
                    }
                }
                if let Some(suffix) = suffix {
                    span { class: "ui-text-field-affix", {suffix} }
                }
            }
            if standalone {
                if let Some(error) = error {
                    p { id: "{ids.error}", class: "ui-text-field-error", role: "alert", "{error}" }
                }
                if let Some(help) = help {
                    p { id: "{ids.help}", class: "ui-text-field-help", "{help}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::form_field::FormField;
    use crate::ids::{IdContext, IdProvider, SequentialIds};
    use std::cell::RefCell;

    thread_local! {
        static PROPOSED: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
        static SUPPLIED: RefCell<String> = const { RefCell::new(String::new()) };
    }

    #[test]
    fn controlled_value_only_moves_through_callback() {
        #[component]
        fn Typist() -> Element {
            let (current, set) = use_controllable(
                Some("fixed".to_string()),
                String::new,
                Some(EventHandler::new(|next: String| {
                    PROPOSED.with(|p| p.borrow_mut().push(next));
                })),
            );
            use_hook(move || set.call("fixedx".to_string()));
            rsx! { input { value: "{current}" } }
        }

        PROPOSED.with(|p| p.borrow_mut().clear());
        let mut dom = VirtualDom::new(Typist);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains(r#"value="fixed""#), "{html}");
        PROPOSED.with(|p| assert_eq!(*p.borrow(), vec!["fixedx".to_string()]));
    }

    #[test]
    fn mounted_text_field_displays_only_the_supplied_value() {
        fn app() -> Element {
            let value = SUPPLIED.with(|v| v.borrow().clone());
            rsx! {
                TextField {
                    value,
                    default_value: "ignored",
                    clearable: true,
                    on_change: move |next: String| PROPOSED.with(|p| p.borrow_mut().push(next)),
                }
            }
        }

        PROPOSED.with(|p| p.borrow_mut().clear());
        SUPPLIED.with(|v| *v.borrow_mut() = "fixed".to_string());
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains(r#"value="fixed""#), "{html}");
        assert!(!html.contains("ignored"), "{html}");

        // Re-rendering without a new value keeps the supplied one.
        dom.mark_dirty(ScopeId::APP);
        dom.render_immediate_to_vec();
        assert!(dioxus_ssr::render(&dom).contains(r#"value="fixed""#));

        SUPPLIED.with(|v| *v.borrow_mut() = "fixedx".to_string());
        dom.mark_dirty(ScopeId::APP);
        dom.render_immediate_to_vec();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains(r#"value="fixedx""#), "{html}");
        PROPOSED.with(|p| assert!(p.borrow().is_empty()));
    }

    #[test]
    fn uncontrolled_seeds_from_default() {
        let html = dioxus_ssr::render_element(rsx! {
            TextField { default_value: "seed", clearable: true }
        });
        assert!(html.contains(r#"value="seed""#), "{html}");
        assert!(html.contains(r#"aria-label="Clear""#), "{html}");
    }

    #[test]
    fn error_marks_invalid_and_links_description() {
        let html = dioxus_ssr::render_element(rsx! {
            TextField { id: "email", label: "Email", error: "Invalid address", value: "x" }
        });
        assert!(html.contains(r#"aria-invalid="true""#), "{html}");
        assert!(html.contains(r#"aria-describedby="email-error""#), "{html}");
        assert!(html.contains(r#"for="email""#), "{html}");
    }

    #[test]
    fn password_has_reveal_toggle() {
        let html = dioxus_ssr::render_element(rsx! {
            TextField { input_type: "password", value: "secret" }
        });
        assert!(html.contains(r#"type="password""#), "{html}");
        assert!(html.contains(r#"aria-label="Show password""#), "{html}");
    }

    #[test]
    fn adopts_enclosing_field_ids() {
        let html = dioxus_ssr::render_element(rsx! {
            IdProvider { source: IdContext::new(SequentialIds::new()),
                FormField { label: "Name", help: "Full name",
                    TextField {}
                }
            }
        });
        assert!(html.contains(r#"id="field-1""#), "{html}");
        assert!(html.contains(r#"aria-describedby="field-1-help""#), "{html}");
        assert_eq!(html.matches("<label").count(), 1, "{html}");
    }
}
