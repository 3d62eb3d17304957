use dioxus::prelude::*;
use dioxus_primitives::dialog as prim;

use crate::components::glyphs;
use crate::controlled::use_controllable;

/// Width bucket of a [`Modal`] panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
    Full,
}

impl ModalSize {
    pub const ALL: &'static [ModalSize] = &[
        ModalSize::Sm,
        ModalSize::Md,
        ModalSize::Lg,
        ModalSize::Xl,
        ModalSize::Full,
    ];

    pub fn class(&self) -> &'static str {
        match self {
            ModalSize::Sm => "sm",
            ModalSize::Md => "md",
            ModalSize::Lg => "lg",
            ModalSize::Xl => "xl",
            ModalSize::Full => "full",
        }
    }
}

/// Centered dialog over a dimmed backdrop.
///
/// With `open` the caller owns visibility and every close request (Escape,
/// close button, backdrop) only reaches `on_open_change`. Without it the
/// modal starts from `default_open` and closes itself. Nothing renders
/// while closed.
#[component]
pub fn Modal(
    open: Option<bool>,
    #[props(default = false)] default_open: bool,
    on_open_change: Option<EventHandler<bool>>,
    title: Option<String>,
    description: Option<String>,
    #[props(default)] size: ModalSize,
    #[props(default = true)] close_on_overlay: bool,
    #[props(default = true)] show_close: bool,
    footer: Option<Element>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let (is_open, set_open) = use_controllable(open, move || default_open, on_open_change);

    if !is_open {
        return rsx! {};
    }

    let base = vec![
        Attribute::new("class", "ui-modal-panel", None, false),
        Attribute::new("data-size", size.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "ui-modal-overlay",
            "data-open": "true",
            onclick: move |_| {
                if close_on_overlay {
                    set_open.call(false);
                }
            },
            prim::DialogRoot {
                class: "ui-modal",
                open: true,
                on_open_change: move |next: bool| set_open.call(next),
                prim::DialogContent { class: "ui-modal-content",
                    div {
                        onclick: move |evt| evt.stop_propagation(),
                        ..merged,
                        if title.is_some() || show_close {
                            header { class: "ui-modal-header",
                                div { class: "ui-modal-heading",
                                    if let Some(title) = title {
                                        prim::DialogTitle { class: "ui-modal-title", "{title}" }
                                    }
                                    if let Some(description) = description {
                                        prim::DialogDescription {
                                            class: "ui-modal-description",
                                            "{description}"
                                        }
                                    }
                                }
                                if show_close {
                                    button {
                                        class: "ui-modal-close",
                                        r#type: "button",
                                        "aria-label": "Close",
                                        onclick: move |_| set_open.call(false),
                                        {glyphs::close(14)}
                                    }
                                }
                            }
                        }
                        div { class: "ui-modal-body", {children} }
                        if let Some(actions) = footer {
                            footer { class: "ui-modal-footer", {actions} }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    thread_local! {
        static OPEN: Cell<bool> = const { Cell::new(false) };
    }

    #[test]
    fn controlled_closed_ignores_default_open() {
        let html = dioxus_ssr::render_element(rsx! {
            Modal { open: false, default_open: true, title: "Hidden", "body" }
        });
        assert!(!html.contains("body"), "{html}");
        assert!(!html.contains("Hidden"), "{html}");
    }

    #[test]
    fn controlled_open_renders_slots() {
        let html = dioxus_ssr::render_element(rsx! {
            Modal {
                open: true,
                title: "Confirm",
                description: "This cannot be undone",
                size: ModalSize::Lg,
                footer: rsx! { button { "OK" } },
                "Are you sure?"
            }
        });
        assert!(html.contains("Confirm"), "{html}");
        assert!(html.contains("This cannot be undone"), "{html}");
        assert!(html.contains("Are you sure?"), "{html}");
        assert!(html.contains(r#"data-size="lg""#), "{html}");
        assert!(html.contains(r#"aria-label="Close""#), "{html}");
        assert!(html.contains("ui-modal-footer"), "{html}");
    }

    #[test]
    fn uncontrolled_starts_from_default() {
        let closed = dioxus_ssr::render_element(rsx! { Modal { "inside" } });
        assert!(!closed.contains("inside"), "{closed}");
        let open = dioxus_ssr::render_element(rsx! {
            Modal { default_open: true, show_close: false, "inside" }
        });
        assert!(open.contains("inside"), "{open}");
        assert!(!open.contains("ui-modal-header"), "{open}");
    }

    #[test]
    fn controlled_open_follows_the_prop_within_one_mount() {
        fn app() -> Element {
            rsx! {
                Modal { open: OPEN.get(), on_open_change: move |_| {}, title: "Confirm", "body" }
            }
        }

        OPEN.set(false);
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        assert!(!dioxus_ssr::render(&dom).contains("ui-modal-overlay"));

        OPEN.set(true);
        dom.mark_dirty(ScopeId::APP);
        dom.render_immediate_to_vec();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("ui-modal-overlay"), "{html}");
        assert!(html.contains("Confirm"), "{html}");

        OPEN.set(false);
        dom.mark_dirty(ScopeId::APP);
        dom.render_immediate_to_vec();
        let html = dioxus_ssr::render(&dom);
        assert!(!html.contains("ui-modal-overlay"), "{html}");
        assert!(!html.contains("Confirm"), "{html}");
    }
}
