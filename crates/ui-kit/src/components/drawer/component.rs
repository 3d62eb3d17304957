use dioxus::prelude::*;
use dioxus_primitives::dialog as prim;

use crate::components::glyphs;
use crate::controlled::use_controllable;
use crate::variant::Size;

/// Which edge of the screen the drawer slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawerPlacement {
    Top,
    #[default]
    Right,
    Bottom,
    Left,
}

impl DrawerPlacement {
    pub const ALL: &'static [DrawerPlacement] = &[
        DrawerPlacement::Top,
        DrawerPlacement::Right,
        DrawerPlacement::Bottom,
        DrawerPlacement::Left,
    ];

    pub fn class(&self) -> &'static str {
        match self {
            DrawerPlacement::Top => "top",
            DrawerPlacement::Right => "right",
            DrawerPlacement::Bottom => "bottom",
            DrawerPlacement::Left => "left",
        }
    }
}

/// Panel sliding in from a screen edge over a dimmed overlay.
///
/// Follows the same open contract as [`Modal`](crate::components::modal::Modal):
/// `open` makes it controlled, otherwise it starts from `default_open`.
/// The panel sits inside the focus-trapping dialog primitive and takes focus
/// when it opens, so Escape works before the user clicks into it.
#[component]
pub fn Drawer(
    open: Option<bool>,
    #[props(default = false)] default_open: bool,
    on_open_change: Option<EventHandler<bool>>,
    #[props(default)] placement: DrawerPlacement,
    #[props(default)] size: Size,
    title: Option<String>,
    description: Option<String>,
    #[props(default = true)] close_on_overlay: bool,
    #[props(default = true)] close_on_escape: bool,
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
        Attribute::new("class", "ui-drawer-panel", None, false),
        Attribute::new("data-placement", placement.class(), None, false),
        Attribute::new("data-size", size.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "ui-drawer-overlay",
            "data-open": "true",
            onclick: move |_| {
                if close_on_overlay {
                    set_open.call(false);
                }
            },
            prim::DialogRoot {
                class: "ui-drawer",
                open: true,
                on_open_change: move |next: bool| {
                    if next || close_on_escape {
                        set_open.call(next);
                    }
                },
                prim::DialogContent { class: "ui-drawer-content",
                    aside {
                        tabindex: "-1",
                        onclick: move |evt| evt.stop_propagation(),
                        onmounted: move |evt: MountedEvent| async move {
                            let _ = evt.set_focus(true).await;
                        },
                        onkeydown: move |evt: KeyboardEvent| {
                            if close_on_escape && evt.key() == Key::Escape {
                                evt.stop_propagation();
                                set_open.call(false);
                            }
                        },
                        ..merged,
                        if title.is_some() || show_close {
                            header { class: "ui-drawer-header",
                                div {
                                    if let Some(title) = title {
                                        prim::DialogTitle { class: "ui-drawer-title", "{title}" }
                                    }
                                    if let Some(description) = description {
                                        prim::DialogDescription {
                                            class: "ui-drawer-description",
                                            "{description}"
                                        }
                                    }
                                }
                                if show_close {
                                    button {
                                        class: "ui-drawer-close",
                                        r#type: "button",
                                        "aria-label": "Close",
                                        onclick: move |_| set_open.call(false),
                                        {glyphs::close(14)}
                                    }
                                }
                            }
                        }
                        div { class: "ui-drawer-body", {children} }
                        if let Some(actions) = footer {
                            footer { class: "ui-drawer-footer", {actions} }
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
    fn controlled_closed_renders_nothing() {
        let html = dioxus_ssr::render_element(rsx! {
            Drawer { open: false, default_open: true, "menu" }
        });
        assert!(!html.contains("menu"), "{html}");
        assert!(!html.contains("ui-drawer-overlay"), "{html}");
    }

    #[test]
    fn open_drawer_carries_placement_and_slots() {
        let html = dioxus_ssr::render_element(rsx! {
            Drawer {
                open: true,
                placement: DrawerPlacement::Left,
                size: Size::Lg,
                title: "Filters",
                footer: rsx! { button { "Apply" } },
                "menu"
            }
        });
        assert!(html.contains(r#"data-placement="left""#), "{html}");
        assert!(html.contains(r#"data-size="lg""#), "{html}");
        assert!(html.contains("ui-drawer-content"), "{html}");
        assert!(html.contains(r#"tabindex="-1""#), "{html}");
        assert!(html.contains("Filters"), "{html}");
        assert!(html.contains("Apply"), "{html}");
    }

    #[test]
    fn every_placement_has_a_bucket() {
        for placement in DrawerPlacement::ALL {
            let html = dioxus_ssr::render_element(rsx! {
                Drawer { open: true, placement: *placement, "x" }
            });
            assert!(
                html.contains(&format!(r#"data-placement="{}""#, placement.class())),
                "{html}"
            );
        }
    }

    #[test]
    fn controlled_open_follows_the_prop_within_one_mount() {
        fn app() -> Element {
            rsx! {
                Drawer { open: OPEN.get(), on_open_change: move |_| {}, title: "Filters", "menu" }
            }
        }

        OPEN.set(false);
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        assert!(!dioxus_ssr::render(&dom).contains("ui-drawer-overlay"));

        OPEN.set(true);
        dom.mark_dirty(ScopeId::APP);
        dom.render_immediate_to_vec();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("ui-drawer-overlay"), "{html}");
        assert!(html.contains("menu"), "{html}");

        OPEN.set(false);
        dom.mark_dirty(ScopeId::APP);
        dom.render_immediate_to_vec();
        let html = dioxus_ssr::render(&dom);
        assert!(!html.contains("ui-drawer-overlay"), "{html}");
        assert!(!html.contains("menu"), "{html}");
    }
}
