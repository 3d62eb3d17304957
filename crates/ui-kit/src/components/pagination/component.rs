use dioxus::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::overflow::{page_window, Slot};
use crate::variant::Size;

/// Offset/limit position translated to pages. Pages are zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
}

impl PageCursor {
    pub fn new(total: u64, limit: u64, offset: u64) -> Self {
        Self { total, limit, offset }
    }

    pub fn total_pages(&self) -> usize {
        if self.limit == 0 {
            return 1;
        }
        self.total.div_ceil(self.limit).max(1) as usize
    }

    pub fn page(&self) -> usize {
        if self.limit == 0 {
            return 0;
        }
        ((self.offset / self.limit) as usize).min(self.total_pages() - 1)
    }

    pub fn offset_of(&self, page: usize) -> u64 {
        page as u64 * self.limit
    }
}

/// Previous/Next buttons around a window of numbered pages.
///
/// `page` is zero-based and owned by the caller; clicks only propose a new
/// page through `on_page_change`. Far pages collapse into ellipses.
#[component]
pub fn Pagination(
    total_pages: usize,
    page: usize,
    on_page_change: EventHandler<usize>,
    #[props(default = 1)] siblings: usize,
    #[props(default = Size::Sm)] size: Size,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let total_pages = total_pages.max(1);
    let page = page.min(total_pages - 1);
    let base = vec![Attribute::new("class", "ui-pagination", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    let slots = page_window(total_pages, page, siblings)
        .into_iter()
        .enumerate()
        .map(|(position, slot)| match slot {
            Slot::Ellipsis => rsx! {
                li { key: "gap-{position}", class: "ui-pagination-gap", "aria-hidden": "true", "\u{2026}" }
            },
            Slot::Item(target) => {
                let current = target == page;
                let number = target + 1;
                rsx! {
                    li { key: "page-{target}",
                        Button {
                            variant: if current { ButtonVariant::Primary } else { ButtonVariant::Ghost },
                            size,
                            aria_current: if current { "page" } else { "false" },
                            aria_label: "Page {number}",
                            onclick: move |_| {
                                if !current {
                                    on_page_change.call(target);
                                }
                            },
                            "{number}"
                        }
                    }
                }
            }
        });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav { "aria-label": "Pagination", ..merged,
            ul { class: "ui-pagination-list",
                li { key: "previous",
                    Button {
                        variant: ButtonVariant::Outline,
                        size,
                        disabled: page == 0,
                        onclick: move |_| on_page_change.call(page.saturating_sub(1)),
                        "Previous"
                    }
                }
                {slots}
                li { key: "next",
                    Button {
                        variant: ButtonVariant::Outline,
                        size,
                        disabled: page + 1 >= total_pages,
                        onclick: move |_| on_page_change.call(page + 1),
                        "Next"
                    }
                }
            }
        }
    }
}

/// [`Pagination`] driven by an offset signal, for list endpoints that page
/// with `offset`/`limit`.
#[component]
pub fn OffsetPagination(total: u64, offset: Signal<u64>, limit: u64) -> Element {
    let cursor = PageCursor::new(total, limit, offset());
    let shown = cursor.page() + 1;
    let pages = cursor.total_pages();

    rsx! {
        div { class: "ui-pagination-offset",
            Pagination {
                total_pages: cursor.total_pages(),
                page: cursor.page(),
                on_page_change: move |page| offset.set(cursor.offset_of(page)),
            }
            span { class: "ui-pagination-info",
                "Page {shown} of {pages} ({total} total)"
            }
        }
    }
}
