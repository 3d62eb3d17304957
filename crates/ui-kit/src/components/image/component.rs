use dioxus::prelude::*;

use crate::components::glyphs;

/// How the picture fills its frame (`object-fit`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFit {
    #[default]
    Cover,
    Contain,
    Fill,
    ScaleDown,
    None,
}

impl ImageFit {
    pub const ALL: &'static [ImageFit] = &[
        ImageFit::Cover,
        ImageFit::Contain,
        ImageFit::Fill,
        ImageFit::ScaleDown,
        ImageFit::None,
    ];

    pub fn class(&self) -> &'static str {
        match self {
            ImageFit::Cover => "cover",
            ImageFit::Contain => "contain",
            ImageFit::Fill => "fill",
            ImageFit::ScaleDown => "scale-down",
            ImageFit::None => "none",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageStatus {
    Loading,
    Loaded,
    Errored,
}

impl ImageStatus {
    pub fn class(&self) -> &'static str {
        match self {
            ImageStatus::Loading => "loading",
            ImageStatus::Loaded => "loaded",
            ImageStatus::Errored => "errored",
        }
    }
}

/// Load progress for one source. Settles once; later events are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageLoad {
    status: ImageStatus,
    using_fallback: bool,
}

impl Default for ImageLoad {
    fn default() -> Self {
        Self {
            status: ImageStatus::Loading,
            using_fallback: false,
        }
    }
}

impl ImageLoad {
    pub fn status(&self) -> ImageStatus {
        self.status
    }

    pub fn using_fallback(&self) -> bool {
        self.using_fallback
    }

    /// Returns whether anything changed.
    pub fn loaded(&mut self) -> bool {
        if self.status != ImageStatus::Loading {
            return false;
        }
        self.status = ImageStatus::Loaded;
        true
    }

    /// The first failure switches to the fallback source when there is one;
    /// otherwise (or on a second failure) the load is errored.
    pub fn failed(&mut self, has_fallback: bool) -> bool {
        if self.status != ImageStatus::Loading {
            return false;
        }
        if has_fallback && !self.using_fallback {
            self.using_fallback = true;
        } else {
            self.status = ImageStatus::Errored;
        }
        true
    }

    pub fn source<'a>(&self, src: &'a str, fallback: Option<&'a str>) -> &'a str {
        match (self.using_fallback, fallback) {
            (true, Some(fallback)) => fallback,
            _ => src,
        }
    }
}

/// Image with a placeholder while loading and an optional fallback source.
///
/// Changing `src` remounts the frame, so a new source starts from the
/// placeholder again.
#[component]
pub fn Image(
    src: String,
    #[props(default)] alt: String,
    #[props(default)] fit: ImageFit,
    fallback_src: Option<String>,
    placeholder: Option<Element>,
    #[props(default = false)] rounded: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        ImageFrame {
            key: "{src}",
            src: src.clone(),
            alt,
            fit,
            fallback_src,
            placeholder,
            rounded,
            attributes,
        }
    }
}

#[component]
fn ImageFrame(
    src: String,
    alt: String,
    fit: ImageFit,
    fallback_src: Option<String>,
    placeholder: Option<Element>,
    rounded: bool,
    attributes: Vec<Attribute>,
) -> Element {
    let mut load = use_signal(ImageLoad::default);
    let state = load();
    let has_fallback = fallback_src.is_some();
    let current = state.source(&src, fallback_src.as_deref()).to_string();

    let base = vec![Attribute::new("class", "ui-image-img", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            class: "ui-image",
            "data-status": state.status().class(),
            "data-fit": fit.class(),
            "data-rounded": if rounded { "true" },
            if state.status() == ImageStatus::Loading {
                div { class: "ui-image-placeholder", "aria-hidden": "true",
                    if let Some(placeholder) = placeholder {
                        {placeholder}
                    }
                }
            }
            if state.status() == ImageStatus::Errored {
                div { class: "ui-image-fallback", role: "img", "aria-label": "{alt}",
                    {glyphs::image(24)}
                }
            } else {
                img {
                    src: "{current}",
                    alt: "{alt}",
                    onload: move |_| {
                        let mut next = load.peek().clone();
                        if next.loaded() {
                            load.set(next);
                        }
                    },
                    onerror: move |_| {
                        let mut next = load.peek().clone();
                        if next.failed(has_fallback) {
                            load.set(next);
                        }
                    },
                    ..merged,
                }
            }
        }
    }
}
