//! Default glyphs. Every component slot that uses one of these also accepts
//! a caller-supplied `Element` in its place.

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaArrowDown, FaArrowUp, FaCheck, FaChevronRight, FaCloudArrowUp, FaEye, FaEyeSlash, FaFile,
    FaImage, FaInbox, FaMinus, FaTriangleExclamation, FaXmark,
};
use dioxus_free_icons::Icon as Glyph;

pub(crate) fn close(px: u32) -> Element {
    rsx! { Glyph::<FaXmark> { icon: FaXmark, width: px, height: px } }
}

pub(crate) fn chevron(px: u32) -> Element {
    rsx! { Glyph::<FaChevronRight> { icon: FaChevronRight, width: px, height: px } }
}

pub(crate) fn check(px: u32) -> Element {
    rsx! { Glyph::<FaCheck> { icon: FaCheck, width: px, height: px } }
}

pub(crate) fn inbox(px: u32) -> Element {
    rsx! { Glyph::<FaInbox> { icon: FaInbox, width: px, height: px } }
}

pub(crate) fn upload(px: u32) -> Element {
    rsx! { Glyph::<FaCloudArrowUp> { icon: FaCloudArrowUp, width: px, height: px } }
}

pub(crate) fn file(px: u32) -> Element {
    rsx! { Glyph::<FaFile> { icon: FaFile, width: px, height: px } }
}

pub(crate) fn image(px: u32) -> Element {
    rsx! { Glyph::<FaImage> { icon: FaImage, width: px, height: px } }
}

pub(crate) fn warning(px: u32) -> Element {
    rsx! { Glyph::<FaTriangleExclamation> { icon: FaTriangleExclamation, width: px, height: px } }
}

pub(crate) fn eye(px: u32, open: bool) -> Element {
    if open {
        rsx! { Glyph::<FaEye> { icon: FaEye, width: px, height: px } }
    } else {
        rsx! { Glyph::<FaEyeSlash> { icon: FaEyeSlash, width: px, height: px } }
    }
}

pub(crate) fn trend_up(px: u32) -> Element {
    rsx! { Glyph::<FaArrowUp> { icon: FaArrowUp, width: px, height: px } }
}

pub(crate) fn trend_down(px: u32) -> Element {
    rsx! { Glyph::<FaArrowDown> { icon: FaArrowDown, width: px, height: px } }
}

pub(crate) fn trend_flat(px: u32) -> Element {
    rsx! { Glyph::<FaMinus> { icon: FaMinus, width: px, height: px } }
}
