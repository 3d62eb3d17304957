// Primitives
pub mod icon;
pub mod image;
pub mod label;
pub mod svg;

// Display
pub mod badge;
pub mod empty_state;
pub mod list;
pub mod stat;
pub mod timeline;

// Inputs and forms
pub mod button;
pub mod file_upload;
pub mod form_field;
pub mod text_field;

// Navigation
pub mod breadcrumb;
pub mod pagination;
pub mod step_indicator;
pub mod tabs;

// Overlays
pub mod drawer;
pub mod modal;

pub mod error_boundary;

pub(crate) mod glyphs;

pub use badge::*;
pub use breadcrumb::*;
pub use button::*;
pub use drawer::*;
pub use empty_state::*;
pub use error_boundary::*;
pub use file_upload::*;
pub use form_field::*;
pub use icon::*;
pub use image::*;
pub use label::*;
pub use list::*;
pub use modal::*;
pub use pagination::*;
pub use stat::*;
pub use step_indicator::*;
pub use svg::*;
pub use tabs::*;
pub use text_field::*;
pub use timeline::*;

/// Every component stylesheet, for documents that inline their CSS instead
/// of loading bundled assets.
pub const STYLESHEETS: &[&str] = &[
    include_str!("badge/style.css"),
    include_str!("breadcrumb/style.css"),
    include_str!("button/style.css"),
    include_str!("drawer/style.css"),
    include_str!("empty_state/style.css"),
    include_str!("error_boundary/style.css"),
    include_str!("file_upload/style.css"),
    include_str!("form_field/style.css"),
    include_str!("icon/style.css"),
    include_str!("image/style.css"),
    include_str!("label/style.css"),
    include_str!("list/style.css"),
    include_str!("modal/style.css"),
    include_str!("pagination/style.css"),
    include_str!("stat/style.css"),
    include_str!("step_indicator/style.css"),
    include_str!("tabs/style.css"),
    include_str!("text_field/style.css"),
    include_str!("timeline/style.css"),
];
