//! Presentational components for Dioxus applications.
//!
//! Components live under [`components`]; the modules at the crate root hold
//! the small pieces of logic they share: class joining, variant tables,
//! controlled/uncontrolled state, overflow truncation, positional status,
//! identifier injection and the theme context.

pub mod class;
pub mod components;
pub mod controlled;
pub mod ids;
pub mod overflow;
pub mod status;
pub mod theme;
pub mod variant;

pub use class::class_names;
pub use components::*;
pub use controlled::{use_controllable, Controllable, Transition};
pub use ids::{item_key, use_stable_id, IdContext, IdProvider, IdSource, RandomIds, SequentialIds};
pub use overflow::{page_window, truncate, Slot};
pub use status::StepStatus;
pub use theme::{inline_stylesheet, use_theme, Theme, ThemeFamily, ThemeProvider, THEME_CSS};
pub use variant::{Orientation, Size, Tone};
