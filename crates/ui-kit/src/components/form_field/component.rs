use dioxus::prelude::*;

use crate::class::class_names;
use crate::components::label::Label;
use crate::ids::use_stable_id;
use crate::variant::Size;

/// Element ids that tie a control to its label, help and error text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIds {
    pub control: String,
    pub help: String,
    pub error: String,
}

impl FieldIds {
    pub fn new(control: impl Into<String>) -> Self {
        let control = control.into();
        Self {
            help: format!("{control}-help"),
            error: format!("{control}-error"),
            control,
        }
    }

    /// Value for `aria-describedby`, listing the error before the help text.
    pub fn described_by(&self, has_help: bool, has_error: bool) -> Option<String> {
        match (has_help, has_error) {
            (false, false) => None,
            (true, false) => Some(self.help.clone()),
            (false, true) => Some(self.error.clone()),
            (true, true) => Some(format!("{} {}", self.error, self.help)),
        }
    }
}

/// What a [`FormField`] tells the control nested inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldContext {
    pub ids: FieldIds,
    pub has_help: bool,
    pub has_error: bool,
    pub required: bool,
    pub disabled: bool,
}

impl FieldContext {
    pub fn described_by(&self) -> Option<String> {
        self.ids.described_by(self.has_help, self.has_error)
    }
}

/// The enclosing field, when the caller is rendered inside a [`FormField`].
pub fn use_field_context() -> Option<FieldContext> {
    try_use_context::<Signal<FieldContext>>().map(|field| field())
}

/// Label, help and error chrome around an arbitrary control.
///
/// The control's id is `id` or a generated one. Controls from this crate
/// pick it up from context; any other child should use
/// [`use_field_context`] or take the id explicitly.
#[component]
pub fn FormField(
    label: Option<String>,
    id: Option<String>,
    help: Option<String>,
    error: Option<String>,
    #[props(default = false)] required: bool,
    #[props(default = false)] disabled: bool,
    #[props(default)] size: Size,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let control = use_stable_id(id, "field");
    let error = error.filter(|e| !e.is_empty());
    let context = FieldContext {
        ids: FieldIds::new(control),
        has_help: help.is_some(),
        has_error: error.is_some(),
        required,
        disabled,
    };

    let mut provided = use_context_provider(|| Signal::new(context.clone()));
    if *provided.peek() != context {
        provided.set(context.clone());
    }

    let class = class_names([
        Some("ui-form-field"),
        context.has_error.then_some("is-invalid"),
        disabled.then_some("is-disabled"),
    ]);
    let base = vec![
        Attribute::new("class", class, None, false),
        Attribute::new("data-size", size.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let ids = context.ids;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            if let Some(label) = label {
                Label { html_for: ids.control.clone(), required, disabled, size, "{label}" }
            }
            div { class: "ui-form-field-control", {children} }
            if let Some(error) = error {
                p { id: "{ids.error}", class: "ui-form-field-error", role: "alert", "{error}" }
            }
            if let Some(help) = help {
                p { id: "{ids.help}", class: "ui-form-field-help", "{help}" }
            }
        }
    }
}
