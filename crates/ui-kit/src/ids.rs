//! Identifier generation, injected through context.
//!
//! Components that need a stable id (form association, upload records) ask
//! the nearest [`IdProvider`] instead of keeping a hidden counter. Without a
//! provider they fall back to [`RandomIds`].

use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use uuid::Uuid;

/// Source of unique identifier strings.
pub trait IdSource {
    fn next_id(&self, prefix: &str) -> String;
}

/// Monotonic ids: `prefix-1`, `prefix-2`, ... Deterministic, so server
/// rendering and tests produce the same markup run after run.
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for SequentialIds {
    fn next_id(&self, prefix: &str) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{prefix}-{n}")
    }
}

/// Random v4 UUID ids.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&self, prefix: &str) -> String {
        format!("{prefix}-{}", Uuid::new_v4().simple())
    }
}

/// Shared handle to an [`IdSource`], as stored in context.
#[derive(Clone)]
pub struct IdContext(Rc<dyn IdSource>);

impl IdContext {
    pub fn new(source: impl IdSource + 'static) -> Self {
        Self(Rc::new(source))
    }

    pub fn random() -> Self {
        Self::new(RandomIds)
    }

    pub fn next_id(&self, prefix: &str) -> String {
        self.0.next_id(prefix)
    }
}

impl PartialEq for IdContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for IdContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("IdContext")
    }
}

/// Provide an id source to every component below.
#[component]
pub fn IdProvider(source: IdContext, children: Element) -> Element {
    use_context_provider(|| source.clone());
    rsx! { {children} }
}

/// The nearest provided id source, or random ids.
pub fn use_id_source() -> IdContext {
    use_hook(|| try_consume_context::<IdContext>().unwrap_or_else(IdContext::random))
}

/// The caller's id when given, otherwise one generated once for this
/// component instance.
pub fn use_stable_id(explicit: Option<String>, prefix: &'static str) -> String {
    let source = use_id_source();
    let generated = use_hook(move || source.next_id(prefix));
    explicit.unwrap_or(generated)
}

/// Render key for an item descriptor: its explicit id, or its position.
///
/// Positional keys only stay correct while the list changes at its end.
pub fn item_key(explicit: Option<&str>, index: usize) -> String {
    match explicit {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => format!("#{index}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sequential_ids_are_monotonic() {
        let ids = SequentialIds::new();
        assert_eq!(ids.next_id("field"), "field-1");
        assert_eq!(ids.next_id("field"), "field-2");
        assert_eq!(ids.next_id("file"), "file-3");
    }

    #[test]
    fn random_ids_are_unique_and_prefixed() {
        let a = RandomIds.next_id("x");
        let b = RandomIds.next_id("x");
        assert_ne!(a, b);
        assert!(a.starts_with("x-"));
    }

    #[test]
    fn item_keys_prefer_explicit_ids() {
        assert_eq!(item_key(Some("a"), 3), "a");
        assert_eq!(item_key(None, 3), "#3");
        assert_eq!(item_key(Some(""), 0), "#0");
    }

    #[test]
    fn context_equality_is_identity() {
        let a = IdContext::new(SequentialIds::new());
        let b = a.clone();
        assert_eq!(a, b);
        assert_ne!(a, IdContext::new(SequentialIds::new()));
    }

    #[test]
    fn provided_source_feeds_stable_ids() {
        #[component]
        fn Probe() -> Element {
            let id = use_stable_id(None, "probe");
            let explicit = use_stable_id(Some("given".to_string()), "probe");
            rsx! { span { id: "{id}", "{explicit}" } }
        }

        let html = dioxus_ssr::render_element(rsx! {
            IdProvider { source: IdContext::new(SequentialIds::new()), Probe {} }
        });
        assert!(html.contains(r#"id="probe-1""#), "{html}");
        assert!(html.contains("given"), "{html}");
    }
}
