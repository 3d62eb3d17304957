use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::ErrorBoundary as CoreBoundary;
use dioxus::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::glyphs;

/// The failure a boundary captured from its subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedFailure {
    pub message: String,
}

impl CapturedFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BoundaryState {
    #[default]
    Clear,
    Failed(CapturedFailure),
}

/// What the `on_error` observer receives on each entry into the failed state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureReport {
    pub message: String,
    /// The boundary's `name`, when one was given.
    pub boundary: Option<String>,
    /// 1 for the first failure of this boundary, 2 after one reset, and so on.
    pub occurrence: usize,
}

/// Two-state failure tracker behind [`ErrorBoundary`].
#[derive(Debug, Default)]
pub struct BoundaryMachine {
    name: Option<String>,
    state: BoundaryState,
    occurrences: usize,
}

impl BoundaryMachine {
    pub fn new(name: Option<String>) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }

    pub fn state(&self) -> &BoundaryState {
        &self.state
    }

    /// Records a failure. Returns a report only on the `Clear -> Failed`
    /// transition; repeated calls while failed return `None`.
    pub fn fail(&mut self, failure: CapturedFailure) -> Option<FailureReport> {
        if matches!(self.state, BoundaryState::Failed(_)) {
            return None;
        }
        self.occurrences += 1;
        let report = FailureReport {
            message: failure.message.clone(),
            boundary: self.name.clone(),
            occurrence: self.occurrences,
        };
        self.state = BoundaryState::Failed(failure);
        Some(report)
    }

    /// Back to `Clear`. Returns whether anything changed.
    pub fn reset(&mut self) -> bool {
        let was_failed = matches!(self.state, BoundaryState::Failed(_));
        self.state = BoundaryState::Clear;
        was_failed
    }
}

/// Handed to a custom fallback.
#[derive(Clone, PartialEq)]
pub struct FallbackProps {
    pub error: CapturedFailure,
    /// Clears the failure and renders the children again.
    pub reset: Callback<()>,
}

/// Contains render failures of its children.
///
/// While a child fails to render the boundary shows `fallback` (or a default
/// message with a "Try again" button) instead. `on_error` fires once per
/// transition into the failed state; without it the failure is logged.
/// Failures in event handlers or spawned tasks never reach a boundary.
#[component]
pub fn ErrorBoundary(
    name: Option<String>,
    on_error: Option<EventHandler<FailureReport>>,
    fallback: Option<Callback<FallbackProps, Element>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let machine = use_hook(|| Rc::new(RefCell::new(BoundaryMachine::new(name.clone()))));
    let base = vec![Attribute::new("class", "ui-error-boundary", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div { ..merged,
            CoreBoundary {
                handle_error: move |ctx: ErrorContext| {
                    let message = ctx
                        .error()
                        .map(|error| error.to_string())
                        .unwrap_or_else(|| "Something went wrong".to_string());
                    let failure = CapturedFailure::new(message);

                    let report = machine.borrow_mut().fail(failure.clone());
                    if let Some(report) = report {
                        match on_error {
                            Some(observer) => observer.call(report),
                            None => tracing::warn!(
                                boundary = report.boundary.as_deref().unwrap_or("unnamed"),
                                occurrence = report.occurrence,
                                "render failure contained: {}",
                                report.message
                            ),
                        }
                    }

                    let reset = {
                        let machine = machine.clone();
                        Callback::new(move |_: ()| {
                            machine.borrow_mut().reset();
                            ctx.clear_errors();
                        })
                    };

                    match fallback {
                        Some(render) => render.call(FallbackProps { error: failure, reset }),
                        None => rsx! { DefaultFallback { error: failure, reset } },
                    }
                },
                {children}
            }
        }
    }
}

#[component]
fn DefaultFallback(error: CapturedFailure, reset: Callback<()>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "ui-error-fallback", role: "alert",
            span { class: "ui-error-fallback-icon", "aria-hidden": "true", {glyphs::warning(24)} }
            p { class: "ui-error-fallback-title", "Something went wrong" }
            p { class: "ui-error-fallback-message", "{error.message}" }
            Button {
                variant: ButtonVariant::Outline,
                onclick: move |_| reset.call(()),
                "Try again"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    thread_local! {
        static REPORTS: RefCell<Vec<FailureReport>> = const { RefCell::new(Vec::new()) };
        static FAILING: std::cell::Cell<bool> = const { std::cell::Cell::new(true) };
        static ATTEMPT: std::cell::Cell<u32> = const { std::cell::Cell::new(0) };
        static RESET: RefCell<Option<Callback<()>>> = const { RefCell::new(None) };
    }

    #[test]
    fn fails_once_until_reset() {
        let mut machine = BoundaryMachine::new(Some("panel".into()));
        let first = machine.fail(CapturedFailure::new("boom")).unwrap();
        assert_eq!(first.occurrence, 1);
        assert_eq!(first.boundary.as_deref(), Some("panel"));
        assert_eq!(machine.fail(CapturedFailure::new("boom")), None);
        assert_eq!(
            machine.state(),
            &BoundaryState::Failed(CapturedFailure::new("boom"))
        );

        assert!(machine.reset());
        assert_eq!(machine.state(), &BoundaryState::Clear);
        assert!(!machine.reset());

        let again = machine.fail(CapturedFailure::new("boom")).unwrap();
        assert_eq!(again.occurrence, 2);
    }

    #[test]
    fn healthy_children_render() {
        let html = dioxus_ssr::render_element(rsx! {
            ErrorBoundary { p { "all good" } }
        });
        assert!(html.contains("all good"), "{html}");
        assert!(!html.contains("Try again"), "{html}");
    }

    #[test]
    fn failing_child_shows_fallback_and_reports_once() {
        #[component]
        fn Broken() -> Element {
            let n: u32 = "boom".parse()?;
            rsx! { "{n}" }
        }

        fn app() -> Element {
            rsx! {
                ErrorBoundary {
                    name: "widget",
                    on_error: move |report: FailureReport| {
                        REPORTS.with(|r| r.borrow_mut().push(report));
                    },
                    Broken {}
                }
            }
        }

        REPORTS.with(|r| r.borrow_mut().clear());
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dom.render_immediate_to_vec();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("Try again"), "{html}");
        REPORTS.with(|r| {
            let reports = r.borrow();
            assert_eq!(reports.len(), 1);
            assert_eq!(reports[0].boundary.as_deref(), Some("widget"));
            assert!(!reports[0].message.is_empty());
        });
    }

    #[test]
    fn reset_renders_recovered_children() {
        #[component]
        fn Flaky(attempt: u32) -> Element {
            if FAILING.get() {
                let n: u32 = "boom".parse()?;
                return rsx! { "{n}" };
            }
            rsx! { p { "recovered on attempt {attempt}" } }
        }

        fn app() -> Element {
            rsx! {
                ErrorBoundary {
                    on_error: move |report: FailureReport| {
                        REPORTS.with(|r| r.borrow_mut().push(report));
                    },
                    fallback: move |props: FallbackProps| {
                        RESET.with(|r| *r.borrow_mut() = Some(props.reset));
                        rsx! { p { "custom fallback" } }
                    },
                    Flaky { attempt: ATTEMPT.get() }
                }
            }
        }

        REPORTS.with(|r| r.borrow_mut().clear());
        FAILING.set(true);
        ATTEMPT.set(0);
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dom.render_immediate_to_vec();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("custom fallback"), "{html}");

        FAILING.set(false);
        ATTEMPT.set(1);
        let reset = RESET.with(|r| *r.borrow()).unwrap();
        dom.in_runtime(|| reset.call(()));
        dom.mark_dirty(ScopeId::APP);
        dom.render_immediate_to_vec();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("recovered on attempt 1"), "{html}");
        assert!(!html.contains("custom fallback"), "{html}");
        REPORTS.with(|r| assert_eq!(r.borrow().len(), 1));
    }
}
