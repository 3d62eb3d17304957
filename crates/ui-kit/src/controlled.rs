//! Controlled/uncontrolled value ownership.
//!
//! A component is controlled when its caller passes the value; the component
//! then only proposes changes through the callback. Without a value the
//! component owns it, seeded once from the default.

use dioxus::prelude::*;

/// Locally owned half of a controllable value.
#[derive(Debug, Clone, PartialEq)]
pub struct Controllable<T> {
    internal: T,
}

/// Outcome of a requested change.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<T> {
    /// Value to hand to the change callback, if the request changed anything.
    pub notify: Option<T>,
    /// Whether the internal copy was replaced.
    pub committed: bool,
}

impl<T: Clone + PartialEq> Controllable<T> {
    pub fn new(initial: T) -> Self {
        Self { internal: initial }
    }

    /// The displayed value: the caller's when supplied, otherwise the local one.
    pub fn current(&self, value: Option<&T>) -> T {
        value.cloned().unwrap_or_else(|| self.internal.clone())
    }

    /// Request a change to `next`.
    ///
    /// A supplied `value` is the source of truth and is never overwritten
    /// here; without a change callback such a component stays put.
    pub fn request(&mut self, value: Option<&T>, next: T) -> Transition<T> {
        if self.current(value) == next {
            return Transition {
                notify: None,
                committed: false,
            };
        }
        let committed = value.is_none();
        if committed {
            self.internal = next.clone();
        }
        Transition {
            notify: Some(next),
            committed,
        }
    }
}

/// Resolve a controllable value for the current render.
///
/// Returns the value to display and a setter that routes through
/// [`Controllable::request`], calling `on_change` on every real transition.
pub fn use_controllable<T: Clone + PartialEq + 'static>(
    value: Option<T>,
    default: impl FnOnce() -> T,
    on_change: Option<EventHandler<T>>,
) -> (T, Callback<T>) {
    let mut state = use_signal(|| Controllable::new(default()));
    let current = state.read().current(value.as_ref());

    let set = use_callback(move |next: T| {
        let mut local = state.peek().clone();
        let transition = local.request(value.as_ref(), next);
        if transition.committed {
            state.set(local);
        }
        if let (Some(next), Some(handler)) = (transition.notify, on_change) {
            handler.call(next);
        }
    });

    (current, set)
}
