use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// A thumbnail URL owned by the upload component until released.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PreviewRef {
    pub token: u64,
    pub url: String,
}

/// Allocates and releases preview URLs.
///
/// Both methods take `&self` so a store can sit behind an `Rc` in context.
pub trait PreviewStore {
    fn allocate(&self, mime: &str, bytes: &[u8]) -> Option<PreviewRef>;
    fn release(&self, preview: &PreviewRef);
}

/// Default store: inline `data:` URLs, with the live set tracked so double
/// releases are caught.
#[derive(Debug, Default)]
pub struct DataUrlPreviews {
    next: Cell<u64>,
    live: RefCell<HashSet<u64>>,
}

impl DataUrlPreviews {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn live_count(&self) -> usize {
        self.live.borrow().len()
    }
}

impl PreviewStore for DataUrlPreviews {
    fn allocate(&self, mime: &str, bytes: &[u8]) -> Option<PreviewRef> {
        if bytes.is_empty() {
            return None;
        }
        let token = self.next.get() + 1;
        self.next.set(token);
        self.live.borrow_mut().insert(token);
        tracing::trace!(token, mime, bytes = bytes.len(), "preview allocated");
        Some(PreviewRef {
            token,
            url: format!("data:{mime};base64,{}", STANDARD.encode(bytes)),
        })
    }

    fn release(&self, preview: &PreviewRef) {
        if self.live.borrow_mut().remove(&preview.token) {
            tracing::trace!(token = preview.token, "preview released");
        } else {
            tracing::warn!(token = preview.token, "preview released twice");
        }
    }
}

/// Shared handle to the store a `FileUpload` allocates from.
#[derive(Clone)]
pub struct PreviewStoreContext(Rc<dyn PreviewStore>);

impl PreviewStoreContext {
    pub fn new(store: impl PreviewStore + 'static) -> Self {
        Self(Rc::new(store))
    }

    pub fn from_rc(store: Rc<dyn PreviewStore>) -> Self {
        Self(store)
    }

    pub fn data_urls() -> Self {
        Self::new(DataUrlPreviews::new())
    }

    pub fn store(&self) -> &dyn PreviewStore {
        &*self.0
    }
}

impl PartialEq for PreviewStoreContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for PreviewStoreContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PreviewStoreContext")
    }
}

/// Who owns which preview.
///
/// A preview starts pending under its record id. Once the caller's list
/// contains that id it is adopted; an adopted id that later disappears from
/// the list is handed back for release, exactly once. Whatever is left at
/// unmount comes back from [`drain`](Self::drain).
#[derive(Debug, Default)]
pub struct PreviewLedger {
    pending: HashMap<String, PreviewRef>,
    adopted: HashMap<String, PreviewRef>,
    released: HashSet<u64>,
}

impl PreviewLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(&mut self, id: impl Into<String>, preview: PreviewRef) {
        self.pending.insert(id.into(), preview);
    }

    /// Takes ownership of a preview the caller's list already carries, such
    /// as records restored from earlier state. Known or released previews
    /// are ignored.
    pub fn claim(&mut self, id: &str, preview: &PreviewRef) {
        let known = self.released.contains(&preview.token)
            || self
                .pending
                .values()
                .chain(self.adopted.values())
                .any(|p| p.token == preview.token);
        if !known {
            self.adopted.insert(id.to_string(), preview.clone());
        }
    }

    /// Reconciles against the ids currently in the caller's list and returns
    /// the previews that must be released now.
    pub fn sync<'a>(&mut self, present: impl IntoIterator<Item = &'a str>) -> Vec<PreviewRef> {
        let present: HashSet<&str> = present.into_iter().collect();

        let arrived: Vec<String> = self
            .pending
            .keys()
            .filter(|id| present.contains(id.as_str()))
            .cloned()
            .collect();
        for id in arrived {
            if let Some(preview) = self.pending.remove(&id) {
                self.adopted.insert(id, preview);
            }
        }

        let gone: Vec<String> = self
            .adopted
            .keys()
            .filter(|id| !present.contains(id.as_str()))
            .cloned()
            .collect();
        let released: Vec<PreviewRef> = gone
            .into_iter()
            .filter_map(|id| self.adopted.remove(&id))
            .collect();
        self.released.extend(released.iter().map(|p| p.token));
        released
    }

    pub fn drain(&mut self) -> Vec<PreviewRef> {
        let drained: Vec<PreviewRef> = self
            .pending
            .drain()
            .chain(self.adopted.drain())
            .map(|(_, preview)| preview)
            .collect();
        self.released.extend(drained.iter().map(|p| p.token));
        drained
    }

    pub fn len(&self) -> usize {
        self.pending.len() + self.adopted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
