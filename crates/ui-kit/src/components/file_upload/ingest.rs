use std::rc::Rc;

use dioxus::html::FileData;

use crate::ids::IdContext;

use super::preview::{PreviewLedger, PreviewRef, PreviewStore};

/// The browser file behind an accepted or rejected record, kept so the
/// caller can read or upload it later.
#[derive(Clone)]
pub struct FileHandle(Rc<FileData>);

impl FileHandle {
    pub fn new(file: FileData) -> Self {
        Self(Rc::new(file))
    }

    pub fn file(&self) -> &FileData {
        &self.0
    }
}

impl PartialEq for FileHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for FileHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FileHandle")
    }
}

/// One entry of the list a `FileUpload` displays. The caller owns the list
/// and may set `progress` as an upload advances.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UploadedFile {
    pub id: String,
    pub name: String,
    pub size: u64,
    pub mime: String,
    pub preview: Option<PreviewRef>,
    /// Upload progress in percent.
    pub progress: Option<u8>,
    pub error: Option<String>,
    pub handle: Option<FileHandle>,
}

impl UploadedFile {
    pub fn is_rejected(&self) -> bool {
        self.error.is_some()
    }

    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }
}

/// A file as it arrives from a drop or the picker, before classification.
#[derive(Debug, Clone, Default)]
pub struct IncomingFile {
    pub name: String,
    pub size: u64,
    pub mime: String,
    /// Raw bytes, read only for images that may get a preview.
    pub content: Option<Vec<u8>>,
    pub handle: Option<FileHandle>,
}

impl IncomingFile {
    pub fn new(name: impl Into<String>, size: u64, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime: mime.into(),
            ..Self::default()
        }
    }

    pub fn with_content(mut self, content: Vec<u8>) -> Self {
        self.content = Some(content);
        self
    }
}

/// What a drop or selection is checked against.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UploadConstraints {
    /// Lower-cased MIME types, `type/*` wildcards or `.ext` suffixes. Empty
    /// accepts everything.
    pub accept: Vec<String>,
    pub max_size: Option<u64>,
    pub max_files: Option<usize>,
    pub multiple: bool,
}

impl UploadConstraints {
    /// Splits an HTML `accept` attribute value.
    pub fn parse_accept(accept: &str) -> Vec<String> {
        accept
            .split(',')
            .map(|part| part.trim().to_ascii_lowercase())
            .filter(|part| !part.is_empty())
            .collect()
    }

    pub fn accepts(&self, name: &str, mime: &str) -> bool {
        if self.accept.is_empty() {
            return true;
        }
        let name = name.to_ascii_lowercase();
        let mime = mime.to_ascii_lowercase();
        self.accept.iter().any(|rule| {
            if rule.starts_with('.') {
                name.ends_with(rule.as_str())
            } else if let Some(family) = rule.strip_suffix("/*") {
                mime.split('/').next() == Some(family)
            } else {
                mime == *rule
            }
        })
    }

    /// Upper bound on accepted records, counting the existing list.
    pub fn capacity(&self) -> Option<usize> {
        if self.multiple {
            self.max_files
        } else {
            Some(1)
        }
    }

    /// One line describing the limits, for the drop zone.
    pub fn hint(&self) -> Option<String> {
        let mut parts = Vec::new();
        if !self.accept.is_empty() {
            parts.push(format!("Accepted: {}", self.accept.join(", ")));
        }
        if let Some(max) = self.max_size {
            parts.push(format!("Max {}", format_bytes(max)));
        }
        match self.capacity() {
            Some(1) => parts.push("One file".to_string()),
            Some(n) => parts.push(format!("Up to {n} files")),
            None => {}
        }
        (!parts.is_empty()).then(|| parts.join(" \u{b7} "))
    }

    /// Error for a file that fails the checks, type first, then size, then
    /// count. `taken` is how many accepted records already exist.
    pub fn rejection(&self, file: &IncomingFile, taken: usize) -> Option<String> {
        if !self.accepts(&file.name, &file.mime) {
            let shown = if file.mime.is_empty() { &file.name } else { &file.mime };
            return Some(format!("File type not accepted: {shown}"));
        }
        if let Some(max) = self.max_size {
            if file.size > max {
                return Some(format!(
                    "File is too large ({}, max {})",
                    format_bytes(file.size),
                    format_bytes(max)
                ));
            }
        }
        match self.capacity() {
            Some(cap) if taken >= cap && !self.multiple => {
                Some("Only one file can be uploaded at a time".to_string())
            }
            Some(cap) if taken >= cap => Some(format!("Too many files (max {cap})")),
            _ => None,
        }
    }
}

/// Turns one batch into records, one per incoming file and in order.
///
/// Accepted images with content get a preview, tracked in `ledger` under
/// the new record's id. Rejected files carry an error and never a preview.
pub fn classify(
    existing: &[UploadedFile],
    incoming: Vec<IncomingFile>,
    constraints: &UploadConstraints,
    ids: &IdContext,
    previews: &dyn PreviewStore,
    ledger: &mut PreviewLedger,
) -> Vec<UploadedFile> {
    let mut taken = existing.iter().filter(|f| !f.is_rejected()).count();
    let mut records = Vec::with_capacity(incoming.len());

    for file in incoming {
        let id = ids.next_id("file");
        let error = constraints.rejection(&file, taken);
        let preview = match (&error, &file.content) {
            (None, Some(bytes)) if file.mime.starts_with("image/") => {
                previews.allocate(&file.mime, bytes)
            }
            _ => None,
        };
        if let Some(preview) = &preview {
            ledger.track(id.clone(), preview.clone());
        }
        if error.is_none() {
            taken += 1;
        } else {
            tracing::debug!(file = %file.name, "upload rejected");
        }
        records.push(UploadedFile {
            id,
            name: file.name,
            size: file.size,
            mime: file.mime,
            preview,
            progress: None,
            error,
            handle: file.handle,
        });
    }
    records
}

/// The full list to hand back to the caller after one batch: the existing
/// records followed by one new record per incoming file.
pub fn ingest(
    existing: &[UploadedFile],
    incoming: Vec<IncomingFile>,
    constraints: &UploadConstraints,
    ids: &IdContext,
    previews: &dyn PreviewStore,
    ledger: &mut PreviewLedger,
) -> Vec<UploadedFile> {
    let mut next = existing.to_vec();
    next.extend(classify(existing, incoming, constraints, ids, previews, ledger));
    next
}

/// MIME type from a file name, for browsers that report none.
pub fn guess_mime(name: &str) -> &'static str {
    let ext = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "pdf" => "application/pdf",
        "json" => "application/json",
        "csv" => "text/csv",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}

/// Human-readable size: `512 B`, `1.5 KB`, `3.2 MB`, `1.0 GB`.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 3] = ["KB", "MB", "GB"];
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}
