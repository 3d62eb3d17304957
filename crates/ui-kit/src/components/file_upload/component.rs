use std::cell::RefCell;
use std::rc::Rc;

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;

use crate::class::class_names;
use crate::components::glyphs;
use crate::ids::{use_id_source, use_stable_id};
use crate::variant::Size;

use super::ingest::{
    format_bytes, guess_mime, ingest, FileHandle, IncomingFile, UploadConstraints, UploadedFile,
};
use super::preview::{PreviewLedger, PreviewStoreContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragVerdict {
    Valid,
    Rejected,
}

/// Drop zone feedback. Independent of the caller's file list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropZoneState {
    #[default]
    Idle,
    Dragging(DragVerdict),
}

impl DropZoneState {
    /// State while something is dragged over the zone.
    pub fn dragging(disabled: bool, at_capacity: bool) -> Self {
        if disabled || at_capacity {
            DropZoneState::Dragging(DragVerdict::Rejected)
        } else {
            DropZoneState::Dragging(DragVerdict::Valid)
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            DropZoneState::Idle => "idle",
            DropZoneState::Dragging(DragVerdict::Valid) => "valid",
            DropZoneState::Dragging(DragVerdict::Rejected) => "rejected",
        }
    }
}

async fn read_incoming(
    files: Vec<FileData>,
    read_previews: bool,
    max_size: Option<u64>,
) -> Vec<IncomingFile> {
    let mut incoming = Vec::with_capacity(files.len());
    for file in files {
        let name = file.name();
        let size = file.size();
        let mime = file
            .content_type()
            .filter(|mime| !mime.is_empty())
            .unwrap_or_else(|| guess_mime(&name).to_string());
        let wants_preview =
            read_previews && mime.starts_with("image/") && max_size.map_or(true, |max| size <= max);
        let content = if wants_preview {
            file.read_bytes().await.ok().map(|bytes| bytes.to_vec())
        } else {
            None
        };
        incoming.push(IncomingFile {
            name,
            size,
            mime,
            content,
            handle: Some(FileHandle::new(file)),
        });
    }
    incoming
}

/// Drop zone plus the list of picked files.
///
/// The caller owns `files`. Each drop or selection produces exactly one
/// `on_files_change` with the existing records followed by one record per
/// new file; rejected files stay in the list with an `error`. Removal goes
/// through `on_remove`. Image previews are released when their record leaves
/// `files` and when the component unmounts.
#[component]
pub fn FileUpload(
    files: Vec<UploadedFile>,
    on_files_change: EventHandler<Vec<UploadedFile>>,
    on_remove: Option<EventHandler<String>>,
    accept: Option<String>,
    max_size: Option<u64>,
    max_files: Option<usize>,
    #[props(default = true)] multiple: bool,
    #[props(default = false)] disabled: bool,
    #[props(default = true)] show_previews: bool,
    label: Option<String>,
    #[props(default = "Drag files here or click to browse".to_string())] prompt: String,
    icon: Option<Element>,
    id: Option<String>,
    previews: Option<PreviewStoreContext>,
    #[props(default)] size: Size,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let ids = use_id_source();
    let input_id = use_stable_id(id, "file-upload");
    let store = use_hook(|| {
        previews
            .clone()
            .or_else(try_consume_context::<PreviewStoreContext>)
            .unwrap_or_else(PreviewStoreContext::data_urls)
    });
    let ledger = use_hook(|| Rc::new(RefCell::new(PreviewLedger::new())));
    let mut zone = use_signal(DropZoneState::default);

    let released = {
        let mut ledger = ledger.borrow_mut();
        for file in &files {
            if let Some(preview) = &file.preview {
                ledger.claim(&file.id, preview);
            }
        }
        ledger.sync(files.iter().map(|f| f.id.as_str()))
    };
    for preview in &released {
        store.store().release(preview);
    }

    use_drop({
        let ledger = ledger.clone();
        let store = store.clone();
        move || {
            for preview in ledger.borrow_mut().drain() {
                store.store().release(&preview);
            }
        }
    });

    let constraints = UploadConstraints {
        accept: accept.as_deref().map(UploadConstraints::parse_accept).unwrap_or_default(),
        max_size,
        max_files,
        multiple,
    };
    let taken = files.iter().filter(|f| !f.is_rejected()).count();
    let at_capacity = constraints.capacity().is_some_and(|cap| taken >= cap);
    let hint = constraints.hint();
    let hint_id = format!("{input_id}-hint");

    let accept_batch = {
        let existing = files.clone();
        let constraints = constraints.clone();
        let ledger = ledger.clone();
        let store = store.clone();
        move |picked: Vec<FileData>| {
            if disabled || picked.is_empty() {
                return;
            }
            let existing = existing.clone();
            let constraints = constraints.clone();
            let ledger = ledger.clone();
            let store = store.clone();
            let ids = ids.clone();
            spawn(async move {
                let incoming = read_incoming(picked, show_previews, constraints.max_size).await;
                let next = ingest(
                    &existing,
                    incoming,
                    &constraints,
                    &ids,
                    store.store(),
                    &mut ledger.borrow_mut(),
                );
                on_files_change.call(next);
            });
        }
    };
    let on_picked = accept_batch.clone();

    let open_picker = {
        let input_id = input_id.clone();
        move || {
            if !disabled {
                let _ = document::eval(&format!(
                    "document.getElementById('{input_id}')?.click()"
                ));
            }
        }
    };
    let open_on_key = open_picker.clone();

    let class = class_names([
        Some("ui-file-upload"),
        disabled.then_some("is-disabled"),
    ]);
    let base = vec![
        Attribute::new("class", class, None, false),
        Attribute::new("data-size", size.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { ..merged,
            if let Some(text) = label {
                label { class: "ui-file-upload-label", r#for: "{input_id}", "{text}" }
            }
            div {
                class: "ui-file-upload-zone",
                role: if !disabled { "button" },
                tabindex: if !disabled { "0" },
                "aria-disabled": if disabled { "true" },
                "aria-describedby": if hint.is_some() { "{hint_id}" },
                "data-state": zone().class(),
                onclick: move |_| open_picker(),
                onkeydown: move |evt: KeyboardEvent| {
                    let activates = match evt.key() {
                        Key::Enter => true,
                        Key::Character(c) => c == " ",
                        _ => false,
                    };
                    if activates {
                        evt.prevent_default();
                        open_on_key();
                    }
                },
                ondragover: move |evt: DragEvent| {
                    evt.prevent_default();
                    let next = DropZoneState::dragging(disabled, at_capacity);
                    if *zone.peek() != next {
                        zone.set(next);
                    }
                },
                ondragleave: move |_| zone.set(DropZoneState::Idle),
                ondrop: move |evt: DragEvent| {
                    evt.prevent_default();
                    zone.set(DropZoneState::Idle);
                    accept_batch(evt.files());
                },
                span { class: "ui-file-upload-icon", "aria-hidden": "true",
                    if let Some(icon) = icon {
                        {icon}
                    } else {
                        {glyphs::upload(size.icon_px() + 8)}
                    }
                }
                span { class: "ui-file-upload-prompt", "{prompt}" }
                if let Some(hint) = &hint {
                    span { id: "{hint_id}", class: "ui-file-upload-hint", "{hint}" }
                }
            }
            input {
                id: "{input_id}",
                class: "ui-file-upload-input",
                r#type: "file",
                tabindex: "-1",
                multiple,
                disabled,
                accept,
                onchange: move |evt: FormEvent| on_picked(evt.files()),
            }
            if !files.is_empty() {
                ul { class: "ui-file-upload-list",
                    for file in files.iter().cloned() {
                        FileRow { key: "{file.id}", file, on_remove, disabled }
                    }
                }
            }
        }
    }
}

#[component]
fn FileRow(file: UploadedFile, on_remove: Option<EventHandler<String>>, disabled: bool) -> Element {
    let class = class_names([
        Some("ui-file-row"),
        file.is_rejected().then_some("is-rejected"),
    ]);
    let progress = file.progress.map(|p| p.min(100));
    let size_text = format_bytes(file.size);
    let id = file.id.clone();

    rsx! {
        li { class: "{class}",
            div { class: "ui-file-thumb", "aria-hidden": "true",
                if let Some(preview) = &file.preview {
                    img { src: "{preview.url}", alt: "" }
                } else if file.is_image() {
                    {glyphs::image(20)}
                } else {
                    {glyphs::file(20)}
                }
            }
            div { class: "ui-file-meta",
                span { class: "ui-file-name", "{file.name}" }
                span { class: "ui-file-size", "{size_text}" }
                if let Some(progress) = progress {
                    div {
                        class: "ui-file-progress",
                        role: "progressbar",
                        "aria-valuemin": "0",
                        "aria-valuemax": "100",
                        "aria-valuenow": "{progress}",
                        div { class: "ui-file-progress-bar", style: "width: {progress}%" }
                    }
                }
                if let Some(error) = &file.error {
                    p { class: "ui-file-error", role: "alert", "{error}" }
                }
            }
            if let Some(handler) = on_remove {
                button {
                    class: "ui-file-remove",
                    r#type: "button",
                    "aria-label": "Remove {file.name}",
                    disabled,
                    onclick: move |_| handler.call(id.clone()),
                    {glyphs::close(12)}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::file_upload::preview::{DataUrlPreviews, PreviewRef, PreviewStore};
    use pretty_assertions::assert_eq;

    /// Wraps the data-URL store and records every release.
    #[derive(Default)]
    struct RecordingStore {
        inner: DataUrlPreviews,
        released: RefCell<Vec<u64>>,
    }

    impl PreviewStore for RecordingStore {
        fn allocate(&self, mime: &str, bytes: &[u8]) -> Option<PreviewRef> {
            self.inner.allocate(mime, bytes)
        }

        fn release(&self, preview: &PreviewRef) {
            self.released.borrow_mut().push(preview.token);
            self.inner.release(preview);
        }
    }

    thread_local! {
        static STORE: Rc<RecordingStore> = Rc::new(RecordingStore::default());
        static LISTED: RefCell<Vec<UploadedFile>> = const { RefCell::new(Vec::new()) };
        static MOUNTED: std::cell::Cell<bool> = const { std::cell::Cell::new(true) };
    }

    #[test]
    fn drag_verdicts() {
        assert_eq!(DropZoneState::default(), DropZoneState::Idle);
        assert_eq!(
            DropZoneState::dragging(false, false),
            DropZoneState::Dragging(DragVerdict::Valid)
        );
        assert_eq!(
            DropZoneState::dragging(true, false),
            DropZoneState::Dragging(DragVerdict::Rejected)
        );
        assert_eq!(DropZoneState::dragging(false, true).class(), "rejected");
    }

    #[test]
    fn rows_show_errors_progress_and_remove() {
        let files = vec![
            UploadedFile {
                id: "f1".into(),
                name: "photo.png".into(),
                size: 2048,
                mime: "image/png".into(),
                progress: Some(40),
                ..UploadedFile::default()
            },
            UploadedFile {
                id: "f2".into(),
                name: "notes.exe".into(),
                size: 10,
                error: Some("File type not accepted: notes.exe".into()),
                ..UploadedFile::default()
            },
        ];
        let html = dioxus_ssr::render_element(rsx! {
            FileUpload {
                files,
                on_files_change: move |_| {},
                on_remove: move |_| {},
                accept: "image/*",
                max_size: 1_048_576u64,
                previews: PreviewStoreContext::new(DataUrlPreviews::new()),
            }
        });
        assert!(html.contains("photo.png"), "{html}");
        assert!(html.contains("2.0 KB"), "{html}");
        assert!(html.contains(r#"aria-valuenow="40""#), "{html}");
        assert!(html.contains("File type not accepted"), "{html}");
        assert_eq!(html.matches("ui-file-remove").count(), 2, "{html}");
        assert!(html.contains("Accepted: image/*"), "{html}");
        assert!(html.contains(r#"data-state="idle""#), "{html}");
        assert!(html.contains(r#"role="button""#), "{html}");
    }

    #[test]
    fn disabled_zone_is_not_focusable() {
        let html = dioxus_ssr::render_element(rsx! {
            FileUpload { files: vec![], on_files_change: move |_| {}, disabled: true }
        });
        let start = html.find("ui-file-upload-zone").unwrap();
        let end = start + html[start..].find('>').unwrap();
        let zone = &html[start..end];
        assert!(!zone.contains("role="), "{zone}");
        assert!(!zone.contains("tabindex="), "{zone}");
        assert!(zone.contains(r#"aria-disabled="true""#), "{zone}");
        assert!(!html.contains("ui-file-upload-list"), "{html}");
    }

    #[test]
    fn removing_an_image_releases_its_preview_once() {
        fn app() -> Element {
            let store: Rc<dyn PreviewStore> = STORE.with(|s| s.clone());
            let files = LISTED.with(|l| l.borrow().clone());
            rsx! {
                if MOUNTED.get() {
                    FileUpload {
                        files,
                        on_files_change: move |_| {},
                        previews: PreviewStoreContext::from_rc(store),
                    }
                }
            }
        }

        let record = |id: &str| UploadedFile {
            id: id.into(),
            name: format!("{id}.png"),
            size: 4,
            mime: "image/png".into(),
            preview: STORE.with(|s| s.allocate("image/png", &[1, 2, 3, 4])),
            ..UploadedFile::default()
        };
        let first = record("a");
        let second = record("b");
        let first_token = first.preview.as_ref().unwrap().token;
        LISTED.with(|l| *l.borrow_mut() = vec![first, second]);
        MOUNTED.set(true);

        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        assert!(STORE.with(|s| s.released.borrow().is_empty()));

        LISTED.with(|l| l.borrow_mut().remove(0));
        dom.mark_dirty(ScopeId::APP);
        dom.render_immediate_to_vec();
        assert_eq!(STORE.with(|s| s.released.borrow().clone()), vec![first_token]);

        // Re-rendering with the same list releases nothing more.
        dom.mark_dirty(ScopeId::APP);
        dom.render_immediate_to_vec();
        assert_eq!(STORE.with(|s| s.released.borrow().len()), 1);

        MOUNTED.set(false);
        dom.mark_dirty(ScopeId::APP);
        dom.render_immediate_to_vec();
        STORE.with(|s| {
            assert_eq!(s.released.borrow().len(), 2);
            assert_eq!(s.inner.live_count(), 0);
        });
    }
}
