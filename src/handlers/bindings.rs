//! Region Event Bindings
//!
//! The page wiring as data: each entry maps an event kind on a region to a
//! handler function. Several handlers may share a key; they run in table
//! order, like listeners registered on the same element.

use crossterm::event::KeyCode;
use tracing::trace;

use crate::api::SelectedFile;
use crate::controller::Controller;
use crate::model::Region;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Change,
    DragEnter,
    DragOver,
    DragLeave,
    Drop,
    Click,
    KeyPress,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// File input committed; zero or one files
    Change { files: Vec<SelectedFile> },
    DragEnter,
    DragOver,
    DragLeave,
    Drop { files: Vec<SelectedFile> },
    Click,
    KeyPress(KeyCode),
}

impl UiEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            UiEvent::Change { .. } => EventKind::Change,
            UiEvent::DragEnter => EventKind::DragEnter,
            UiEvent::DragOver => EventKind::DragOver,
            UiEvent::DragLeave => EventKind::DragLeave,
            UiEvent::Drop { .. } => EventKind::Drop,
            UiEvent::Click => EventKind::Click,
            UiEvent::KeyPress(_) => EventKind::KeyPress,
        }
    }
}

/// Whether the event may reach default handling (text entry, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    Stop,
}

pub type Handler = fn(&mut Controller, &UiEvent) -> Propagation;

#[derive(Clone)]
pub struct Binding {
    pub kind: EventKind,
    pub region: Region,
    pub name: &'static str,
    handler: Handler,
}

impl std::fmt::Debug for Binding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binding")
            .field("kind", &self.kind)
            .field("region", &self.region)
            .field("name", &self.name)
            .finish()
    }
}

#[derive(Debug, Clone, Default)]
pub struct BindingTable {
    bindings: Vec<Binding>,
}

impl BindingTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, kind: EventKind, region: Region, name: &'static str, handler: Handler) {
        self.bindings.push(Binding {
            kind,
            region,
            name,
            handler,
        });
    }

    /// The page's wiring; the add-to-Zotero button only exists when enabled
    pub fn page_defaults(zotero_enabled: bool) -> Self {
        let mut table = Self::new();

        table.bind(EventKind::Change, Region::FileInput, "file-change", on_file_change);

        for kind in [
            EventKind::DragEnter,
            EventKind::DragOver,
            EventKind::DragLeave,
            EventKind::Drop,
        ] {
            table.bind(kind, Region::DropArea, "prevent-defaults", prevent_defaults);
        }
        for kind in [EventKind::DragEnter, EventKind::DragOver] {
            table.bind(kind, Region::DropArea, "highlight", highlight);
        }
        for kind in [EventKind::DragLeave, EventKind::Drop] {
            table.bind(kind, Region::DropArea, "unhighlight", unhighlight);
        }
        table.bind(EventKind::Drop, Region::DropArea, "drop", on_drop);

        table.bind(EventKind::Click, Region::UploadButton, "upload", on_upload_click);
        table.bind(EventKind::Click, Region::AskButton, "ask", on_ask_click);
        table.bind(EventKind::KeyPress, Region::QuestionInput, "question-enter", on_question_key);

        if zotero_enabled {
            table.bind(
                EventKind::Click,
                Region::AddToZoteroButton,
                "add-to-zotero",
                on_add_to_zotero_click,
            );
        }

        table
    }

    /// Handlers registered for `(kind, region)`, in order
    pub fn handlers_for(&self, kind: EventKind, region: Region) -> Vec<&Binding> {
        self.bindings
            .iter()
            .filter(|b| b.kind == kind && b.region == region)
            .collect()
    }

    /// Run every matching handler; `Stop` if any of them stopped the event
    pub fn dispatch(&self, controller: &mut Controller, region: Region, event: &UiEvent) -> Propagation {
        let kind = event.kind();
        let mut propagation = Propagation::Continue;

        for binding in self.bindings.iter().filter(|b| b.kind == kind && b.region == region) {
            trace!(handler = binding.name, ?region, ?kind, "Dispatching");
            if (binding.handler)(controller, event) == Propagation::Stop {
                propagation = Propagation::Stop;
            }
        }

        propagation
    }
}

fn on_file_change(controller: &mut Controller, event: &UiEvent) -> Propagation {
    if let UiEvent::Change { files } = event {
        controller.select_files(files.clone());
    }
    Propagation::Continue
}

/// Drag events on the drop zone never reach any other handler
fn prevent_defaults(_controller: &mut Controller, _event: &UiEvent) -> Propagation {
    Propagation::Stop
}

fn highlight(controller: &mut Controller, _event: &UiEvent) -> Propagation {
    controller.set_drop_highlight(true);
    Propagation::Continue
}

fn unhighlight(controller: &mut Controller, _event: &UiEvent) -> Propagation {
    controller.set_drop_highlight(false);
    Propagation::Continue
}

fn on_drop(controller: &mut Controller, event: &UiEvent) -> Propagation {
    if let UiEvent::Drop { files } = event {
        controller.drop_files(files.clone());
    }
    Propagation::Continue
}

fn on_upload_click(controller: &mut Controller, _event: &UiEvent) -> Propagation {
    controller.upload();
    Propagation::Continue
}

fn on_ask_click(controller: &mut Controller, _event: &UiEvent) -> Propagation {
    controller.ask();
    Propagation::Continue
}

/// Enter in the question field acts as an ask click
fn on_question_key(controller: &mut Controller, event: &UiEvent) -> Propagation {
    if let UiEvent::KeyPress(KeyCode::Enter) = event {
        on_ask_click(controller, &UiEvent::Click);
    }
    Propagation::Continue
}

fn on_add_to_zotero_click(controller: &mut Controller, _event: &UiEvent) -> Propagation {
    controller.add_to_zotero();
    Propagation::Continue
}
