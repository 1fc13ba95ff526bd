//! Keyboard Input Handler
//!
//! Turns terminal events into region events for the binding table, and does
//! the default handling (focus movement, text entry) for whatever the table
//! lets through.

use std::path::Path;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use super::bindings::{BindingTable, Propagation, UiEvent};
use crate::api::SelectedFile;
use crate::controller::Controller;
use crate::logic::path::parse_dropped_paths;
use crate::model::Region;

/// Handle one terminal event
pub fn handle_terminal_event(controller: &mut Controller, bindings: &BindingTable, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(controller, bindings, key),
        Event::Paste(text) => handle_paste(controller, bindings, &text),
        _ => {}
    }
}

/// Handle a key press
pub fn handle_key(controller: &mut Controller, bindings: &BindingTable, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
    {
        controller.page.should_quit = true;
        return;
    }

    match key.code {
        KeyCode::Tab => {
            let target = controller.page.next_focus();
            move_focus(controller, bindings, target);
            return;
        }
        KeyCode::BackTab => {
            let target = controller.page.previous_focus();
            move_focus(controller, bindings, target);
            return;
        }
        _ => {}
    }

    let region = controller.page.focus;
    if bindings.dispatch(controller, region, &UiEvent::KeyPress(key.code)) == Propagation::Stop {
        return;
    }

    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') if region.is_button() => {
            bindings.dispatch(controller, region, &UiEvent::Click);
        }
        KeyCode::Enter if region == Region::FileInput => {
            let raw = controller.page.upload.file_input.value().trim().to_string();
            let files = if raw.is_empty() {
                Vec::new()
            } else {
                SelectedFile::resolve(Path::new(&raw))
            };
            bindings.dispatch(controller, Region::FileInput, &UiEvent::Change { files });
        }
        KeyCode::Up | KeyCode::Down if region == Region::ZoteroCollections => {
            if let Some(zotero) = controller.page.zotero.as_mut() {
                if key.code == KeyCode::Up {
                    zotero.collections.select_previous();
                } else {
                    zotero.collections.select_next();
                }
            }
        }
        code => edit_field(controller, region, code, key.modifiers),
    }
}

fn edit_field(controller: &mut Controller, region: Region, code: KeyCode, modifiers: KeyModifiers) {
    let Some(field) = controller.page.field_mut(region) else {
        return;
    };

    match code {
        KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => field.insert_char(c),
        KeyCode::Backspace => field.backspace(),
        KeyCode::Delete => field.delete(),
        KeyCode::Left => field.move_left(),
        KeyCode::Right => field.move_right(),
        KeyCode::Home => field.move_home(),
        KeyCode::End => field.move_end(),
        _ => {}
    }
}

/// Bracketed paste: a drop when the drop zone has focus, text otherwise
pub fn handle_paste(controller: &mut Controller, bindings: &BindingTable, text: &str) {
    let region = controller.page.focus;

    if region == Region::FileInput {
        let files: Vec<SelectedFile> = parse_dropped_paths(text)
            .iter()
            .flat_map(|path| SelectedFile::resolve(path))
            .collect();
        debug!(pasted = text, resolved = files.len(), "Drop on drop zone");

        bindings.dispatch(controller, Region::DropArea, &UiEvent::DragOver);
        if bindings.dispatch(controller, Region::DropArea, &UiEvent::Drop { files })
            == Propagation::Stop
        {
            return;
        }
    }

    if let Some(field) = controller.page.field_mut(region) {
        field.insert_str(text);
    }
}

/// Move focus, firing drag enter/leave as focus crosses the drop zone
pub fn move_focus(controller: &mut Controller, bindings: &BindingTable, target: Region) {
    let current = controller.page.focus;
    if current == target {
        return;
    }

    if current == Region::FileInput {
        bindings.dispatch(controller, Region::DropArea, &UiEvent::DragLeave);
    }
    controller.page.focus = target;
    if target == Region::FileInput {
        bindings.dispatch(controller, Region::DropArea, &UiEvent::DragEnter);
    }
}
