//! Page Model
//!
//! Pure, cloneable state for every region the controller touches. Rendering
//! reads it; only the controller and the binding handlers write it.
//!
//! - **UploadPanel**: file input, drop zone, upload alert and spinner
//! - **QuestionPanel**: question field, alert, spinner, answer region
//! - **ZoteroPanel**: item form, collection selector, alert (absent when disabled)

pub mod alert;
pub mod field;
pub mod selector;

pub use alert::{Alert, Severity};
pub use field::TextField;
pub use selector::{CollectionSelector, SelectOption};

use crate::api::SelectedFile;

/// Named regions that can receive events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    FileInput,
    DropArea,
    UploadButton,
    QuestionInput,
    AskButton,
    DocTitle,
    DocAuthors,
    DocYear,
    DocDoi,
    ZoteroCollections,
    AddToZoteroButton,
}

impl Region {
    pub fn is_button(&self) -> bool {
        matches!(
            self,
            Region::UploadButton | Region::AskButton | Region::AddToZoteroButton
        )
    }

    pub fn label(&self) -> &str {
        match self {
            Region::FileInput => "File",
            Region::DropArea => "Drop zone",
            Region::UploadButton => "Upload",
            Region::QuestionInput => "Question",
            Region::AskButton => "Ask",
            Region::DocTitle => "Title",
            Region::DocAuthors => "Authors (comma-separated)",
            Region::DocYear => "Year",
            Region::DocDoi => "DOI",
            Region::ZoteroCollections => "Collection",
            Region::AddToZoteroButton => "Add to Zotero",
        }
    }
}

/// Independently shown/hidden page sections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Upload,
    Question,
    Zotero,
}

#[derive(Debug, Clone, Default)]
pub struct UploadPanel {
    pub file_input: TextField,
    /// What the file input currently holds
    pub selected_file: Option<SelectedFile>,
    /// Name shown under the drop zone
    pub file_label: String,
    pub drop_highlighted: bool,
    pub alert: Alert,
    pub loading: bool,
}

#[derive(Debug, Clone, Default)]
pub struct QuestionPanel {
    pub visible: bool,
    pub input: TextField,
    pub alert: Alert,
    pub loading: bool,
    pub answer: String,
    pub answer_visible: bool,
}

#[derive(Debug, Clone)]
pub struct ZoteroPanel {
    pub visible: bool,
    pub title: TextField,
    pub authors: TextField,
    pub year: TextField,
    pub doi: TextField,
    pub collections: CollectionSelector,
    pub alert: Alert,
}

impl ZoteroPanel {
    pub const PLACEHOLDER: &'static str = "-- No collection --";

    pub fn new() -> Self {
        Self {
            visible: false,
            title: TextField::new(),
            authors: TextField::new(),
            year: TextField::new(),
            doi: TextField::new(),
            collections: CollectionSelector::new(Self::PLACEHOLDER),
            alert: Alert::new(),
        }
    }
}

impl Default for ZoteroPanel {
    fn default() -> Self {
        Self::new()
    }
}

/// Root page model
#[derive(Debug, Clone)]
pub struct PageModel {
    pub upload: UploadPanel,
    pub question: QuestionPanel,
    /// `None` when the Zotero feature is disabled
    pub zotero: Option<ZoteroPanel>,
    pub focus: Region,
    /// Panel the viewport should keep in view
    pub scroll_anchor: Panel,
    pub should_quit: bool,
}

impl PageModel {
    pub fn new(zotero_enabled: bool) -> Self {
        Self {
            upload: UploadPanel::default(),
            question: QuestionPanel::default(),
            zotero: zotero_enabled.then(ZoteroPanel::new),
            focus: Region::FileInput,
            scroll_anchor: Panel::Upload,
            should_quit: false,
        }
    }

    pub fn is_panel_visible(&self, panel: Panel) -> bool {
        match panel {
            Panel::Upload => true,
            Panel::Question => self.question.visible,
            Panel::Zotero => self.zotero.as_ref().is_some_and(|z| z.visible),
        }
    }

    pub fn scroll_into_view(&mut self, panel: Panel) {
        self.scroll_anchor = panel;
    }

    /// Regions reachable with Tab, in page order, skipping hidden panels
    pub fn focus_order(&self) -> Vec<Region> {
        let mut order = vec![Region::FileInput, Region::UploadButton];
        if self.is_panel_visible(Panel::Question) {
            order.extend([Region::QuestionInput, Region::AskButton]);
        }
        if self.is_panel_visible(Panel::Zotero) {
            order.extend([
                Region::DocTitle,
                Region::DocAuthors,
                Region::DocYear,
                Region::DocDoi,
                Region::ZoteroCollections,
                Region::AddToZoteroButton,
            ]);
        }
        order
    }

    pub fn next_focus(&self) -> Region {
        let order = self.focus_order();
        let idx = order.iter().position(|r| *r == self.focus).unwrap_or(0);
        order[(idx + 1) % order.len()]
    }

    pub fn previous_focus(&self) -> Region {
        let order = self.focus_order();
        let idx = order.iter().position(|r| *r == self.focus).unwrap_or(0);
        order[(idx + order.len() - 1) % order.len()]
    }

    /// Text field backing a region, if it is one
    pub fn field_mut(&mut self, region: Region) -> Option<&mut TextField> {
        match region {
            Region::FileInput => Some(&mut self.upload.file_input),
            Region::QuestionInput => Some(&mut self.question.input),
            Region::DocTitle => self.zotero.as_mut().map(|z| &mut z.title),
            Region::DocAuthors => self.zotero.as_mut().map(|z| &mut z.authors),
            Region::DocYear => self.zotero.as_mut().map(|z| &mut z.year),
            Region::DocDoi => self.zotero.as_mut().map(|z| &mut z.doi),
            _ => None,
        }
    }

    pub fn field(&self, region: Region) -> Option<&TextField> {
        match region {
            Region::FileInput => Some(&self.upload.file_input),
            Region::QuestionInput => Some(&self.question.input),
            Region::DocTitle => self.zotero.as_ref().map(|z| &z.title),
            Region::DocAuthors => self.zotero.as_ref().map(|z| &z.authors),
            Region::DocYear => self.zotero.as_ref().map(|z| &z.year),
            Region::DocDoi => self.zotero.as_ref().map(|z| &z.doi),
            _ => None,
        }
    }

    /// Whether any request is currently showing a spinner
    pub fn is_loading(&self) -> bool {
        self.upload.loading || self.question.loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_page_shows_only_upload() {
        let page = PageModel::new(true);
        assert!(page.is_panel_visible(Panel::Upload));
        assert!(!page.is_panel_visible(Panel::Question));
        assert!(!page.is_panel_visible(Panel::Zotero));
        assert_eq!(page.focus_order(), vec![Region::FileInput, Region::UploadButton]);
    }

    #[test]
    fn test_zotero_disabled_has_no_panel() {
        let mut page = PageModel::new(false);
        assert!(page.zotero.is_none());
        assert!(page.field_mut(Region::DocTitle).is_none());
    }

    #[test]
    fn test_focus_cycles_through_revealed_panels() {
        let mut page = PageModel::new(true);
        page.question.visible = true;
        page.focus = Region::AskButton;
        assert_eq!(page.next_focus(), Region::FileInput);

        page.zotero.as_mut().unwrap().visible = true;
        assert_eq!(page.next_focus(), Region::DocTitle);
        page.focus = Region::FileInput;
        assert_eq!(page.previous_focus(), Region::AddToZoteroButton);
    }

    #[test]
    fn test_unknown_focus_restarts_cycle() {
        let mut page = PageModel::new(true);
        page.focus = Region::DocYear;
        assert_eq!(page.next_focus(), Region::UploadButton);
    }
}
