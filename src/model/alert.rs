//! Alert region state
//!
//! An alert is a single-line status message with an error or success style.
//! It stays until it is overwritten or hidden by another flow.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    text: String,
    severity: Option<Severity>,
    hidden: bool,
}

impl Default for Alert {
    fn default() -> Self {
        Self {
            text: String::new(),
            severity: None,
            hidden: true,
        }
    }
}

impl Alert {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text and replace any prior hidden/error/success state
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) {
        self.text = message.into();
        self.hidden = false;
        self.severity = Some(severity);
    }

    /// Hide without clearing text or style
    pub fn hide(&mut self) {
        self.hidden = true;
    }

    pub fn is_visible(&self) -> bool {
        !self.hidden
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn severity(&self) -> Option<Severity> {
        self.severity
    }
}
