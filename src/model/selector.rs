//! Zotero collection selector
//!
//! Behaves like a `<select>`: option 0 is a fixed placeholder with an empty
//! value, and refreshing replaces everything after it.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionSelector {
    options: Vec<SelectOption>,
    selected: usize,
}

impl CollectionSelector {
    pub fn new(placeholder: &str) -> Self {
        Self {
            options: vec![SelectOption {
                value: String::new(),
                label: placeholder.to_string(),
            }],
            selected: 0,
        }
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Number of options after the placeholder
    pub fn collection_count(&self) -> usize {
        self.options.len() - 1
    }

    /// Drop every option but the placeholder, then append the new ones
    pub fn replace_options<I>(&mut self, options: I)
    where
        I: IntoIterator<Item = SelectOption>,
    {
        let previous = self.selected_value().to_string();
        self.options.truncate(1);
        self.options.extend(options);

        // A removed selection falls back to the placeholder
        self.selected = self
            .options
            .iter()
            .position(|o| !previous.is_empty() && o.value == previous)
            .unwrap_or(0);
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_value(&self) -> &str {
        &self.options[self.selected].value
    }

    pub fn select(&mut self, index: usize) {
        if index < self.options.len() {
            self.selected = index;
        }
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.options.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}
