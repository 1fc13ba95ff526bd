//! Form validation
//!
//! Turns raw field contents into request payloads, or the alert text to show
//! when a precondition fails.

use crate::api::{ItemMetadata, ZoteroAddRequest};

pub const MISSING_FILE: &str = "Please select a PDF file first";
pub const MISSING_QUESTION: &str = "Please enter a question";
pub const MISSING_TITLE: &str = "Please enter a title";

/// Trimmed question, or `None` when nothing but whitespace was entered
pub fn normalize_question(raw: &str) -> Option<String> {
    let question = raw.trim();
    if question.is_empty() {
        None
    } else {
        Some(question.to_string())
    }
}

/// Split a comma-separated author field, trimming each piece
///
/// Empty pieces are kept, so an empty field yields a single empty author.
pub fn parse_authors(raw: &str) -> Vec<String> {
    raw.trim()
        .split(',')
        .map(|author| author.trim().to_string())
        .collect()
}

/// Map the selector value to a collection key; the default option is empty
pub fn collection_key(selected: &str) -> Option<String> {
    if selected.is_empty() {
        None
    } else {
        Some(selected.to_string())
    }
}

/// Raw Zotero form contents at submit time
#[derive(Debug, Clone, Default)]
pub struct ZoteroForm<'a> {
    pub title: &'a str,
    pub authors: &'a str,
    pub year: &'a str,
    pub doi: &'a str,
    pub collection: &'a str,
}

/// Build the `/zotero/add` payload; `Err` carries the validation alert
pub fn build_add_request(form: &ZoteroForm<'_>) -> Result<ZoteroAddRequest, &'static str> {
    let title = form.title.trim();
    if title.is_empty() {
        return Err(MISSING_TITLE);
    }

    Ok(ZoteroAddRequest {
        metadata: ItemMetadata {
            title: title.to_string(),
            authors: parse_authors(form.authors),
            year: form.year.trim().to_string(),
            doi: form.doi.trim().to_string(),
        },
        collection_key: collection_key(form.collection),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_question_trims() {
        assert_eq!(normalize_question("  What is X?\t"), Some("What is X?".to_string()));
    }

    #[test]
    fn test_whitespace_question_is_invalid() {
        assert_eq!(normalize_question(""), None);
        assert_eq!(normalize_question(" \n\t "), None);
    }

    #[test]
    fn test_parse_authors_trims_each_piece() {
        assert_eq!(parse_authors(" Alice, Bob ,Carol"), vec!["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn test_parse_authors_single() {
        assert_eq!(parse_authors("Ada Lovelace"), vec!["Ada Lovelace"]);
    }

    #[test]
    fn test_parse_authors_empty_field() {
        assert_eq!(parse_authors("   "), vec![""]);
    }

    #[test]
    fn test_collection_key_default_is_none() {
        assert_eq!(collection_key(""), None);
        assert_eq!(collection_key("ABCD1234"), Some("ABCD1234".to_string()));
    }

    #[test]
    fn test_build_add_request_requires_title() {
        let form = ZoteroForm {
            title: "   ",
            authors: "Alice",
            ..Default::default()
        };
        assert_eq!(build_add_request(&form), Err(MISSING_TITLE));
    }

    #[test]
    fn test_build_add_request_trims_fields() {
        let form = ZoteroForm {
            title: "  Cyber Threats to Medical Devices ",
            authors: " Alice, Bob ",
            year: " 2021 ",
            doi: " 10.1000/xyz ",
            collection: "COLL1",
        };
        let request = build_add_request(&form).unwrap();
        assert_eq!(request.metadata.title, "Cyber Threats to Medical Devices");
        assert_eq!(request.metadata.authors, vec!["Alice", "Bob"]);
        assert_eq!(request.metadata.year, "2021");
        assert_eq!(request.metadata.doi, "10.1000/xyz");
        assert_eq!(request.collection_key.as_deref(), Some("COLL1"));
    }
}
