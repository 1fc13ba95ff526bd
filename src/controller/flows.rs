//! Flow activations and response application
//!
//! Each flow validates locally first, then marks itself in flight, updates the
//! page (spinner, hidden alert) and spawns its request. The matching `apply_*`
//! runs when the response comes back and always clears the spinner.

use tracing::{debug, error, info, warn};

use super::Controller;
use crate::api::{parse_collections, Reply};
use crate::logic::errors::{classify_error, format_error_message};
use crate::logic::forms::{self, ZoteroForm};
use crate::messages::{Flow, FlowResponse};
use crate::model::{Panel, SelectOption, Severity};

pub const UPLOAD_FAILED: &str = "An error occurred during upload";
pub const ASK_FAILED: &str = "An error occurred while getting the answer";
pub const ZOTERO_FAILED: &str = "Error adding to Zotero";

fn log_transport_error(flow: Flow, err: &anyhow::Error) {
    error!(
        flow = flow.as_str(),
        kind = ?classify_error(err),
        cause = %format_error_message(err),
        "Request failed: {:#}",
        err
    );
}

impl Controller {
    // ============================================
    // UPLOAD
    // ============================================

    /// Upload button activation
    pub fn upload(&mut self) {
        let Some(file) = self.page.upload.selected_file.clone() else {
            self.page
                .upload
                .alert
                .show(forms::MISSING_FILE, Severity::Error);
            return;
        };

        if self.upload_flow.is_busy() {
            debug!("Upload already in flight, ignoring activation");
            return;
        }

        self.page.upload.loading = true;
        self.page.upload.alert.hide();

        let generation = self.upload_flow.begin();
        let service = self.service();
        info!(file = %file.path.display(), generation, "Uploading document");

        self.spawn_flow(async move {
            let result = service.upload(&file).await;
            FlowResponse::Upload { generation, result }
        });
    }

    fn apply_upload(&mut self, generation: u64, result: anyhow::Result<Reply>) {
        if !self.upload_flow.finish(generation) {
            debug!(generation, "Discarding stale upload response");
            return;
        }

        match result {
            Ok(reply) if reply.ok => {
                self.page
                    .upload
                    .alert
                    .show(reply.message(), Severity::Success);
                self.page.question.visible = true;

                if let Some(zotero) = self.page.zotero.as_mut() {
                    zotero.visible = true;
                    self.load_collections();
                }

                self.page.scroll_into_view(Panel::Question);
            }
            Ok(reply) => {
                warn!(status = reply.status, error = reply.error(), "Upload rejected");
                self.page.upload.alert.show(reply.error(), Severity::Error);
            }
            Err(err) => {
                self.page.upload.alert.show(UPLOAD_FAILED, Severity::Error);
                log_transport_error(Flow::Upload, &err);
            }
        }

        self.page.upload.loading = false;
    }

    // ============================================
    // QUESTION
    // ============================================

    /// Ask button activation (Enter in the question field lands here too)
    pub fn ask(&mut self) {
        let Some(question) = forms::normalize_question(self.page.question.input.value()) else {
            self.page
                .question
                .alert
                .show(forms::MISSING_QUESTION, Severity::Error);
            return;
        };

        if self.ask_flow.is_busy() {
            debug!("Question already in flight, ignoring activation");
            return;
        }

        self.page.question.loading = true;
        self.page.question.alert.hide();
        self.page.question.answer_visible = false;

        let generation = self.ask_flow.begin();
        let service = self.service();
        debug!(generation, question = %question, "Sending question");

        self.spawn_flow(async move {
            let result = service.ask(&question).await;
            FlowResponse::Ask { generation, result }
        });
    }

    fn apply_ask(&mut self, generation: u64, result: anyhow::Result<Reply>) {
        if !self.ask_flow.finish(generation) {
            debug!(generation, "Discarding stale answer");
            return;
        }

        match result {
            Ok(reply) if reply.ok => {
                self.page.question.answer = reply.answer().to_string();
                self.page.question.answer_visible = true;
            }
            Ok(reply) => {
                warn!(status = reply.status, payload = ?reply.body, "Error in ask request");
                self.page.question.alert.show(reply.error(), Severity::Error);
            }
            Err(err) => {
                self.page.question.alert.show(ASK_FAILED, Severity::Error);
                log_transport_error(Flow::Ask, &err);
            }
        }

        self.page.question.loading = false;
    }

    // ============================================
    // ZOTERO
    // ============================================

    /// Refresh the collection selector; a newer fetch supersedes an older one
    pub fn load_collections(&mut self) {
        if self.page.zotero.is_none() {
            return;
        }

        if let Some(previous) = self.collections_task.take() {
            previous.abort();
        }

        let generation = self.collections_flow.begin();
        let service = self.service();

        let handle = self.spawn_flow(async move {
            let result = service.list_collections().await;
            FlowResponse::Collections { generation, result }
        });
        self.collections_task = Some(handle);
    }

    fn apply_collections(&mut self, generation: u64, result: anyhow::Result<serde_json::Value>) {
        if !self.collections_flow.finish(generation) {
            debug!(generation, "Discarding stale collection list");
            return;
        }
        self.collections_task = None;

        let Some(zotero) = self.page.zotero.as_mut() else {
            return;
        };

        match result {
            Ok(value) => match parse_collections(&value) {
                Some(Ok(collections)) => {
                    zotero
                        .collections
                        .replace_options(collections.into_iter().map(|c| SelectOption {
                            value: c.key,
                            label: c.data.name,
                        }));
                    debug!(
                        count = zotero.collections.collection_count(),
                        "Loaded Zotero collections"
                    );
                }
                Some(Err(err)) => {
                    error!(error = %err, "Malformed Zotero collection entry");
                }
                None => {
                    debug!(payload = %value, "Collections response is not an array, ignoring");
                }
            },
            Err(err) => log_transport_error(Flow::Collections, &err),
        }
    }

    /// Add-to-Zotero button activation
    pub fn add_to_zotero(&mut self) {
        let Some(zotero) = self.page.zotero.as_mut() else {
            return;
        };

        let form = ZoteroForm {
            title: zotero.title.value(),
            authors: zotero.authors.value(),
            year: zotero.year.value(),
            doi: zotero.doi.value(),
            collection: zotero.collections.selected_value(),
        };

        let request = match forms::build_add_request(&form) {
            Ok(request) => request,
            Err(message) => {
                zotero.alert.show(message, Severity::Error);
                return;
            }
        };

        if self.zotero_flow.is_busy() {
            debug!("Zotero add already in flight, ignoring activation");
            return;
        }

        let generation = self.zotero_flow.begin();
        let service = self.service();
        info!(title = %request.metadata.title, collection = ?request.collection_key, "Adding item to Zotero");

        self.spawn_flow(async move {
            let result = service.add_to_zotero(&request).await;
            FlowResponse::ZoteroAdd { generation, result }
        });
    }

    fn apply_zotero_add(&mut self, generation: u64, result: anyhow::Result<Reply>) {
        if !self.zotero_flow.finish(generation) {
            debug!(generation, "Discarding stale Zotero response");
            return;
        }

        let Some(zotero) = self.page.zotero.as_mut() else {
            return;
        };

        match result {
            Ok(reply) if reply.ok => zotero.alert.show(reply.message(), Severity::Success),
            Ok(reply) => {
                warn!(status = reply.status, error = reply.error(), "Zotero add rejected");
                zotero.alert.show(reply.error(), Severity::Error);
            }
            Err(err) => {
                zotero.alert.show(ZOTERO_FAILED, Severity::Error);
                log_transport_error(Flow::ZoteroAdd, &err);
            }
        }
    }

    /// Route a response to its flow
    pub fn handle_response(&mut self, response: FlowResponse) {
        match response {
            FlowResponse::Upload { generation, result } => self.apply_upload(generation, result),
            FlowResponse::Ask { generation, result } => self.apply_ask(generation, result),
            FlowResponse::Collections { generation, result } => {
                self.apply_collections(generation, result)
            }
            FlowResponse::ZoteroAdd { generation, result } => {
                self.apply_zotero_add(generation, result)
            }
        }
    }
}
