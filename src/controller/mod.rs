//! UI Controller
//!
//! Owns the page model and drives the four request/response flows against an
//! injected [`DocumentService`]. Network calls run on spawned tasks and report
//! back through a channel; [`Controller::drain_responses`] applies them on the
//! UI task, so page state is only ever mutated from one place.

mod flows;

pub use flows::{ASK_FAILED, UPLOAD_FAILED, ZOTERO_FAILED};

use std::future::Future;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::AbortHandle;
use tracing::debug;

use crate::api::{DocumentService, SelectedFile};
use crate::logic::flow::FlowTracker;
use crate::messages::{Flow, FlowResponse};
use crate::model::PageModel;

pub struct Controller {
    pub page: PageModel,

    service: Arc<dyn DocumentService>,
    response_tx: mpsc::UnboundedSender<FlowResponse>,
    response_rx: mpsc::UnboundedReceiver<FlowResponse>,

    upload_flow: FlowTracker,
    ask_flow: FlowTracker,
    collections_flow: FlowTracker,
    zotero_flow: FlowTracker,

    /// Collection fetches supersede each other, so keep a handle to abort
    collections_task: Option<AbortHandle>,
}

impl Controller {
    pub fn new(service: Arc<dyn DocumentService>, page: PageModel) -> Self {
        let (response_tx, response_rx) = mpsc::unbounded_channel();

        Self {
            page,
            service,
            response_tx,
            response_rx,
            upload_flow: FlowTracker::new(),
            ask_flow: FlowTracker::new(),
            collections_flow: FlowTracker::new(),
            zotero_flow: FlowTracker::new(),
            collections_task: None,
        }
    }

    /// Whether a request for `flow` is awaiting its response
    pub fn is_busy(&self, flow: Flow) -> bool {
        match flow {
            Flow::Upload => self.upload_flow.is_busy(),
            Flow::Ask => self.ask_flow.is_busy(),
            Flow::Collections => self.collections_flow.is_busy(),
            Flow::ZoteroAdd => self.zotero_flow.is_busy(),
        }
    }

    // ============================================
    // FILE SELECTION
    // ============================================

    /// File input `change`: keep the first file, or clear the label
    pub fn select_files(&mut self, files: Vec<SelectedFile>) {
        let first = files.into_iter().next();
        self.page.upload.file_label = first
            .as_ref()
            .map(|f| f.name.clone())
            .unwrap_or_default();
        debug!(file = ?first.as_ref().map(|f| &f.path), "File input changed");
        self.page.upload.selected_file = first;
    }

    /// Drop zone `drop`: the dropped list replaces the input's files
    ///
    /// The label is only rewritten when the drop carried a file.
    pub fn drop_files(&mut self, files: Vec<SelectedFile>) {
        let first = files.into_iter().next();
        if let Some(file) = &first {
            self.page.upload.file_label = file.name.clone();
            self.page
                .upload
                .file_input
                .set_value(&file.path.display().to_string());
        }
        debug!(file = ?first.as_ref().map(|f| &f.path), "Files dropped");
        self.page.upload.selected_file = first;
    }

    pub fn set_drop_highlight(&mut self, highlighted: bool) {
        self.page.upload.drop_highlighted = highlighted;
    }

    // ============================================
    // RESPONSES
    // ============================================

    /// Run a flow's request on its own task, reporting back on the channel
    fn spawn_flow<F>(&self, request: F) -> AbortHandle
    where
        F: Future<Output = FlowResponse> + Send + 'static,
    {
        let response_tx = self.response_tx.clone();
        tokio::spawn(async move {
            let _ = response_tx.send(request.await);
        })
        .abort_handle()
    }

    fn service(&self) -> Arc<dyn DocumentService> {
        Arc::clone(&self.service)
    }

    /// Apply every response that has arrived so far (non-blocking)
    pub fn drain_responses(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(response) = self.response_rx.try_recv() {
            self.handle_response(response);
            applied += 1;
        }
        applied
    }

    /// Wait for the next response and apply it
    pub async fn process_next(&mut self) -> Option<Flow> {
        let response = self.response_rx.recv().await?;
        let flow = response.flow();
        self.handle_response(response);
        Some(flow)
    }
}
