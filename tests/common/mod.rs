//! Shared test doubles
//!
//! `FakeService` answers each endpoint from a scripted queue and records
//! every call, so tests can assert both on page state and on what was sent.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde_json::Value;

use docqa::api::{DocumentService, Reply, ReplyBody, SelectedFile, ZoteroAddRequest};
use docqa::controller::Controller;
use docqa::handlers::BindingTable;
use docqa::model::PageModel;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Upload(SelectedFile),
    Ask(String),
    ListCollections,
    AddToZotero(ZoteroAddRequest),
}

#[derive(Default)]
pub struct FakeService {
    uploads: Mutex<VecDeque<Result<Reply>>>,
    answers: Mutex<VecDeque<Result<Reply>>>,
    collections: Mutex<VecDeque<Result<Value>>>,
    zotero_adds: Mutex<VecDeque<Result<Reply>>>,
    calls: Mutex<Vec<Call>>,
}

fn next<T>(queue: &Mutex<VecDeque<Result<T>>>, endpoint: &str) -> Result<T> {
    queue
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or_else(|| Err(anyhow!("no scripted reply for {}", endpoint)))
}

impl FakeService {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn script_upload(&self, reply: Result<Reply>) {
        self.uploads.lock().unwrap().push_back(reply);
    }

    pub fn script_ask(&self, reply: Result<Reply>) {
        self.answers.lock().unwrap().push_back(reply);
    }

    pub fn script_collections(&self, reply: Result<Value>) {
        self.collections.lock().unwrap().push_back(reply);
    }

    pub fn script_zotero_add(&self, reply: Result<Reply>) {
        self.zotero_adds.lock().unwrap().push_back(reply);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl DocumentService for FakeService {
    async fn upload(&self, file: &SelectedFile) -> Result<Reply> {
        self.calls.lock().unwrap().push(Call::Upload(file.clone()));
        next(&self.uploads, "/upload")
    }

    async fn ask(&self, question: &str) -> Result<Reply> {
        self.calls.lock().unwrap().push(Call::Ask(question.to_string()));
        next(&self.answers, "/ask")
    }

    async fn list_collections(&self) -> Result<Value> {
        self.calls.lock().unwrap().push(Call::ListCollections);
        next(&self.collections, "/zotero/collections")
    }

    async fn add_to_zotero(&self, request: &ZoteroAddRequest) -> Result<Reply> {
        self.calls.lock().unwrap().push(Call::AddToZotero(request.clone()));
        next(&self.zotero_adds, "/zotero/add")
    }
}

pub fn message(text: &str) -> Reply {
    Reply::success(ReplyBody {
        message: Some(text.to_string()),
        ..Default::default()
    })
}

pub fn answer(text: &str) -> Reply {
    Reply::success(ReplyBody {
        answer: Some(text.to_string()),
        ..Default::default()
    })
}

pub fn failure(status: u16, error: &str) -> Reply {
    Reply::failure(status, error)
}

pub fn controller(service: &Arc<FakeService>, zotero_enabled: bool) -> Controller {
    Controller::new(service.clone(), PageModel::new(zotero_enabled))
}

pub fn bindings(zotero_enabled: bool) -> BindingTable {
    BindingTable::page_defaults(zotero_enabled)
}

pub fn paper() -> SelectedFile {
    SelectedFile::from_path("/papers/medical-devices.pdf")
}
