use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{multipart, Client, Response};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// A file the user picked or dropped, waiting to be uploaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub name: String,
}

impl SelectedFile {
    /// Build from a path, using the final path component as the display name
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, name }
    }

    /// Resolve a path to a file list the way a file input would: zero or one entries
    pub fn resolve(path: &Path) -> Vec<SelectedFile> {
        match std::fs::metadata(path) {
            Ok(meta) if meta.is_file() => vec![SelectedFile::from_path(path)],
            _ => Vec::new(),
        }
    }

    fn mime_type(&self) -> &'static str {
        let is_pdf = self
            .path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("pdf"))
            .unwrap_or(false);
        if is_pdf {
            "application/pdf"
        } else {
            "application/octet-stream"
        }
    }
}

/// JSON body shared by `/upload`, `/ask` and `/zotero/add`
///
/// Each endpoint only fills the fields it uses; missing fields read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReplyBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// A parsed server reply: HTTP outcome plus JSON body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub ok: bool,
    pub status: u16,
    pub body: ReplyBody,
}

impl Reply {
    pub fn success(body: ReplyBody) -> Self {
        Self { ok: true, status: 200, body }
    }

    pub fn failure(status: u16, error: impl Into<String>) -> Self {
        Self {
            ok: false,
            status,
            body: ReplyBody {
                error: Some(error.into()),
                ..Default::default()
            },
        }
    }

    pub fn message(&self) -> &str {
        self.body.message.as_deref().unwrap_or_default()
    }

    pub fn answer(&self) -> &str {
        self.body.answer.as_deref().unwrap_or_default()
    }

    pub fn error(&self) -> &str {
        self.body.error.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CollectionData {
    pub name: String,
}

/// One entry of the `/zotero/collections` array
#[derive(Debug, Clone, Deserialize)]
pub struct ZoteroCollection {
    pub key: String,
    pub data: CollectionData,
}

/// Item metadata gathered from the Zotero form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemMetadata {
    pub title: String,
    pub authors: Vec<String>,
    pub year: String,
    pub doi: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoteroAddRequest {
    pub metadata: ItemMetadata,
    pub collection_key: Option<String>,
}

#[derive(Debug, Serialize)]
struct AskRequest<'a> {
    question: &'a str,
}

/// The remote document Q&A service
///
/// `Err` means the request never produced a parseable reply (transport or
/// JSON failure). A non-2xx reply with a JSON body is `Ok` with `ok == false`.
#[async_trait]
pub trait DocumentService: Send + Sync {
    async fn upload(&self, file: &SelectedFile) -> Result<Reply>;

    async fn ask(&self, question: &str) -> Result<Reply>;

    /// Raw JSON so the caller can tell an array from anything else
    async fn list_collections(&self) -> Result<serde_json::Value>;

    async fn add_to_zotero(&self, request: &ZoteroAddRequest) -> Result<Reply>;
}

#[derive(Clone)]
pub struct DocQaClient {
    base_url: String,
    client: Client,
}

impl DocQaClient {
    pub fn new(base_url: String, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read_reply(response: Response) -> Result<Reply> {
        let status = response.status();
        let body: ReplyBody = response
            .json()
            .await
            .context("Failed to parse response body")?;

        Ok(Reply {
            ok: status.is_success(),
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl DocumentService for DocQaClient {
    async fn upload(&self, file: &SelectedFile) -> Result<Reply> {
        let bytes = tokio::fs::read(&file.path)
            .await
            .with_context(|| format!("Failed to read {}", file.path.display()))?;

        let part = multipart::Part::bytes(bytes)
            .file_name(file.name.clone())
            .mime_str(file.mime_type())?;
        let form = multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(self.url("/upload"))
            .multipart(form)
            .send()
            .await
            .context("Failed to send upload request")?;

        Self::read_reply(response).await
    }

    async fn ask(&self, question: &str) -> Result<Reply> {
        let response = self
            .client
            .post(self.url("/ask"))
            .json(&AskRequest { question })
            .send()
            .await
            .context("Failed to send question")?;

        Self::read_reply(response).await
    }

    async fn list_collections(&self) -> Result<serde_json::Value> {
        let response = self
            .client
            .get(self.url("/zotero/collections"))
            .send()
            .await
            .context("Failed to fetch Zotero collections")?;

        let value = response
            .json()
            .await
            .context("Failed to parse Zotero collections")?;

        Ok(value)
    }

    async fn add_to_zotero(&self, request: &ZoteroAddRequest) -> Result<Reply> {
        let response = self
            .client
            .post(self.url("/zotero/add"))
            .json(request)
            .send()
            .await
            .context("Failed to send Zotero item")?;

        Self::read_reply(response).await
    }
}

/// Parse a collections payload
///
/// `None` when the payload is not an array at all; `Some(Err)` when it is an
/// array but an entry lacks `key` or `data.name`.
pub fn parse_collections(
    value: &serde_json::Value,
) -> Option<serde_json::Result<Vec<ZoteroCollection>>> {
    value.as_array()?;
    Some(serde_json::from_value(value.clone()))
}
