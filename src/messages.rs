//! Flow response messages
//!
//! Every network call runs on its own task and reports back with one of
//! these. The generation identifies which activation of the flow produced it,
//! so the controller can drop responses that a newer activation superseded.

use crate::api::Reply;

#[derive(Debug)]
pub enum FlowResponse {
    Upload {
        generation: u64,
        result: anyhow::Result<Reply>,
    },

    Ask {
        generation: u64,
        result: anyhow::Result<Reply>,
    },

    Collections {
        generation: u64,
        result: anyhow::Result<serde_json::Value>,
    },

    ZoteroAdd {
        generation: u64,
        result: anyhow::Result<Reply>,
    },
}

impl FlowResponse {
    pub fn flow(&self) -> Flow {
        match self {
            FlowResponse::Upload { .. } => Flow::Upload,
            FlowResponse::Ask { .. } => Flow::Ask,
            FlowResponse::Collections { .. } => Flow::Collections,
            FlowResponse::ZoteroAdd { .. } => Flow::ZoteroAdd,
        }
    }

    pub fn generation(&self) -> u64 {
        match self {
            FlowResponse::Upload { generation, .. }
            | FlowResponse::Ask { generation, .. }
            | FlowResponse::Collections { generation, .. }
            | FlowResponse::ZoteroAdd { generation, .. } => *generation,
        }
    }
}

/// The four request/response cycles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flow {
    Upload,
    Ask,
    Collections,
    ZoteroAdd,
}

impl Flow {
    pub fn as_str(&self) -> &str {
        match self {
            Flow::Upload => "upload",
            Flow::Ask => "ask",
            Flow::Collections => "collections",
            Flow::ZoteroAdd => "zotero-add",
        }
    }
}
