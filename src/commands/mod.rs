//! # Command Layer
//!
//! The business logic of cellar, one operation per submodule. Commands
//! operate on domain types, return a structured [`CmdResult`], and make no
//! I/O assumptions: no stdout, no terminal concerns, no exit codes. The
//! CLI (or any other client) decides how to render what comes back.
//!
//! Validation lives here, in front of the store: a record with a missing
//! name or producer is rejected before it can reach storage.
//!
//! This is where the lion's share of testing lives; every submodule tests
//! its branches against [`crate::store::memory::MemBackend`].

use crate::config::CellarConfig;
use crate::model::Wine;
use serde::Serialize;

pub mod add;
pub mod clear;
pub mod config;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod search;
pub mod stats;
pub mod update;
pub mod view;

pub use stats::CollectionStats;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured output of a command: records to show, records that were
/// changed, and messages for the user. Clients render this however suits
/// them.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_wines: Vec<Wine>,
    pub listed_wines: Vec<Wine>,
    pub stats: Option<CollectionStats>,
    pub config: Option<CellarConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_wines(mut self, wines: Vec<Wine>) -> Self {
        self.listed_wines = wines;
        self
    }

    pub fn with_affected_wines(mut self, wines: Vec<Wine>) -> Self {
        self.affected_wines = wines;
        self
    }
}
