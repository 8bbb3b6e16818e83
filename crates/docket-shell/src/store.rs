//! JSON-file-backed storage for persisted form fields.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use docket_common::errors::ShellError;
use docket_common::types::{FieldKey, PageKey};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// On-disk shape of the store file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    saved_at: Option<String>,
    #[serde(default)]
    fields: HashMap<String, String>,
}

/// Write-through store for `[data-persist]` field values.
///
/// Keys follow the pattern `page:<pageKey>:<fieldId>`. The file is read
/// once at construction; a missing or unreadable file starts the store
/// empty. Every set rewrites the whole file, which stays trivially small
/// for a four-page shell.
#[derive(Debug)]
pub struct FieldStore {
    path: PathBuf,
    fields: HashMap<String, String>,
}

impl FieldStore {
    /// Load the store from `path`, tolerating a missing or corrupt file.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let fields = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<StoreFile>(&raw) {
                Ok(file) => file.fields,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "field store unreadable; starting empty");
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };
        debug!(path = %path.display(), count = fields.len(), "field store loaded");
        Self { path, fields }
    }

    /// Store a value and write the file through.
    pub fn set(&mut self, key: &FieldKey, value: impl Into<String>) -> Result<(), ShellError> {
        self.fields.insert(key.storage_key(), value.into());
        self.persist()
    }

    /// Look up a single stored value.
    pub fn get(&self, key: &FieldKey) -> Option<&str> {
        self.fields.get(&key.storage_key()).map(String::as_str)
    }

    /// All stored `fieldId -> value` pairs for one page, for restoring
    /// after a swap. Sorted by field id so output is deterministic.
    pub fn page_fields(&self, page: PageKey) -> Vec<(String, String)> {
        let prefix = format!("page:{}:", page.as_str());
        let mut entries: Vec<(String, String)> = self
            .fields
            .iter()
            .filter_map(|(key, value)| {
                key.strip_prefix(&prefix)
                    .map(|field| (field.to_string(), value.clone()))
            })
            .collect();
        entries.sort();
        entries
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), ShellError> {
        let file = StoreFile {
            saved_at: Some(Utc::now().to_rfc3339()),
            fields: self.fields.clone(),
        };
        let json =
            serde_json::to_string_pretty(&file).map_err(|e| ShellError::Store(e.to_string()))?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| ShellError::Store(e.to_string()))?;
        }
        fs::write(&self.path, json).map_err(|e| ShellError::Store(e.to_string()))
    }
}
