//! Local JSON Document Store Adapter - Implementation of DocumentStore.
//!
//! Stores interview artifacts as pretty-printed JSON files in a single
//! sandboxed output directory. Uses atomic writes and per-file locking so
//! concurrent read-modify-write appends cannot interleave.
//!
//! # Sanitization
//!
//! Every operation resolves the caller-supplied name before touching disk:
//!
//! 1. Trim surrounding whitespace; a blank name is rejected
//! 2. Reject names containing `/` or `\`
//! 3. Append `.json` unless the name already ends with it
//! 4. Join onto the sandbox root and verify the result stays inside it
//!
//! # Atomic Writes
//!
//! Uses a write-to-temp-then-rename pattern:
//! 1. Write content to `{name}.tmp`
//! 2. Sync to disk
//! 3. Rename to `{name}`
//!
//! This prevents partial files if the process crashes during write.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::ports::{AppendOutcome, DocumentStore, DocumentStoreError, ReadOutcome};

/// Local filesystem storage for interview JSON documents.
#[derive(Debug, Clone)]
pub struct LocalJsonDocumentStore {
    /// Sandbox root; every document lives directly under it.
    root: PathBuf,

    /// One async mutex per canonical file name, created lazily.
    write_locks: Arc<Mutex<HashMap<String, Arc<Mutex<()>>>>>,
}

impl LocalJsonDocumentStore {
    /// Creates the store, establishing the sandbox root on disk.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentStoreError::Io`] if the root cannot be created or
    /// resolved.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, DocumentStoreError> {
        let root = root.into();
        std::fs::create_dir_all(&root).map_err(|e| {
            DocumentStoreError::Io(format!(
                "failed to create output directory {}: {}",
                root.display(),
                e
            ))
        })?;
        let root = root.canonicalize().map_err(|e| {
            DocumentStoreError::Io(format!(
                "failed to resolve output directory {}: {}",
                root.display(),
                e
            ))
        })?;

        Ok(Self {
            root,
            write_locks: Arc::new(Mutex::new(HashMap::new())),
        })
    }

    /// Returns the sandbox root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Sanitizes a caller-supplied name and resolves it inside the sandbox.
    fn resolve(&self, file_name: &str) -> Result<(String, PathBuf), DocumentStoreError> {
        let trimmed = file_name.trim();
        if trimmed.is_empty() {
            return Err(DocumentStoreError::EmptyFileName);
        }
        if trimmed.contains('/') || trimmed.contains('\\') {
            return Err(DocumentStoreError::SeparatorInFileName);
        }

        let sanitized = if trimmed.ends_with(".json") {
            trimmed.to_string()
        } else {
            format!("{}.json", trimmed)
        };

        let path = self.root.join(&sanitized);
        if !path.starts_with(&self.root) {
            return Err(DocumentStoreError::PathEscape);
        }

        Ok((sanitized, path))
    }

    /// Returns the write lock for a canonical file name.
    async fn lock_for(&self, file_name: &str) -> Arc<Mutex<()>> {
        let mut locks = self.write_locks.lock().await;
        locks
            .entry(file_name.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Serializes `content` and writes it to `path` atomically.
    async fn persist(
        &self,
        file_name: &str,
        path: &Path,
        content: &Value,
    ) -> Result<(), DocumentStoreError> {
        let serialized = serde_json::to_string_pretty(content)
            .map_err(|e| DocumentStoreError::Serialization(e.to_string()))?;

        let temp_path = self.root.join(format!("{}.tmp", file_name));

        let mut file = fs::File::create(&temp_path).await.map_err(|e| {
            DocumentStoreError::Io(format!(
                "failed to create temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        file.write_all(serialized.as_bytes()).await.map_err(|e| {
            DocumentStoreError::Io(format!(
                "failed to write temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        file.sync_all().await.map_err(|e| {
            DocumentStoreError::Io(format!(
                "failed to sync temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        fs::rename(&temp_path, path).await.map_err(|e| {
            DocumentStoreError::Io(format!(
                "failed to rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Reads and parses the document at `path`, if it exists.
    async fn load(
        &self,
        file_name: &str,
        path: &Path,
    ) -> Result<Option<Value>, DocumentStoreError> {
        match fs::read_to_string(path).await {
            Ok(raw) => {
                let value =
                    serde_json::from_str(&raw).map_err(|e| DocumentStoreError::Corruption {
                        file_name: file_name.to_string(),
                        detail: e.to_string(),
                    })?;
                Ok(Some(value))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DocumentStoreError::Io(format!(
                "failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

#[async_trait]
impl DocumentStore for LocalJsonDocumentStore {
    async fn read(&self, file_name: &str) -> Result<ReadOutcome, DocumentStoreError> {
        let (name, path) = self.resolve(file_name)?;

        match self.load(&name, &path).await? {
            Some(value) => Ok(ReadOutcome::Found {
                file_name: name,
                value,
            }),
            None => Ok(ReadOutcome::Missing { file_name: name }),
        }
    }

    async fn write(&self, file_name: &str, content: &Value) -> Result<String, DocumentStoreError> {
        let (name, path) = self.resolve(file_name)?;

        let lock = self.lock_for(&name).await;
        let _guard = lock.lock().await;

        self.persist(&name, &path, content).await?;
        Ok(name)
    }

    async fn append(
        &self,
        file_name: &str,
        content: &Value,
    ) -> Result<AppendOutcome, DocumentStoreError> {
        let (name, path) = self.resolve(file_name)?;

        let lock = self.lock_for(&name).await;
        let _guard = lock.lock().await;

        match self.load(&name, &path).await? {
            None => {
                // Missing file: append degrades to a plain write, not a
                // one-element array.
                self.persist(&name, &path, content).await?;
                Ok(AppendOutcome {
                    file_name: name,
                    created: true,
                })
            }
            Some(Value::Array(mut items)) => {
                items.push(content.clone());
                self.persist(&name, &path, &Value::Array(items)).await?;
                Ok(AppendOutcome {
                    file_name: name,
                    created: false,
                })
            }
            Some(existing) => {
                let merged = Value::Array(vec![existing, content.clone()]);
                self.persist(&name, &path, &merged).await?;
                Ok(AppendOutcome {
                    file_name: name,
                    created: false,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn store() -> (TempDir, LocalJsonDocumentStore) {
        let dir = TempDir::new().unwrap();
        let store = LocalJsonDocumentStore::new(dir.path()).unwrap();
        (dir, store)
    }

    fn entries(dir: &TempDir) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    // ─────────────────────────────────────────────────────────────────────
    // Name sanitization
    // ─────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn write_appends_json_suffix_and_trims() {
        let (_dir, store) = store();

        let name = store.write("  session notes ", &json!({"a": 1})).await.unwrap();
        assert_eq!(name, "session notes.json");
    }

    #[tokio::test]
    async fn existing_json_suffix_is_not_doubled() {
        let (_dir, store) = store();

        let name = store.write("notes.json", &json!(1)).await.unwrap();
        assert_eq!(name, "notes.json");
    }

    #[tokio::test]
    async fn blank_name_is_rejected_for_all_operations() {
        let (dir, store) = store();

        for result in [
            store.read("   ").await.err(),
            store.write("", &json!(1)).await.err(),
            store.append("  ", &json!(1)).await.err(),
        ] {
            let err = result.unwrap();
            assert!(matches!(err, DocumentStoreError::EmptyFileName));
        }
        assert!(entries(&dir).is_empty());
    }

    #[tokio::test]
    async fn separators_are_rejected_for_all_operations() {
        let (dir, store) = store();

        for name in ["../escape", "nested/name", "windows\\name"] {
            let err = store.write(name, &json!(1)).await.unwrap_err();
            assert!(matches!(err, DocumentStoreError::SeparatorInFileName));
            assert!(err.is_invalid_name());
        }
        assert!(entries(&dir).is_empty());
    }

    // ─────────────────────────────────────────────────────────────────────
    // Read / write
    // ─────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn read_missing_returns_missing_sentinel() {
        let (_dir, store) = store();

        let outcome = store.read("never-written").await.unwrap();
        assert_eq!(
            outcome,
            ReadOutcome::Missing {
                file_name: "never-written.json".to_string()
            }
        );
    }

    #[tokio::test]
    async fn written_value_reads_back_unchanged() {
        let (_dir, store) = store();
        let value = json!({ "participants": ["ana", "li"], "count": 2 });

        store.write("roster", &value).await.unwrap();

        match store.read("roster").await.unwrap() {
            ReadOutcome::Found { file_name, value: stored } => {
                assert_eq!(file_name, "roster.json");
                assert_eq!(stored, value);
            }
            other => panic!("expected Found, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn write_overwrites_previous_content() {
        let (_dir, store) = store();

        store.write("doc", &json!({"v": 1})).await.unwrap();
        store.write("doc", &json!({"v": 2})).await.unwrap();

        match store.read("doc").await.unwrap() {
            ReadOutcome::Found { value, .. } => assert_eq!(value, json!({"v": 2})),
            other => panic!("expected Found, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn files_are_stored_pretty_printed() {
        let (dir, store) = store();

        store.write("pretty", &json!({"key": "value"})).await.unwrap();

        let raw = std::fs::read_to_string(dir.path().join("pretty.json")).unwrap();
        assert!(raw.contains("\n  \"key\": \"value\""));
    }

    #[tokio::test]
    async fn no_temp_files_remain_after_write() {
        let (dir, store) = store();

        store.write("clean", &json!([1, 2, 3])).await.unwrap();
        assert_eq!(entries(&dir), vec!["clean.json".to_string()]);
    }

    #[tokio::test]
    async fn corrupt_file_surfaces_corruption_error() {
        let (dir, store) = store();
        std::fs::write(dir.path().join("broken.json"), "{ not json").unwrap();

        let err = store.read("broken").await.unwrap_err();
        assert!(matches!(
            err,
            DocumentStoreError::Corruption { ref file_name, .. } if file_name == "broken.json"
        ));

        let err = store.append("broken", &json!(1)).await.unwrap_err();
        assert!(matches!(err, DocumentStoreError::Corruption { .. }));
    }

    // ─────────────────────────────────────────────────────────────────────
    // Append merge rules
    // ─────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn append_to_missing_file_stores_value_as_is() {
        let (_dir, store) = store();
        let value = json!({ "note": "first" });

        let outcome = store.append("log", &value).await.unwrap();
        assert!(outcome.created);

        // Stored as the bare value, not a one-element array.
        match store.read("log").await.unwrap() {
            ReadOutcome::Found { value: stored, .. } => assert_eq!(stored, value),
            other => panic!("expected Found, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn append_to_array_pushes_element() {
        let (_dir, store) = store();
        store.write("log", &json!([{"n": 1}])).await.unwrap();

        let outcome = store.append("log", &json!({"n": 2})).await.unwrap();
        assert!(!outcome.created);

        match store.read("log").await.unwrap() {
            ReadOutcome::Found { value, .. } => {
                assert_eq!(value, json!([{"n": 1}, {"n": 2}]));
            }
            other => panic!("expected Found, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn append_to_non_array_wraps_both_values() {
        let (_dir, store) = store();
        store.write("doc", &json!({"original": true})).await.unwrap();

        store.append("doc", &json!({"added": true})).await.unwrap();

        match store.read("doc").await.unwrap() {
            ReadOutcome::Found { value, .. } => {
                assert_eq!(value, json!([{"original": true}, {"added": true}]));
            }
            other => panic!("expected Found, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn repeated_appends_accumulate_in_order() {
        let (_dir, store) = store();

        store.append("journal", &json!("a")).await.unwrap();
        store.append("journal", &json!("b")).await.unwrap();
        store.append("journal", &json!("c")).await.unwrap();

        // First append wrote "a" bare; the second wrapped, the third pushed.
        match store.read("journal").await.unwrap() {
            ReadOutcome::Found { value, .. } => assert_eq!(value, json!(["a", "b", "c"])),
            other => panic!("expected Found, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn concurrent_appends_do_not_lose_elements() {
        let (_dir, store) = store();
        store.write("shared", &json!([])).await.unwrap();

        let tasks: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.append("shared", &json!(i)).await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        match store.read("shared").await.unwrap() {
            ReadOutcome::Found { value, .. } => {
                assert_eq!(value.as_array().unwrap().len(), 8);
            }
            other => panic!("expected Found, got {:?}", other),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Sanitization properties
    // ─────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn safe_names_resolve_inside_root(name in "[a-zA-Z0-9 ._-]{1,32}") {
            prop_assume!(!name.trim().is_empty());

            let dir = TempDir::new().unwrap();
            let store = LocalJsonDocumentStore::new(dir.path()).unwrap();

            let (sanitized, path) = store.resolve(&name).unwrap();
            prop_assert!(sanitized.ends_with(".json"));
            prop_assert!(path.starts_with(store.root()));
            prop_assert_eq!(path.parent().unwrap(), store.root());
        }

        #[test]
        fn names_with_separators_never_resolve(
            prefix in "[a-zA-Z0-9]{0,8}",
            separator in prop::sample::select(vec!['/', '\\']),
            suffix in "[a-zA-Z0-9]{0,8}",
        ) {
            let dir = TempDir::new().unwrap();
            let store = LocalJsonDocumentStore::new(dir.path()).unwrap();

            let name = format!("{}{}{}", prefix, separator, suffix);
            let err = store.resolve(&name).unwrap_err();
            prop_assert!(err.is_invalid_name());
        }
    }
}
