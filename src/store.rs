//! Document-store gateway over a SQLite workspace file.
//!
//! The admin surface addresses records by hierarchical paths
//! (`schoolData/2025-2026/kelas-iii/teacherProfile`). They are stored in a
//! single `documents` table keyed by (parent, doc_id), with the JSON payload
//! as text. Collection order is insertion order (rowid); upserts keep the
//! original rowid so the order survives edits.

use std::path::Path;

use rusqlite::{Connection, OptionalExtension};
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

/// The only two failure kinds callers distinguish: a missing target for an
/// update/delete, and everything else (storage unreachable or corrupt).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document not found: {0}")]
    NotFound(String),
    #[error("store failure: {0}")]
    Transport(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        StoreError::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Transport(e.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    Replace,
    Merge,
}

#[derive(Debug, Clone)]
pub struct Document {
    pub id: String,
    pub data: Value,
}

#[derive(Debug, Clone)]
pub enum BatchOp {
    Put { path: String, data: Value },
    Delete { path: String },
}

pub struct Store {
    conn: Connection,
}

pub fn open_store(workspace: &Path) -> anyhow::Result<Store> {
    std::fs::create_dir_all(workspace)?;
    let db_path = workspace.join("sekolah.sqlite3");
    let conn = Connection::open(db_path)?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS documents(
            parent TEXT NOT NULL,
            doc_id TEXT NOT NULL,
            data TEXT NOT NULL,
            PRIMARY KEY(parent, doc_id)
        )",
        [],
    )?;
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_documents_parent ON documents(parent)",
        [],
    )?;

    Ok(Store { conn })
}

/// "a/b/c" -> ("a/b", "c"). Every addressable path has at least two
/// segments; a bare segment is a programming error surfaced as Transport.
fn split_path(path: &str) -> Result<(&str, &str), StoreError> {
    path.rsplit_once('/')
        .filter(|(parent, id)| !parent.is_empty() && !id.is_empty())
        .ok_or_else(|| StoreError::Transport(format!("malformed document path: {path}")))
}

/// Shallow field merge: every top-level key of `patch` overwrites or adds;
/// untouched stored fields stay as they are.
fn merge_fields(base: &mut Value, patch: &Value) {
    match (base.as_object_mut(), patch.as_object()) {
        (Some(obj), Some(p)) => {
            for (k, v) in p {
                obj.insert(k.clone(), v.clone());
            }
        }
        _ => *base = patch.clone(),
    }
}

impl Store {
    pub fn read_doc(&self, path: &str) -> Result<Option<Value>, StoreError> {
        let (parent, doc_id) = split_path(path)?;
        let raw: Option<String> = self
            .conn
            .query_row(
                "SELECT data FROM documents WHERE parent = ? AND doc_id = ?",
                (parent, doc_id),
                |row| row.get(0),
            )
            .optional()?;
        match raw {
            Some(s) => Ok(Some(serde_json::from_str(&s)?)),
            None => Ok(None),
        }
    }

    pub fn write_doc(&self, path: &str, data: &Value, mode: WriteMode) -> Result<(), StoreError> {
        match mode {
            WriteMode::Replace => {
                let (parent, doc_id) = split_path(path)?;
                upsert(&self.conn, parent, doc_id, data)?;
                Ok(())
            }
            WriteMode::Merge => {
                let (parent, doc_id) = split_path(path)?;
                let tx = self.conn.unchecked_transaction()?;
                let existing: Option<String> = tx
                    .query_row(
                        "SELECT data FROM documents WHERE parent = ? AND doc_id = ?",
                        (parent, doc_id),
                        |row| row.get(0),
                    )
                    .optional()?;
                let merged = match existing {
                    Some(s) => {
                        let mut current: Value = serde_json::from_str(&s)?;
                        merge_fields(&mut current, data);
                        current
                    }
                    // Merge onto nothing creates the doc, as a Firestore
                    // set-with-merge does.
                    None => data.clone(),
                };
                upsert(&tx, parent, doc_id, &merged)?;
                tx.commit()?;
                Ok(())
            }
        }
    }

    pub fn read_collection(&self, parent: &str) -> Result<Vec<Document>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT doc_id, data FROM documents WHERE parent = ? ORDER BY rowid",
        )?;
        let docs = stmt
            .query_map([parent], |row| {
                let id: String = row.get(0)?;
                let raw: String = row.get(1)?;
                Ok((id, raw))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut out = Vec::with_capacity(docs.len());
        for (id, raw) in docs {
            out.push(Document {
                id,
                data: serde_json::from_str(&raw)?,
            });
        }
        Ok(out)
    }

    /// Create a doc under `parent` with a store-assigned id.
    pub fn add_doc(&self, parent: &str, data: &Value) -> Result<String, StoreError> {
        let id = Uuid::new_v4().to_string();
        self.conn.execute(
            "INSERT INTO documents(parent, doc_id, data) VALUES(?, ?, ?)",
            (parent, &id, serde_json::to_string(data)?),
        )?;
        Ok(id)
    }

    /// Shallow-merge `patch` into an existing doc; NotFound if absent.
    pub fn update_doc(&self, path: &str, patch: &Value) -> Result<(), StoreError> {
        let (parent, doc_id) = split_path(path)?;
        let tx = self.conn.unchecked_transaction()?;
        let existing: Option<String> = tx
            .query_row(
                "SELECT data FROM documents WHERE parent = ? AND doc_id = ?",
                (parent, doc_id),
                |row| row.get(0),
            )
            .optional()?;
        let Some(raw) = existing else {
            return Err(StoreError::NotFound(path.to_string()));
        };
        let mut current: Value = serde_json::from_str(&raw)?;
        merge_fields(&mut current, patch);
        tx.execute(
            "UPDATE documents SET data = ? WHERE parent = ? AND doc_id = ?",
            (serde_json::to_string(&current)?, parent, doc_id),
        )?;
        tx.commit()?;
        Ok(())
    }

    /// Idempotent at this layer; returns whether a row actually went away so
    /// callers that need NotFound semantics can impose them.
    pub fn delete_doc(&self, path: &str) -> Result<bool, StoreError> {
        let (parent, doc_id) = split_path(path)?;
        let n = self.conn.execute(
            "DELETE FROM documents WHERE parent = ? AND doc_id = ?",
            (parent, doc_id),
        )?;
        Ok(n > 0)
    }

    /// All-or-nothing write batch.
    pub fn batch(&self, ops: &[BatchOp]) -> Result<(), StoreError> {
        let tx = self.conn.unchecked_transaction()?;
        for op in ops {
            match op {
                BatchOp::Put { path, data } => {
                    let (parent, doc_id) = split_path(path)?;
                    upsert(&tx, parent, doc_id, data)?;
                }
                BatchOp::Delete { path } => {
                    let (parent, doc_id) = split_path(path)?;
                    tx.execute(
                        "DELETE FROM documents WHERE parent = ? AND doc_id = ?",
                        (parent, doc_id),
                    )?;
                }
            }
        }
        tx.commit()?;
        Ok(())
    }

    /// Read-or-seed in one transaction: returns the stored doc if present,
    /// otherwise persists `seed()` and returns it. First-access seeding is
    /// exactly-once even with two daemons on the same workspace.
    pub fn create_if_absent<F>(&self, path: &str, seed: F) -> Result<Value, StoreError>
    where
        F: FnOnce() -> Value,
    {
        let (parent, doc_id) = split_path(path)?;
        let tx = self.conn.unchecked_transaction()?;
        let existing: Option<String> = tx
            .query_row(
                "SELECT data FROM documents WHERE parent = ? AND doc_id = ?",
                (parent, doc_id),
                |row| row.get(0),
            )
            .optional()?;
        if let Some(raw) = existing {
            return Ok(serde_json::from_str(&raw)?);
        }
        let value = seed();
        tx.execute(
            "INSERT INTO documents(parent, doc_id, data) VALUES(?, ?, ?)",
            (parent, doc_id, serde_json::to_string(&value)?),
        )?;
        tx.commit()?;
        tracing::debug!(path, "seeded document on first read");
        Ok(value)
    }

    /// Collection analogue of `create_if_absent`: bulk-insert `docs` (with
    /// store-assigned ids, in order) only if the collection is empty, in one
    /// transaction. Returns whether seeding happened.
    pub fn seed_collection_if_empty(
        &self,
        parent: &str,
        docs: &[Value],
    ) -> Result<bool, StoreError> {
        let tx = self.conn.unchecked_transaction()?;
        let count: i64 = tx.query_row(
            "SELECT COUNT(*) FROM documents WHERE parent = ?",
            [parent],
            |row| row.get(0),
        )?;
        if count > 0 {
            return Ok(false);
        }
        for data in docs {
            tx.execute(
                "INSERT INTO documents(parent, doc_id, data) VALUES(?, ?, ?)",
                (parent, Uuid::new_v4().to_string(), serde_json::to_string(data)?),
            )?;
        }
        tx.commit()?;
        tracing::debug!(parent, rows = docs.len(), "seeded collection on first read");
        Ok(true)
    }
}

fn upsert(conn: &Connection, parent: &str, doc_id: &str, data: &Value) -> Result<(), StoreError> {
    conn.execute(
        "INSERT INTO documents(parent, doc_id, data) VALUES(?, ?, ?)
         ON CONFLICT(parent, doc_id) DO UPDATE SET data = excluded.data",
        (parent, doc_id, serde_json::to_string(data)?),
    )?;
    Ok(())
}
