//! Document store seam: collections, native identifiers, and the find/insert/count primitives.

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::{ensure_database_exists, PgDocumentStore};

use crate::error::AppError;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::fmt;
use uuid::Uuid;

/// Field name a raw document may carry for its store identifier.
pub const INTERNAL_ID_FIELD: &str = "_id";

/// Logical entity kinds and the physical collection each one lives in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Collection {
    Team,
    Member,
    Project,
    User,
    Product,
}

impl Collection {
    pub const ALL: [Collection; 5] = [
        Collection::Team,
        Collection::Member,
        Collection::Project,
        Collection::User,
        Collection::Product,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Collection::Team => "team",
            Collection::Member => "member",
            Collection::Project => "project",
            Collection::User => "user",
            Collection::Product => "product",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Store-assigned identifier. Not `Serialize`: only its string form goes on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DocumentId(Uuid);

impl DocumentId {
    pub fn new() -> Self {
        DocumentId(Uuid::new_v4())
    }

    pub fn from_uuid(id: Uuid) -> Self {
        DocumentId(id)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// A raw stored document: its identifier plus the field mapping.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    pub id: Option<DocumentId>,
    pub fields: Map<String, Value>,
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.fields.is_empty()
    }

    /// Top-level containment: every filter key is present with an equal value.
    pub fn matches(&self, filter: &Map<String, Value>) -> bool {
        filter.iter().all(|(k, v)| self.fields.get(k) == Some(v))
    }
}

/// The three data primitives plus the two introspection calls diagnostics need.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Documents in insertion order; `limit` of `None` means unlimited.
    async fn find(
        &self,
        collection: Collection,
        filter: &Map<String, Value>,
        limit: Option<u32>,
    ) -> Result<Vec<Document>, AppError>;

    async fn insert(&self, collection: Collection, fields: Map<String, Value>) -> Result<DocumentId, AppError>;

    async fn count(&self, collection: Collection, filter: &Map<String, Value>) -> Result<u64, AppError>;

    /// Name of the underlying database.
    fn name(&self) -> Result<String, AppError>;

    async fn list_collection_names(&self, limit: u32) -> Result<Vec<String>, AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn collection_names_are_explicit() {
        let names: Vec<&str> = Collection::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(names, ["team", "member", "project", "user", "product"]);
    }

    #[test]
    fn empty_filter_matches_everything() {
        let doc = Document {
            id: Some(DocumentId::new()),
            fields: json!({"name": "Alex"}).as_object().cloned().unwrap(),
        };
        assert!(doc.matches(&Map::new()));
        assert!(doc.matches(json!({"name": "Alex"}).as_object().unwrap()));
        assert!(!doc.matches(json!({"name": "Sam"}).as_object().unwrap()));
    }

    #[test]
    fn id_displays_as_hyphenated_uuid() {
        let uuid = Uuid::new_v4();
        assert_eq!(DocumentId::from_uuid(uuid).to_string(), uuid.to_string());
    }
}
