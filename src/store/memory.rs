//! In-process document store. Keeps insertion order per collection; can simulate an outage.

use super::{Collection, Document, DocumentId, DocumentStore};
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<Collection, Vec<Document>>>,
    unreachable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// While set, every call fails with a store error.
    pub fn set_unreachable(&self, unreachable: bool) {
        self.unreachable.store(unreachable, Ordering::SeqCst);
    }

    fn check_reachable(&self) -> Result<(), AppError> {
        if self.unreachable.load(Ordering::SeqCst) {
            return Err(AppError::Store("connection refused".into()));
        }
        Ok(())
    }

    fn poisoned() -> AppError {
        AppError::Store("memory store lock poisoned".into())
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find(
        &self,
        collection: Collection,
        filter: &Map<String, Value>,
        limit: Option<u32>,
    ) -> Result<Vec<Document>, AppError> {
        self.check_reachable()?;
        let guard = self.collections.read().map_err(|_| Self::poisoned())?;
        let take = limit.map(|n| n as usize).unwrap_or(usize::MAX);
        Ok(guard
            .get(&collection)
            .map(|docs| docs.iter().filter(|d| d.matches(filter)).take(take).cloned().collect())
            .unwrap_or_default())
    }

    async fn insert(&self, collection: Collection, fields: Map<String, Value>) -> Result<DocumentId, AppError> {
        self.check_reachable()?;
        let id = DocumentId::new();
        let mut guard = self.collections.write().map_err(|_| Self::poisoned())?;
        guard.entry(collection).or_default().push(Document { id: Some(id), fields });
        Ok(id)
    }

    async fn count(&self, collection: Collection, filter: &Map<String, Value>) -> Result<u64, AppError> {
        self.check_reachable()?;
        let guard = self.collections.read().map_err(|_| Self::poisoned())?;
        let n = guard
            .get(&collection)
            .map(|docs| docs.iter().filter(|d| d.matches(filter)).count())
            .unwrap_or(0);
        Ok(n as u64)
    }

    fn name(&self) -> Result<String, AppError> {
        self.check_reachable()?;
        Ok("memory".into())
    }

    async fn list_collection_names(&self, limit: u32) -> Result<Vec<String>, AppError> {
        self.check_reachable()?;
        let guard = self.collections.read().map_err(|_| Self::poisoned())?;
        let mut names: Vec<String> = guard.keys().map(|c| c.name().to_string()).collect();
        names.sort();
        names.truncate(limit as usize);
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(v: Value) -> Map<String, Value> {
        v.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn find_respects_insertion_order_and_limit() {
        let store = MemoryStore::new();
        for name in ["a", "b", "c"] {
            store.insert(Collection::Member, fields(json!({ "name": name }))).await.unwrap();
        }
        let all = store.find(Collection::Member, &Map::new(), None).await.unwrap();
        let names: Vec<&Value> = all.iter().map(|d| &d.fields["name"]).collect();
        assert_eq!(names, [&json!("a"), &json!("b"), &json!("c")]);

        let one = store.find(Collection::Member, &Map::new(), Some(1)).await.unwrap();
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].fields["name"], json!("a"));
    }

    #[tokio::test]
    async fn ids_are_unique() {
        let store = MemoryStore::new();
        let a = store.insert(Collection::Team, Map::new()).await.unwrap();
        let b = store.insert(Collection::Team, Map::new()).await.unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn count_uses_filter() {
        let store = MemoryStore::new();
        store.insert(Collection::Project, fields(json!({"title": "x"}))).await.unwrap();
        store.insert(Collection::Project, fields(json!({"title": "y"}))).await.unwrap();
        assert_eq!(store.count(Collection::Project, &Map::new()).await.unwrap(), 2);
        assert_eq!(store.count(Collection::Project, &fields(json!({"title": "y"}))).await.unwrap(), 1);
        assert_eq!(store.count(Collection::Team, &Map::new()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn unreachable_fails_every_call() {
        let store = MemoryStore::new();
        store.set_unreachable(true);
        assert!(store.name().is_err());
        assert!(store.count(Collection::Team, &Map::new()).await.is_err());
        assert!(store.insert(Collection::Team, Map::new()).await.is_err());
        store.set_unreachable(false);
        assert_eq!(store.name().unwrap(), "memory");
    }
}
