//! Sample portfolio content and the idempotent seeding routine.
//!
//! Each collection is seeded only when empty. Inserts are not wrapped in a transaction:
//! a failure part-way leaves earlier collections populated.

use super::documents::create_document;
use crate::error::AppError;
use crate::schemas::{Member, Project, Team};
use crate::store::{Collection, DocumentStore};
use serde_json::Map;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedOutcome {
    AlreadyPresent,
    Seeded,
}

impl SeedOutcome {
    pub fn message(self) -> &'static str {
        match self {
            SeedOutcome::AlreadyPresent => "Data already present",
            SeedOutcome::Seeded => "Seeded sample data",
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn sample_team() -> Team {
    Team {
        name: "Your Team".into(),
        tagline: Some("We craft delightful products.".into()),
        about: Some("A cross\u{2011}functional team building modern, human\u{2011}centered software.".into()),
        website: None,
        github: None,
        x: None,
        linkedin: None,
    }
}

fn member(name: &str, role: &str, bio: &str, skills: &[&str]) -> Member {
    Member {
        name: name.into(),
        role: role.into(),
        bio: Some(bio.into()),
        avatar: None,
        github: None,
        linkedin: None,
        twitter: None,
        skills: strings(skills),
    }
}

pub fn sample_members() -> Vec<Member> {
    vec![
        member(
            "Alex Kim",
            "Product Designer",
            "Designing intuitive interfaces and systems.",
            &["Figma", "UX", "Design Systems"],
        ),
        member(
            "Sam Patel",
            "Full\u{2011}stack Engineer",
            "TypeScript enjoyer and API whisperer.",
            &["React", "FastAPI", "MongoDB"],
        ),
        member(
            "Jamie Lee",
            "ML Engineer",
            "Prototyping with LLMs and data pipelines.",
            &["Python", "LLMs", "MLOps"],
        ),
    ]
}

fn project(title: &str, summary: &str, members: &[&str], tags: &[&str]) -> Project {
    Project {
        title: title.into(),
        summary: summary.into(),
        cover: None,
        repo: None,
        demo: None,
        members: strings(members),
        tags: strings(tags),
    }
}

pub fn sample_projects() -> Vec<Project> {
    vec![
        project(
            "Project Nebula",
            "Interactive 3D landing with real\u{2011}time data.",
            &["Alex Kim", "Sam Patel"],
            &["React", "Spline", "WebGL"],
        ),
        project(
            "Atlas API",
            "Fast, typed API for internal services.",
            &["Sam Patel"],
            &["FastAPI", "OpenAPI", "Docker"],
        ),
    ]
}

async fn has_documents(store: &dyn DocumentStore, collection: Collection) -> Result<bool, AppError> {
    Ok(store.count(collection, &Map::new()).await? > 0)
}

/// Insert sample data into every empty collection. `None` store is a configuration error.
pub async fn seed_sample_data(store: Option<&dyn DocumentStore>) -> Result<SeedOutcome, AppError> {
    let store = store.ok_or_else(AppError::not_configured)?;

    let has_team = has_documents(store, Collection::Team).await?;
    let has_members = has_documents(store, Collection::Member).await?;
    let has_projects = has_documents(store, Collection::Project).await?;
    if has_team && has_members && has_projects {
        return Ok(SeedOutcome::AlreadyPresent);
    }

    if !has_team {
        create_document(store, &sample_team()).await?;
    }
    if !has_members {
        for m in sample_members() {
            create_document(store, &m).await?;
        }
    }
    if !has_projects {
        for p in sample_projects() {
            create_document(store, &p).await?;
        }
    }
    tracing::info!(
        has_team = has_team,
        has_members = has_members,
        has_projects = has_projects,
        "seeded sample data"
    );
    Ok(SeedOutcome::Seeded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::Validate;
    use crate::store::{Document, DocumentId, MemoryStore};
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Delegates to a `MemoryStore` but fails the insert numbered `fail_at` (1-based).
    struct FailingInserts<'a> {
        inner: &'a MemoryStore,
        fail_at: usize,
        inserts: AtomicUsize,
    }

    #[async_trait]
    impl DocumentStore for FailingInserts<'_> {
        async fn find(
            &self,
            collection: Collection,
            filter: &Map<String, Value>,
            limit: Option<u32>,
        ) -> Result<Vec<Document>, AppError> {
            self.inner.find(collection, filter, limit).await
        }

        async fn insert(&self, collection: Collection, fields: Map<String, Value>) -> Result<DocumentId, AppError> {
            if self.inserts.fetch_add(1, Ordering::SeqCst) + 1 == self.fail_at {
                return Err(AppError::Store("boom".into()));
            }
            self.inner.insert(collection, fields).await
        }

        async fn count(&self, collection: Collection, filter: &Map<String, Value>) -> Result<u64, AppError> {
            self.inner.count(collection, filter).await
        }

        fn name(&self) -> Result<String, AppError> {
            self.inner.name()
        }

        async fn list_collection_names(&self, limit: u32) -> Result<Vec<String>, AppError> {
            self.inner.list_collection_names(limit).await
        }
    }

    async fn counts(store: &MemoryStore) -> (u64, u64, u64) {
        let all = Map::new();
        (
            store.count(Collection::Team, &all).await.unwrap(),
            store.count(Collection::Member, &all).await.unwrap(),
            store.count(Collection::Project, &all).await.unwrap(),
        )
    }

    #[test]
    fn samples_are_valid() {
        assert!(sample_team().validate().is_ok());
        assert!(sample_members().iter().all(|m| m.validate().is_ok()));
        assert!(sample_projects().iter().all(|p| p.validate().is_ok()));
    }

    #[tokio::test]
    async fn seeds_once() {
        let store = MemoryStore::new();
        assert_eq!(seed_sample_data(Some(&store)).await.unwrap(), SeedOutcome::Seeded);
        assert_eq!(counts(&store).await, (1, 3, 2));
        assert_eq!(seed_sample_data(Some(&store)).await.unwrap(), SeedOutcome::AlreadyPresent);
        assert_eq!(counts(&store).await, (1, 3, 2));
    }

    #[tokio::test]
    async fn only_empty_collections_are_filled() {
        let store = MemoryStore::new();
        create_document(&store, &sample_team()).await.unwrap();
        assert_eq!(seed_sample_data(Some(&store)).await.unwrap(), SeedOutcome::Seeded);
        assert_eq!(counts(&store).await, (1, 3, 2));
    }

    #[tokio::test]
    async fn failure_midway_keeps_earlier_inserts() {
        let inner = MemoryStore::new();
        let store = FailingInserts {
            inner: &inner,
            fail_at: 3,
            inserts: AtomicUsize::new(0),
        };
        let err = seed_sample_data(Some(&store)).await.unwrap_err();
        assert_eq!(err.to_string(), "store: boom");
        assert_eq!(counts(&inner).await, (1, 1, 0));

        // A retry only fills what is still empty.
        assert_eq!(seed_sample_data(Some(&inner)).await.unwrap(), SeedOutcome::Seeded);
        assert_eq!(counts(&inner).await, (1, 1, 2));
    }

    #[tokio::test]
    async fn missing_store_is_config_error() {
        let err = seed_sample_data(None).await.unwrap_err();
        assert_eq!(err.code(), "config_error");
        assert_eq!(err.to_string(), "Database not configured");
    }
}
