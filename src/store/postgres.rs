//! PostgreSQL-backed document store. Each collection is a table of JSONB payloads inside a
//! schema named after the configured database name.

use super::{Collection, Document, DocumentId, DocumentStore};
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::{Map, Value};
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
    schema: String,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool, schema: impl Into<String>) -> Self {
        PgDocumentStore {
            pool,
            schema: schema.into(),
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn table(&self, collection: Collection) -> String {
        format!("{}.{}", quote_ident(&self.schema), quote_ident(collection.name()))
    }

    /// Create the schema and one table per collection if they do not exist.
    pub async fn ensure_collections(&self) -> Result<(), AppError> {
        sqlx::query(&format!("CREATE SCHEMA IF NOT EXISTS {}", quote_ident(&self.schema)))
            .execute(&self.pool)
            .await?;

        for collection in Collection::ALL {
            let ddl = format!(
                r#"
                CREATE TABLE IF NOT EXISTS {} (
                    id UUID PRIMARY KEY,
                    payload JSONB NOT NULL,
                    created_at TIMESTAMPTZ NOT NULL DEFAULT clock_timestamp()
                )
                "#,
                self.table(collection)
            );
            sqlx::query(&ddl).execute(&self.pool).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn find(
        &self,
        collection: Collection,
        filter: &Map<String, Value>,
        limit: Option<u32>,
    ) -> Result<Vec<Document>, AppError> {
        let mut sql = format!(
            "SELECT id, payload FROM {} WHERE payload @> $1 ORDER BY created_at, id",
            self.table(collection)
        );
        if limit.is_some() {
            sql.push_str(" LIMIT $2");
        }
        tracing::debug!(sql = %sql, filter = ?filter, limit = ?limit, "query");

        let mut query = sqlx::query_as::<_, (Uuid, Value)>(&sql).bind(Value::Object(filter.clone()));
        if let Some(n) = limit {
            query = query.bind(i64::from(n));
        }
        let rows = query.fetch_all(&self.pool).await?;

        rows.into_iter()
            .map(|(id, payload)| match payload {
                Value::Object(fields) => Ok(Document {
                    id: Some(DocumentId::from_uuid(id)),
                    fields,
                }),
                other => Err(AppError::Store(format!(
                    "{} document {} is not an object: {}",
                    collection, id, other
                ))),
            })
            .collect()
    }

    async fn insert(&self, collection: Collection, fields: Map<String, Value>) -> Result<DocumentId, AppError> {
        let id = DocumentId::new();
        let sql = format!("INSERT INTO {} (id, payload) VALUES ($1, $2)", self.table(collection));
        tracing::debug!(sql = %sql, id = %id, "query");
        sqlx::query(&sql)
            .bind(*id.as_uuid())
            .bind(Value::Object(fields))
            .execute(&self.pool)
            .await?;
        Ok(id)
    }

    async fn count(&self, collection: Collection, filter: &Map<String, Value>) -> Result<u64, AppError> {
        let sql = format!("SELECT COUNT(*) FROM {} WHERE payload @> $1", self.table(collection));
        tracing::debug!(sql = %sql, filter = ?filter, "query");
        let (n,): (i64,) = sqlx::query_as(&sql)
            .bind(Value::Object(filter.clone()))
            .fetch_one(&self.pool)
            .await?;
        Ok(u64::try_from(n).unwrap_or(0))
    }

    fn name(&self) -> Result<String, AppError> {
        Ok(self.schema.clone())
    }

    async fn list_collection_names(&self, limit: u32) -> Result<Vec<String>, AppError> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT table_name::text FROM information_schema.tables WHERE table_schema = $1 ORDER BY table_name LIMIT $2",
        )
        .bind(&self.schema)
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(|(name,)| name).collect())
    }
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|e| AppError::Config(format!("invalid DATABASE_URL: {}", e)))?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Returns (admin URL on the `postgres` database, target database name). A URL without a
/// path yields an empty name.
fn parse_db_name_from_url(database_url: &str) -> Result<(String, String), AppError> {
    let mut url = url::Url::parse(database_url)
        .map_err(|e| AppError::Config(format!("invalid DATABASE_URL: {}", e)))?;
    let db_name = url.path().trim_start_matches('/').trim().to_string();
    url.set_path("/postgres");
    Ok((url.to_string(), db_name))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
