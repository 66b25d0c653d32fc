//! Document access helpers: shape raw documents for the wire, fetch, and create.

use super::validation::Validate;
use crate::error::AppError;
use crate::schemas::Schema;
use crate::store::{Collection, Document, DocumentStore, INTERNAL_ID_FIELD};
use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Value};

/// Replace the internal identifier with a string `id` field. Empty documents pass through unchanged.
pub fn shape_document(doc: Document) -> Map<String, Value> {
    if doc.is_empty() {
        return doc.fields;
    }
    let Document { id, mut fields } = doc;
    let internal = fields.remove(INTERNAL_ID_FIELD);
    let id = id.map(|id| id.to_string()).or_else(|| internal.map(id_string));
    if let Some(id) = id {
        fields.insert("id".into(), Value::String(id));
    }
    fields
}

pub fn shape_documents(docs: Vec<Document>) -> Vec<Map<String, Value>> {
    docs.into_iter().map(shape_document).collect()
}

fn id_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

pub async fn get_documents(
    store: &dyn DocumentStore,
    collection: Collection,
    filter: &Map<String, Value>,
    limit: Option<u32>,
) -> Result<Vec<Document>, AppError> {
    store.find(collection, filter, limit).await
}

/// First document of a collection by the store's natural order. No document is `NotFound`.
pub async fn find_one(store: &dyn DocumentStore, collection: Collection) -> Result<Document, AppError> {
    store
        .find(collection, &Map::new(), Some(1))
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| AppError::NotFound(collection.name().to_string()))
}

/// Validate, stamp timestamps, and insert. Returns the new id in its string form.
pub async fn create_document<T>(store: &dyn DocumentStore, doc: &T) -> Result<String, AppError>
where
    T: Schema + Validate,
{
    doc.validate()?;
    let mut fields = match serde_json::to_value(doc)? {
        Value::Object(m) => m,
        _ => return Err(AppError::Validation(format!("{} document must be an object", T::COLLECTION))),
    };
    let now = Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true));
    fields.insert("created_at".into(), now.clone());
    fields.insert("updated_at".into(), now);
    let collection = T::COLLECTION;
    let id = store.insert(collection, fields).await?;
    tracing::debug!(collection = %collection, id = %id, "document created");
    Ok(id.to_string())
}
