//! Response envelopes. Every domain endpoint answers 200 with either its named payload
//! or an inline `error`; errors are logged here, at the boundary.

use crate::error::AppError;
use crate::service::SeedOutcome;
use axum::Json;
use serde::Serialize;
use serde_json::{json, Map, Value};

#[derive(Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SeedStatus {
    Ok,
    Error,
}

#[derive(Debug, Serialize)]
pub struct SeedBody {
    pub status: SeedStatus,
    pub message: String,
}

fn log_error(field: &str, err: &AppError) {
    tracing::warn!(field = field, code = err.code(), error = %err, "request failed");
}

/// `{field: object}`. A `NotFound` becomes an empty object; other errors become `{error}`.
pub fn one_or_error(field: &str, result: Result<Map<String, Value>, AppError>) -> Json<Value> {
    let body = match result {
        Ok(doc) => json!({ field: doc }),
        Err(e) if e.is_not_found() => json!({ field: {} }),
        Err(e) => {
            log_error(field, &e);
            json!({ "error": e.to_string() })
        }
    };
    Json(body)
}

/// `{field: [...]}`, or `{error, field: []}` so callers can always index `field`.
pub fn many_or_error(field: &str, result: Result<Vec<Map<String, Value>>, AppError>) -> Json<Value> {
    let body = match result {
        Ok(docs) => json!({ field: docs }),
        Err(e) => {
            log_error(field, &e);
            json!({ "error": e.to_string(), field: [] })
        }
    };
    Json(body)
}

pub fn seed_status(result: Result<SeedOutcome, AppError>) -> Json<SeedBody> {
    let body = match result {
        Ok(outcome) => SeedBody {
            status: SeedStatus::Ok,
            message: outcome.message().to_string(),
        },
        Err(e) => {
            log_error("seed", &e);
            SeedBody {
                status: SeedStatus::Error,
                message: e.to_string(),
            }
        }
    };
    Json(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_error_keeps_empty_field() {
        let Json(v) = many_or_error("members", Err(AppError::Store("timeout".into())));
        assert_eq!(v, json!({"error": "store: timeout", "members": []}));
    }

    #[test]
    fn not_found_is_empty_object() {
        let Json(v) = one_or_error("team", Err(AppError::NotFound("team".into())));
        assert_eq!(v, json!({"team": {}}));
    }

    #[test]
    fn single_error_has_no_payload_field() {
        let Json(v) = one_or_error("team", Err(AppError::not_configured()));
        assert_eq!(v, json!({"error": "Database not configured"}));
    }

    #[test]
    fn seed_status_renders_lowercase() {
        let Json(body) = seed_status(Ok(SeedOutcome::Seeded));
        let v = serde_json::to_value(body).unwrap();
        assert_eq!(v, json!({"status": "ok", "message": "Seeded sample data"}));
    }
}
