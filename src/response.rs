//! Success response helpers. Bodies are the entity or collection itself, no envelope.

use crate::error::AppError;
use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct CreatedId {
    pub id: i32,
}

pub fn success<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn created(id: i32) -> (StatusCode, Json<CreatedId>) {
    (StatusCode::CREATED, Json(CreatedId { id }))
}

/// 200 with the record, or `AppError::NotFound` naming what was looked up.
pub fn found<T: Serialize>(
    data: Option<T>,
    what: impl FnOnce() -> String,
) -> Result<(StatusCode, Json<T>), AppError> {
    data.map(success).ok_or_else(|| AppError::NotFound(what()))
}
